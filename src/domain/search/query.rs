//! Structured search queries
//!
//! Queries are a boolean predicate tree the backend adapter translates into
//! its own query language. Nested-array containment ("does the actors array
//! contain person X") is expressed as a capability here and pushed down to
//! the backend rather than filtered in the service layer.

use serde::{Deserialize, Serialize};

/// A structured boolean query predicate
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    /// Matches every document in the collection
    MatchAll,
    /// Matches documents whose nested array at `path` holds an object with
    /// `field` equal to `value` (e.g., `actors[].id == "p1"`)
    NestedContains {
        path: String,
        field: String,
        value: String,
    },
    /// Matches documents whose flat array at `path` contains `value`
    Contains { path: String, value: String },
    /// Free-text match across the given fields
    Text { fields: Vec<String>, value: String },
    /// All sub-clauses must match
    And(Vec<SearchQuery>),
    /// At least one sub-clause must match
    Or(Vec<SearchQuery>),
}

impl SearchQuery {
    /// Nested object-array containment clause
    pub fn nested_contains(
        path: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::NestedContains {
            path: path.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Flat array containment clause
    pub fn contains(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Contains {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Free-text clause over one or more fields
    pub fn text(fields: Vec<impl Into<String>>, value: impl Into<String>) -> Self {
        Self::Text {
            fields: fields.into_iter().map(Into::into).collect(),
            value: value.into(),
        }
    }
}

/// Closed set of named sort orders; absence means backend-default order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending by rating
    #[serde(rename = "rating")]
    RatingAsc,
    /// Descending by rating
    #[serde(rename = "-rating")]
    RatingDesc,
}

impl std::str::FromStr for SortOrder {
    type Err = crate::domain::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(Self::RatingAsc),
            "-rating" => Ok(Self::RatingDesc),
            _ => Err(crate::domain::DomainError::validation(format!(
                "Unknown sort order: {}. Valid orders: rating, -rating",
                s
            ))),
        }
    }
}

/// Page-size / page-number pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub size: u32,
    pub number: u32,
}

impl Page {
    pub const DEFAULT_SIZE: u32 = 50;

    pub fn new(size: u32, number: u32) -> Self {
        Self { size, number }
    }

    /// Zero-based offset into the full result set; page numbers below 1
    /// clamp to the first page
    pub fn offset(&self) -> u32 {
        if self.number > 1 {
            (self.number - 1) * self.size
        } else {
            0
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            number: 1,
        }
    }
}

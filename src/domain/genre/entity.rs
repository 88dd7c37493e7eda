//! Genre entity

use serde::{Deserialize, Serialize};

/// A genre document as stored in the search index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_genre_description_is_optional() {
        let genre: Genre = serde_json::from_value(json!({
            "id": "g1",
            "name": "Drama"
        }))
        .unwrap();

        assert_eq!(genre.name, "Drama");
        assert!(genre.description.is_none());
    }
}

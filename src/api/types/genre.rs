//! Genre response models

use serde::Serialize;

use crate::domain::genre::Genre;

#[derive(Debug, Clone, Serialize)]
pub struct ApiGenre {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiGenre {
    pub fn from_domain(genre: &Genre) -> Self {
        Self {
            id: genre.id.clone(),
            name: genre.name.clone(),
            description: genre.description.clone(),
        }
    }
}

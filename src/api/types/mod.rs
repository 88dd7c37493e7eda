//! API request and response types

pub mod error;
pub mod film;
pub mod genre;
pub mod pagination;
pub mod person;

pub use error::{ApiError, ApiErrorResponse};
pub use film::{ApiFilm, ApiFilmListItem, ApiPersonRef, ListFilmsQuery, SearchQueryParams};
pub use genre::ApiGenre;
pub use pagination::PaginatedResponse;
pub use person::{ApiFilmSummary, ApiPerson, ApiRoleFilms};

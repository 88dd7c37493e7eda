//! Domain layer - core business logic and entities

pub mod cache;
pub mod error;
pub mod film;
pub mod genre;
pub mod person;
pub mod search;

pub use cache::{Cache, CacheExt, CacheKeyParams, DefaultKeyGenerator};
pub use error::DomainError;
pub use film::{Film, Paginated, PersonRef};
pub use genre::Genre;
pub use person::{FilmSummary, Person, PersonWithFilms, Role, RoleFilms};
pub use search::{Page, SearchBackend, SearchBackendExt, SearchPage, SearchQuery, SortOrder};

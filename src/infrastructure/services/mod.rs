//! Domain read services built on the cache-aside engine

mod cache_aside;
mod film_service;
mod genre_service;
mod person_service;

pub use cache_aside::CacheAside;
pub use film_service::{FilmService, FilmServiceConfig, ListFilmsParams};
pub use genre_service::{GenreService, GenreServiceConfig};
pub use person_service::{PersonService, PersonServiceConfig};

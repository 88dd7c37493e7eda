//! Person domain

mod entity;

pub use entity::{FilmSummary, Person, PersonWithFilms, Role, RoleFilms};

//! Film domain

mod entity;

pub use entity::{Film, Paginated, PersonRef};

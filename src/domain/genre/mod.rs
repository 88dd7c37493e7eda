//! Genre domain

mod entity;

pub use entity::Genre;

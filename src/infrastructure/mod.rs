pub mod cache;
pub mod logging;
pub mod search;
pub mod services;

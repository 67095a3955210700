//! src/routes/subscribers/mod.rs

mod delete;
mod get;

pub use delete::*;
pub use get::subscribers;

//! src/routes/pages/mod.rs

mod error;
mod privacy;

pub use error::error_page;
pub use privacy::privacy;

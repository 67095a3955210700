//! src/routes/mod.rs

mod health_check;
mod pages;
mod subscribers;
mod subscriptions;

pub use health_check::*;
pub use pages::*;
pub use subscribers::*;
pub use subscriptions::*;

//! src/routes/subscriptions/mod.rs

mod get;
mod post;

pub use get::subscription_form;
pub use post::*;

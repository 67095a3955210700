//! src/domain/mod.rs

mod anti_forgery_token;
mod subscriber;
mod subscriber_email;

pub use anti_forgery_token::AntiForgeryToken;
pub use subscriber::Subscriber;
pub use subscriber_email::SubscriberEmail;

/// Validation error for domain data
#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Email address is required.")]
    MissingEmail,
    #[error("Invalid email format! Correct format: name@example.com")]
    InvalidEmail,
    #[error("`{0}` is not a valid anti-forgery token.")]
    InvalidAntiForgeryToken(String),
}

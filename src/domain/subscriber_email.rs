//! src/domain/subscriber_email.rs

use crate::domain::ValidationError;
use validator::ValidateEmail;

#[derive(Debug, Clone)]
pub struct SubscriberEmail(String);

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl SubscriberEmail {
    /// parse string as email, keeping the letter case the subscriber typed
    pub fn parse(s: String) -> Result<SubscriberEmail, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if s.validate_email() {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }

    /// case-insensitive comparison used for the duplicate check
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

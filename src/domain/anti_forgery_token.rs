//! src/domain/anti_forgery_token.rs

use crate::domain::ValidationError;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

const TOKEN_LENGTH: usize = 32;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AntiForgeryToken(String);

impl AsRef<str> for AntiForgeryToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AntiForgeryToken {
    /// Generate a random 32-characters-long case-sensitive token.
    pub fn generate() -> Self {
        let mut rng = thread_rng();
        Self(
            std::iter::repeat_with(|| rng.sample(Alphanumeric))
                .map(char::from)
                .take(TOKEN_LENGTH)
                .collect(),
        )
    }

    /// parse string as token
    pub fn parse(s: String) -> Result<AntiForgeryToken, ValidationError> {
        if s.chars().any(|c| !c.is_ascii_alphanumeric()) || s.chars().count() != TOKEN_LENGTH {
            Err(ValidationError::InvalidAntiForgeryToken(s))
        } else {
            Ok(Self(s))
        }
    }
}

//! src/domain/subscriber.rs

use crate::domain::SubscriberEmail;
use chrono::{DateTime, Utc};

/// A stored subscription. Never updated after creation.
#[derive(Debug, Clone)]
pub struct Subscriber {
    pub email: SubscriberEmail,
    pub subscribed_at: DateTime<Utc>,
}

impl Subscriber {
    pub fn new(email: SubscriberEmail, subscribed_at: DateTime<Utc>) -> Self {
        Self {
            email,
            subscribed_at,
        }
    }

    /// new subscriber stamped with the current time
    pub fn now(email: SubscriberEmail) -> Self {
        Self::new(email, Utc::now())
    }
}

//! src/store.rs

use crate::domain::{Subscriber, SubscriberEmail};
use tokio::sync::RwLock;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("{0} is already subscribed.")]
    AlreadySubscribed(String),
}

/// In-memory subscriber list, shared by all workers for the lifetime of the process.
#[derive(Debug, Default)]
pub struct SubscriberStore {
    subscribers: RwLock<Vec<Subscriber>>,
}

impl SubscriberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new subscriber stamped with the current time.
    #[tracing::instrument(name = "Adding subscriber to store", skip_all, fields(subscriber_email = %email))]
    pub async fn add(&self, email: SubscriberEmail) -> Result<Subscriber, StoreError> {
        let subscriber = Subscriber::now(email);
        self.insert(subscriber.clone()).await?;
        Ok(subscriber)
    }

    /// Duplicate check and append happen under the same write guard.
    pub async fn insert(&self, subscriber: Subscriber) -> Result<(), StoreError> {
        let mut subscribers = self.subscribers.write().await;
        if subscribers
            .iter()
            .any(|s| s.email.matches(subscriber.email.as_ref()))
        {
            return Err(StoreError::AlreadySubscribed(
                subscriber.email.as_ref().to_owned(),
            ));
        }
        subscribers.push(subscriber);
        Ok(())
    }

    /// Snapshot of all subscribers, most recent first.
    pub async fn list(&self) -> Vec<Subscriber> {
        let subscribers = self.subscribers.read().await;
        // reversed before the stable sort, so equal timestamps list the latest insert first
        let mut listing: Vec<Subscriber> = subscribers.iter().rev().cloned().collect();
        listing.sort_by(|a, b| b.subscribed_at.cmp(&a.subscribed_at));
        listing
    }

    /// Remove the subscriber matching `email` case-insensitively, if any.
    #[tracing::instrument(name = "Removing subscriber from store", skip(self))]
    pub async fn remove(&self, email: &str) -> Option<Subscriber> {
        let mut subscribers = self.subscribers.write().await;
        let index = subscribers.iter().position(|s| s.email.matches(email))?;
        Some(subscribers.remove(index))
    }

    pub async fn len(&self) -> usize {
        self.subscribers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.subscribers.read().await.is_empty()
    }
}

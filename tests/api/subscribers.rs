//! tests/api/subscribers.rs

use crate::helpers::{assert_is_redirect_to, listed_emails, spawn_app};
use chrono::{Duration, Utc};
use newsletter_signup::domain::{Subscriber, SubscriberEmail};

#[tokio::test]
async fn empty_store_shows_an_empty_listing() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app.get_response_from_url("/Subscribers").await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("No subscribers yet."));
    assert!(listed_emails(&html_page).is_empty());
}

#[tokio::test]
async fn listing_is_ordered_by_subscription_time_descending() {
    // Arrange
    let test_app = spawn_app().await;
    let now = Utc::now();
    let entries = [
        ("two-days@example.com", now - Duration::days(2)),
        ("just-now@example.com", now),
        ("an-hour@example.com", now - Duration::hours(1)),
    ];
    for (email, subscribed_at) in entries {
        let email = SubscriberEmail::parse(email.to_owned()).unwrap();
        test_app
            .store
            .insert(Subscriber::new(email, subscribed_at))
            .await
            .unwrap();
    }

    // Act
    let html_page = test_app.get_subscribers_html().await;

    // Assert
    assert_eq!(
        listed_emails(&html_page),
        vec![
            "just-now@example.com",
            "an-hour@example.com",
            "two-days@example.com"
        ]
    );
    assert!(html_page.contains("3 subscriber(s)"));
}

#[tokio::test]
async fn deleting_an_existing_email_removes_exactly_one_entry() {
    // Arrange
    let test_app = spawn_app().await;
    test_app.post_subscribe("ursula@example.com").await;
    test_app.post_subscribe("octavia@example.com").await;

    // Act - Part 1 - Delete with different letter case
    let response = test_app.post_delete_subscriber("Ursula@Example.com").await;

    // Assert
    assert_is_redirect_to(&response, "/Subscribers");
    assert_eq!(test_app.store.len().await, 1);

    // Act - Part 2 - Follow the redirect
    let html_page = test_app.get_subscribers_html().await;
    assert!(html_page.contains("<i>Ursula@Example.com has been removed.</i>"));
    assert_eq!(listed_emails(&html_page), vec!["octavia@example.com"]);
}

#[tokio::test]
async fn deleting_an_unknown_email_leaves_the_store_unchanged() {
    // Arrange
    let test_app = spawn_app().await;
    test_app.post_subscribe("ursula@example.com").await;

    // Act
    let response = test_app.post_delete_subscriber("nobody@example.com").await;

    // Assert
    assert_is_redirect_to(&response, "/Subscribers");
    assert_eq!(test_app.store.len().await, 1);
    let html_page = test_app.get_subscribers_html().await;
    assert!(!html_page.contains("has been removed."));
    assert_eq!(listed_emails(&html_page), vec!["ursula@example.com"]);
}

#[tokio::test]
async fn deleting_without_anti_forgery_token_is_rejected() {
    // Arrange
    let test_app = spawn_app().await;
    test_app.post_subscribe("ursula@example.com").await;

    // Act
    let response = test_app
        .post_delete_subscriber_form(&[("email", "ursula@example.com")])
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(test_app.store.len().await, 1);
}

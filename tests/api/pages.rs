//! tests/api/pages.rs

use crate::helpers::spawn_app;

#[tokio::test]
async fn privacy_page_is_served() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app.get_response_from_url("/Privacy").await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains("<h1>Privacy Policy</h1>"));
}

#[tokio::test]
async fn error_page_shows_a_request_id_and_is_not_cached() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app.get_response_from_url("/Error").await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let cache_control = response
        .headers()
        .get("Cache-Control")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    assert!(cache_control.contains("no-store"));
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("An error occurred while processing your request."));
    assert!(!html_page.contains(r#"<code id="request-id"></code>"#));
}

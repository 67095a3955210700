//! src/utils.rs

use crate::error::SignupResult;
use actix_web::http::{header::LOCATION, StatusCode};
use actix_web::HttpResponse;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use anyhow::Context;
use askama_actix::Template;

/// forward to other location
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

/// render template with a status other than 200
pub fn render_with_status<T: Template>(
    template: &T,
    status: StatusCode,
) -> SignupResult<HttpResponse> {
    let body = template
        .render()
        .context("Failed to render html template.")?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// collect the contents of incoming flash messages for rendering
pub fn flash_lines(flash_messages: &IncomingFlashMessages) -> Vec<FlashLine> {
    flash_messages
        .iter()
        .map(|m| FlashLine {
            level: match m.level() {
                Level::Error => "error",
                Level::Warning => "warning",
                Level::Success => "success",
                _ => "info",
            },
            content: m.content().to_string(),
        })
        .collect()
}

/// A flash message as shown in templates.
pub struct FlashLine {
    pub level: &'static str,
    pub content: String,
}

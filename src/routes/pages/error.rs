//! src/routes/pages/error.rs

use crate::error::SignupResult;
use crate::utils::render_with_status;
use actix_web::http::header::{HeaderValue, CACHE_CONTROL};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use askama_actix::Template;
use tracing_actix_web::RequestId;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    request_id: String,
}

pub async fn error_page(request_id: RequestId) -> SignupResult<HttpResponse> {
    let template = ErrorTemplate {
        request_id: request_id.to_string(),
    };
    let mut response = render_with_status(&template, StatusCode::OK)?;
    // never cache
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-store, no-cache"));
    Ok(response)
}

//! src/routes/pages/privacy.rs

use actix_web::Responder;
use askama_actix::Template;

#[derive(Template)]
#[template(path = "privacy.html")]
struct PrivacyTemplate {}

pub async fn privacy() -> impl Responder {
    PrivacyTemplate {}
}

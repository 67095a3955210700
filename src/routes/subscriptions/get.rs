//! src/routes/subscriptions/get.rs

use crate::error::SignupResult;
use crate::session_state::TypedSession;
use crate::utils::{flash_lines, FlashLine};
use actix_web::Responder;
use actix_web_flash_messages::IncomingFlashMessages;
use askama_actix::Template;

#[derive(Template)]
#[template(path = "subscriptions.html")]
pub(super) struct SubscriptionFormTemplate {
    pub(super) flash_messages: Vec<FlashLine>,
    pub(super) email: String,
    pub(super) field_error: Option<String>,
    pub(super) anti_forgery_token: String,
}

pub async fn subscription_form(
    flash_messages: IncomingFlashMessages,
    session: TypedSession,
) -> SignupResult<impl Responder> {
    Ok(SubscriptionFormTemplate {
        flash_messages: flash_lines(&flash_messages),
        email: String::new(),
        field_error: None,
        anti_forgery_token: session.anti_forgery_token()?.as_ref().to_owned(),
    })
}

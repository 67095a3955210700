//! src/routes/subscribers/get.rs

use crate::domain::Subscriber;
use crate::error::SignupResult;
use crate::session_state::TypedSession;
use crate::store::SubscriberStore;
use crate::utils::{flash_lines, FlashLine};
use actix_web::{web, Responder};
use actix_web_flash_messages::IncomingFlashMessages;
use askama_actix::Template;

#[derive(Template)]
#[template(path = "subscribers.html")]
struct SubscribersTemplate {
    flash_messages: Vec<FlashLine>,
    subscribers: Vec<Subscriber>,
    anti_forgery_token: String,
}

#[tracing::instrument(name = "Listing subscribers", skip_all)]
pub async fn subscribers(
    flash_messages: IncomingFlashMessages,
    store: web::Data<SubscriberStore>,
    session: TypedSession,
) -> SignupResult<impl Responder> {
    Ok(SubscribersTemplate {
        flash_messages: flash_lines(&flash_messages),
        subscribers: store.list().await,
        anti_forgery_token: session.anti_forgery_token()?.as_ref().to_owned(),
    })
}

//! src/routes/subscribers/delete.rs

use crate::error::SignupResult;
use crate::session_state::TypedSession;
use crate::store::SubscriberStore;
use crate::utils::see_other;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;

#[derive(serde::Deserialize)]
pub struct DeleteFormData {
    #[serde(default)]
    email: String,
    #[serde(default)]
    csrf_token: String,
}

#[tracing::instrument(
    name = "Deleting a subscriber.",
    skip(form, store, session),
    fields(subscriber_email = %form.email)
)]
pub async fn delete_subscriber(
    form: web::Form<DeleteFormData>,
    store: web::Data<SubscriberStore>,
    session: TypedSession,
) -> SignupResult<HttpResponse> {
    session.verify_anti_forgery_token(&form.csrf_token)?;
    // unknown addresses are a silent no-op
    if store.remove(&form.email).await.is_some() {
        FlashMessage::info(format!("{} has been removed.", form.email)).send();
    }
    Ok(see_other("/Subscribers"))
}

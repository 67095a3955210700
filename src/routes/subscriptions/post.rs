//! src/routes/subscriptions/post.rs

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;

use super::get::SubscriptionFormTemplate;
use crate::domain::SubscriberEmail;
use crate::error::SignupResult;
use crate::session_state::TypedSession;
use crate::store::SubscriberStore;
use crate::utils::{render_with_status, see_other};

#[derive(serde::Deserialize)]
pub struct FormData {
    // a missing field is reported like an empty one
    #[serde(rename = "Email", default)]
    email: String,
    #[serde(default)]
    csrf_token: String,
}

#[tracing::instrument(
    name = "Adding a new subscriber.",
    skip(form, store, session),
    fields(subscriber_email = %form.email)
)]
pub async fn subscribe(
    form: web::Form<FormData>,
    store: web::Data<SubscriberStore>,
    session: TypedSession,
) -> SignupResult<HttpResponse> {
    session.verify_anti_forgery_token(&form.csrf_token)?;
    let FormData { email, .. } = form.into_inner();

    let subscriber_email = match SubscriberEmail::parse(email.clone()) {
        Ok(subscriber_email) => subscriber_email,
        Err(e) => {
            tracing::info!(error.message = %e, "Subscription form rejected");
            let template = SubscriptionFormTemplate {
                flash_messages: Vec::new(),
                email,
                field_error: Some(e.to_string()),
                anti_forgery_token: session.anti_forgery_token()?.as_ref().to_owned(),
            };
            return render_with_status(&template, StatusCode::BAD_REQUEST);
        }
    };

    match store.add(subscriber_email).await {
        Ok(subscriber) => {
            FlashMessage::success(format!(
                "Thank you! {} has been subscribed successfully.",
                subscriber.email
            ))
            .send();
        }
        Err(e) => {
            tracing::info!(error.message = %e, "Duplicate subscription rejected");
            FlashMessage::error(e.to_string()).send();
        }
    }
    Ok(see_other("/"))
}

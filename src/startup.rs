//! src/startup.rs

use crate::configuration::Settings;
use crate::error::SignupResult;
use crate::routes::{
    delete_subscriber, error_page, health_check, privacy, subscribe, subscribers,
    subscription_form,
};
use crate::store::SubscriberStore;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use anyhow::Context;
use secrecy::{ExposeSecret, Secret};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    store: web::Data<SubscriberStore>,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> SignupResult<Self> {
        let address = configuration.application.address();
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind to {}.", address))?;
        let port = listener
            .local_addr()
            .context("Failed to read the local address of the listener.")?
            .port();
        // lives as long as the process, shared by all workers
        let store = web::Data::new(SubscriberStore::new());
        let server = run(
            listener,
            store.clone(),
            configuration.application.hmac_secret,
        )?;
        tracing::info!("Listening on port {}", port);
        Ok(Self {
            port,
            store,
            server,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// handle to the subscriber store served by this application
    pub fn store(&self) -> web::Data<SubscriberStore> {
        self.store.clone()
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    store: web::Data<SubscriberStore>,
    hmac_secret: Secret<String>,
) -> SignupResult<Server> {
    let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes())
        .context("The hmac secret must be at least 64 bytes long.")?;
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                secret_key.clone(),
            ))
            .wrap(TracingLogger::default())
            .route("/", web::get().to(subscription_form))
            .route("/Subscribe", web::post().to(subscribe))
            .route("/Subscribers", web::get().to(subscribers))
            .route("/DeleteSubscriber", web::post().to(delete_subscriber))
            .route("/Privacy", web::get().to(privacy))
            .route("/Error", web::get().to(error_page))
            .route("/health_check", web::get().to(health_check))
            .app_data(store.clone())
    })
    .listen(listener)
    .context("Failed to listen on the bound address.")?
    .run();
    Ok(server)
}

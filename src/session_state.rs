//! src/session_state.rs

use crate::domain::AntiForgeryToken;
use crate::error::{error_chain_fmt, Error, SignupResult};
use actix_session::{Session, SessionExt};
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};

#[derive(thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    SessionInsertError(#[from] actix_session::SessionInsertError),
    #[error(transparent)]
    SessionGetError(#[from] actix_session::SessionGetError),
}

impl std::fmt::Debug for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct TypedSession(Session);

impl TypedSession {
    const ANTI_FORGERY_TOKEN_KEY: &'static str = "anti_forgery_token";

    /// Token of this session, created on first use.
    pub fn anti_forgery_token(&self) -> SignupResult<AntiForgeryToken> {
        if let Some(token) = self.get_anti_forgery_token()? {
            return Ok(token);
        }
        let token = AntiForgeryToken::generate();
        self.0
            .insert(Self::ANTI_FORGERY_TOKEN_KEY, &token)
            .map_err(SessionError::from)?;
        Ok(token)
    }

    /// Reject posts whose token is missing or differs from the one in the session.
    pub fn verify_anti_forgery_token(&self, submitted: &str) -> SignupResult<()> {
        let submitted = AntiForgeryToken::parse(submitted.to_owned()).map_err(|e| {
            tracing::info!(error.message = %e, "Malformed anti-forgery token");
            Error::AntiForgeryError
        })?;
        match self.get_anti_forgery_token()? {
            Some(expected) if expected == submitted => Ok(()),
            _ => Err(Error::AntiForgeryError),
        }
    }

    fn get_anti_forgery_token(&self) -> SignupResult<Option<AntiForgeryToken>> {
        self.0
            .get(Self::ANTI_FORGERY_TOKEN_KEY)
            .map_err(SessionError::from)
            .map_err(Error::from)
    }
}

impl FromRequest for TypedSession {
    // Same error as the `FromRequest` implementation of `Session`.
    type Error = <Session as FromRequest>::Error;
    // No I/O happens here, so `Ready` is enough.
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}

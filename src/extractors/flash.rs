//! One-shot flash messages carried across a redirect in a signed cookie.
//!
//! A mutating handler queues a message and returns a redirect; the next page view takes every
//! queued message and expires the cookie. Cookies whose signature does not verify are ignored.

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponseParts, ResponseParts},
};
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "_flash";

/// Most messages kept waiting. Older ones are dropped first so the cookie stays well under
/// the browser's size limit.
pub const MAX_QUEUED: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Danger,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: Level,
    pub message: String,
}

impl FlashMessage {
    pub fn danger(message: impl Into<String>) -> Self {
        FlashMessage {
            level: Level::Danger,
            message: message.into(),
        }
    }
}

/// Cookie signing key derived from the configured secret. SHA-512 gives the 64 bytes
/// `Key` needs whatever the secret's length.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Extractor and response part for the flash cookie.
pub struct Flash {
    jar: SignedCookieJar,
}

impl Flash {
    pub fn new(jar: SignedCookieJar) -> Self {
        Flash { jar }
    }

    pub fn success(self, message: impl Into<String>) -> Self {
        self.push(Level::Success, message)
    }

    pub fn danger(self, message: impl Into<String>) -> Self {
        self.push(Level::Danger, message)
    }

    /// Queue a message behind any already waiting for the next page view, keeping at most
    /// [`MAX_QUEUED`].
    pub fn push(self, level: Level, message: impl Into<String>) -> Self {
        let mut queued = self.peek();
        queued.push(FlashMessage {
            level,
            message: message.into(),
        });
        if queued.len() > MAX_QUEUED {
            queued.drain(..queued.len() - MAX_QUEUED);
        }
        let value = match serde_json::to_string(&queued) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "dropping flash message");
                return self;
            }
        };
        let cookie = Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        Flash {
            jar: self.jar.add(cookie),
        }
    }

    /// Queued messages, without consuming them.
    pub fn peek(&self) -> Vec<FlashMessage> {
        self.jar
            .get(FLASH_COOKIE)
            .and_then(|c| serde_json::from_str(c.value()).ok())
            .unwrap_or_default()
    }

    /// Remove and return the queued messages. The cookie is expired in the response.
    pub fn take(self) -> (Self, Vec<FlashMessage>) {
        if self.jar.get(FLASH_COOKIE).is_none() {
            return (self, Vec::new());
        }
        let messages = self.peek();
        let jar = self.jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
        (Flash { jar }, messages)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::<Key>::from_request_parts(parts, state).await?;
        Ok(Flash { jar })
    }
}

impl IntoResponseParts for Flash {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.jar.into_response_parts(res)
    }
}

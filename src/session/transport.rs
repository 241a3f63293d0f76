//! Remote session endpoint client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::core::errors::TripError;
use crate::domain::session::PublicUserRecord;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed session payload: {0}")]
    Payload(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a successful session lookup.
pub enum SessionLookup {
    Authenticated(PublicUserRecord),
    /// The endpoint explicitly reported no signed-in user. Not an error.
    Anonymous,
}

/// Seam between the session cache and whatever carries the two remote calls.
#[async_trait]
pub trait SessionTransport: Send + Sync {
    /// Queries the session identity endpoint. No retry on failure.
    async fn fetch_session(&self) -> Result<SessionLookup, TransportError>;

    /// Issues the remote logout call. Success/failure signal only.
    async fn logout(&self) -> Result<(), TransportError>;
}

/// HTTP implementation speaking the reference endpoint conventions.
pub struct HttpSessionTransport {
    client: Client,
    base_url: String,
}

impl HttpSessionTransport {
    pub fn new(config: &Config) -> Result<Self, TripError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| {
                TripError::ConfigError(format!("failed to create HTTP client: {err}"))
            })?;
        Ok(Self {
            client,
            base_url: config.session_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn session_url(&self) -> String {
        format!("{}/session", self.base_url)
    }

    fn logout_url(&self) -> String {
        format!("{}/session/logout", self.base_url)
    }
}

#[async_trait]
impl SessionTransport for HttpSessionTransport {
    async fn fetch_session(&self) -> Result<SessionLookup, TransportError> {
        let response = self
            .client
            .get(self.session_url())
            .send()
            .await
            .map_err(|err| TransportError::Request(err.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let user: PublicUserRecord = response
                    .json()
                    .await
                    .map_err(|err| TransportError::Payload(err.to_string()))?;
                debug!("session lookup resolved for {}", user.email);
                Ok(SessionLookup::Authenticated(user))
            }
            // 401 is the designed "no session" signal, not a failure.
            StatusCode::UNAUTHORIZED => Ok(SessionLookup::Anonymous),
            status => Err(TransportError::Status(status.as_u16())),
        }
    }

    async fn logout(&self) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.logout_url())
            .send()
            .await
            .map_err(|err| TransportError::Request(err.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(TransportError::Status(response.status().as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_urls_from_trimmed_base() {
        let config = Config {
            session_base_url: "https://plans.example.com/api/".into(),
            ..Config::default()
        };
        let transport = HttpSessionTransport::new(&config).unwrap();
        assert_eq!(
            transport.session_url(),
            "https://plans.example.com/api/session"
        );
        assert_eq!(
            transport.logout_url(),
            "https://plans.example.com/api/session/logout"
        );
    }
}

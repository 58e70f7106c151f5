//! Twilio Lookup v2 HTTP client and the [`LookupService`] seam.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{error, info, instrument, warn};

use crate::error::{truncate_chars, LookupError};
use crate::mask::mask_token;
use crate::model::{LookupResult, PhoneInfo};
use crate::normalize::CanonicalNumber;

pub const DEFAULT_LOOKUP_URL: &str = "https://lookups.twilio.com/v2/PhoneNumbers";
pub const DEFAULT_FIELDS: &str = "line_type_intelligence,carrier,caller_name";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
/// Max chars of an error body kept in [`LookupError::Status`].
pub const BODY_SNIPPET_LIMIT: usize = 200;

/// Credentials and endpoint settings. Built once at startup and never mutated.
#[derive(Clone)]
pub struct LookupConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub base_url: String,
    pub fields: String,
    pub timeout: Duration,
}

impl LookupConfig {
    /// Config for the public Twilio endpoint with default fields and timeout.
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            base_url: DEFAULT_LOOKUP_URL.to_string(),
            fields: DEFAULT_FIELDS.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = fields.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupConfig")
            .field("account_sid", &mask_token(&self.account_sid))
            .field("auth_token", &"***")
            .field("base_url", &self.base_url)
            .field("fields", &self.fields)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Phone intelligence lookup. One call per number; no retries, no caching.
#[async_trait]
pub trait LookupService: Send + Sync {
    async fn lookup(&self, number: &CanonicalNumber) -> Result<LookupResult, LookupError>;
}

/// [`LookupService`] backed by the Twilio Lookup v2 REST API.
#[derive(Clone)]
pub struct TwilioLookupClient {
    http: reqwest::Client,
    config: LookupConfig,
}

impl TwilioLookupClient {
    /// Builds the HTTP client with the configured request timeout.
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LookupError::Client(e.to_string()))?;
        info!(
            base_url = %config.base_url,
            account_sid = %mask_token(&config.account_sid),
            timeout_secs = config.timeout.as_secs(),
            "Twilio lookup client ready"
        );
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// `<base_url>/<number>` without the query string.
    pub fn endpoint(&self, number: &CanonicalNumber) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), number)
    }

    fn map_send_error(&self, e: reqwest::Error) -> LookupError {
        if e.is_timeout() {
            LookupError::Timeout {
                secs: self.config.timeout.as_secs(),
            }
        } else {
            LookupError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl LookupService for TwilioLookupClient {
    #[instrument(skip(self, number), fields(number = %number))]
    async fn lookup(&self, number: &CanonicalNumber) -> Result<LookupResult, LookupError> {
        let url = self.endpoint(number);
        info!(url = %url, fields = %self.config.fields, "Twilio lookup request");

        let response = self
            .http
            .get(&url)
            .query(&[("fields", self.config.fields.as_str())])
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .send()
            .await
            .map_err(|e| {
                let err = self.map_send_error(e);
                error!(error = %err, "Twilio lookup transport failure");
                err
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            info!("Twilio lookup: number not found");
            return Ok(LookupResult::NotFound);
        }

        let body = response.text().await.map_err(|e| {
            let err = self.map_send_error(e);
            error!(error = %err, status = status.as_u16(), "Failed to read Twilio response body");
            err
        })?;

        if !status.is_success() {
            let snippet = truncate_chars(&body, BODY_SNIPPET_LIMIT);
            warn!(status = status.as_u16(), body = %snippet, "Twilio lookup returned error status");
            return Err(LookupError::Status {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let info: PhoneInfo = serde_json::from_str(&body).map_err(|e| {
            error!(
                error = %e,
                body = %truncate_chars(&body, BODY_SNIPPET_LIMIT),
                "Failed to decode Twilio response"
            );
            LookupError::Decode(e.to_string())
        })?;

        info!(
            status = status.as_u16(),
            country = info.country().unwrap_or("-"),
            network_type = info.network_type().unwrap_or("-"),
            "Twilio lookup succeeded"
        );
        Ok(LookupResult::Found(info))
    }
}

//! Contact Relay Transport
//!
//! Forwards a contact message to an external transactional-email service.
//! The service is a black box: one JSON POST, any 2xx means delivered.

use async_trait::async_trait;
use serde::Serialize;

use crate::contact::ContactMessage;
use crate::error::{RelayError, RelayResult};

/// Default EmailJS-compatible send endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Identifiers the email service needs on every call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Build from optional raw values (typically `option_env!`).
    /// Absent or blank values are reported by name.
    pub fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> RelayResult<Self> {
        fn required(value: Option<&str>, name: &'static str) -> RelayResult<String> {
            match value.map(str::trim) {
                Some(v) if !v.is_empty() => Ok(v.to_string()),
                _ => Err(RelayError::MissingConfig(name)),
            }
        }

        Ok(Self {
            service_id: required(service_id, "service id")?,
            template_id: required(template_id, "template id")?,
            public_key: required(public_key, "public key")?,
        })
    }
}

/// Anything that can deliver a contact message.
///
/// `?Send` because the browser fetch future is not `Send`.
#[async_trait(?Send)]
pub trait MessageRelay {
    async fn send(&self, message: &ContactMessage) -> RelayResult<()>;
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Relay backed by the EmailJS REST API
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    endpoint: String,
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self::with_endpoint(config, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(config: RelayConfig, endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            config,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl MessageRelay for EmailJsRelay {
    async fn send(&self, message: &ContactMessage) -> RelayResult<()> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                from_name: &message.sender_name,
                from_email: &message.sender_email,
                message: &message.body,
            },
        };

        tracing::debug!(endpoint = %self.endpoint, "sending contact message");
        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected { status: status.as_u16(), body })
    }
}

/// Stand-in used when the build carries no relay configuration.
/// Every call fails with the missing-config error; nothing is sent.
#[derive(Debug)]
pub struct UnconfiguredRelay {
    missing: &'static str,
}

impl UnconfiguredRelay {
    pub fn new(error: &RelayError) -> Self {
        let missing = match error {
            RelayError::MissingConfig(name) => *name,
            _ => "relay configuration",
        };
        Self { missing }
    }
}

#[async_trait(?Send)]
impl MessageRelay for UnconfiguredRelay {
    async fn send(&self, _message: &ContactMessage) -> RelayResult<()> {
        Err(RelayError::MissingConfig(self.missing))
    }
}

/// Pick the real relay when configured, the failing stand-in otherwise
pub fn relay_from_config(
    config: RelayResult<RelayConfig>,
    endpoint: Option<&str>,
) -> Box<dyn MessageRelay> {
    match config {
        Ok(config) => match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            Some(endpoint) => Box::new(EmailJsRelay::with_endpoint(config, endpoint)),
            None => Box::new(EmailJsRelay::new(config)),
        },
        Err(e) => {
            tracing::warn!(error = %e, "contact relay disabled");
            Box::new(UnconfiguredRelay::new(&e))
        }
    }
}

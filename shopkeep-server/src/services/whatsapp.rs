//! WhatsApp notification sink.
//!
//! One-way messaging with no delivery tracking: the caller hands off a
//! phone number and a body, and either the hand-off succeeds or the error
//! is surfaced loudly. Missing credentials are an error, not a silent drop.

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, instrument};

use shared::config::server::WhatsAppConfig;

/// Errors from the reminder provider.
#[derive(Debug, Error)]
pub enum ReminderError {
    #[error("whatsapp credentials are not configured")]
    MissingCredentials,
    #[error("whatsapp request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("whatsapp api returned {status}: {body}")]
    Api { status: u16, body: String },
}

/// One-way notification channel.
///
/// A trait seam so the reminder handler can be tested against a recording
/// stub instead of the live provider.
#[async_trait]
pub trait ReminderSink: Send + Sync {
    /// Send `body` to `to`. Fire-and-forget: success means hand-off only.
    async fn send_message(&self, to: &str, body: &str) -> Result<(), ReminderError>;
}

/// [`ReminderSink`] backed by the WhatsApp Cloud API.
pub struct WhatsAppNotifier {
    client: reqwest::Client,
    api_url: String,
    phone_number_id: Option<String>,
    access_token: Option<String>,
}

impl WhatsAppNotifier {
    pub fn from_config(config: &WhatsAppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            phone_number_id: config.phone_number_id.clone(),
            access_token: config.access_token.clone(),
        }
    }

    fn credentials(&self) -> Result<(&str, &str), ReminderError> {
        match (self.phone_number_id.as_deref(), self.access_token.as_deref()) {
            (Some(id), Some(token)) => Ok((id, token)),
            _ => Err(ReminderError::MissingCredentials),
        }
    }
}

#[async_trait]
impl ReminderSink for WhatsAppNotifier {
    #[instrument(skip(self, body))]
    async fn send_message(&self, to: &str, body: &str) -> Result<(), ReminderError> {
        let (phone_number_id, access_token) = self.credentials()?;
        let url = format!("{}/{phone_number_id}/messages", self.api_url);

        let response = self
            .client
            .post(url)
            .bearer_auth(access_token)
            .json(&json!({
                "messaging_product": "whatsapp",
                "to": to,
                "type": "text",
                "text": { "body": body },
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReminderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(to, "whatsapp message handed off");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Recording [`ReminderSink`] with a scriptable outcome.
    #[derive(Default)]
    pub struct RecordingSink {
        pub sent: Mutex<Vec<(String, String)>>,
        pub fail_with_missing_credentials: bool,
    }

    #[async_trait]
    impl ReminderSink for RecordingSink {
        async fn send_message(&self, to: &str, body: &str) -> Result<(), ReminderError> {
            if self.fail_with_missing_credentials {
                return Err(ReminderError::MissingCredentials);
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), body.to_string()));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_notifier_fails_loudly() {
        let notifier = WhatsAppNotifier::from_config(&WhatsAppConfig::default());
        let result = notifier.send_message("+15550100", "hello").await;
        assert!(matches!(result, Err(ReminderError::MissingCredentials)));
    }

    #[tokio::test]
    async fn partially_configured_notifier_still_fails() {
        let config = WhatsAppConfig {
            access_token: Some("token".into()),
            ..WhatsAppConfig::default()
        };
        let notifier = WhatsAppNotifier::from_config(&config);
        let result = notifier.send_message("+15550100", "hello").await;
        assert!(matches!(result, Err(ReminderError::MissingCredentials)));
    }

    #[test]
    fn trailing_slash_is_trimmed_from_api_url() {
        let config = WhatsAppConfig {
            api_url: "https://graph.facebook.com/v17.0/".into(),
            ..WhatsAppConfig::default()
        };
        let notifier = WhatsAppNotifier::from_config(&config);
        assert_eq!(notifier.api_url, "https://graph.facebook.com/v17.0");
    }
}

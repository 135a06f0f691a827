//! Voicemail Notifications
//!
//! Emails the transcript of a new voicemail through the Mailgun HTTP API.
//! Delivery is attempted once; failures are reported to the caller.

use crate::config::Config;
use crate::twiml::TranscribeCallbackRequest;
use thiserror::Error;

const MAILGUN_API_BASE: &str = "https://api.mailgun.net/v3";

/// Notification errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Mailgun rejected message: {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Result type for notification operations
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Plain text email describing one voicemail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicemailMessage {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub text: String,
}

impl VoicemailMessage {
    pub fn new(domain: &str, recipient: &str, voicemail: &TranscribeCallbackRequest) -> Self {
        Self {
            sender: format!("voicemail@{}", domain),
            recipient: recipient.to_string(),
            subject: format!("New voicemail from {}", voicemail.from),
            text: format!(
                "You have received a new voicemail from {}\n\nTranscript:\n{}\n\nVoicemail Link: {}\n",
                voicemail.from, voicemail.transcription_text, voicemail.recording_url
            ),
        }
    }
}

/// Delivers voicemail notifications.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, voicemail: &TranscribeCallbackRequest) -> Result<()>;
}

/// Mailgun-backed notifier
#[derive(Debug, Clone)]
pub struct MailgunNotifier {
    domain: String,
    secret_key: String,
    recipient: String,
    api_base: String,
    http_client: reqwest::Client,
}

impl MailgunNotifier {
    pub fn new(
        domain: impl Into<String>,
        secret_key: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            secret_key: secret_key.into(),
            recipient: recipient.into(),
            api_base: MAILGUN_API_BASE.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.mailgun_domain,
            &config.mailgun_secret_key,
            &config.notification_email,
        )
    }

    /// Point at a different API host, e.g. the EU region.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/{}/messages",
            self.api_base.trim_end_matches('/'),
            self.domain
        )
    }
}

#[async_trait::async_trait]
impl Notifier for MailgunNotifier {
    async fn notify(&self, voicemail: &TranscribeCallbackRequest) -> Result<()> {
        let message = VoicemailMessage::new(&self.domain, &self.recipient, voicemail);
        let params = [
            ("from", message.sender.as_str()),
            ("to", message.recipient.as_str()),
            ("subject", message.subject.as_str()),
            ("text", message.text.as_str()),
        ];

        let response = self
            .http_client
            .post(self.messages_url())
            .basic_auth("api", Some(&self.secret_key))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(to = %message.recipient, from = %voicemail.from, "Voicemail notification sent");
        Ok(())
    }
}

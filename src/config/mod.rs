//! Service Configuration
//!
//! Settings are read from environment variables at startup and checked once.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Script spoken when no custom voicemail recording is available.
pub const DEFAULT_VOICEMAIL_SCRIPT: &str = "Please leave a message";

/// Configuration problems, one per missing setting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("set MAILGUN_PUBLIC_KEY, MAILGUN_SECRET_KEY, MAILGUN_DOMAIN environment variables to receive voicemail notifications")]
    MissingMailgun,

    #[error("set NOTIFICATION_EMAIL environment variable to receive voicemail notifications")]
    MissingNotificationEmail,

    #[error("set FORWARDING_NUMBER environment variable to connect your incoming calls to your phone")]
    MissingForwardingNumber,
}

/// Service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Mailgun public API key
    pub mailgun_public_key: String,
    /// Mailgun secret API key
    pub mailgun_secret_key: String,
    /// Mailgun sending domain
    pub mailgun_domain: String,
    /// Address that receives voicemail notifications
    pub notification_email: String,
    /// Number incoming calls are forwarded to
    pub forwarding_number: String,
    /// Text spoken before recording a voicemail
    pub voicemail_script: String,
    /// Recording played before a voicemail, relative to the working directory
    pub voicemail_file: String,
    /// Set by `validate` when `voicemail_file` exists
    #[serde(skip)]
    pub enable_custom_prompt: bool,
    /// Directory holding the voicemail recording
    #[serde(skip)]
    pub serve_directory: PathBuf,
    /// File name of the voicemail recording inside `serve_directory`
    #[serde(skip)]
    pub voice_file_name: String,
}

impl Config {
    /// Load settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup`; unset keys become empty strings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();
        Self {
            mailgun_public_key: get("MAILGUN_PUBLIC_KEY"),
            mailgun_secret_key: get("MAILGUN_SECRET_KEY"),
            mailgun_domain: get("MAILGUN_DOMAIN"),
            notification_email: get("NOTIFICATION_EMAIL"),
            forwarding_number: get("FORWARDING_NUMBER"),
            voicemail_script: get("VOICEMAIL_SCRIPT"),
            voicemail_file: get("VOICEMAIL_FILE"),
            ..Self::default()
        }
    }

    /// Check the configuration against the working directory.
    pub fn validate(&mut self) -> Vec<ConfigError> {
        let base = std::env::current_dir().unwrap_or_default();
        self.validate_in(&base)
    }

    /// Check the configuration, resolving `voicemail_file` against `base`.
    ///
    /// Returns every problem found. Resolves the voicemail prompt as a side
    /// effect: a missing recording falls back to the spoken script, an
    /// existing one enables the custom prompt.
    pub fn validate_in(&mut self, base: &Path) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.mailgun_public_key.is_empty()
            || self.mailgun_secret_key.is_empty()
            || self.mailgun_domain.is_empty()
        {
            errors.push(ConfigError::MissingMailgun);
        }
        if self.notification_email.is_empty() {
            errors.push(ConfigError::MissingNotificationEmail);
        }
        if self.forwarding_number.is_empty() {
            errors.push(ConfigError::MissingForwardingNumber);
        }

        let voicemail_path = base.join(&self.voicemail_file);
        if !voicemail_path.is_file() {
            warn!(
                path = %voicemail_path.display(),
                "Voicemail file not found, falling back to voice prompt"
            );
            self.voicemail_file.clear();
            if self.voicemail_script.is_empty() {
                self.voicemail_script = DEFAULT_VOICEMAIL_SCRIPT.to_string();
            }
        }

        if !self.voicemail_file.is_empty() {
            self.enable_custom_prompt = true;
            self.serve_directory = voicemail_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            self.voice_file_name = voicemail_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
        }

        errors
    }

    /// Path of the custom prompt recording, if one is enabled.
    pub fn voicemail_path(&self) -> Option<PathBuf> {
        self.enable_custom_prompt
            .then(|| self.serve_directory.join(&self.voice_file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn valid_config() -> Config {
        Config {
            mailgun_public_key: "abc123".to_string(),
            mailgun_secret_key: "pancakes".to_string(),
            mailgun_domain: "example.com".to_string(),
            forwarding_number: "+15555555".to_string(),
            notification_email: "voicemail@example.com".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_config_validate_valid() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = valid_config();
        assert!(config.validate_in(dir.path()).is_empty());
    }

    #[test]
    fn test_config_from_lookup() {
        let env: HashMap<&str, &str> = [
            ("MAILGUN_DOMAIN", "example.com"),
            ("FORWARDING_NUMBER", "+15555555"),
            ("VOICEMAIL_SCRIPT", "Leave it at the beep"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.mailgun_domain, "example.com");
        assert_eq!(config.forwarding_number, "+15555555");
        assert_eq!(config.voicemail_script, "Leave it at the beep");
        assert!(config.mailgun_secret_key.is_empty());
        assert!(config.voicemail_file.is_empty());
    }

    #[test]
    fn test_missing_voicemail_file_sets_default_script() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config {
            voicemail_file: "/path/to/a/nonexistent/file.mp3".to_string(),
            ..valid_config()
        };
        assert!(config.validate_in(dir.path()).is_empty());
        assert_eq!(config.voicemail_script, DEFAULT_VOICEMAIL_SCRIPT);
        assert!(config.voicemail_file.is_empty());
        assert!(!config.enable_custom_prompt);
        assert!(config.voicemail_path().is_none());
    }

    #[test]
    fn test_missing_voicemail_file_keeps_custom_script() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config {
            voicemail_file: "nonexistent.mp3".to_string(),
            voicemail_script: "What do you want?!".to_string(),
            ..valid_config()
        };
        assert!(config.validate_in(dir.path()).is_empty());
        assert_eq!(config.voicemail_script, "What do you want?!");
    }

    #[test]
    fn test_directory_or_blank_voicemail_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("templates")).unwrap();

        for file in ["templates", ""] {
            let mut config = Config {
                voicemail_file: file.to_string(),
                ..valid_config()
            };
            assert!(config.validate_in(dir.path()).is_empty());
            assert_eq!(config.voicemail_script, DEFAULT_VOICEMAIL_SCRIPT);
            assert!(!config.enable_custom_prompt);
        }
    }

    #[test]
    fn test_existing_voicemail_file_enables_custom_prompt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("greeting.mp3"), b"ID3").unwrap();

        let mut config = Config {
            voicemail_file: "greeting.mp3".to_string(),
            ..valid_config()
        };
        assert!(config.validate_in(dir.path()).is_empty());
        assert!(config.enable_custom_prompt);
        assert_eq!(config.serve_directory, dir.path());
        assert_eq!(config.voice_file_name, "greeting.mp3");
        assert_eq!(
            config.voicemail_path(),
            Some(dir.path().join("greeting.mp3"))
        );
    }

    #[test]
    fn test_config_validate_missing_mailgun_settings() {
        let dir = tempfile::tempdir().unwrap();
        let clears: [fn(&mut Config); 3] = [
            |c| c.mailgun_public_key.clear(),
            |c| c.mailgun_secret_key.clear(),
            |c| c.mailgun_domain.clear(),
        ];

        for clear in clears {
            let mut config = valid_config();
            clear(&mut config);
            let errors = config.validate_in(dir.path());
            assert_eq!(errors, vec![ConfigError::MissingMailgun]);
            assert!(errors[0].to_string().contains("MAILGUN_"));
        }
    }

    #[test]
    fn test_config_validate_missing_notification_email() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config {
            notification_email: String::new(),
            ..valid_config()
        };
        let errors = config.validate_in(dir.path());
        assert_eq!(errors, vec![ConfigError::MissingNotificationEmail]);
        assert!(errors[0].to_string().contains("NOTIFICATION_EMAIL"));
    }

    #[test]
    fn test_config_validate_missing_forwarding_number() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config {
            forwarding_number: String::new(),
            ..valid_config()
        };
        let errors = config.validate_in(dir.path());
        assert_eq!(errors, vec![ConfigError::MissingForwardingNumber]);
        assert!(errors[0].to_string().contains("FORWARDING_NUMBER"));
    }

    #[test]
    fn test_config_validate_reports_every_problem() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        assert_eq!(config.validate_in(dir.path()).len(), 3);
    }
}

//! Callback Requests
//!
//! Typed shapes of the form-encoded payloads Twilio posts to webhook URLs.
//! Keys are matched by the provider's PascalCase names; unknown keys are
//! ignored, missing keys leave the field at its zero value and a repeated
//! key keeps its last value.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use thiserror::Error;

/// Payload could not be bound to the requested shape.
#[derive(Error, Debug)]
pub enum BindError {
    #[error("Invalid callback payload: {0}")]
    Decode(#[from] serde_urlencoded::de::Error),

    #[error("Invalid callback payload: {0}")]
    Reencode(#[from] serde_urlencoded::ser::Error),
}

/// Bind an `application/x-www-form-urlencoded` body into a callback record.
pub fn bind<T>(body: &[u8]) -> std::result::Result<T, BindError>
where
    T: for<'de> Deserialize<'de>,
{
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;
    let form = serde_urlencoded::to_string(last_value_wins(pairs))?;
    Ok(serde_urlencoded::from_str(&form)?)
}

/// Collapse repeated keys onto their first position, keeping the last value.
fn last_value_wins(pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut unique: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        match unique.iter_mut().find(|(seen, _)| *seen == key) {
            Some(slot) => slot.1 = value,
            None => unique.push((key, value)),
        }
    }
    unique
}

/// An empty value counts as unset, anything else must parse.
fn zero_if_empty<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(de::Error::custom)
}

/// Common call parameters sent with every voice callback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VoiceRequest {
    pub call_sid: String,
    pub account_sid: String,
    pub from: String,
    pub to: String,
    pub call_status: String,
    #[serde(rename = "ApiVersion")]
    pub api_version: String,
    pub direction: String,
    pub forwarded_from: String,
    pub caller_name: String,
    pub from_city: String,
    pub from_state: String,
    pub from_zip: String,
    pub from_country: String,
    pub to_city: String,
    pub to_state: String,
    pub to_zip: String,
    pub to_country: String,
}

/// Posted to a Dial verb's `action` URL once the dialed call ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DialActionRequest {
    #[serde(flatten)]
    pub call: VoiceRequest,
    pub dial_call_status: String,
    pub dial_call_sid: String,
    #[serde(deserialize_with = "zero_if_empty")]
    pub dial_call_duration: u32,
    #[serde(rename = "RecordingUrl")]
    pub recording_url: String,
    pub queue_sid: String,
    pub dequeue_result: String,
    pub dequeued_call_sid: String,
    #[serde(deserialize_with = "zero_if_empty")]
    pub dequeued_call_queue_time: u32,
    #[serde(deserialize_with = "zero_if_empty")]
    pub dequeued_call_duration: u32,
}

/// Posted to a Record verb's `action` URL when recording stops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RecordActionRequest {
    #[serde(flatten)]
    pub call: VoiceRequest,
    #[serde(rename = "RecordingUrl")]
    pub recording_url: String,
    #[serde(deserialize_with = "zero_if_empty")]
    pub recording_duration: u32,
    pub digits: String,
}

/// Posted to a Record verb's `recordingStatusCallback`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RecordingStatusCallbackRequest {
    pub account_sid: String,
    pub call_sid: String,
    pub recording_sid: String,
    #[serde(rename = "RecordingUrl")]
    pub recording_url: String,
    pub recording_status: String,
    #[serde(deserialize_with = "zero_if_empty")]
    pub recording_duration: u32,
    #[serde(deserialize_with = "zero_if_empty")]
    pub recording_channels: u32,
    pub recording_source: String,
}

/// Posted to a Record verb's `transcribeCallback` once the transcript is
/// ready.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TranscribeCallbackRequest {
    pub transcription_sid: String,
    pub transcription_text: String,
    pub transcription_status: String,
    #[serde(rename = "TranscriptionUrl")]
    pub transcription_url: String,
    pub recording_sid: String,
    #[serde(rename = "RecordingUrl")]
    pub recording_url: String,
    pub call_sid: String,
    pub account_sid: String,
    pub from: String,
    pub to: String,
    pub call_status: String,
    #[serde(rename = "ApiVersion")]
    pub api_version: String,
    pub direction: String,
    pub forwarded_from: String,
}

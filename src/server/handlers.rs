//! Webhook Handlers
//!
//! Each handler binds the callback payload, decides what the call should do
//! next and answers with a TwiML document. Routing decisions live in plain
//! functions so they can be checked without a server.

use super::AppState;
use crate::config::Config;
use crate::twiml::{
    self, bind, constants, DialActionRequest, Play, Record, Say, TranscribeCallbackRequest,
    VoiceRequest,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{error, field, info, instrument, warn, Span};

/// Seconds the forwarding number rings before the caller goes to voicemail.
pub const FORWARD_TIMEOUT_SECS: u32 = 15;

/// Decide what to do with an incoming call. `None` means acknowledge only.
pub fn route_call(config: &Config, call: &VoiceRequest) -> Option<twiml::Response> {
    let mut response = twiml::Response::new();
    match call.call_status.as_str() {
        constants::IN_PROGRESS => return None,
        constants::RINGING | constants::QUEUED => {
            response.add(twiml::Dial {
                action: "action/".to_string(),
                timeout: FORWARD_TIMEOUT_SECS,
                caller_id: call.to.clone(),
                ..twiml::Dial::new(config.forwarding_number.as_str())
            });
        }
        _ => {
            response.add(twiml::Hangup);
        }
    }
    Some(response)
}

/// Send unanswered forwards to voicemail. `None` means acknowledge only.
pub fn route_dial_action(config: &Config, action: &DialActionRequest) -> Option<twiml::Response> {
    match action.dial_call_status.as_str() {
        constants::NO_ANSWER | constants::FAILED | constants::BUSY => {
            let mut response = twiml::Response::new();
            if config.enable_custom_prompt {
                response.add(Play::new(format!("/prompt/{}", config.voice_file_name)));
            } else {
                response.add(Say {
                    voice: constants::WOMAN.to_string(),
                    ..Say::new(config.voicemail_script.as_str())
                });
            }
            response.add(Record {
                transcribe_callback: "/voicemail".to_string(),
                ..Record::default()
            });
            Some(response)
        }
        _ => None,
    }
}

fn bind_form<T: DeserializeOwned>(body: &Bytes) -> Result<T, StatusCode> {
    bind(body).map_err(|e| {
        warn!(error = %e, "Rejecting malformed callback");
        StatusCode::BAD_REQUEST
    })
}

fn twiml_reply(response: Option<twiml::Response>) -> Response {
    let Some(response) = response else {
        return StatusCode::OK.into_response();
    };
    match response.encode() {
        Ok(body) => ([(header::CONTENT_TYPE, "application/xml")], body).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode TwiML");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// `POST /call/`: forward ringing calls, hang up on anything unexpected.
#[instrument(name = "call", skip_all, fields(call_sid = field::Empty))]
pub async fn call_request(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, StatusCode> {
    let call: VoiceRequest = bind_form(&body)?;
    Span::current().record("call_sid", call.call_sid.as_str());
    info!(status = %call.call_status, from = %call.from, "Incoming call");
    Ok(twiml_reply(route_call(&state.config, &call)))
}

/// `POST /call/action/`: the forwarded leg finished.
#[instrument(name = "dial_action", skip_all, fields(call_sid = field::Empty))]
pub async fn dial_action(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, StatusCode> {
    let action: DialActionRequest = bind_form(&body)?;
    Span::current().record("call_sid", action.call.call_sid.as_str());
    info!(
        dial_status = %action.dial_call_status,
        "Dial finished"
    );
    Ok(twiml_reply(route_dial_action(&state.config, &action)))
}

/// `POST /voicemail`: the transcription is ready. Notification failures
/// are logged; Twilio still gets a 200.
#[instrument(name = "voicemail", skip_all, fields(call_sid = field::Empty))]
pub async fn voicemail(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<StatusCode, StatusCode> {
    let voicemail: TranscribeCallbackRequest = bind_form(&body)?;
    Span::current().record("call_sid", voicemail.call_sid.as_str());
    info!(
        from = %voicemail.from,
        transcription = %voicemail.transcription_text,
        recording = %voicemail.recording_url,
        "New voicemail"
    );
    if let Err(e) = state.notifier.notify(&voicemail).await {
        error!(
            error = %e,
            recording = %voicemail.recording_url,
            "Unable to send notification email"
        );
    }
    Ok(StatusCode::OK)
}

/// `POST /status`: in-progress events need no instructions.
pub async fn status() -> StatusCode {
    StatusCode::OK
}

/// `GET /prompt/{file}`: the configured voicemail recording, nothing else.
#[instrument(skip(state))]
pub async fn prompt(State(state): State<Arc<AppState>>, Path(file): Path<String>) -> Response {
    let config = &state.config;
    let path = match config.voicemail_path() {
        Some(path) if file == config.voice_file_name => path,
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, audio_content_type(&file))], bytes).into_response(),
        Err(e) => {
            error!(error = %e, path = %path.display(), "Failed to read voicemail prompt");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn audio_content_type(file: &str) -> &'static str {
    let ext = file.rsplit('.').next().unwrap_or_default();
    match ext.to_ascii_lowercase().as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        _ => "application/octet-stream",
    }
}

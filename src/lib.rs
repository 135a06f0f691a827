//! twilio-voicemail library
//!
//! Forwards incoming Twilio calls to a phone number, records a voicemail
//! when nobody answers, and emails the transcript. The [`twiml`] module is
//! the typed markup builder every handler answers with.

pub mod cli;
pub mod config;
pub mod logging;
pub mod notify;
pub mod server;
pub mod twiml;

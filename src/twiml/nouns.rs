//! Nouns
//!
//! Dial targets. They are only accepted as children of [`Dial`](super::Dial).

use super::constants::{DO_NOT_TRIM, TRIM_SILENCE};
use super::markup::{check, Element, Markup};
use super::validate::{
    all, allowed_callback_event, allowed_method, numeric_opt, one_of_opt, required,
};
use super::Result;

/// A phone number to dial.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Number {
    pub send_digits: String,
    pub url: String,
    pub method: String,
    pub number: String,
}

impl Markup for Number {
    fn markup_type(&self) -> &'static str {
        "Number"
    }

    fn validate(&self) -> Result<()> {
        check(
            self.markup_type(),
            all(&[
                numeric_opt(&self.send_digits),
                allowed_method(&self.method),
                required(&self.number),
            ]),
        )
    }

    fn element(&self) -> Element<'_> {
        Element::new("Number")
            .attr("sendDigits", &self.send_digits)
            .attr("url", &self.url)
            .attr("method", &self.method)
            .text(&self.number)
    }
}

/// A named client application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Client {
    pub method: String,
    pub url: String,
    pub name: String,
}

impl Markup for Client {
    fn markup_type(&self) -> &'static str {
        "Client"
    }

    fn validate(&self) -> Result<()> {
        check(
            self.markup_type(),
            all(&[allowed_method(&self.method), required(&self.name)]),
        )
    }

    fn element(&self) -> Element<'_> {
        Element::new("Client")
            .attr("method", &self.method)
            .attr("url", &self.url)
            .text(&self.name)
    }
}

/// A conference room, created on first join.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conference {
    pub muted: bool,
    pub beep: String,
    pub start_conference_on_enter: bool,
    pub end_conference_on_exit: bool,
    pub wait_url: String,
    pub wait_method: String,
    pub max_participants: u32,
    pub record: String,
    pub trim: String,
    pub status_callback_event: String,
    pub status_callback: String,
    pub status_callback_method: String,
    pub recording_status_callback: String,
    pub recording_status_callback_method: String,
    pub event_callback_url: String,
    pub name: String,
}

impl Markup for Conference {
    fn markup_type(&self) -> &'static str {
        "Conference"
    }

    fn validate(&self) -> Result<()> {
        check(
            self.markup_type(),
            all(&[
                one_of_opt(&self.beep, &["true", "false", "onEnter", "onExit"]),
                allowed_method(&self.wait_method),
                one_of_opt(&self.record, &["do-not-record", "record-from-start"]),
                one_of_opt(&self.trim, &[TRIM_SILENCE, DO_NOT_TRIM]),
                one_of_opt(
                    &self.status_callback_event,
                    &["start", "end", "join", "leave", "mute", "hold"],
                ),
                allowed_method(&self.status_callback_method),
                allowed_method(&self.recording_status_callback_method),
            ]),
        )
    }

    fn element(&self) -> Element<'_> {
        Element::new("Conference")
            .attr_bool("muted", self.muted)
            .attr("beep", &self.beep)
            .attr_bool("startConferenceOnEnter", self.start_conference_on_enter)
            .attr_bool("endConferenceOnExit", self.end_conference_on_exit)
            .attr("waitUrl", &self.wait_url)
            .attr("waitMethod", &self.wait_method)
            .attr_int("maxParticipants", self.max_participants)
            .attr("record", &self.record)
            .attr("trim", &self.trim)
            .attr("statusCallbackEvent", &self.status_callback_event)
            .attr("statusCallback", &self.status_callback)
            .attr("statusCallbackMethod", &self.status_callback_method)
            .attr("recordingStatusCallback", &self.recording_status_callback)
            .attr(
                "recordingStatusCallbackMethod",
                &self.recording_status_callback_method,
            )
            .attr("eventCallbackUrl", &self.event_callback_url)
            .text(&self.name)
    }
}

/// A call queue to dequeue a caller from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Queue {
    pub url: String,
    pub method: String,
    pub reservation_sid: String,
    pub post_work_activity_sid: String,
    pub name: String,
}

impl Markup for Queue {
    fn markup_type(&self) -> &'static str {
        "Queue"
    }

    fn validate(&self) -> Result<()> {
        check(
            self.markup_type(),
            all(&[allowed_method(&self.method), required(&self.name)]),
        )
    }

    fn element(&self) -> Element<'_> {
        Element::new("Queue")
            .attr("url", &self.url)
            .attr("method", &self.method)
            .attr("reservationSid", &self.reservation_sid)
            .attr("postWorkActivitySid", &self.post_work_activity_sid)
            .text(&self.name)
    }
}

/// A SIP endpoint. `address` is the full `sip:` URI, including any
/// transport or header parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sip {
    pub username: String,
    pub password: String,
    pub url: String,
    pub method: String,
    pub status_callback_event: String,
    pub status_callback: String,
    pub status_callback_method: String,
    pub address: String,
}

impl Markup for Sip {
    fn markup_type(&self) -> &'static str {
        "Sip"
    }

    fn validate(&self) -> Result<()> {
        check(
            self.markup_type(),
            all(&[
                allowed_method(&self.status_callback_method),
                allowed_callback_event(&self.status_callback_event),
                required(&self.address),
            ]),
        )
    }

    fn element(&self) -> Element<'_> {
        Element::new("Sip")
            .attr("username", &self.username)
            .attr("password", &self.password)
            .attr("url", &self.url)
            .attr("method", &self.method)
            .attr("statusCallbackEvent", &self.status_callback_event)
            .attr("statusCallback", &self.status_callback)
            .attr("statusCallbackMethod", &self.status_callback_method)
            .text(&self.address)
    }
}

//! Verbs
//!
//! Instructions that may appear directly under `<Response>`, plus the Sms
//! verb (`<Message>`).

use super::constants::{ALICE, DO_NOT_TRIM, MAN, TRIM_SILENCE, WOMAN};
use super::markup::{check, validate_children, Element, Markup, Node};
use super::validate::{allowed_language, allowed_method, all, one_of_opt, required};
use super::{Result, ValidationError};

/// Speak text to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Say {
    pub voice: String,
    pub language: String,
    pub loop_count: u32,
    pub text: String,
}

impl Say {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl Markup for Say {
    fn markup_type(&self) -> &'static str {
        "Say"
    }

    fn validate(&self) -> Result<()> {
        check(
            self.markup_type(),
            all(&[
                one_of_opt(&self.voice, &[MAN, WOMAN, ALICE]),
                allowed_language(&self.voice, &self.language),
                required(&self.text),
            ]),
        )
    }

    fn element(&self) -> Element<'_> {
        Element::new("Say")
            .attr("voice", &self.voice)
            .attr("language", &self.language)
            .attr_int("loop", self.loop_count)
            .text(&self.text)
    }
}

/// Play an audio file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Play {
    pub loop_count: u32,
    pub digits: u32,
    pub url: String,
}

impl Play {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Markup for Play {
    fn markup_type(&self) -> &'static str {
        "Play"
    }

    fn validate(&self) -> Result<()> {
        check(self.markup_type(), required(&self.url))
    }

    fn element(&self) -> Element<'_> {
        Element::new("Play")
            .attr_int("loop", self.loop_count)
            .attr_int("digits", self.digits)
            .text(&self.url)
    }
}

/// Wait silently for `length` seconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pause {
    pub length: u32,
}

impl Markup for Pause {
    fn markup_type(&self) -> &'static str {
        "Pause"
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn element(&self) -> Element<'_> {
        Element::new("Pause").attr_int("length", self.length)
    }
}

/// Connect the caller to another party.
///
/// `number` is the dialed target written as chardata. Nouns added with
/// [`Dial::add`] are written after it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dial {
    pub action: String,
    pub method: String,
    pub timeout: u32,
    pub hangup_on_star: bool,
    pub time_limit: u32,
    pub caller_id: String,
    pub record: bool,
    pub number: String,
    pub children: Vec<Node>,
}

impl Dial {
    const ALLOWED_CHILDREN: &'static [&'static str] =
        &["Client", "Conference", "Number", "Queue", "Sip"];

    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Self::default()
        }
    }

    /// Append a noun. Nothing is validated until the tree is encoded.
    pub fn add(&mut self, node: impl Into<Node>) -> &mut Self {
        self.children.push(node.into());
        self
    }

    pub fn extend<I>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }
}

impl Markup for Dial {
    fn markup_type(&self) -> &'static str {
        "Dial"
    }

    fn validate(&self) -> Result<()> {
        let mut errors =
            validate_children(self.markup_type(), &self.children, Self::ALLOWED_CHILDREN)?;

        let ok = all(&[allowed_method(&self.method), required(&self.number)]);
        if let Err(err) = check(self.markup_type(), ok) {
            errors.push(err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors }.into())
        }
    }

    fn element(&self) -> Element<'_> {
        Element::new("Dial")
            .attr("action", &self.action)
            .attr("method", &self.method)
            .attr_int("timeout", self.timeout)
            .attr_bool("hangupOnStar", self.hangup_on_star)
            .attr_int("timeLimit", self.time_limit)
            .attr("callerId", &self.caller_id)
            .attr_bool("record", self.record)
            .text(&self.number)
            .children(&self.children)
    }
}

/// Collect keypad digits while prompting with nested Say, Play and Pause.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gather {
    pub action: String,
    pub method: String,
    pub timeout: u32,
    pub finish_on_key: String,
    pub num_digits: u32,
    pub children: Vec<Node>,
}

impl Gather {
    const ALLOWED_CHILDREN: &'static [&'static str] = &["Say", "Play", "Pause"];

    pub fn add(&mut self, node: impl Into<Node>) -> &mut Self {
        self.children.push(node.into());
        self
    }

    pub fn extend<I>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }
}

impl Markup for Gather {
    fn markup_type(&self) -> &'static str {
        "Gather"
    }

    fn validate(&self) -> Result<()> {
        let mut errors =
            validate_children(self.markup_type(), &self.children, Self::ALLOWED_CHILDREN)?;

        if let Err(err) = check(self.markup_type(), allowed_method(&self.method)) {
            errors.push(err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors }.into())
        }
    }

    fn element(&self) -> Element<'_> {
        Element::new("Gather")
            .attr("action", &self.action)
            .attr("method", &self.method)
            .attr_int("timeout", self.timeout)
            .attr("finishOnKey", &self.finish_on_key)
            .attr_int("numDigits", self.num_digits)
            .children(&self.children)
    }
}

/// Record the caller, optionally requesting a transcription.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub action: String,
    pub method: String,
    pub timeout: u32,
    pub finish_on_key: String,
    pub max_length: u32,
    pub play_beep: bool,
    pub trim: String,
    pub recording_status_callback: String,
    pub recording_status_callback_method: String,
    pub transcribe: bool,
    pub transcribe_callback: String,
}

impl Markup for Record {
    fn markup_type(&self) -> &'static str {
        "Record"
    }

    fn validate(&self) -> Result<()> {
        check(
            self.markup_type(),
            all(&[
                allowed_method(&self.method),
                one_of_opt(&self.trim, &[TRIM_SILENCE, DO_NOT_TRIM]),
                allowed_method(&self.recording_status_callback_method),
            ]),
        )
    }

    fn element(&self) -> Element<'_> {
        Element::new("Record")
            .attr("action", &self.action)
            .attr("method", &self.method)
            .attr_int("timeout", self.timeout)
            .attr("finishOnKey", &self.finish_on_key)
            .attr_int("maxLength", self.max_length)
            .attr_bool("playBeep", self.play_beep)
            .attr("trim", &self.trim)
            .attr("recordingStatusCallback", &self.recording_status_callback)
            .attr(
                "recordingStatusCallbackMethod",
                &self.recording_status_callback_method,
            )
            .attr_bool("transcribe", self.transcribe)
            .attr("transcribeCallback", &self.transcribe_callback)
    }
}

/// Hand control of the call to another markup document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Redirect {
    pub method: String,
    pub url: String,
}

impl Redirect {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Markup for Redirect {
    fn markup_type(&self) -> &'static str {
        "Redirect"
    }

    fn validate(&self) -> Result<()> {
        check(
            self.markup_type(),
            all(&[allowed_method(&self.method), required(&self.url)]),
        )
    }

    fn element(&self) -> Element<'_> {
        Element::new("Redirect")
            .attr("method", &self.method)
            .text(&self.url)
    }
}

/// Decline an incoming call without billing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reject {
    pub reason: String,
}

impl Markup for Reject {
    fn markup_type(&self) -> &'static str {
        "Reject"
    }

    fn validate(&self) -> Result<()> {
        check(
            self.markup_type(),
            one_of_opt(&self.reason, &["rejected", "busy"]),
        )
    }

    fn element(&self) -> Element<'_> {
        Element::new("Reject").attr("reason", &self.reason)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hangup;

impl Markup for Hangup {
    fn markup_type(&self) -> &'static str {
        "Hangup"
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn element(&self) -> Element<'_> {
        Element::new("Hangup")
    }
}

/// Leave the current queue and continue with the enclosing Enqueue's action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leave;

impl Markup for Leave {
    fn markup_type(&self) -> &'static str {
        "Leave"
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn element(&self) -> Element<'_> {
        Element::new("Leave")
    }
}

/// Place the caller into a named queue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Enqueue {
    pub action: String,
    pub method: String,
    pub wait_url: String,
    pub wait_url_method: String,
    pub workflow_sid: String,
    pub queue_name: String,
}

impl Markup for Enqueue {
    fn markup_type(&self) -> &'static str {
        "Enqueue"
    }

    fn validate(&self) -> Result<()> {
        check(
            self.markup_type(),
            all(&[
                allowed_method(&self.method),
                allowed_method(&self.wait_url_method),
            ]),
        )
    }

    fn element(&self) -> Element<'_> {
        Element::new("Enqueue")
            .attr("action", &self.action)
            .attr("method", &self.method)
            .attr("waitUrl", &self.wait_url)
            .attr("waitUrlMethod", &self.wait_url_method)
            .attr("workflowSid", &self.workflow_sid)
            .text(&self.queue_name)
    }
}

/// Send a text message. Written as `<Message>`; `to` and `from` default to
/// the call's parties on the provider side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sms {
    pub to: String,
    pub from: String,
    pub action: String,
    pub method: String,
    pub status_callback: String,
    pub text: String,
}

impl Markup for Sms {
    fn markup_type(&self) -> &'static str {
        "Sms"
    }

    fn validate(&self) -> Result<()> {
        check(
            self.markup_type(),
            all(&[allowed_method(&self.method), required(&self.text)]),
        )
    }

    fn element(&self) -> Element<'_> {
        Element::new("Message")
            .attr("to", &self.to)
            .attr("from", &self.from)
            .attr("action", &self.action)
            .attr("method", &self.method)
            .attr("statusCallback", &self.status_callback)
            .text(&self.text)
    }
}

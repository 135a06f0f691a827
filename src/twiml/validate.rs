//! Field Validators
//!
//! Pure predicates over attribute values. Optional variants treat an empty
//! string as "unset", which defers to the provider's default.

use super::constants::{ALICE, ALICE_LANGUAGES, BASIC_LANGUAGES, GET, MAN, POST, WOMAN};
use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

static CALLBACK_EVENTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(initiated\s?|ringing\s?|answered\s?|completed\s?)+$").unwrap()
});

/// True when every predicate holds. All predicates have already been
/// evaluated by the time they reach here.
pub fn all(checks: &[bool]) -> bool {
    checks.iter().all(|ok| *ok)
}

/// Field equals one of the options.
pub fn one_of(field: &str, options: &[&str]) -> bool {
    options.contains(&field)
}

/// Field is empty or equals one of the options.
pub fn one_of_opt(field: &str, options: &[&str]) -> bool {
    field.is_empty() || one_of(field, options)
}

/// Inclusive range check.
pub fn int_between(field: u32, high: u32, low: u32) -> bool {
    field >= low && field <= high
}

/// Field is non-empty.
pub fn required(field: &str) -> bool {
    !field.is_empty()
}

/// Empty, `GET` or `POST`.
pub fn allowed_method(field: &str) -> bool {
    one_of_opt(field, &[GET, POST])
}

/// Field contains a run of digits. Pause characters such as `w` are
/// allowed around the digits.
pub fn numeric(field: &str) -> bool {
    NUMERIC_RE.is_match(field)
}

pub fn numeric_opt(field: &str) -> bool {
    field.is_empty() || numeric(field)
}

/// Language compatibility for a `Say` voice. An unrecognized voice gets the
/// same language set as `man` and `woman`.
pub fn allowed_language(voice: &str, language: &str) -> bool {
    match voice {
        MAN | WOMAN => one_of_opt(language, BASIC_LANGUAGES),
        ALICE => one_of_opt(language, ALICE_LANGUAGES),
        _ => one_of_opt(language, BASIC_LANGUAGES),
    }
}

/// Space separated list of call progress events.
pub fn allowed_callback_event(events: &str) -> bool {
    events.is_empty() || CALLBACK_EVENTS_RE.is_match(events)
}

//! TwiML Markup
//!
//! Typed builder for Twilio's call-control markup. Nodes are plain records
//! appended into a [`Response`] tree, validated as a whole, then encoded to
//! XML. Encoding never produces output for a tree that fails validation.

pub mod callbacks;
pub mod constants;
pub mod encode;
pub mod markup;
pub mod nouns;
pub mod response;
pub mod validate;
pub mod verbs;

pub use callbacks::*;
pub use markup::{Element, Markup, Node};
pub use nouns::*;
pub use response::Response;
pub use verbs::*;

use std::fmt;
use thiserror::Error;

/// Markup validation and encoding errors
#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("Can not encode an empty response")]
    EmptyResponse,

    #[error("Unknown markup type {child} as child of {parent}")]
    UnexpectedChild {
        parent: &'static str,
        child: &'static str,
    },

    #[error("{0} markup failed validation")]
    Invalid(&'static str),

    #[error("{0}")]
    Validation(ValidationError),

    #[error("XML encoding error: {0}")]
    Encode(String),
}

impl MarkupError {
    /// Underlying causes of an aggregate error. Any other error is its own
    /// single cause.
    pub fn causes(&self) -> Vec<&MarkupError> {
        match self {
            MarkupError::Validation(v) => v.errors.iter().collect(),
            other => vec![other],
        }
    }
}

/// Every semantic failure collected while walking a container.
#[derive(Debug)]
pub struct ValidationError {
    pub errors: Vec<MarkupError>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid TwiML markup:")?;
        for err in &self.errors {
            write!(f, "\n{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for MarkupError {
    fn from(err: ValidationError) -> Self {
        MarkupError::Validation(err)
    }
}

/// Result type for markup operations
pub type Result<T> = std::result::Result<T, MarkupError>;

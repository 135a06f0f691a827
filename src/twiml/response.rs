//! Response Document
//!
//! Root of every markup document. Built in three steps: construct, append
//! nodes, then [`Response::encode`], which validates the whole tree before
//! writing a single byte.

use super::encode::encode_document;
use super::markup::{validate_children, Element, Markup, Node};
use super::{MarkupError, Result, ValidationError};

/// `<Response>` container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub children: Vec<Node>,
}

impl Response {
    const ALLOWED_CHILDREN: &'static [&'static str] = &[
        "Enqueue", "Hangup", "Leave", "Pause", "Play", "Record", "Redirect", "Reject", "Say",
        "Dial", "Gather",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a verb. Nothing is validated until [`Response::encode`].
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

    /// Validate, then write the document. A tree that fails validation
    /// produces the error and no output.
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.validate()?;
        encode_document(&self.element())
    }

    /// [`Response::encode`] as a string.
    pub fn to_xml_string(&self) -> Result<String> {
        let bytes = self.encode()?;
        String::from_utf8(bytes).map_err(|e| MarkupError::Encode(e.to_string()))
    }
}

impl Markup for Response {
    fn markup_type(&self) -> &'static str {
        "Response"
    }

    fn validate(&self) -> Result<()> {
        if self.children.is_empty() {
            return Err(MarkupError::EmptyResponse);
        }
        let errors =
            validate_children(self.markup_type(), &self.children, Self::ALLOWED_CHILDREN)?;
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors }.into())
        }
    }

    fn element(&self) -> Element<'_> {
        Element::new("Response").children(&self.children)
    }
}

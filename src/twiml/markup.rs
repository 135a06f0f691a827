//! Markup Nodes
//!
//! The node vocabulary is closed: every kind the provider understands has a
//! struct in [`verbs`](super::verbs) or [`nouns`](super::nouns) and a
//! variant in [`Node`]. Containers whitelist their children by matching on
//! [`Markup::markup_type`].

use super::{nouns::*, verbs::*, MarkupError, Result};

/// Capability shared by every node kind.
pub trait Markup {
    /// Stable type name used by container whitelists.
    fn markup_type(&self) -> &'static str;

    /// Check this node and, for containers, its subtree.
    fn validate(&self) -> Result<()>;

    /// Borrowed view of the element handed to the encoder.
    fn element(&self) -> Element<'_>;
}

/// Element as it will be written: tag, attributes in declaration order,
/// inline chardata and nested children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<'a> {
    pub tag: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub text: &'a str,
    pub children: &'a [Node],
}

impl<'a> Element<'a> {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            text: "",
            children: &[],
        }
    }

    /// String attribute, omitted when empty.
    pub fn attr(mut self, name: &'static str, value: &str) -> Self {
        if !value.is_empty() {
            self.attributes.push((name, value.to_string()));
        }
        self
    }

    /// Integer attribute, omitted when zero.
    pub fn attr_int(mut self, name: &'static str, value: u32) -> Self {
        if value != 0 {
            self.attributes.push((name, value.to_string()));
        }
        self
    }

    /// Boolean attribute, omitted when false.
    pub fn attr_bool(mut self, name: &'static str, value: bool) -> Self {
        if value {
            self.attributes.push((name, "true".to_string()));
        }
        self
    }

    pub fn text(mut self, text: &'a str) -> Self {
        self.text = text;
        self
    }

    pub fn children(mut self, children: &'a [Node]) -> Self {
        self.children = children;
        self
    }
}

/// Fail with a coarse error naming the node type unless `ok`.
pub(crate) fn check(markup_type: &'static str, ok: bool) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(MarkupError::Invalid(markup_type))
    }
}

/// Walk a container's children against its whitelist.
///
/// A child outside the whitelist is a construction bug and stops the walk
/// at once. Failures of accepted children are collected and returned.
pub(crate) fn validate_children(
    parent: &'static str,
    children: &[Node],
    allowed: &[&str],
) -> Result<Vec<MarkupError>> {
    let mut errors = Vec::new();
    for child in children {
        let child_type = child.markup_type();
        if !allowed.contains(&child_type) {
            return Err(MarkupError::UnexpectedChild {
                parent,
                child: child_type,
            });
        }
        if let Err(err) = child.validate() {
            errors.push(err);
        }
    }
    Ok(errors)
}

macro_rules! nodes {
    ($($kind:ident),+ $(,)?) => {
        /// Any node of the vocabulary.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Node {
            $($kind($kind),)+
        }

        $(
            impl From<$kind> for Node {
                fn from(node: $kind) -> Self {
                    Node::$kind(node)
                }
            }
        )+

        impl Markup for Node {
            fn markup_type(&self) -> &'static str {
                match self {
                    $(Node::$kind(n) => n.markup_type(),)+
                }
            }

            fn validate(&self) -> Result<()> {
                match self {
                    $(Node::$kind(n) => n.validate(),)+
                }
            }

            fn element(&self) -> Element<'_> {
                match self {
                    $(Node::$kind(n) => n.element(),)+
                }
            }
        }
    };
}

nodes!(
    Say, Play, Pause, Dial, Gather, Record, Redirect, Reject, Hangup, Leave, Enqueue, Sms,
    Number, Client, Conference, Queue, Sip,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_omits_zero_values() {
        let el = Element::new("Dial")
            .attr("action", "")
            .attr("method", "POST")
            .attr_int("timeout", 0)
            .attr_int("timeLimit", 30)
            .attr_bool("record", false)
            .attr_bool("hangupOnStar", true);
        assert_eq!(
            el.attributes,
            vec![
                ("method", "POST".to_string()),
                ("timeLimit", "30".to_string()),
                ("hangupOnStar", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_node_type_comes_from_the_wrapped_record() {
        let node = Node::from(Sms::default());
        assert_eq!(node.markup_type(), "Sms");
        assert_eq!(node.element().tag, "Message");
    }

    #[test]
    fn test_validate_children_stops_at_unknown_type() {
        let children = vec![
            Node::from(Play::default()),
            Node::from(Hangup::default()),
            Node::from(Say::default()),
        ];
        let err = validate_children("Gather", &children, &["Say", "Play", "Pause"]).unwrap_err();
        assert!(matches!(
            err,
            MarkupError::UnexpectedChild {
                parent: "Gather",
                child: "Hangup"
            }
        ));
    }

    #[test]
    fn test_validate_children_collects_every_failure() {
        let children = vec![Node::from(Play::default()), Node::from(Say::default())];
        let errors = validate_children("Gather", &children, &["Say", "Play", "Pause"]).unwrap();
        assert_eq!(errors.len(), 2);
    }
}

//! XML Encoder
//!
//! Writes an element tree with `quick-xml`. Layout is fixed: declaration on
//! its own line, two spaces per nesting level, chardata directly after the
//! opening tag, and a closing tag on its own line only when the element has
//! children. Empty elements are written as `<Tag></Tag>`. Newlines, carriage
//! returns and tabs in attribute values are written as character references
//! so parsers do not normalize them to spaces.

use super::markup::{Element, Markup};
use super::{MarkupError, Result};
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use std::borrow::Cow;

const INDENT: &[u8] = b"  ";

/// Encode `root` as a complete document. Callers validate first.
pub fn encode_document(root: &Element<'_>) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(encode_error)?;
    writer.get_mut().push(b'\n');
    write_element(&mut writer, root, 0)?;
    Ok(writer.into_inner())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element<'_>, depth: usize) -> Result<()> {
    let mut start = BytesStart::new(element.tag);
    for (name, value) in &element.attributes {
        start.push_attribute(Attribute {
            key: QName(name.as_bytes()),
            value: Cow::Owned(escape_attribute(value).into_owned().into_bytes()),
        });
    }
    writer
        .write_event(Event::Start(start))
        .map_err(encode_error)?;

    if !element.text.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(element.text)))
            .map_err(encode_error)?;
    }

    for child in element.children {
        newline(writer, depth + 1);
        write_element(writer, &child.element(), depth + 1)?;
    }
    if !element.children.is_empty() {
        newline(writer, depth);
    }

    writer
        .write_event(Event::End(BytesEnd::new(element.tag)))
        .map_err(encode_error)
}

fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = escape(value);
    if !escaped.contains(['\n', '\r', '\t']) {
        return escaped;
    }
    let mut out = String::with_capacity(escaped.len() + 8);
    for c in escaped.chars() {
        match c {
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            '\t' => out.push_str("&#x9;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn newline(writer: &mut Writer<Vec<u8>>, depth: usize) {
    let buf = writer.get_mut();
    buf.push(b'\n');
    for _ in 0..depth {
        buf.extend_from_slice(INDENT);
    }
}

fn encode_error(err: impl std::fmt::Display) -> MarkupError {
    MarkupError::Encode(err.to_string())
}

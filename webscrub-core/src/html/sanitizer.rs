// webscrub-core/src/html/sanitizer.rs
//! Tag/attribute allow-list sanitization of HTML fragments.
//!
//! The input is tokenized lexically and re-serialized from the surviving
//! tokens only; nothing is ever copied from the raw input, so spacing and
//! attribute quoting inside tags come out normalized. Tags outside the
//! allow-list lose their markup but keep their text content, except for the
//! ignore-tags (script, style, ...) whose entire contents are dropped.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::WebscrubError;
use crate::html::tokenizer::{Attribute, Tag, Token, Tokenizer};

/// Tags whose whole subtree (markup and text) is always dropped, whatever
/// the caller's allow-list says.
pub const IGNORE_TAGS: &[&str] = &[
    "title", "script", "style", "iframe", "frame", "frameset", "noframes",
    "noembed", "embed", "applet", "object", "base",
];

/// Tags passed through when the caller does not supply an allow-list.
pub const DEFAULT_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "div", "span", "hr", "p", "br", "b",
    "i", "strong", "em", "ol", "ul", "li", "a", "img", "pre", "code",
    "blockquote",
];

/// Attributes kept on allowed tags when the caller does not supply a list.
pub const DEFAULT_ATTRIBUTES: &[&str] = &[
    "id", "class", "src", "href", "title", "alt", "name", "rel",
];

// data: and javascript: schemes are rejected anywhere in an attribute value,
// tolerating whitespace between every letter so "j a v a s c r i p t:" can't
// sneak past. Matched against a lowercased copy of the value.
static ILLEGAL_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(d\s*a\s*t\s*a|j\s*a\s*v\s*a\s*s\s*c\s*r\s*i\s*p\s*t\s*)\s*:")
        .expect("illegal-attribute pattern is valid")
});

// href gets a stricter rule: a local path or fragment (at most one character
// after the leading / or #, and not a slash or backslash), or an explicit
// mailto:// / http:// / https://. Only the first alternative is anchored,
// faithfully to the policy this module preserves.
static LEGAL_HREF_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[/#][^/\\]?|mailto://|http://|https://")
        .expect("legal-href pattern is valid")
});

/// Sanitizes an HTML fragment with the built-in tag and attribute lists.
pub fn sanitize_html(input: &str) -> Result<String, WebscrubError> {
    sanitize_html_with(input, DEFAULT_TAGS, DEFAULT_ATTRIBUTES)
}

/// Sanitizes an HTML fragment, keeping only `allowed_tags` and, on them,
/// only `allowed_attributes`.
///
/// The output is rebuilt entirely from the tokens that survive filtering.
/// A tokenizer failure (input ending inside unterminated markup) is returned
/// as an error and no partial output is produced.
pub fn sanitize_html_with(
    input: &str,
    allowed_tags: &[&str],
    allowed_attributes: &[&str],
) -> Result<String, WebscrubError> {
    let mut tokenizer = Tokenizer::new(input);
    let mut buffer = String::with_capacity(input.len());

    // Single-slot suppression marker: the name of the ignore-tag currently
    // swallowing tokens, if any. Deliberately not a stack; a second
    // ignore-tag seen while suppressing does not change the active key.
    let mut ignoring: Option<String> = None;

    while let Some(token) = tokenizer.next_token()? {
        match token {
            Token::StartTag(mut tag) => {
                if ignoring.is_none() && allowed_tags.contains(&tag.name.as_str()) {
                    tag.attrs = clean_attributes(tag.attrs, allowed_attributes);
                    write_tag(&mut buffer, &tag, false);
                } else if ignoring.is_none() && IGNORE_TAGS.contains(&tag.name.as_str()) {
                    ignoring = Some(tag.name);
                }
                // otherwise: the markup is dropped, its text content is not
            }
            Token::SelfClosingTag(mut tag) => {
                if ignoring.is_none() && allowed_tags.contains(&tag.name.as_str()) {
                    tag.attrs = clean_attributes(tag.attrs, allowed_attributes);
                    write_tag(&mut buffer, &tag, true);
                } else if ignoring.as_deref() == Some(tag.name.as_str()) {
                    // A self-closing tag is not semantically a closing tag,
                    // but it has always cleared suppression here (the check
                    // mirrors the end-tag arm); kept for output
                    // compatibility even though it looks unintended.
                    ignoring = None;
                }
            }
            Token::EndTag(tag) => {
                if ignoring.is_none() && allowed_tags.contains(&tag.name.as_str()) {
                    buffer.push_str("</");
                    buffer.push_str(&tag.name);
                    buffer.push('>');
                } else if ignoring.as_deref() == Some(tag.name.as_str()) {
                    ignoring = None;
                }
            }
            Token::Text(text) => {
                if ignoring.is_none() {
                    buffer.push_str(&text);
                }
            }
            // comments and doctypes never survive sanitization
            Token::Comment(_) | Token::Doctype(_) => {}
        }
    }

    Ok(buffer)
}

/// Keeps only allow-listed attributes whose values pass the scheme and href
/// checks. Attributes whose value ends up empty are dropped entirely.
fn clean_attributes(attrs: Vec<Attribute>, allowed: &[&str]) -> Vec<Attribute> {
    let mut cleaned = Vec::with_capacity(attrs.len());
    for mut attr in attrs {
        if !allowed.contains(&attr.name.as_str()) {
            continue;
        }
        let lowered = attr.value.to_lowercase();
        if ILLEGAL_ATTR.is_match(&lowered) {
            attr.value.clear();
        }
        if attr.name == "href" && !LEGAL_HREF_ATTR.is_match(&lowered) {
            attr.value.clear();
        }
        if !attr.value.is_empty() {
            cleaned.push(attr);
        }
    }
    cleaned
}

fn write_tag(buffer: &mut String, tag: &Tag, self_closing: bool) {
    buffer.push('<');
    buffer.push_str(&tag.name);
    for attr in &tag.attrs {
        buffer.push(' ');
        buffer.push_str(&attr.name);
        buffer.push_str("=\"");
        buffer.push_str(&html_escape::encode_double_quoted_attribute(&attr.value));
        buffer.push('"');
    }
    if self_closing {
        buffer.push_str("/>");
    } else {
        buffer.push('>');
    }
}

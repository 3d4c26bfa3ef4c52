// webscrub-core/src/html/mod.rs
//! HTML processing: lexical tokenization, allow-list sanitization, and
//! plain-text extraction.

pub mod plaintext;
pub mod sanitizer;
pub mod tokenizer;

pub use plaintext::plain_text;
pub use sanitizer::{
    sanitize_html, sanitize_html_with, DEFAULT_ATTRIBUTES, DEFAULT_TAGS, IGNORE_TAGS,
};
pub use tokenizer::{Attribute, Tag, Token, Tokenizer};

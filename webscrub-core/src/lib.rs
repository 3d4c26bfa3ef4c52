// webscrub-core/src/lib.rs
//! # WebScrub Core Library
//!
//! `webscrub-core` is the utility layer behind a content site: HTML
//! sanitization and plain-text extraction for user-submitted markup,
//! URL/file-name slugging with transliteration, and the small collaborators
//! around them (file-system helpers, tar/gzip archiving, SMTP email with
//! templating, JSON/binary persistence, integer and millisecond-epoch
//! conversions).
//!
//! Every function is stateless with respect to its inputs. The only
//! process-wide state consists of fixed, read-only lookup tables (default
//! allow-lists, the transliteration map, compiled character classes) and
//! the email template registry, all initialized once and safe to read from
//! any thread without synchronization.
//!
//! ## Modules
//!
//! * `html`: lexical tokenization, allow-list sanitization, and plain-text
//!   extraction of HTML fragments.
//! * `slug`: URL-path, file-name, and base-name slugs plus accent
//!   flattening.
//! * `fsutil`: copy/delete/existence helpers and an rsync wrapper.
//! * `archive`: tar.gz archiving of directory trees.
//! * `email`: SMTP dispatch, HTML templating, address validation.
//! * `persist`: JSON and bincode object persistence to disk.
//! * `convert`: integer list parsing and millisecond-epoch conversions.
//! * `errors`: the library-wide `WebscrubError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use webscrub_core::{sanitize_html, plain_text, slug_name};
//!
//! fn main() -> Result<(), webscrub_core::WebscrubError> {
//!     let clean = sanitize_html("<p>hi<script>alert(1)</script></p>")?;
//!     assert_eq!(clean, "<p>hi</p>");
//!
//!     assert_eq!(plain_text("Line1<br>Line2"), "Line1\nLine2");
//!     assert_eq!(slug_name("a/b/C D.PDF"), "c-d.pdf");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`WebscrubError`]; the text-processing
//! functions outside the sanitizer are total and return plain strings (an
//! empty slug is valid output that callers must check for).
//!
//! License: MIT OR Apache-2.0

pub mod archive;
pub mod convert;
pub mod email;
pub mod errors;
pub mod fsutil;
pub mod html;
pub mod persist;
pub mod slug;

/// Re-exports the custom error type for clear error reporting.
pub use errors::WebscrubError;

/// Re-exports the HTML processing entry points and the token model for
/// callers that want to drive the tokenizer themselves.
pub use html::{
    plain_text, sanitize_html, sanitize_html_with, Attribute, Tag, Token, Tokenizer,
    DEFAULT_ATTRIBUTES, DEFAULT_TAGS, IGNORE_TAGS,
};

/// Re-exports the slugging helpers.
pub use slug::{flatten_accents, slug_base_name, slug_name, slug_path};

/// Re-exports file-system helpers and archiving.
pub use archive::tar_gz;
pub use fsutil::{
    copy_dir, copy_file, file_exists, make_dir_if_not_exists, remove_dir_contents, rsync,
    sort_files_by_date,
};

/// Re-exports email dispatch and templating.
pub use email::{
    is_valid_email, register_template, register_template_file, render_template, send_email,
    send_html_email,
};

/// Re-exports object persistence.
pub use persist::{load_bin, load_json, store_bin, store_json};

/// Re-exports parsing and time conversions.
pub use convert::{ms_to_time, now_utc_ms, parse_ints, time_to_ms};

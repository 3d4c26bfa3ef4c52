//! errors.rs - Custom error types for the webscrub-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `webscrub-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WebscrubError {
    #[error("Markup ended unexpectedly at byte {0}")]
    UnexpectedEof(usize),

    #[error("Invalid email server address '{0}': expected host:port")]
    EmailConfig(String),

    #[error("Invalid email address: {0}")]
    EmailAddress(#[from] lettre::address::AddressError),

    #[error("Failed to build email message: {0}")]
    EmailMessage(#[from] lettre::error::Error),

    #[error("Failed to send email: {0}")]
    EmailTransport(#[from] lettre::transport::smtp::Error),

    #[error("No email template registered under '{0}'")]
    TemplateNotFound(String),

    #[error("Failed to render email template: {0}")]
    Template(#[from] tinytemplate::error::Error),

    #[error("Failed to serialize data: {0}")]
    Serialization(String),

    #[error("Failed to deserialize data: {0}")]
    Deserialization(String),

    #[error("Failed to parse integer from '{0}'")]
    ParseInt(String),

    #[error("Invalid millisecond timestamp '{0}'")]
    Timestamp(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    // Add other specific error types as the project grows
    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}

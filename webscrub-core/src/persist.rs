// webscrub-core/src/persist.rs
//! JSON and binary object persistence.
//!
//! Serde values go to disk either as pretty-printed JSON (debuggable,
//! diffable) or as compact bincode (fast, opaque). Files are created
//! owner-read/write only on Unix since these are typically session dumps
//! and caches.
//!
//! License: MIT OR Apache-2.0

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::WebscrubError;

const BINCODE_CONFIG: bincode::config::Configuration = bincode::config::standard();

/// Serializes `data` as pretty JSON and writes it to `path`.
pub fn store_json<T: Serialize>(data: &T, path: impl AsRef<Path>) -> Result<(), WebscrubError> {
    let bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| WebscrubError::Serialization(e.to_string()))?;
    write_private(path.as_ref(), &bytes)
}

/// Reads `path` and deserializes its JSON contents.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, WebscrubError> {
    let bytes = fs::read(path.as_ref())?;
    serde_json::from_slice(&bytes).map_err(|e| WebscrubError::Deserialization(e.to_string()))
}

/// Serializes `data` with bincode and writes it to `path`.
pub fn store_bin<T: Serialize>(data: &T, path: impl AsRef<Path>) -> Result<(), WebscrubError> {
    let bytes = bincode::serde::encode_to_vec(data, BINCODE_CONFIG)
        .map_err(|e| WebscrubError::Serialization(e.to_string()))?;
    write_private(path.as_ref(), &bytes)
}

/// Reads `path` and deserializes its bincode contents.
pub fn load_bin<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, WebscrubError> {
    let bytes = fs::read(path.as_ref())?;
    let (value, _) = bincode::serde::decode_from_slice(&bytes, BINCODE_CONFIG)
        .map_err(|e| WebscrubError::Deserialization(e.to_string()))?;
    Ok(value)
}

#[cfg(unix)]
fn write_private(path: &Path, bytes: &[u8]) -> Result<(), WebscrubError> {
    use std::os::unix::fs::OpenOptionsExt;
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(bytes)?;
    Ok(())
}

#[cfg(not(unix))]
fn write_private(path: &Path, bytes: &[u8]) -> Result<(), WebscrubError> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    Ok(())
}

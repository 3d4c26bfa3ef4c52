// webscrub-core/src/slug/mod.rs
//! URL- and filename-safe slugs.
//!
//! All functions here are total: illegal characters are flattened or
//! removed rather than reported, so the result may be an empty string and
//! callers must treat that as invalid input.
//!
//! The shared pipeline in `clean_string` runs in a fixed order - trim,
//! transliterate, separators to dashes, strip disallowed characters,
//! collapse dash runs. Transliteration has to come before the character
//! strip, or accented letters would vanish instead of flattening.
//!
//! License: MIT OR Apache-2.0

mod translit;

use once_cell::sync::Lazy;
use regex::Regex;

use translit::TRANSLITERATIONS;

// Very restrictive: these slugs end up in URLs and file names.
static ILLEGAL_PATH_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^[:alnum:]~\-./]").expect("path character class is valid"));

static ILLEGAL_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^[:alnum:]\-.]").expect("name character class is valid"));

// Joining characters replaced with the canonical separator instead of
// being removed outright.
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ &_=+:]").expect("separator class is valid"));

static BASE_NAME_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[./]").expect("base-name separator class is valid"));

static DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("dash run pattern is valid"));

/// Makes a string safe to use as a URL path: lowercased, `..` removed,
/// lexically cleaned, then restricted to `[alnum ~ - . /]`.
///
/// May return an empty string; the caller must check.
pub fn slug_path(s: &str) -> String {
    let lowered = s.to_lowercase();
    let without_dotdot = lowered.replace("..", "");
    let cleaned = clean_path(&without_dotdot);
    clean_string(&cleaned, &ILLEGAL_PATH_CHARS)
}

/// Makes a string safe to use as a file name: the path's base component,
/// lowercased and restricted to `[alnum - .]`.
///
/// May return an empty string; the caller must check.
pub fn slug_name(s: &str) -> String {
    let lowered = s.to_lowercase();
    let base = clean_path(path_base(&lowered));
    clean_string(&base, &ILLEGAL_NAME_CHARS)
}

/// Makes a string safe to use in a file name, turning `.` and `/` into
/// dashes. Unlike [`slug_name`] this neither normalizes the path nor the
/// case.
///
/// May return an empty string; the caller must check.
pub fn slug_base_name(s: &str) -> String {
    let dashed = BASE_NAME_SEPARATORS.replace_all(s, "-");
    clean_string(&dashed, &ILLEGAL_NAME_CHARS)
}

/// Replaces accented and Cyrillic characters with ASCII equivalents from
/// the fixed transliteration table; unmapped characters pass through.
pub fn flatten_accents(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match TRANSLITERATIONS.get(&c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// The shared five-step slug pipeline. `illegal` is the character class to
/// strip after accents are flattened and separators dashed.
fn clean_string(s: &str, illegal: &Regex) -> String {
    // trailing/leading spaces would otherwise become stray dashes
    let trimmed = s.trim_matches(' ');
    let flattened = flatten_accents(trimmed);
    let dashed = SEPARATORS.replace_all(&flattened, "-");
    let stripped = illegal.replace_all(&dashed, "");
    DASHES.replace_all(&stripped, "-").into_owned()
}

/// Lexically normalizes a slash-separated path: collapses `//`, resolves
/// `.` and `..` segments, drops trailing slashes. Purely textual, never
/// touches the filesystem. Empty input cleans to `"."`.
fn clean_path(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let bytes = path.as_bytes();
    let n = bytes.len();
    let rooted = bytes[0] == b'/';

    let mut out: Vec<u8> = Vec::with_capacity(n);
    let mut r = 0;
    let mut dotdot = 0;
    if rooted {
        out.push(b'/');
        r = 1;
        dotdot = 1;
    }

    while r < n {
        if bytes[r] == b'/' {
            r += 1;
        } else if bytes[r] == b'.' && (r + 1 == n || bytes[r + 1] == b'/') {
            // "." element
            r += 1;
        } else if bytes[r] == b'.'
            && r + 1 < n
            && bytes[r + 1] == b'.'
            && (r + 2 == n || bytes[r + 2] == b'/')
        {
            // ".." element: backtrack if possible
            r += 2;
            if out.len() > dotdot {
                let mut w = out.len() - 1;
                while w > dotdot && out[w] != b'/' {
                    w -= 1;
                }
                out.truncate(w);
            } else if !rooted {
                // cannot backtrack past the start of a relative path
                if !out.is_empty() {
                    out.push(b'/');
                }
                out.extend_from_slice(b"..");
                dotdot = out.len();
            }
        } else {
            // ordinary element; copying bytewise is safe because multi-byte
            // UTF-8 sequences never contain b'/'
            if (rooted && out.len() != 1) || (!rooted && !out.is_empty()) {
                out.push(b'/');
            }
            while r < n && bytes[r] != b'/' {
                out.push(bytes[r]);
                r += 1;
            }
        }
    }

    if out.is_empty() {
        return ".".to_string();
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Last element of a slash-separated path, with trailing slashes removed.
fn path_base(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

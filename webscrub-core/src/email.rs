// webscrub-core/src/email.rs
//! SMTP email dispatch with HTML bodies and templated content.
//!
//! Messages go out over a STARTTLS connection that accepts invalid
//! certificates, matching the self-hosted SMTP relays this is pointed at.
//! Template sources are registered once per process and rendered with
//! `tinytemplate` on each send.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use lazy_static::lazy_static;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Message, SmtpTransport, Transport};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::errors::WebscrubError;

lazy_static! {
    /// Process-wide registry of email template sources, keyed by name.
    /// Sources are cached here once; compilation happens per render because
    /// the template engine borrows its input.
    static ref EMAIL_TEMPLATES: RwLock<HashMap<String, String>> = RwLock::new(HashMap::new());
}

// The HTML5 email pattern: the practical subset of RFC 5322 that browsers
// accept in <input type="email">.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Checks whether `s` looks like a deliverable email address.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}

/// Sends an HTML-bodied email through `server` (`host:port`),
/// authenticating as `from` with `password`.
pub fn send_email(
    server: &str,
    password: &str,
    from: &str,
    subject: &str,
    body: &str,
    to: &[&str],
) -> Result<(), WebscrubError> {
    let (host, port) = split_host_port(server)?;

    let mut builder = Message::builder()
        .from(from.parse()?)
        .subject(subject)
        .header(ContentType::TEXT_HTML);
    for recipient in to {
        builder = builder.to(recipient.parse()?);
    }
    let message = builder.body(body.to_string())?;

    let tls = TlsParameters::builder(host.to_string())
        .dangerous_accept_invalid_certs(true)
        .build()?;
    let mailer = SmtpTransport::builder_dangerous(host)
        .port(port)
        .tls(Tls::Opportunistic(tls))
        .credentials(Credentials::new(from.to_string(), password.to_string()))
        .build();

    debug!("sending email via {} to {} recipient(s)", server, to.len());
    mailer.send(&message)?;
    Ok(())
}

/// Renders the registered template `template_name` with `params` and sends
/// the result as an HTML email.
pub fn send_html_email<P: Serialize>(
    server: &str,
    password: &str,
    from: &str,
    subject: &str,
    template_name: &str,
    params: &P,
    to: &[&str],
) -> Result<(), WebscrubError> {
    let body = render_template(template_name, params)?;
    send_email(server, password, from, subject, &body, to)
}

/// Registers (or replaces) a template source under `name`.
pub fn register_template(name: &str, source: &str) {
    EMAIL_TEMPLATES
        .write()
        .unwrap()
        .insert(name.to_string(), source.to_string());
}

/// Reads a template file and registers it under `name`.
pub fn register_template_file(name: &str, path: impl AsRef<Path>) -> Result<(), WebscrubError> {
    let source = std::fs::read_to_string(path.as_ref())?;
    register_template(name, &source);
    Ok(())
}

/// Renders a registered template with the given parameters.
pub fn render_template<P: Serialize>(name: &str, params: &P) -> Result<String, WebscrubError> {
    let templates = EMAIL_TEMPLATES.read().unwrap();
    let source = templates
        .get(name)
        .ok_or_else(|| WebscrubError::TemplateNotFound(name.to_string()))?;

    let mut tt = TinyTemplate::new();
    tt.add_template(name, source)?;
    Ok(tt.render(name, params)?)
}

fn split_host_port(server: &str) -> Result<(&str, u16), WebscrubError> {
    let (host, port_str) = server
        .rsplit_once(':')
        .ok_or_else(|| WebscrubError::EmailConfig(server.to_string()))?;
    if host.is_empty() {
        return Err(WebscrubError::EmailConfig(server.to_string()));
    }
    let port = port_str
        .parse::<u16>()
        .map_err(|_| WebscrubError::EmailConfig(server.to_string()))?;
    Ok((host, port))
}

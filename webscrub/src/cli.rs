// webscrub/src/cli.rs
//! This file defines the command-line interface (CLI) for the webscrub
//! application, including all available commands and their arguments.
//!
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "webscrub",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sanitize HTML, extract plain text, and build safe slugs",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all informational and debug messages.
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `webscrub` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes an HTML fragment with tag/attribute allow-lists.
    #[command(about = "Sanitizes an HTML fragment, keeping only allow-listed tags and attributes.")]
    Sanitize(SanitizeCommand),

    /// Strips markup and returns display-safe plain text.
    #[command(about = "Strips markup from an HTML fragment and prints plain text.")]
    Text(TextCommand),

    /// Builds a URL- or filename-safe slug from a string.
    #[command(about = "Builds a URL- or filename-safe slug from a string.")]
    Slug(SlugCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Allow only these tag names (comma-separated) instead of the defaults.
    #[arg(long, short = 't', value_delimiter = ',', help = "Allow only these tag names (comma-separated).")]
    pub tags: Vec<String>,

    /// Allow only these attribute names (comma-separated) instead of the defaults.
    #[arg(long, short = 'a', value_delimiter = ',', help = "Allow only these attribute names (comma-separated).")]
    pub attributes: Vec<String>,
}

/// Arguments for the `text` command.
#[derive(Parser, Debug)]
pub struct TextCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write plain text to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `slug` command.
#[derive(Parser, Debug)]
pub struct SlugCommand {
    /// Which slug flavor to produce.
    #[arg(value_enum, help = "Which slug flavor to produce.")]
    pub kind: SlugKind,

    /// The string to slug.
    #[arg(value_name = "VALUE", help = "The string to slug.")]
    pub value: String,
}

/// Enum for selecting the slug flavor.
#[derive(Debug, Clone, ValueEnum, PartialEq)]
pub enum SlugKind {
    /// URL path slug: keeps directory separators.
    Path,
    /// File name slug: base component only, lowercased.
    Name,
    /// Base name slug: dots and slashes become dashes, case kept.
    Basename,
}

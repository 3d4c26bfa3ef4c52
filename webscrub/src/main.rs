// webscrub/src/main.rs
//! WebScrub Entry Point.
//!
//! Parses the CLI, wires up logging, and dispatches to the library
//! operations in `webscrub-core`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;

use webscrub_core::{plain_text, sanitize_html_with, DEFAULT_ATTRIBUTES, DEFAULT_TAGS};
use webscrub_core::{slug_base_name, slug_name, slug_path};

mod cli;
mod logger;

use cli::{Cli, Commands, SanitizeCommand, SlugCommand, SlugKind, TextCommand};

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(Some(log::LevelFilter::Warn));
    }

    match args.command {
        Commands::Sanitize(cmd) => run_sanitize(cmd),
        Commands::Text(cmd) => run_text(cmd),
        Commands::Slug(cmd) => run_slug(cmd),
    }
}

/// Reads the whole input, from a file when one was given, stdin otherwise.
fn read_input(input_file: Option<&Path>) -> Result<String> {
    match input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Writes the result to a file when one was given, stdout otherwise.
fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
    }
}

fn run_sanitize(cmd: SanitizeCommand) -> Result<()> {
    let input = read_input(cmd.input_file.as_deref())?;
    debug!("Sanitizing {} bytes of input", input.len());

    // each override stands alone; an omitted list keeps its default
    let tags: Vec<&str> = if cmd.tags.is_empty() {
        DEFAULT_TAGS.to_vec()
    } else {
        cmd.tags.iter().map(String::as_str).collect()
    };
    let attributes: Vec<&str> = if cmd.attributes.is_empty() {
        DEFAULT_ATTRIBUTES.to_vec()
    } else {
        cmd.attributes.iter().map(String::as_str).collect()
    };
    let sanitized =
        sanitize_html_with(&input, &tags, &attributes).context("Failed to sanitize input")?;

    write_output(cmd.output.as_deref(), &sanitized)
}

fn run_text(cmd: TextCommand) -> Result<()> {
    let input = read_input(cmd.input_file.as_deref())?;
    debug!("Extracting plain text from {} bytes of input", input.len());

    let text = plain_text(&input);
    write_output(cmd.output.as_deref(), &text)
}

fn run_slug(cmd: SlugCommand) -> Result<()> {
    let slug = match cmd.kind {
        SlugKind::Path => slug_path(&cmd.value),
        SlugKind::Name => slug_name(&cmd.value),
        SlugKind::Basename => slug_base_name(&cmd.value),
    };

    if slug.is_empty() {
        bail!("No usable characters left after slugging {:?}", cmd.value);
    }

    println!("{}", slug);
    Ok(())
}

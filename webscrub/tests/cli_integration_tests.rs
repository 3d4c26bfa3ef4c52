// webscrub/tests/cli_integration_tests.rs
//! This file contains command-line interface (CLI) integration tests for the `webscrub` application.
//!
//! These tests execute the real `webscrub` binary and verify its behavior
//! as a user would see it:
//! - Sanitizing HTML from stdin and from input files.
//! - Output redirection to files.
//! - Custom tag/attribute allow-lists passed on the command line.
//! - Plain-text extraction.
//! - The three slug flavors, including the non-zero exit when a slug
//!   comes out empty.
//!
//! The tests use `assert_cmd` to spawn the binary and capture `stdout`
//! and `stderr`. `tempfile` provides isolated input/output files.

use anyhow::Result;
#[allow(unused_imports)] // This is often used by `predicates::str::contains`
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

#[allow(unused_imports)] // Used for `Command::cargo_bin` and `assert` method
use assert_cmd::prelude::*;
use assert_cmd::Command;

/// Helper function to run the `webscrub` binary with stdin input and arguments.
fn run_webscrub(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("webscrub").unwrap();
    cmd.args(args);
    cmd.write_stdin(input.as_bytes());
    cmd.assert()
}

#[test]
fn sanitize_strips_scripts_and_event_handlers() -> Result<()> {
    run_webscrub(
        r#"<p onclick="x()">hi<script>alert(1)</script></p>"#,
        &["-q", "sanitize"],
    )
    .success()
    .stdout(predicate::eq("<p>hi</p>\n"));
    Ok(())
}

#[test]
fn sanitize_reads_and_writes_files() -> Result<()> {
    let mut input_file = NamedTempFile::new()?;
    write!(input_file, r#"<div><a href="https://example.com">link</a></div>"#)?;
    let output_file = NamedTempFile::new()?;

    let mut cmd = Command::cargo_bin("webscrub")?;
    cmd.args([
        "-q",
        "sanitize",
        "-i",
        input_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
    ]);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = fs::read_to_string(output_file.path())?;
    assert_eq!(written, r#"<div><a href="https://example.com">link</a></div>"#);
    Ok(())
}

#[test]
fn sanitize_honors_custom_allow_lists() -> Result<()> {
    run_webscrub(
        r#"<em>x</em><b>y</b><a href="/z">z</a>"#,
        &["-q", "sanitize", "--tags", "em,a", "--attributes", "href"],
    )
    .success()
    .stdout(predicate::eq("<em>x</em>y<a href=\"/z\">z</a>\n"));
    Ok(())
}

#[test]
fn tags_override_keeps_default_attributes() -> Result<()> {
    run_webscrub(
        r#"<em class="x">y</em><b>z</b>"#,
        &["-q", "sanitize", "--tags", "em"],
    )
    .success()
    .stdout(predicate::eq("<em class=\"x\">y</em>z\n"));
    Ok(())
}

#[test]
fn attributes_override_keeps_default_tags() -> Result<()> {
    run_webscrub(
        r#"<p id="a" class="b">x</p>"#,
        &["-q", "sanitize", "--attributes", "id"],
    )
    .success()
    .stdout(predicate::eq("<p id=\"a\">x</p>\n"));
    Ok(())
}

#[test]
fn sanitize_drops_tags_outside_the_allow_list() -> Result<()> {
    run_webscrub(
        "<p><b>keep the words</b></p>",
        &["-q", "sanitize", "--tags", "i"],
    )
    .success()
    .stdout(predicate::eq("keep the words\n"));
    Ok(())
}

#[test]
fn text_converts_breaks_to_newlines() -> Result<()> {
    run_webscrub("Line1<br>Line2", &["-q", "text"])
        .success()
        .stdout(predicate::eq("Line1\nLine2\n"));
    Ok(())
}

#[test]
fn text_decodes_entities_for_display() -> Result<()> {
    run_webscrub("<p>Fish &amp; chips</p>", &["-q", "text"])
        .success()
        .stdout(predicate::str::contains("Fish & chips"));
    Ok(())
}

#[test]
fn slug_name_lowercases_and_keeps_extension() -> Result<()> {
    run_webscrub("", &["-q", "slug", "name", "a/b/C D.PDF"])
        .success()
        .stdout(predicate::eq("c-d.pdf\n"));
    Ok(())
}

#[test]
fn slug_path_keeps_separators_and_flattens_accents() -> Result<()> {
    run_webscrub("", &["-q", "slug", "path", "Blog/Étienne's Page"])
        .success()
        .stdout(predicate::eq("blog/etiennes-page\n"));
    Ok(())
}

#[test]
fn slug_basename_preserves_case_and_dashes_dots() -> Result<()> {
    run_webscrub("", &["-q", "slug", "basename", "Report.Final.V2"])
        .success()
        .stdout(predicate::eq("Report-Final-V2\n"));
    Ok(())
}

#[test]
fn empty_slug_is_an_error() -> Result<()> {
    run_webscrub("", &["-q", "slug", "name", "???"])
        .failure()
        .stderr(predicate::str::contains("No usable characters"));
    Ok(())
}

#[test]
fn no_arguments_shows_usage() -> Result<()> {
    let mut cmd = Command::cargo_bin("webscrub")?;
    cmd.assert().failure();
    Ok(())
}

// webscrub-core/tests/sanitize_integration_tests.rs
//! End-to-end checks of the public sanitization API: the documented
//! safety properties, not individual token handling (the unit tests
//! beside each module cover those).

use webscrub_core::{plain_text, sanitize_html, sanitize_html_with, slug_name, slug_path};

#[test]
fn script_contents_never_reach_the_output() {
    let hostile = [
        "<script>alert(1)</script>",
        "<p>x<script>document.cookie</script></p>",
        "<SCRIPT SRC=//evil.example/x.js></SCRIPT>",
        "<style>body{background:url('javascript:x')}</style>",
    ];
    for input in hostile {
        let out = sanitize_html(input).expect("sanitize failed");
        assert!(!out.contains("alert"), "payload leaked for {}: {}", input, out);
        assert!(!out.contains("cookie"), "payload leaked for {}: {}", input, out);
        assert!(!out.to_lowercase().contains("script"), "tag leaked for {}: {}", input, out);
        assert!(!out.contains("background"), "style leaked for {}: {}", input, out);
    }
}

#[test]
fn event_handlers_and_hostile_urls_are_stripped() {
    let out = sanitize_html(
        r#"<a href="javascript:alert(1)" onclick="alert(2)" onmouseover="alert(3)">click</a>"#,
    )
    .expect("sanitize failed");
    assert_eq!(out, "<a>click</a>");

    let out = sanitize_html(r#"<img src="data:text/html;base64,PHNjcmlwdD4=" alt="x">"#)
        .expect("sanitize failed");
    assert_eq!(out, r#"<img alt="x">"#);
}

#[test]
fn clean_markup_round_trips_semantically() {
    // Already-normalized markup built only from allowed tags/attributes
    // passes through byte-identically.
    let inputs = [
        r#"<h1>Title</h1><p class="lede">Intro</p>"#,
        r##"<ul><li><a href="/a">a</a></li><li><a href="#b">b</a></li></ul>"##,
        r#"<blockquote><pre><code>let x = 1;</code></pre></blockquote>"#,
    ];
    for input in inputs {
        assert_eq!(sanitize_html(input).expect("sanitize failed"), input);
    }
}

#[test]
fn resserialization_normalizes_spacing_and_quoting() {
    let out = sanitize_html("<p   class='a'    id=b >x</p >").expect("sanitize failed");
    assert_eq!(out, r#"<p class="a" id="b">x</p>"#);
}

#[test]
fn sanitize_then_sanitize_is_a_fixed_point() {
    let nasty = r#"<div><p onclick="x()">a &amp; b</p><script>no</script><a href="https://e.com/?q=1&amp;r=2">l</a></div>"#;
    let once = sanitize_html(nasty).expect("first pass");
    let twice = sanitize_html(&once).expect("second pass");
    assert_eq!(once, twice);
}

#[test]
fn caller_allow_lists_are_authoritative() {
    // an empty allow-list strips every tag but keeps text
    let out = sanitize_html_with("<p><b>keep the words</b></p>", &[], &[])
        .expect("sanitize failed");
    assert_eq!(out, "keep the words");

    // ignore-tags stay dead even when allow-listing unrelated tags
    let out = sanitize_html_with("<em>x</em><script>y</script>", &["em"], &[])
        .expect("sanitize failed");
    assert_eq!(out, "<em>x</em>");
}

#[test]
fn plain_text_of_sanitized_markup_reads_naturally() {
    let sanitized = sanitize_html("<h1>Title</h1><p>One &amp; two</p><p>Three</p>")
        .expect("sanitize failed");
    assert_eq!(plain_text(&sanitized), "TitleOne & two\nThree\n");
}

#[test]
fn slugs_for_upload_names_are_filesystem_safe() {
    let name = slug_name("../uploads/Résumé FINAL (2).pdf");
    assert_eq!(name, "resume-final-2.pdf");
    assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.'));

    let path = slug_path("Blog/Étienne's Page");
    assert_eq!(path, "blog/etiennes-page");
    assert!(!path.contains(".."));
}

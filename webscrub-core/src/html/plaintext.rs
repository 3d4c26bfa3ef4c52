// webscrub-core/src/html/plaintext.rs
//! Plain-text extraction from HTML fragments.
//!
//! Unlike the sanitizer this never fails: every input maps to some text.
//! The processing order matters and is pinned by callers that compare
//! output byte-for-byte: line-break normalization, tag stripping, a fixed
//! set of entity replacements, a full entity decode, a display re-escape,
//! and finally the selective unescape of quotes and `&` before a space.
//!
//! License: MIT OR Apache-2.0

/// Strips markup from `input` and returns display-safe plain text.
///
/// The result is escaped for HTML display (so it may still contain
/// entities), with double/single quotes and `& ` deliberately left as
/// literal characters for readability.
pub fn plain_text(input: &str) -> String {
    let mut output = if !input.contains(['<', '>']) {
        // fast path: nothing that looks like a tag
        input.to_string()
    } else {
        // Literal newlines carry no meaning in markup (outside pre), so they
        // go first; then explicit break tags become the real line breaks.
        let mut s = input.replace('\n', "");
        for pat in ["</p>", "<br>", "</br>", "<br/>", "<br />"] {
            s = s.replace(pat, "\n");
        }

        let mut stripped = String::with_capacity(s.len());
        let mut in_tag = false;
        for c in s.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => stripped.push(c),
                _ => {}
            }
        }
        stripped
    };

    // A few common typographic entities become their plain equivalents
    // before the general decode.
    for (entity, plain) in [
        ("&#8216;", "'"),
        ("&#8217;", "'"),
        ("&#8220;", "\""),
        ("&#8221;", "\""),
        ("&nbsp;", " "),
        ("&quot;", "\""),
        ("&apos;", "'"),
    ] {
        output = output.replace(entity, plain);
    }

    // Decode whatever named/numeric references remain (accents encoded as
    // entities, etc.), then re-escape for display in case tag stripping
    // left any live characters behind.
    output = html_escape::decode_html_entities(&output).into_owned();
    output = escape_display(&output);

    // Quotes read better literal, and so does "& " between words. The
    // doubled &amp;amp; form shows up in feeds that were escaped twice.
    output = output.replace("&#34;", "\"");
    output = output.replace("&#39;", "'");
    output = output.replace("&amp; ", "& "); // NB space after
    output = output.replace("&amp;amp; ", "& "); // NB space after
    output
}

// Escapes <, >, &, ' and " using the numeric forms for the quotes; the
// selective unescape above is written against exactly these forms.
fn escape_display(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_path_returns_pure_text_unchanged() {
        assert_eq!(plain_text("just words"), "just words");
    }

    #[test]
    fn break_tags_become_newlines() {
        assert_eq!(plain_text("Line1<br>Line2"), "Line1\nLine2");
        assert_eq!(plain_text("Line1<br/>Line2"), "Line1\nLine2");
        assert_eq!(plain_text("Line1<br />Line2"), "Line1\nLine2");
        assert_eq!(plain_text("<p>one</p><p>two</p>"), "one\ntwo\n");
    }

    #[test]
    fn literal_newlines_are_dropped_when_tags_present() {
        assert_eq!(plain_text("<p>one\ntwo</p>"), "onetwo\n");
    }

    #[test]
    fn tags_are_stripped_but_content_kept() {
        assert_eq!(
            plain_text("<div><strong>bold</strong> and <em>italic</em></div>"),
            "bold and italic"
        );
    }

    #[test]
    fn common_entities_become_plain_glyphs() {
        assert_eq!(plain_text("<p>&#8220;quoted&#8221;</p>"), "\"quoted\"\n");
        assert_eq!(plain_text("<p>one&nbsp;two</p>"), "one two\n");
        assert_eq!(plain_text("<p>it&apos;s</p>"), "it's\n");
    }

    #[test]
    fn accent_entities_are_decoded() {
        assert_eq!(plain_text("<p>caf&eacute;</p>"), "caf\u{e9}\n");
    }

    #[test]
    fn ampersand_before_space_stays_literal() {
        assert_eq!(plain_text("<p>salt & pepper</p>"), "salt & pepper\n");
        assert_eq!(plain_text("<p>salt &amp; pepper</p>"), "salt & pepper\n");
    }

    #[test]
    fn ampersand_not_before_space_stays_escaped() {
        assert_eq!(plain_text("<p>AT&T</p>"), "AT&amp;T\n");
    }

    #[test]
    fn quotes_come_out_literal() {
        assert_eq!(plain_text(r#"<p>say "hi"</p>"#), "say \"hi\"\n");
    }
}

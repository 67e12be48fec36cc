//! Markdown rendering of search responses.
//!
//! Output layout:
//!
//! ```text
//! ## 概要:
//! <summary>
//!
//! ---
//!
//! ## 検索結果:
//! ### 1. [title](link)
//! snippet with *highlights*
//!
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::data_models::{SearchResponse, SearchResult};

pub const SUMMARY_HEADING: &str = "## 概要:";
pub const RESULTS_HEADING: &str = "## 検索結果:";
pub const NO_RESULTS: &str = "関連する結果は見つかりませんでした。";
pub const NO_TITLE: &str = "タイトルなし";

pub const GCS_PREFIX: &str = "gs://";
pub const GCS_BROWSER_PREFIX: &str = "https://storage.cloud.google.com/";

const HIGHLIGHT_OPEN: &str = "<em>";
const HIGHLIGHT_CLOSE: &str = "</em>";
const EMPHASIS: &str = "*";

/// Everything but unreserved characters and the URL delimiters `/:?=&#`.
const LINK_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/')
    .remove(b':')
    .remove(b'?')
    .remove(b'=')
    .remove(b'&')
    .remove(b'#');

fn starts_with_hex_pair(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_hexdigit() && bytes[1].is_ascii_hexdigit()
}

/// Rewrites a `gs://` object URI to its browser URL and percent-encodes the result.
///
/// A `%` that already starts an escape (`%XX`) is kept, any other `%` becomes `%25`,
/// so normalizing twice gives the same link.
pub fn normalize_link(link: &str) -> String {
    let link = match link.strip_prefix(GCS_PREFIX) {
        Some(rest) => format!("{GCS_BROWSER_PREFIX}{rest}"),
        None => link.to_string(),
    };

    let mut out = String::with_capacity(link.len());
    let mut rest = link.as_str();
    while let Some(at) = rest.find('%') {
        out.extend(utf8_percent_encode(&rest[..at], LINK_ENCODE_SET));
        rest = &rest[at + 1..];
        if starts_with_hex_pair(rest) {
            out.push('%');
        } else {
            out.push_str("%25");
        }
    }
    out.extend(utf8_percent_encode(rest, LINK_ENCODE_SET));
    out
}

/// Replaces highlight tags with Markdown emphasis markers.
pub fn highlight_snippet(snippet: &str) -> String {
    snippet
        .replace(HIGHLIGHT_OPEN, EMPHASIS)
        .replace(HIGHLIGHT_CLOSE, EMPHASIS)
}

fn render_result(out: &mut String, index: usize, result: &SearchResult) {
    let title = result.title.as_deref().unwrap_or(NO_TITLE);
    let link = result
        .link
        .as_deref()
        .filter(|l| !l.is_empty())
        .map(normalize_link);

    let heading = match link {
        Some(link) => format!("### {index}. [{title}]({link})\n"),
        None => format!("### {index}. {title}\n"),
    };
    out.push_str(&heading);

    if let Some(snippet) = result.snippet.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(&highlight_snippet(snippet));
        out.push('\n');
    }
    out.push('\n');
}

/// Renders a response as Markdown. Results keep backend rank order.
pub fn render(response: &SearchResponse) -> String {
    let mut out = String::new();

    if let Some(summary) = response.summary_text.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(SUMMARY_HEADING);
        out.push('\n');
        out.push_str(summary);
        out.push_str("\n\n---\n\n");
    }

    out.push_str(RESULTS_HEADING);
    out.push('\n');

    if response.results.is_empty() {
        out.push_str(NO_RESULTS);
        return out;
    }

    for (i, result) in response.results.iter().enumerate() {
        render_result(&mut out, i + 1, result);
    }
    out
}

#[test]
fn test_normalize_link() {
    assert_eq!(
        normalize_link("gs://bucket/case study.pdf"),
        "https://storage.cloud.google.com/bucket/case%20study.pdf"
    );
    assert_eq!(
        normalize_link("https://cloud.google.com/docs?hl=ja&q=a#top"),
        "https://cloud.google.com/docs?hl=ja&q=a#top"
    );
    // only the leading prefix is rewritten
    assert_eq!(
        normalize_link("gs://gs://b/a.pdf"),
        "https://storage.cloud.google.com/gs://b/a.pdf"
    );
    assert_eq!(
        normalize_link("https://example.com/a/gs://b"),
        "https://example.com/a/gs://b"
    );
}

#[test]
fn test_normalize_link_encodes_non_ascii_once() {
    let once = normalize_link("gs://jirei/イオン_事例.pdf");
    assert_eq!(
        once,
        "https://storage.cloud.google.com/jirei/%E3%82%A4%E3%82%AA%E3%83%B3_%E4%BA%8B%E4%BE%8B.pdf"
    );
    assert_eq!(normalize_link(&once), once);
}

#[test]
fn test_normalize_link_escapes_stray_percent() {
    let once = normalize_link("gs://b/100%.pdf");
    assert_eq!(once, "https://storage.cloud.google.com/b/100%25.pdf");
    assert_eq!(normalize_link(&once), once);

    // existing escapes survive; a trailing or non-hex `%` does not
    assert_eq!(
        normalize_link("https://a.test/x%20y%zz%4"),
        "https://a.test/x%20y%25zz%254"
    );
    assert_eq!(normalize_link("https://a.test/50%"), "https://a.test/50%25");
}

#[test]
fn test_highlight_snippet() {
    assert_eq!(
        highlight_snippet("<em>生成 AI</em> を <em>活用</em>"),
        "*生成 AI* を *活用*"
    );
    assert_eq!(highlight_snippet("plain"), "plain");
}

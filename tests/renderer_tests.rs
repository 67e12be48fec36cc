use jirei_forest::data_models::{SearchResponse, SearchResult};
use jirei_forest::renderer::{NO_RESULTS, NO_TITLE, RESULTS_HEADING, normalize_link, render};

mod test_helpers {
    use super::*;

    pub fn result(title: Option<&str>, link: Option<&str>, snippet: Option<&str>) -> SearchResult {
        SearchResult {
            title: title.map(str::to_string),
            link: link.map(str::to_string),
            snippet: snippet.map(str::to_string),
        }
    }

    pub fn response(summary: Option<&str>, results: Vec<SearchResult>) -> SearchResponse {
        SearchResponse {
            summary_text: summary.map(str::to_string),
            results,
        }
    }
}

use test_helpers::*;

#[test]
fn test_render_concrete_case_study_answer() {
    let res = response(
        Some("概要テキスト"),
        vec![result(Some("A社"), Some("gs://b/a.pdf"), Some("<em>活用</em>事例"))],
    );

    let md = render(&res);
    assert_eq!(
        md,
        "## 概要:\n概要テキスト\n\n---\n\n\
         ## 検索結果:\n\
         ### 1. [A社](https://storage.cloud.google.com/b/a.pdf)\n\
         *活用*事例\n\n"
    );
}

#[test]
fn test_render_no_results() {
    let md = render(&response(None, vec![]));
    assert_eq!(md, format!("{RESULTS_HEADING}\n{NO_RESULTS}"));
    assert!(!md.contains("### "));
}

#[test]
fn test_render_no_results_still_shows_summary() {
    let md = render(&response(Some("まとめ"), vec![]));
    assert!(md.starts_with("## 概要:\nまとめ\n\n---\n\n"));
    assert!(md.ends_with(NO_RESULTS));
}

#[test]
fn test_empty_summary_is_skipped() {
    let md = render(&response(
        Some(""),
        vec![result(Some("T"), Some("https://example.com"), None)],
    ));
    assert!(md.starts_with(RESULTS_HEADING));
    assert!(!md.contains("---"));
}

#[test]
fn test_summary_precedes_results_heading() {
    let md = render(&response(
        Some("summary"),
        vec![result(Some("T"), None, None)],
    ));
    let summary_at = md.find("## 概要:").unwrap();
    let results_at = md.find(RESULTS_HEADING).unwrap();
    assert!(summary_at < results_at);
}

#[test]
fn test_results_keep_rank_order_and_numbering() {
    let results = (1..=5)
        .map(|i| {
            let title = format!("doc{i}");
            result(Some(&title), Some(&format!("https://example.com/{i}")), None)
        })
        .collect();

    let md = render(&response(None, results));
    let mut last = 0;
    for i in 1..=5 {
        let heading = format!("### {i}. [doc{i}](https://example.com/{i})");
        let at = md.find(&heading).unwrap();
        assert!(at >= last);
        last = at;
    }
}

#[test]
fn test_missing_title_uses_placeholder() {
    let md = render(&response(None, vec![result(None, Some("https://a.test/x"), None)]));
    assert!(md.contains(&format!("### 1. [{NO_TITLE}](https://a.test/x)\n")));
}

#[test]
fn test_missing_or_empty_link_renders_plain_heading() {
    let md = render(&response(
        None,
        vec![
            result(Some("no link"), None, Some("s")),
            result(Some("empty link"), Some(""), None),
        ],
    ));
    assert!(md.contains("### 1. no link\ns\n\n"));
    assert!(md.contains("### 2. empty link\n\n"));
    assert!(!md.contains("]("));
}

#[test]
fn test_empty_snippet_line_is_omitted() {
    let md = render(&response(
        None,
        vec![result(Some("T"), Some("https://a.test"), Some(""))],
    ));
    assert_eq!(md, format!("{RESULTS_HEADING}\n### 1. [T](https://a.test)\n\n"));
}

#[test]
fn test_highlight_tags_never_survive() {
    let md = render(&response(
        None,
        vec![
            result(Some("a"), None, Some("<em>BigQuery</em> で <em>分析</em>")),
            result(Some("b"), None, Some("<em></em>")),
        ],
    ));
    assert!(!md.contains("<em>"));
    assert!(!md.contains("</em>"));
    assert!(md.contains("*BigQuery* で *分析*"));
    assert!(md.contains("**\n"));
}

#[test]
fn test_gcs_links_rewritten_once() {
    let link = normalize_link("gs://jireinomori_pdf_bucket/googlecloud_sansan_202311_casestudy.pdf");
    assert_eq!(
        link,
        "https://storage.cloud.google.com/jireinomori_pdf_bucket/googlecloud_sansan_202311_casestudy.pdf"
    );
    assert_eq!(link.matches("https://storage.cloud.google.com/").count(), 1);
    assert_eq!(normalize_link(&link), link);
}

#[test]
fn test_link_delimiters_preserved_spaces_encoded() {
    assert_eq!(
        normalize_link("https://example.com/a b?x=1&y=[2]#frag"),
        "https://example.com/a%20b?x=1&y=%5B2%5D#frag"
    );
}

#[test]
fn test_render_is_deterministic() {
    let res = response(
        Some("s"),
        vec![result(Some("t"), Some("gs://b/o"), Some("<em>x</em>"))],
    );
    assert_eq!(render(&res), render(&res.clone()));
}

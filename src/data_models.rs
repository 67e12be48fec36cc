use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four search corpora, each backed by its own engine.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Corpus {
    CaseStudy,
    CloudDoc,
    Community,
    EventSession,
}

impl Corpus {
    pub const ALL: [Corpus; 4] = [
        Corpus::CaseStudy,
        Corpus::CloudDoc,
        Corpus::Community,
        Corpus::EventSession,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Corpus::CaseStudy => "case-study",
            Corpus::CloudDoc => "cloud-doc",
            Corpus::Community => "community",
            Corpus::EventSession => "event-session",
        }
    }

    /// Name of the retrieval tool the agents call for this corpus.
    pub fn tool_name(&self) -> &'static str {
        match self {
            Corpus::CaseStudy => "retrieve_usecase",
            Corpus::CloudDoc => "retrieve_gcp",
            Corpus::Community => "retrieve_zenn",
            Corpus::EventSession => "retrieve_ai_agent_summit",
        }
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown corpus: {0}")]
pub struct ParseCorpusError(pub String);

impl FromStr for Corpus {
    type Err = ParseCorpusError;

    /// Accepts either the slug (`case-study`) or the tool name (`retrieve_usecase`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Corpus::ALL
            .into_iter()
            .find(|c| c.slug() == s || c.tool_name() == s)
            .ok_or_else(|| ParseCorpusError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    corpus: Corpus,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, corpus: Corpus) -> SearchQuery {
        SearchQuery {
            text: text.into(),
            corpus,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn corpus(&self) -> Corpus {
        self.corpus
    }
}

/// Options for the backend's generative summary stage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryOptions {
    /// How many top results feed the summary.
    pub result_count: u32,
    pub include_citations: bool,
    pub model_version: Option<String>,
    pub prompt_preamble: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    pub summary_text: Option<String>,
    /// In backend rank order.
    pub results: Vec<SearchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_parses_slug_and_tool_name() {
        for corpus in Corpus::ALL {
            assert_eq!(corpus.slug().parse::<Corpus>(), Ok(corpus));
            assert_eq!(corpus.tool_name().parse::<Corpus>(), Ok(corpus));
        }
        assert_eq!(
            "retrieve_everything".parse::<Corpus>(),
            Err(ParseCorpusError("retrieve_everything".into()))
        );
    }

    #[test]
    fn test_corpus_serde_matches_slug() {
        let json = serde_json::to_string(&Corpus::EventSession).unwrap();
        assert_eq!(json, "\"event-session\"");
        let back: Corpus = serde_json::from_str("\"cloud-doc\"").unwrap();
        assert_eq!(back, Corpus::CloudDoc);
    }
}

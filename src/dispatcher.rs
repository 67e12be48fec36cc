use std::sync::Arc;

use crate::backend::{BackendError, SearchBackend, SearchRequest};
use crate::corpus::{AnswerMode, CorpusTable};
use crate::data_models::{Corpus, SearchQuery, SearchResponse, SummaryOptions};
use crate::renderer;

/// Returned instead of searching when the query is empty.
pub const EMPTY_QUERY_PROMPT: &str = "検索クエリを入力してください。";
/// Returned for any backend failure. Causes are logged, never surfaced.
pub const SEARCH_FAILED: &str = "エラーが発生しました";

/// Issues one search per call against the configured corpus engines.
pub struct Dispatcher {
    backend: Arc<dyn SearchBackend>,
    corpora: CorpusTable,
}

impl Dispatcher {
    pub fn new(backend: Arc<dyn SearchBackend>, corpora: CorpusTable) -> Self {
        Self { backend, corpora }
    }

    /// Sends exactly one request for `query`. No retry.
    pub async fn search(
        &self,
        query: &SearchQuery,
        summary: Option<&SummaryOptions>,
    ) -> Result<SearchResponse, BackendError> {
        let entry = self.corpora.entry(query.corpus());
        let request = SearchRequest::new(entry.serving_config.as_str(), query.text(), summary);
        self.backend.search(&request).await
    }

    /// Answers a query in the corpus' configured answer mode.
    pub async fn dispatch(&self, query: &str, corpus: Corpus) -> String {
        match self.corpora.entry(corpus).answer_mode {
            AnswerMode::Rendered => {
                let summary = self.corpora.entry(corpus).summary.clone();
                self.dispatch_with_options(query, corpus, summary.as_ref())
                    .await
            }
            AnswerMode::GeneratedSummary => {
                self.dispatch_with_generated_summary(query, corpus).await
            }
        }
    }

    /// Searches and renders the full Markdown answer using explicit summary options.
    pub async fn dispatch_with_options(
        &self,
        query: &str,
        corpus: Corpus,
        summary: Option<&SummaryOptions>,
    ) -> String {
        if query.is_empty() {
            return EMPTY_QUERY_PROMPT.to_string();
        }

        let query = SearchQuery::new(query, corpus);
        tracing::info!(%corpus, query = query.text(), "dispatching search");

        match self.search(&query, summary).await {
            Ok(response) => {
                tracing::debug!(%corpus, results = response.results.len(), "search succeeded");
                renderer::render(&response)
            }
            Err(e) => {
                tracing::error!(%corpus, error = %e, "search backend call failed");
                SEARCH_FAILED.to_string()
            }
        }
    }

    /// Returns only the backend's generated summary, or an empty string when none was produced.
    pub async fn dispatch_with_generated_summary(&self, query: &str, corpus: Corpus) -> String {
        if query.is_empty() {
            return EMPTY_QUERY_PROMPT.to_string();
        }

        let query = SearchQuery::new(query, corpus);
        let summary = self.corpora.entry(corpus).summary.clone();
        tracing::info!(%corpus, query = query.text(), "dispatching summary search");

        match self.search(&query, summary.as_ref()).await {
            Ok(response) => response.summary_text.unwrap_or_default(),
            Err(e) => {
                tracing::error!(%corpus, error = %e, "search backend call failed");
                SEARCH_FAILED.to_string()
            }
        }
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::Config;
use crate::data_models::{SearchResponse, SearchResult, SummaryOptions};

/// Results requested per search.
pub const PAGE_SIZE: u32 = 5;
/// Snippets requested per result.
pub const MAX_SNIPPET_COUNT: u32 = 1;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A search service that answers one structured request with ranked documents.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, BackendError>;
}

// =============================================================================
// Request wire format
// =============================================================================

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub serving_config: String,
    pub query: String,
    pub page_size: u32,
    pub content_search_spec: ContentSearchSpec,
}

impl SearchRequest {
    pub fn new(
        serving_config: impl Into<String>,
        query: impl Into<String>,
        summary: Option<&SummaryOptions>,
    ) -> SearchRequest {
        SearchRequest {
            serving_config: serving_config.into(),
            query: query.into(),
            page_size: PAGE_SIZE,
            content_search_spec: ContentSearchSpec {
                snippet_spec: SnippetSpec {
                    return_snippet: true,
                    max_snippet_count: MAX_SNIPPET_COUNT,
                },
                summary_spec: summary.map(SummarySpec::from),
            },
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentSearchSpec {
    pub snippet_spec: SnippetSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_spec: Option<SummarySpec>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnippetSpec {
    pub return_snippet: bool,
    pub max_snippet_count: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummarySpec {
    pub summary_result_count: u32,
    pub include_citations: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_prompt_spec: Option<ModelPromptSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_spec: Option<ModelSpec>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ModelPromptSpec {
    pub preamble: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ModelSpec {
    pub version: String,
}

impl From<&SummaryOptions> for SummarySpec {
    fn from(opts: &SummaryOptions) -> Self {
        SummarySpec {
            summary_result_count: opts.result_count,
            include_citations: opts.include_citations,
            model_prompt_spec: opts.prompt_preamble.clone().map(|preamble| ModelPromptSpec { preamble }),
            model_spec: opts.model_version.clone().map(|version| ModelSpec { version }),
        }
    }
}

// =============================================================================
// Response wire format
// =============================================================================

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchResponse {
    #[serde(default)]
    pub results: Vec<RawResult>,
    pub summary: Option<RawSummary>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawSummary {
    pub summary_text: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct RawResult {
    pub document: Option<RawDocument>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    /// Free-form struct; only `title`, `link` and `snippets[].snippet` are read.
    #[serde(default)]
    pub derived_struct_data: Map<String, Value>,
}

fn string_field(data: &Map<String, Value>, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_string)
}

impl From<RawResult> for SearchResult {
    fn from(raw: RawResult) -> Self {
        let data = raw.document.unwrap_or_default().derived_struct_data;
        let snippet = data
            .get("snippets")
            .and_then(Value::as_array)
            .and_then(|snippets| snippets.first())
            .and_then(|first| first.get("snippet"))
            .and_then(Value::as_str)
            .map(str::to_string);

        SearchResult {
            title: string_field(&data, "title"),
            link: string_field(&data, "link"),
            snippet,
        }
    }
}

impl From<RawSearchResponse> for SearchResponse {
    fn from(raw: RawSearchResponse) -> Self {
        SearchResponse {
            summary_text: raw.summary.and_then(|s| s.summary_text),
            results: raw.results.into_iter().map(SearchResult::from).collect(),
        }
    }
}

/// Parses a backend response body into the domain response.
pub fn parse_response(body: &str) -> Result<SearchResponse, BackendError> {
    let raw: RawSearchResponse = serde_json::from_str(body)?;
    Ok(raw.into())
}

// =============================================================================
// Discovery Engine REST client
// =============================================================================

/// Vertex AI Search client. Construct once and share.
#[derive(Debug, Clone)]
pub struct DiscoveryEngineClient {
    http: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl DiscoveryEngineClient {
    pub fn new(endpoint: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            access_token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint.clone(), config.access_token.clone())
    }

    pub fn search_url(&self, serving_config: &str) -> String {
        format!("{}/{}:search", self.endpoint, serving_config)
    }
}

#[async_trait]
impl SearchBackend for DiscoveryEngineClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, BackendError> {
        let url = self.search_url(&request.serving_config);
        tracing::debug!(%url, page_size = request.page_size, "sending search request");

        let mut builder = self.http.post(&url).json(request);
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }

        let res = builder.send().await?;
        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }
        parse_response(&body)
    }
}

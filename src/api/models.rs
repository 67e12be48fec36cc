use serde::{Deserialize, Serialize};

use crate::data_models::Corpus;
use crate::tools::ToolState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub corpus: Corpus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub corpus: Corpus,
    pub result: String,
}

#[derive(Debug, Deserialize)]
pub struct ToolRequest {
    #[serde(default)]
    pub queries: Vec<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolResponse {
    pub status: String,
    pub session_id: String,
    pub result: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: String,
    #[serde(flatten)]
    pub state: ToolState,
}

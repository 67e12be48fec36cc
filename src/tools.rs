use serde::Serialize;

use crate::data_models::Corpus;
use crate::dispatcher::Dispatcher;

/// Per-session state the retrieval tools read and write.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolState {
    /// Every query the tools have been called with, oldest first.
    pub history: Vec<String>,
    /// Answer from the most recent tool call.
    pub result: Option<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    pub status: &'static str,
}

impl ToolStatus {
    pub const SUCCESS: ToolStatus = ToolStatus { status: "success" };
}

impl ToolState {
    /// Appends `queries` to the history and replaces the latest result.
    pub fn record(&mut self, queries: &[String], result: String) {
        self.history.extend(queries.iter().cloned());
        self.result = Some(result);
    }
}

/// Searches the first of `queries` in `corpus`.
///
/// Always yields an answer: empty input gives the prompt string and a failed
/// search gives the fixed failure string.
pub async fn answer(dispatcher: &Dispatcher, corpus: Corpus, queries: &[String]) -> String {
    let query = queries.first().map(String::as_str).unwrap_or_default();
    dispatcher.dispatch(query, corpus).await
}

/// Runs the retrieval tool for `corpus` against `state`.
///
/// All `queries` are appended to the history; only the first is searched.
pub async fn retrieve(
    dispatcher: &Dispatcher,
    corpus: Corpus,
    state: &mut ToolState,
    queries: &[String],
) -> ToolStatus {
    let result = answer(dispatcher, corpus, queries).await;
    state.record(queries, result);
    ToolStatus::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_history_and_replaces_result() {
        let mut state = ToolState::default();
        state.record(&["a".to_string(), "b".to_string()], "first".to_string());
        state.record(&["c".to_string()], "second".to_string());

        assert_eq!(state.history, vec!["a", "b", "c"]);
        assert_eq!(state.result.as_deref(), Some("second"));
    }
}

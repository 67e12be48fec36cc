use crate::config::Config;
use crate::data_models::{Corpus, SummaryOptions};

pub const EVENT_SESSION_MODEL_VERSION: &str = "gemini-2.5-flash/answer_gen/v1";

pub const EVENT_SESSION_PREAMBLE: &str = "要約には可能な限り、セッションの具体的な日時とURLリンクを含めるようにしてください。該当するセッションが複数あればそれぞれの情報を要約して出してください。URLリンクに関してはHTMLに target=\"_blank\" を追加してクリック時に新規タブで開くようにしてください。";

/// What a dispatch for the corpus hands back to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMode {
    /// Full Markdown document from the result renderer.
    Rendered,
    /// The backend's generated summary text only.
    GeneratedSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub serving_config: String,
    pub summary: Option<SummaryOptions>,
    pub answer_mode: AnswerMode,
}

/// Per-corpus summary defaults. Hand-tuned per engine; kept as data.
pub fn default_summary_options(corpus: Corpus) -> Option<SummaryOptions> {
    match corpus {
        Corpus::CaseStudy => Some(SummaryOptions {
            result_count: 3,
            include_citations: true,
            model_version: None,
            prompt_preamble: Some(String::new()),
        }),
        Corpus::CloudDoc | Corpus::Community => None,
        Corpus::EventSession => Some(SummaryOptions {
            result_count: 5,
            include_citations: false,
            model_version: Some(EVENT_SESSION_MODEL_VERSION.to_string()),
            prompt_preamble: Some(EVENT_SESSION_PREAMBLE.to_string()),
        }),
    }
}

pub fn default_answer_mode(corpus: Corpus) -> AnswerMode {
    match corpus {
        Corpus::EventSession => AnswerMode::GeneratedSummary,
        _ => AnswerMode::Rendered,
    }
}

/// Corpus-keyed routing table: serving config, summary defaults and answer mode.
#[derive(Debug, Clone)]
pub struct CorpusTable {
    case_study: CorpusEntry,
    cloud_doc: CorpusEntry,
    community: CorpusEntry,
    event_session: CorpusEntry,
}

impl CorpusTable {
    pub fn from_config(config: &Config) -> CorpusTable {
        let entry = |corpus: Corpus| CorpusEntry {
            serving_config: config.serving_config(corpus),
            summary: default_summary_options(corpus),
            answer_mode: default_answer_mode(corpus),
        };
        CorpusTable {
            case_study: entry(Corpus::CaseStudy),
            cloud_doc: entry(Corpus::CloudDoc),
            community: entry(Corpus::Community),
            event_session: entry(Corpus::EventSession),
        }
    }

    /// Replaces the entry for one corpus. Used to point a corpus at another engine.
    pub fn with_entry(mut self, corpus: Corpus, entry: CorpusEntry) -> CorpusTable {
        *self.entry_mut(corpus) = entry;
        self
    }

    pub fn entry(&self, corpus: Corpus) -> &CorpusEntry {
        match corpus {
            Corpus::CaseStudy => &self.case_study,
            Corpus::CloudDoc => &self.cloud_doc,
            Corpus::Community => &self.community,
            Corpus::EventSession => &self.event_session,
        }
    }

    fn entry_mut(&mut self, corpus: Corpus) -> &mut CorpusEntry {
        match corpus {
            Corpus::CaseStudy => &mut self.case_study,
            Corpus::CloudDoc => &mut self.cloud_doc,
            Corpus::Community => &mut self.community,
            Corpus::EventSession => &mut self.event_session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_study_requests_cited_summary_of_three() {
        let opts = default_summary_options(Corpus::CaseStudy).unwrap();
        assert_eq!(opts.result_count, 3);
        assert!(opts.include_citations);
        assert_eq!(opts.prompt_preamble.as_deref(), Some(""));
        assert!(opts.model_version.is_none());
    }

    #[test]
    fn test_event_session_summary_defaults() {
        let opts = default_summary_options(Corpus::EventSession).unwrap();
        assert_eq!(opts.result_count, 5);
        assert!(!opts.include_citations);
        assert_eq!(
            opts.model_version.as_deref(),
            Some(EVENT_SESSION_MODEL_VERSION)
        );
        assert!(opts.prompt_preamble.unwrap().contains("target=\"_blank\""));
        assert_eq!(
            default_answer_mode(Corpus::EventSession),
            AnswerMode::GeneratedSummary
        );
    }

    #[test]
    fn test_docs_corpora_have_no_summary() {
        assert!(default_summary_options(Corpus::CloudDoc).is_none());
        assert!(default_summary_options(Corpus::Community).is_none());
        assert_eq!(default_answer_mode(Corpus::Community), AnswerMode::Rendered);
    }

    #[test]
    fn test_with_entry_replaces_only_that_corpus() {
        let mut vars = std::collections::HashMap::new();
        for (k, v) in [
            ("GOOGLE_CLOUD_PROJECT", "p"),
            ("USECASE_ENGINE_ID", "u"),
            ("GCP_ENGINE_ID", "g"),
            ("ZENN_ENGINE_ID", "z"),
            ("AI_AGENT_SUMMIT_ENGINE_ID", "s"),
        ] {
            vars.insert(k.to_string(), v.to_string());
        }
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        let replacement = CorpusEntry {
            serving_config: "other".into(),
            summary: None,
            answer_mode: AnswerMode::Rendered,
        };

        let table = CorpusTable::from_config(&config).with_entry(Corpus::EventSession, replacement.clone());
        assert_eq!(table.entry(Corpus::EventSession), &replacement);
        for corpus in [Corpus::CaseStudy, Corpus::CloudDoc, Corpus::Community] {
            assert_eq!(table.entry(corpus).serving_config, config.serving_config(corpus));
            assert_eq!(table.entry(corpus).summary, default_summary_options(corpus));
        }
    }
}

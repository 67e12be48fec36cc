use serde::Serialize;

use crate::data_models::Corpus;

/// An agent in the routing tree and what it can reach.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AgentSpec {
    pub name: &'static str,
    /// Retrieval tool the agent calls itself, if any.
    pub tool: Option<Corpus>,
    /// Agents it hands questions to.
    pub delegates: Vec<&'static str>,
}

pub const ROOT_AGENT: &str = "Greeting_Agent";
pub const CASE_STUDY_AGENT: &str = "Jirei_Agent";
pub const CLOUD_DOC_AGENT: &str = "Google_Cloud_Doc_Agent";
pub const EVENT_SESSION_AGENT: &str = "AI_Agent_Summit_Agent";

/// The greeting agent and its three search delegates.
pub fn roster() -> Vec<AgentSpec> {
    vec![
        AgentSpec {
            name: ROOT_AGENT,
            tool: None,
            delegates: vec![CASE_STUDY_AGENT, CLOUD_DOC_AGENT, EVENT_SESSION_AGENT],
        },
        AgentSpec {
            name: CASE_STUDY_AGENT,
            tool: Some(Corpus::CaseStudy),
            delegates: Vec::new(),
        },
        AgentSpec {
            name: CLOUD_DOC_AGENT,
            tool: Some(Corpus::CloudDoc),
            delegates: Vec::new(),
        },
        AgentSpec {
            name: EVENT_SESSION_AGENT,
            tool: Some(Corpus::EventSession),
            delegates: Vec::new(),
        },
    ]
}

pub fn find_agent(name: &str) -> Option<AgentSpec> {
    roster().into_iter().find(|a| a.name == name)
}

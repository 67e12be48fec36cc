use std::env;

use dotenvy::dotenv;
use thiserror::Error;

use crate::data_models::Corpus;

pub const DEFAULT_LOCATION: &str = "global";
pub const DEFAULT_ENDPOINT: &str = "https://discoveryengine.googleapis.com/v1beta";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct EngineIds {
    pub case_study: String,
    pub cloud_doc: String,
    pub community: String,
    pub event_session: String,
}

impl EngineIds {
    pub fn engine_for(&self, corpus: Corpus) -> &str {
        match corpus {
            Corpus::CaseStudy => &self.case_study,
            Corpus::CloudDoc => &self.cloud_doc,
            Corpus::Community => &self.community,
            Corpus::EventSession => &self.event_session,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub project_id: String,
    pub location: String,
    pub engines: EngineIds,
    pub endpoint: String,
    pub access_token: Option<String>,
    pub bind_addr: String,
}

impl Config {
    /// Reads configuration from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| lookup(key).filter(|v| !v.is_empty());

        Ok(Config {
            project_id: get_env(&get, "GOOGLE_CLOUD_PROJECT")?,
            location: get_env_or_default(&get, "LOCATION", DEFAULT_LOCATION),
            engines: EngineIds {
                case_study: get_env(&get, "USECASE_ENGINE_ID")?,
                cloud_doc: get_env(&get, "GCP_ENGINE_ID")?,
                community: get_env(&get, "ZENN_ENGINE_ID")?,
                event_session: get_env(&get, "AI_AGENT_SUMMIT_ENGINE_ID")?,
            },
            endpoint: get_env_or_default(&get, "DISCOVERY_ENGINE_ENDPOINT", DEFAULT_ENDPOINT),
            access_token: get("GOOGLE_ACCESS_TOKEN"),
            bind_addr: get_env_or_default(&get, "BIND_ADDR", DEFAULT_BIND_ADDR),
        })
    }

    /// Fully qualified serving config resource for a corpus.
    pub fn serving_config(&self, corpus: Corpus) -> String {
        format!(
            "projects/{}/locations/{}/collections/default_collection/engines/{}/servingConfigs/default_serving_config",
            self.project_id,
            self.location,
            self.engines.engine_for(corpus),
        )
    }
}

fn get_env<G>(get: &G, key: &'static str) -> Result<String, ConfigError>
where
    G: Fn(&'static str) -> Option<String>,
{
    get(key).ok_or(ConfigError::Missing(key))
}

fn get_env_or_default<G>(get: &G, key: &'static str, default: &str) -> String
where
    G: Fn(&'static str) -> Option<String>,
{
    get(key).unwrap_or_else(|| default.to_string())
}

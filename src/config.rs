use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One company to crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Display name, also used as the output directory name
    pub name: String,

    /// URL the crawl starts from
    pub url: String,
}

/// Limits applied to a single crawl run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of successfully fetched pages per company
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Delay between requests in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_pages: default_max_pages(),
            delay_ms: default_delay_ms(),
        }
    }
}

/// Classifier thresholds for the content signal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Confidence cutoff when no spec keyword matched the page text
    #[serde(default = "default_base_threshold")]
    pub base_threshold: f32,

    /// Lowered cutoff used once the keyword vocabulary already fired
    #[serde(default = "default_keyword_threshold")]
    pub keyword_threshold: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_threshold: default_base_threshold(),
            keyword_threshold: default_keyword_threshold(),
        }
    }
}

/// Remote summarization endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Bearer token for the chat-completion API
    #[serde(default)]
    pub api_key: String,

    /// Chat-completion endpoint URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Model identifier sent in the request payload
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            model: default_model(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Crawl limits shared by every company
    #[serde(default)]
    pub crawl: CrawlConfig,

    /// Classifier thresholds
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Analyzer endpoint settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Directory results are written under
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Companies to process
    pub companies: Vec<Company>,
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut file = File::open(path.as_ref())
            .map_err(|e| Error::Config(format!("{}: {}", path.as_ref().display(), e)))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| Error::Config(e.to_string()))?;

        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        if config.companies.is_empty() {
            return Err(Error::Config("no companies configured".to_string()));
        }
        Ok(config)
    }
}

/// Default per-request timeout (seconds)
fn default_timeout_secs() -> u64 {
    30
}

/// Default page cap per company
fn default_max_pages() -> usize {
    50
}

/// Default politeness delay (milliseconds)
fn default_delay_ms() -> u64 {
    1000
}

fn default_base_threshold() -> f32 {
    0.3
}

fn default_keyword_threshold() -> f32 {
    0.2
}

fn default_api_url() -> String {
    "https://api.deepseek.com/chat/completions".to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_output_dir() -> String {
    "data".to_string()
}

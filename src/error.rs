use thiserror::Error;

/// Errors produced by the crawling and analysis stages.
///
/// Extraction never errors: a missing element simply yields an empty field
/// and the cascade moves on.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure or non-2xx response while fetching a page
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// A URL that could not be parsed (notably a company's start URL)
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Configuration file could not be read or decoded
    #[error("config error: {0}")]
    Config(String),

    /// Analyzer reply did not contain the expected answer structure
    #[error("malformed analyzer response: {0}")]
    AnalyzerResponse(String),

    /// Filesystem failure while persisting results
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure while persisting results
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_url(url: &str, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            source,
        }
    }
}

use serde::{Deserialize, Serialize};

/// One fetched HTML document, as produced by the crawler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPage {
    /// Absolute URL of the page (unique within a crawl run)
    pub url: String,

    /// Name of the company whose site produced this page
    pub company: String,

    /// Raw HTML body as returned by the server
    pub html: String,

    /// Whitespace-normalized plain text extracted from the HTML
    pub content: String,
}

impl RawPage {
    /// Create a new raw page record
    pub fn new(url: String, company: String, html: String, content: String) -> Self {
        Self {
            url,
            company,
            html,
            content,
        }
    }
}

/// Ordered key -> value table of technical specifications.
///
/// Insertion order is preserved. Re-inserting an existing key replaces its
/// value in place (last-match-wins across cascade strategies).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecTable(Vec<(String, String)>);

impl SpecTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a key. An existing key keeps its position but takes
    /// the new value.
    pub fn insert(&mut self, key: String, value: String) {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Flatten the table into "key: value" lines for prompt building and
    /// prose consumers.
    pub fn to_text(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Structured product data extracted from one candidate page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// URL of the source page
    pub url: String,

    /// Company the page belongs to
    pub company: String,

    /// Extracted product name (may be empty)
    pub name: String,

    /// Extracted product description (may be empty)
    pub description: String,

    /// Key -> value technical specifications
    pub tech_specs: SpecTable,

    /// Prose concatenation of every spec container that was matched
    pub specs_text: String,

    /// Main content text of the page
    pub content: String,

    /// Remote analysis result, filled in by the analyzer stage
    #[serde(default)]
    pub analysis: Option<Analysis>,
}

/// Two-line summary produced by the remote language model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// One-sentence summary of the product's standout features
    pub features: String,

    /// One-sentence summary of the product's main application scenarios
    pub applications: String,
}

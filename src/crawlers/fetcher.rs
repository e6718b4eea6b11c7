use crate::error::Error;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

/// User agent sent with every request
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP fetcher issuing one GET per URL with a fixed user agent and timeout.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Build a fetcher with the given per-request timeout
    pub fn new(timeout_secs: u64) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a URL and return the response body.
    ///
    /// Non-2xx statuses are errors, so the crawl loop treats them exactly
    /// like network failures.
    pub async fn fetch(&self, url: &Url) -> Result<String, Error> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

/// Collect every anchor href on the page, resolved against the page's own
/// URL. Hrefs that cannot be joined are dropped.
pub fn harvest_links(html: &str, base: &Url) -> Vec<Url> {
    let doc = Html::parse_document(html);
    let link_selector = Selector::parse("a[href]").unwrap();

    let links: Vec<Url> = doc
        .select(&link_selector)
        .filter_map(|e| e.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .collect();

    ::log::debug!("Found {} links in {}", links.len(), base);
    links
}

/// Extract the page's visible text with whitespace runs collapsed to a
/// single space.
pub fn plain_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let body_selector = Selector::parse("body").unwrap();

    doc.select(&body_selector)
        .flat_map(|n| n.text())
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

use regex::Regex;
use url::Url;

/// Asset URLs that are never worth fetching for product data
const DEFAULT_EXCLUDE_PATTERNS: &[&str] =
    &[r"\.(jpg|jpeg|png|gif|css|js|ico|svg|woff|woff2|ttf|eot|pdf)$"];

/// URL filter that confines a crawl to the start URL's site and skips
/// non-HTML assets.
#[derive(Debug)]
pub struct UrlFilter {
    scheme: String,
    host: Option<String>,
    port: Option<u16>,
    exclude_regexes: Vec<Regex>,
}

impl UrlFilter {
    /// Create a filter scoped to the authority of the given start URL
    pub fn for_site(start_url: &Url) -> Self {
        let exclude_regexes = DEFAULT_EXCLUDE_PATTERNS
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect();

        Self {
            scheme: start_url.scheme().to_string(),
            host: start_url.host_str().map(|h| h.to_string()),
            port: start_url.port(),
            exclude_regexes,
        }
    }

    /// Determine if a URL should be enqueued for crawling
    pub fn should_crawl(&self, url: &Url) -> bool {
        // Only plain web pages; mailto:, javascript:, ftp: etc. are dropped
        if url.scheme() != "http" && url.scheme() != "https" {
            return false;
        }

        if !self.is_same_site(url) {
            return false;
        }

        let url_str = url.as_str();
        for regex in &self.exclude_regexes {
            if regex.is_match(url_str) {
                return false;
            }
        }

        true
    }

    /// Check that the URL's authority matches the start URL's
    fn is_same_site(&self, url: &Url) -> bool {
        url.scheme() == self.scheme
            && url.host_str().map(|h| h.to_string()) == self.host
            && url.port() == self.port
    }

    /// Create a normalized version of the URL (fragment removed) so that
    /// `page#a` and `page#b` count as one frontier entry
    pub fn normalize_url(&self, url: &Url) -> Url {
        let mut normalized = url.clone();
        normalized.set_fragment(None);
        normalized
    }
}

use crate::config::{Company, CrawlConfig};
use crate::crawlers::fetcher::{self, Fetcher};
use crate::error::Error;
use crate::filter::UrlFilter;
use crate::results::RawPage;
use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use url::Url;

/// Crawl a company's site breadth-first, starting from its configured URL.
///
/// The traversal is sequential: one fetch at a time, with the politeness
/// delay awaited after every successful fetch. URLs are confined to the
/// start URL's scheme/host/port and each is fetched at most once. The run
/// stops when the frontier drains or `max_pages` pages have been fetched.
///
/// A failing URL (network error, timeout, non-2xx) is logged and abandoned;
/// it does not count toward the page cap and does not stop the crawl. The
/// only hard error is a start URL that cannot be parsed.
pub async fn crawl(company: &Company, limits: &CrawlConfig) -> Result<Vec<RawPage>, Error> {
    ::log::info!("Starting crawl for {}: {}", company.name, company.url);

    let start_url =
        Url::parse(&company.url).map_err(|e| Error::invalid_url(&company.url, e))?;
    let filter = UrlFilter::for_site(&start_url);
    let fetcher = Fetcher::new(limits.timeout_secs)?;
    let delay = Duration::from_millis(limits.delay_ms);

    let mut visited: HashSet<String> = HashSet::new();
    let mut queued: HashSet<String> = HashSet::new();
    let mut frontier: VecDeque<Url> = VecDeque::new();

    let seed = filter.normalize_url(&start_url);
    queued.insert(seed.to_string());
    frontier.push_back(seed);

    let mut pages: Vec<RawPage> = Vec::new();

    while pages.len() < limits.max_pages {
        let Some(current) = frontier.pop_front() else {
            break;
        };

        if !visited.insert(current.to_string()) {
            continue;
        }

        let html = match fetcher.fetch(&current).await {
            Ok(html) => html,
            Err(e) => {
                ::log::error!("Failed to fetch {}: {}", current, e);
                continue;
            }
        };

        let content = fetcher::plain_text(&html);
        enqueue_links(
            fetcher::harvest_links(&html, &current),
            &filter,
            &visited,
            &mut queued,
            &mut frontier,
        );

        pages.push(RawPage::new(
            current.to_string(),
            company.name.clone(),
            html,
            content,
        ));
        ::log::info!("Fetched page {}/{}: {}", pages.len(), limits.max_pages, current);

        // Throttle between requests; skipped duplicates and failures are
        // not charged a delay
        tokio::time::sleep(delay).await;
    }

    ::log::info!(
        "Crawl of {} finished with {} pages ({} URLs seen)",
        company.name,
        pages.len(),
        visited.len()
    );
    Ok(pages)
}

/// Admit discovered links to the frontier. A URL is enqueued at most once
/// per run: anything already visited or already queued is dropped here.
fn enqueue_links(
    links: Vec<Url>,
    filter: &UrlFilter,
    visited: &HashSet<String>,
    queued: &mut HashSet<String>,
    frontier: &mut VecDeque<Url>,
) {
    for link in links {
        let normalized = filter.normalize_url(&link);
        if !filter.should_crawl(&normalized) {
            continue;
        }

        let key = normalized.to_string();
        if visited.contains(&key) || !queued.insert(key) {
            continue;
        }

        ::log::debug!("Queued {}", normalized);
        frontier.push_back(normalized);
    }
}

use crate::extract::{class_matches, element_text, text};
use scraper::{Html, Selector};
use url::Url;

/// Meta tag properties that carry a product/page title, in priority order
const META_TITLE_PROPS: &[&str] = &["og:title", "title", "product:title", "twitter:title"];

/// Class markers of elements that hold a product name directly
const NAME_CLASS_MARKERS: &[&str] = &[
    "product-name",
    "product-title",
    "item-name",
    "goods-name",
    "model-name",
];

/// Tags worth inspecting for a name-marked class
const NAME_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "div", "span"];

/// Keywords that make an `<h1>` or URL segment look like a product name
const NAME_KEYWORDS: &[&str] = &["无人机", "drone", "uav", "product", "model"];

/// Characters separating a page title from the trailing site name
const TITLE_SEPARATORS: &[char] = &['|', '-', '–', '—', '_'];

/// Boilerplate phrases stripped from the end of an extracted name
const NAME_SUFFIX_PHRASES: &[&str] = &[
    "official site",
    "official website",
    "official store",
    "buy now",
    "details",
    "buy",
    "官方网站",
    "官网",
    "详情",
    "立即购买",
    "购买",
];

/// Extract the product name through the cascade of strategies; the raw
/// document title is the final fallback.
pub fn extract(doc: &Html, url: &str) -> String {
    let raw = from_meta_tags(doc)
        .or_else(|| from_marked_elements(doc))
        .or_else(|| from_document_title(doc))
        .or_else(|| from_h1(doc))
        .or_else(|| from_url_path(url))
        .or_else(|| document_title(doc))
        .unwrap_or_default();

    clean_name(&raw)
}

/// Strategy 1: known meta tag properties with content longer than 3 chars
fn from_meta_tags(doc: &Html) -> Option<String> {
    let meta_selector = Selector::parse("meta").unwrap();
    let metas: Vec<_> = doc.select(&meta_selector).collect();

    for prop in META_TITLE_PROPS {
        for meta in &metas {
            let matches = meta.value().attr("property") == Some(prop)
                || meta.value().attr("name") == Some(prop);
            if !matches {
                continue;
            }
            if let Some(content) = meta.value().attr("content") {
                let content = content.trim();
                if content.chars().count() > 3 {
                    return Some(content.to_string());
                }
            }
        }
    }
    None
}

/// Strategy 2: heading/div/span elements carrying a product-name class
fn from_marked_elements(doc: &Html) -> Option<String> {
    let all = Selector::parse("*").unwrap();

    doc.select(&all)
        .filter(|el| NAME_TAGS.contains(&el.value().name()))
        .filter(|el| class_matches(el, NAME_CLASS_MARKERS))
        .map(|el| element_text(&el))
        .find(|text| !text.is_empty())
}

/// Strategy 3: document title with the trailing site-name suffix removed
fn from_document_title(doc: &Html) -> Option<String> {
    let title = document_title(doc)?;
    let cut = title
        .find(TITLE_SEPARATORS)
        .map(|idx| title[..idx].trim().to_string())
        .unwrap_or_else(|| title.clone());

    if cut.chars().count() > 3 { Some(cut) } else { None }
}

/// Strategy 4: `<h1>` elements, preferring one with a product keyword;
/// a sole reasonable-length `<h1>` is accepted too
fn from_h1(doc: &Html) -> Option<String> {
    let h1_selector = Selector::parse("h1").unwrap();
    let headings: Vec<String> = doc
        .select(&h1_selector)
        .map(|el| element_text(&el))
        .filter(|t| !t.is_empty())
        .collect();

    for heading in &headings {
        let lowered = heading.to_lowercase();
        if NAME_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            return Some(heading.clone());
        }
    }

    if headings.len() == 1 {
        let len = headings[0].chars().count();
        if len > 3 && len <= 50 {
            return Some(headings[0].clone());
        }
    }
    None
}

/// Strategy 5: URL path segments that look like a product slug.
/// Deepest segments are inspected first, so `/products/drone-x` yields the
/// slug rather than the section name.
fn from_url_path(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segments = parsed.path_segments()?;

    for segment in segments.rev() {
        let lowered = segment.to_lowercase();
        if !NAME_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            continue;
        }
        let spaced = segment.replace(['-', '_'], " ");
        let spaced = text::normalize_segment(&spaced);
        if spaced.chars().count() > 3 {
            return Some(title_case(&spaced));
        }
    }
    None
}

/// Raw `<title>` text, if present and non-empty
fn document_title(doc: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").unwrap();
    doc.select(&title_selector)
        .map(|el| element_text(&el))
        .find(|t| !t.is_empty())
}

/// Collapse whitespace and strip trailing boilerplate phrases
fn clean_name(raw: &str) -> String {
    let mut name = text::normalize_segment(raw);

    loop {
        let lowered = name.to_lowercase();
        let Some(phrase) = NAME_SUFFIX_PHRASES
            .iter()
            .find(|p| lowered.ends_with(*p))
        else {
            break;
        };
        name.truncate(name.len() - phrase.len());
        name = name
            .trim_end_matches(['|', '-', '–', '—', ':', '：', ',', ' '])
            .to_string();
    }

    name
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

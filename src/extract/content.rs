use crate::extract::{class_matches, element_text, id_matches, text};
use scraper::{ElementRef, Html, Selector};

/// Id/class markers of main-content containers
const CONTENT_MARKERS: &[&str] = &["content", "main", "article", "product"];

/// Paragraphs shorter than this are skipped as link text or labels
const PARAGRAPH_MIN_CHARS: usize = 20;

/// Extract the page's main content text.
///
/// Marked containers are mined for paragraphs, list items and headings;
/// when no container matches, the whole document is swept for long
/// paragraphs and list items instead.
pub fn extract(doc: &Html) -> String {
    let container_selector = Selector::parse("main, article, section, div").unwrap();
    let containers: Vec<ElementRef> = doc
        .select(&container_selector)
        .filter(|el| id_matches(el, CONTENT_MARKERS) || class_matches(el, CONTENT_MARKERS))
        .collect();

    let mut out = String::new();
    if containers.is_empty() {
        collect_page_wide(doc, &mut out);
    } else {
        for container in &containers {
            collect_region(container, &mut out);
        }
    }

    text::normalize_block(&out)
}

/// Gather paragraph, list and heading text from one container
fn collect_region(container: &ElementRef, out: &mut String) {
    let paragraph_selector = Selector::parse("p").unwrap();
    for p in container.select(&paragraph_selector) {
        let text = element_text(&p);
        if text.chars().count() > PARAGRAPH_MIN_CHARS {
            out.push_str(&text);
            out.push_str("\n\n");
        }
    }

    let list_selector = Selector::parse("ul, ol").unwrap();
    let item_selector = Selector::parse("li").unwrap();
    for list in container.select(&list_selector) {
        for item in list.select(&item_selector) {
            let text = element_text(&item);
            if !text.is_empty() {
                out.push_str("• ");
                out.push_str(&text);
                out.push('\n');
            }
        }
        out.push('\n');
    }

    let heading_selector = Selector::parse("h1, h2, h3, h4, h5, h6").unwrap();
    for heading in container.select(&heading_selector) {
        let text = element_text(&heading);
        if !text.is_empty() {
            out.push_str(&text);
            out.push_str("\n\n");
        }
    }
}

/// Fallback: sweep every long paragraph and list item in the document
fn collect_page_wide(doc: &Html, out: &mut String) {
    let paragraph_selector = Selector::parse("p").unwrap();
    for p in doc.select(&paragraph_selector) {
        let text = element_text(&p);
        if text.chars().count() > PARAGRAPH_MIN_CHARS {
            out.push_str(&text);
            out.push_str("\n\n");
        }
    }

    let item_selector = Selector::parse("li").unwrap();
    for item in doc.select(&item_selector) {
        let text = element_text(&item);
        if !text.is_empty() {
            out.push_str("• ");
            out.push_str(&text);
            out.push('\n');
        }
    }
}

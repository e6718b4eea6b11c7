use crate::extract::{class_matches, element_text};
use scraper::{Html, Selector};

/// Class markers hinting at descriptive copy
const DESCRIPTION_MARKERS: &[&str] = &["desc", "intro", "about", "overview"];

/// Minimum length for a class-hinted description block
const MARKED_MIN_CHARS: usize = 50;

/// Minimum length for a bare paragraph in the fallback strategy
const PARAGRAPH_MIN_CHARS: usize = 100;

/// Stop accumulating fallback paragraphs past this length
const MAX_ACCUMULATED_CHARS: usize = 500;

/// Extract the product description.
///
/// Class-hinted blocks are preferred; failing that, long paragraphs are
/// concatenated until the accumulated text passes the length budget.
pub fn extract(doc: &Html) -> String {
    let mut description = String::new();

    let marked_selector = Selector::parse("p, div").unwrap();
    for el in doc.select(&marked_selector) {
        if !class_matches(&el, DESCRIPTION_MARKERS) {
            continue;
        }
        let text = element_text(&el);
        if text.chars().count() > MARKED_MIN_CHARS {
            description.push_str(&text);
            description.push('\n');
        }
    }

    if description.is_empty() {
        let paragraph_selector = Selector::parse("p").unwrap();
        for p in doc.select(&paragraph_selector) {
            let text = element_text(&p);
            if text.chars().count() > PARAGRAPH_MIN_CHARS {
                description.push_str(&text);
                description.push('\n');
                if description.chars().count() > MAX_ACCUMULATED_CHARS {
                    break;
                }
            }
        }
    }

    description.trim().to_string()
}

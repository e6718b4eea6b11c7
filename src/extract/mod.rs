pub mod content;
pub mod description;
pub mod name;
pub mod sanitize;
pub mod specs;
pub mod text;

#[cfg(test)]
mod tests;

use crate::results::{ProductRecord, RawPage};
use scraper::{ElementRef, Html};

/// Run the sanitizer and every field cascade over one candidate page.
///
/// Returns `None` when no field gathered anything; a record is only emitted
/// if at least one of name, description, specs or main content is non-empty.
pub fn extract_product(page: &RawPage) -> Option<ProductRecord> {
    let clean = sanitize::sanitize(&page.html);
    let doc = Html::parse_document(&clean);

    let name = name::extract(&doc, &page.url);
    let description = description::extract(&doc);
    let (tech_specs, specs_text) = specs::extract(&doc);
    let content = content::extract(&doc);

    if name.is_empty() && description.is_empty() && tech_specs.is_empty() && content.is_empty() {
        ::log::debug!("No product data found on {}", page.url);
        return None;
    }

    ::log::debug!(
        "Extracted '{}' with {} spec entries from {}",
        name,
        tech_specs.len(),
        page.url
    );

    Some(ProductRecord {
        url: page.url.clone(),
        company: page.company.clone(),
        name,
        description,
        tech_specs,
        specs_text,
        content,
        analysis: None,
    })
}

/// True when any class token of the element contains one of the markers,
/// case-insensitively
pub(crate) fn class_matches(el: &ElementRef, markers: &[&str]) -> bool {
    el.value()
        .classes()
        .any(|class| text::value_contains_any(class, markers))
}

/// True when the element's id attribute contains one of the markers
pub(crate) fn id_matches(el: &ElementRef, markers: &[&str]) -> bool {
    el.value()
        .attr("id")
        .is_some_and(|id| text::value_contains_any(id, markers))
}

/// The element's text content as a single whitespace-normalized line
pub(crate) fn element_text(el: &ElementRef) -> String {
    text::normalize_segment(&el.text().collect::<Vec<_>>().join(" "))
}

/// The element's text content with source newlines kept, for line-wise
/// key/value splitting
pub(crate) fn element_text_raw(el: &ElementRef) -> String {
    el.text().collect::<String>()
}

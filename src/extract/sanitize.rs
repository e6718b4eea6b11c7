use ego_tree::NodeId;
use scraper::{Html, Selector};

/// Tag kinds removed wholesale before extraction
const REMOVE_TAGS: &[&str] = &[
    "script", "style", "iframe", "noscript", "nav", "header", "footer",
];

/// Class markers for boilerplate regions (ads, social widgets, comments)
const BOILERPLATE_MARKERS: &[&str] = &[
    "ad",
    "ads",
    "advertisement",
    "banner",
    "social",
    "share",
    "follow",
    "comment",
    "comments",
    "discuss",
];

/// Strip boilerplate subtrees from the page markup.
///
/// Removal is structural: a matched element is detached together with its
/// whole subtree, so descendant text never leaks into later extraction.
/// Sanitizing already-sanitized markup removes nothing further.
pub fn sanitize(html: &str) -> String {
    let mut doc = Html::parse_document(html);
    let all = Selector::parse("*").unwrap();

    let doomed: Vec<NodeId> = doc
        .select(&all)
        .filter(|el| {
            REMOVE_TAGS.contains(&el.value().name()) || has_boilerplate_class(el)
        })
        .map(|el| el.id())
        .collect();

    for id in doomed {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }

    doc.root_element().html()
}

/// True when any class token contains a boilerplate marker, case-insensitively
fn has_boilerplate_class(el: &scraper::ElementRef) -> bool {
    el.value().classes().any(|class| {
        let lowered = class.to_lowercase();
        BOILERPLATE_MARKERS.iter().any(|m| lowered.contains(m))
    })
}

use crate::extract::{class_matches, element_text, element_text_raw, id_matches, text};
use crate::results::SpecTable;
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

/// Id/class markers that flag a DOM subtree as a spec container
const CONTAINER_MARKERS: &[&str] = &[
    "spec",
    "parameter",
    "param",
    "tech",
    "技术参数",
    "规格",
    "参数",
];

/// Keywords that mark table or heading text as specification content
const SPEC_TEXT_KEYWORDS: &[&str] = &[
    "技术参数",
    "技术规格",
    "规格",
    "参数",
    "specification",
    "parameter",
    "spec",
];

/// Class markers of per-entry spec elements
const ITEM_CLASS_MARKERS: &[&str] = &["spec-item", "param-item", "feature-item"];

/// Class markers of the key half inside an item element
const ITEM_KEY_MARKERS: &[&str] = &["name", "key", "label", "title"];

/// Class markers of the value half inside an item element
const ITEM_VALUE_MARKERS: &[&str] = &["value", "data", "content"];

/// Subtrees judged likely to hold technical specifications, found by
/// id/class keyword or by heading adjacency. Transient per extraction call.
struct SpecContainers<'a> {
    elements: Vec<ElementRef<'a>>,
    ids: HashSet<NodeId>,
}

impl<'a> SpecContainers<'a> {
    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// True when the element is one of the containers or sits inside one
    fn holds(&self, el: &ElementRef) -> bool {
        self.ids.contains(&el.id()) || el.ancestors().any(|a| self.ids.contains(&a.id()))
    }
}

/// Extract technical specifications from the sanitized document.
///
/// Every strategy appends into one ordered table; a key produced by a later
/// strategy replaces the value an earlier one stored (last-match-wins).
/// The second return value is a prose concatenation of every container,
/// table, list and paragraph the strategies matched.
pub fn extract(doc: &Html) -> (SpecTable, String) {
    let containers = find_spec_containers(doc);
    ::log::debug!("Found {} spec container(s)", containers.elements.len());

    let mut table = SpecTable::new();
    let mut prose: Vec<String> = Vec::new();

    from_tables(doc, &containers, &mut table, &mut prose);
    from_definition_lists(doc, &containers, &mut table, &mut prose);
    from_lists(doc, &containers, &mut table, &mut prose);
    from_marked_blocks(doc, &mut table, &mut prose);
    from_item_elements(doc, &mut table, &mut prose);

    (table, prose.join("\n"))
}

/// Locate spec containers: keyword-marked elements plus the sibling
/// immediately following any spec-keyword heading
fn find_spec_containers(doc: &Html) -> SpecContainers<'_> {
    let mut elements = Vec::new();
    let mut ids = HashSet::new();

    let all = Selector::parse("*").unwrap();
    for el in doc.select(&all) {
        if (class_matches(&el, CONTAINER_MARKERS) || id_matches(&el, CONTAINER_MARKERS))
            && ids.insert(el.id())
        {
            elements.push(el);
        }
    }

    let heading_selector = Selector::parse("h1, h2, h3, h4, h5, h6").unwrap();
    for heading in doc.select(&heading_selector) {
        let heading_text = element_text(&heading).to_lowercase();
        if !SPEC_TEXT_KEYWORDS.iter().any(|kw| heading_text.contains(kw)) {
            continue;
        }
        if let Some(sibling) = heading.next_siblings().find_map(ElementRef::wrap) {
            if ids.insert(sibling.id()) {
                elements.push(sibling);
            }
        }
    }

    SpecContainers { elements, ids }
}

/// Strategy: specification tables. Two-cell rows map directly; wider rows
/// are zipped against a matching header row.
fn from_tables(doc: &Html, containers: &SpecContainers, table: &mut SpecTable, prose: &mut Vec<String>) {
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td, th").unwrap();

    for html_table in doc.select(&table_selector) {
        let table_text = element_text(&html_table);
        let lowered = table_text.to_lowercase();
        let keyword_hit = SPEC_TEXT_KEYWORDS.iter().any(|kw| lowered.contains(kw));
        if !keyword_hit && !containers.holds(&html_table) {
            continue;
        }

        let rows: Vec<Vec<String>> = html_table
            .select(&row_selector)
            .map(|row| {
                row.select(&cell_selector)
                    .map(|cell| element_text(&cell))
                    .collect()
            })
            .collect();

        let header = rows.iter().find(|cells| {
            cells.len() > 2 && !cells.iter().any(|c| c.is_empty())
        });

        for cells in &rows {
            match cells.len() {
                2 => add_pair(table, &cells[0], &cells[1]),
                n if n > 2 => {
                    // Zip a header row of the same width onto this row
                    if let Some(header) = header.filter(|h| h.len() == cells.len()) {
                        if header.as_slice() != cells.as_slice() {
                            for (key, value) in header.iter().zip(cells.iter()) {
                                add_pair(table, key, value);
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        if !table_text.is_empty() {
            prose.push(table_text);
        }
    }
}

/// Strategy: definition lists, zipped only when dt and dd counts agree
fn from_definition_lists(
    doc: &Html,
    containers: &SpecContainers,
    table: &mut SpecTable,
    prose: &mut Vec<String>,
) {
    let dl_selector = Selector::parse("dl").unwrap();
    let dt_selector = Selector::parse("dt").unwrap();
    let dd_selector = Selector::parse("dd").unwrap();

    for dl in doc.select(&dl_selector) {
        if !containers.is_empty() && !containers.holds(&dl) {
            continue;
        }

        let terms: Vec<String> = dl.select(&dt_selector).map(|e| element_text(&e)).collect();
        let definitions: Vec<String> = dl.select(&dd_selector).map(|e| element_text(&e)).collect();
        if terms.is_empty() || terms.len() != definitions.len() {
            continue;
        }

        for (key, value) in terms.iter().zip(definitions.iter()) {
            add_pair(table, key, value);
        }

        let dl_text = element_text(&dl);
        if !dl_text.is_empty() {
            prose.push(dl_text);
        }
    }
}

/// Strategy: bulleted/numbered lists with spec classes (or inside spec
/// containers); items split on the key separator
fn from_lists(
    doc: &Html,
    containers: &SpecContainers,
    table: &mut SpecTable,
    prose: &mut Vec<String>,
) {
    let list_selector = Selector::parse("ul, ol").unwrap();
    let item_selector = Selector::parse("li").unwrap();

    for list in doc.select(&list_selector) {
        if !class_matches(&list, CONTAINER_MARKERS) && !containers.holds(&list) {
            continue;
        }

        let mut matched = false;
        for item in list.select(&item_selector) {
            if let Some((key, value)) = text::split_key_value(&element_text(&item)) {
                add_pair(table, &key, &value);
                matched = true;
            }
        }

        if matched {
            let list_text = element_text(&list);
            if !list_text.is_empty() {
                prose.push(list_text);
            }
        }
    }
}

/// Strategy: paragraphs/divs with spec classes, split line by line
fn from_marked_blocks(doc: &Html, table: &mut SpecTable, prose: &mut Vec<String>) {
    let block_selector = Selector::parse("p, div").unwrap();

    for block in doc.select(&block_selector) {
        if !class_matches(&block, CONTAINER_MARKERS) {
            continue;
        }

        let mut matched = false;
        for line in element_text_raw(&block).lines() {
            if let Some((key, value)) = text::split_key_value(line) {
                add_pair(table, &key, &value);
                matched = true;
            }
        }

        if matched {
            let block_text = element_text(&block);
            if !block_text.is_empty() {
                prose.push(block_text);
            }
        }
    }
}

/// Strategy: spec-item style elements with an inner key half and value half
fn from_item_elements(doc: &Html, table: &mut SpecTable, prose: &mut Vec<String>) {
    let all = Selector::parse("*").unwrap();

    for item in doc.select(&all) {
        if !class_matches(&item, ITEM_CLASS_MARKERS) {
            continue;
        }

        let key = item
            .select(&all)
            .find(|el| class_matches(el, ITEM_KEY_MARKERS))
            .map(|el| element_text(&el));
        let value = item
            .select(&all)
            .find(|el| class_matches(el, ITEM_VALUE_MARKERS))
            .map(|el| element_text(&el));

        if let (Some(key), Some(value)) = (key, value) {
            add_pair(table, &key, &value);
            let item_text = element_text(&item);
            if !item_text.is_empty() {
                prose.push(item_text);
            }
        }
    }
}

/// Clean and validate a pair before inserting it into the table
fn add_pair(table: &mut SpecTable, key: &str, value: &str) {
    let key = text::clean_key(key);
    let value = text::normalize_segment(value);
    if text::key_is_valid(&key) && !value.is_empty() {
        table.insert(key, value);
    }
}

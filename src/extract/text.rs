use regex::Regex;
use std::sync::OnceLock;

/// Collapse all whitespace runs in a segment to single spaces
pub fn normalize_segment(segment: &str) -> String {
    segment.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a multi-paragraph block: runs of spaces/tabs become one space,
/// runs of three or more newlines become a single blank line.
pub fn normalize_block(text: &str) -> String {
    static SPACES: OnceLock<Regex> = OnceLock::new();
    static NEWLINES: OnceLock<Regex> = OnceLock::new();

    let spaces = SPACES.get_or_init(|| Regex::new(r"[ \t]+").unwrap());
    let newlines = NEWLINES.get_or_init(|| Regex::new(r"\n\s*\n(\s*\n)+").unwrap());

    let collapsed = spaces.replace_all(text, " ");
    let collapsed = newlines.replace_all(&collapsed, "\n\n");
    collapsed.trim().to_string()
}

/// Split "key separator value" text on the first half- or full-width colon
pub fn split_key_value(line: &str) -> Option<(String, String)> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| Regex::new(r"^([^:：]+)[:：](.*)$").unwrap());

    let caps = pattern.captures(line.trim())?;
    let key = caps.get(1)?.as_str().trim().to_string();
    let value = caps.get(2)?.as_str().trim().to_string();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Strip trailing colon/asterisk punctuation from a spec key
pub fn clean_key(key: &str) -> String {
    key.trim()
        .trim_end_matches([':', '：', '*'])
        .trim()
        .to_string()
}

/// A spec key is rejected when it is purely numeric or unreasonably long
pub fn key_is_valid(key: &str) -> bool {
    if key.is_empty() || key.chars().count() > 100 {
        return false;
    }
    !key.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

/// Case-insensitive "contains any of these markers" over one attribute value
pub fn value_contains_any(value: &str, markers: &[&str]) -> bool {
    let lowered = value.to_lowercase();
    markers.iter().any(|m| lowered.contains(m))
}

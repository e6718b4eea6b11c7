use crate::extract::specs;
use scraper::Html;

#[test]
fn test_two_column_table_with_cjk_keyword() {
    let doc = Html::parse_document(
        r#"<html><body>
            <table>
                <caption>技术参数</caption>
                <tr><td>电池</td><td>3200mAh</td></tr>
                <tr><td>重量</td><td>249g</td></tr>
            </table>
        </body></html>"#,
    );

    let (table, _) = specs::extract(&doc);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("电池"), Some("3200mAh"));
    assert_eq!(table.get("重量"), Some("249g"));
}

#[test]
fn test_table_without_spec_signal_ignored() {
    // No spec keyword, no container: pricing tables are not specs
    let doc = Html::parse_document(
        r#"<html><body>
            <table>
                <tr><td>Standard</td><td>$799</td></tr>
                <tr><td>Pro</td><td>$1099</td></tr>
            </table>
        </body></html>"#,
    );

    let (table, _) = specs::extract(&doc);
    assert!(table.is_empty());
}

#[test]
fn test_wide_table_zipped_against_header_row() {
    let doc = Html::parse_document(
        r#"<html><body><div class="specs">
            <table>
                <tr><th>Model</th><th>Weight</th><th>Battery</th></tr>
                <tr><td>Phantom X</td><td>249g</td><td>3200mAh</td></tr>
            </table>
        </div></body></html>"#,
    );

    let (table, _) = specs::extract(&doc);
    assert_eq!(table.get("Model"), Some("Phantom X"));
    assert_eq!(table.get("Weight"), Some("249g"));
    assert_eq!(table.get("Battery"), Some("3200mAh"));
}

#[test]
fn test_heading_adjacent_sibling_becomes_container() {
    // The table text itself has no spec keyword; only the preceding
    // heading marks it
    let doc = Html::parse_document(
        r#"<html><body>
            <h2>技术参数</h2>
            <table><tr><td>电池</td><td>3200mAh</td></tr></table>
        </body></html>"#,
    );

    let (table, _) = specs::extract(&doc);
    assert_eq!(table.get("电池"), Some("3200mAh"));
}

#[test]
fn test_definition_list_requires_matching_counts() {
    let doc = Html::parse_document(
        r#"<html><body><div id="tech-specs">
            <dl><dt>Range</dt><dd>10 km</dd><dt>Speed</dt><dd>68 kph</dd></dl>
            <dl><dt>Orphan</dt><dt>Pair</dt><dd>only one dd</dd></dl>
        </div></body></html>"#,
    );

    let (table, _) = specs::extract(&doc);
    assert_eq!(table.get("Range"), Some("10 km"));
    assert_eq!(table.get("Speed"), Some("68 kph"));
    assert_eq!(table.get("Orphan"), None);
}

#[test]
fn test_spec_list_items_split_on_either_colon() {
    let doc = Html::parse_document(
        r#"<html><body>
            <ul class="spec-list">
                <li>飞行时间：30分钟</li>
                <li>Max speed: 68 kph</li>
                <li>no separator in this one</li>
            </ul>
        </body></html>"#,
    );

    let (table, _) = specs::extract(&doc);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("飞行时间"), Some("30分钟"));
    assert_eq!(table.get("Max speed"), Some("68 kph"));
}

#[test]
fn test_unmarked_list_ignored() {
    let doc = Html::parse_document(
        r#"<html><body>
            <ul><li>Shipping: 3-5 days</li></ul>
        </body></html>"#,
    );

    let (table, _) = specs::extract(&doc);
    assert!(table.is_empty());
}

#[test]
fn test_marked_block_split_line_by_line() {
    let doc = Html::parse_document(
        "<html><body><div class=\"parameters\">Weight: 249g\nBattery: 3200mAh</div></body></html>",
    );

    let (table, _) = specs::extract(&doc);
    assert_eq!(table.get("Weight"), Some("249g"));
    assert_eq!(table.get("Battery"), Some("3200mAh"));
}

#[test]
fn test_item_elements_pair_key_and_value() {
    let doc = Html::parse_document(
        r#"<html><body>
            <div class="spec-item">
                <span class="spec-name">控制距离</span>
                <span class="spec-value">15 km</span>
            </div>
        </body></html>"#,
    );

    let (table, _) = specs::extract(&doc);
    assert_eq!(table.get("控制距离"), Some("15 km"));
}

#[test]
fn test_later_strategy_overwrites_earlier_value() {
    let doc = Html::parse_document(
        r#"<html><body>
            <table class="specs">
                <tr><td>重量</td><td>250g</td></tr>
                <tr><td>电池</td><td>3200mAh</td></tr>
            </table>
            <ul class="spec-list"><li>重量：249g</li></ul>
        </body></html>"#,
    );

    let (table, _) = specs::extract(&doc);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("重量"), Some("249g"));
    // The corrected key keeps its original position
    let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["重量", "电池"]);
}

#[test]
fn test_invalid_keys_rejected() {
    let long_key = "k".repeat(120);
    let html = format!(
        r#"<html><body>
            <table class="specs">
                <tr><td>12345</td><td>numeric key</td></tr>
                <tr><td>{long_key}</td><td>overlong key</td></tr>
                <tr><td>Weight:</td><td>249g</td></tr>
            </table>
        </body></html>"#
    );
    let doc = Html::parse_document(&html);

    let (table, _) = specs::extract(&doc);
    assert_eq!(table.len(), 1);
    // Trailing colon is stripped from the surviving key
    assert_eq!(table.get("Weight"), Some("249g"));
}

#[test]
fn test_prose_blob_retains_matched_text() {
    let doc = Html::parse_document(
        r#"<html><body>
            <table class="specs"><tr><td>电池</td><td>3200mAh</td></tr></table>
            <ul class="spec-list"><li>重量：249g</li></ul>
        </body></html>"#,
    );

    let (_, prose) = specs::extract(&doc);
    assert!(prose.contains("电池 3200mAh"));
    assert!(prose.contains("重量：249g"));
}

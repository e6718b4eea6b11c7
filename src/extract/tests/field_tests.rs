use crate::extract::{content, description, name};
use scraper::Html;

const PAGE_URL: &str = "https://drones.example/products/phantom-x";

#[test]
fn test_name_meta_tag_beats_title() {
    let doc = Html::parse_document(
        r#"<html><head>
            <meta property="og:title" content="Phantom X">
            <title>Phantom X | Official Store</title>
        </head><body><h1>Welcome</h1></body></html>"#,
    );

    assert_eq!(name::extract(&doc, PAGE_URL), "Phantom X");
}

#[test]
fn test_name_meta_tag_priority_order() {
    // og:title wins over twitter:title regardless of document order
    let doc = Html::parse_document(
        r#"<html><head>
            <meta name="twitter:title" content="Phantom X on Twitter">
            <meta property="og:title" content="Phantom X">
        </head><body></body></html>"#,
    );

    assert_eq!(name::extract(&doc, PAGE_URL), "Phantom X");
}

#[test]
fn test_name_short_meta_content_skipped() {
    let doc = Html::parse_document(
        r#"<html><head>
            <meta property="og:title" content="X">
            <title>Phantom X Pro</title>
        </head><body></body></html>"#,
    );

    assert_eq!(name::extract(&doc, PAGE_URL), "Phantom X Pro");
}

#[test]
fn test_name_from_marked_element() {
    let doc = Html::parse_document(
        r#"<html><body>
            <div class="product-title">Phantom X Pro</div>
        </body></html>"#,
    );

    assert_eq!(name::extract(&doc, PAGE_URL), "Phantom X Pro");
}

#[test]
fn test_name_title_suffix_stripped_at_separator() {
    let doc = Html::parse_document(
        "<html><head><title>Phantom X | Acme Drones</title></head><body></body></html>",
    );

    assert_eq!(name::extract(&doc, PAGE_URL), "Phantom X");
}

#[test]
fn test_name_boilerplate_phrase_stripped() {
    let doc = Html::parse_document(
        "<html><head><title>Phantom X Official Site</title></head><body></body></html>",
    );

    assert_eq!(name::extract(&doc, PAGE_URL), "Phantom X");
}

#[test]
fn test_name_h1_with_keyword_preferred() {
    let doc = Html::parse_document(
        r#"<html><body>
            <h1>About Our Company History And Values Around The World Today</h1>
            <h1>Phantom X Drone</h1>
        </body></html>"#,
    );

    assert_eq!(name::extract(&doc, PAGE_URL), "Phantom X Drone");
}

#[test]
fn test_name_sole_h1_accepted_by_length() {
    let doc = Html::parse_document("<html><body><h1>Phantom X Pro</h1></body></html>");
    assert_eq!(name::extract(&doc, PAGE_URL), "Phantom X Pro");
}

#[test]
fn test_name_from_url_when_page_is_bare() {
    let doc = Html::parse_document("<html><body></body></html>");
    assert_eq!(
        name::extract(&doc, "https://drones.example/uav/drone-phantom-x"),
        "Drone Phantom X"
    );
}

#[test]
fn test_description_prefers_marked_blocks() {
    let marked = "The Phantom X is a compact aerial platform built for mapping professionals.";
    let html = format!(
        r#"<html><body>
            <div class="product-desc">{marked}</div>
            <p>{}</p>
        </body></html>"#,
        "Long unrelated paragraph about company history. ".repeat(5)
    );
    let doc = Html::parse_document(&html);

    assert_eq!(description::extract(&doc), marked);
}

#[test]
fn test_description_paragraph_length_cutoffs() {
    let p40 = "x".repeat(40);
    let p60 = "y".repeat(60);
    let p120 = "z".repeat(120);
    let html = format!(
        "<html><body><p>{p40}</p><p>{p60}</p><p>{p120}</p></body></html>"
    );
    let doc = Html::parse_document(&html);

    // Only the 120-char paragraph clears the fallback threshold
    assert_eq!(description::extract(&doc), p120);
}

#[test]
fn test_description_accumulation_stops_past_budget() {
    let para = "w".repeat(200);
    let html = format!(
        "<html><body><p>{para}</p><p>{para}</p><p>{para}</p><p>{para}</p></body></html>"
    );
    let doc = Html::parse_document(&html);

    let result = description::extract(&doc);
    // Three paragraphs push past 500 chars; the fourth is never appended
    assert_eq!(result.matches(&para).count(), 3);
}

#[test]
fn test_description_short_marked_block_ignored() {
    let doc = Html::parse_document(
        r#"<html><body><div class="intro">Too short.</div></body></html>"#,
    );
    assert_eq!(description::extract(&doc), "");
}

#[test]
fn test_content_from_marked_container() {
    let doc = Html::parse_document(
        r#"<html><body>
            <div class="sidebar"><p>This sidebar paragraph is plenty long but irrelevant.</p></div>
            <div id="main-content">
                <h2>Flight Performance</h2>
                <p>The Phantom X stays airborne for thirty minutes on one charge.</p>
                <ul><li>Obstacle avoidance</li><li>Return to home</li></ul>
            </div>
        </body></html>"#,
    );

    let content = content::extract(&doc);
    assert!(content.contains("The Phantom X stays airborne"));
    assert!(content.contains("• Obstacle avoidance"));
    assert!(content.contains("Flight Performance"));
    assert!(!content.contains("sidebar paragraph"));
}

#[test]
fn test_content_page_wide_fallback() {
    let doc = Html::parse_document(
        r#"<html><body>
            <div class="wrapper">
                <p>Unmarked but sufficiently long paragraph about the aircraft.</p>
                <ul><li>Carbon frame</li></ul>
            </div>
        </body></html>"#,
    );

    let content = content::extract(&doc);
    assert!(content.contains("Unmarked but sufficiently long paragraph"));
    assert!(content.contains("• Carbon frame"));
}

#[test]
fn test_content_whitespace_normalized() {
    let doc = Html::parse_document(
        r#"<html><body><div id="content">
            <p>First    paragraph   with     ragged spacing inside it.</p>
            <p>Second paragraph that is also long enough to keep.</p>
        </div></body></html>"#,
    );

    let content = content::extract(&doc);
    assert!(content.contains("First paragraph with ragged spacing inside it."));
    assert!(!content.contains("\n\n\n"));
}

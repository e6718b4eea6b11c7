use crate::extract::extract_product;
use crate::results::RawPage;

fn page(html: &str) -> RawPage {
    page_at("https://drones.example/products/phantom-x", html)
}

fn page_at(url: &str, html: &str) -> RawPage {
    RawPage::new(
        url.to_string(),
        "Acme Drones".to_string(),
        html.to_string(),
        String::new(),
    )
}

#[test]
fn test_empty_page_yields_no_record() {
    // URL carries no product keyword either, so even the name cascade
    // comes up empty
    let raw = page_at(
        "https://drones.example/news/2024",
        "<html><body><div><span>ok</span></div></body></html>",
    );
    assert!(extract_product(&raw).is_none());
}

#[test]
fn test_full_product_page() {
    let raw = page(
        r#"<html>
        <head>
            <meta property="og:title" content="Phantom X">
            <title>Phantom X | Acme Drones</title>
        </head>
        <body>
            <nav><a href="/">Home</a><a href="/support">Support</a></nav>
            <div id="main-content">
                <h1>Phantom X Drone</h1>
                <div class="product-intro">
                    A foldable quadcopter with a three-axis gimbal, built for aerial
                    mapping and inspection work in tough environments.
                </div>
                <p>The Phantom X pairs a 4K camera with forty minutes of flight time.</p>
                <h2>技术参数</h2>
                <table>
                    <tr><td>电池</td><td>3200mAh</td></tr>
                    <tr><td>重量</td><td>249g</td></tr>
                </table>
            </div>
            <footer>Copyright Acme</footer>
        </body></html>"#,
    );

    let record = extract_product(&raw).expect("record should be emitted");

    assert_eq!(record.name, "Phantom X");
    assert_eq!(record.company, "Acme Drones");
    assert!(record.description.contains("foldable quadcopter"));
    assert_eq!(record.tech_specs.get("电池"), Some("3200mAh"));
    assert_eq!(record.tech_specs.get("重量"), Some("249g"));
    assert!(record.content.contains("4K camera"));
    assert!(record.analysis.is_none());

    // Sanitized chrome never reaches extraction output
    assert!(!record.content.contains("Support"));
    assert!(!record.content.contains("Copyright"));
}

#[test]
fn test_record_emitted_when_only_specs_found() {
    let raw = page(
        r#"<html><body>
            <table class="specs"><tr><td>电池</td><td>3200mAh</td></tr></table>
        </body></html>"#,
    );

    let record = extract_product(&raw).expect("specs alone justify a record");
    assert_eq!(record.tech_specs.len(), 1);
    assert!(record.description.is_empty());
}

#[test]
fn test_boilerplate_subtree_cannot_contribute_specs() {
    // A spec-looking table inside a comments region is removed before
    // extraction ever sees it
    let raw = page_at(
        "https://drones.example/news/2024",
        r#"<html><body>
            <div class="comments">
                <table class="specs"><tr><td>电池</td><td>9999mAh</td></tr></table>
            </div>
        </body></html>"#,
    );

    assert!(extract_product(&raw).is_none());
}

use gdoc2wechat::adapters::gdocs;
use gdoc2wechat::{DocsToWechat, StyleCatalog};

fn fixture() -> String {
    include_str!("fixtures/weekly_report.json").to_string()
}

#[test]
fn golden_snapshot_weekly_report_markup() {
    let document = gdocs::parse_document_json(&fixture()).expect("fixture should parse");
    let markup = DocsToWechat::with_defaults().extract_markup(&document);

    let expected = include_str!("golden/weekly_report_expected.md");
    pretty_assertions::assert_eq!(markup.trim_end(), expected.trim_end());
}

#[test]
fn weekly_report_html_structure() {
    let html = DocsToWechat::with_defaults()
        .convert_json(&fixture())
        .expect("fixture should convert");
    let styles = StyleCatalog::default();

    assert!(html.starts_with(&format!("<div style=\"{}\">", styles.body)));
    assert!(html.ends_with("</div>"));
    assert!(!html.contains("Weekly Report"));
    assert!(!html.contains("参考资料"));
    assert!(!html.contains("should not appear"));
    assert!(!html.contains("googleusercontent"));
    assert!(!html.contains("kix.deleted"));

    assert!(html.contains(&format!("<p style=\"{}\">Highlights</p>", styles.heading1)));
    assert!(html.contains(&format!("<p style=\"{}\">Numbers</p>", styles.heading2)));
    assert!(html.contains("<strong>12%</strong>"));
    assert!(html.contains("<a href=\"https://example.com/dash\">dashboard</a>"));
    assert!(html.contains("<del>old plan</del>"));
    assert!(html.contains(
        "src=\"https://your-cdn.com/path/to/image-for-kix.chart.png\" alt=\"Weekly chart\""
    ));

    // Two data rows, two cards; the header row is never shown on its own.
    assert_eq!(html.matches("animation-delay:").count(), 2);
    assert!(html.contains(&format!(
        "<p style=\"{}\"><strong style=\"{}\">Metric: </strong>Users</p>",
        styles.table_row, styles.table_label
    )));
    assert!(html.contains(&format!(
        "<p style=\"{}\"><strong style=\"{}\">Value: </strong>1,200</p>",
        styles.table_row_last, styles.table_label
    )));
    // "Churn" is the only non-empty cell of its row.
    assert!(html.contains(&format!(
        "<p style=\"{}\"><strong style=\"{}\">Metric: </strong>Churn</p>",
        styles.table_row_last, styles.table_label
    )));
    assert!(!html.contains(">Metric</"));
}

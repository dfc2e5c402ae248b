use pretty_assertions::assert_eq;
use workbench_engine::render_markdown;

#[test]
fn plain_text_round_trips_with_escaped_angle_brackets() {
    let markup = render_markdown("Adoption 2 < 3 and 4 > 1 & done");

    assert_eq!(markup, "<p>Adoption 2 &lt; 3 and 4 &gt; 1 &amp; done</p>\n");
}

#[test]
fn markdown_structure_renders_as_markup() {
    let markup = render_markdown("# Metrics\n\n- **AS**: 42\n- ARp: 0.31\n");

    assert!(markup.contains("<h1>Metrics</h1>"));
    assert!(markup.contains("<strong>AS</strong>"));
    assert!(markup.contains("<li>"));
}

#[test]
fn raw_html_blocks_are_escaped() {
    let markup = render_markdown("<script>alert('x')</script>\n\nafterwards");

    assert!(!markup.contains("<script>"));
    assert!(markup.contains("&lt;script&gt;"));
    assert!(markup.contains("afterwards"));
}

#[test]
fn inline_html_is_escaped() {
    let markup = render_markdown("click <b onclick=\"steal()\">here</b> now");

    assert!(!markup.contains("<b onclick"));
    assert!(markup.contains("&lt;b onclick"));
}

#[test]
fn javascript_link_destinations_are_dropped() {
    let markup = render_markdown("[metrics](javascript:alert(1))");

    assert!(!markup.contains("javascript:"));
    assert!(markup.contains("<a href=\"\">metrics</a>"));
}

#[test]
fn http_link_destinations_are_kept() {
    let markup = render_markdown("[docs](https://example.com/guide)");

    assert!(markup.contains("https://example.com/guide"));
}

#[test]
fn empty_body_renders_to_empty_markup() {
    assert_eq!(render_markdown(""), "");
}

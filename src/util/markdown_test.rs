use super::*;

#[test]
fn renders_headings_and_emphasis() {
    let out = to_html("## Strengths\n\nSolid **Rust** experience.");
    assert!(out.contains("<h2>Strengths</h2>"));
    assert!(out.contains("<strong>Rust</strong>"));
}

#[test]
fn renders_lists() {
    let out = to_html("- one\n- two\n");
    assert!(out.contains("<ul>"));
    assert_eq!(out.matches("<li>").count(), 2);
}

#[test]
fn plain_text_becomes_a_paragraph() {
    assert_eq!(to_html("hello"), "<p>hello</p>\n");
}

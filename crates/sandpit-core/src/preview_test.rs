use super::*;

#[test]
fn html_is_passed_through_unchanged() {
    let source = "<h1>Exactly this</h1>";
    assert_eq!(build_document(source, ContentType::Html), source);
}

#[test]
fn css_is_wrapped_in_the_demo_document() {
    let source = "h1 { color: rebeccapurple; }";
    let document = build_document(source, ContentType::Css);
    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains(source));
    // The demo page gives the rules something to land on.
    assert!(document.contains("<h1>"));
    assert!(document.contains("<li>"));
    assert!(document.contains("<button>"));
}

#[test]
fn demo_document_is_fixed_for_identical_input() {
    let source = "p { margin: 0; }";
    assert_eq!(
        build_document(source, ContentType::Css),
        build_document(source, ContentType::Css)
    );
}

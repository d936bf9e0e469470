use super::*;

#[test]
fn summary_lists_unique_element_names() {
    let output = MarkupExecutor.run("<h1>Hi</h1><p>Text</p><p>More</p>").unwrap();
    let elements = output
        .lines
        .iter()
        .find(|line| line.contains("Elements:"))
        .expect("elements line");
    assert!(elements.contains("h1"));
    assert!(elements.contains("p"));
    assert_eq!(elements.matches('p').count(), 1, "p listed once: {elements}");
}

#[test]
fn counts_rules_inside_style_blocks() {
    let source = "<html><style>body { color: red; } h1 { margin: 0; }</style></html>";
    let output = MarkupExecutor.run(source).unwrap();
    assert!(output.lines.iter().any(|line| line.contains("CSS Styles detected")));
    assert!(output.lines.iter().any(|line| line.contains("2 CSS rules found")));
}

#[test]
fn embedded_scripts_are_executed_and_indented() {
    let source = "<div>x</div><script>console.log('from script')</script>";
    let output = MarkupExecutor.run(source).unwrap();
    assert!(output.lines.iter().any(|line| line.contains("JavaScript detected")));
    assert!(output.lines.contains(&"📄 JavaScript Output:".to_string()));
    assert!(output.lines.contains(&"   from script".to_string()));
}

#[test]
fn script_errors_stay_inside_the_summary() {
    let source = "<div>x</div><script>nope()</script>";
    let output = MarkupExecutor.run(source).unwrap();
    assert!(output
        .lines
        .iter()
        .any(|line| line.trim_start().starts_with("JavaScript Error: ")));
    // The closing hint still lands after a failed script.
    assert_eq!(output.lines.last().unwrap(), PREVIEW_HINT);
}

#[test]
fn always_ends_with_the_preview_hint() {
    let output = MarkupExecutor.run("<h1>Hi</h1>").unwrap();
    assert_eq!(output.lines.last().unwrap(), PREVIEW_HINT);
}

#[test]
fn bare_stylesheet_gets_rule_and_selector_counts() {
    let source = "body { color: red; }\nh1, h2 { margin: 0; }";
    let output = MarkupExecutor.run(source).unwrap();
    assert_eq!(output.lines[0], "🎨 CSS Analysis:");
    assert!(output.lines.contains(&"2 CSS rules found".to_string()));
    assert!(output.lines.contains(&"2 selectors detected".to_string()));
}

#[test]
fn multiple_script_blocks_are_all_extracted() {
    let scripts = extract_scripts(
        "<script>let a = 1;</script><p>between</p><script>let b = 2;</script>",
    );
    assert!(scripts.contains("let a = 1;"));
    assert!(scripts.contains("let b = 2;"));
}

#[test]
fn closing_tags_are_not_counted_as_elements() {
    assert_eq!(unique_elements("<h1>Hi</h1>"), vec!["h1".to_string()]);
}

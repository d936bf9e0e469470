use super::*;

#[test]
fn javascript_and_typescript_share_the_js_executor() {
    let registry = ExecutorRegistry::new();
    for language in ["javascript", "typescript"] {
        let output = registry.execute(language, "console.log(7)").unwrap();
        assert_eq!(output.lines, vec!["7".to_string()], "language {language}");
    }
}

#[test]
fn html_goes_to_the_markup_executor() {
    let registry = ExecutorRegistry::new();
    let output = registry.execute("html", "<h1>Hi</h1>").unwrap();
    assert_eq!(output.lines[0], "🌐 HTML Structure detected");
}

#[test]
fn css_goes_to_the_markup_executor() {
    let registry = ExecutorRegistry::new();
    let output = registry.execute("css", "body { color: red; }").unwrap();
    assert_eq!(output.lines[0], "🎨 CSS Analysis:");
}

#[test]
fn python_goes_to_the_simulator() {
    let registry = ExecutorRegistry::new();
    let output = registry.execute("python", "print(\"hi\")").unwrap();
    assert_eq!(output.lines[0], python::BANNER);
}

#[test]
fn unknown_language_with_markup_content_is_rerouted() {
    let registry = ExecutorRegistry::new();
    let output = registry.execute("ruby", "<h1>Hi</h1>").unwrap();
    assert_eq!(output.lines[0], "🌐 HTML Structure detected");
}

#[test]
fn unknown_language_is_echoed_verbatim() {
    let registry = ExecutorRegistry::new();
    let output = registry.execute("ruby", "puts 'hi'\nputs 'bye'").unwrap();
    assert_eq!(output.lines[0], "📝 Code preview for RUBY:");
    assert!(output.lines.contains(&"puts 'hi'".to_string()));
    assert!(output.lines.contains(&"puts 'bye'".to_string()));
    assert!(output
        .lines
        .last()
        .unwrap()
        .contains("Execution support for ruby"));
}

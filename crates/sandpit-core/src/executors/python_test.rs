use super::*;

fn transcript(source: &str) -> Vec<String> {
    PythonSimulator.run(source).unwrap().lines
}

#[test]
fn hello_world_transcript() {
    let lines = transcript("print(\"Hello\")");
    assert_eq!(
        lines,
        vec![
            BANNER.to_string(),
            String::new(),
            ">>> print(\"Hello\")".to_string(),
            "Hello".to_string(),
            String::new(),
            EXECUTION_COMPLETE.to_string(),
            String::new(),
            DISCLAIMER.to_string(),
        ]
    );
}

#[test]
fn assignment_is_acknowledged_then_resolved() {
    let lines = transcript("x = 5\nprint(x)");
    let ack = lines.iter().position(|l| l == "# x = 5").expect("ack line");
    let printed = lines.iter().position(|l| l == "5").expect("printed value");
    assert!(ack < printed);
}

#[test]
fn identical_source_yields_identical_transcript() {
    let source = "import math\nx = 7\nprint(x)\nname = input(\"Who? \")\nprint(f\"Hi {name}\")";
    assert_eq!(transcript(source), transcript(source));
}

#[test]
fn single_quoted_strings_are_unquoted() {
    let lines = transcript("print('single')");
    assert!(lines.contains(&"single".to_string()));
}

#[test]
fn f_strings_are_stripped_but_not_interpolated() {
    let lines = transcript("name = \"Alice\"\nprint(f\"Hi {name}\")");
    assert!(lines.contains(&"Hi {name}".to_string()));
}

#[test]
fn numbers_and_raw_expressions_pass_through() {
    let lines = transcript("print(3.5)\nprint(a + b)");
    assert!(lines.contains(&"3.5".to_string()));
    assert!(lines.contains(&"a + b".to_string()));
}

#[test]
fn multiple_prints_on_one_line_each_react() {
    let lines = transcript("print(\"a\"); print(\"b\")");
    let a = lines.iter().position(|l| l == "a").expect("first print");
    assert_eq!(lines[a + 1], "b");
}

#[test]
fn function_bodies_are_echoed_behind_continuation_prompts() {
    let lines = transcript("def greet(name):\n    return name\nprint(\"after\")");
    assert!(lines.contains(&"✓ Function 'greet' defined".to_string()));
    assert!(lines.contains(&"...     return name".to_string()));
    // The body is swallowed: no reaction line between the body echo and the
    // dedented line's echo.
    let body = lines.iter().position(|l| l == "...     return name").unwrap();
    assert_eq!(lines[body + 1], ">>> print(\"after\")");
    assert_eq!(lines[body + 2], "after");
}

#[test]
fn functions_and_classes_are_listed_in_discovery_order() {
    let source = "def beta():\n    pass\ndef alpha():\n    pass\nclass Student:\n    pass";
    let lines = transcript(source);
    assert!(lines.contains(&"Functions defined: beta, alpha".to_string()));
    assert!(lines.contains(&"Classes defined: Student".to_string()));
}

#[test]
fn input_feeds_a_fixed_placeholder() {
    let lines = transcript("name = input(\"What's your name? \")");
    assert!(lines.contains(&"What's your name? ".to_string()));
    assert!(lines.contains(&WAITING_NOTICE.to_string()));
    assert!(lines.contains(&format!("> {PLACEHOLDER_INPUT}")));
    assert!(lines.contains(&format!("  name = {PLACEHOLDER_INPUT}")));
}

#[test]
fn imports_are_acknowledged_without_state_changes() {
    let lines = transcript("import math\nfrom os import path");
    assert!(lines.contains(&"📦 Imported module 'math'".to_string()));
    assert!(lines.contains(&"📦 Imported from 'os'".to_string()));
    assert!(!lines.iter().any(|l| l == "Variables:"));
}

#[test]
fn control_flow_is_acknowledged_but_never_branches() {
    let lines = transcript("if x > 3:\n    print(\"big\")\nwhile True:\n    pass");
    assert!(lines.contains(&"🔀 Condition evaluated".to_string()));
    assert!(lines.contains(&"🔁 Loop acknowledged".to_string()));
    // if-bodies are not block modes; the indented print still reacts.
    assert!(lines.contains(&"big".to_string()));
}

#[test]
fn comments_and_blank_lines_are_echoed_without_reaction() {
    let lines = transcript("# just a note\n\nprint(\"x\")");
    let comment = lines.iter().position(|l| l == ">>> # just a note").unwrap();
    assert_eq!(lines[comment + 1], ">>> ");
}

#[test]
fn reassignment_keeps_discovery_order_and_last_value() {
    let lines = transcript("x = 1\ny = 2\nx = 3");
    let vars = lines.iter().position(|l| l == "Variables:").unwrap();
    assert_eq!(lines[vars + 1], "  x = 3");
    assert_eq!(lines[vars + 2], "  y = 2");
}

#[test]
fn comparisons_are_not_mistaken_for_assignment() {
    let lines = transcript("x == 5");
    assert!(!lines.iter().any(|l| l.starts_with("# x")));
    assert!(lines.contains(&"✓ Processed".to_string()));
}

#[test]
fn string_variables_resolve_when_printed() {
    let lines = transcript("greeting = \"hi there\"\nprint(greeting)");
    assert!(lines.contains(&"# greeting = hi there".to_string()));
    assert!(lines.iter().filter(|l| *l == "hi there").count() >= 1);
}

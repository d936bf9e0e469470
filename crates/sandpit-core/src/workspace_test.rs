use super::*;

fn record(n: usize) -> ExecutionRecord {
    ExecutionRecord::new("javascript", vec![format!("line {n}")])
}

fn diagnostic(n: u32) -> Diagnostic {
    Diagnostic {
        line: n,
        column: 1,
        message: format!("problem {n}"),
        severity: Severity::Error,
    }
}

#[test]
fn append_preserves_order() {
    let mut workspace = OutputWorkspace::new();
    for n in 0..5 {
        workspace.append(record(n));
    }
    let lines: Vec<&str> = workspace
        .records()
        .iter()
        .map(|r| r.lines[0].as_str())
        .collect();
    assert_eq!(lines, vec!["line 0", "line 1", "line 2", "line 3", "line 4"]);
}

#[test]
fn append_never_shrinks_the_log() {
    let mut workspace = OutputWorkspace::new();
    workspace.append(record(0));
    let before = workspace.records().len();
    workspace.append(record(1));
    assert_eq!(workspace.records().len(), before + 1);
}

#[test]
fn clear_resets_only_the_log() {
    let mut workspace = OutputWorkspace::new();
    workspace.append(record(0));
    workspace.set_diagnostics(vec![diagnostic(1), diagnostic(2)]);
    workspace.select(Surface::Problems);

    workspace.clear();

    assert!(workspace.records().is_empty());
    assert_eq!(workspace.diagnostic_count(), 2);
    assert_eq!(workspace.selected(), Surface::Problems);
}

#[test]
fn diagnostics_are_replaced_wholesale() {
    let mut workspace = OutputWorkspace::new();
    workspace.set_diagnostics(vec![diagnostic(1), diagnostic(2), diagnostic(3)]);
    workspace.set_diagnostics(vec![diagnostic(9)]);
    assert_eq!(workspace.diagnostic_count(), 1);
    assert_eq!(workspace.visible_diagnostics()[0].line, 9);
}

#[test]
fn visible_diagnostics_are_capped_with_an_overflow_notice() {
    let mut workspace = OutputWorkspace::new();
    let many: Vec<Diagnostic> = (0..(MAX_VISIBLE_DIAGNOSTICS as u32 + 7))
        .map(diagnostic)
        .collect();
    workspace.set_diagnostics(many);

    assert_eq!(workspace.visible_diagnostics().len(), MAX_VISIBLE_DIAGNOSTICS);
    assert_eq!(
        workspace.overflow_notice(),
        Some("… and 7 more problems".to_string())
    );
}

#[test]
fn no_overflow_notice_under_the_cap() {
    let mut workspace = OutputWorkspace::new();
    workspace.set_diagnostics(vec![diagnostic(1)]);
    assert_eq!(workspace.overflow_notice(), None);
}

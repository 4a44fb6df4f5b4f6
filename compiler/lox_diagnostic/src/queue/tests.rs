use super::*;
use pretty_assertions::assert_eq;

#[test]
fn new_queue_has_no_errors() {
    let queue = DiagnosticQueue::new();
    assert_eq!(queue.error_count(), 0);
    assert!(!queue.had_error());
    assert!(queue.error_guaranteed().is_none());
}

#[test]
fn error_shorthand_has_empty_location() {
    let mut queue = DiagnosticQueue::new();
    queue.error(4, "Unexpected character");

    let diags: Vec<_> = queue.peek().cloned().collect();
    assert_eq!(diags, vec![Diagnostic::new(4, "Unexpected character")]);
    assert!(queue.had_error());
    assert!(queue.error_guaranteed().is_some());
}

#[test]
fn error_at_keeps_location() {
    let mut queue = DiagnosticQueue::new();
    queue.error_at(2, " at end", "Expect expression.");
    let diag = queue.flush().remove(0);
    assert_eq!(diag.location, " at end");
    assert_eq!(diag.to_string(), "[line 2] Error at end: Expect expression.");
}

#[test]
fn flush_sorts_by_position_and_clears() {
    let mut queue = DiagnosticQueue::new();
    queue.report(Diagnostic::new(3, "third").with_column(1));
    queue.report(Diagnostic::new(1, "first").with_column(5));
    queue.report(Diagnostic::new(3, "second").with_column(0));

    let messages: Vec<_> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
    assert_eq!(queue.error_count(), 0);
    assert_eq!(queue.peek().count(), 0);
}

#[test]
fn error_limit_suppresses_but_still_counts() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::with_error_limit(2));
    for line in 1..=5 {
        queue.error(line, "Unexpected character");
    }

    assert!(queue.limit_reached());
    assert_eq!(queue.peek().count(), 2);
    assert_eq!(queue.suppressed_count(), 3);
    assert_eq!(queue.error_count(), 5);
}

#[test]
fn default_config_is_unlimited() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::default());
    for line in 1..=50 {
        queue.error(line, "Unexpected character");
    }
    assert!(!queue.limit_reached());
    assert_eq!(queue.peek().count(), 50);
}

#[test]
fn reset_forgets_everything() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::with_error_limit(1));
    queue.error(1, "a");
    queue.error(1, "b");
    assert!(queue.had_error());

    queue.reset();
    assert!(!queue.had_error());
    assert_eq!(queue.suppressed_count(), 0);
    assert_eq!(queue.peek().count(), 0);
}

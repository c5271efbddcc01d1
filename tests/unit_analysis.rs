// tests/unit_analysis.rs
use deslop_core::analysis::{analyze, analyze_with, scoring, Engine};
use deslop_core::config::{Config, RuleConfig};
use deslop_core::lang::Dialect;
use deslop_core::types::{FileReport, Issue, IssueCode, Severity};
use std::fmt::Write;
use std::fs;

fn codes(issues: &[Issue]) -> Vec<IssueCode> {
    issues.iter().map(|i| i.code).collect()
}

fn find(issues: &[Issue], code: IssueCode) -> Option<&Issue> {
    issues.iter().find(|i| i.code == code)
}

#[test]
fn test_generic_name_and_broad_exception() {
    let code = "def process_data(value):\n    try:\n        return value + 1\n    except Exception:\n        return 0";
    let issues = analyze(code, Dialect::Python);

    let generic = find(&issues, IssueCode::GenericName).unwrap();
    assert_eq!(generic.line, Some(1));
    assert_eq!(generic.severity, Severity::Medium);
    assert!(generic.message.contains("process_data"));

    let broad = find(&issues, IssueCode::BroadException).unwrap();
    assert_eq!(broad.line, Some(4));
    assert_eq!(broad.severity, Severity::Medium);
}

#[test]
fn test_low_signal_comment_and_todo() {
    let code = "# This function returns the value\ndef compute():\n    # TODO: tune later\n    return 1";
    let issues = analyze(code, Dialect::Python);

    assert_eq!(find(&issues, IssueCode::LowSignalComment).unwrap().line, Some(1));
    assert_eq!(find(&issues, IssueCode::TodoMarker).unwrap().line, Some(3));
    assert_eq!(
        codes(&issues),
        vec![IssueCode::LowSignalComment, IssueCode::TodoMarker]
    );
}

#[test]
fn test_large_file_only() {
    let mut code = String::new();
    for i in 0..701 {
        let _ = writeln!(code, "value_{i} = {i}");
    }
    let issues = analyze(&code, Dialect::Python);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, IssueCode::LargeFile);
    assert_eq!(issues[0].severity, Severity::Low);
    assert_eq!(issues[0].line, Some(1));
}

#[test]
fn test_bare_except_is_high() {
    let issues = analyze("try:\n    run()\nexcept:\n    pass\n", Dialect::Python);
    let bare = find(&issues, IssueCode::BareExcept).unwrap();
    assert_eq!(bare.severity, Severity::High);
    assert_eq!(bare.line, Some(3));
}

#[test]
fn test_exception_check_is_python_only() {
    let issues = analyze("try {\n  run();\n} catch (e) {\n}\nexcept:\n", Dialect::EcmaScript);
    assert!(find(&issues, IssueCode::BareExcept).is_none());
    assert!(find(&issues, IssueCode::BroadException).is_none());
}

#[test]
fn test_ecmascript_generic_names() {
    let code = "export async function helper() {\n  return 1;\n}\nconst handler = (req) => req;\n";
    let issues = analyze(code, Dialect::EcmaScript);
    let lines: Vec<Option<usize>> = issues
        .iter()
        .filter(|i| i.code == IssueCode::GenericName)
        .map(|i| i.line)
        .collect();
    assert_eq!(lines, vec![Some(1), Some(4)]);
}

#[test]
fn test_generic_names_ignore_braced_dialects() {
    let issues = analyze("fn helper() {}\n", Dialect::Braced);
    assert!(find(&issues, IssueCode::GenericName).is_none());
}

#[test]
fn test_async_def_is_a_definition() {
    let issues = analyze("async def handler(event):\n    return event\n", Dialect::Python);
    assert!(find(&issues, IssueCode::GenericName).is_some());
}

#[test]
fn test_indent_nesting_reports_first_line_only() {
    let code = "def f(a, b, c, d):\n    if a:\n        if b:\n            if c:\n                if d:\n                    return 1\n";
    let issues = analyze(code, Dialect::Python);
    let nesting: Vec<&Issue> = issues.iter().filter(|i| i.code == IssueCode::DeepNesting).collect();
    assert_eq!(nesting.len(), 1);
    assert_eq!(nesting[0].line, Some(5));
}

#[test]
fn test_brace_nesting() {
    let code = "function f() {\n  if (a) {\n    if (b) {\n      if (c) {\n        if (d) {\n          go();\n        }\n      }\n    }\n  }\n}\n";
    let issues = analyze(code, Dialect::EcmaScript);
    assert_eq!(find(&issues, IssueCode::DeepNesting).unwrap().line, Some(5));
}

#[test]
fn test_plain_dialect_has_no_nesting_check() {
    let code = "a {\n b {\n c {\n d {\n e {\n f {\n";
    assert!(find(&analyze(code, Dialect::Plain), IssueCode::DeepNesting).is_none());
}

#[test]
fn test_duplicate_block_at_second_occurrence() {
    let code = "a = 1\nb = 2\nc = 3\nd = 4\nprint(a)\n\n# again\na = 1\nb = 2\nc = 3\nd = 4\n";
    let issues = analyze(code, Dialect::Python);
    let dup: Vec<&Issue> = issues.iter().filter(|i| i.code == IssueCode::DuplicateBlock).collect();
    assert_eq!(dup.len(), 1);
    assert_eq!(dup[0].line, Some(8));
    assert!(dup[0].message.contains("2 times"));
}

#[test]
fn test_uniform_blocks_are_not_duplicates() {
    let code = "}\n".repeat(20);
    assert!(find(&analyze(&code, Dialect::Braced), IssueCode::DuplicateBlock).is_none());
}

#[test]
fn test_duplicate_findings_limit_is_configurable() {
    let block = "a = 1\nb = 2\nc = 3\nd = 4\n";
    let other = "w = 1\nx = 2\ny = 3\nz = 4\n";
    let code = format!("{block}{other}{block}{other}");
    let rules = RuleConfig {
        max_duplicate_findings: 2,
        ..RuleConfig::default()
    };

    let default_count = analyze(&code, Dialect::Python)
        .iter()
        .filter(|i| i.code == IssueCode::DuplicateBlock)
        .count();
    let configured_count = analyze_with(&code, Dialect::Python, &rules)
        .iter()
        .filter(|i| i.code == IssueCode::DuplicateBlock)
        .count();
    assert_eq!(default_count, 1);
    assert_eq!(configured_count, 2);
}

#[test]
fn test_long_function() {
    let mut code = String::from("async def compute():\n");
    for _ in 0..85 {
        code.push_str("    total = 1\n");
    }
    let issues = analyze(&code, Dialect::Python);
    let long = find(&issues, IssueCode::LongFunction).unwrap();
    assert_eq!(long.line, Some(1));
    assert_eq!(long.message, "Function 'compute' is 86 lines long.");
}

#[test]
fn test_trailing_comment_does_not_lengthen_function() {
    let mut code = String::from("def slow():\n");
    for _ in 0..79 {
        code.push_str("    total = 1\n");
    }
    code.push_str("    # trailing note\n");
    assert!(find(&analyze(&code, Dialect::Python), IssueCode::LongFunction).is_none());

    code.push_str("    total = 2\n");
    let issues = analyze(&code, Dialect::Python);
    let long = find(&issues, IssueCode::LongFunction).unwrap();
    assert_eq!(long.message, "Function 'slow' is 82 lines long.");
}

#[test]
fn test_long_function_needs_a_clean_parse() {
    let mut code = String::from("def compute(:\n");
    for _ in 0..85 {
        code.push_str("    total = 1\n");
    }
    assert!(find(&analyze(&code, Dialect::Python), IssueCode::LongFunction).is_none());
}

#[test]
fn test_long_function_is_python_only() {
    let mut code = String::from("function compute() {\n");
    for _ in 0..85 {
        code.push_str("  total = 1;\n");
    }
    code.push_str("}\n");
    assert!(find(&analyze(&code, Dialect::EcmaScript), IssueCode::LongFunction).is_none());
}

#[test]
fn test_detection_is_deterministic() {
    let code = "def helper():\n    try:\n        pass\n    except:\n        pass\n# TODO: x\n";
    assert_eq!(analyze(code, Dialect::Python), analyze(code, Dialect::Python));
}

#[test]
fn test_malformed_input_does_not_panic() {
    for code in ["", "\n\n", "def (:::\n\t\t}}}{{", "\u{feff}# just\r\n", "\0\0\0"] {
        let _ = analyze(code, Dialect::Python);
        let _ = analyze(code, Dialect::EcmaScript);
    }
}

#[test]
fn test_score_is_capped() {
    let issues: Vec<Issue> = (1..=10)
        .map(|line| Issue::at(IssueCode::BareExcept, Severity::High, line, "bare"))
        .collect();
    assert_eq!(scoring::calculate_score(&issues), 100);
    assert_eq!(FileReport::new("a.py", issues).score(), 100);
}

#[test]
fn test_score_counts_first_twenty_issues() {
    let issues: Vec<Issue> = (1..=30)
        .map(|line| Issue::at(IssueCode::TodoMarker, Severity::Low, line, "todo"))
        .collect();
    assert_eq!(scoring::calculate_score(&issues), 80);
}

#[test]
fn test_engine_scan_keeps_order_and_reports_errors() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.py");
    let b = dir.path().join("b.py");
    let gone = dir.path().join("gone.py");
    fs::write(&a, "def helper():\n    return 1\n").unwrap();
    fs::write(&b, "x = 1\n").unwrap();

    let engine = Engine::new(Config::default());
    let report = engine.scan(&[a.clone(), gone.clone(), b.clone()]);

    let paths: Vec<_> = report.files.iter().map(|f| f.path().to_path_buf()).collect();
    assert_eq!(paths, vec![a, b]);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].path, gone);
    assert_eq!(report.total_issues, 1);
    assert_eq!(report.flagged_count(), 1);
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::use_debug,
    clippy::pattern_type_mismatch
)]

use crate::ast::Expr;
use crate::compiler::destructuring_planner::*;
use crate::options::Options;
use crate::session::Session;
use crate::test_utils::*;
use crate::value::Value;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use test_generator::test_resources;

#[derive(Debug, Serialize, Deserialize)]
struct TestCase {
    note: String,
    /// `(pattern, value)` source text pairs, in binding order.
    bindings: Vec<(String, String)>,
    #[serde(default)]
    options: Option<Options>,
    #[serde(default)]
    want_plan: Option<Vec<String>>,
    #[serde(default)]
    want_values: Option<BTreeMap<String, String>>,
    #[serde(default)]
    want_error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TestSuite {
    cases: Vec<TestCase>,
}

fn check_plan(case: &TestCase, plan: &BindingPlan) -> Result<()> {
    let Some(want_plan) = &case.want_plan else {
        return Ok(());
    };
    let actual: Vec<String> = plan.iter().map(|b| b.to_string()).collect();
    if &actual != want_plan {
        std::println!(
            "plan mismatch:\n{}",
            prettydiff::diff_lines(&want_plan.join("\n"), &actual.join("\n"))
        );
        bail!("{}: plan mismatch", case.note);
    }
    Ok(())
}

fn check_values(case: &TestCase, env: &BTreeMap<String, Value>) -> Result<()> {
    let Some(want_values) = &case.want_values else {
        return Ok(());
    };
    for (name, text) in want_values {
        let expected = read_value(text)?;
        match env.get(name) {
            Some(actual) if *actual == expected => {}
            Some(actual) => bail!("{}: `{name}` is {actual}, expected {expected}", case.note),
            None => bail!("{}: `{name}` was never bound", case.note),
        }
    }
    Ok(())
}

// Running the plan must agree with projecting each literal value through its
// pattern directly.
fn check_projection(
    case: &TestCase,
    session: &Session,
    pairs: &[(crate::form::Form, Expr)],
    env: &BTreeMap<String, Value>,
) -> Result<()> {
    let mut projected = BTreeMap::new();
    for (form, value) in pairs {
        let Expr::Literal { value, .. } = value else {
            return Ok(());
        };
        let pattern = BindingPattern::from_form(form, session)?;
        project(&pattern, value, &session.options().wildcard, &mut projected);
    }
    for (name, expected) in &projected {
        match env.get(name) {
            Some(actual) if actual == expected => {}
            actual => bail!(
                "{}: plan bound `{name}` to {actual:?}, projection gives {expected}",
                case.note
            ),
        }
    }
    Ok(())
}

fn run_destructure_suite(file: &str) -> Result<()> {
    std::println!("running destructure suite: {file}");
    let yaml = std::fs::read_to_string(file)?;
    let suite: TestSuite = serde_yaml::from_str(&yaml)?;

    for case in &suite.cases {
        std::println!("  case: {}", case.note);
        let session = match &case.options {
            Some(options) => Session::with_options(options.clone())?,
            None => Session::new(),
        };

        let mut pairs = Vec::new();
        for (pattern, value) in &case.bindings {
            pairs.push((read_form(pattern)?, read_expr(value)?));
        }

        match (create_binding_plan_from_forms(&pairs, &session), &case.want_error) {
            (Ok(plan), None) => {
                check_plan(case, &plan)?;
                let env = eval_plan(&plan)?;
                check_values(case, &env)?;
                check_projection(case, &session, &pairs, &env)?;
            }
            (Err(err), Some(expected)) => {
                let actual = err.to_span_message();
                if !actual.contains(expected.as_str()) {
                    bail!(
                        "{}: error {actual:?} does not contain {expected:?}",
                        case.note
                    );
                }
            }
            (Ok(plan), Some(expected)) => {
                bail!(
                    "{}: expected error {expected:?}, got plan\n{plan}",
                    case.note
                )
            }
            (Err(err), None) => bail!("{}: {}", case.note, err.to_span_message()),
        }
    }
    Ok(())
}

#[test_resources("tests/destructure/cases/*.yaml")]
fn run_destructure_file(file: &str) {
    run_destructure_suite(file).unwrap()
}

#[test]
fn generated_symbols_inherit_pattern_spans() -> Result<()> {
    let session = Session::new();
    let form = read_form("[a {:k b}]")?;
    let plan = create_binding_plan_from_forms(&[(form, read_expr("[1 {:k 2}]")?)], &session)?;

    let spans: Vec<(String, String)> = plan
        .iter()
        .filter_map(|b| {
            b.target
                .span()
                .map(|s| (b.target.name().to_string(), s.text().to_string()))
        })
        .collect();

    assert_eq!(spans[0], ("G__1".to_string(), "[a {:k b}]".to_string()));
    // Element bindings point at the element they were derived from.
    assert_eq!(spans[1], ("G__2".to_string(), "a".to_string()));
    assert_eq!(spans[2], ("G__3".to_string(), "a".to_string()));
    assert!(spans
        .iter()
        .any(|(name, text)| name == "G__6" && text == "{:k b}"));
    Ok(())
}

#[test]
fn accessor_expressions_carry_spans() -> Result<()> {
    let session = Session::new();
    let plan = create_binding_plan_from_forms(
        &[(read_form("@[3 x]")?, read_expr("v")?)],
        &session,
    )?;
    let access = &plan.as_slice()[1];
    assert_eq!(access.value.to_string(), "(indexed-access G__1 3)");
    assert_eq!(access.value.span().map(|s| s.text()), Some("@[3 x]"));
    Ok(())
}

#[test]
fn malformed_rest_reports_enclosing_sequence() -> Result<()> {
    let session = Session::new();
    let err = create_binding_plan_from_forms(
        &[(read_form("[a & b c]")?, read_expr("[1 2 3]")?)],
        &session,
    )
    .unwrap_err();

    assert!(matches!(err, PatternError::MalformedRest { .. }));
    assert_eq!(err.span().map(|s| s.text()), Some("[a & b c]"));
    Ok(())
}

#[test]
fn scalar_pattern_is_unsupported() -> Result<()> {
    let session = Session::new();
    let err = BindingPattern::from_form(&read_form("42")?, &session).unwrap_err();

    match &err {
        PatternError::UnsupportedPattern { kind, span } => {
            assert_eq!(kind, "integer");
            assert_eq!(span.as_ref().map(|s| s.text()), Some("42"));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_span_message().contains("--> <test>:1:1"));
    Ok(())
}

#[test]
fn literal_pattern_error_names_form_kind() -> Result<()> {
    let session = Session::new();
    for text in ["true", "\"s\"", ":k", "nil", "-3"] {
        let form = read_form(text)?;
        match BindingPattern::from_form(&form, &session) {
            Err(PatternError::UnsupportedPattern { kind, .. }) => assert_eq!(kind, form.kind()),
            other => panic!("{text}: unexpected {other:?}"),
        }
    }
    assert_eq!(read_form("true")?.kind(), "boolean");
    Ok(())
}

#[test]
fn out_of_range_span_formats_without_panicking() -> Result<()> {
    let source = crate::source::Source::from_contents("<test>".to_string(), "é[a]".to_string())?;
    // Past the end of the contents, and inside the two-byte `é`.
    for (start, end) in [(3, 40), (1, 3)] {
        let span = crate::source::Span::new(source.clone(), 1, 1, start, end);
        assert_eq!(span.text(), "");
        let pattern = BindingPattern::Sequence {
            span: Some(span),
            elements: alloc::vec![SequenceElement::Pattern(BindingPattern::Symbol(
                crate::symbol::Symbol::new("a"),
            ))],
        };
        let rendered = alloc::format!("{pattern:?}");
        assert!(rendered.contains(&alloc::format!("1:1:{start}:{end}")), "{rendered}");
        let plan = create_binding_plan(&[(pattern, read_expr("v")?)], &Session::new())?;
        assert_eq!(plan.len(), 4);
    }
    Ok(())
}

#[test]
fn rest_flag_and_bound_symbols() -> Result<()> {
    let session = Session::new();
    let pattern = BindingPattern::from_form(&read_form("[a _ & {:k [c d]}]")?, &session)?;
    assert!(pattern.has_rest());

    let names: Vec<String> = pattern
        .bound_symbols(&session)
        .iter()
        .map(|s| s.name().to_string())
        .collect();
    assert_eq!(names, ["a", "c", "d"]);
    Ok(())
}

#[test]
fn session_reset_reproduces_names() -> Result<()> {
    let session = Session::new();
    let pairs = [(read_form("[x y]")?, read_expr("v")?)];

    let first = session.destructure_forms(&pairs)?.to_string();
    let second = session.destructure_forms(&pairs)?.to_string();
    assert_ne!(first, second);

    session.reset();
    let third = session.destructure_forms(&pairs)?.to_string();
    assert_eq!(first, third);
    Ok(())
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use anyhow::Result;
use sexpc::*;

fn sym(name: &str) -> Form {
    Form::Symbol(Symbol::new(name))
}

fn tuple(items: Vec<Form>) -> Form {
    Form::Tuple { span: None, items }
}

fn plan_lines(plan: &BindingPlan) -> Vec<String> {
    plan.iter().map(|b| b.to_string()).collect()
}

#[test]
fn options_from_partial_json() -> Result<()> {
    let options = Options::from_json(r#"{ "gensym_prefix": "__t" }"#)?;
    assert_eq!(options.gensym_prefix, "__t");
    assert_eq!(options.wildcard, "_");
    assert_eq!(options.rest_marker, "&");
    Ok(())
}

#[test]
fn options_are_validated() {
    let err = Options::from_json(r#"{ "wildcard": "&" }"#).unwrap_err();
    assert!(err.to_string().contains("must differ"), "{err}");

    assert!(Options::from_json(r#"{ "gensym_prefix": "" }"#).is_err());
    assert!(Options::from_json(r#"{ "prefix": "x" }"#).is_err());

    let options = Options {
        rest_marker: String::new(),
        ..Options::default()
    };
    assert!(Session::with_options(options).is_err());
}

#[test]
fn symbol_pattern_binds_directly() -> Result<()> {
    let session = Session::new();
    let plan = session.destructure_forms(&[(sym("x"), Expr::literal(Value::Int(5)))])?;
    assert_eq!(plan_lines(&plan), ["x = 5"]);
    assert_eq!(session.gensym().issued(), 0);
    Ok(())
}

#[test]
fn built_patterns_and_read_forms_agree() -> Result<()> {
    let value = Expr::Symbol(Symbol::new("point"));

    let from_form = Session::new().destructure_forms(&[(
        tuple(vec![sym("x"), sym("y")]),
        value.clone(),
    )])?;

    let pattern = BindingPattern::Sequence {
        span: None,
        elements: vec![
            SequenceElement::Pattern(BindingPattern::Symbol(Symbol::new("x"))),
            SequenceElement::Pattern(BindingPattern::Symbol(Symbol::new("y"))),
        ],
    };
    let from_pattern = Session::new().destructure(&[(pattern, value)])?;

    assert_eq!(plan_lines(&from_form), plan_lines(&from_pattern));
    assert_eq!(
        plan_lines(&from_form),
        [
            "G__1 = point",
            "G__2 = (first-of G__1)",
            "G__3 = (rest-of G__1)",
            "x = G__2",
            "G__4 = (first-of G__3)",
            "G__5 = (rest-of G__3)",
            "y = G__4",
        ]
    );
    Ok(())
}

#[test]
fn later_pairs_see_earlier_names() -> Result<()> {
    let session = Session::new();
    let pairs = [
        (sym("xs"), Expr::Symbol(Symbol::new("input"))),
        (
            tuple(vec![sym("head"), sym("&"), sym("tail")]),
            Expr::Symbol(Symbol::new("xs")),
        ),
    ];
    let plan = session.destructure_forms(&pairs)?;

    let targets: Vec<&str> = plan.targets().map(|s| s.name()).collect();
    let xs = targets.iter().position(|&t| t == "xs");
    let head = targets.iter().position(|&t| t == "head");
    assert!(matches!((xs, head), (Some(a), Some(b)) if a < b));
    assert_eq!(plan_lines(&plan).last().map(String::as_str), Some("tail = G__3"));
    Ok(())
}

#[test]
fn lowering_reports_unsupported_shapes() {
    let session = Session::new();

    let err = session
        .lower_pattern(&Form::Literal {
            span: None,
            value: Value::Int(3),
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "can not destructure integer");

    let table = Form::Table {
        span: None,
        entries: vec![(sym("k"), sym("v"))],
    };
    let err = session.lower_pattern(&table).unwrap_err();
    assert!(err.to_string().contains("non-literal key"), "{err}");

    let array = Form::Array {
        span: None,
        items: vec![Form::Literal {
            span: None,
            value: Value::Int(0),
        }],
    };
    assert!(session.lower_pattern(&array).is_err());
}

#[test]
fn malformed_rest_points_at_the_sequence() -> Result<()> {
    let text = "(let [[a & b c] xs] a)";
    let source = Source::from_contents("core.lisp".to_string(), text.to_string())?;
    let span = Span::new(source, 1, 7, 6, 15);
    assert_eq!(span.text(), "[a & b c]");

    let pattern = Form::Tuple {
        span: Some(span),
        items: vec![sym("a"), sym("&"), sym("b"), sym("c")],
    };
    let err = Session::new()
        .destructure_forms(&[(pattern, Expr::Symbol(Symbol::new("xs")))])
        .unwrap_err()
        .to_string();

    assert!(err.contains("--> core.lisp:1:7"), "{err}");
    assert!(err.contains(text), "{err}");
    assert!(
        err.ends_with("error: unsupported binding form, only one binding can follow the `&` marker"),
        "{err}"
    );
    Ok(())
}

#[test]
fn malformed_rest_without_location() {
    let pattern = tuple(vec![sym("a"), sym("&"), sym("b"), sym("c")]);
    let err = Session::new()
        .destructure_forms(&[(pattern, Expr::Symbol(Symbol::new("xs")))])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported binding form, only one binding can follow the `&` marker"
    );
}

#[test]
fn empty_input_gives_empty_plan() -> Result<()> {
    let plan = Session::new().destructure(&[])?;
    assert!(plan.is_empty());
    assert_eq!(plan.to_string(), "");
    Ok(())
}

//! Behavioral tests for generated accessors.
//!
//! The generated TypeScript AST is evaluated by a small interpreter so the
//! tests can check what each accessor returns, not just how it is printed.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashMap;

use i18nts_core::ir::types::{ArrowBody, BinOp, TemplatePart, TsExpr, TsLiteral, TsStmt};
use i18nts_core::ir::value::{StringPart, ValueDescription};
use i18nts_core::ir::{Emit, convert, generate};
use i18nts_core::{CodegenError, GenerateOptions, generate_from_str};
use serde_json::{Value, json};

// =============================================================================
// Interpreter
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Val {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl Val {
    fn render(&self) -> String {
        match self {
            Val::Str(s) => s.clone(),
            Val::Num(n) if n.fract() == 0.0 => format!("{n:.0}"),
            Val::Num(n) => n.to_string(),
            Val::Bool(b) => b.to_string(),
        }
    }
}

fn literal(lit: &TsLiteral) -> Val {
    match lit {
        TsLiteral::String(s) => Val::Str(s.clone()),
        TsLiteral::Number(n) => Val::Num(n.as_f64().unwrap()),
        TsLiteral::Bool(b) => Val::Bool(*b),
    }
}

fn eval(expr: &TsExpr, env: &HashMap<String, Val>) -> Val {
    match expr {
        TsExpr::Ident(name) => env
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("unbound identifier {name}")),
        TsExpr::Literal(lit) => literal(lit),
        TsExpr::Template(parts) => Val::Str(
            parts
                .iter()
                .map(|part| match part {
                    TemplatePart::Static(s) => s.clone(),
                    TemplatePart::Dynamic(e) => eval(e, env).render(),
                })
                .collect(),
        ),
        TsExpr::BinOp {
            left,
            op: BinOp::StrictEqual,
            right,
        } => Val::Bool(eval(left, env) == eval(right, env)),
        other => panic!("cannot evaluate {other:?}"),
    }
}

fn exec(stmts: &[TsStmt], env: &HashMap<String, Val>) -> Option<Val> {
    for stmt in stmts {
        match stmt {
            TsStmt::Return(expr) => return Some(eval(expr, env)),
            TsStmt::If {
                cond,
                then_body,
                else_body,
            } => {
                let taken = if eval(cond, env) == Val::Bool(true) {
                    Some(then_body.as_slice())
                } else {
                    else_body.as_deref()
                };
                if let Some(result) = taken.and_then(|body| exec(body, env)) {
                    return Some(result);
                }
            }
        }
    }
    None
}

/// Call an arrow function with positional arguments and return its string result.
fn call(function: &TsExpr, args: &[Val]) -> String {
    let TsExpr::Arrow { params, body } = function else {
        panic!("not a function: {function:?}");
    };
    assert_eq!(params.len(), args.len(), "arity mismatch");
    let env: HashMap<String, Val> = params
        .iter()
        .map(|p| p.name.clone())
        .zip(args.iter().cloned())
        .collect();
    let result = match body {
        ArrowBody::Expr(expr) => eval(expr, &env),
        ArrowBody::Block(stmts) => exec(stmts, &env).expect("function fell through"),
    };
    result.render()
}

fn property<'a>(object: &'a TsExpr, key: &str) -> &'a TsExpr {
    let TsExpr::Object(props) = object else {
        panic!("not an object: {object:?}");
    };
    props
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
        .unwrap_or_else(|| panic!("missing property {key}"))
}

fn compile(value: &Value) -> TsExpr {
    generate(&convert(value).unwrap())
}

fn param_names(function: &TsExpr) -> Vec<String> {
    let TsExpr::Arrow { params, .. } = function else {
        panic!("not a function: {function:?}");
    };
    params.iter().map(|p| p.name.clone()).collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_greeting_placeholder() {
    let resource = compile(&json!({ "greeting": "Hi {name: string}" }));
    let greeting = property(&resource, "greeting");
    assert_eq!(param_names(greeting), vec!["name"]);
    assert_eq!(call(greeting, &[Val::Str("Ada".into())]), "Hi Ada");
    assert_eq!(greeting.emit(), "(name: string) => `Hi ${name}`");
}

#[test]
fn test_plural_selects_exact_count_then_nth() {
    let resource = compile(&json!({
        "items": { "0": "no items", "1": "one item", "n": "{count: number} items" }
    }));
    let items = property(&resource, "items");
    assert_eq!(call(items, &[Val::Num(0.0)]), "no items");
    assert_eq!(call(items, &[Val::Num(1.0)]), "one item");
    assert_eq!(call(items, &[Val::Num(5.0)]), "5 items");
    assert_eq!(call(items, &[Val::Num(2.0)]), "2 items");
}

#[test]
fn test_plural_with_extra_args() {
    let resource = compile(&json!({
        "files": {
            "n": "{count: number} files in {folder: string}",
            "1": "one file in {folder: string}",
            "0": "{folder: string} is empty"
        }
    }));
    let files = property(&resource, "files");
    assert_eq!(param_names(files), vec!["count", "folder"]);
    let docs = Val::Str("docs".into());
    assert_eq!(call(files, &[Val::Num(0.0), docs.clone()]), "docs is empty");
    assert_eq!(call(files, &[Val::Num(1.0), docs.clone()]), "one file in docs");
    assert_eq!(call(files, &[Val::Num(12.0), docs]), "12 files in docs");
}

#[test]
fn test_boolean_selects_form() {
    let resource = compile(&json!({ "active": { "true": "On", "false": "Off" } }));
    let active = property(&resource, "active");
    assert_eq!(call(active, &[Val::Bool(true)]), "On");
    assert_eq!(call(active, &[Val::Bool(false)]), "Off");
}

#[test]
fn test_boolean_with_placeholder_args() {
    let resource = compile(&json!({
        "status": { "true": "{user: string} is online", "false": "{user: string} left {ago: number}m ago" }
    }));
    let status = property(&resource, "status");
    assert_eq!(param_names(status), vec!["bool", "user", "ago"]);
    let bob = Val::Str("Bob".into());
    assert_eq!(
        call(status, &[Val::Bool(true), bob.clone(), Val::Num(3.0)]),
        "Bob is online"
    );
    assert_eq!(
        call(status, &[Val::Bool(false), bob, Val::Num(3.0)]),
        "Bob left 3m ago"
    );
}

#[test]
fn test_ambiguous_shape_prefers_plural() {
    // Only "n" qualifies as a plural form; it wins over any later test.
    let resource = compile(&json!({ "x": { "n": "fallback" } }));
    let x = property(&resource, "x");
    assert_eq!(param_names(x), vec!["count"]);
    assert_eq!(call(x, &[Val::Num(7.0)]), "fallback");
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_plain_strings_are_literals() {
    for text in ["", "Sign in", "{not a placeholder}", "100% {x}", "tab\tand \"quotes\""] {
        let ir = convert(&json!(text)).unwrap();
        assert!(matches!(ir, ValueDescription::Primitive(_)), "{text:?}");
        assert_eq!(
            generate(&ir),
            TsExpr::Literal(TsLiteral::String(text.to_string()))
        );
    }
}

#[test]
fn test_params_follow_first_seen_order() {
    let cases = [
        ("{b: string} {a: string}", vec!["b", "a"]),
        ("{a: number}{b: string}{a: number}", vec!["a", "b"]),
        ("x {z: object} y {y: boolean} {z: string}", vec!["z", "y"]),
    ];
    for (text, expected) in cases {
        let function = compile(&json!(text));
        assert_eq!(param_names(&function), expected, "{text:?}");
    }
}

#[test]
fn test_reserved_word_args_keep_distinct_bindings() {
    let resource = compile(&json!({ "a": "{class: string} vs {_class: number}" }));
    let a = property(&resource, "a");
    assert_eq!(param_names(a), vec!["__class", "_class"]);
    assert_eq!(call(a, &[Val::Str("first".into()), Val::Num(2.0)]), "first vs 2");
}

#[test]
fn test_string_parts_round_trip() {
    let texts = [
        "Hi {name: string}",
        "{a: string}{b: number}",
        "Start {x: string} middle {y: number} end",
        "{x: string} and {x: string} again",
        "literal {braces} then {v: string}",
    ];
    let placeholder = regex::Regex::new(r"\{[A-Za-z_$][A-Za-z0-9_$]*\s*:\s*\w*\}").unwrap();

    for text in texts {
        let ValueDescription::PlaceholderFunction(function) = convert(&json!(text)).unwrap()
        else {
            panic!("expected placeholder function for {text:?}");
        };
        let rebuilt: String = function
            .string_parts
            .iter()
            .map(|part| match part {
                StringPart::Literal(s) => s.as_str(),
                StringPart::Arg(_) => "<V>",
            })
            .collect();
        assert_eq!(rebuilt, placeholder.replace_all(text, "<V>"), "{text:?}");
        assert!(
            function
                .string_parts
                .iter()
                .all(|part| !matches!(part, StringPart::Literal(s) if s.is_empty()))
        );
    }
}

#[test]
fn test_generation_is_idempotent() {
    let resource = json!({
        "z": "last",
        "items": { "3": "three", "0": "zero", "n": "{count: number}" },
        "flag": { "false": "no", "true": "yes" },
        "list": ["a", "{b: string}", 3]
    });
    let first = compile(&resource);
    let second = compile(&resource);
    assert_eq!(first, second);
    assert_eq!(first.emit(), second.emit());
}

#[test]
fn test_key_order_preserved() {
    let ts = generate_from_str(
        r#"{ "b": "B", "a": "A", "c": "C" }"#,
        &GenerateOptions::default(),
    )
    .unwrap();
    assert_eq!(ts, "{\n  b: \"B\",\n  a: \"A\",\n  c: \"C\",\n}\n");
}

#[test]
fn test_null_aborts_compilation() {
    let err = generate_from_str(
        r#"{ "ok": "fine", "nested": { "bad": null } }"#,
        &GenerateOptions::default(),
    )
    .unwrap_err();
    match err {
        CodegenError::UnsupportedValue { path, kind } => {
            assert_eq!(path, "$.nested.bad");
            assert_eq!(kind, "null");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// =============================================================================
// Rendered output
// =============================================================================

#[test]
fn test_full_resource_rendering() {
    let resource = r#"{
  "title": "Inbox",
  "unread": {
    "0": "No unread messages",
    "1": "One unread message",
    "n": "{count: number} unread messages"
  },
  "sync": { "true": "Synced", "false": "Last synced {minutes: number} min ago" },
  "footer": {
    "legal-notice": "© {year: number} Example",
    "links": ["Help", "Privacy"]
  },
  "pageSize": 25,
  "beta": true
}"#;
    let options = GenerateOptions {
        default_export: true,
        banner: Some("Generated from en.json. Do not edit.".into()),
    };
    let ts = generate_from_str(resource, &options).unwrap();
    let expected = r#"// Generated from en.json. Do not edit.

export default {
  title: "Inbox",
  unread: (count: number) => {
    if (count === 0) {
      return "No unread messages";
    }
    if (count === 1) {
      return "One unread message";
    }
    return `${count} unread messages`;
  },
  sync: (bool: boolean, minutes: number) => {
    if (bool === true) {
      return "Synced";
    } else {
      return `Last synced ${minutes} min ago`;
    }
  },
  footer: {
    "legal-notice": (year: number) => `© ${year} Example`,
    links: ["Help", "Privacy"],
  },
  pageSize: 25,
  beta: "true",
};
"#;
    assert_eq!(ts, expected);
}

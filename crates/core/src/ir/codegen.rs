//! Code generation from the value IR to TypeScript AST.
//!
//! Every resource entry becomes either a literal or an arrow function whose
//! parameters are the entry's arguments. The generated AST can then be
//! emitted to strings via the `Emit` trait.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::types::{
    ArrowBody, BinOp, TemplatePart, TsExpr, TsLiteral, TsModule, TsParam, TsPrimitive, TsStmt,
};
use super::utils::{TS_RESERVED_WORDS, param_identifier};
use super::value::{
    Arg, ArgType, BOOL_ARG, BooleanFunction, COUNT_ARG, Form, PlaceholderFunction, Primitive,
    PluralFunction, StringPart, ValueDescription,
};

/// Generate a complete TypeScript module around one resource description.
pub fn codegen_module(
    description: &ValueDescription,
    banner: &[String],
    default_export: bool,
) -> TsModule {
    debug!(default_export, "Generating TypeScript AST from IR.");
    TsModule {
        banner: banner.to_vec(),
        default_export,
        value: generate(description),
    }
}

/// Generate the expression for a value description.
pub fn generate(description: &ValueDescription) -> TsExpr {
    match description {
        ValueDescription::Primitive(primitive) => codegen_primitive(primitive),
        ValueDescription::Object(properties) => TsExpr::Object(
            properties
                .iter()
                .map(|(key, value)| (key.clone(), generate(value)))
                .collect(),
        ),
        ValueDescription::Array(items) => TsExpr::Array(items.iter().map(generate).collect()),
        ValueDescription::PlaceholderFunction(function) => codegen_placeholder_function(function),
        ValueDescription::PluralFunction(function) => codegen_plural_function(function),
        ValueDescription::BooleanFunction(function) => codegen_boolean_function(function),
    }
}

/// Numbers stay numeric; strings and booleans become string literals.
fn codegen_primitive(primitive: &Primitive) -> TsExpr {
    let literal = match primitive {
        Primitive::Number(n) => TsLiteral::Number(n.clone()),
        Primitive::String(s) => TsLiteral::String(s.clone()),
        Primitive::Bool(b) => TsLiteral::String(b.to_string()),
    };
    TsExpr::Literal(literal)
}

fn codegen_placeholder_function(function: &PlaceholderFunction) -> TsExpr {
    let names = ParamNames::new(&function.args);
    TsExpr::Arrow {
        params: codegen_params(&function.args, &names),
        body: ArrowBody::Expr(Box::new(codegen_template(
            &function.string_parts,
            &names,
        ))),
    }
}

/// `(count: number, ...) => { if (count === K) { return ...; } ... return nth; }`
fn codegen_plural_function(function: &PluralFunction) -> TsExpr {
    let names = ParamNames::new(&function.args);
    let mut body: Vec<TsStmt> = function
        .forms
        .counts
        .iter()
        .map(|(count, form)| TsStmt::If {
            cond: strict_equal(
                COUNT_ARG,
                TsLiteral::Number(serde_json::Number::from(*count)),
            ),
            then_body: vec![TsStmt::Return(codegen_form(form, &names))],
            else_body: None,
        })
        .collect();
    body.push(TsStmt::Return(codegen_form(&function.forms.nth, &names)));

    TsExpr::Arrow {
        params: codegen_params(&function.args, &names),
        body: ArrowBody::Block(body),
    }
}

/// `(bool: boolean, ...) => { if (bool === true) { return ...; } else { return ...; } }`
fn codegen_boolean_function(function: &BooleanFunction) -> TsExpr {
    let names = ParamNames::new(&function.args);
    let body = vec![TsStmt::If {
        cond: strict_equal(BOOL_ARG, TsLiteral::Bool(true)),
        then_body: vec![TsStmt::Return(codegen_form(
            &function.forms.when_true,
            &names,
        ))],
        else_body: Some(vec![TsStmt::Return(codegen_form(
            &function.forms.when_false,
            &names,
        ))]),
    }];

    TsExpr::Arrow {
        params: codegen_params(&function.args, &names),
        body: ArrowBody::Block(body),
    }
}

/// Parameter identifiers of one function, keyed by argument name.
///
/// Reserved words get a `_` prefix, repeated until the identifier is not
/// used by any other argument of the same function.
#[derive(Debug)]
struct ParamNames<'a> {
    identifiers: HashMap<&'a str, String>,
}

impl<'a> ParamNames<'a> {
    fn new(args: &'a [Arg]) -> Self {
        let mut taken: HashSet<String> = args
            .iter()
            .filter(|arg| !TS_RESERVED_WORDS.contains(arg.name.as_str()))
            .map(|arg| arg.name.clone())
            .collect();

        let identifiers = args
            .iter()
            .map(|arg| {
                if !TS_RESERVED_WORDS.contains(arg.name.as_str()) {
                    return (arg.name.as_str(), arg.name.clone());
                }
                let mut identifier = param_identifier(&arg.name);
                while taken.contains(&identifier) {
                    identifier.insert(0, '_');
                }
                taken.insert(identifier.clone());
                (arg.name.as_str(), identifier)
            })
            .collect();

        Self { identifiers }
    }

    fn identifier(&self, name: &str) -> String {
        self.identifiers
            .get(name)
            .cloned()
            .unwrap_or_else(|| param_identifier(name))
    }
}

fn codegen_params(args: &[Arg], names: &ParamNames<'_>) -> Vec<TsParam> {
    args.iter()
        .map(|arg| TsParam {
            name: names.identifier(&arg.name),
            ty: ts_primitive(arg.ty),
        })
        .collect()
}

fn ts_primitive(ty: ArgType) -> TsPrimitive {
    match ty {
        ArgType::String => TsPrimitive::String,
        ArgType::Number => TsPrimitive::Number,
        ArgType::Object => TsPrimitive::Object,
        ArgType::Boolean => TsPrimitive::Boolean,
    }
}

fn codegen_form(form: &Form, names: &ParamNames<'_>) -> TsExpr {
    match form {
        Form::Literal(text) => TsExpr::Literal(TsLiteral::String(text.clone())),
        Form::Parts(parts) => codegen_template(parts, names),
    }
}

fn codegen_template(parts: &[StringPart], names: &ParamNames<'_>) -> TsExpr {
    TsExpr::Template(
        parts
            .iter()
            .map(|part| match part {
                StringPart::Literal(text) => TemplatePart::Static(text.clone()),
                StringPart::Arg(name) => {
                    TemplatePart::Dynamic(TsExpr::Ident(names.identifier(name)))
                }
            })
            .collect(),
    )
}

fn strict_equal(ident: &str, literal: TsLiteral) -> TsExpr {
    TsExpr::BinOp {
        left: Box::new(TsExpr::Ident(ident.to_string())),
        op: BinOp::StrictEqual,
        right: Box::new(TsExpr::Literal(literal)),
    }
}

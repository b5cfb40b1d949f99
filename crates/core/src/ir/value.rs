//! Resource-level IR produced from localization JSON.
//!
//! A `ValueDescription` tree mirrors the resource file one node per JSON value,
//! with the shape already decided:
//! - Primitive: a literal scalar with no placeholders
//! - Object / Array: structural containers, order preserved
//! - PlaceholderFunction: a string with `{name: type}` markers
//! - PluralFunction: a count-keyed form object (`"0"`, `"1"`, ..., `"n"`)
//! - BooleanFunction: a `"true"` / `"false"` form object

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

/// Key of the fallback form in a plural-form object.
pub const PLURAL_NTH_KEY: &str = "n";
/// Key of the form selected when the boolean argument is `true`.
pub const BOOLEAN_TRUE_KEY: &str = "true";
/// Key of the form selected when the boolean argument is `false`.
pub const BOOLEAN_FALSE_KEY: &str = "false";

/// Name of the implicit first argument of every plural function.
pub const COUNT_ARG: &str = "count";
/// Name of the implicit first argument of every boolean function.
pub const BOOL_ARG: &str = "bool";

/// One node of the resource IR.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ValueDescription {
    /// Scalar without placeholders
    Primitive(Primitive),
    /// Plain nested group, keys in source order
    Object(IndexMap<String, ValueDescription>),
    /// JSON array, items in source order
    Array(Vec<ValueDescription>),
    /// String containing one or more placeholders
    PlaceholderFunction(PlaceholderFunction),
    /// Count-dependent text
    PluralFunction(PluralFunction),
    /// Boolean-dependent text
    BooleanFunction(BooleanFunction),
}

/// Scalar JSON value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Primitive {
    /// String without placeholders
    String(String),
    /// Number, kept exactly as decoded
    Number(serde_json::Number),
    /// Boolean, rendered as its string form
    Bool(bool),
}

/// Declared type of a placeholder argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    /// `string`, also the fallback for unknown tokens
    String,
    /// `number`
    Number,
    /// `object`
    Object,
    /// `boolean`
    Boolean,
}

impl ArgType {
    /// Resolve a placeholder type token. Unknown or empty tokens fall back to `String`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "number" => ArgType::Number,
            "object" => ArgType::Object,
            "boolean" => ArgType::Boolean,
            _ => ArgType::String,
        }
    }
}

/// A named, typed function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arg {
    /// Placeholder name as written in the resource
    pub name: String,
    /// Declared type
    #[serde(rename = "type")]
    pub ty: ArgType,
}

impl Arg {
    /// Create an argument from a name and a type.
    pub fn new(name: impl Into<String>, ty: ArgType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A piece of an interpolated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StringPart {
    /// Verbatim text between placeholders (never empty)
    Literal(String),
    /// Reference to an argument by name
    Arg(String),
}

/// Text of a single plural or boolean form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Form {
    /// Form without placeholders
    Literal(String),
    /// Form with placeholders
    Parts(Vec<StringPart>),
}

/// A string with placeholders, split into literal and argument parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderFunction {
    /// Deduplicated by name, first-seen order
    pub args: Vec<Arg>,
    /// Parts in source order; concatenating them rebuilds the string
    pub string_parts: Vec<StringPart>,
}

/// Text selected by an exact count, with an nth fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluralFunction {
    /// Always starts with `count: number`
    pub args: Vec<Arg>,
    /// Exact-count forms and the fallback
    pub forms: PluralForms,
}

/// Forms of a plural function. The nth form is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluralForms {
    /// Exact-count forms, iterated in ascending count order
    pub counts: BTreeMap<u64, Form>,
    /// Fallback for any count without an exact form
    pub nth: Form,
}

/// Text selected by a boolean argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BooleanFunction {
    /// Always starts with `bool: boolean`
    pub args: Vec<Arg>,
    /// The two forms
    pub forms: BooleanForms,
}

/// Forms of a boolean function. Both are mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanForms {
    /// Returned when the argument is `true`
    pub when_true: Form,
    /// Returned otherwise
    pub when_false: Form,
}

//! Normalization from decoded resource JSON to the value IR.
//!
//! This module owns all of the shape inference:
//! - Placeholder extraction from strings
//! - Plural-form and boolean-form object detection
//! - Argument deduplication across forms

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::placeholder::scan;
use super::utils::needs_bracket_notation;
use super::value::{
    Arg, ArgType, BOOL_ARG, BOOLEAN_FALSE_KEY, BOOLEAN_TRUE_KEY, BooleanForms, BooleanFunction,
    COUNT_ARG, Form, PLURAL_NTH_KEY, PlaceholderFunction, Primitive, PluralForms, PluralFunction,
    StringPart, ValueDescription,
};
use crate::error::CodegenError;

/// Shape an object value can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectShape {
    /// Integer keys plus `"n"`, all values strings
    PluralForm,
    /// Exactly `"true"` and `"false"`, both strings
    BooleanForm,
    /// Anything else
    Plain,
}

/// Order in which object shapes are tested. The first accepting shape wins.
pub const SHAPE_PRECEDENCE: [ObjectShape; 3] = [
    ObjectShape::PluralForm,
    ObjectShape::BooleanForm,
    ObjectShape::Plain,
];

/// Classify an object value by shape.
pub fn classify_object(obj: &Map<String, Value>) -> ObjectShape {
    classify(obj).shape()
}

/// Convert a decoded JSON value into its IR description.
pub fn convert(value: &Value) -> Result<ValueDescription, CodegenError> {
    debug!(kind = json_kind(value), "Converting resource JSON to IR.");
    convert_value(value, JsonPath::Root)
}

// =============================================================================
// Classification
// =============================================================================

/// Form strings borrowed from a plural-form object.
#[derive(Debug)]
struct PluralFormSource<'a> {
    counts: BTreeMap<u64, &'a str>,
    nth: &'a str,
}

/// Form strings borrowed from a boolean-form object.
#[derive(Debug)]
struct BooleanFormSource<'a> {
    when_true: &'a str,
    when_false: &'a str,
}

#[derive(Debug)]
enum Classified<'a> {
    PluralForm(PluralFormSource<'a>),
    BooleanForm(BooleanFormSource<'a>),
    Plain,
}

impl Classified<'_> {
    fn shape(&self) -> ObjectShape {
        match self {
            Classified::PluralForm(_) => ObjectShape::PluralForm,
            Classified::BooleanForm(_) => ObjectShape::BooleanForm,
            Classified::Plain => ObjectShape::Plain,
        }
    }
}

fn classify(obj: &Map<String, Value>) -> Classified<'_> {
    for shape in SHAPE_PRECEDENCE {
        let classified = match shape {
            ObjectShape::PluralForm => plural_form_source(obj).map(Classified::PluralForm),
            ObjectShape::BooleanForm => boolean_form_source(obj).map(Classified::BooleanForm),
            ObjectShape::Plain => Some(Classified::Plain),
        };
        if let Some(classified) = classified {
            return classified;
        }
    }
    Classified::Plain
}

/// Parse a plural count key: non-empty ASCII digits that fit in `u64`.
fn parse_count_key(key: &str) -> Option<u64> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// A count key without leading zeros, as JavaScript prints the number.
fn is_canonical_count_key(key: &str) -> bool {
    key.len() == 1 || !key.starts_with('0')
}

fn plural_form_source(obj: &Map<String, Value>) -> Option<PluralFormSource<'_>> {
    let nth = obj.get(PLURAL_NTH_KEY)?.as_str()?;
    let mut counts = BTreeMap::new();

    for (key, value) in obj {
        let text = value.as_str()?;
        if key == PLURAL_NTH_KEY {
            continue;
        }
        // "1" and "01" name the same count; the canonical spelling wins, then source order.
        let count = parse_count_key(key)?;
        if is_canonical_count_key(key) {
            counts.insert(count, text);
        } else {
            counts.entry(count).or_insert(text);
        }
    }

    Some(PluralFormSource { counts, nth })
}

fn boolean_form_source(obj: &Map<String, Value>) -> Option<BooleanFormSource<'_>> {
    if obj.len() != 2 {
        return None;
    }
    Some(BooleanFormSource {
        when_true: obj.get(BOOLEAN_TRUE_KEY)?.as_str()?,
        when_false: obj.get(BOOLEAN_FALSE_KEY)?.as_str()?,
    })
}

// =============================================================================
// Conversion
// =============================================================================

fn convert_value(value: &Value, path: JsonPath<'_>) -> Result<ValueDescription, CodegenError> {
    match value {
        Value::String(s) => Ok(convert_string(s)),
        Value::Number(n) => Ok(ValueDescription::Primitive(Primitive::Number(n.clone()))),
        Value::Bool(b) => Ok(ValueDescription::Primitive(Primitive::Bool(*b))),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| convert_value(item, JsonPath::Index(&path, index)))
            .collect::<Result<Vec<_>, _>>()
            .map(ValueDescription::Array),
        Value::Object(obj) => convert_object(obj, path),
        Value::Null => Err(CodegenError::UnsupportedValue {
            path: path.to_string(),
            kind: json_kind(value),
        }),
    }
}

fn convert_object(
    obj: &Map<String, Value>,
    path: JsonPath<'_>,
) -> Result<ValueDescription, CodegenError> {
    let classified = classify(obj);
    trace!(path = %path, shape = ?classified.shape(), "Classified object.");

    match classified {
        Classified::PluralForm(source) => {
            Ok(ValueDescription::PluralFunction(convert_plural_form(source)))
        }
        Classified::BooleanForm(source) => {
            Ok(ValueDescription::BooleanFunction(convert_boolean_form(source)))
        }
        Classified::Plain => {
            let mut properties = IndexMap::with_capacity(obj.len());
            for (key, value) in obj {
                let description = convert_value(value, JsonPath::Key(&path, key))?;
                properties.insert(key.clone(), description);
            }
            Ok(ValueDescription::Object(properties))
        }
    }
}

fn convert_plural_form(source: PluralFormSource<'_>) -> PluralFunction {
    let mut args = ArgSet::with_implicit(Arg::new(COUNT_ARG, ArgType::Number));

    let counts = source
        .counts
        .into_iter()
        .map(|(count, text)| (count, convert_form(text, &mut args)))
        .collect();
    let nth = convert_form(source.nth, &mut args);

    PluralFunction {
        args: args.into_args(),
        forms: PluralForms { counts, nth },
    }
}

fn convert_boolean_form(source: BooleanFormSource<'_>) -> BooleanFunction {
    let mut args = ArgSet::with_implicit(Arg::new(BOOL_ARG, ArgType::Boolean));

    let when_true = convert_form(source.when_true, &mut args);
    let when_false = convert_form(source.when_false, &mut args);

    BooleanFunction {
        args: args.into_args(),
        forms: BooleanForms {
            when_true,
            when_false,
        },
    }
}

fn convert_string(value: &str) -> ValueDescription {
    match interpolate(value) {
        Some(function) => ValueDescription::PlaceholderFunction(function),
        None => ValueDescription::Primitive(Primitive::String(value.to_string())),
    }
}

/// Convert one form string, merging its arguments into the shared set.
fn convert_form(value: &str, args: &mut ArgSet) -> Form {
    match interpolate(value) {
        Some(function) => {
            args.extend(function.args);
            Form::Parts(function.string_parts)
        }
        None => Form::Literal(value.to_string()),
    }
}

/// Split a string at its placeholders. Returns `None` when there are none.
///
/// Literal runs are sliced between successive match boundaries; empty runs
/// (leading, trailing, or between adjacent placeholders) are omitted.
fn interpolate(value: &str) -> Option<PlaceholderFunction> {
    let mut args = ArgSet::default();
    let mut string_parts = Vec::new();
    let mut cursor = 0;

    for placeholder in scan(value) {
        if placeholder.range.start > cursor {
            string_parts.push(StringPart::Literal(
                value[cursor..placeholder.range.start].to_string(),
            ));
        }
        args.insert(Arg::new(
            placeholder.name,
            ArgType::from_token(placeholder.type_token),
        ));
        string_parts.push(StringPart::Arg(placeholder.name.to_string()));
        cursor = placeholder.range.end;
    }

    if string_parts.is_empty() {
        return None;
    }
    if cursor < value.len() {
        string_parts.push(StringPart::Literal(value[cursor..].to_string()));
    }

    Some(PlaceholderFunction {
        args: args.into_args(),
        string_parts,
    })
}

// =============================================================================
// Helpers
// =============================================================================

/// Insertion-ordered argument set, deduplicated by name (first wins).
#[derive(Debug, Default)]
struct ArgSet {
    args: IndexMap<String, ArgType>,
}

impl ArgSet {
    fn with_implicit(arg: Arg) -> Self {
        let mut set = Self::default();
        set.insert(arg);
        set
    }

    fn insert(&mut self, arg: Arg) {
        self.args.entry(arg.name).or_insert(arg.ty);
    }

    fn extend(&mut self, args: impl IntoIterator<Item = Arg>) {
        for arg in args {
            self.insert(arg);
        }
    }

    fn into_args(self) -> Vec<Arg> {
        self.args
            .into_iter()
            .map(|(name, ty)| Arg { name, ty })
            .collect()
    }
}

/// Location of a node inside the resource, for error messages.
#[derive(Debug, Clone, Copy)]
enum JsonPath<'a> {
    Root,
    Key(&'a JsonPath<'a>, &'a str),
    Index(&'a JsonPath<'a>, usize),
}

impl fmt::Display for JsonPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonPath::Root => write!(f, "$"),
            JsonPath::Key(parent, key) if needs_bracket_notation(key) => {
                write!(f, "{parent}[{key:?}]")
            }
            JsonPath::Key(parent, key) => write!(f, "{parent}.{key}"),
            JsonPath::Index(parent, index) => write!(f, "{parent}[{index}]"),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

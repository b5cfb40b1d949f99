//! TypeScript IR types for code generation.
//!
//! This module defines the subset of TypeScript needed for resource accessors:
//! - TsPrimitive: Parameter types (string, number, object, boolean)
//! - TsExpr: Expressions (literals, arrows, objects, arrays, templates)
//! - TsStmt: Statements inside arrow function bodies
//! - TsModule: The rendered file

/// TypeScript primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    /// string
    String,
    /// number
    Number,
    /// object
    Object,
    /// boolean
    Boolean,
}

/// TypeScript literal values
#[derive(Debug, Clone, PartialEq)]
pub enum TsLiteral {
    /// String literal: "foo"
    String(String),
    /// Kept as the decoded JSON number so it renders exactly as written
    Number(serde_json::Number),
    /// Boolean literal: true
    Bool(bool),
}

/// TypeScript expression
#[derive(Debug, Clone, PartialEq)]
pub enum TsExpr {
    /// Identifier: foo
    Ident(String),
    /// Literal value: "bar", 42
    Literal(TsLiteral),
    /// Arrow function: (x: string) => `${x}`
    Arrow {
        /// Typed parameters, in declaration order
        params: Vec<TsParam>,
        /// Concise or block body
        body: ArrowBody,
    },
    /// Object literal: { a: 1, "b-c": 2 }
    Object(Vec<(String, TsExpr)>),
    /// Array literal: [a, b, c]
    Array(Vec<TsExpr>),
    /// Template literal: `${foo}/bar`
    Template(Vec<TemplatePart>),
    /// Binary comparison: count === 1
    BinOp {
        /// Left operand
        left: Box<TsExpr>,
        /// Operator
        op: BinOp,
        /// Right operand
        right: Box<TsExpr>,
    },
}

/// Body of an arrow function
#[derive(Debug, Clone, PartialEq)]
pub enum ArrowBody {
    /// Concise body: () => expr
    Expr(Box<TsExpr>),
    /// Block body: () => { ... }
    Block(Vec<TsStmt>),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// ===
    StrictEqual,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsParam {
    /// Parameter identifier
    pub name: String,
    /// Parameter type annotation
    pub ty: TsPrimitive,
}

/// Template literal part
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    /// Static string part
    Static(String),
    /// Dynamic expression part: ${expr}
    Dynamic(TsExpr),
}

/// Statement in a function body
#[derive(Debug, Clone, PartialEq)]
pub enum TsStmt {
    /// Return statement
    Return(TsExpr),
    /// If statement
    If {
        /// Condition
        cond: TsExpr,
        /// Statements run when the condition holds
        then_body: Vec<TsStmt>,
        /// Optional else branch
        else_body: Option<Vec<TsStmt>>,
    },
}

// =============================================================================
// Module-Level IR (for printer)
// =============================================================================

/// Complete TypeScript file holding one resource expression
#[derive(Debug, Clone, PartialEq)]
pub struct TsModule {
    /// Comment lines emitted above the expression
    pub banner: Vec<String>,
    /// Wrap the expression as `export default ...;`
    pub default_export: bool,
    /// The resource expression
    pub value: TsExpr,
}

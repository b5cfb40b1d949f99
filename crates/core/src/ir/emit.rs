//! TypeScript code emission via the Emit trait.
//!
//! Each AST type implements `Emit` for clean, composable code generation.
//! Multi-line constructs (objects, arrays, block bodies) are indented two
//! spaces per nesting level.

use super::types::{
    ArrowBody, BinOp, TemplatePart, TsExpr, TsLiteral, TsModule, TsParam, TsPrimitive, TsStmt,
};
use super::utils::{escape_js_string, escape_template_text, quote_if_needed};

/// Trait for emitting TypeScript code from AST nodes.
pub trait Emit {
    /// Convert the AST node to its TypeScript string representation.
    fn emit(&self) -> String;
}

// =============================================================================
// Primitive Types
// =============================================================================

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::String => "string".to_string(),
            TsPrimitive::Number => "number".to_string(),
            TsPrimitive::Object => "object".to_string(),
            TsPrimitive::Boolean => "boolean".to_string(),
        }
    }
}

impl Emit for TsLiteral {
    fn emit(&self) -> String {
        match self {
            TsLiteral::String(s) => format!("\"{}\"", escape_js_string(s)),
            TsLiteral::Number(n) => n.to_string(),
            TsLiteral::Bool(b) => b.to_string(),
        }
    }
}

// =============================================================================
// Expressions
// =============================================================================

impl Emit for BinOp {
    fn emit(&self) -> String {
        match self {
            BinOp::StrictEqual => "===".to_string(),
        }
    }
}

impl Emit for TsParam {
    fn emit(&self) -> String {
        format!("{}: {}", self.name, self.ty.emit())
    }
}

impl Emit for TsExpr {
    fn emit(&self) -> String {
        self.emit_indented(0)
    }
}

impl TsExpr {
    /// Emit at the given nesting level (2 spaces per level).
    ///
    /// The first line is not prefixed; continuation lines and the closing
    /// delimiter are aligned to `indent`.
    pub fn emit_indented(&self, indent: usize) -> String {
        let prefix = "  ".repeat(indent);
        let inner = "  ".repeat(indent + 1);
        match self {
            TsExpr::Ident(name) => name.clone(),
            TsExpr::Literal(lit) => lit.emit(),
            TsExpr::Arrow { params, body } => {
                let params_str = params.iter().map(|p| p.emit()).collect::<Vec<_>>().join(", ");
                match body {
                    ArrowBody::Expr(expr) => {
                        format!("({}) => {}", params_str, expr.emit_indented(indent))
                    }
                    ArrowBody::Block(stmts) if stmts.is_empty() => {
                        format!("({params_str}) => {{}}")
                    }
                    ArrowBody::Block(stmts) => {
                        let mut output = format!("({params_str}) => {{\n");
                        for stmt in stmts {
                            output.push_str(&stmt.emit_indented(indent + 1));
                        }
                        output.push_str(&format!("{prefix}}}"));
                        output
                    }
                }
            }
            TsExpr::Object(props) => {
                if props.is_empty() {
                    return "{}".to_string();
                }
                let mut output = "{\n".to_string();
                for (key, value) in props {
                    output.push_str(&format!(
                        "{}{}: {},\n",
                        inner,
                        quote_if_needed(key),
                        value.emit_indented(indent + 1)
                    ));
                }
                output.push_str(&format!("{prefix}}}"));
                output
            }
            TsExpr::Array(items) => {
                if items.iter().all(|item| matches!(item, TsExpr::Literal(_))) {
                    let items_str = items.iter().map(|i| i.emit()).collect::<Vec<_>>().join(", ");
                    return format!("[{items_str}]");
                }
                let mut output = "[\n".to_string();
                for item in items {
                    output.push_str(&format!("{}{},\n", inner, item.emit_indented(indent + 1)));
                }
                output.push_str(&format!("{prefix}]"));
                output
            }
            TsExpr::Template(parts) => {
                let content: String = parts
                    .iter()
                    .map(|p| match p {
                        TemplatePart::Static(s) => escape_template_text(s),
                        TemplatePart::Dynamic(e) => format!("${{{}}}", e.emit_indented(indent)),
                    })
                    .collect();
                format!("`{content}`")
            }
            TsExpr::BinOp { left, op, right } => {
                format!(
                    "{} {} {}",
                    left.emit_indented(indent),
                    op.emit(),
                    right.emit_indented(indent)
                )
            }
        }
    }
}

// =============================================================================
// Statements
// =============================================================================

impl Emit for TsStmt {
    fn emit(&self) -> String {
        self.emit_indented(1)
    }
}

impl TsStmt {
    /// Emit with specified indentation level (2 spaces per level)
    pub fn emit_indented(&self, indent: usize) -> String {
        let prefix = "  ".repeat(indent);
        match self {
            TsStmt::Return(expr) => format!("{}return {};\n", prefix, expr.emit_indented(indent)),
            TsStmt::If {
                cond,
                then_body,
                else_body,
            } => {
                let mut output = format!("{}if ({}) {{\n", prefix, cond.emit_indented(indent));
                for stmt in then_body {
                    output.push_str(&stmt.emit_indented(indent + 1));
                }
                if let Some(else_stmts) = else_body {
                    output.push_str(&format!("{prefix}}} else {{\n"));
                    for stmt in else_stmts {
                        output.push_str(&stmt.emit_indented(indent + 1));
                    }
                }
                output.push_str(&format!("{prefix}}}\n"));
                output
            }
        }
    }
}

// =============================================================================
// Module
// =============================================================================

impl Emit for TsModule {
    fn emit(&self) -> String {
        let mut output = String::new();

        for line in &self.banner {
            if line.is_empty() {
                output.push_str("//\n");
            } else {
                output.push_str(&format!("// {line}\n"));
            }
        }
        if !self.banner.is_empty() {
            output.push('\n');
        }

        if self.default_export {
            output.push_str(&format!("export default {};\n", self.value.emit()));
        } else {
            output.push_str(&self.value.emit());
            output.push('\n');
        }

        output
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Intermediate Representation for localization JSON to TypeScript code generation.
//!
//! This module defines a three-layer architecture:
//! 1. Value IR: resource entries with their shape decided (placeholder, plural, boolean)
//! 2. TypeScript AST IR: Expressions, statements, arrow functions
//! 3. Emission: AST to TypeScript code strings via the `Emit` trait
//!
//! The separation allows:
//! - All shape inference resolved in normalization
//! - Code generation builds structured AST (testable)
//! - Emission is purely mechanical string building
//!
//! ## Module Structure
//!
//! - `value`: Value IR (ValueDescription, Arg, StringPart, forms)
//! - `placeholder`: `{name: type}` scanner
//! - `normalize`: JSON -> Value IR conversion
//! - `types`: TypeScript AST IR (TsExpr, TsStmt, TsModule)
//! - `codegen`: Value IR -> TypeScript AST
//! - `emit`: TypeScript AST -> code strings (via Emit trait)
//! - `utils`: Common utilities shared across modules

pub mod codegen;
pub mod emit;
pub mod normalize;
pub mod placeholder;
pub mod types;
pub mod utils;
pub mod value;

// Re-export the main entry points
pub use codegen::{codegen_module, generate};
pub use emit::Emit;
pub use normalize::convert;

//! TypeScript code emitter for localization resources.
//!
//! This module is a thin wrapper around the IR-based code generation.
//! The pipeline is:
//! 1. Parse: resource JSON -> serde_json::Value
//! 2. Normalize: Value -> ValueDescription (all shape inference resolved)
//! 3. Codegen: ValueDescription -> TsModule (TypeScript AST)
//! 4. Emit: TsModule -> String (via Emit trait)

use serde_json::Value;
use tracing::debug;

use crate::error::CodegenError;
use crate::ir::{Emit, codegen_module, convert};
use crate::options::GenerateOptions;

/// Generate TypeScript code from a localization JSON string.
pub fn generate_from_str(
    resource_json: &str,
    options: &GenerateOptions,
) -> Result<String, CodegenError> {
    // Key order matters for the output; serde_json is built with `preserve_order`.
    let value: Value = serde_json::from_str(resource_json)?;
    debug!(resource_len = resource_json.len(), "Parsed resource JSON.");
    generate_from_value(&value, options)
}

/// Generate TypeScript code from an already decoded resource.
pub fn generate_from_value(
    value: &Value,
    options: &GenerateOptions,
) -> Result<String, CodegenError> {
    // Normalize to value IR (all shape inference happens here)
    let description = convert(value)?;

    // Generate TypeScript AST and emit to string
    let ts_code = codegen_module(
        &description,
        &options.banner_lines(),
        options.default_export,
    )
    .emit();
    debug!(ts_code_len = ts_code.len(), "TypeScript accessors generated.");
    Ok(ts_code)
}

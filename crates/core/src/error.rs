//! Errors raised while compiling a localization resource.

/// A fatal compilation failure. No partial output is produced.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// The resource text is not valid JSON.
    #[error("invalid resource JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSON value that has no localization meaning (e.g. `null`).
    #[error("unsupported {kind} value at {path}")]
    UnsupportedValue {
        /// JSON path of the value, e.g. `$.menu.items[1]`
        path: String,
        /// JSON kind of the value, e.g. `null`
        kind: &'static str,
    },
}

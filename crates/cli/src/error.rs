use std::path::PathBuf;

use i18nts_core::CodegenError;

/// Failures surfaced to the user by the `i18nts` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{}: {source}", .path.display())]
    Codegen {
        path: PathBuf,
        source: CodegenError,
    },

    #[error("failed to serialize IR: {0}")]
    SerializeIr(#[from] serde_json::Error),
}

//! Option resolution: TOML config file first, command-line flags on top.
//!
//! A config file holds the same keys as `GenerateOptions`:
//!
//! ```toml
//! default_export = true
//! banner = "Generated by i18nts. Do not edit."
//! ```

use std::fs;
use std::path::Path;

use i18nts_core::GenerateOptions;
use tracing::debug;

use crate::error::CliError;
use crate::generate::GenerateArgs;

/// Load options from a TOML config file.
pub fn load_options(path: &Path) -> Result<GenerateOptions, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let options = toml::from_str(&contents).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(config = %path.display(), ?options, "Loaded config file.");
    Ok(options)
}

/// Merge config-file options with explicit flags. Flags win.
pub fn resolve_options(args: &GenerateArgs) -> Result<GenerateOptions, CliError> {
    let base = match &args.config {
        Some(path) => load_options(path)?,
        None => GenerateOptions::default(),
    };
    let default_export = if args.no_default_export {
        false
    } else {
        args.default_export || base.default_export
    };
    Ok(GenerateOptions {
        default_export,
        banner: args.banner.clone().or(base.banner),
    })
}

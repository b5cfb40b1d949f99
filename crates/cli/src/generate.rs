use clap::Args;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use i18nts_core::{GenerateOptions, generate_from_value, ir};
use serde_json::Value;

use crate::config::resolve_options;
use crate::error::CliError;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Localization JSON file to compile
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the result to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Wrap the accessors in `export default ...;`
    #[arg(long, overrides_with = "no_default_export")]
    pub default_export: bool,

    /// Print the bare expression, even when the config file sets `default_export`
    #[arg(long, overrides_with = "default_export")]
    pub no_default_export: bool,

    /// Comment placed at the top of the generated file
    #[arg(long, value_name = "TEXT")]
    pub banner: Option<String>,

    /// TOML file with default options
    #[arg(long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the intermediate representation as JSON instead of TypeScript
    #[arg(long)]
    pub emit_ir: bool,
}

pub fn run(args: GenerateArgs) -> i32 {
    match execute(&args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err}");
            1
        }
    }
}

fn execute(args: &GenerateArgs) -> Result<(), CliError> {
    let options = resolve_options(args)?;

    let source = fs::read_to_string(&args.input).map_err(|source| CliError::Read {
        path: args.input.clone(),
        source,
    })?;
    debug!(
        input = %args.input.display(),
        source_len = source.len(),
        "Read localization resource."
    );

    let rendered = if args.emit_ir {
        render_ir(&args.input, &source)?
    } else {
        render_typescript(&args.input, &source, &options)?
    };

    write_output(args.output.as_deref(), &rendered)
}

fn decode(input: &Path, source: &str) -> Result<Value, CliError> {
    serde_json::from_str(source).map_err(|err| CliError::Codegen {
        path: input.to_path_buf(),
        source: err.into(),
    })
}

fn render_typescript(
    input: &Path,
    source: &str,
    options: &GenerateOptions,
) -> Result<String, CliError> {
    let value = decode(input, source)?;
    generate_from_value(&value, options).map_err(|source| CliError::Codegen {
        path: input.to_path_buf(),
        source,
    })
}

fn render_ir(input: &Path, source: &str) -> Result<String, CliError> {
    let value = decode(input, source)?;
    let description = ir::convert(&value).map_err(|source| CliError::Codegen {
        path: input.to_path_buf(),
        source,
    })?;
    let mut json = serde_json::to_string_pretty(&description)?;
    json.push('\n');
    Ok(json)
}

fn write_output(output: Option<&Path>, rendered: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| CliError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(path, rendered).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!(
                output = %path.display(),
                bytes = rendered.len(),
                "Wrote generated file."
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
    }
    Ok(())
}

//! i18nts - compile JSON localization resources into typed TypeScript accessors.
//!
//! Reads one resource file and prints (or writes) a TypeScript expression with
//! one accessor per entry.

mod config;
mod error;
mod generate;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "i18nts",
    version,
    about = "Compile localization JSON into typed TypeScript accessors"
)]
struct Cli {
    #[command(flatten)]
    args: generate::GenerateArgs,

    /// Log pipeline stages to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so generated code on stdout stays clean
    let default_filter = if cli.verbose {
        "i18nts=debug,i18nts_core=debug"
    } else {
        "i18nts=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    std::process::exit(generate::run(cli.args));
}

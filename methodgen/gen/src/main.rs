//! methodgen code generator
//!
//! Generates typed request builders from an endpoint catalog.

use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use methodgen_define::Catalog;
use methodgen_gen::config::{DEFAULT_RUNTIME_CRATE, DEFAULT_TOKEN_KEY, GeneratorConfig};
use methodgen_gen::errors::GeneratorError;
use methodgen_gen::output::{FsSink, generate, generate_and_write};

/// methodgen - transforms endpoint catalogs into typed Rust request builders
#[derive(Parser, Debug)]
#[command(name = "methodgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Endpoint catalog (JSON)
    #[arg(short, long, default_value = "endpoints.json")]
    catalog: PathBuf,

    /// Output directory for generated code
    #[arg(short, long, default_value = "src/generated")]
    output: PathBuf,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Path generated code uses to reach the runtime crate
    #[arg(long, default_value = DEFAULT_RUNTIME_CRATE)]
    runtime_crate: String,

    /// Form key the auth token is sent under
    #[arg(long, default_value = DEFAULT_TOKEN_KEY)]
    token_key: String,

    /// Do not emit mod.rs
    #[arg(long)]
    no_mod_file: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        let label = self
            .catalog
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.catalog.display().to_string());

        GeneratorConfig::default()
            .with_runtime_crate(&self.runtime_crate)
            .with_token_key(&self.token_key)
            .with_catalog_label(label)
            .with_mod_file(!self.no_mod_file)
    }
}

/// Filter used when `RUST_LOG` is unset.
fn default_filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    EnvFilter::new(level.to_string().to_lowercase())
}

/// Installs the log subscriber. `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let catalog = Catalog::from_file(&cli.catalog)?;
    info!(
        catalog = %cli.catalog.display(),
        endpoints = catalog.len(),
        "loaded catalog"
    );

    let config = cli.config();

    if cli.dry_run {
        let output = generate(&catalog, &config)?;
        for file in &output.files {
            println!("=== {} ===\n{}\n", file.name, file.content);
        }
        return Ok(());
    }

    let mut sink = FsSink::new(&cli.output);
    let output = generate_and_write(&catalog, &config, &mut sink)?;
    info!(
        files = output.len(),
        output = %cli.output.display(),
        "generated bindings"
    );

    Ok(())
}

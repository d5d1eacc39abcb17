//! Nyuzi encoding test generator CLI.
//!
//! This binary writes the paired llvm-mc encoding corpora in one pass. It performs:
//! 1. **Configuration:** Built-in defaults, optionally overridden by a JSON file and then by flags.
//! 2. **Generation:** Every instruction class is enumerated and both corpora are written.
//! 3. **Summary:** Per-class record counts are logged once the files are flushed.
//!
//! Logging goes to stderr and honors `RUST_LOG` (default `info`).

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use nyuzi_mc_core::{GeneratorConfig, write_corpora};

#[derive(Parser, Debug)]
#[command(
    name = "make-tests",
    author,
    version,
    about = "Generate paired llvm-mc assembler/disassembler encoding tests for Nyuzi",
    long_about = "Enumerates every instruction form, packs its encoding and writes two corpora:\nassembler-tests.s (text checked against bytes) and disassembler-tests.s (bytes checked against text).\n\nExamples:\n  make-tests\n  make-tests --out-dir test/MC/Nyuzi --seed 42\n  make-tests --config corpus.json"
)]
struct Cli {
    /// JSON configuration file; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the corpora are written into.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Seed of the immediate generator.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Program named in the generated-file disclaimer (default: this executable's name).
    #[arg(long)]
    program: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli, invoked_name()).unwrap_or_else(|e| {
        error!("{e}");
        process::exit(1);
    });

    match write_corpora(&config, &cli.out_dir) {
        Ok(stats) => {
            info!(total = stats.total(), "corpora written");
            info!("\n{stats}");
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

/// Builds the effective configuration: defaults, then the config file, then flags.
///
/// When neither `--program` nor the config file names a program, the
/// disclaimer names `invoked` (the executable itself).
fn resolve_config(cli: &Cli, invoked: Option<String>) -> nyuzi_mc_core::Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if cli.program.is_some() {
        config.program.clone_from(&cli.program);
    } else if config.program.is_none() {
        config.program = invoked;
    }
    Ok(config)
}

/// File name this binary was invoked as.
fn invoked_name() -> Option<String> {
    let arg0 = std::env::args_os().next()?;
    Path::new(&arg0)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

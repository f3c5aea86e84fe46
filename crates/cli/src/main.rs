use clap::Parser;
use eyre::{Result, WrapErr};
use safe_txns_core::{GeneratorConfig, generate_safe_txns};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate Safe Transaction Builder batch files from a deployment manifest
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the deployment manifest JSON [default: deployment-info.json]
    #[arg(long = "manifest", short = 'm')]
    manifest: Option<PathBuf>,

    /// Directory to write the batch files into [default: safe-txns]
    #[arg(long = "out", short = 'o')]
    output_dir: Option<PathBuf>,

    /// Optional TOML file providing `manifest` and `output_dir`
    #[arg(long = "config", short = 'c')]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(manifest) = cli.manifest {
        config.manifest = manifest;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    let report = generate_safe_txns(&config).wrap_err_with(|| {
        format!(
            "failed to generate Safe transactions from {}",
            config.manifest.display()
        )
    })?;

    for path in report.written() {
        println!("Saved transaction to: {}", path.display());
    }

    Ok(())
}

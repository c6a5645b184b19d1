//! Main entry point for the Portico configuration CLI
//!
//! Resolves the environment record for the requested deployment mode and
//! source, validates it, and prints the result as pretty JSON.

mod error;

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use portico_config::{service, ConfigSource, EnvironmentConfig, EnvironmentFile, Mode};
use tracing::{debug, info};

use crate::error::Result;

#[derive(Parser)]
#[command(
    name = "portico",
    about = "Resolve and inspect Portico environment configuration",
    version,
    author
)]
struct Args {
    /// Path to a JSON environment file (defaults to the process environment)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Resolve the production environment
    #[arg(long)]
    production: bool,

    /// Also resolve service-side settings from the environment
    #[arg(long)]
    services: bool,

    /// Generate an example environment file
    #[arg(long)]
    gen_config: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    portico_common::logging::init_cli_logging(&args.verbosity, "portico=info")?;

    // Handle config generation
    if args.gen_config {
        println!("{}", EnvironmentFile::generate_example()?);
        return Ok(());
    }

    if let Some(path) = service::load_dotenv()? {
        debug!("loaded environment overrides from {}", path.display());
    }

    let mode = if args.production {
        Mode::Production
    } else {
        Mode::Development
    };
    let source = match args.config {
        Some(path) => ConfigSource::File(path),
        None => ConfigSource::Environment,
    };

    info!(
        "Portico v{}: resolving {:?} environment from {}",
        portico_config::VERSION,
        mode,
        source
    );

    let config = EnvironmentConfig::load(mode, &source)?;

    let output = if args.services {
        let verifier = service::VerifierConfig::from_env()?;
        let admin = service::AdminClientConfig::from_env()?;
        debug!("token verifier issuer: {}", verifier.issuer());
        debug!("admin token endpoint: {}", admin.token_endpoint());

        serde_json::json!({
            "environment": config,
            "verifier": verifier,
            "adminClient": admin,
        })
    } else {
        serde_json::to_value(&config)?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

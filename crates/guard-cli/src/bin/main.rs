//! credential-guard - generate, check and seal credentials from the shell
//!
//! The passphrase comes from `--passphrase` or the environment variable named
//! by the `passphraseEnv` setting (default `GUARD_PASSPHRASE`). An unset
//! passphrase is treated as the empty passphrase.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;

use guard_cli::{load_settings, logging, Command};
use guard_core::{ErrorResult, GuardError};

/// Credential Guard - password generation, strength checks and passphrase sealing
#[derive(Parser, Debug)]
#[command(name = "credential-guard")]
#[command(version)]
#[command(about = "Credential Guard - password generation, strength checks and passphrase sealing")]
struct Args {
    /// Path to a JSON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Passphrase for encrypt/decrypt (overrides the configured environment variable)
    #[arg(long, global = true)]
    passphrase: Option<String>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let rendered = serde_json::to_string(&ErrorResult::from(&err))
                .unwrap_or_else(|_| err.to_string());
            eprintln!("{}", rendered);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<String, GuardError> {
    let log_level = logging::init();

    let settings = load_settings(args.config.as_deref())?;
    if let Err(e) = logging::set_level(&log_level, settings.tracing_level()?) {
        warn!("Unable to apply log level: {}", e);
    }

    let passphrase = args
        .passphrase
        .or_else(|| std::env::var(&settings.passphrase_env).ok())
        .unwrap_or_default();

    args.command.run(&passphrase)
}

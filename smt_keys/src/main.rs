#![warn(clippy::unwrap_used, clippy::expect_used)]

mod config;

use clap::Parser;
use smt_keys::{hash::poseidon::Poseidon, Key, KeyDeriver};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Command, Config, LogFormat};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("failed to derive key")]
    Derive(#[from] smt_keys::Error),

    #[error("tracing parse error")]
    TracingParse(#[from] tracing_subscriber::filter::ParseError),

    #[error("error setting tracing global subscriber")]
    TracingSetGlobalDefault(#[from] tracing_subscriber::util::TryInitError),
}

fn main() {
    let config = Config::parse();

    if let Err(err) = run(config) {
        error!(error = %err, "exiting");
        eprintln!("error: {err}");
        if let Some(source) = std::error::Error::source(&err) {
            eprintln!("caused by: {source}");
        }
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), AppError> {
    setup_tracing(&config)?;

    let key = derive(&config.command)?;
    info!(command = ?config.command, %key, "derived key");
    println!("{key}");

    Ok(())
}

fn derive(command: &Command) -> Result<Key, smt_keys::Error> {
    let deriver = KeyDeriver::new(Poseidon);

    match command {
        Command::Balance { address } => deriver.balance(address.as_slice()),
        Command::Nonce { address } => deriver.nonce(address.as_slice()),
        Command::Code { address } => deriver.code(address.as_slice()),
        Command::CodeLength { address } => deriver.code_length(address.as_slice()),
        Command::Storage { address, position } => {
            deriver.storage_u256(address.as_slice(), *position)
        }
    }
}

fn setup_tracing(config: &Config) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(config.log_level.as_filter())?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}

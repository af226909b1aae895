// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

mod commands;
mod output;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use g16_types::CurveId;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// Environment variable that overrides the configured log filter
const LOG_ENV: &str = "G16_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "g16", version, about = "Groth16 proof verification")]
struct Cli {
    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Verify a proof against a verifying key and public inputs
    Verify {
        /// Verifying key (JSON)
        #[arg(long)]
        vk: PathBuf,
        /// Proof (JSON)
        #[arg(long)]
        proof: PathBuf,
        /// Public witness (JSON)
        #[arg(long)]
        witness: PathBuf,
        /// Run both Miller loops on the calling thread
        #[arg(long)]
        sequential: bool,
    },
    /// Render a BN254 verifying key as a Solidity verifier contract
    ExportSolidity {
        /// Verifying key (JSON)
        #[arg(long)]
        vk: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a sample key, proof and witness for `x·x = s` with public x
    Demo {
        #[arg(long, default_value = "bn254")]
        curve: CurveId,
        /// Public input x
        #[arg(long, default_value_t = 5)]
        value: u64,
        /// Output directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Show or change CLI settings
    Config {
        #[command(subcommand)]
        action: ConfigCmd,
    },
}

#[derive(Subcommand)]
enum ConfigCmd {
    /// Print current settings
    Show,
    /// Set a config value
    Set {
        /// Config key (log_filter, sequential)
        key: String,
        /// New value
        value: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);

    let settings = Settings::load()?;
    init_tracing(&settings);

    match cli.command {
        Cmd::Verify {
            vk,
            proof,
            witness,
            sequential,
        } => commands::verify::run(&vk, &proof, &witness, sequential || settings.sequential)?,
        Cmd::ExportSolidity { vk, out } => commands::export::run(&vk, out.as_deref())?,
        Cmd::Demo { curve, value, dir } => commands::demo::run(curve, value, &dir)?,
        Cmd::Config { action } => match action {
            ConfigCmd::Show => commands::config::show(&settings)?,
            ConfigCmd::Set { key, value } => commands::config::set(settings, &key, &value)?,
        },
    }
    Ok(())
}

/// `G16_LOG` wins over the configured `log_filter`; both fall back to `warn`
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(settings.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keyguard_firmware::ui::SecretText;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod render;
mod wordlist;

use commands::host_config::{ChecksumMode, HostConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive the keyguard secret entry screens from a terminal")]
pub struct Cli {
    /// JSON configuration file. Flags below override its values.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Wordlist with one word per line, used for autocompletion and generation.
    #[arg(long, value_name = "PATH")]
    wordlist: Option<PathBuf>,

    /// Phrase validation used by the recovery screen.
    #[arg(long, value_enum)]
    checksum: Option<ChecksumMode>,

    /// Show anti-phishing words above the PIN field.
    #[arg(long)]
    anti_phishing: bool,

    /// Fixed seed for keypad layouts and generated phrases.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Print the collected secret instead of its fingerprint.
    #[arg(long)]
    reveal: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Enter a PIN on a randomized keypad.
    Pin,
    /// Type a recovery phrase with autocompletion.
    Recover,
    /// Show a freshly generated recovery phrase.
    Generate,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let outcome = commands::run(&cli.command, &config, cli.seed, stdin, &mut stdout)
        .context("secret entry failed")?;
    report(outcome.as_ref(), config.reveal_secrets, &mut stdout)?;
    Ok(())
}

/// Load the optional configuration file and apply command line overrides.
fn resolve_config(cli: &Cli) -> Result<HostConfig> {
    let mut config = match &cli.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };

    if let Some(path) = &cli.wordlist {
        config.wordlist = Some(path.clone());
    }
    if let Some(mode) = cli.checksum {
        config.checksum = mode;
    }
    config.anti_phishing |= cli.anti_phishing;
    config.reveal_secrets |= cli.reveal;
    Ok(config)
}

fn report<W: Write + ?Sized>(outcome: Option<&SecretText>, reveal: bool, out: &mut W) -> io::Result<()> {
    match outcome {
        None => writeln!(out, "entry cancelled"),
        Some(secret) if reveal => writeln!(out, "secret: {}", secret.as_str()),
        Some(secret) => writeln!(out, "fingerprint: {}", fingerprint(secret)),
    }
}

/// Short digest that lets a tester compare secrets without printing them.
fn fingerprint(secret: &str) -> String {
    let hash = blake3::hash(secret.as_bytes());
    hash.to_hex().as_str()[..16].to_string()
}

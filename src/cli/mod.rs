//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, SafeKeepingError};
use crate::vault::{Vault, VaultKind};

/// SafeKeeping CLI: per-application secret storage.
#[derive(Parser)]
#[command(
    name = "safekeeping",
    about = "Per-application secret storage in the OS keyring or a private file store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Namespace (application name) to operate on
    #[arg(short = 'N', long, env = "SAFEKEEPING_NAMESPACE", global = true)]
    pub namespace: Option<String>,

    /// Vault kind: native (OS keyring) or file (plaintext, insecure)
    #[arg(long, value_parser = parse_vault_kind, global = true)]
    pub vault: Option<VaultKind>,

    /// Base directory for file vaults and description indexes
    #[arg(long, env = "SAFEKEEPING_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to a config file (default: <config dir>/safekeeping/config.toml)
    #[arg(long, env = "SAFEKEEPING_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Store a secret (add or overwrite)
    Set {
        /// Secret key (letters, digits, '_' and '-')
        key: String,
        /// Secret value (omit to read from stdin or an interactive prompt)
        value: Option<String>,
        /// Attach a description so the secret shows up in `list`
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Print a secret's value
    Get {
        /// Secret key
        key: String,
        /// Don't print a trailing newline
        #[arg(short = 'n')]
        no_newline: bool,
    },

    /// Set or replace the description of a stored secret
    Describe {
        /// Secret key
        key: String,
        /// New description
        description: String,
    },

    /// List secrets that have a description
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List every key the backend holds, described or not
    Keys,

    /// Delete a secret and its description
    Delete {
        /// Secret key
        key: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show where this namespace keeps its data
    Path,

    /// Show version and available backends
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum, ignore_case = true)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

fn parse_vault_kind(s: &str) -> std::result::Result<VaultKind, String> {
    s.parse().map_err(|e: SafeKeepingError| e.to_string())
}

/// Load settings from `--config`, or from the platform config directory.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => Settings::load_file(path),
        None => Settings::load_default(),
    }
}

/// Open the vault selected by the CLI flags, falling back to settings.
pub fn open_vault(cli: &Cli) -> Result<Vault> {
    let settings = load_settings(cli)?;

    let namespace = cli
        .namespace
        .clone()
        .unwrap_or_else(|| settings.default_namespace.clone());
    let kind = cli.vault.unwrap_or(settings.default_vault);
    let base = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => settings.base_dir()?,
    };

    if kind == VaultKind::InsecureFile {
        tracing::info!(namespace = %namespace, "using the insecure plaintext file vault");
    }

    Vault::create(&namespace, kind, &base)
}

/// Get the secret value for `key`, trying in order:
/// 1. The value given on the command line
/// 2. Piped stdin, taken byte-for-byte
/// 3. Interactive prompt
///
/// Returns `Zeroizing<Vec<u8>>` so the value is wiped from memory on drop.
pub fn read_secret_value(key: &str, value: Option<&str>) -> Result<Zeroizing<Vec<u8>>> {
    if let Some(v) = value {
        output::warning("Value provided on command line — it may appear in shell history.");
        return Ok(Zeroizing::new(v.as_bytes().to_vec()));
    }

    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(Vec::new());
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    let entered = Zeroizing::new(
        dialoguer::Password::new()
            .with_prompt(format!("Enter value for {key}"))
            .interact()
            .map_err(|e| SafeKeepingError::CommandFailed(format!("input prompt: {e}")))?,
    );
    Ok(Zeroizing::new(entered.as_bytes().to_vec()))
}

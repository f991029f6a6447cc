//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for curlkit.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Import a pasted curl command into a structured HTTP request
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "curlkit", version, about, long_about = None)]
pub struct Args {
    // =========================================================================
    // POSITIONAL ARGUMENTS
    // =========================================================================

    /// The curl command to import; read from stdin when omitted or "-"
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Print the request as a regenerated curl command instead of JSON
    #[arg(long = "curl", action = ArgAction::SetTrue)]
    pub curl: bool,

    /// Print JSON on a single line
    #[arg(long = "compact", action = ArgAction::SetTrue)]
    pub compact: bool,

    /// Report parse errors verbatim instead of the friendly wording
    #[arg(long = "raw-errors", action = ArgAction::SetTrue)]
    pub raw_errors: bool,

    // =========================================================================
    // VARIABLES
    // =========================================================================

    /// Substitute {{NAME}} placeholders (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", action = ArgAction::Append)]
    pub vars: Vec<String>,

    /// Load substitution variables from a .env file
    #[arg(long = "env-file", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Prepend a scheme (http:// or https://) to a URL that has none
    #[arg(long = "normalize-url", action = ArgAction::SetTrue)]
    pub normalize_url: bool,

    // =========================================================================
    // TROUBLESHOOTING
    // =========================================================================

    /// Log parser decisions to stderr
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,

    /// Output format for logs: text (default) or json (JSON Lines)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    // =========================================================================
    // SHELL INTEGRATION
    // =========================================================================

    /// Print shell completions and exit
    #[arg(long = "generate-completions", value_name = "SHELL", value_enum)]
    pub generate_completions: Option<Shell>,

    /// Print a man page and exit
    #[arg(long = "generate-manpage", action = ArgAction::SetTrue)]
    pub generate_manpage: bool,
}

impl Args {
    /// Whether the command should be read from stdin
    pub fn reads_stdin(&self) -> bool {
        matches!(self.command.as_deref(), None | Some("-"))
    }
}

/// Shell types for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Log format for structured output (CI/CD)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}

//! CLI argument definitions using the clap derive API.
//!
//! Only argument names, help text and value enums live here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use binder_adapters::RequestFormat;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "binder",
    bin_name = "binder",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bind request documents into validated domain objects",
    long_about = "binder loads an access-request document, binds it into the \
                  domain model and reports every validation error at once, \
                  each with its full argument path.",
    after_help = "EXAMPLES:\n\
        \x20 binder bind request.json\n\
        \x20 binder bind request.toml --problem\n\
        \x20 binder --output-format json bind request.json\n\
        \x20 binder completions bash > /usr/share/bash-completion/completions/binder",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bind and validate a request document.
    #[command(
        visible_alias = "b",
        about = "Bind and validate a request document",
        after_help = "EXAMPLES:\n\
            \x20 binder bind request.json\n\
            \x20 binder bind request.txt --format toml\n\
            \x20 binder bind request.json --problem"
    )]
    Bind(BindArgs),

    /// Initialise a binder configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 binder init\n\
            \x20 binder init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 binder completions bash > ~/.local/share/bash-completion/completions/binder\n\
            \x20 binder completions zsh  > ~/.zfunc/_binder\n\
            \x20 binder completions fish > ~/.config/fish/completions/binder.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the binder configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 binder config get problem.type_uri\n\
            \x20 binder config list\n\
            \x20 binder config path"
    )]
    Config(ConfigCommands),
}

// ── bind ──────────────────────────────────────────────────────────────────────

/// Arguments for `binder bind`.
#[derive(Debug, Args)]
pub struct BindArgs {
    /// Request document to bind.
    #[arg(value_name = "FILE", help = "Request document (JSON or TOML)")]
    pub file: PathBuf,

    /// Document format; inferred from the extension when omitted.
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        value_enum,
        help = "Document format (default: from extension, then config)"
    )]
    pub format: Option<DocumentFormat>,

    /// Report validation errors as an RFC 7807 problem-details body.
    #[arg(short = 'p', long = "problem", help = "Print errors as problem-details JSON")]
    pub problem: bool,

    /// `instance` member of the problem-details body.
    #[arg(
        long = "instance",
        value_name = "URI",
        requires = "problem",
        help = "Problem-details instance URI"
    )]
    pub instance: Option<String>,
}

/// Request document formats accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl From<DocumentFormat> for RequestFormat {
    fn from(format: DocumentFormat) -> Self {
        match format {
            DocumentFormat::Json => Self::Json,
            DocumentFormat::Toml => Self::Toml,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `binder init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `binder completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `problem.title`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

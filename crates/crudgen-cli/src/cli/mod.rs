//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudgen",
    bin_name = "crudgen",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "CRUD scaffolding for Laravel-style API projects",
    long_about = "Crudgen generates the boilerplate a JSON API resource needs \
                  from a single model name: controller, form requests, \
                  resource, factory, documentation stub, and test stubs.",
    after_help = "EXAMPLES:\n\
        \x20 crudgen make               # prompts for the model name\n\
        \x20 crudgen make post --yes    # scaffold everything, no questions\n\
        \x20 crudgen make tag --dry-run # show what would be written\n\
        \x20 crudgen completions zsh > ~/.zfunc/_crudgen",
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

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold CRUD boilerplate for one model.
    #[command(
        visible_alias = "m",
        about = "Scaffold CRUD boilerplate for a model",
        after_help = "EXAMPLES:\n\
            \x20 crudgen make\n\
            \x20 crudgen make post --yes\n\
            \x20 crudgen make category --project-root ../shop-api"
    )]
    Make(MakeArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudgen completions bash > ~/.local/share/bash-completion/completions/crudgen\n\
            \x20 crudgen completions zsh  > ~/.zfunc/_crudgen\n\
            \x20 crudgen completions fish > ~/.config/fish/completions/crudgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudgen make`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Model name.  Any casing and either grammatical number is accepted;
    /// prompted interactively when omitted.
    #[arg(value_name = "MODEL", help = "Model name (prompted when omitted)")]
    pub name: Option<String>,

    /// Accept every confirmation (requests, resource, factory, tests).
    #[arg(
        short = 'y',
        long = "yes",
        help = "Accept all confirmations and scaffold everything"
    )]
    pub yes: bool,

    /// Preview the run without writing files or invoking generators.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Root directory of the host project.
    #[arg(
        long = "project-root",
        value_name = "DIR",
        help = "Host project root (default: current directory)"
    )]
    pub project_root: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudgen completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────

//! CLI for rellist.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use rellist_core::config;
use rellist_core::filename::FilenameStrategy;
use rellist_core::listing::ListingStyle;
use std::path::PathBuf;

use commands::{run_completions, run_config_path, run_list, run_preset, run_presets};

/// Top-level CLI for rellist.
#[derive(Debug, Parser)]
#[command(name = "rellist")]
#[command(about = "rellist: list release assets from a saved release page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options for a single listing.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Saved HTML page to scan, or `-` for stdin.
    pub input: PathBuf,

    /// Substring the href must contain (may start with `-`, e.g. `--as_stats2.csv`).
    #[arg(short, long, allow_hyphen_values = true)]
    pub pattern: String,

    /// Prepended verbatim to every filename (e.g. `all2/`).
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Filename source: `path-tail` (after the last `/` of the href) or `label` (anchor text).
    #[arg(long, default_value = "path-tail")]
    pub strategy: FilenameStrategy,

    /// Output style: `call` or `json`.
    #[arg(long, default_value = "call")]
    pub format: ListingStyle,

    /// Record name around each entry; defaults to the config value.
    #[arg(long)]
    pub record: Option<String>,

    /// Separator between entries; defaults to the config value.
    #[arg(long)]
    pub separator: Option<String>,

    /// Resolve relative hrefs against this URL (e.g. https://github.com).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Wrap the listing as `<NAME> = [...]`.
    #[arg(long, value_name = "NAME")]
    pub assign: Option<String>,

    /// Append a `"""<TEXT>"""` line after the listing.
    #[arg(long, value_name = "TEXT")]
    pub docstring: Option<String>,

    /// Remove each matched anchor's row after listing it.
    #[arg(long)]
    pub remove_rows: bool,

    /// Ancestor depth of the removed row; defaults to the config value.
    #[arg(long, value_name = "N")]
    pub levels: Option<usize>,

    /// Write the page, minus removed rows, to this path.
    #[arg(long, value_name = "PATH", requires = "remove_rows")]
    pub rewrite: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print one listing of anchors matching a pattern.
    List(ListArgs),

    /// Run every job of a named preset from the config file.
    Preset {
        /// Preset name (see `rellist presets`).
        name: String,

        /// Saved HTML page to scan, or `-` for stdin.
        input: PathBuf,

        /// Write the page, minus rows removed by the preset's jobs, to this path.
        #[arg(long, value_name = "PATH")]
        rewrite: Option<PathBuf>,
    },

    /// List configured presets.
    Presets,

    /// Print the config file location.
    ConfigPath,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let mut stdout = std::io::stdout().lock();
        match cli.command {
            CliCommand::List(args) => run_list(&cfg, &args, &mut stdout)?,
            CliCommand::Preset {
                name,
                input,
                rewrite,
            } => run_preset(&cfg, &name, &input, rewrite.as_deref(), &mut stdout)?,
            CliCommand::Presets => run_presets(&cfg),
            CliCommand::ConfigPath => run_config_path()?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

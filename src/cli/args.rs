//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Parse every configured language and write the C header and sources
//! - `check`: Parse and reconcile without writing anything
//! - `init`: Initialize a `.strtabrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::Overrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by generate and check.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Config file path (default: nearest .strtabrc.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print every parsed entry
    #[arg(short, long)]
    pub verbose: bool,

    /// Print each generated file after writing it
    #[arg(long)]
    pub show_output: bool,
}

impl From<&CommonArgs> for Overrides {
    fn from(args: &CommonArgs) -> Self {
        Self {
            config: args.config.clone(),
            output_dir: args.output_dir.clone(),
            verbose: args.verbose,
            show_output: args.show_output,
        }
    }
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the C header and one table source per language
    Generate(GenerateCommand),
    /// Parse all languages and report schema conflicts without writing files
    Check(CheckCommand),
    /// Initialize a new .strtabrc.json configuration file
    Init,
}

//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Classmin
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `run`: Scan CSS definitions and rewrite CSS + HTML in place
//! - `plan`: Dry run; print the rename map without touching any file
//! - `init`: Initialize classmin configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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

/// Common arguments shared by the `run` and `plan` commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// HTML file to rewrite (overrides config file)
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// CSS file or glob pattern to scan and rewrite (repeatable, overrides config file)
    #[arg(long = "css", value_name = "PATTERN")]
    pub css: Vec<String>,

    /// Path to the configuration file
    #[arg(long, env = "CLASSMIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write the generated rename map as JSON to this path after a successful run
    #[arg(long, value_name = "PATH")]
    pub write_map: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the rename map as JSON instead of an aligned table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rename defined classes in CSS and HTML files, overwriting them in place
    Run(RunArgs),
    /// Show the rename map that a run would apply, without writing anything
    Plan(PlanArgs),
    /// Create a default .classminrc.json in the current directory
    Init,
}

//! CLI definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use squashview_config::{Config, load_or_default};
use tracing::debug;

use crate::commands;

/// Review autosquash package-update commits before merging them.
#[derive(Debug, Parser)]
#[command(name = "squashview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: squashview.toml in this or a parent directory)
    #[arg(long, global = true, env = "SQUASHVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ignore configuration files and use built-in defaults
    #[arg(long, global = true, env = "SQUASHVIEW_NO_CONFIG", value_parser = FalseyValueParser::new())]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a default squashview configuration
    Init(commands::init::InitArgs),

    /// List the package updates waiting for review
    Review(commands::review::ReviewArgs),

    /// Show one package update in detail
    Show(commands::show::ShowArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Init(args) => commands::init::run(args),
            Commands::Review(args) => commands::review::run(args, &self.load_config()?),
            Commands::Show(args) => commands::show::run(args, &self.load_config()?),
        }
    }

    fn load_config(&self) -> Result<Config> {
        if self.no_config {
            debug!("configuration disabled, using defaults");
            return Ok(Config::default());
        }

        let current_dir = std::env::current_dir().context("failed to read current directory")?;
        load_or_default(self.config.as_deref(), current_dir).context("failed to load configuration")
    }
}

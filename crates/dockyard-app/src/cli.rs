use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dockyard: inspect, validate and generate saved docking layouts.
#[derive(Parser, Debug)]
#[command(name = "dockyard", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lay out a saved layout and print every frame's rectangle.
    Inspect {
        /// Layout file; defaults to the configured layout path.
        layout: Option<PathBuf>,

        #[arg(long, default_value_t = 1280.0)]
        width: f64,

        #[arg(long, default_value_t = 800.0)]
        height: f64,

        /// Print the placement as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Check that a layout file parses and restores into a valid tree.
    Validate {
        /// Layout file; defaults to the configured layout path.
        layout: Option<PathBuf>,
    },

    /// Write a sample layout.
    Demo {
        /// Destination; defaults to the configured layout path.
        output: Option<PathBuf>,
    },

    /// Print the effective configuration as JSON.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}

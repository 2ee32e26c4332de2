//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "vinv")]
#[command(version)]
#[command(about = "Browse a vehicle inventory served by a backend API")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the inventory backend. Uses config value if not specified.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the full inventory
    List,

    /// Look up a single vehicle by its ID
    Get {
        /// Vehicle ID
        id: u64,
    },

    /// Fetch the inventory and filter it by attributes
    Search {
        /// Match make as case-insensitive substring (e.g., "toyota")
        #[arg(long)]
        make: Option<String>,

        /// Match model as case-insensitive substring (e.g., "mustang")
        #[arg(long)]
        model: Option<String>,

        /// Match model year exactly
        #[arg(long)]
        year: Option<i32>,

        /// Match fuel type as case-insensitive substring (e.g., "petrol")
        #[arg(long)]
        fuel_type: Option<String>,

        /// Match transmission as case-insensitive substring (e.g., "manual")
        #[arg(long)]
        transmission: Option<String>,

        /// Maximum mileage, inclusive
        #[arg(long)]
        max_mileage: Option<f64>,

        /// Maximum price, inclusive
        #[arg(long)]
        max_price: Option<f64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set backend base URL
        #[arg(long)]
        set_api_url: Option<String>,

        /// Set request timeout in milliseconds
        #[arg(long)]
        set_timeout: Option<u64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

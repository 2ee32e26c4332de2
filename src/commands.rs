//! Command handlers

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::filter::filter_vehicles;
use crate::output::output_vehicles;
use crate::source::VehicleSource;
use crate::types::SearchCriteria;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref api_url) = cli.api_url {
        config.api_url = api_url.clone();
    }

    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::List => cmd_list(&cli, &config, output_format),

        Commands::Get { id } => cmd_get(&cli, &config, *id, output_format),

        Commands::Search {
            make,
            model,
            year,
            fuel_type,
            transmission,
            max_mileage,
            max_price,
        } => {
            let criteria = SearchCriteria {
                make: make.clone(),
                model: model.clone(),
                year: *year,
                fuel_type: fuel_type.clone(),
                transmission: transmission.clone(),
                max_mileage: *max_mileage,
                max_price: *max_price,
            };
            cmd_search(&cli, &config, &criteria, output_format)
        }

        Commands::Config {
            show,
            set_api_url,
            set_timeout,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_api_url.clone(),
            *set_timeout,
            *set_output,
            *reset,
        ),
    }
}

fn cmd_list(cli: &Cli, config: &Config, output_format: OutputFormat) -> Result<()> {
    let source = VehicleSource::new(&config.api_url, config.timeout_ms)?;

    if cli.verbose {
        eprintln!("Fetching all vehicles from {}", config.api_url);
    }

    let vehicles = source.fetch_all()?;
    output_vehicles(output_format, &vehicles)
}

fn cmd_get(cli: &Cli, config: &Config, id: u64, output_format: OutputFormat) -> Result<()> {
    let source = VehicleSource::new(&config.api_url, config.timeout_ms)?;

    if cli.verbose {
        eprintln!("Fetching vehicle {} from {}", id, config.api_url);
    }

    // A missing ID is an empty result, not a failure
    let vehicles = match source.fetch_by_id(id)? {
        Some(vehicle) => vec![vehicle],
        None => Vec::new(),
    };
    output_vehicles(output_format, &vehicles)
}

fn cmd_search(
    cli: &Cli,
    config: &Config,
    criteria: &SearchCriteria,
    output_format: OutputFormat,
) -> Result<()> {
    let source = VehicleSource::new(&config.api_url, config.timeout_ms)?;

    if cli.verbose {
        if criteria.is_unconstrained() {
            eprintln!("No criteria supplied; listing the full inventory");
        }
        eprintln!("Fetching all vehicles from {}", config.api_url);
    }

    let all = source.fetch_all()?;
    let filtered = filter_vehicles(&all, criteria);

    if cli.verbose {
        eprintln!("{} of {} vehicles match", filtered.len(), all.len());
    }

    output_vehicles(output_format, &filtered)
}

fn cmd_config(
    show: bool,
    set_api_url: Option<String>,
    set_timeout: Option<u64>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(api_url) = set_api_url {
        config.api_url = api_url;
        modified = true;
    }

    if let Some(timeout_ms) = set_timeout {
        config.timeout_ms = timeout_ms;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

//! Configuration inspection CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::services::calculate;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    defaults: DefaultsOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct DefaultsOutput {
    mode: String,
    bands: Vec<String>,
    formatted: String,
    tolerance: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;

        let output = build_output(&config, path.display().to_string())?;

        if self.json {
            print_json(&output)
        } else {
            output_human_readable(&output);
            Ok(())
        }
    }
}

fn build_output(config: &Config, path: String) -> CliResult<ConfigOutput> {
    let resistor = config.defaults.resistor();
    // Validated on load, so every default band is legal
    let result = calculate(&resistor).map_err(|e| CliError::validation(e.to_string()))?;

    let theme = match config.ui.theme_mode {
        ThemeMode::Auto => "auto",
        ThemeMode::Dark => "dark",
        ThemeMode::Light => "light",
    };

    Ok(ConfigOutput {
        path,
        defaults: DefaultsOutput {
            mode: resistor.mode().to_string(),
            bands: resistor
                .bands()
                .map(|band| band.color.name().to_string())
                .collect(),
            formatted: result.formatted.clone(),
            tolerance: result.tolerance_display(),
        },
        ui: UiOutput {
            theme: theme.to_string(),
        },
    })
}

fn output_human_readable(output: &ConfigOutput) {
    println!("Config file: {}", output.path);
    println!();
    println!("Defaults:");
    println!("  Mode:       {}", output.defaults.mode);
    println!("  Bands:      {}", output.defaults.bands.join(" "));
    println!(
        "  Value:      {} {}",
        output.defaults.formatted, output.defaults.tolerance
    );
    println!();
    println!("UI:");
    println!("  Theme:      {}", output.ui.theme);
}

//! Resistance calculation command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{Band, BandRole, ResistorConfiguration, ResistorMode};
use crate::services::{calculate, CalculationResult};
use clap::Args;
use crossterm::style::{style, Stylize};
use serde::Serialize;

/// Decode a resistor from its color bands
#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    /// Band colors in physical order: 4 bands (2 digits) or 5 bands (3 digits)
    #[arg(value_name = "COLOR", required = true, num_args = 1..)]
    pub bands: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Draw the resistor body in truecolor
    #[arg(long)]
    pub visual: bool,
}

#[derive(Debug, Serialize)]
struct CalcOutput {
    mode: ResistorMode,
    bands: Vec<Band>,
    #[serde(flatten)]
    result: CalculationResult,
    tolerance_display: String,
}

impl CalcArgs {
    /// Execute the calc command
    pub fn execute(&self) -> CliResult<()> {
        let config = ResistorConfiguration::from_names(self.bands.as_slice())?;

        let result = calculate(&config).map_err(|e| {
            CliError::validation(format!(
                "{e}; valid {} colors: {}",
                e.role,
                role_options(e.role)
            ))
        })?;

        if self.json {
            let output = CalcOutput {
                mode: config.mode(),
                bands: config.bands().collect(),
                tolerance_display: result.tolerance_display(),
                result,
            };
            return print_json(&output);
        }

        if self.visual {
            println!("{}", render_strip(&config));
            println!();
        }

        let names: Vec<&str> = config.bands().map(|band| band.color.name()).collect();
        println!("Bands:      {} ({})", names.join(" "), config.mode());
        println!("Resistance: {}", result.formatted);
        println!("Tolerance:  {}", result.tolerance_display());

        Ok(())
    }
}

/// Comma-separated legal colors for a role.
fn role_options(role: BandRole) -> String {
    role.options()
        .iter()
        .map(|color| color.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the resistor body as a single truecolor line.
///
/// Bands without a swatch (`none`) take the body color.
pub fn render_strip(config: &ResistorConfiguration) -> String {
    let body = config.mode().body_color().to_crossterm_color();
    let bands: Vec<Band> = config.bands().collect();
    let last = bands.len().saturating_sub(1);

    let body_segments: String = bands
        .iter()
        .enumerate()
        .map(|(index, band)| {
            // Tolerance band sits apart from the others
            let gap = if index == last { "   " } else { " " };
            let fill = band
                .color
                .attributes()
                .swatch
                .map_or(body, |swatch| swatch.to_crossterm_color());
            format!("{}{}", style(gap).on(body), style("  ").on(fill))
        })
        .collect();

    format!("━━━{body_segments}{}━━━", style(" ").on(body))
}

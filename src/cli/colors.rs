//! Color table listing command.

use crate::cli::common::{print_json, CliResult};
use crate::models::{BandColor, BandRole, ColorAttributes};
use clap::Args;
use serde::Serialize;

/// List band colors and their attributes
#[derive(Debug, Clone, Args)]
pub struct ColorsArgs {
    /// Only list the colors legal for one role (digit, multiplier, tolerance)
    #[arg(short, long, value_name = "ROLE")]
    pub role: Option<BandRole>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ColorEntry {
    name: BandColor,
    label: String,
    #[serde(flatten)]
    attributes: ColorAttributes,
    roles: Vec<BandRole>,
}

impl ColorEntry {
    fn new(color: BandColor) -> Self {
        Self {
            name: color,
            label: color.label(),
            attributes: color.attributes(),
            roles: BandRole::ALL
                .into_iter()
                .filter(|role| role.permits(color))
                .collect(),
        }
    }
}

impl ColorsArgs {
    /// Execute the colors command
    pub fn execute(&self) -> CliResult<()> {
        let colors: &[BandColor] = match self.role {
            Some(role) => role.options(),
            None => &BandColor::ALL,
        };
        let entries: Vec<ColorEntry> = colors.iter().map(|&c| ColorEntry::new(c)).collect();

        if self.json {
            return print_json(&entries);
        }

        println!(
            "{:<8} {:>5} {:>12} {:>9}  {:<8} Roles",
            "Color", "Digit", "Multiplier", "Tolerance", "Swatch"
        );
        for entry in &entries {
            let attrs = &entry.attributes;
            let roles: Vec<&str> = entry.roles.iter().map(|role| role.name()).collect();
            println!(
                "{:<8} {:>5} {:>12} {:>9}  {:<8} {}",
                entry.name.name(),
                optional(attrs.digit.map(|d| d.to_string())),
                optional(attrs.multiplier.map(|m| format!("×{m}"))),
                optional(attrs.tolerance.map(|t| format!("{t}%"))),
                attrs.swatch.map_or_else(|| "none".to_string(), |s| s.to_hex()),
                if roles.is_empty() {
                    "-".to_string()
                } else {
                    roles.join(", ")
                }
            );
        }

        Ok(())
    }
}

fn optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

//! Resistance formatting command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::services::format_resistance;
use clap::Args;
use serde::Serialize;

/// Format a raw resistance in ohms with a magnitude suffix
#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    /// Resistance in ohms (e.g., 4700 or 0.47)
    #[arg(value_name = "OHMS")]
    pub ohms: f64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FormatOutput {
    ohms: f64,
    formatted: String,
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self) -> CliResult<()> {
        if !self.ohms.is_finite() || self.ohms < 0.0 {
            return Err(CliError::validation(format!(
                "Resistance must be a finite, non-negative number of ohms, got {}",
                self.ohms
            )));
        }

        // -0 parses as a float but reads as plain zero
        let ohms = self.ohms + 0.0;
        let formatted = format_resistance(ohms);
        if self.json {
            print_json(&FormatOutput {
                ohms,
                formatted,
            })
        } else {
            println!("{formatted}");
            Ok(())
        }
    }
}

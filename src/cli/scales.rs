//! Catalog listing.

use crate::cli::common::{print_json, CliResult};
use clap::Args;
use scalekeys::catalog;
use serde::Serialize;

/// List available scales and their intervals
#[derive(Args, Debug)]
pub struct ScalesArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct ScaleOutput {
    name: &'static str,
    offsets: &'static [u8],
}

impl ScalesArgs {
    /// Execute scales command
    pub fn execute(&self) -> CliResult<()> {
        if self.json {
            let scales: Vec<ScaleOutput> = catalog::iter()
                .map(|scale| ScaleOutput {
                    name: scale.name(),
                    offsets: scale.offsets(),
                })
                .collect();
            return print_json(&scales);
        }

        let width = catalog::names().map(str::len).max().unwrap_or(0);
        for scale in catalog::iter() {
            let offsets: Vec<String> = scale.offsets().iter().map(u8::to_string).collect();
            println!("{:<width$}  {}", scale.name(), offsets.join(" "), width = width);
        }

        Ok(())
    }
}

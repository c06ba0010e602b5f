//! Vein visualization command.

use anyhow::Result;
use colored::Colorize;
use medscan_imaging::analyzers::veins;

use crate::input::read_bytes;
use crate::output::write_data_uri;

/// Run the vein visualization pipeline.
pub fn run(input_path: &str, output_path: Option<&str>, json: bool) -> Result<()> {
    let bytes = read_bytes(input_path)?;
    let view = veins::visualize_bytes(&bytes)
        .map_err(|e| anyhow::anyhow!("Vein visualization failed: {e}"))?;

    if let Some(out) = output_path {
        write_data_uri(&view.image, out)?;
        if !json {
            println!("{} {}", "Wrote:".green().bold(), out);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else if output_path.is_none() {
        println!("{}", view.image);
    }
    Ok(())
}

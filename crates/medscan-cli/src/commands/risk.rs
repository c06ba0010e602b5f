//! Risk projection command.

use anyhow::Result;
use colored::Colorize;
use medscan_imaging::analyzers::risk_projection;

use crate::input::read_bytes;
use crate::output::write_data_uri;

/// Run the illustrative risk-projection overlay.
pub fn run(input_path: &str, days: u32, output_path: Option<&str>, json: bool) -> Result<()> {
    let bytes = read_bytes(input_path)?;
    let projection = risk_projection::project_bytes(&bytes, days)
        .map_err(|e| anyhow::anyhow!("Risk projection failed: {e}"))?;

    if let Some(out) = output_path {
        write_data_uri(&projection.image, out)?;
        if !json {
            println!(
                "{} {} ({} day horizon)",
                "Wrote:".green().bold(),
                out,
                projection.days
            );
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else if output_path.is_none() {
        println!("{}", projection.image);
    }
    Ok(())
}

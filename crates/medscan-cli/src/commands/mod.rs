//! Command implementations for the MedScan CLI.
//!
//! Each command follows the same shape: load the input, run the owning
//! crate's analyzer, then print either colored human output or a single
//! pretty-printed JSON document.

pub mod anemia;
pub mod cases;
pub mod cough;
pub mod risk;
pub mod triage;
pub mod veins;
pub mod xray;

use colored::Colorize;
use medscan_casebank::CaseBank;

/// Open a case bank, falling back to an empty in-memory bank in a scratch
/// location when the snapshot is corrupt. Read paths warn and continue;
/// write paths refuse the fallback so a bad snapshot is never overwritten
/// silently.
pub(crate) fn open_bank_for_reading(path: &str) -> Option<CaseBank> {
    match CaseBank::open(path) {
        Ok(bank) => Some(bank),
        Err(err) => {
            eprintln!(
                "{} case bank unavailable ({err}); continuing without similar cases",
                "warning:".yellow().bold()
            );
            None
        }
    }
}

//! MedScan CLI - medical diagnostic signal processing from the command line.
//!
//! This binary provides commands for the image, acoustic, and triage
//! analyzers plus the persistent case bank.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use medscan_cli::commands;
use medscan_cli::commands::cases::AddArgs;
use medscan_cli::commands::triage::TriageArgs;

/// Default location of the case-bank snapshot.
const DEFAULT_CASEBANK: &str = "medscan_vault/cases.json";

/// MedScan - Deterministic Medical Diagnostic Engines
#[derive(Parser)]
#[command(name = "medscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen an eye-region photograph for anemia indicators
    Anemia {
        /// Path to the input image (JPEG or PNG)
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render an enhanced vein visualization from a skin photograph
    Veins {
        /// Path to the input image (JPEG or PNG)
        #[arg(short, long)]
        input: String,

        /// Write the enhanced JPEG to this path instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Project an illustrative risk heatmap over a photograph
    Risk {
        /// Path to the input image (JPEG or PNG)
        #[arg(short, long)]
        input: String,

        /// Projection horizon in days
        #[arg(short, long, default_value_t = 30)]
        days: u32,

        /// Write the blended JPEG to this path instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Detect fracture candidates in an X-ray image
    Xray {
        /// Path to the input image (JPEG or PNG)
        #[arg(short, long)]
        input: String,

        /// Free-text symptoms; enables similar-case retrieval
        #[arg(short, long)]
        symptoms: Option<String>,

        /// Path to the case-bank snapshot
        #[arg(long, default_value = DEFAULT_CASEBANK)]
        casebank: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Classify a cough recording
    Cough {
        /// Path to the input WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Run a rule-based triage assessment over vital signs
    Triage {
        /// Patient age in years
        #[arg(long)]
        age: u32,

        /// Body temperature in degrees Celsius
        #[arg(long)]
        temperature: f64,

        /// Free-text symptom description
        #[arg(long)]
        symptoms: String,

        /// Free-text medical history
        #[arg(long)]
        history: Option<String>,

        /// Previous temperature reading for trend analysis
        #[arg(long)]
        previous_temperature: Option<f64>,

        /// Heart rate in beats per minute
        #[arg(long)]
        heart_rate: Option<u32>,

        /// Blood pressure as "systolic/diastolic"
        #[arg(long)]
        blood_pressure: Option<String>,

        /// Oxygen saturation percentage
        #[arg(long)]
        spo2: Option<u32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Manage the persistent case bank
    Cases {
        #[command(subcommand)]
        command: CasesCommands,
    },
}

#[derive(Subcommand)]
enum CasesCommands {
    /// Store a case for later similarity retrieval
    Add {
        /// Path to the case-bank snapshot
        #[arg(long, default_value = DEFAULT_CASEBANK)]
        casebank: String,

        /// Symptom text the embedding is generated from
        #[arg(long)]
        symptoms: String,

        /// Recorded diagnosis
        #[arg(long)]
        diagnosis: Option<String>,

        /// Patient identifier
        #[arg(long)]
        patient_id: Option<String>,

        /// Prescribing doctor
        #[arg(long)]
        doctor: Option<String>,

        /// ISO-8601 record timestamp
        #[arg(long)]
        date: Option<String>,

        /// Record kind (prescription or learning_data)
        #[arg(long)]
        record_type: Option<String>,

        /// Prescribed medicine names (repeatable)
        #[arg(long)]
        medicine: Vec<String>,

        /// Usage precautions (repeatable)
        #[arg(long)]
        precaution: Vec<String>,
    },

    /// Find cases similar to a free-text query
    Search {
        /// Path to the case-bank snapshot
        #[arg(long, default_value = DEFAULT_CASEBANK)]
        casebank: String,

        /// Free-text query
        #[arg(short, long)]
        query: String,

        /// Maximum number of hits
        #[arg(long, default_value_t = 5)]
        top_k: usize,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Remove every stored case
    Clear {
        /// Path to the case-bank snapshot
        #[arg(long, default_value = DEFAULT_CASEBANK)]
        casebank: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Anemia { input, json } => commands::anemia::run(&input, json),
        Commands::Veins {
            input,
            output,
            json,
        } => commands::veins::run(&input, output.as_deref(), json),
        Commands::Risk {
            input,
            days,
            output,
            json,
        } => commands::risk::run(&input, days, output.as_deref(), json),
        Commands::Xray {
            input,
            symptoms,
            casebank,
            json,
        } => commands::xray::run(&input, symptoms.as_deref(), &casebank, json),
        Commands::Cough { input, json } => commands::cough::run(&input, json),
        Commands::Triage {
            age,
            temperature,
            symptoms,
            history,
            previous_temperature,
            heart_rate,
            blood_pressure,
            spo2,
            json,
        } => commands::triage::run(
            TriageArgs {
                age,
                temperature,
                symptoms,
                history,
                previous_temperature,
                heart_rate,
                blood_pressure,
                spo2,
            },
            json,
        ),
        Commands::Cases { command } => match command {
            CasesCommands::Add {
                casebank,
                symptoms,
                diagnosis,
                patient_id,
                doctor,
                date,
                record_type,
                medicine,
                precaution,
            } => commands::cases::add(
                &casebank,
                AddArgs {
                    symptoms,
                    diagnosis,
                    patient_id,
                    doctor,
                    date,
                    record_type,
                    medicines: medicine,
                    precautions: precaution,
                },
            ),
            CasesCommands::Search {
                casebank,
                query,
                top_k,
                json,
            } => commands::cases::search(&casebank, &query, top_k, json),
            CasesCommands::Clear { casebank } => commands::cases::clear(&casebank),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

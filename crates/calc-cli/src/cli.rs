//! Command-line interface for computing and storing calculations.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calc_core::{
    CalculationCreate, CalculationFactory, CalculationRead, CalculationService, CalculationType,
    InMemoryCalculationStore,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{CalcConfig, ConfigSource};

#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(about = "Arithmetic calculation service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a single calculation and print the stored record
    Compute {
        /// addition, subtraction, multiplication or division (any case)
        calculation_type: String,

        /// Operands, at least two
        #[arg(required = true, allow_negative_numbers = true)]
        inputs: Vec<f64>,

        /// Owning user; a random id is used when omitted
        #[arg(short, long)]
        user: Option<Uuid>,
    },

    /// Compute every request in a JSON array of calculation payloads
    Batch {
        /// File holding `[{"type": ..., "inputs": [...], "user_id": ...}, ...]`
        file: PathBuf,
    },

    /// Describe the supported calculation types
    Explain,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Outcome of one entry in a batch
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BatchOutcome {
    Ok(CalculationRead),
    Error { category: String, message: String },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub index: usize,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

pub struct App {
    service: CalculationService<InMemoryCalculationStore>,
    format: OutputFormat,
}

impl App {
    pub fn new(config: &CalcConfig, format: OutputFormat) -> Self {
        let service =
            CalculationService::with_limits(InMemoryCalculationStore::new(), config.limits);
        Self { service, format }
    }

    pub fn service(&self) -> &CalculationService<InMemoryCalculationStore> {
        &self.service
    }

    pub fn execute(&self, command: &Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::Compute { calculation_type, inputs, user } => {
                let read = self.compute(calculation_type, inputs, *user)?;
                self.print_read(&read, out)
            }
            Command::Batch { file } => {
                let entries = self.batch(file)?;
                self.print_batch(&entries, out)
            }
            Command::Explain => self.explain(out),
        }
    }

    pub fn compute(
        &self,
        calculation_type: &str,
        inputs: &[f64],
        user: Option<Uuid>,
    ) -> Result<CalculationRead> {
        let kind: CalculationType = calculation_type.parse()?;
        let user_id = user.unwrap_or_else(Uuid::new_v4);
        let request = CalculationCreate::new(kind, inputs.to_vec(), user_id);
        Ok(self.service.create(&request)?)
    }

    pub fn batch(&self, file: &Path) -> Result<Vec<BatchEntry>> {
        let raw = fs::read_to_string(file)
            .with_context(|| format!("reading batch file '{}'", file.display()))?;
        let payloads: Vec<serde_json::Value> = serde_json::from_str(&raw)
            .with_context(|| format!("batch file '{}' is not a JSON array", file.display()))?;

        let entries: Vec<BatchEntry> = payloads
            .into_iter()
            .enumerate()
            .map(|(index, payload)| BatchEntry { index, outcome: self.batch_outcome(payload) })
            .collect();

        let failed =
            entries.iter().filter(|e| matches!(e.outcome, BatchOutcome::Error { .. })).count();
        info!(total = entries.len(), failed, "batch processed");
        Ok(entries)
    }

    fn batch_outcome(&self, payload: serde_json::Value) -> BatchOutcome {
        let request: CalculationCreate = match serde_json::from_value(payload) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "malformed batch entry");
                return BatchOutcome::Error {
                    category: "malformed_request".to_string(),
                    message: e.to_string(),
                };
            }
        };
        match self.service.create(&request) {
            Ok(read) => BatchOutcome::Ok(read),
            Err(e) => BatchOutcome::Error {
                category: e.category().to_string(),
                message: e.to_string(),
            },
        }
    }

    fn explain(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Supported calculation types (matched case-insensitively):")?;
        for tag in CalculationFactory::supported_types() {
            let kind: CalculationType = tag.parse()?;
            writeln!(out, "  {:<15} {}", tag, describe(kind))?;
        }
        writeln!(out)?;
        writeln!(out, "Every calculation needs at least two numeric inputs.")?;
        writeln!(
            out,
            "At most {} inputs are accepted per request.",
            self.service.limits().max_inputs
        )?;
        Ok(())
    }

    fn print_read(&self, read: &CalculationRead, out: &mut impl Write) -> Result<()> {
        match self.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(read)?)?,
            OutputFormat::Text => writeln!(out, "{}", format_read(read))?,
        }
        Ok(())
    }

    fn print_batch(&self, entries: &[BatchEntry], out: &mut impl Write) -> Result<()> {
        match self.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?,
            OutputFormat::Text => {
                for entry in entries {
                    match &entry.outcome {
                        BatchOutcome::Ok(read) => {
                            writeln!(out, "#{} {}", entry.index, format_read(read))?
                        }
                        BatchOutcome::Error { category, message } => {
                            writeln!(out, "#{} error [{}]: {}", entry.index, category, message)?
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn describe(kind: CalculationType) -> &'static str {
    match kind {
        CalculationType::Addition => "first input plus each remaining input in order",
        CalculationType::Subtraction => "first input minus each remaining input in order",
        CalculationType::Multiplication => "first input times each remaining input in order",
        CalculationType::Division => {
            "first input divided by each remaining input; no zero divisors"
        }
    }
}

fn format_read(read: &CalculationRead) -> String {
    let inputs: Vec<String> = read.inputs.iter().map(f64::to_string).collect();
    format!(
        "{} [{}] = {} (id {}, user {})",
        read.kind,
        inputs.join(", "),
        read.result,
        read.id,
        read.user_id
    )
}

/// Parses arguments, loads configuration, installs logging and runs the command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = CalcConfig::load(cli.config.as_deref())?;
    crate::logging::init_logging(&config.logging)?;

    match &config.source {
        ConfigSource::File(path) => {
            info!(path = %path.display(), env = %config.environment.env_type, "configuration loaded");
        }
        ConfigSource::Defaults => warn!("configuration file not found, using built-in defaults"),
    }

    let app = App::new(&config, cli.format);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.execute(&cli.command, &mut out).inspect_err(|e| warn!(error = %e, "command failed"))
}

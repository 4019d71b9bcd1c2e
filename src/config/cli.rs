use crate::domain::ports::ReportSink;
use crate::domain::scenario::{PhaseKind, SimulationReport};
use crate::utils::error::Result;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const RULE: &str = "==================================================";

/// Prints an annotated walkthrough of the run to stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, report: &SimulationReport) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = Self::render_into(&mut out, report);
        out
    }

    fn render_into(out: &mut String, report: &SimulationReport) -> std::fmt::Result {
        writeln!(out, "{}", RULE)?;
        writeln!(out, "{}", report.catalog_name.to_uppercase())?;
        if let Some(description) = &report.description {
            writeln!(out, "{}", description)?;
        }
        writeln!(out, "{}", RULE)?;

        writeln!(out, "\nInitial state:")?;
        writeln!(out, "{}", report.catalog_line)?;

        writeln!(out, "\nAvailable before lending:")?;
        for title in &report.available_before {
            writeln!(out, "  - {}", title)?;
        }
        writeln!(out, "\nTotal available: {}", report.available_before.len())?;

        let mut outcomes = report.outcomes.iter();
        for phase in &report.phases {
            let (heading, label) = match phase.kind {
                PhaseKind::Checkout => ("RECORDING LOANS:", "loans"),
                PhaseKind::Return => ("RECORDING RETURNS:", "returns"),
            };
            writeln!(out, "\n{}", RULE)?;
            writeln!(out, "{}", heading)?;
            for outcome in outcomes.by_ref().take(phase.steps) {
                match &outcome.error {
                    None => writeln!(out, "  ✓ {}", outcome.step)?,
                    Some(e) => writeln!(out, "  ✗ {} ({})", outcome.step, e)?,
                }
            }
            writeln!(out, "\nState after {}:", label)?;
            for line in &phase.borrowers {
                writeln!(out, "  {}", line)?;
            }
        }

        writeln!(out, "\n{}", RULE)?;
        writeln!(out, "AVAILABLE AFTER LENDING:")?;
        for title in &report.available_after {
            writeln!(out, "  - {}", title)?;
        }
        writeln!(out, "\nTotal available: {}", report.available_after.len())?;

        writeln!(out, "\n{}", RULE)?;
        writeln!(out, "SUMMARY:")?;
        writeln!(out, "Items in catalog: {}", report.summary.total)?;
        writeln!(out, "Items available: {}", report.summary.available)?;
        writeln!(out, "Items on loan: {}", report.summary.on_loan)?;
        for holding in &report.holdings {
            writeln!(out, "Held by {}: {:?}", holding.name, holding.titles)?;
        }

        writeln!(out, "\nAll items:")?;
        for item in &report.items {
            writeln!(out, "  - {}", item)?;
        }
        Ok(())
    }
}

impl ReportSink for ConsoleSink {
    fn emit(&self, report: &SimulationReport) -> Result<()> {
        print!("{}", self.render(report));
        Ok(())
    }
}

/// Writes the report as pretty-printed JSON, creating parent directories.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for JsonFileSink {
    fn emit(&self, report: &SimulationReport) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(report)?;
        fs::write(&self.path, data)?;
        tracing::info!("Report written to {}", self.path.display());
        Ok(())
    }
}

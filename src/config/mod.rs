pub mod builtin;
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lending-registry")]
#[command(about = "Run a lending scenario against an in-memory catalog")]
pub struct CliConfig {
    /// TOML scenario file; the built-in five-book scenario runs when omitted
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Write the report as JSON to this path
    #[arg(long)]
    pub report: Option<String>,

    /// Do not print the console walkthrough
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.scenario {
            validation::validate_path("scenario", path)?;
        }
        if let Some(path) = &self.report {
            validation::validate_path("report", path)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_flags() {
        let config = CliConfig::parse_from([
            "lending-registry",
            "--scenario",
            "branch.toml",
            "--report",
            "out/report.json",
            "-q",
        ]);
        assert_eq!(config.scenario.as_deref(), Some("branch.toml"));
        assert!(config.quiet);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_report_path_rejected() {
        let config = CliConfig::parse_from(["lending-registry", "--report", ""]);
        assert!(config.validate().is_err());
    }
}

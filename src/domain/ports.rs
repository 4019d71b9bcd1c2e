use crate::domain::model::ItemDetails;
use crate::domain::scenario::{SimulationReport, Step};
use crate::utils::error::Result;

/// Source of the seed data and scripted steps for one lending run.
pub trait ScenarioProvider {
    fn catalog_name(&self) -> &str;
    fn description(&self) -> Option<&str> {
        None
    }
    fn items(&self) -> &[ItemDetails];
    fn borrowers(&self) -> &[String];
    fn steps(&self) -> &[Step];
}

pub trait ReportSink {
    fn emit(&self, report: &SimulationReport) -> Result<()>;
}

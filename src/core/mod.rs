pub mod catalog;
pub mod engine;

pub use crate::domain::model::{Borrower, Item, ItemDetails, ItemId};
pub use crate::domain::ports::{ReportSink, ScenarioProvider};
pub use crate::domain::scenario::{SimulationReport, Step, StepOutcome};
pub use crate::utils::error::Result;

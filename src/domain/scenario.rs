use crate::utils::error::LoanError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One scripted loan action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Checkout { borrower: String, title: String },
    Return { borrower: String, title: String },
}

impl Step {
    pub fn checkout(borrower: impl Into<String>, title: impl Into<String>) -> Self {
        Step::Checkout {
            borrower: borrower.into(),
            title: title.into(),
        }
    }

    pub fn return_item(borrower: impl Into<String>, title: impl Into<String>) -> Self {
        Step::Return {
            borrower: borrower.into(),
            title: title.into(),
        }
    }

    pub fn borrower(&self) -> &str {
        match self {
            Step::Checkout { borrower, .. } | Step::Return { borrower, .. } => borrower,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Step::Checkout { title, .. } | Step::Return { title, .. } => title,
        }
    }

    pub fn kind(&self) -> PhaseKind {
        match self {
            Step::Checkout { .. } => PhaseKind::Checkout,
            Step::Return { .. } => PhaseKind::Return,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Checkout,
    Return,
}

/// A run of consecutive steps of the same kind and the borrower state after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseSnapshot {
    pub kind: PhaseKind,
    pub steps: usize,
    pub borrowers: Vec<String>,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Checkout { borrower, title } => write!(f, "{} checks out '{}'", borrower, title),
            Step::Return { borrower, title } => write!(f, "{} returns '{}'", borrower, title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: Step,
    pub error: Option<LoanError>,
}

impl StepOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total: usize,
    pub available: usize,
    pub on_loan: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorrowerHoldings {
    pub name: String,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub catalog_name: String,
    pub description: Option<String>,
    /// The catalog's `Display` line before any step runs.
    pub catalog_line: String,
    pub available_before: Vec<String>,
    pub outcomes: Vec<StepOutcome>,
    pub phases: Vec<PhaseSnapshot>,
    pub available_after: Vec<String>,
    pub summary: InventorySummary,
    pub holdings: Vec<BorrowerHoldings>,
    /// Final state of every item, rendered with its `Display` form.
    pub items: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl SimulationReport {
    pub fn failed_steps(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

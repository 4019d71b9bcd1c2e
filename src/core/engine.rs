use crate::core::catalog::Catalog;
use crate::domain::model::{Borrower, Item};
use crate::domain::ports::ScenarioProvider;
use crate::domain::scenario::{
    BorrowerHoldings, PhaseSnapshot, SimulationReport, Step, StepOutcome,
};
use crate::utils::error::{LendingError, Result};

/// Runs a scripted lending scenario against a freshly seeded catalog.
pub struct LendingEngine<P: ScenarioProvider> {
    provider: P,
}

impl<P: ScenarioProvider> LendingEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Seeds, runs every step in order and reports the result.
    ///
    /// Loan failures are recorded in the report. A step that names an
    /// unknown borrower or title aborts the run before anything is lent.
    pub fn run(&self) -> Result<SimulationReport> {
        tracing::info!("Starting lending run for {}", self.provider.catalog_name());

        let mut session = Session::seed(&self.provider)?;
        for step in self.provider.steps() {
            session.resolve(step)?;
        }
        tracing::info!(
            "Seeded {} with {} borrowers",
            session.catalog,
            session.borrowers.len()
        );

        let catalog_line = session.catalog.to_string();
        let available_before = session.available_titles();

        let steps = self.provider.steps();
        let mut outcomes = Vec::with_capacity(steps.len());
        let mut phases = Vec::new();
        for phase in steps.chunk_by(|a, b| a.kind() == b.kind()) {
            for step in phase {
                let outcome = session.apply(step)?;
                match &outcome.error {
                    None => tracing::debug!("{}: ok", step),
                    Some(e) => tracing::warn!("{}: {}", step, e),
                }
                outcomes.push(outcome);
            }
            if let Some(first) = phase.first() {
                phases.push(PhaseSnapshot {
                    kind: first.kind(),
                    steps: phase.len(),
                    borrowers: session.borrower_lines(),
                });
            }
        }

        let report = SimulationReport {
            catalog_name: self.provider.catalog_name().to_string(),
            description: self.provider.description().map(str::to_string),
            catalog_line,
            available_before,
            available_after: session.available_titles(),
            summary: session.catalog.summary(),
            holdings: session.holdings(),
            items: session.catalog.items().iter().map(Item::to_string).collect(),
            outcomes,
            phases,
            generated_at: chrono::Utc::now(),
        };

        tracing::info!(
            "Lending run finished: {} steps, {} failed, {} of {} items on loan",
            report.outcomes.len(),
            report.failed_steps().count(),
            report.summary.on_loan,
            report.summary.total
        );

        Ok(report)
    }
}

struct Session {
    catalog: Catalog,
    borrowers: Vec<Borrower>,
}

impl Session {
    fn seed<P: ScenarioProvider>(provider: &P) -> Result<Self> {
        let mut catalog = Catalog::new();
        for details in provider.items() {
            catalog.add_item(details.clone());
        }

        let mut borrowers: Vec<Borrower> = Vec::with_capacity(provider.borrowers().len());
        for name in provider.borrowers() {
            if borrowers.iter().any(|b| b.name() == name) {
                return Err(LendingError::DuplicateBorrower { name: name.clone() });
            }
            borrowers.push(Borrower::new(name.as_str()));
        }

        Ok(Self { catalog, borrowers })
    }

    fn borrower_index(&self, name: &str) -> Result<usize> {
        self.borrowers
            .iter()
            .position(|b| b.name() == name)
            .ok_or_else(|| LendingError::UnknownBorrower {
                name: name.to_string(),
            })
    }

    fn resolve(&self, step: &Step) -> Result<()> {
        self.borrower_index(step.borrower())?;
        find_item(&self.catalog, step.title())?;
        Ok(())
    }

    fn apply(&mut self, step: &Step) -> Result<StepOutcome> {
        let index = self.borrower_index(step.borrower())?;
        let item = find_item(&self.catalog, step.title())?;

        let borrower = &mut self.borrowers[index];
        let result = match step {
            Step::Checkout { .. } => borrower.checkout_item(item),
            Step::Return { .. } => borrower.return_item(item),
        };

        Ok(StepOutcome {
            step: step.clone(),
            error: result.err(),
        })
    }

    fn available_titles(&self) -> Vec<String> {
        self.catalog
            .list_available()
            .iter()
            .map(|item| item.title().to_string())
            .collect()
    }

    fn borrower_lines(&self) -> Vec<String> {
        self.borrowers.iter().map(Borrower::to_string).collect()
    }

    fn holdings(&self) -> Vec<BorrowerHoldings> {
        self.borrowers
            .iter()
            .map(|b| BorrowerHoldings {
                name: b.name().to_string(),
                titles: b
                    .held_items()
                    .iter()
                    .filter_map(|id| self.catalog.get(*id))
                    .map(|item| item.title().to_string())
                    .collect(),
            })
            .collect()
    }
}

fn find_item<'a>(catalog: &'a Catalog, title: &str) -> Result<&'a Item> {
    catalog
        .find_item(title)
        .ok_or_else(|| LendingError::ItemNotFound {
            title: title.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ItemDetails;
    use crate::domain::scenario::PhaseKind;
    use crate::utils::error::LoanError;

    struct FixedScenario {
        items: Vec<ItemDetails>,
        borrowers: Vec<String>,
        steps: Vec<Step>,
    }

    impl ScenarioProvider for FixedScenario {
        fn catalog_name(&self) -> &str {
            "test"
        }

        fn items(&self) -> &[ItemDetails] {
            &self.items
        }

        fn borrowers(&self) -> &[String] {
            &self.borrowers
        }

        fn steps(&self) -> &[Step] {
            &self.steps
        }
    }

    fn scenario(steps: Vec<Step>) -> FixedScenario {
        FixedScenario {
            items: ["A", "B", "C", "D", "E"]
                .iter()
                .map(|t| ItemDetails::new(*t, "Author", 2000))
                .collect(),
            borrowers: vec!["X".to_string(), "Y".to_string()],
            steps,
        }
    }

    #[test]
    fn test_run_records_outcomes() {
        let engine = LendingEngine::new(scenario(vec![
            Step::checkout("X", "A"),
            Step::checkout("Y", "B"),
            Step::checkout("X", "b"),
            Step::return_item("X", "A"),
        ]));

        let report = engine.run().unwrap();

        assert_eq!(report.available_before, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(report.available_after, vec!["A", "C", "D", "E"]);
        assert_eq!(report.failed_steps().count(), 1);
        assert_eq!(
            report.outcomes[2].error,
            Some(LoanError::CheckoutUnavailable {
                title: "B".to_string()
            })
        );
        assert_eq!(report.holdings[1].titles, vec!["B"]);
        assert!(report.holdings[0].titles.is_empty());
        assert_eq!(report.summary.on_loan, 1);
        assert_eq!(report.catalog_line, "Catalog with 5 items");
    }

    #[test]
    fn test_phases_snapshot_borrowers() {
        let engine = LendingEngine::new(scenario(vec![
            Step::checkout("X", "A"),
            Step::checkout("Y", "B"),
            Step::return_item("X", "A"),
            Step::checkout("X", "C"),
        ]));

        let report = engine.run().unwrap();
        let kinds: Vec<_> = report.phases.iter().map(|p| (p.kind, p.steps)).collect();

        assert_eq!(
            kinds,
            vec![
                (PhaseKind::Checkout, 2),
                (PhaseKind::Return, 1),
                (PhaseKind::Checkout, 1)
            ]
        );
        assert_eq!(
            report.phases[0].borrowers,
            vec![
                "Borrower: X, items on loan: 1",
                "Borrower: Y, items on loan: 1"
            ]
        );
        assert_eq!(report.phases[1].borrowers[0], "Borrower: X, items on loan: 0");
        assert!(report.description.is_none());
    }

    #[test]
    fn test_no_steps_means_no_phases() {
        let report = LendingEngine::new(scenario(vec![])).run().unwrap();
        assert!(report.phases.is_empty());
        assert_eq!(report.available_after.len(), 5);
    }

    #[test]
    fn test_return_by_other_borrower_is_recorded() {
        let engine = LendingEngine::new(scenario(vec![
            Step::checkout("X", "C"),
            Step::return_item("Y", "C"),
        ]));

        let report = engine.run().unwrap();

        assert!(matches!(
            report.outcomes[1].error,
            Some(LoanError::ReturnNotHeld { .. })
        ));
        assert_eq!(report.holdings[0].titles, vec!["C"]);
    }

    #[test]
    fn test_unknown_title_aborts_before_lending() {
        let engine = LendingEngine::new(scenario(vec![
            Step::checkout("X", "A"),
            Step::checkout("X", "Z"),
        ]));

        assert!(matches!(engine.run(), Err(LendingError::ItemNotFound { .. })));
    }

    #[test]
    fn test_unknown_borrower_is_an_error() {
        let engine = LendingEngine::new(scenario(vec![Step::checkout("Nobody", "A")]));
        assert!(matches!(engine.run(), Err(LendingError::UnknownBorrower { .. })));
    }

    #[test]
    fn test_duplicate_borrowers_rejected() {
        let mut fixed = scenario(vec![]);
        fixed.borrowers.push("X".to_string());
        let engine = LendingEngine::new(fixed);
        assert!(matches!(engine.run(), Err(LendingError::DuplicateBorrower { .. })));
    }
}

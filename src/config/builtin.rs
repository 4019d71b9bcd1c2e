use crate::domain::model::ItemDetails;
use crate::domain::ports::ScenarioProvider;
use crate::domain::scenario::Step;

/// The default run: five books, two borrowers, two loans, one refused
/// loan of a book already out, and one return.
#[derive(Debug, Clone)]
pub struct BuiltinScenario {
    items: Vec<ItemDetails>,
    borrowers: Vec<String>,
    steps: Vec<Step>,
}

impl BuiltinScenario {
    pub fn new() -> Self {
        let items = vec![
            ItemDetails::new("The Lord of the Rings", "J.R.R. Tolkien", 1954),
            ItemDetails::new("One Hundred Years of Solitude", "Gabriel García Márquez", 1967),
            ItemDetails::new("Don Quixote", "Miguel de Cervantes", 1605),
            ItemDetails::new("1984", "George Orwell", 1949),
            ItemDetails::new("Pride and Prejudice", "Jane Austen", 1813),
        ];
        let steps = vec![
            Step::checkout("Juan", "The Lord of the Rings"),
            Step::checkout("Pedro", "One Hundred Years of Solitude"),
            Step::checkout("Juan", "One Hundred Years of Solitude"),
            Step::return_item("Juan", "The Lord of the Rings"),
        ];

        Self {
            items,
            borrowers: vec!["Juan".to_string(), "Pedro".to_string()],
            steps,
        }
    }
}

impl Default for BuiltinScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioProvider for BuiltinScenario {
    fn catalog_name(&self) -> &str {
        "Community Library"
    }

    fn description(&self) -> Option<&str> {
        Some("Two loans, a refused loan of a book already out, then one return")
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

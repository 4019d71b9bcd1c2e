use crate::domain::model::ItemDetails;
use crate::domain::ports::ScenarioProvider;
use crate::domain::scenario::Step;
use crate::utils::error::{LendingError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub library: LibraryConfig,
    pub borrowers: Vec<String>,
    #[serde(default)]
    pub items: Vec<ItemDetails>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    pub name: String,
    pub description: Option<String>,
}

impl TomlConfig {
    /// Loads a scenario from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LendingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LendingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LendingError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("library.name", &self.library.name)?;

        validation::validate_non_empty_list("items", &self.items)?;
        for item in &self.items {
            validation::validate_non_empty_string("items.title", &item.title)?;
            validation::validate_non_empty_string("items.creator", &item.creator)?;
        }

        validation::validate_unique_names("borrowers", &self.borrowers)?;

        for step in &self.steps {
            if !self.borrowers.iter().any(|b| b == step.borrower()) {
                return Err(LendingError::UnknownBorrower {
                    name: step.borrower().to_string(),
                });
            }
            validation::validate_non_empty_string("steps.title", step.title())?;
        }

        Ok(())
    }
}

impl ScenarioProvider for TomlConfig {
    fn catalog_name(&self) -> &str {
        &self.library.name
    }

    fn description(&self) -> Option<&str> {
        self.library.description.as_deref()
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

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::builtin::BuiltinScenario;
pub use config::cli::{ConsoleSink, JsonFileSink};
pub use config::toml_config::TomlConfig;
pub use core::{catalog::Catalog, engine::LendingEngine};
pub use domain::model::{Borrower, Item, ItemDetails, ItemId};
pub use utils::error::{LendingError, LoanError, Result};

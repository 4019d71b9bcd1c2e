use lending_registry::core::ScenarioProvider;
use lending_registry::utils::validation::Validate;
use lending_registry::{
    BuiltinScenario, JsonFileSink, LendingEngine, LendingError, LoanError, TomlConfig,
};
use lending_registry::core::ReportSink;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const SCENARIO: &str = r#"
borrowers = ["X", "Y"]

[library]
name = "Test Branch"

[[items]]
title = "A"
creator = "Ann"
year = 2001

[[items]]
title = "B"
creator = "Ben"
year = 2002

[[items]]
title = "C"
creator = "Cy"
year = 2003

[[steps]]
action = "checkout"
borrower = "X"
title = "a"

[[steps]]
action = "checkout"
borrower = "Y"
title = "B"

[[steps]]
action = "return"
borrower = "Y"
title = "A"

[[steps]]
action = "return"
borrower = "X"
title = "A"
"#;

fn scenario_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_toml_scenario_end_to_end() {
    let file = scenario_file(SCENARIO);
    let config = TomlConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();

    let report = LendingEngine::new(config).run().unwrap();

    assert_eq!(report.catalog_name, "Test Branch");
    assert_eq!(report.available_before, vec!["A", "B", "C"]);
    assert_eq!(report.available_after, vec!["A", "C"]);
    assert_eq!(
        report.outcomes[2].error,
        Some(LoanError::ReturnNotHeld {
            borrower: "Y".to_string(),
            title: "A".to_string()
        })
    );
    assert!(report.outcomes[3].succeeded());
    assert_eq!(report.summary.on_loan, 1);
}

#[test]
fn test_step_for_missing_title_fails_run() {
    let content = SCENARIO.replace("title = \"B\"\n\n[[steps]]\naction = \"return\"", "title = \"Q\"\n\n[[steps]]\naction = \"return\"");
    let file = scenario_file(&content);
    let config = TomlConfig::from_file(file.path()).unwrap();

    let err = LendingEngine::new(config).run().unwrap_err();
    assert!(matches!(err, LendingError::ItemNotFound { ref title } if title == "Q"));
    assert_eq!(err.severity().exit_code(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = TomlConfig::from_file(temp_dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, LendingError::IoError(_)));
}

#[test]
fn test_builtin_scenario_report_to_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.json");

    let engine = LendingEngine::new(BuiltinScenario::new());
    assert_eq!(engine.provider().items().len(), 5);
    let report = engine.run().unwrap();
    JsonFileSink::new(&path).emit(&report).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(value["available_before"].as_array().unwrap().len(), 5);
    assert_eq!(value["available_after"].as_array().unwrap().len(), 4);
    assert_eq!(value["outcomes"][2]["error"]["kind"], "checkout_unavailable");
    assert_eq!(value["holdings"][1]["titles"][0], "One Hundred Years of Solitude");
    assert!(value["holdings"][0]["titles"].as_array().unwrap().is_empty());
}

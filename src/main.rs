use clap::Parser;
use lending_registry::core::{ReportSink, ScenarioProvider, SimulationReport};
use lending_registry::utils::logger::{self, LogFormat};
use lending_registry::utils::validation::Validate;
use lending_registry::{
    BuiltinScenario, CliConfig, ConsoleSink, JsonFileSink, LendingEngine, LendingError, TomlConfig,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, config.verbose);

    tracing::info!("Starting lending-registry CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let report = match load_and_run(&config) {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    if !config.quiet {
        ConsoleSink::new().emit(&report)?;
    }

    if let Some(path) = &config.report {
        if let Err(e) = JsonFileSink::new(path).emit(&report) {
            fail(&e);
        }
    }

    Ok(())
}

fn load_and_run(config: &CliConfig) -> Result<SimulationReport, LendingError> {
    match &config.scenario {
        Some(path) => {
            tracing::info!("Loading scenario from: {}", path);
            let scenario = TomlConfig::from_file(path)?;
            scenario.validate()?;
            run(scenario)
        }
        None => run(BuiltinScenario::new()),
    }
}

fn run<P: ScenarioProvider>(provider: P) -> Result<SimulationReport, LendingError> {
    LendingEngine::new(provider).run()
}

fn fail(e: &LendingError) -> ! {
    tracing::error!(
        "Lending run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

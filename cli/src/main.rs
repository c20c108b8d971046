//! CLI entrypoint for Payment Tribunal
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Parser;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tribunal_application::{
    DisputeEvent, EnrichmentGateway, IntakeDecision, NoProgress, ProgressNotifier,
    RunTribunalUseCase, TribunalOutcome, VerdictStats, screen,
};
use tribunal_domain::{ConfigIssue, OutputFormat, Scenario, Severity, TransactionSignal};
use tribunal_infrastructure::{
    ConfigLoader, FileConfig, FileEnrichmentConfig, JsonlVerdictRecorder, read_history,
};
use tribunal_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressReporter,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Payment Tribunal");

    let config = load_config(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!("\nEffective configuration:\n");
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    check_config(&config)?;

    let output = OutputConfig::from_file(
        config.output.format,
        config.output.color,
        config.output.progress,
    )
    .with_cli(cli.output, cli.quiet);
    if !output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Try `payment-tribunal scenario --all` or `--help`.");
    };

    match command {
        Command::Scenarios => print!("{}", ConsoleFormatter::format_scenarios()),

        Command::Stats { history } => {
            let path = history.unwrap_or_else(|| config.history.path.clone());
            let records = read_history(&path)?;
            let stats = VerdictStats::from_records(&records);
            if output.format.is_machine_readable() {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!(
                    "{}",
                    ConsoleFormatter::format_stats(&stats, &path.display().to_string())
                );
            }
        }

        Command::Scenario { name, all } => {
            let scenarios = if all {
                Scenario::ALL.to_vec()
            } else {
                let name = name.context("scenario name is required without --all")?;
                vec![name.parse::<Scenario>()?]
            };

            let signals: Vec<TransactionSignal> = scenarios.iter().map(Scenario::signal).collect();
            let use_case = build_use_case(&cli, &config);
            run(&use_case, signals, output).await;
        }

        Command::Adjudicate { input } => {
            let json = read_input(&input)?;
            let event = DisputeEvent::from_json(&json)?;

            match screen(event, Utc::now()) {
                IntakeDecision::Admitted(signal) => {
                    let use_case = build_use_case(&cli, &config);
                    run(&use_case, vec![signal], output).await;
                }
                IntakeDecision::Rejected { verdict, reason } => {
                    if output.format.is_machine_readable() {
                        println!("{}", serde_json::to_string_pretty(&verdict)?);
                    } else {
                        print!("{}", ConsoleFormatter::format_rejection(&verdict, &reason));
                    }
                }
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_deref()).map_err(|e| anyhow::anyhow!(*e))
}

/// Print warnings; refuse to start on errors
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => eprintln!("config error: {}", issue.message),
        }
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration");
    }
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read dispute from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read dispute from {}", input.display()))
    }
}

fn build_use_case(cli: &Cli, config: &FileConfig) -> RunTribunalUseCase {
    let mut params = config.deliberation_params();
    if cli.no_enrich {
        params = params.with_enrichment_enabled(false);
    }
    let enrichment_enabled = params.enrichment_enabled;

    // === Dependency Injection ===
    let mut use_case = RunTribunalUseCase::new(params);

    if enrichment_enabled && let Some(gateway) = enrichment_gateway(&config.enrichment) {
        use_case = use_case.with_enrichment(gateway);
    }

    if config.history.enabled && !cli.no_history {
        match JsonlVerdictRecorder::new(&config.history.path) {
            Some(recorder) => {
                info!("Recording verdicts to {}", recorder.path().display());
                use_case = use_case.with_recorder(Arc::new(recorder));
            }
            None => warn!("Verdict history disabled for this run"),
        }
    }

    use_case
}

#[cfg(feature = "llm-enrichment")]
fn enrichment_gateway(config: &FileEnrichmentConfig) -> Option<Arc<dyn EnrichmentGateway>> {
    use tribunal_infrastructure::OpenAiEnrichmentGateway;

    match OpenAiEnrichmentGateway::from_config(config) {
        Ok(gateway) => {
            info!("Enrichment via {} at {}", config.model, config.endpoint);
            Some(Arc::new(gateway))
        }
        Err(e) => {
            warn!("Enrichment unavailable, arguments stay deterministic: {}", e);
            None
        }
    }
}

#[cfg(not(feature = "llm-enrichment"))]
fn enrichment_gateway(_config: &FileEnrichmentConfig) -> Option<Arc<dyn EnrichmentGateway>> {
    warn!("Enrichment is enabled but this build lacks the llm-enrichment feature");
    None
}

async fn run(use_case: &RunTribunalUseCase, signals: Vec<TransactionSignal>, output: OutputConfig) {
    let progress: &dyn ProgressNotifier = if output.show_progress {
        &ProgressReporter
    } else {
        &NoProgress
    };

    let mut outcomes: Vec<TribunalOutcome> = Vec::with_capacity(signals.len());
    for signal in signals {
        outcomes.push(use_case.execute_with_progress(signal, progress).await);
    }

    let formatter = ConsoleFormatter;
    match (output.format, outcomes.as_slice()) {
        (OutputFormat::Json, [single]) => println!("{}", formatter.format_json(single)),
        (OutputFormat::Json, many) => println!("{}", ConsoleFormatter::format_json_many(many)),
        (format, many) => {
            for outcome in many {
                println!("{}", formatter.render(format, outcome));
            }
        }
    }
}

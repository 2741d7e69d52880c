use api_shared::ReportRes;
use clap::{Parser, Subcommand};
use rra_core::config::core_config_from_env_values;
use rra_core::validation::{
    parse_language, parse_report_id, validate_outcome_label, validate_report_text,
};
use rra_core::{ReportService, Severity, SeveritySummary};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "rra")]
#[command(about = "Regulatory Report Assistant CLI")]
struct Cli {
    /// Report data directory
    #[arg(long, global = true, env = "REPORT_DATA_DIR")]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from a report without storing it
    Extract {
        /// Free-text report
        text: String,
    },
    /// Extract fields from a report and store the result
    Process {
        /// Free-text report
        text: String,
    },
    /// List stored reports, newest first
    List,
    /// Show a stored report
    Show {
        /// Report id (32 lowercase hex characters)
        id: String,
    },
    /// Translate an outcome label
    Translate {
        /// Outcome label, e.g. "recovered"
        outcome: String,
        /// Target language (fr or sw)
        language: String,
    },
    /// Count stored reports per severity
    Summary,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("No command given. Use --help for usage.");
        return Ok(());
    };

    let cfg = core_config_from_env_values(
        cli.data_dir,
        std::env::var("RRA_LEXICON_FILE").ok(),
        std::env::var("RRA_ENTITY_GAZETTEER_FILE").ok(),
    )?;
    let service = ReportService::new(Arc::new(cfg))?;

    match command {
        Commands::Extract { text } => {
            let raw_report = validate_report_text(&text)?;
            let extraction = service.extract(&raw_report);
            println!("{}", serde_json::to_string_pretty(&extraction)?);
        }
        Commands::Process { text } => {
            let raw_report = validate_report_text(&text)?;
            let report = service.process(raw_report)?;
            println!("{}", serde_json::to_string_pretty(&ReportRes::from(&report))?);
        }
        Commands::List => {
            let reports = service.list();
            if reports.is_empty() {
                println!("No reports found.");
            } else {
                for report in reports {
                    let res = ReportRes::from(&report);
                    println!(
                        "ID: {}, Drug: {}, Severity: {}, Outcome: {}, Events: {}, Created: {}",
                        res.id,
                        res.drug,
                        res.severity,
                        res.outcome,
                        res.adverse_events.join(", "),
                        res.created_at
                    );
                }
            }
        }
        Commands::Show { id } => {
            let id = parse_report_id(&id)?;
            let report = service.get(&id)?;
            println!("{}", serde_json::to_string_pretty(&ReportRes::from(&report))?);
        }
        Commands::Translate { outcome, language } => {
            println!("{}", translate(&service, &outcome, &language)?);
        }
        Commands::Summary => {
            println!("{}", summary_line(&service.severity_summary()));
        }
    }

    Ok(())
}

fn translate(service: &ReportService, outcome: &str, language: &str) -> anyhow::Result<String> {
    let outcome = validate_outcome_label(outcome)?;
    let language = parse_language(language)?;
    Ok(service.translate(outcome.as_str(), language))
}

fn summary_line(summary: &SeveritySummary) -> String {
    let counts: Vec<String> = [Severity::Mild, Severity::Moderate, Severity::Severe]
        .into_iter()
        .map(|severity| format!("{severity}: {}", summary.count(severity)))
        .collect();
    format!("{} (total: {})", counts.join(", "), summary.total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn test_service(temp: &tempfile::TempDir) -> ReportService {
        let cfg = core_config_from_env_values(Some(temp.path().display().to_string()), None, None)
            .expect("config");
        ReportService::new(Arc::new(cfg)).expect("service")
    }

    #[test]
    fn translate_trims_outcome_and_rejects_blank() {
        let temp = tempfile::TempDir::new().unwrap();
        let service = test_service(&temp);

        assert_eq!(translate(&service, " Fatal ", "sw").unwrap(), "mbaya");
        assert!(translate(&service, "  ", "sw").is_err());
        assert!(translate(&service, "fatal", "de").is_err());
    }

    #[test]
    fn summary_line_lists_counts_and_total() {
        let summary = SeveritySummary {
            mild: 2,
            moderate: 0,
            severe: 1,
        };
        assert_eq!(
            summary_line(&summary),
            "mild: 2, moderate: 0, severe: 1 (total: 3)"
        );
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_translate_arguments() {
        let cli = Cli::try_parse_from(["rra", "translate", "Recovered", "fr"]).unwrap();
        match cli.command {
            Some(Commands::Translate { outcome, language }) => {
                assert_eq!(outcome, "Recovered");
                assert_eq!(language, "fr");
            }
            _ => panic!("expected translate command"),
        }
    }

    #[test]
    fn data_dir_is_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["rra", "list", "--data-dir", "/tmp/reports"]).unwrap();
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/reports"));
        assert!(matches!(cli.command, Some(Commands::List)));
    }
}

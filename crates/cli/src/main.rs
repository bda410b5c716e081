//! `xerlens` command line: analyze a Primavera P6 XER export and print the
//! report as JSON.
//!
//! ```bash
//! xerlens analyze schedule.xer --pretty
//! XERLENS_SUMMARY_ENABLED=true xerlens analyze schedule.xer
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use xerlens_ai::TemplateSummaryGenerator;
use xerlens_core::SessionId;
use xerlens_infra::{AnalysisReport, InMemoryProjectStore, IngestConfig, Ingestor, Upload};
use xerlens_observability::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "xerlens", version, about)]
struct Cli {
    /// Log line format written to stderr
    #[arg(long, value_name = "FORMAT", default_value = "pretty", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an XER export and print its KPIs and earned-value series
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Path to the .xer file
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Session to store the project under (a fresh one by default)
    #[arg(long, value_name = "UUID")]
    session: Option<SessionId>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    xerlens_observability::init_with(cli.log_format);

    match cli.command {
        Command::Analyze(args) => analyze(&args),
    }
}

fn analyze(args: &AnalyzeArgs) -> Result<()> {
    let config = IngestConfig::from_env().context("invalid ingest configuration")?;
    let report = run(config, args.session.unwrap_or_default(), &args.path)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(report.as_ref())?
    } else {
        serde_json::to_string(report.as_ref())?
    };
    println!("{json}");
    Ok(())
}

fn run(config: IngestConfig, session: SessionId, path: &Path) -> Result<Arc<AnalysisReport>> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let summary_enabled = config.summary_enabled;
    let store: Arc<InMemoryProjectStore<Arc<AnalysisReport>>> = Arc::new(InMemoryProjectStore::new());
    let mut ingestor = Ingestor::new(config, store);
    if summary_enabled {
        ingestor = ingestor.with_summarizer(Arc::new(TemplateSummaryGenerator));
    }

    let report = ingestor.ingest(session, &Upload::new(file_name, bytes))?;
    tracing::info!(
        project = %report.project_key,
        activities = report.activity_count,
        health = %report.kpis.health,
        "analysis complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../infra/fixtures/riverside_depot.xer");

    #[test]
    fn parses_analyze_flags() {
        let cli = Cli::try_parse_from([
            "xerlens",
            "analyze",
            "plan.xer",
            "--pretty",
            "--log-format",
            "json",
            "--session",
            "0190a5c4-8f1e-7b3a-9c2d-4e5f60718293",
        ])
        .unwrap();

        assert_eq!(cli.log_format, LogFormat::Json);
        let Command::Analyze(args) = cli.command;
        assert_eq!(args.path, PathBuf::from("plan.xer"));
        assert!(args.pretty);
        assert_eq!(
            args.session.map(|s| s.to_string()).as_deref(),
            Some("0190a5c4-8f1e-7b3a-9c2d-4e5f60718293")
        );
    }

    #[test]
    fn rejects_malformed_session() {
        assert!(Cli::try_parse_from(["xerlens", "analyze", "plan.xer", "--session", "nope"]).is_err());
    }

    #[test]
    fn analyzes_fixture_file() {
        let report = run(IngestConfig::default(), SessionId::new(), Path::new(FIXTURE)).unwrap();
        assert_eq!(report.project_key.as_str(), "P100");
        assert_eq!(report.activity_count, 5);
    }

    #[test]
    fn configured_upload_limit_applies() {
        let config = IngestConfig::from_lookup(|var| match var {
            "XERLENS_MAX_UPLOAD_BYTES" => Some("64".to_string()),
            _ => None,
        })
        .unwrap();

        let err = run(config, SessionId::new(), Path::new(FIXTURE)).unwrap_err();
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn unreadable_file_reports_path() {
        let err = run(IngestConfig::default(), SessionId::new(), Path::new("/nonexistent/plan.xer")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/plan.xer"));
    }

    #[test]
    fn unparsable_file_says_so() {
        let dir = std::env::temp_dir().join(format!("xerlens-cli-{}", SessionId::new()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.xer");
        std::fs::write(&path, b"%T\n").unwrap();

        let err = run(IngestConfig::default(), SessionId::new(), &path).unwrap_err();
        assert_eq!(err.to_string(), "could not parse file");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

//! CLI entry point for tamperguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `tamperguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tamperguard_app::{
    CheckInput, DiagnoseInput, ExplainOutput, OutputFormat, SchemaKind, generate_schema,
    render_report, run_check, run_diagnose, run_explain, serialize_diagnostics, serialize_report,
    verdict_exit_code,
};
use tamperguard_domain::fingerprint::{md5_fingerprint, sha256_fingerprint};
use tamperguard_host::SnapshotProvider;
use tamperguard_settings::Overrides;
use tamperguard_types::{EvaluationMode, TamperguardReport};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`tracing_subscriber::EnvFilter` syntax).
const LOG_ENV: &str = "TAMPERGUARD_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "tamperguard",
    version,
    about = "Application integrity verification against a declared policy"
)]
struct Cli {
    /// Path to tamperguard config TOML.
    #[arg(long, default_value = "tamperguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (permissive|release).
    #[arg(long)]
    profile: Option<String>,

    /// Override whether debuggable builds are allowed.
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    allow_debug: Option<bool>,

    /// Override whether emulators are allowed.
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    allow_emulator: Option<bool>,

    /// Log at debug level to stderr (overrides TAMPERGUARD_LOG).
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the policy against a facts file and print the report.
    Check {
        /// Path to the JSON facts file.
        #[arg(long)]
        facts: Utf8PathBuf,

        /// Run every check instead of stopping at the first failure.
        #[arg(long)]
        collect_all: bool,

        /// Also write the JSON report to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Output format for stdout.
        #[arg(long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
    },

    /// Print every raw fact as JSON, without evaluating the policy.
    Diagnose {
        /// Path to the JSON facts file.
        #[arg(long)]
        facts: Utf8PathBuf,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "app.signature") or code (e.g., "signature_not_accepted") to explain.
        identifier: String,
    },

    /// Print the signer fingerprint of a certificate file.
    Fingerprint {
        /// DER-encoded certificate.
        file: Utf8PathBuf,

        /// Print SHA-256 instead of MD5.
        #[arg(long)]
        sha256: bool,
    },

    /// Print a JSON schema.
    Schema {
        #[arg(value_enum)]
        kind: SchemaArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Json,
    Text,
    Md,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Md => OutputFormat::Markdown,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemaArg {
    Config,
    Report,
}

impl From<SchemaArg> for SchemaKind {
    fn from(value: SchemaArg) -> Self {
        match value {
            SchemaArg::Config => SchemaKind::Config,
            SchemaArg::Report => SchemaKind::Report,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.cmd {
        Commands::Check {
            facts,
            collect_all,
            report_out,
            format,
        } => cmd_check(&cli, facts, *collect_all, report_out.as_deref(), *format),
        Commands::Diagnose { facts } => cmd_diagnose(&cli, facts),
        Commands::Explain { identifier } => cmd_explain(identifier),
        Commands::Fingerprint { file, sha256 } => cmd_fingerprint(file, *sha256),
        Commands::Schema { kind } => cmd_schema(*kind),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("tamperguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        allow_debug: cli.allow_debug,
        allow_emulator: cli.allow_emulator,
    }
}

/// Missing config file is allowed (permissive defaults apply).
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(config = %path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn cmd_check(
    cli: &Cli,
    facts_path: &Utf8Path,
    collect_all: bool,
    report_out: Option<&Utf8Path>,
    format: FormatArg,
) -> anyhow::Result<i32> {
    let config_text = read_config(&cli.config)?;
    let provider = SnapshotProvider::load(facts_path)?;

    let output = run_check(CheckInput {
        config_text: &config_text,
        overrides: overrides(cli),
        facts: &provider,
        mode: if collect_all {
            EvaluationMode::CollectAll
        } else {
            EvaluationMode::FailFast
        },
    })?;

    if let Some(path) = report_out {
        write_report_file(path, &output.report).context("write report json")?;
    }
    print!("{}", render_report(&output.report, format.into())?);

    Ok(verdict_exit_code(output.report.verdict))
}

fn cmd_diagnose(cli: &Cli, facts_path: &Utf8Path) -> anyhow::Result<i32> {
    let config_text = read_config(&cli.config)?;
    let provider = SnapshotProvider::load(facts_path)?;

    let diagnostics = run_diagnose(DiagnoseInput {
        config_text: &config_text,
        overrides: overrides(cli),
        facts: &provider,
    })?;
    let bytes = serialize_diagnostics(&diagnostics)?;
    println!("{}", String::from_utf8_lossy(&bytes));
    Ok(0)
}

fn cmd_explain(identifier: &str) -> anyhow::Result<i32> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", tamperguard_app::format_explanation(&exp));
            Ok(0)
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                tamperguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            Ok(1)
        }
    }
}

fn cmd_fingerprint(file: &Utf8Path, sha256: bool) -> anyhow::Result<i32> {
    let bytes = std::fs::read(file).with_context(|| format!("read certificate: {file}"))?;
    let fingerprint = if sha256 {
        sha256_fingerprint(&bytes)
    } else {
        md5_fingerprint(&bytes)
    };
    println!("{fingerprint}");
    Ok(0)
}

fn cmd_schema(kind: SchemaArg) -> anyhow::Result<i32> {
    let schema = generate_schema(kind.into());
    let text = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{text}");
    Ok(0)
}

fn write_report_file(path: &Utf8Path, report: &TamperguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

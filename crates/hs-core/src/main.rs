//! Headline Sentiment - classification CLI
//!
//! The main entry point for hs, handling:
//! - Single-headline and batch classification
//! - Feed fetching and classification
//! - Configuration and artifact validation
//! - CSV export and report rendering

use clap::{Args, Parser, Subcommand};
use hs_common::error::{format_error_human, StructuredError};
use hs_common::{Error, OutputFormat, SCHEMA_VERSION};
use hs_config::{Config, ConfigPaths, ConfigSnapshot, ScorerBackend};
use hs_core::exit_codes::ExitCode;
use hs_core::export::export_csv;
use hs_core::history::History;
use hs_core::logging::{self, LogConfig};
use hs_core::output::{AnalysisReport, BatchReport};
use hs_core::pipeline::Analyzer;
use hs_core::scorer::build_scorer;
use hs_feed::FeedFetcher;
use serde::Serialize;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::time::Duration;

/// Headline Sentiment - lexicon and model-based headline classification
#[derive(Parser)]
#[command(name = "hs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Path to sentiment.json
    #[arg(long, global = true, env = "HS_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Override the configured scorer backend
    #[arg(long, global = true, value_enum)]
    scorer: Option<ScorerBackend>,

    /// Lexicon overlay file (JSON word→valence map)
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// Model artifact path (model backend)
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Vectorizer artifact path (model backend)
    #[arg(long, global = true)]
    vectorizer: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one headline (pass '-' to read stdin)
    Analyze(AnalyzeArgs),

    /// Classify every non-blank line of a multi-line blob
    Batch(BatchArgs),

    /// Fetch a feed and classify its headlines
    Feed(FeedArgs),

    /// Validate configuration and scorer artifacts
    Check,

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Headline text, or '-' to read from stdin
    text: String,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Input file (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Export classified records as CSV to this path
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FeedArgs {
    /// Feed URL (RSS or Atom)
    #[arg(long)]
    url: String,

    /// Maximum headlines to take (defaults to feed.max_items)
    #[arg(long)]
    max: Option<usize>,

    /// Export classified records as CSV to this path
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_env(
        LogConfig::level_from_flags(cli.global.verbose, cli.global.quiet),
        None,
    );
    logging::init_logging(&log_config);

    let code = run(cli);
    std::process::exit(code.as_i32());
}

fn run(cli: Cli) -> ExitCode {
    let (mut config, paths) = match Config::load(cli.global.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => return report_error(&Error::from(e), &cli.global),
    };
    apply_overrides(&mut config, &cli.global);
    if let Err(e) = hs_config::validate_config(&config) {
        return report_error(&Error::from(e), &cli.global);
    }

    tracing::debug!(
        source = %paths.source,
        backend = %config.scorer.backend,
        "configuration resolved"
    );

    match &cli.command {
        Commands::Analyze(args) => cmd_analyze(&config, args, &cli.global),
        Commands::Batch(args) => cmd_batch(&config, args, &cli.global),
        Commands::Feed(args) => cmd_feed(&config, args, &cli.global),
        Commands::Check => cmd_check(&config, &paths, &cli.global),
        Commands::Version => cmd_version(&cli.global),
    }
}

/// CLI flags override file-based scorer settings.
fn apply_overrides(config: &mut Config, global: &GlobalOpts) {
    if let Some(backend) = global.scorer {
        config.scorer.backend = backend;
    }
    if let Some(path) = &global.lexicon {
        config.scorer.lexicon_overlay = Some(path.clone());
    }
    if let Some(path) = &global.model {
        config.scorer.model_path = Some(path.clone());
    }
    if let Some(path) = &global.vectorizer {
        config.scorer.vectorizer_path = Some(path.clone());
    }
}

fn cmd_analyze(config: &Config, args: &AnalyzeArgs, global: &GlobalOpts) -> ExitCode {
    let analyzer = match make_analyzer(config, global) {
        Ok(analyzer) => analyzer,
        Err(code) => return code,
    };

    let text = if args.text == "-" {
        match read_stdin() {
            Ok(text) => text,
            Err(e) => return report_error(&Error::Io(e), global),
        }
    } else {
        args.text.clone()
    };

    match analyzer.analyze(&text) {
        Ok(record) => {
            let report = AnalysisReport::new(analyzer.scorer_name(), &record);
            print_report(report.render(global.format), global)
        }
        Err(Error::EmptyInput) => warn_empty_input(global),
        Err(e) => report_error(&e, global),
    }
}

fn cmd_batch(config: &Config, args: &BatchArgs, global: &GlobalOpts) -> ExitCode {
    let analyzer = match make_analyzer(config, global) {
        Ok(analyzer) => analyzer,
        Err(code) => return code,
    };

    let blob = match &args.input {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(blob) => blob,
            Err(e) => return report_error(&Error::Io(e), global),
        },
        None => match read_stdin() {
            Ok(blob) => blob,
            Err(e) => return report_error(&Error::Io(e), global),
        },
    };

    let records = match analyzer.analyze_batch(&blob) {
        Ok(records) => records,
        Err(Error::EmptyInput) => return warn_empty_input(global),
        Err(e) => return report_error(&e, global),
    };

    let mut history = History::from_config(config.history.capacity);
    for record in &records {
        history.append(record.clone());
    }
    let snapshot = history.snapshot();

    if let Some(path) = &args.export {
        if let Err(e) = export_csv(&snapshot, path) {
            return report_error(&e, global);
        }
    }

    let report = BatchReport::new(analyzer.scorer_name(), &snapshot);
    print_report(report.render(global.format), global)
}

fn cmd_feed(config: &Config, args: &FeedArgs, global: &GlobalOpts) -> ExitCode {
    let analyzer = match make_analyzer(config, global) {
        Ok(analyzer) => analyzer,
        Err(code) => return code,
    };

    let max_items = args.max.unwrap_or(config.feed.max_items);
    let timeout = Duration::from_secs(config.feed.timeout_secs);

    // Any failure from here to the parsed feed collapses to an empty
    // result plus a surfaced error; never an unhandled fault, never a retry.
    let headlines = FeedFetcher::new(timeout, &config.feed.user_agent)
        .and_then(|fetcher| fetcher.fetch_headlines(&args.url, max_items));

    let headlines = match headlines {
        Ok(headlines) => headlines,
        Err(e) => {
            tracing::error!(url = %args.url, error = %e, "feed fetch failed");
            eprintln!("{}", format_error_human(&e, use_color(global)));
            let report = BatchReport::new(analyzer.scorer_name(), &[])
                .with_feed_url(&args.url)
                .with_feed_error(e.to_string());
            print_report(report.render(global.format), global);
            return ExitCode::FeedEmpty;
        }
    };

    let records = match analyzer.analyze_headlines(&headlines) {
        Ok(records) => records,
        Err(e) => return report_error(&e, global),
    };

    let mut history = History::from_config(config.history.capacity);
    for record in &records {
        history.append(record.clone());
    }
    let snapshot = history.snapshot();

    if let Some(path) = &args.export {
        if let Err(e) = export_csv(&snapshot, path) {
            return report_error(&e, global);
        }
    }

    let report = BatchReport::new(analyzer.scorer_name(), &snapshot).with_feed_url(&args.url);
    print_report(report.render(global.format), global)
}

/// Report emitted by `hs check`.
#[derive(Debug, Serialize)]
struct CheckReport {
    schema_version: &'static str,
    config: ConfigSnapshot,
    scorer_ok: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    issues: Vec<String>,
}

fn cmd_check(config: &Config, paths: &ConfigPaths, global: &GlobalOpts) -> ExitCode {
    let mut issues = Vec::new();

    let scorer_result = build_scorer(config);
    if let Err(e) = &scorer_result {
        issues.push(e.to_string());
    }
    let scorer_ok = scorer_result.is_ok();

    let report = CheckReport {
        schema_version: SCHEMA_VERSION,
        config: ConfigSnapshot::capture(config, paths),
        scorer_ok,
        issues,
    };

    let rendered = match global.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)
            .map_err(Error::from),
        OutputFormat::Md | OutputFormat::Summary => Ok(render_check_text(&report)),
    };
    let code = print_report(rendered, global);
    if !code.is_success() {
        return code;
    }

    match scorer_result {
        Ok(_) => ExitCode::Clean,
        Err(e) => ExitCode::from_error(&e),
    }
}

fn render_check_text(report: &CheckReport) -> String {
    let mut out = format!(
        "config: {} ({})\nscorer: {} ({})",
        report
            .config
            .config_path
            .as_deref()
            .unwrap_or("builtin defaults"),
        report.config.config_source,
        report.config.summary.backend,
        if report.scorer_ok { "ok" } else { "failed" },
    );
    for issue in &report.issues {
        out.push_str(&format!("\nissue: {}", issue));
    }
    out
}

/// Version payload for `hs version`.
#[derive(Debug, Serialize)]
struct VersionReport {
    name: &'static str,
    version: &'static str,
    schema_version: &'static str,
}

fn cmd_version(global: &GlobalOpts) -> ExitCode {
    let report = VersionReport {
        name: "hs",
        version: env!("CARGO_PKG_VERSION"),
        schema_version: SCHEMA_VERSION,
    };
    let rendered = match global.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report).map_err(Error::from),
        OutputFormat::Md | OutputFormat::Summary => Ok(format!(
            "hs {} (schema {})",
            report.version, report.schema_version
        )),
    };
    print_report(rendered, global)
}

fn make_analyzer(
    config: &Config,
    global: &GlobalOpts,
) -> Result<Analyzer<Box<dyn hs_common::SentimentScorer>>, ExitCode> {
    match build_scorer(config) {
        Ok(scorer) => Ok(Analyzer::new(scorer)),
        Err(e) => Err(report_error(&e, global)),
    }
}

fn read_stdin() -> std::io::Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn use_color(global: &GlobalOpts) -> bool {
    !global.no_color && std::io::stderr().is_terminal()
}

/// Print a rendered report to stdout, or surface the rendering failure.
fn print_report(rendered: hs_common::Result<String>, global: &GlobalOpts) -> ExitCode {
    match rendered {
        Ok(payload) => {
            println!("{payload}");
            ExitCode::Clean
        }
        Err(e) => report_error(&e, global),
    }
}

/// Surface the empty-input warning; no record is created and nothing fatal
/// happened.
fn warn_empty_input(global: &GlobalOpts) -> ExitCode {
    tracing::warn!("input text is empty; nothing classified");
    eprintln!(
        "{}",
        format_error_human(&Error::EmptyInput, use_color(global))
    );
    ExitCode::NoInput
}

fn report_error(err: &Error, global: &GlobalOpts) -> ExitCode {
    tracing::error!(code = err.code(), category = %err.category(), error = %err, "command failed");
    eprintln!("{}", format_error_human(err, use_color(global)));
    if global.format == OutputFormat::Json {
        // Machine-parseable error payload on stdout for agent callers
        println!("{}", StructuredError::from(err).to_json());
    }
    ExitCode::from_error(err)
}

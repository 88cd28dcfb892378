use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::analysis::keywords::extract_keywords;
use crate::analysis::{analyze_resume, NlpPipeline};
use crate::config::Config;
use crate::errors::AppError;
use crate::input::{read_file, read_input};
use crate::profile::{build_profile, generate_recommendations};
use crate::scoring::try_score_resume;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(
    name = "resume-analyzer",
    about = "Analyze resume text: keywords, section structure and missing sections",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print keyword, structure and missing-section analysis (default command)
    Analyze(AnalyzeArgs),
    /// Extract contact details, experience and skills
    Profile(InputArgs),
    /// Score a resume against a job description
    Score(ScoreArgs),
    /// Start the HTTP service
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
struct InputArgs {
    /// Read the resume from a text or PDF file instead of stdin
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct AnalyzeArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Job description file (text or PDF)
    #[arg(long)]
    job: PathBuf,
    /// Keyword to measure density for; repeatable. Defaults to the job's top keywords.
    #[arg(long = "keyword")]
    keywords: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

/// `config` is only consulted by `serve`; the one-shot commands run even when the
/// environment holds an invalid server setting.
pub fn run(cli: Cli, config: Result<Config>) -> Result<()> {
    let command = cli
        .command
        .unwrap_or_else(|| Command::Analyze(AnalyzeArgs::default()));

    match command {
        Command::Analyze(args) => run_analyze(args),
        Command::Profile(args) => run_profile(args),
        Command::Score(args) => run_score(args),
        Command::Serve(args) => run_serve(args, config),
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let pipeline = NlpPipeline::english();
    let text = read_input(args.input.file.as_deref())?;
    let report = analyze_resume(&pipeline, &text)?;
    emit(&report, args.pretty)
}

fn run_profile(args: InputArgs) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let profile = build_profile(&text, Utc::now().year());
    let recommendations = generate_recommendations(&profile);
    emit(
        &json!({
            "resumeSummary": profile,
            "recommendations": recommendations,
        }),
        false,
    )
}

fn run_score(args: ScoreArgs) -> Result<()> {
    let resume = read_input(args.input.file.as_deref())?;
    let job = read_job(&args.job)?;

    let keywords = if args.keywords.is_empty() {
        let pipeline = NlpPipeline::english();
        extract_keywords(&pipeline, &job)
    } else {
        args.keywords
    };
    debug!(?keywords, "scoring resume against job description");

    let scores = try_score_resume(&resume, &job, &keywords)?;
    emit(&scores, false)
}

fn read_job(path: &Path) -> Result<String> {
    read_file(path).with_context(|| format!("Failed to read job description '{}'", path.display()))
}

fn run_serve(mut args: ServeArgs, config: Result<Config>) -> Result<()> {
    let mut config = config?;
    if let Some(host) = args.host.take() {
        config.host = host;
    }
    if let Some(port) = args.port.take() {
        config.port = port;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;
    runtime.block_on(crate::serve(AppState::new(config)))
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    write_report(&mut io::stdout().lock(), value, pretty)?;
    debug!(pretty, "report written");
    Ok(())
}

/// Writes one JSON document and a trailing newline, compact (single line) unless `pretty`.
fn write_report<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<(), AppError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

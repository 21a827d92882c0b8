#![warn(clippy::pedantic)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use forma_domain::{
    Candidate, Catalog, Exercise, MuscleGroup, Name, Plan, Requirement, ScoringService, Weight,
    catalog,
};
use log::{debug, info};

use crate::{
    report::{CandidateReport, PlanReport},
    settings::{Format, Settings},
};

mod data;
mod report;
mod settings;

#[derive(Parser)]
#[command(name = "forma")]
#[command(about = "Rank exercise selections by muscle group coverage", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// JSON file with rating thresholds and default output format
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON file with muscle groups and exercises (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the candidates of each plan
    Report(ReportArgs),
    /// Score a single selection of exercises
    Score(ScoreArgs),
}

#[derive(Args)]
struct ReportArgs {
    /// Only report the plan with this name
    #[arg(long)]
    plan: Option<String>,

    /// JSON file with plans (defaults to the built-in plans)
    #[arg(long)]
    plans: Option<PathBuf>,

    #[arg(long, value_enum)]
    format: Option<Format>,
}

#[derive(Args)]
struct ScoreArgs {
    /// Required muscle group, may be repeated
    #[arg(long = "group", required = true)]
    groups: Vec<String>,

    /// Exercise of the selection, may be repeated
    #[arg(long = "exercise")]
    exercises: Vec<String>,

    /// Weight of the muscle group at the same position
    #[arg(long = "weight", allow_negative_numbers = true)]
    weights: Vec<f64>,

    #[arg(long, value_enum)]
    format: Option<Format>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if std::env::var_os("RUST_LOG").is_none() {
        if cli.quiet {
            builder.filter_level(log::LevelFilter::Warn);
        } else if cli.verbose {
            builder.filter_level(log::LevelFilter::Debug);
        }
    }
    builder.target(env_logger::Target::Stderr).init();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    debug!("using settings {settings:?}");

    let service = ScoringService::new(load_catalog(cli.catalog.as_ref())?);

    match cli.command {
        Commands::Report(args) => run_report(&service, &settings, &args),
        Commands::Score(args) => run_score(&service, &settings, args),
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => {
            info!("loading catalog from {}", path.display());
            data::read_catalog(path)
        }
        None => catalog::reference().context("built-in catalog is invalid"),
    }
}

fn run_report(
    service: &ScoringService<Catalog>,
    settings: &Settings,
    args: &ReportArgs,
) -> Result<()> {
    let mut plans = match &args.plans {
        Some(path) => {
            info!("loading plans from {}", path.display());
            data::read_plans(path)?
        }
        None => catalog::plans().context("built-in plans are invalid")?,
    };

    if let Some(name) = &args.plan {
        plans.retain(|p: &Plan| p.name.as_str().eq_ignore_ascii_case(name.trim()));
        if plans.is_empty() {
            anyhow::bail!("no plan named \"{name}\"");
        }
    }

    let reports = plans
        .iter()
        .map(|plan| {
            let ranking = service
                .report(plan)
                .with_context(|| format!("failed to rank plan \"{}\"", plan.name))?;
            Ok(PlanReport::new(plan.name.as_str(), &ranking, settings))
        })
        .collect::<Result<Vec<_>>>()?;

    match args.format.unwrap_or(settings.format) {
        Format::Text => {
            let text = reports
                .iter()
                .map(PlanReport::to_text)
                .collect::<Vec<_>>()
                .join("\n");
            print!("{text}");
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    Ok(())
}

fn run_score(
    service: &ScoringService<Catalog>,
    settings: &Settings,
    args: ScoreArgs,
) -> Result<()> {
    let mut requirement = Requirement::new(
        args.groups
            .iter()
            .map(|g| MuscleGroup::new(g))
            .collect::<Result<Vec<_>, _>>()
            .context("invalid muscle group")?,
    );
    if !args.weights.is_empty() {
        requirement = requirement.with_weights(
            args.weights
                .into_iter()
                .map(Weight::new)
                .collect::<Result<Vec<_>, _>>()
                .context("invalid weight")?,
        );
    }
    let candidate = Candidate::new(
        Name::new("selection")?,
        args.exercises
            .iter()
            .map(|e| Exercise::new(e))
            .collect::<Result<Vec<_>, _>>()
            .context("invalid exercise")?,
    );

    let evaluation = service
        .evaluate(&requirement, &candidate)
        .context("failed to score selection")?;
    let report = CandidateReport::new(1, &candidate, &evaluation, settings);

    match args.format.unwrap_or(settings.format) {
        Format::Text => print!("{}", report::evaluation_text(&report)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

//! Realms Engine - command line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use realms_domain::rules::resolve_roll;
use realms_domain::{CharacterDraft, CreatorStep};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use realms_engine::infrastructure::EngineConfig;
use realms_engine::use_cases::{parse_roll_entries, DraftReview, EncounterReport, EncounterRequest};
use realms_engine::App;

/// Character build economy and skill encounter tooling
#[derive(Parser, Debug)]
#[command(name = "realms-engine", version)]
struct Cli {
    /// Codex JSON file (overrides REALMS_CODEX_PATH)
    #[arg(long, global = true)]
    codex: Option<PathBuf>,

    /// Starting currency (overrides REALMS_STARTING_CURRENCY)
    #[arg(long, global = true)]
    starting_currency: Option<i32>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show budgets and issues for a draft; fails when any issue is an error
    Review {
        /// Draft JSON file
        #[arg(long)]
        draft: PathBuf,

        /// Only check this creator step
        #[arg(long)]
        step: Option<CreatorStep>,
    },

    /// Resolve a single roll against a difficulty score
    Resolve {
        #[arg(long, allow_hyphen_values = true)]
        roll: i32,

        #[arg(long, allow_hyphen_values = true)]
        ds: i32,
    },

    /// Run a skill encounter, e.g. --rolls "Kestrel=17,Mott=d20+3,Pell"
    Encounter {
        #[arg(long, allow_hyphen_values = true)]
        ds: i32,

        #[arg(long)]
        rolls: String,

        #[arg(long, requires = "allowed_failures")]
        required_successes: Option<u32>,

        #[arg(long, requires = "required_successes")]
        allowed_failures: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = EngineConfig::from_env().context("Failed to load configuration")?;
    if let Some(path) = &cli.codex {
        config = config.with_codex_path(path);
    }
    if let Some(currency) = cli.starting_currency {
        config = config.with_starting_currency(currency);
    }

    // Logs go to stderr so JSON output stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let app = App::from_config(&config);

    match cli.command {
        Command::Review { draft, step } => {
            let content = tokio::fs::read_to_string(&draft)
                .await
                .with_context(|| format!("Failed to read draft {}", draft.display()))?;
            let parsed: CharacterDraft = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse draft {}", draft.display()))?;

            let review = app
                .use_cases
                .review
                .execute(&parsed, step)
                .await
                .with_context(|| format!("Failed to review draft {}", draft.display()))?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&review)?);
            } else {
                print_review(&review);
            }

            Ok(if review.has_blocking_errors {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Resolve { roll, ds } => {
            let outcome = resolve_roll(roll, ds);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!(
                    "Roll {roll} vs DS {ds}: {} success(es), {} failure(s)",
                    outcome.successes, outcome.failures
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Encounter {
            ds,
            rolls,
            required_successes,
            allowed_failures,
        } => {
            let request = EncounterRequest {
                difficulty_score: ds,
                entries: parse_roll_entries(&rolls)?,
                thresholds: required_successes.zip(allowed_failures),
            };
            let report = app.use_cases.encounter.execute(request)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_encounter(&report);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_review(review: &DraftReview) {
    let name = if review.name.trim().is_empty() {
        "(unnamed)"
    } else {
        review.name.as_str()
    };
    match review.step {
        Some(step) => println!("{name} - {step} step"),
        None => println!("{name}"),
    }

    let budgets = &review.budgets;
    println!(
        "  Ability points: {} of {} left",
        review.remaining_ability_points, budgets.ability_points
    );
    println!(
        "  Skill points:   {} of {} left ({} skills, {} defenses)",
        review.skills.remaining,
        review.skills.total + review.skills.bonus,
        review.skills.spend.skill_points,
        review.skills.spend.defense_points
    );
    println!("  Training points: {}", budgets.training_points);
    println!("  Health/energy pool: {}", budgets.health_energy_pool);

    if review.issues.is_empty() {
        println!("  No issues");
    }
    for issue in &review.issues {
        println!("  {issue}");
    }
}

fn print_encounter(report: &EncounterReport) {
    println!("Encounter {} (DS {})", report.encounter_id, report.difficulty_score);
    for participant in &report.participants {
        match (participant.roll, participant.outcome) {
            (Some(roll), Some(outcome)) => println!(
                "  {:<16} {:>4}  +{} / -{}",
                participant.name, roll.total, outcome.successes, outcome.failures
            ),
            _ => println!("  {:<16} pending", participant.name),
        }
    }
    println!(
        "Totals: {} success(es), {} failure(s)",
        report.totals.successes, report.totals.failures
    );
    if let Some(status) = report.status {
        println!("Status: {status:?}");
    }
}

use chrono::{Datelike, Local, NaiveDate, Weekday};
use clap::{Parser, Subcommand};
use globo_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "globo")]
#[command(about = "Daily workout reminder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Weekly program (ws4sb, basic-strength, dumbbell-stopgap)
    #[arg(long, global = true)]
    program: Option<String>,

    /// Override the weekday (mon..sun); defaults to today
    #[arg(long, global = true)]
    weekday: Option<String>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print today's workout without delivering it (default)
    Preview,

    /// Send today's workout as an HTML email
    Email {
        /// Sender address (xxx@gmail.com)
        #[arg(long)]
        username: String,

        /// App password for the sender account
        #[arg(long)]
        app_password: String,

        /// Comma-separated recipient addresses
        #[arg(long)]
        recipients: String,
    },

    /// Create a Todoist task with today's workout
    Todoist {
        /// API token; falls back to config, then TODOIST_API_TOKEN
        #[arg(long)]
        api_token: Option<String>,
    },
}

fn main() -> Result<()> {
    globo_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // "Today" is resolved exactly once, here.
    let today: NaiveDate = Local::now().date_naive();
    let weekday = match &cli.weekday {
        Some(day) => day
            .parse::<Weekday>()
            .map_err(|_| Error::Config(format!("unknown weekday '{}'", day)))?,
        None => today.weekday(),
    };

    let kind: ProgramKind = cli
        .program
        .as_deref()
        .unwrap_or(&config.program.default)
        .parse()?;

    let catalog = build_catalog()?;
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::Catalog("Invalid catalog".into()));
    }

    let program = WeeklyProgram::build(kind, &catalog, WeekCycle::from_date(today))?;
    tracing::debug!("Built program '{}' for {}", program.name(), weekday);

    match cli.command {
        Some(Commands::Email {
            username,
            app_password,
            recipients,
        }) => {
            let recipients: Vec<String> = recipients
                .split(',')
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .collect();
            if recipients.is_empty() {
                return Err(Error::Config("no recipients given".into()));
            }
            let sink = EmailSink::new(username, app_password, recipients, config.email.smtp_relay);
            report(dispatch(&program, weekday, today, &sink)?);
            Ok(())
        }

        Some(Commands::Todoist { api_token }) => {
            let token = api_token
                .or_else(|| config.todoist.api_token.clone())
                .or_else(|| std::env::var("TODOIST_API_TOKEN").ok())
                .ok_or_else(|| {
                    Error::Config(
                        "no Todoist API token (use --api-token, config, or TODOIST_API_TOKEN)"
                            .into(),
                    )
                })?;
            let sink = TodoistSink::new(token, config.todoist.api_url);
            report(dispatch(&program, weekday, today, &sink)?);
            Ok(())
        }

        Some(Commands::Preview) | None => cmd_preview(&program, weekday),
    }
}

fn cmd_preview(program: &WeeklyProgram, weekday: Weekday) -> Result<()> {
    match program.lookup(weekday) {
        Some(workout) => {
            println!("WORKOUT: {}\n", workout.name());
            println!("{}", workout.render(Markup::Markdown));
        }
        None => {
            println!("Rest day - no workout scheduled for {} in {}.", weekday, program.name());
        }
    }
    Ok(())
}

fn report(outcome: Outcome) {
    match outcome {
        Outcome::Delivered { workout } => println!("✓ Delivered workout '{}'", workout),
        Outcome::RestDay => println!("Rest day - nothing to deliver."),
    }
}

//! `salas` CLI — query the campus class-schedule calendar from the command
//! line.
//!
//! ## Usage
//!
//! ```sh
//! # All sessions of a course, chat-ready
//! salas course "2º CIÊNCIA DA COMPUTAÇÃO A"
//!
//! # Which rooms are free between 10:00 and 12:00 in one building
//! salas free-rooms --from 10:00 --to 12:00 --building "PRÉDIO QUATÁ 200"
//!
//! # Where two courses' schedules collide
//! salas compare "2º CIÊNCIA DA COMPUTAÇÃO A" "2º ENGENHARIA B"
//!
//! # Alternatives to an occupied room
//! salas suggest 513 --from 10:00 --to 11:00 --limit 3
//!
//! # Building-wide per-slot availability table, exported to output/
//! salas report --export
//!
//! # Work offline from a saved copy of the feed
//! salas --input calendario.xml report
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use salas_engine::{
    availability_by_slot, compare_courses, find_free_rooms, suggest_alternatives, ScheduleSet,
    TimeWindow,
};
use salas_feed::FeedConfig;

mod export;
mod report;

#[derive(Parser)]
#[command(name = "salas", version, about = "Campus room schedule queries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Calendar feed URL (defaults to the published campus calendar)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Read the calendar XML from a local file instead of the network
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Date to query, YYYY-MM-DD (defaults to today)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Fetch attempts before giving up
    #[arg(long, global = true, default_value_t = 3)]
    retries: u32,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 15)]
    timeout: u64,

    /// Log fetch/parse progress to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every session of a course, with a day summary
    Course {
        /// Course name as published in the calendar (case-insensitive)
        name: String,
    },
    /// List per-room free windows inside a time window
    FreeRooms {
        /// Window start, HH:MM
        #[arg(long)]
        from: String,
        /// Window end, HH:MM
        #[arg(long)]
        to: String,
        /// Restrict to one building
        #[arg(long)]
        building: Option<String>,
    },
    /// Compare two or more courses' schedules for conflicts
    Compare {
        /// Course names (at least two)
        #[arg(required = true, num_args = 1..)]
        courses: Vec<String>,
    },
    /// Suggest alternative rooms free during a window
    Suggest {
        /// The occupied room you wanted
        room: String,
        /// Window start, HH:MM
        #[arg(long)]
        from: String,
        /// Window end, HH:MM
        #[arg(long)]
        to: String,
        /// Maximum number of suggestions
        #[arg(long, default_value_t = 3)]
        limit: usize,
    },
    /// Building-wide availability table per 30-minute slot
    Report {
        /// Restrict to one building
        #[arg(long)]
        building: Option<String>,
        /// Also write JSON and CSV files
        #[arg(long)]
        export: bool,
        /// Directory for exported files
        #[arg(long, default_value = "output")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let schedule = load_schedule(&cli, date)?;

    match &cli.command {
        Commands::Course { name } => {
            let sessions = schedule.sessions_for_course(name);
            print!("{}", report::course_sessions(name, &sessions, date));
        }
        Commands::FreeRooms { from, to, building } => {
            let window = parse_window(from, to)?;
            let result = find_free_rooms(&schedule, window, building.as_deref(), None);
            print!("{}", report::availability(&result));
        }
        Commands::Compare { courses } => {
            let ids: Vec<&str> = courses.iter().map(String::as_str).collect();
            let conflict_report = compare_courses(&schedule, &ids)?;
            print!("{}", report::conflicts(&conflict_report, date));
        }
        Commands::Suggest {
            room,
            from,
            to,
            limit,
        } => {
            let window = parse_window(from, to)?;
            let suggestions = suggest_alternatives(&schedule, room, window, *limit)?;
            print!("{}", report::suggestions(room, window, &suggestions));
        }
        Commands::Report {
            building,
            export,
            out_dir,
        } => {
            let slots = availability_by_slot(&schedule, date, building.as_deref());
            print!("{}", report::slot_table(&slots, date));

            if *export {
                let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
                let json = export::write_json(&slots, date, out_dir, &timestamp)?;
                let csv = export::write_csv(&slots, date, out_dir, &timestamp)?;
                println!("✓ JSON salvo: {}", json.display());
                println!("✓ CSV salvo: {}", csv.display());
            }
        }
    }

    Ok(())
}

/// Materialize the day's schedule once; every engine query runs over this
/// immutable snapshot.
fn load_schedule(cli: &Cli, date: NaiveDate) -> Result<ScheduleSet> {
    if let Some(path) = &cli.input {
        info!(path = %path.display(), "reading calendar from local file");
        let xml = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read calendar file: {}", path.display()))?;
        let schedule =
            salas_feed::parse_schedule(&xml, date).context("failed to parse calendar XML")?;
        info!(sessions = schedule.len(), "schedule loaded");
        return Ok(schedule);
    }

    let mut config = FeedConfig {
        max_retries: cli.retries,
        timeout: std::time::Duration::from_secs(cli.timeout),
        ..FeedConfig::default()
    };
    if let Some(url) = &cli.url {
        config.url = url.clone();
    }

    let schedule =
        salas_feed::fetch_schedule(&config, date).context("failed to fetch the calendar feed")?;
    info!(sessions = schedule.len(), "schedule loaded");
    Ok(schedule)
}

fn parse_window(from: &str, to: &str) -> Result<TimeWindow> {
    let start = parse_time(from)?;
    let end = parse_time(to)?;
    Ok(TimeWindow::new(start, end)?)
}

fn parse_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .with_context(|| format!("invalid time {raw:?}, expected HH:MM"))
}

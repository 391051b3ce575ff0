mod config;
mod error;

use std::io::{self, Write};
use std::path::PathBuf;

use calendar::{
    Clock, Period, SystemClock, day_window, format_event_line, quarter_of_month, render_day,
    render_month, render_quarter, render_week, render_year, week_start, week_window,
};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use storage::timestamp::{self, TIMESTAMP_FORMAT};
use storage::{Event, EventStore};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::{Config, DB_ENV, default_config_path, home_dir};
use error::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const LOG_ENV: &str = "TCAL_LOG";

#[derive(Parser)]
#[command(name = "tcal")]
#[command(about = "View and manage your calendar from the command line", long_about = None)]
#[command(version)]
struct Cli {
    /// Events database (overrides TCAL_DB and the config file)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Config file [default: ~/.tcal/config.toml]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// View the calendar by period
    View(ViewArgs),
    /// Add an event
    Add(AddArgs),
}

#[derive(clap::Args, Debug)]
struct ViewArgs {
    /// Period to view: day, week, month, quarter or year
    #[arg(default_value_t = Period::Month)]
    period: Period,
    /// Year [default: current]
    #[arg(long)]
    year: Option<i32>,
    /// Month 1-12 [default: current]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,
    /// Date for day and week views, YYYY-MM-DD [default: today]
    #[arg(long)]
    date: Option<String>,
}

#[derive(clap::Args, Debug)]
struct AddArgs {
    /// What the event is
    description: String,
    /// Start time, YYYY-MM-DDTHH:MM
    #[arg(long)]
    start: String,
    /// End time, YYYY-MM-DDTHH:MM
    #[arg(long)]
    end: String,
    /// Category label (omit for uncategorized)
    #[arg(short, long, default_value = "")]
    category: String,
}

/// Where to find the events database, resolved only when a command needs it.
struct StoreLocation {
    db: Option<PathBuf>,
    config: Option<PathBuf>,
}

impl StoreLocation {
    fn open(&self) -> Result<EventStore> {
        let home = home_dir();
        let config = match (&self.config, &home) {
            (Some(path), _) => Config::load(path)?,
            (None, Some(home)) => Config::load_or_default(default_config_path(home))?,
            (None, None) => Config::default(),
        };
        let env = std::env::var_os(DB_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let path = config.db_path(self.db.clone(), env, home.as_deref())?;
        debug!(path = %path.display(), "resolved events database");
        Ok(EventStore::open(path))
    }
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let location = StoreLocation {
        db: cli.db,
        config: cli.config,
    };
    let clock = SystemClock;

    let lines = match cli.command {
        Commands::View(args) => cmd_view(&location, &clock, &args)?,
        Commands::Add(args) => cmd_add(&location.open()?, &args)?,
    };

    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn cmd_view(location: &StoreLocation, clock: &dyn Clock, args: &ViewArgs) -> Result<Vec<String>> {
    let now = clock.now();
    let year = args.year.unwrap_or(now.year());
    let month = args.month.unwrap_or(now.month());
    let date = match &args.date {
        Some(value) => parse_date(value)?,
        None => now.date(),
    };
    debug!(period = %args.period, year, month, %date, "rendering view");

    match args.period {
        Period::Day => view_day(&location.open()?, date),
        Period::Week => view_week(&location.open()?, date),
        Period::Month => view_month(year, month, clock.today()),
        Period::Quarter => view_quarter(year, month),
        Period::Year => Ok(view_year(year)),
    }
}

fn view_day(store: &EventStore, date: NaiveDate) -> Result<Vec<String>> {
    let (start, end) = day_window(date)?;
    let events = store.query_overlap(start, end)?;
    Ok(render_day(date, &events))
}

fn view_week(store: &EventStore, date: NaiveDate) -> Result<Vec<String>> {
    let sunday = week_start(date)?;
    let (start, end) = week_window(sunday)?;
    let events = store.query_overlap(start, end)?;
    Ok(render_week(sunday, sunday.year(), &events)?)
}

fn view_month(year: i32, month: u32, today: NaiveDate) -> Result<Vec<String>> {
    Ok(render_month(year, month, today)?)
}

fn view_quarter(year: i32, month: u32) -> Result<Vec<String>> {
    Ok(render_quarter(year, quarter_of_month(month)?)?)
}

fn view_year(year: i32) -> Vec<String> {
    render_year(year)
}

fn cmd_add(store: &EventStore, args: &AddArgs) -> Result<Vec<String>> {
    let event = build_event(args)?;
    store.add(&event)?;
    debug!(start = %event.start, end = %event.end, "added event");

    let line = format_event_line(&event);
    Ok(vec![format!(
        "Added: {} {}",
        event.start.format(DATE_FORMAT),
        line.trim_start()
    )])
}

fn build_event(args: &AddArgs) -> Result<Event> {
    let start = parse_timestamp("start", &args.start)?;
    let end = parse_timestamp("end", &args.end)?;
    if end <= start {
        return Err(Error::InvalidRange);
    }
    if args.description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }
    Ok(Event::new(
        args.description.as_str(),
        args.category.as_str(),
        start,
        end,
    ))
}

/// Parse `YYYY-MM-DD`. Years outside 0000-9999 are refused because the
/// store cannot query them.
fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| (timestamp::MIN_YEAR..=timestamp::MAX_YEAR).contains(&date.year()))
        .ok_or_else(|| Error::InvalidDate(value.to_string()))
}

fn parse_timestamp(flag: &'static str, value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .ok()
        .filter(timestamp::is_supported)
        .ok_or_else(|| Error::InvalidTimestamp {
            flag,
            value: value.to_string(),
        })
}

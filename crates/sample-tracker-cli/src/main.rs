use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sample_tracker_cli::{
    bundled_samples, check_records, load_fixture, render_dashboard, Config, MockGenerator,
};
use sample_tracker_core::{Dashboard, Sample, SortKey, SortOrder, StatusFilter};

#[derive(Parser, Debug)]
#[command(
    name = "sample-tracker",
    version,
    about = "Laboratory sample tracking dashboard",
    long_about = "List, search, filter and sort laboratory samples from a JSON fixture.\n\nExamples:\n  sample-tracker list -q blood --status Pending\n  sample-tracker list --sort collectedOn --order desc -p 2\n  sample-tracker -f lab.json check"
)]
struct Cli {
    #[arg(
        short = 'C',
        long,
        global = true,
        value_name = "FILE",
        help = "JSON config file."
    )]
    config: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        global = true,
        value_name = "FILE",
        help = "Sample fixture (JSON array). Defaults to the bundled data."
    )]
    fixture: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_name = "COUNT",
        conflicts_with = "fixture",
        help = "Use COUNT generated samples instead of a fixture."
    )]
    mock: Option<usize>,

    #[arg(
        short = 'v',
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v, -vv)."
    )]
    verbose: u8,

    #[arg(long, global = true, help = "Disable colored output.")]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show one page of the sample list.
    List(ListArgs),
    /// Report fixture records the form would reject.
    Check,
    /// Print the loaded records as JSON.
    Export,
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(short, long, default_value = "", help = "Case-insensitive name search.")]
    query: String,

    #[arg(short, long, default_value = "All", help = "All, Pending, Processing or Completed.")]
    status: StatusFilter,

    #[arg(long, help = "Sort column: name or collectedOn.")]
    sort: Option<SortKey>,

    #[arg(long, help = "Sort direction: asc or desc.")]
    order: Option<SortOrder>,

    #[arg(short, long, default_value_t = 1, help = "1-based page number.")]
    page: usize,

    #[arg(long, help = "Render with the dark theme.")]
    dark: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(fixture) = &cli.fixture {
        config.fixture = Some(fixture.clone());
    }

    init_tracing(&config.log_level, cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }
    debug!(?config, "configuration resolved");

    let records = load_records(&config, cli.mock)?;

    match cli.command {
        Command::List(args) => run_list(&config, records, args),
        Command::Check => run_check(&records),
        Command::Export => {
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        }
    }
}

fn init_tracing(level: &str, verbose: u8) {
    let default = match verbose {
        0 => level.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_records(config: &Config, mock: Option<usize>) -> Result<Vec<Sample>> {
    if let Some(count) = mock {
        info!(count, "using generated samples");
        return Ok(MockGenerator::generate(count, Local::now().date_naive()));
    }
    match &config.fixture {
        Some(path) => {
            load_fixture(path).with_context(|| format!("loading fixture {}", path.display()))
        }
        None => bundled_samples().context("parsing bundled samples"),
    }
}

fn run_list(config: &Config, records: Vec<Sample>, args: ListArgs) -> Result<()> {
    let mut dashboard = Dashboard::new(&config.dashboard, records);
    if args.dark && !dashboard.theme().is_dark() {
        dashboard.toggle_theme();
    }

    dashboard.set_query(args.query);
    dashboard.set_status_filter(args.status);
    if let Some(key) = args.sort {
        dashboard.set_sort_key(key);
    }
    if let Some(order) = args.order {
        dashboard.set_sort_order(order);
    }
    dashboard.go_to_page(args.page);

    let view = dashboard.view();
    println!(
        "{}",
        render_dashboard(&view, dashboard.options(), dashboard.theme())
    );
    Ok(())
}

fn run_check(records: &[Sample]) -> Result<()> {
    let issues = check_records(records, Local::now().date_naive());
    if issues.is_empty() {
        println!("{} samples OK", records.len());
        return Ok(());
    }
    for issue in &issues {
        println!("{}: {}", issue.id, issue.problem);
    }
    bail!("{} of {} samples failed validation", issues.len(), records.len())
}

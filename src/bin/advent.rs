use std::path::PathBuf;

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "advent", version)]
struct Cli {
    /// Log engine decisions to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a generated layout as JSON.
    Layout(LayoutArgs),
    /// Print each door's lock state and opening message.
    Status(StatusArgs),
    /// Print the page meta for a route as JSON.
    Meta(MetaArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Viewport width in pixels.
    #[arg(long)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long)]
    height: u32,

    /// Seed for a reproducible layout. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct StatusArgs {
    /// Calendar config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Evaluate as of this date (YYYY-MM-DD) instead of today.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Treat every door as unlocked.
    #[arg(long, default_value_t = false)]
    unlock_all: bool,
}

#[derive(Parser, Debug)]
struct MetaArgs {
    /// Calendar config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Route path, e.g. `/day/3`.
    #[arg(long, default_value = "/")]
    route: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Status(args) => cmd_status(args),
        Command::Meta(args) => cmd_meta(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<advent_calendar::CalendarConfig> {
    match path {
        Some(p) => advent_calendar::CalendarConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(advent_calendar::CalendarConfig::default()),
    }
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let viewport = advent_calendar::Viewport::new(args.width, args.height)?;
    let mut rng = match args.seed {
        Some(seed) => advent_calendar::LayoutRng::from_seed_u64(seed),
        None => advent_calendar::LayoutRng::from_entropy(),
    };
    let layout = advent_calendar::generate(viewport, &mut rng)?;
    let json = serde_json::to_string_pretty(&layout).context("serialize layout")?;
    println!("{json}");
    Ok(())
}

fn cmd_status(args: StatusArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let policy =
        advent_calendar::UnlockPolicy::from_config(&cfg).with_unlock_all(cfg.unlock_all || args.unlock_all);
    let today = args
        .today
        .unwrap_or_else(|| advent_calendar::Clock::today(&advent_calendar::SystemClock));

    for day in advent_calendar::DayNumber::all() {
        if policy.can_open_on(day, today) {
            println!("day {day:>2}  open");
        } else {
            println!(
                "day {day:>2}  locked  {}",
                policy.opening_date_message(day, today)
            );
        }
    }
    Ok(())
}

fn cmd_meta(args: MetaArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let route = advent_calendar::Route::parse(&args.route);
    let registry = advent_calendar::ContentRegistry::builtin();
    let meta = advent_calendar::PageMeta::for_route(&route, &registry, cfg.base_url());
    let json = serde_json::to_string_pretty(&meta).context("serialize meta")?;
    println!("{json}");
    Ok(())
}

use anyhow::Context;
use bazaar::prepare_catalog;
use clap::Parser;
use planner::{initialize_logging, run, ConfigArgs, Session, HELP};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = args.config.planner_config()?;
    info!(num_slots = config.num_slots, catalog = ?config.catalog, "Starting planner");

    let items = config
        .item_source()
        .fetch_items(&config.item_query())
        .context("Could not load the item catalog")?;
    let catalog = prepare_catalog(items)?;
    info!("Catalog has {} items", catalog.len());

    let mut session = Session::new(config.num_slots, catalog);
    println!("{}", HELP);
    run(&mut session, std::io::stdin().lock(), std::io::stdout().lock())
}

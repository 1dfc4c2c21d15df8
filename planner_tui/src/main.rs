use std::io::{self, stdout};
use std::path::PathBuf;

use anyhow::Context;
use bazaar::prepare_catalog;
use clap::Parser;
use planner::{initialize_file_logging, ConfigArgs};
use ratatui::{
    crossterm::{
        event::{self, Event},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

mod app;
mod ui;

use app::App;

#[derive(Parser)]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,

    /// Write logs to this file. Without it nothing is logged
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        initialize_file_logging(args.log_level, path)?;
    }

    // Load everything before taking over the terminal, so errors stay readable
    let config = args.config.planner_config()?;
    let items = config
        .item_source()
        .fetch_items(&config.item_query())
        .context("Could not load the item catalog")?;
    let catalog = prepare_catalog(items)?;
    info!(num_slots = config.num_slots, "Catalog has {} items", catalog.len());

    let mut app = App::new(config.num_slots, catalog);

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let result = run(&mut app);
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(result?)
}

fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    while !app.should_quit {
        terminal.draw(|frame| ui::ui(app, frame))?;
        handle_events(app)?;
    }
    Ok(())
}

fn handle_events(app: &mut App) -> io::Result<()> {
    if event::poll(std::time::Duration::from_millis(16))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == event::KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}

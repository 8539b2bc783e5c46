use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use petri_lib::app::App;
use petri_lib::model::config::AppConfig;
use petri_lib::model::run::{Directive, RunController};
use petri_lib::ui::tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulator in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the configured number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override the configured number of grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Generation bound for headless runs
    #[arg(long, default_value_t = 10_000)]
    max_generations: u64,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let mut config = AppConfig::load(&args.config);
    if let Some(rows) = args.rows {
        config.grid.rows = rows;
    }
    if let Some(columns) = args.columns {
        config.grid.columns = columns;
    }

    match args.mode {
        Mode::Headless => run_headless(&config, args.max_generations)?,
        Mode::Standard => {
            let mut tui = Tui::new()?;
            tui.enter()?;

            let mut app = App::new(config)?;
            let res = app.run(&mut tui).await;

            tui.restore()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            }
        }
    }

    Ok(())
}

/// Drives the controller without a terminal UI until a terminal state or
/// the generation bound, then prints the stop reason.
fn run_headless(config: &AppConfig, max_generations: u64) -> Result<()> {
    println!("Running in HEADLESS mode...");
    let mut controller = RunController::new(config)?;
    controller.start();

    while controller.generation() < max_generations {
        if controller.advance() == Directive::Halt {
            break;
        }
    }

    for event in controller.drain_events() {
        if let Some(text) = event.notice() {
            println!("{text}");
        }
    }
    println!(
        "Headless run finished after {} generations ({:?}).",
        controller.generation(),
        controller.state(),
    );
    Ok(())
}

fn init_tracing() -> Result<()> {
    std::fs::create_dir_all("logs")?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("logs/petri.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

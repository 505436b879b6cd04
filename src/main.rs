#![warn(clippy::all)]

use clap::Parser;
use conway_grid::{positive, prompt_positive, App, Config, Grid, HostError};
use std::{io, path::PathBuf, time::Duration};

/// Conway's Game of Life on a bounded square grid
#[derive(Parser, Debug)]
#[command(name = "conway_grid")]
struct Args {
    /// Number of rows and columns (asked for on stdin when omitted)
    #[arg(long)]
    dimension: Option<usize>,

    /// Delay between generations in milliseconds (asked for on stdin when omitted)
    #[arg(long)]
    delay: Option<u64>,

    /// Random seed for a reproducible initial field
    #[arg(long)]
    seed: Option<u64>,

    /// RLE pattern file to start from instead of a random field
    #[arg(long)]
    pattern: Option<PathBuf>,
}

fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    run(Args::parse()).inspect_err(|e| tracing::error!("{e}"))
}

fn run(args: Args) -> Result<(), HostError> {
    let (mut stdin, mut stdout) = (io::stdin().lock(), io::stdout());
    let dimension = match args.dimension {
        Some(x) => positive(x, "dimension")?,
        None => prompt_positive(
            &mut stdin,
            &mut stdout,
            "Number of rows and columns: ",
            Config::DEFAULT_DIMENSION,
        )?,
    };
    let delay_ms = match args.delay {
        Some(x) => positive(x, "delay")?,
        None => prompt_positive(
            &mut stdin,
            &mut stdout,
            "Delay between cycles (ms): ",
            Config::DEFAULT_DELAY_MS,
        )?,
    };
    drop(stdin);

    let grid = if let Some(path) = &args.pattern {
        let data = std::fs::read(path)?;
        Grid::from_rle(dimension, &data)?
    } else {
        Grid::random(dimension, args.seed)?
    };
    tracing::info!(
        dimension,
        delay_ms,
        seed = ?args.seed,
        pattern = ?args.pattern,
        population = grid.population(),
        "starting Life"
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(Config::window_size(dimension))
            .with_title(Config::WINDOW_TITLE),
        ..Default::default()
    };
    let delay = Duration::from_millis(delay_ms);
    eframe::run_native(
        Config::WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, grid, delay)))),
    )?;

    tracing::info!("window closed");
    Ok(())
}

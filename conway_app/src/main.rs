// main.rs - Desktop host for the Game of Life history engine
// The background clock runs on a tokio runtime; egui draws and feeds input.

use std::time::Duration;

use anyhow::{Context as _, anyhow};
use clap::Parser;
use conway::{Engine, EngineConfig, patterns, spawn_ticker};
use eframe::egui;
use egui::Color32;
use tokio::task::JoinHandle;

mod ui;

/// Conway's Game of Life with a navigable generation history.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Generations kept for prev/next navigation
    #[arg(long, default_value_t = conway::config::DEFAULT_HISTORY_CAPACITY)]
    history: usize,

    /// Pixel size of one cell
    #[arg(long, default_value_t = conway::config::DEFAULT_CELL_SIZE)]
    cell_size: usize,

    /// Initial drawing area width in pixels
    #[arg(long, default_value_t = conway::config::DEFAULT_WIDTH_PX)]
    width: usize,

    /// Initial drawing area height in pixels
    #[arg(long, default_value_t = conway::config::DEFAULT_HEIGHT_PX)]
    height: usize,

    /// Milliseconds between generations
    #[arg(long, default_value_t = conway::config::DEFAULT_TICK_INTERVAL.as_millis() as u64)]
    tick_ms: u64,

    /// Pattern to start from
    #[arg(long)]
    pattern: Option<String>,

    /// Start the simulation right away
    #[arg(long)]
    run: bool,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            history_capacity : self.history,
            width_px         : self.width,
            height_px        : self.height,
            cell_size        : self.cell_size,
            tick_interval    : Duration::from_millis(self.tick_ms),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.engine_config();
    let engine = Engine::new(&config).context("invalid engine configuration")?;

    if let Some(name) = &args.pattern {
        let pattern = patterns::find(name).ok_or_else(|| anyhow!("unknown pattern {:?}", name))?;
        engine.apply_pattern(pattern);
    }
    engine.set_running(args.run);

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width_px as f32 + 180.0, config.height_px as f32 + 60.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(ConwayApp::new(cc, engine, runtime, &config))),
    )
    .map_err(|e| anyhow!("{}", e))
}

/// Host state. The engine owns all simulation state; this only keeps what
/// the window needs.
pub struct ConwayApp {
    pub engine: Engine,
    pub cell_size: usize,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub seed: u64,
    /// Last cell painted during the current drag.
    pub last_painted: Option<(usize, usize)>,

    ticker: JoinHandle<()>,
    // Keeps the ticker's runtime alive for the lifetime of the window.
    _runtime: tokio::runtime::Runtime,
}

impl ConwayApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        engine: Engine,
        runtime: tokio::runtime::Runtime,
        config: &EngineConfig,
    ) -> Self {
        let ctx = cc.egui_ctx.clone();
        let ticker = {
            let _guard = runtime.enter();
            spawn_ticker(engine.clone(), config.tick_interval, move |_| ctx.request_repaint())
        };

        Self {
            engine,
            cell_size: config.cell_size,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            selected_pattern: 0,
            seed: 0,
            last_painted: None,
            ticker,
            _runtime: runtime,
        }
    }
}

impl Drop for ConwayApp {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}

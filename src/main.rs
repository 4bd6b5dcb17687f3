//! gridpulse headless driver.
//!
//! Plays the part of the external frame driver and input adapter for the
//! simulation core: it calls [`Engine::tick`] at a fixed display rate with a
//! synthetic clock, forwards held signals and recorded input traces, then
//! prints the final grid and status.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --grid-extent 8 --hold Right --frames 120
//! cargo run --release -- --trace inputs.json --json
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bevy_ecs::observer::On;
use clap::Parser;
use gridpulse::engine::Engine;
use gridpulse::events::frameready::FrameReadyEvent;
use gridpulse::resources::gameconfig::GameConfig;
use gridpulse::trace::InputTrace;
use log::{debug, info, warn};

/// Safety stop when the driver rate cannot produce the requested frames.
const MAX_CALLBACKS_PER_FRAME: u64 = 1000;

/// gridpulse headless simulation driver
#[derive(Parser)]
#[command(version, about = "Drives the gridpulse simulation core without a window.")]
struct Cli {
    /// INI configuration file (default: ./config.ini, missing file means defaults).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Logical steps per second, overrides the config file.
    #[arg(long)]
    fps: Option<u32>,

    /// World grid side length in cells, overrides the config file.
    #[arg(long, value_name = "CELLS")]
    grid_extent: Option<i32>,

    /// Number of logical frames to simulate.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Rate of external frame callbacks in Hz.
    #[arg(long, default_value_t = 144.0)]
    driver_hz: f64,

    /// Signal held for the whole run (repeatable).
    #[arg(long = "hold", value_name = "SIGNAL")]
    hold: Vec<String>,

    /// JSON input trace to replay.
    #[arg(long, value_name = "PATH")]
    trace: Option<PathBuf>,

    /// Enable debug output (logs the status line every step).
    #[arg(long)]
    debug: bool,

    /// Print the final snapshot as JSON instead of the grid.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        if cli.config.is_some() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        debug!("No config file, using defaults: {}", e);
    }
    if let Some(fps) = cli.fps {
        config.fps = fps;
    }
    if let Some(extent) = cli.grid_extent {
        config.grid_extent = extent;
    }
    config.debug |= cli.debug;

    let mut trace = match &cli.trace {
        Some(path) => match InputTrace::load_from_file(path) {
            Ok(trace) => trace,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => InputTrace::default(),
    };

    if cli.driver_hz <= 0.0 {
        eprintln!("Error: --driver-hz must be positive");
        std::process::exit(1);
    }

    let mut engine = match Engine::new(config.engine_config()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    if config.debug {
        engine.toggle_debug();
    }

    let frames_seen = Arc::new(AtomicU64::new(0));
    let frames_seen_observer = frames_seen.clone();
    engine
        .world_mut()
        .add_observer(move |_trigger: On<FrameReadyEvent>| {
            frames_seen_observer.fetch_add(1, Ordering::Relaxed);
        });
    engine.world_mut().flush();

    if let Err(e) = engine.start(0.0) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    for signal in &cli.hold {
        engine.set_signal(signal, true);
    }
    info!(
        "Driving {} frames at {} Hz ({} trace events)",
        cli.frames,
        cli.driver_hz,
        trace.len()
    );

    let callback_ms = 1000.0 / cli.driver_hz;
    let max_callbacks = cli.frames.saturating_mul(MAX_CALLBACKS_PER_FRAME).max(1);
    let mut callbacks: u64 = 0;
    while frames_seen.load(Ordering::Relaxed) < cli.frames {
        callbacks += 1;
        if callbacks > max_callbacks {
            warn!("Gave up after {} frame callbacks", max_callbacks);
            break;
        }
        let now = callbacks as f64 * callback_ms;
        trace.apply_until(&mut engine, now);
        if engine.tick(now) && engine.is_debug() {
            info!("{}", engine.status());
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&engine.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(grid) = engine.grid() {
        for row in grid.render() {
            println!("{row}");
        }
    }
    if let Some(player) = engine.player() {
        println!(
            "Player at ({:.4}, {:.4}) velocity ({:.4}, {:.4}) direction ({}, {})",
            player.position.x,
            player.position.y,
            player.velocity.dx,
            player.velocity.dy,
            player.direction.dx,
            player.direction.dy
        );
    }
    println!("{}", engine.status());
}

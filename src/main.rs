//! Asteroid game entry point.
//!
//! A 2D arcade game written in Rust using:
//! - **bevy_ecs** for entities, components and the per-frame system schedule
//! - **raylib** for windowing, input and sprite drawing (feature `raylib`)
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing) and build the simulation
//! 2. Each frame: poll events and the pointer, measure the frame delta,
//!    advance the simulation, draw the sprite table
//! 3. Stop when a quit event is observed
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features raylib
//! cargo run --release -- --headless 600
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use asteroidgame::components::collisiontag::CollisionTag;
use asteroidgame::game::Simulation;
use asteroidgame::resources::gameconfig::GameConfig;
use asteroidgame::resources::spawnrng::SpawnRng;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

/// Asteroid game
#[derive(Parser)]
#[command(version, about = "Fly, shoot, and dodge asteroids.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for asteroid spawn placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many frames without a window and exit.
    #[arg(long, value_name = "FRAMES")]
    headless: Option<u64>,

    /// Fixed frame delta in seconds for headless runs.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    let rng = cli.seed.map(SpawnRng::with_seed).unwrap_or_default();
    let mut simulation = Simulation::new(config.clone(), rng);

    let result = match cli.headless {
        Some(frames) => {
            run_headless(&mut simulation, &config, frames, cli.dt);
            Ok(())
        }
        None => run_windowed(&mut simulation, &config),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Advance `frames` frames of `dt` with no input and the pointer parked at
/// the screen center.
fn run_headless(simulation: &mut Simulation, config: &GameConfig, frames: u64, dt: f32) {
    let (w, h) = config.screen_size();
    let pointer = (w / 2.0, h / 2.0);
    let report_every = ((1.0 / dt).round() as u64).max(1);

    for frame in 1..=frames {
        simulation.advance(dt, Vec::new(), pointer);
        if frame % report_every == 0 {
            info!(
                "t={:.2}s asteroids={} bullets={} player_alive={}",
                simulation.time().elapsed,
                simulation.tagged(CollisionTag::Asteroid).len(),
                simulation.tagged(CollisionTag::Bullet).len(),
                simulation.player_alive()
            );
        }
    }
    info!(
        "Headless run finished after {} frames ({:.2}s)",
        frames,
        simulation.time().elapsed
    );
}

#[cfg(feature = "raylib")]
fn run_windowed(simulation: &mut Simulation, config: &GameConfig) -> Result<(), String> {
    use asteroidgame::backend::RaylibBackend;

    let mut backend = RaylibBackend::new(config)?;
    loop {
        let events = backend.poll_events();
        let pointer = backend.pointer_position();
        let dt = backend.frame_time();

        simulation.advance(dt, events, pointer);
        backend.draw(&simulation.sprites());

        if simulation.quit_requested() {
            break;
        }
    }
    info!("Bye!");
    Ok(())
}

#[cfg(not(feature = "raylib"))]
fn run_windowed(_simulation: &mut Simulation, _config: &GameConfig) -> Result<(), String> {
    Err("Built without the `raylib` feature; rebuild with --features raylib or pass --headless <FRAMES>".to_string())
}

//! Game configuration resource.
//!
//! Holds the window settings, the gameplay tuning constants read by the
//! systems, and the texture paths handed to the backend. Values come from an
//! INI file; every key is optional and falls back to the defaults below.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 720
//! height = 480
//! target_fps = 120
//! title = AsteroidGame
//!
//! [player]
//! accel_speed = 600
//! drag = 0.5
//! run_speed = 200
//! boost_speed = 200
//!
//! [bullet]
//! speed = 700
//! lifespan = 1.0
//! width = 14
//! height = 11
//!
//! [asteroid]
//! speed = 200
//! lifespan = 5.0
//!
//! [assets]
//! player = assets/player.png
//! bullet = assets/bullet.png
//! asteroid = assets/asteroid.png
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 720;
const DEFAULT_WINDOW_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_TITLE: &str = "AsteroidGame";
const DEFAULT_ACCEL_SPEED: f32 = 600.0;
const DEFAULT_DRAG: f32 = 0.5;
const DEFAULT_RUN_SPEED: f32 = 200.0;
const DEFAULT_BOOST_SPEED: f32 = 200.0;
const DEFAULT_BULLET_SPEED: f32 = 700.0;
const DEFAULT_BULLET_LIFESPAN: f32 = 1.0;
const DEFAULT_BULLET_WIDTH: f32 = 14.0;
const DEFAULT_BULLET_HEIGHT: f32 = 11.0;
const DEFAULT_ASTEROID_SPEED: f32 = 200.0;
const DEFAULT_ASTEROID_LIFESPAN: f32 = 5.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window (and playfield) width in pixels.
    pub window_width: u32,
    /// Window (and playfield) height in pixels.
    pub window_height: u32,
    /// Target frames per second for the windowed loop.
    pub target_fps: u32,
    pub title: String,
    /// Velocity-mode acceleration per unit of controller axis.
    pub accel_speed: f32,
    /// Velocity-mode drag, fraction kept per second.
    pub drag: f32,
    /// Movement-mode speed while shift is held.
    pub run_speed: f32,
    /// Velocity magnitude given on shift release.
    pub boost_speed: f32,
    pub bullet_speed: f32,
    pub bullet_lifespan: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    /// Traversal speed of spawned asteroids.
    pub asteroid_speed: f32,
    /// Auto-expiry of spawned asteroids, in seconds.
    pub asteroid_lifespan: f32,
    pub player_texture: PathBuf,
    pub bullet_texture: PathBuf,
    pub asteroid_texture: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            accel_speed: DEFAULT_ACCEL_SPEED,
            drag: DEFAULT_DRAG,
            run_speed: DEFAULT_RUN_SPEED,
            boost_speed: DEFAULT_BOOST_SPEED,
            bullet_speed: DEFAULT_BULLET_SPEED,
            bullet_lifespan: DEFAULT_BULLET_LIFESPAN,
            bullet_width: DEFAULT_BULLET_WIDTH,
            bullet_height: DEFAULT_BULLET_HEIGHT,
            asteroid_speed: DEFAULT_ASTEROID_SPEED,
            asteroid_lifespan: DEFAULT_ASTEROID_LIFESPAN,
            player_texture: PathBuf::from("assets/player.png"),
            bullet_texture: PathBuf::from("assets/bullet.png"),
            asteroid_texture: PathBuf::from("assets/asteroid.png"),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        info!("Loaded config from {:?}", self.config_path);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        read_uint(config, "window", "width", &mut self.window_width);
        read_uint(config, "window", "height", &mut self.window_height);
        read_uint(config, "window", "target_fps", &mut self.target_fps);
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [player] section
        read_float(config, "player", "accel_speed", &mut self.accel_speed);
        read_float(config, "player", "drag", &mut self.drag);
        read_float(config, "player", "run_speed", &mut self.run_speed);
        read_float(config, "player", "boost_speed", &mut self.boost_speed);
        if !(self.drag > 0.0 && self.drag <= 1.0) {
            warn!("player.drag must be in (0, 1], got {}; using default", self.drag);
            self.drag = DEFAULT_DRAG;
        }

        // [bullet] section
        read_float(config, "bullet", "speed", &mut self.bullet_speed);
        read_float(config, "bullet", "lifespan", &mut self.bullet_lifespan);
        read_float(config, "bullet", "width", &mut self.bullet_width);
        read_float(config, "bullet", "height", &mut self.bullet_height);

        // [asteroid] section
        read_float(config, "asteroid", "speed", &mut self.asteroid_speed);
        read_float(config, "asteroid", "lifespan", &mut self.asteroid_lifespan);

        // [assets] section
        if let Some(path) = config.get("assets", "player") {
            self.player_texture = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "bullet") {
            self.bullet_texture = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "asteroid") {
            self.asteroid_texture = PathBuf::from(path);
        }

        info!(
            "Config: {}x{} window, fps={}, accel={}, drag={}, run={}, boost={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.accel_speed,
            self.drag,
            self.run_speed,
            self.boost_speed
        );
    }

    /// Window size as floats, which is also the playfield size.
    pub fn screen_size(&self) -> (f32, f32) {
        (self.window_width as f32, self.window_height as f32)
    }
}

fn read_uint(config: &Ini, section: &str, key: &str, target: &mut u32) {
    match config.getuint(section, key) {
        Ok(Some(value)) => match u32::try_from(value) {
            Ok(value) => *target = value,
            Err(_) => warn!("Ignoring [{}] {}: {} is out of range", section, key, value),
        },
        Ok(None) => {}
        Err(e) => warn!("Ignoring [{}] {}: {}", section, key, e),
    }
}

fn read_float(config: &Ini, section: &str, key: &str, target: &mut f32) {
    match config.getfloat(section, key) {
        Ok(Some(value)) => *target = value as f32,
        Ok(None) => {}
        Err(e) => warn!("Ignoring [{}] {}: {}", section, key, e),
    }
}

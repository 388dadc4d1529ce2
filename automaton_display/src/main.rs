// main.rs - Cellular automaton simulation window
// Drives a grid_engine::Grid from an egui frame loop

use eframe::egui;
use grid_engine::{AutomatonType, Grid, GridError, PATTERNS};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};

mod config;   // Compile-time defaults and speed mapping
mod ui;       // eframe::App impl

use config::DisplayConfig;

const DEFAULT_LOG_FILTER: &str = "automaton_display=info,grid_engine=info";

/// `RUST_LOG` when set and valid, otherwise info for both crates.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_logging() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    fmt().with_env_filter(log_filter(rust_log.as_deref())).init();
}

fn main() -> Result<(), eframe::Error> {
    init_logging();

    let config = DisplayConfig::default();
    let app = match AutomatonApp::new(config.clone()) {
        Ok(app) => app,
        Err(err) => {
            error!(%err, "could not create grid");
            std::process::exit(1);
        }
    };
    info!(width = config.grid_width, height = config.grid_height, "starting simulation window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Cellular Automaton Simulation",
        options,
        Box::new(|_cc| Box::new(app)),
    )
}

/// Window state: the grid plus everything the engine deliberately leaves to
/// its caller (pause flag, timer, speed, pattern selection).
pub struct AutomatonApp {
    pub grid: Grid,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub speed: u32,
    pub selected_pattern: usize,
    pub canvas_size: [f32; 2],
}

impl AutomatonApp {
    pub fn new(config: DisplayConfig) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(config.grid_width, config.grid_height)?,
            is_running: false,
            last_update: Instant::now(),
            update_interval: config.initial_interval,
            speed: config::SPEED_MIN,
            selected_pattern: 0,
            canvas_size: config.canvas_size,
        })
    }
}

/// Actions bound to the window's controls.
pub trait SimulationControls {
    fn tick(&mut self, now: Instant) -> bool;
    fn step_once(&mut self);
    fn run(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
    fn clear(&mut self);
    fn randomize(&mut self);
    fn apply_selected_pattern(&mut self);
    fn select_type(&mut self, automaton: AutomatonType);
    fn set_speed(&mut self, speed: u32);
    fn press_canvas(&mut self, x: f32, y: f32);
}

impl SimulationControls for AutomatonApp {
    /// Steps once if running and the interval has elapsed since the last
    /// tick. Returns whether a step happened.
    fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running || now.duration_since(self.last_update) < self.update_interval {
            return false;
        }
        self.last_update = now;
        self.grid.step();
        true
    }

    fn step_once(&mut self) {
        self.grid.step();
    }

    fn run(&mut self) {
        if !self.is_running {
            debug!("run");
            self.is_running = true;
            self.last_update = Instant::now();
        }
    }

    fn pause(&mut self) {
        self.is_running = false;
    }

    fn stop(&mut self) {
        self.pause();
        self.grid.reset();
    }

    fn clear(&mut self) {
        self.pause();
        self.grid.clear();
    }

    fn randomize(&mut self) {
        self.pause();
        self.grid.randomize();
    }

    fn apply_selected_pattern(&mut self) {
        self.pause();
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            self.grid.apply_pattern(pattern);
        }
    }

    /// Ignored while running; the selector is disabled then anyway.
    fn select_type(&mut self, automaton: AutomatonType) {
        if !self.is_running {
            self.grid.set_automaton_type(automaton);
        }
    }

    fn set_speed(&mut self, speed: u32) {
        self.speed = speed.clamp(config::SPEED_MIN, config::SPEED_MAX);
        self.update_interval = config::interval_for_speed(self.speed);
        debug!(speed = self.speed, interval_ms = self.update_interval.as_millis() as u64, "speed changed");
    }

    /// `(x, y)` is relative to the canvas' top-left corner.
    fn press_canvas(&mut self, x: f32, y: f32) {
        self.pause();
        let [width, height] = self.canvas_size;
        self.grid.toggle_cell_at_pixel(x, y, width, height);
    }
}

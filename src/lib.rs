pub mod game;
pub mod gui;
pub mod score;

pub const WIN_WIDTH: usize = 500;
pub const WIN_HEIGHT: usize = 800;

/// Simulation steps per second; one draw per step.
pub const TICK_RATE: f64 = 30.0;

pub const SCORE_FILE: &str = "high_scores.json";

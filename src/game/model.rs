#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Every tunable of the simulation in one place, handed to the world at
/// construction. The defaults are the table the game is balanced around;
/// tests shrink individual fields to force situations quickly.
#[derive(Clone, Debug)]
pub struct GameRules {
    pub jump_impulse: f32,
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub rise_boost: f32,
    pub max_tilt: f32,
    pub min_tilt: f32,
    pub tilt_vel: f32,
    pub tilt_hold_band: f32,
    pub pipe_vel: f32,
    pub pipe_gap: f32,
    pub gap_top_min: usize,
    pub gap_top_max: usize,
    pub spawn_x: f32,
    pub ground_y: f32,
    pub bird_start_x: f32,
    pub bird_start_y: f32,
}

impl Default for GameRules {
    fn default() -> GameRules {
        GameRules {
            jump_impulse: -10.5,
            gravity: 1.5,
            terminal_velocity: 16f32,
            rise_boost: 2f32,
            max_tilt: 25f32,
            min_tilt: -90f32,
            tilt_vel: 20f32,
            tilt_hold_band: 50f32,
            pipe_vel: 5f32,
            pipe_gap: 200f32,
            gap_top_min: 50,
            gap_top_max: 450,
            spawn_x: 600f32,
            ground_y: 730f32,
            bird_start_x: 230f32,
            bird_start_y: 350f32,
        }
    }
}

//! Tap Runner - a single-screen endless runner for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collision, game state)
//! - `render`: Frame drawing over a canvas-agnostic `Surface`
//! - `input`: Tap vs. hold press tracking
//! - `ui`: HUD text formatting

pub mod highscores;
pub mod input;
pub mod render;
pub mod sim;
pub mod ui;

pub use highscores::SessionBest;
pub use input::InputHandler;
pub use sim::{JumpStrength, Phase, View, World};

/// Game configuration constants
///
/// The simulation runs one step per animation frame, so all motion constants
/// are in pixels per tick (or per tick squared), matching a 60 Hz display.
pub mod consts {
    /// Downward acceleration applied to the player every tick
    pub const GRAVITY: f32 = 0.9;
    /// Vertical velocity set by a jump (negative is up)
    pub const JUMP_POWER: f32 = -16.0;
    /// Velocity multiplier for a boosted (held) jump
    pub const HOLD_BOOST: f32 = 1.2;
    /// Press duration at which a touch becomes a boosted jump
    pub const HOLD_DELAY_MS: f64 = 150.0;

    /// Player sprite - fixed horizontal position, fixed square size
    pub const PLAYER_X: f32 = 40.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// Ground line sits at this fraction of the view height
    pub const GROUND_FRACTION: f32 = 0.85;

    /// Horizontal scroll speed at the start of a run
    pub const START_SPEED: f32 = 4.0;
    /// Speed gained each time the score crosses a multiple of `SPEED_STEP_SCORE`
    pub const SPEED_STEP: f32 = 0.5;
    pub const SPEED_STEP_SCORE: u32 = 100;
    /// Score awarded per obstacle that scrolls fully off screen
    pub const OBSTACLE_SCORE: u32 = 10;

    /// Spawn countdown reset: base + jitter roll, minus score/100, never below the floor
    pub const SPAWN_DELAY_BASE: i32 = 60;
    pub const SPAWN_DELAY_JITTER: i32 = 60;
    pub const SPAWN_DELAY_FLOOR: i32 = 30;
    /// The rolled delay loses one tick per this much score
    pub const SPAWN_DELAY_SCORE_DIV: u32 = 100;

    /// Obstacle size rolls (half-open ranges)
    pub const OBSTACLE_MIN_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 70.0;
    pub const OBSTACLE_MIN_WIDTH: f32 = 20.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 50.0;

    /// Obstacles spawn this far past the right edge of the view
    pub const SPAWN_LEAD: f32 = 40.0;
    /// Obstacles are removed once their right edge is this far past the left edge
    pub const DESPAWN_MARGIN: f32 = 50.0;
}

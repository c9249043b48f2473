//! HUD text formatting
//!
//! Pure string builders for the DOM labels, kept out of the driver so the
//! exact wording stays unit-tested.

use crate::sim::{Phase, World};

/// Running score label, refreshed every tick
pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

/// Status line, refreshed on phase transitions
pub fn status_message(world: &World) -> String {
    match world.phase {
        Phase::Running => "Tap to jump • Hold to boost".to_string(),
        Phase::Paused => "Paused".to_string(),
        Phase::GameOver => format!("Game Over • Score: {}", world.score),
    }
}

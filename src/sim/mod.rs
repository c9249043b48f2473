//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Seeded RNG only, passed in by the caller
//! - Stable obstacle order (oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{JumpStrength, Obstacle, Phase, Player, View, World};
pub use tick::{roll_spawn_delay, tick};

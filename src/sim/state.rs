//! Game state and core simulation types
//!
//! Everything here is plain data: no platform handles, no wall-clock time.
//! The driver owns one `World` and passes it explicitly to the tick function
//! and the renderer, so the whole simulation runs headless in tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::highscores::SessionBest;
use crate::sim::collision::Rect;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active gameplay
    Running,
    /// Suspended while the tab is hidden
    Paused,
    /// Run ended by a collision, waiting for an explicit reset
    GameOver,
}

/// Logical (device-independent) viewport size
///
/// Queried fresh from the display surface every frame so the simulation
/// tracks live resizes without holding a platform handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub width: f32,
    pub height: f32,
}

impl View {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Y coordinate of the ground line
    pub fn ground_y(&self) -> f32 {
        self.height * GROUND_FRACTION
    }
}

/// Strength of a jump command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpStrength {
    /// Quick tap, or the keyboard shortcut
    Normal,
    /// Press held past the boost threshold
    Boosted,
}

impl JumpStrength {
    /// Multiplier applied to `JUMP_POWER`
    pub fn multiplier(self) -> f32 {
        match self {
            JumpStrength::Normal => 1.0,
            JumpStrength::Boosted => HOLD_BOOST,
        }
    }
}

/// The player sprite - runs in place at a fixed x, only y ever changes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity in pixels per tick (negative is up)
    pub vel_y: f32,
    /// True while the bottom edge rests exactly on the ground line
    pub on_ground: bool,
}

impl Player {
    /// Player standing on the ground line with no velocity
    fn at_rest(ground_y: f32) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            pos: Vec2::new(PLAYER_X, ground_y - size.y),
            size,
            vel_y: 0.0,
            on_ground: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Bottom edge of the sprite
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A scrolling obstacle, spawned resting on the ground line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Right edge, used by the off-screen removal check
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Player sprite
    pub player: Player,
    /// Live obstacles, oldest (leftmost) first; spawning appends, removal
    /// drains from the front, nothing ever reorders
    pub obstacles: Vec<Obstacle>,
    /// Run score, moves in increments of `OBSTACLE_SCORE`
    pub score: u32,
    /// Horizontal scroll speed in pixels per tick
    pub speed: f32,
    /// Ticks until the next obstacle spawn
    pub spawn_timer: i32,
    /// Current phase
    pub phase: Phase,
    /// Best score this page load; survives resets
    pub session_best: SessionBest,
    /// Executed simulation ticks this run
    pub ticks: u64,
}

impl World {
    /// Create a world ready to run
    pub fn new(view: View) -> Self {
        Self {
            player: Player::at_rest(view.ground_y()),
            obstacles: Vec::new(),
            score: 0,
            speed: START_SPEED,
            spawn_timer: 0,
            phase: Phase::Running,
            session_best: SessionBest::default(),
            ticks: 0,
        }
    }

    /// Start a fresh run; only the session best carries over
    pub fn reset(&mut self, view: View) {
        let session_best = self.session_best;
        *self = Self::new(view);
        self.session_best = session_best;
        log::info!("run restarted");
    }

    /// True while the run is advancing
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Execute a jump command
    ///
    /// Silently ignored while airborne or when the run is not advancing;
    /// returns whether the jump actually happened.
    pub fn try_jump(&mut self, strength: JumpStrength) -> bool {
        if self.phase != Phase::Running || !self.player.on_ground {
            return false;
        }
        self.player.vel_y = JUMP_POWER * strength.multiplier();
        self.player.on_ground = false;
        true
    }

    /// End the run and fold the score into the session best
    pub fn game_over(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.phase = Phase::GameOver;
        if self.session_best.observe(self.score) {
            log::info!("new session best: {}", self.score);
        }
        log::info!("game over at score {} after {} ticks", self.score, self.ticks);
    }

    /// Suspend gameplay; only a running world pauses
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
            log::info!("paused");
        }
    }

    /// Resume from a pause; a finished run stays finished
    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
            log::info!("resumed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> View {
        View::new(800.0, 600.0)
    }

    #[test]
    fn ground_line_sits_at_the_view_fraction() {
        let v = view();
        assert_eq!(v.ground_y(), 600.0 * GROUND_FRACTION);
    }

    #[test]
    fn new_world_starts_at_rest_on_the_ground() {
        let w = World::new(view());
        assert_eq!(w.phase, Phase::Running);
        assert_eq!(w.score, 0);
        assert_eq!(w.speed, START_SPEED);
        assert!(w.obstacles.is_empty());
        assert_eq!(w.spawn_timer, 0);
        assert_eq!(w.player.pos.x, PLAYER_X);
        assert_eq!(w.player.pos.y, view().ground_y() - PLAYER_HEIGHT);
        assert_eq!(w.player.vel_y, 0.0);
        assert!(w.player.on_ground);
    }

    #[test]
    fn reset_restores_the_starting_state_but_keeps_the_best() {
        let mut w = World::new(view());
        w.score = 120;
        w.speed = 5.0;
        w.spawn_timer = 17;
        w.ticks = 999;
        w.player.pos.y = 100.0;
        w.player.vel_y = -3.0;
        w.player.on_ground = false;
        w.obstacles.push(Obstacle {
            pos: Vec2::new(300.0, 400.0),
            size: Vec2::new(20.0, 30.0),
        });
        w.game_over();
        assert_eq!(w.session_best.best(), 120);

        w.reset(view());
        assert_eq!(w.phase, Phase::Running);
        assert_eq!(w.score, 0);
        assert_eq!(w.speed, START_SPEED);
        assert!(w.obstacles.is_empty());
        assert_eq!(w.ticks, 0);
        assert_eq!(w.player.pos.y, view().ground_y() - PLAYER_HEIGHT);
        assert_eq!(w.player.vel_y, 0.0);
        assert!(w.player.on_ground);
        assert_eq!(w.session_best.best(), 120);
    }

    #[test]
    fn jump_from_the_ground_launches_upward() {
        let mut w = World::new(view());
        assert!(w.try_jump(JumpStrength::Normal));
        assert_eq!(w.player.vel_y, JUMP_POWER);
        assert!(!w.player.on_ground);
    }

    #[test]
    fn boosted_jump_scales_the_launch_velocity() {
        let mut w = World::new(view());
        assert!(w.try_jump(JumpStrength::Boosted));
        assert_eq!(w.player.vel_y, JUMP_POWER * HOLD_BOOST);
    }

    #[test]
    fn jump_is_ignored_while_airborne() {
        let mut w = World::new(view());
        assert!(w.try_jump(JumpStrength::Normal));
        let vel = w.player.vel_y;
        assert!(!w.try_jump(JumpStrength::Boosted));
        assert_eq!(w.player.vel_y, vel);
    }

    #[test]
    fn jump_is_ignored_after_the_run_ends() {
        let mut w = World::new(view());
        w.game_over();
        assert!(!w.try_jump(JumpStrength::Normal));
        assert_eq!(w.player.vel_y, 0.0);
    }

    #[test]
    fn pause_only_suspends_a_running_world() {
        let mut w = World::new(view());
        w.pause();
        assert_eq!(w.phase, Phase::Paused);

        // Pausing again is a no-op, and a finished run never pauses.
        w.pause();
        assert_eq!(w.phase, Phase::Paused);
        w.resume();
        w.game_over();
        w.pause();
        assert_eq!(w.phase, Phase::GameOver);
    }

    #[test]
    fn resume_only_wakes_a_paused_world() {
        let mut w = World::new(view());
        w.resume();
        assert_eq!(w.phase, Phase::Running);

        w.pause();
        w.resume();
        assert_eq!(w.phase, Phase::Running);
    }

    #[test]
    fn a_hidden_tab_cannot_resurrect_a_finished_run() {
        let mut w = World::new(view());
        w.game_over();
        w.pause();
        w.resume();
        assert_eq!(w.phase, Phase::GameOver);
    }

    #[test]
    fn game_over_keeps_the_higher_session_best() {
        let mut w = World::new(view());
        w.score = 50;
        w.game_over();
        assert_eq!(w.session_best.best(), 50);

        w.reset(view());
        w.score = 30;
        w.game_over();
        assert_eq!(w.session_best.best(), 50);
    }
}

//! Fixed-cadence simulation tick
//!
//! Advances the world by exactly one frame's worth of simulation. The driver
//! calls this once per animation frame; motion constants are per tick, so
//! there is no dt and no sub-stepping.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Obstacle, View, World};
use crate::consts::*;

/// Advance the world by one tick
///
/// No-op unless the run is advancing. Order matters: the player resolves
/// against the ground before obstacles move, and collision runs last so a
/// single tick can both score and end the run.
pub fn tick(world: &mut World, view: View, rng: &mut Pcg32) {
    if !world.is_running() {
        return;
    }
    world.ticks += 1;

    step_player(world, view.ground_y());
    step_spawner(world, view, rng);
    step_obstacles(world);
    resolve_collisions(world);
}

/// Gravity, then clamp to the ground line
fn step_player(world: &mut World, ground_y: f32) {
    let player = &mut world.player;
    player.vel_y += GRAVITY;
    player.pos.y += player.vel_y;

    if player.bottom() >= ground_y {
        player.pos.y = ground_y - player.size.y;
        player.vel_y = 0.0;
        player.on_ground = true;
    } else {
        player.on_ground = false;
    }
}

/// Count the spawn timer down; at zero, spawn one obstacle and re-roll
fn step_spawner(world: &mut World, view: View, rng: &mut Pcg32) {
    world.spawn_timer -= 1;
    if world.spawn_timer > 0 {
        return;
    }

    let height = rng.random_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT);
    let width = rng.random_range(OBSTACLE_MIN_WIDTH..OBSTACLE_MAX_WIDTH);
    let obstacle = Obstacle {
        pos: Vec2::new(view.width + SPAWN_LEAD, view.ground_y() - height),
        size: Vec2::new(width, height),
    };
    log::debug!(
        "spawned obstacle {}x{} at x={}",
        obstacle.size.x,
        obstacle.size.y,
        obstacle.pos.x
    );
    world.obstacles.push(obstacle);
    world.spawn_timer = roll_spawn_delay(world.score, rng);
}

/// Roll the delay until the next spawn
///
/// The score subtraction applies before the floor: a long run first eats into
/// the jitter window, then pins the delay at the floor.
pub fn roll_spawn_delay(score: u32, rng: &mut Pcg32) -> i32 {
    let delay = SPAWN_DELAY_BASE + rng.random_range(0..SPAWN_DELAY_JITTER)
        - (score / SPAWN_DELAY_SCORE_DIV) as i32;
    delay.max(SPAWN_DELAY_FLOOR)
}

/// Scroll obstacles left and retire the ones fully off screen
fn step_obstacles(world: &mut World) {
    for obstacle in &mut world.obstacles {
        obstacle.pos.x -= world.speed;
    }

    let mut i = 0;
    while i < world.obstacles.len() {
        if world.obstacles[i].right() < -DESPAWN_MARGIN {
            world.obstacles.remove(i);
            award_cleared_obstacle(world);
        } else {
            i += 1;
        }
    }
}

/// Score one retired obstacle; the scroll speed steps up each time the score
/// lands on a multiple of `SPEED_STEP_SCORE`
fn award_cleared_obstacle(world: &mut World) {
    world.score += OBSTACLE_SCORE;
    if world.score % SPEED_STEP_SCORE == 0 {
        world.speed += SPEED_STEP;
        log::debug!("speed stepped to {} at score {}", world.speed, world.score);
    }
}

/// Any player/obstacle overlap ends the run
fn resolve_collisions(world: &mut World) {
    let player = world.player.rect();
    if world
        .obstacles
        .iter()
        .any(|obstacle| obstacle.rect().overlaps(&player))
    {
        world.game_over();
    }
}

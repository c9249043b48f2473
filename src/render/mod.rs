//! Frame drawing
//!
//! The renderer is a pure function from world to draw calls. `Surface` is the
//! seam to the actual raster target: the browser implements it over a 2D
//! canvas context, tests implement it with a recorder. Nothing here mutates
//! the world, and drawing works in any phase (a finished run renders its
//! frozen last frame).

use crate::sim::{View, World};

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// Fill colors, as CSS color strings
pub const GROUND_COLOR: &str = "#0b1720";
pub const PLAYER_COLOR: &str = "#f97316";
pub const OBSTACLE_COLOR: &str = "#94a3b8";
pub const SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.12)";

/// Player shadow: a slim rectangle hugging the ground line
const SHADOW_INSET: f32 = 6.0;
const SHADOW_DROP: f32 = 2.0;
const SHADOW_HEIGHT: f32 = 6.0;

/// A raster target in logical (device-independent) coordinates
pub trait Surface {
    /// Logical size of the drawing area
    fn view(&self) -> View;
    /// Wipe the whole frame
    fn clear(&mut self);
    /// Fill an axis-aligned rectangle with a CSS color
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
}

/// Draw one frame: clear, ground slab, player, obstacles, player shadow
pub fn draw_frame(world: &World, surface: &mut impl Surface) {
    let view = surface.view();
    let ground_y = view.ground_y();

    surface.clear();
    surface.fill_rect(
        0.0,
        ground_y,
        view.width,
        view.height - ground_y,
        GROUND_COLOR,
    );

    let player = &world.player;
    surface.fill_rect(
        player.pos.x,
        player.pos.y,
        player.size.x,
        player.size.y,
        PLAYER_COLOR,
    );

    for obstacle in &world.obstacles {
        surface.fill_rect(
            obstacle.pos.x,
            obstacle.pos.y,
            obstacle.size.x,
            obstacle.size.y,
            OBSTACLE_COLOR,
        );
    }

    surface.fill_rect(
        player.pos.x + SHADOW_INSET,
        ground_y + SHADOW_DROP,
        player.size.x - 2.0 * SHADOW_INSET,
        SHADOW_HEIGHT,
        SHADOW_COLOR,
    );
}

//! Canvas-backed display surface
//!
//! Owns the `<canvas>` element and its 2D context. The backing store is kept
//! in sync with the element's client size times the device pixel ratio, and
//! the context is scaled to match, so every draw call stays in logical
//! (device-independent) units.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::sim::View;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
}

impl CanvasSurface {
    /// Wrap the canvas and acquire its 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let ctx = canvas
            .get_context("2d")
            .expect("2d context request failed")
            .expect("canvas has no 2d context")
            .dyn_into::<CanvasRenderingContext2d>()
            .expect("context is not CanvasRenderingContext2d");
        let mut surface = Self {
            canvas,
            ctx,
            dpr: 0.0,
        };
        surface.sync_size();
        surface
    }

    /// Re-match the backing store to client size x device pixel ratio
    ///
    /// Called every frame; cheap when nothing changed. Assigning the canvas
    /// width/height resets the context transform, so the scale is re-applied
    /// after a resize.
    pub fn sync_size(&mut self) {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let width = (self.canvas.client_width() as f64 * dpr) as u32;
        let height = (self.canvas.client_height() as f64 * dpr) as u32;
        if self.canvas.width() != width || self.canvas.height() != height || self.dpr != dpr {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.dpr = dpr;
            self.ctx.scale(dpr, dpr).expect("context scale failed");
            log::debug!("surface resized to {}x{} at dpr {}", width, height, dpr);
        }
    }
}

impl Surface for CanvasSurface {
    fn view(&self) -> View {
        View::new(
            self.canvas.client_width() as f32,
            self.canvas.client_height() as f32,
        )
    }

    fn clear(&mut self) {
        let view = self.view();
        self.ctx
            .clear_rect(0.0, 0.0, view.width as f64, view.height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }
}

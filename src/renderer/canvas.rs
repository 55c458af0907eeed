//! Canvas 2D paint backend (wasm32)
//!
//! Owns the only place device pixel ratio is applied: the backing store is
//! sized to `logical * dpr` and every paint is wrapped in a matching
//! `scale`, so strokes stay crisp while the simulation keeps logical
//! coordinates.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::SurfaceConfig;
use crate::renderer::scene;
use crate::sim::state::GameState;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    dpr: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_image_smoothing_enabled(false);
        Ok(Self { ctx, dpr: 1.0 })
    }

    /// Recompute backing-store dimensions for the current device pixel
    /// ratio. Presentation size (CSS pixels) stays at the requested display
    /// size; only the backing resolution changes.
    pub fn resize_backing(
        &mut self,
        canvas: &HtmlCanvasElement,
        config: &SurfaceConfig,
        dpr: f64,
    ) -> Result<(), JsValue> {
        let (bw, bh) = config.backing_size(dpr);
        canvas.set_width(bw);
        canvas.set_height(bh);

        let style = canvas.style();
        style.set_property("width", &format!("{}px", config.display_width))?;
        style.set_property("height", &format!("{}px", config.display_height))?;

        self.dpr = dpr;
        self.ctx.set_image_smoothing_enabled(false);
        Ok(())
    }

    /// Paint one frame: background and starfield, ground band, player,
    /// obstacles, HUD. `t_ms` only drives the cosmetic star drift.
    pub fn render(&self, state: &GameState, t_ms: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let (w, h) = (f64::from(state.width), f64::from(state.height));

        ctx.save();
        let result = self.paint(state, t_ms, w, h);
        ctx.restore();
        result
    }

    fn paint(&self, state: &GameState, t_ms: f64, w: f64, h: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.scale(self.dpr, self.dpr)?;
        ctx.clear_rect(0.0, 0.0, w, h);

        let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
        gradient.add_color_stop(0.0, scene::BACKGROUND_TOP)?;
        gradient.add_color_stop(1.0, scene::BACKGROUND_BOTTOM)?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_fill_style_str(scene::STAR_COLOR);
        for star in scene::star_positions(state.width, state.height, t_ms) {
            ctx.fill_rect(f64::from(star.x.round()), f64::from(star.y.round()), 1.0, 1.0);
        }

        let ground_y = f64::from(state.ground_y);
        ctx.set_fill_style_str(scene::GROUND_COLOR);
        ctx.fill_rect(0.0, ground_y + 1.0, w, h - ground_y);

        for rect in scene::player_sprite(&state.player) {
            self.fill_sprite_rect(&rect);
        }
        for ob in &state.obstacles {
            for rect in scene::obstacle_sprite(ob) {
                self.fill_sprite_rect(&rect);
            }
        }

        ctx.set_fill_style_str(scene::HUD_COLOR);
        ctx.set_font(scene::HUD_FONT);
        ctx.set_text_baseline("top");
        ctx.fill_text(&scene::hud_text(state.score), 4.0, 2.0)?;

        Ok(())
    }

    fn fill_sprite_rect(&self, rect: &scene::SpriteRect) {
        self.ctx.set_fill_style_str(rect.color);
        self.ctx.fill_rect(
            f64::from(rect.x),
            f64::from(rect.y),
            f64::from(rect.w),
            f64::from(rect.h),
        );
    }
}

//! Render pipeline
//!
//! Split in two: `scene` computes everything drawable (star placement,
//! sprite rectangles, HUD text) in logical coordinates with no platform
//! dependencies, and `canvas` paints a scene into a 2D context. Device
//! pixel ratio exists only inside the canvas backend; it never reaches the
//! simulation.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use scene::{SpriteRect, Star, obstacle_sprite, player_sprite, star_positions};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

//! Astro Runner - an endless-runner mini-game for embedding in a host page
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, game state)
//! - `renderer`: Scene building and the canvas 2D paint backend
//! - `platform`: Browser game-loop driver and input wiring
//! - `scores`: Append-only score persistence with max-query
//! - `config`: Surface sizing (display pixels vs. logical resolution)

pub mod config;
pub mod platform;
pub mod renderer;
pub mod scores;
pub mod sim;

pub use config::SurfaceConfig;
pub use scores::{ScoreLog, ScoreRecord};

/// Game configuration constants
pub mod consts {
    /// Gravitational acceleration per reference frame (logical px)
    pub const GRAVITY: f32 = 0.6;
    /// Reference frame period in time-units; physics is scaled by dt/this
    pub const FRAME_REF_MS: f32 = 16.67;
    /// Maximum tick duration; larger deltas (tab suspend) are clamped here
    pub const MAX_TICK_MS: f32 = 40.0;

    /// Vertical velocity applied on an accepted jump
    pub const JUMP_VELOCITY: f32 = -5.6;

    /// Player hitbox (logical px)
    pub const PLAYER_WIDTH: f32 = 8.0;
    pub const PLAYER_HEIGHT: f32 = 10.0;
    /// Player's fixed x as a fraction of the logical viewport width
    pub const PLAYER_X_FRACTION: f32 = 0.12;

    /// Obstacle speed before the difficulty multiplier (logical px per time-unit)
    pub const BASE_SPEED: f32 = 0.25;
    /// Obstacles spawn this far past the right viewport edge
    pub const SPAWN_LEAD: f32 = 4.0;
    /// Obstacles are culled once fully this far left of the viewport
    pub const CULL_MARGIN: f32 = 20.0;

    /// Height of the ground band at the bottom of the viewport
    pub const GROUND_THICKNESS: f32 = 6.0;

    /// Stars in the background field
    pub const STAR_COUNT: usize = 18;
}

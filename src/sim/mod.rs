//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick time deltas only, clamped to `MAX_TICK_MS`
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use difficulty::{Tier, tier_for_score};
pub use spawn::spawn_obstacle;
pub use state::{GamePhase, GameState, Obstacle, ObstacleKind, Player};
pub use tick::{TickInput, tick};

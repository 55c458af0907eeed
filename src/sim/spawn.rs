//! Stochastic obstacle generator
//!
//! Archetype choice samples the state's seeded RNG, so a seed fully
//! determines the obstacle sequence. Spacing is governed only by the spawn
//! interval; overlapping hitboxes are allowed and handled by the collision
//! pass.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::sim::state::{GameState, Obstacle, ObstacleKind};

/// Emit one obstacle just past the right viewport edge.
///
/// Archetype odds: 60% Debris, 25% Comet, 15% Satellite. The horizontal
/// speed is `BASE_SPEED` scaled by the tier multiplier in force right now;
/// later tier changes do not touch it.
pub fn spawn_obstacle(state: &mut GameState) {
    let r: f32 = state.rng.random();

    let (kind, size) = if r < 0.60 {
        (ObstacleKind::Debris, Vec2::new(6.0, 6.0))
    } else if r < 0.85 {
        (ObstacleKind::Comet, Vec2::new(6.0, 4.0))
    } else {
        (ObstacleKind::Satellite, Vec2::new(8.0, 12.0))
    };

    let y = match kind {
        // Airborne: 18-25 logical px above the ground line
        ObstacleKind::Comet => state.ground_y - 18.0 - state.rng.random_range(0..8) as f32,
        _ => state.ground_y - size.y,
    };

    state.obstacles.push(Obstacle {
        pos: Vec2::new(state.width + SPAWN_LEAD, y),
        size,
        speed: BASE_SPEED * state.speed_multiplier,
        kind,
        passed: false,
    });
}

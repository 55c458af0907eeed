//! Game state and core simulation types
//!
//! The whole run lives in one `GameState` value owned by the loop driver and
//! passed by reference to physics, spawning, and rendering.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::collision::Aabb;
use crate::sim::difficulty;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for an explicit start action; no ticking happens here
    NotStarted,
    /// Active run
    Running,
    /// Run ended on a collision; simulation is frozen until restart
    Over,
}

/// Obstacle archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Ground-level rubble, 6x6
    Debris,
    /// Airborne streak, 6x4, forces a jump timing decision
    Comet,
    /// Ground-level tower, 8x12
    Satellite,
}

/// The player entity. X is fixed after spawn; only y and vy move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel_y: f32,
    pub size: Vec2,
    pub on_ground: bool,
}

impl Player {
    /// Spawn standing on the ground at the fixed x column
    pub fn new(viewport_width: f32, ground_y: f32) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            pos: Vec2::new(
                (viewport_width * PLAYER_X_FRACTION).floor(),
                ground_y - size.y,
            ),
            vel_y: 0.0,
            size,
            on_ground: true,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A scrolling obstacle. Speed is captured at spawn time and never re-tiered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward speed in logical px per time-unit
    pub speed: f32,
    pub kind: ObstacleKind,
    /// Set once when the trailing edge clears the player; scores one point
    pub passed: bool,
}

impl Obstacle {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete run state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Obstacles dodged this run
    pub score: u32,
    /// Time accrued toward the next spawn
    pub spawn_timer: f32,
    /// Current spawn cadence (re-tiered from score every tick)
    pub spawn_interval: f32,
    /// Current speed multiplier applied to new spawns
    pub speed_multiplier: f32,
    pub phase: GamePhase,
    /// Logical (unscaled) viewport size
    pub width: f32,
    pub height: f32,
    /// Y of the ground line; the hard floor for the player
    pub ground_y: f32,
    pub player: Player,
    /// Spawn order is traversal order
    pub obstacles: Vec<Obstacle>,
    /// Spawn randomness; seeded so runs replay exactly
    pub rng: Pcg32,
}

impl GameState {
    /// Create a fresh run over a logical viewport, waiting for start
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let ground_y = height - GROUND_THICKNESS;
        let tier = difficulty::tier_for_score(0);
        Self {
            seed,
            score: 0,
            spawn_timer: 0.0,
            spawn_interval: tier.spawn_interval,
            speed_multiplier: tier.speed_multiplier,
            phase: GamePhase::NotStarted,
            width,
            height,
            ground_y,
            player: Player::new(width, ground_y),
            obstacles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Explicit user-initiated start; ticking is a no-op before this
    pub fn start(&mut self) {
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Running;
        }
    }

    /// Full reset into a running state. Nothing carries over from the
    /// previous run except the viewport dimensions.
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(self.width, self.height, seed);
        self.phase = GamePhase::Running;
        log::info!("run restarted with seed {seed}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_spawns_on_ground() {
        let state = GameState::new(500.0, 133.0, 1);
        assert!(state.player.on_ground);
        assert_eq!(state.player.pos.x, 60.0);
        assert_eq!(state.player.pos.y, state.ground_y - state.player.size.y);
    }

    #[test]
    fn start_only_leaves_not_started() {
        let mut state = GameState::new(500.0, 133.0, 1);
        state.start();
        assert_eq!(state.phase, GamePhase::Running);

        state.phase = GamePhase::Over;
        state.start();
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn restart_is_total() {
        let mut state = GameState::new(500.0, 133.0, 1);
        state.start();
        state.score = 250;
        state.spawn_timer = 123.0;
        state.player.pos.y = 10.0;
        state.obstacles.push(Obstacle {
            pos: Vec2::new(400.0, 100.0),
            size: Vec2::new(6.0, 6.0),
            speed: 0.25,
            kind: ObstacleKind::Debris,
            passed: true,
        });

        state.restart(2);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.spawn_timer, 0.0);
        assert_eq!(state.speed_multiplier, 1.0);
        assert_eq!(state.spawn_interval, 1500.0);
        assert!(state.player.on_ground);
        assert_eq!(state.player.pos.y, state.ground_y - state.player.size.y);
    }
}

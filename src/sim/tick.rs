//! Per-frame simulation tick
//!
//! One entry point advances the whole run: difficulty re-tiering, player
//! kinematics, the jump gate, spawning, obstacle advance with pass-scoring,
//! collision, and culling. Ticking is a no-op outside the Running phase.

use crate::consts::*;
use crate::sim::difficulty;
use crate::sim::spawn::spawn_obstacle;
use crate::sim::state::{GamePhase, GameState};

/// Input flags for a single tick. Events are coalesced between frames by the
/// driver; the sim only ever sees one flag set per tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump request from keyboard or pointer. Only honored on the ground.
    pub jump: bool,
}

/// Advance the run by `dt` time-units (clamped to `MAX_TICK_MS`).
///
/// `dt = 0` is accepted and leaves the state untouched. Outcomes are fully
/// determined by the seed and the `(dt, jump)` sequence.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Running {
        return;
    }
    let dt = dt.clamp(0.0, MAX_TICK_MS);

    // Re-tier from the current score before integrating. Applies to the
    // spawn cadence and to new spawns; in-flight obstacles keep their speed.
    let tier = difficulty::tier_for_score(state.score);
    state.speed_multiplier = tier.speed_multiplier;
    state.spawn_interval = tier.spawn_interval;

    // Vertical kinematics, scaled to the reference frame period
    let step = dt / FRAME_REF_MS;
    state.player.vel_y += GRAVITY * step;
    state.player.pos.y += state.player.vel_y * step;

    // The ground is a hard floor
    let floor_y = state.ground_y - state.player.size.y;
    if state.player.pos.y >= floor_y {
        state.player.pos.y = floor_y;
        state.player.vel_y = 0.0;
        state.player.on_ground = true;
    }

    // Jump gate: airborne requests are dropped, not queued
    if input.jump && state.player.on_ground {
        state.player.vel_y = JUMP_VELOCITY;
        state.player.on_ground = false;
    }

    state.spawn_timer += dt;
    if state.spawn_timer >= state.spawn_interval {
        state.spawn_timer = 0.0;
        spawn_obstacle(state);
    }

    // Advance obstacles and score each one the first time its trailing edge
    // clears the player's leading edge.
    for ob in &mut state.obstacles {
        ob.pos.x -= ob.speed * dt;
        if !ob.passed && ob.pos.x + ob.size.x < state.player.pos.x {
            ob.passed = true;
            state.score += 1;
        }
    }

    // First overlap in spawn order ends the run; the score latches as-is.
    let player_box = state.player.aabb();
    for ob in &state.obstacles {
        if player_box.overlaps(&ob.aabb()) {
            state.phase = GamePhase::Over;
            log::info!("run over at score {}", state.score);
            return;
        }
    }

    state
        .obstacles
        .retain(|ob| ob.pos.x + ob.size.x >= -CULL_MARGIN);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Obstacle, ObstacleKind};
    use glam::Vec2;
    use proptest::prelude::*;

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(500.0, 133.0, seed);
        state.start();
        state
    }

    fn comet_at(x: f32, y: f32, speed: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, y),
            size: Vec2::new(6.0, 4.0),
            speed,
            kind: ObstacleKind::Comet,
            passed: false,
        }
    }

    #[test]
    fn no_ticking_before_start() {
        let mut state = GameState::new(500.0, 133.0, 1);
        let before = state.clone();
        tick(&mut state, &TickInput { jump: true }, 40.0);
        assert_eq!(state, before);
    }

    #[test]
    fn zero_dt_is_a_noop() {
        let mut state = running_state(2);
        tick(&mut state, &TickInput { jump: true }, 16.0);
        tick(&mut state, &TickInput::default(), 16.0);

        let before = state.clone();
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state, before);
    }

    #[test]
    fn oversized_dt_is_clamped() {
        let mut clamped = running_state(3);
        let mut stalled = clamped.clone();
        tick(&mut clamped, &TickInput::default(), MAX_TICK_MS);
        tick(&mut stalled, &TickInput::default(), 5000.0);
        assert_eq!(clamped, stalled);
    }

    #[test]
    fn jump_from_ground_sets_velocity() {
        let mut state = running_state(4);
        tick(&mut state, &TickInput { jump: true }, 16.0);
        assert_eq!(state.player.vel_y, JUMP_VELOCITY);
        assert!(!state.player.on_ground);
    }

    #[test]
    fn airborne_jump_request_is_ignored() {
        let mut state = running_state(5);
        tick(&mut state, &TickInput { jump: true }, 16.0);
        assert!(!state.player.on_ground);

        let mut with_jump = state.clone();
        let mut without = state.clone();
        tick(&mut with_jump, &TickInput { jump: true }, 16.0);
        tick(&mut without, &TickInput::default(), 16.0);
        assert_eq!(with_jump, without);
    }

    #[test]
    fn player_never_sinks_below_the_ground() {
        let mut state = running_state(6);
        for i in 0..5000 {
            tick(&mut state, &TickInput { jump: i % 37 == 0 }, 16.0);
            if state.phase != GamePhase::Running {
                break;
            }
            let floor_y = state.ground_y - state.player.size.y;
            assert!(state.player.pos.y <= floor_y + 1e-4);
        }
    }

    #[test]
    fn jumping_player_returns_to_the_ground() {
        let mut state = running_state(7);
        tick(&mut state, &TickInput { jump: true }, 16.0);
        let mut landed = false;
        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), 16.0);
            if state.player.on_ground {
                landed = true;
                break;
            }
        }
        assert!(landed, "player stayed airborne");
        assert_eq!(state.player.pos.y, state.ground_y - state.player.size.y);
        assert_eq!(state.player.vel_y, 0.0);
    }

    #[test]
    fn spawn_cadence_follows_the_interval() {
        let mut state = running_state(8);
        for _ in 0..37 {
            tick(&mut state, &TickInput::default(), 40.0);
        }
        assert!(state.obstacles.is_empty());

        // Tick 38 crosses 1500 accrued time-units
        tick(&mut state, &TickInput::default(), 40.0);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.spawn_timer, 0.0);
    }

    #[test]
    fn passing_an_obstacle_scores_exactly_once() {
        let mut state = running_state(9);
        // High above the player so it crosses without colliding
        state.obstacles.push(comet_at(80.0, 5.0, 2.0));

        tick(&mut state, &TickInput::default(), 16.0);
        assert_eq!(state.score, 1);
        assert!(state.obstacles[0].passed);

        // Further travel, including culling, scores nothing more
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), 16.0);
        }
        assert_eq!(state.score, 1);
        assert!(state.obstacles.is_empty(), "obstacle should be culled");
    }

    #[test]
    fn obstacles_are_culled_behind_the_viewport() {
        let mut state = running_state(10);
        state.obstacles.push(comet_at(-25.9, 5.0, 0.0));
        state.obstacles.push(comet_at(-26.1, 5.0, 0.0));
        tick(&mut state, &TickInput::default(), 1.0);
        // -25.9 + 6 = -19.9 survives the -20 margin; -26.1 + 6 does not
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn collision_ends_the_run_in_the_same_tick() {
        let mut state = running_state(11);
        state.score = 7;
        state.obstacles.push(Obstacle {
            pos: state.player.pos,
            size: Vec2::new(6.0, 6.0),
            speed: 0.0,
            kind: ObstacleKind::Debris,
            passed: false,
        });

        tick(&mut state, &TickInput::default(), 16.0);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.score, 7);

        // Frozen until restart: further ticks change nothing
        let frozen = state.clone();
        tick(&mut state, &TickInput { jump: true }, 40.0);
        assert_eq!(state, frozen);
    }

    #[test]
    fn tier_change_applies_to_new_spawns_only() {
        let mut state = running_state(12);
        // In-flight obstacle spawned under the lowest tier
        spawn_obstacle(&mut state);
        let old_speed = state.obstacles[0].speed;
        assert_eq!(old_speed, BASE_SPEED);

        state.score = 200;
        state.spawn_timer = 899.0;
        tick(&mut state, &TickInput::default(), 16.0);

        assert_eq!(state.speed_multiplier, 1.3);
        assert_eq!(state.spawn_interval, 900.0);
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.obstacles[0].speed, old_speed);
        assert!((state.obstacles[1].speed - BASE_SPEED * 1.3).abs() < 1e-6);
    }

    #[test]
    fn restart_after_game_over_is_total() {
        let mut state = running_state(13);
        state.obstacles.push(Obstacle {
            pos: state.player.pos,
            size: Vec2::new(6.0, 6.0),
            speed: 0.0,
            kind: ObstacleKind::Satellite,
            passed: false,
        });
        tick(&mut state, &TickInput::default(), 16.0);
        assert_eq!(state.phase, GamePhase::Over);

        state.restart(14);
        assert_eq!(state, {
            let mut fresh = GameState::new(500.0, 133.0, 14);
            fresh.start();
            fresh
        });
    }

    #[test]
    fn identical_seeds_and_inputs_replay_identically() {
        let mut a = running_state(99999);
        let mut b = running_state(99999);
        let dts = [12.0, 17.0, 40.0, 0.0, 33.0];
        for i in 0..2000 {
            let input = TickInput { jump: i % 13 == 0 };
            let dt = dts[i % dts.len()];
            tick(&mut a, &input, dt);
            tick(&mut b, &input, dt);
        }
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn floor_invariant_under_arbitrary_input(
            steps in proptest::collection::vec((0.0f32..120.0, any::<bool>()), 1..300),
        ) {
            let mut state = running_state(4242);
            for (dt, jump) in steps {
                tick(&mut state, &TickInput { jump }, dt);
                let floor_y = state.ground_y - state.player.size.y;
                prop_assert!(state.player.pos.y <= floor_y + 1e-3);
            }
        }

        #[test]
        fn score_never_decreases(
            steps in proptest::collection::vec((0.0f32..120.0, any::<bool>()), 1..300),
            seed in any::<u64>(),
        ) {
            let mut state = running_state(seed);
            let mut prev = 0;
            for (dt, jump) in steps {
                tick(&mut state, &TickInput { jump }, dt);
                prop_assert!(state.score >= prev);
                prev = state.score;
            }
        }
    }
}

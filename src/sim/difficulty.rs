//! Score-driven difficulty tiers
//!
//! A pure function of cumulative score, re-evaluated every tick before
//! physics integration. Tier changes take effect immediately for the spawn
//! cadence and for newly spawned obstacles; in-flight obstacles keep the
//! speed they were spawned with.

/// One difficulty tier: obstacle speed scaling and spawn cadence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub speed_multiplier: f32,
    /// Time-units between spawns
    pub spawn_interval: f32,
}

/// Map cumulative score to the active tier
pub fn tier_for_score(score: u32) -> Tier {
    if score >= 400 {
        Tier {
            speed_multiplier: 1.6,
            spawn_interval: 700.0,
        }
    } else if score >= 200 {
        Tier {
            speed_multiplier: 1.3,
            spawn_interval: 900.0,
        }
    } else {
        Tier {
            speed_multiplier: 1.0,
            spawn_interval: 1500.0,
        }
    }
}

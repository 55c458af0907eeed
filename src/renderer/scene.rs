//! Scene geometry in logical coordinates
//!
//! Everything here is pure: star placement is derived from a per-star phase
//! and the current timestamp, sprites are rectangle lists at rounded integer
//! coordinates. Nothing in this module reads or writes simulation state
//! beyond the entities passed in.

use crate::consts::STAR_COUNT;
use crate::sim::state::{Obstacle, ObstacleKind, Player};

pub const BACKGROUND_TOP: &str = "#020214";
pub const BACKGROUND_BOTTOM: &str = "#05051a";
pub const STAR_COLOR: &str = "#9ad";
pub const GROUND_COLOR: &str = "#111";
pub const HUD_COLOR: &str = "#eee";
pub const HUD_FONT: &str = "9px monospace";

/// A single background star position (logical px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
}

/// One filled rectangle of a sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: &'static str,
}

/// Compute the starfield for a given timestamp.
///
/// Each star drifts slowly on a phase derived from its index, so the field
/// shimmers without any stored state.
pub fn star_positions(width: f32, height: f32, t_ms: f64) -> Vec<Star> {
    let w = (width as i32 - 4).max(1);
    let h = (height as i32 - 20).max(1);
    (0..STAR_COUNT)
        .map(|i| {
            let i = i as i32;
            let drift = (t_ms / (1000.0 + f64::from(i) * 10.0)) % 3.0;
            let bob = (t_ms / 1000.0 + f64::from(i)).sin() * 1.2;
            Star {
                x: ((i * 73) % w) as f32 + drift as f32,
                y: ((i * 37) % h) as f32 + bob as f32,
            }
        })
        .collect()
}

/// Player sprite: body, pack, visor, at rounded integer coordinates
pub fn player_sprite(player: &Player) -> [SpriteRect; 3] {
    let x = player.pos.x.round();
    let y = player.pos.y.round();
    let w = player.size.x;
    let h = player.size.y;
    [
        SpriteRect {
            x,
            y,
            w,
            h,
            color: "#cfe",
        },
        SpriteRect {
            x: x + w - 3.0,
            y: y + 1.0,
            w: 3.0,
            h: 3.0,
            color: "#9fb",
        },
        SpriteRect {
            x: x + 1.0,
            y: y + 2.0,
            w: 4.0,
            h: 3.0,
            color: "#034",
        },
    ]
}

/// Obstacle sprite by archetype: body plus one detail rect
pub fn obstacle_sprite(ob: &Obstacle) -> [SpriteRect; 2] {
    let x = ob.pos.x.round();
    let y = ob.pos.y.round();
    let w = ob.size.x;
    let h = ob.size.y;
    match ob.kind {
        ObstacleKind::Debris => [
            SpriteRect {
                x,
                y,
                w,
                h,
                color: "#a65",
            },
            SpriteRect {
                x: x + 1.0,
                y: y + 1.0,
                w: 2.0,
                h: 1.0,
                color: "#ffb",
            },
        ],
        ObstacleKind::Comet => [
            SpriteRect {
                x,
                y,
                w,
                h,
                color: "#fdb",
            },
            SpriteRect {
                x: x + 2.0,
                y: y + 1.0,
                w: 3.0,
                h: 1.0,
                color: "#fdb",
            },
        ],
        ObstacleKind::Satellite => [
            SpriteRect {
                x,
                y,
                w,
                h,
                color: "#88b",
            },
            SpriteRect {
                x: x + 1.0,
                y: y + 1.0,
                w: w - 2.0,
                h: 2.0,
                color: "#ccf",
            },
        ],
    }
}

/// HUD score readout
pub fn hud_text(score: u32) -> String {
    format!("Score: {score}")
}

//! Coin Catcher - A falling-coin catcher arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, game state)
//! - `input`: Control schemes and input normalization
//! - `renderer`: Draw-list generation and the Canvas 2D backend
//! - `tuning`: Data-driven game balance
//! - `reward`: Score to coupon value conversion

pub mod input;
pub mod renderer;
pub mod reward;
pub mod sim;
pub mod tuning;

pub use input::{ControlScheme, Direction, InputAdapter, InputEvent};
pub use reward::Reward;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz, one tick per display frame)
    pub const TICK_MS: f32 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Horizontal speed in pixels per tick
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Velocity multiplier applied each tick while no key is held
    pub const PLAYER_FRICTION: f32 = 0.9;
    /// Gap between the player's top edge and the bottom of the surface
    pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0;

    /// Falling entity defaults (pixels, pixels per tick)
    pub const HAZARD_SIZE: f32 = 20.0;
    pub const HAZARD_SPEED: f32 = 3.0;
    pub const COIN_SIZE: f32 = 20.0;
    pub const COIN_START_SPEED: f32 = 3.0;

    /// Bonus coin defaults
    pub const BONUS_SIZE: f32 = 20.0;
    pub const BONUS_SPEED_X: f32 = 2.0;
    pub const BONUS_SPEED_Y: f32 = 3.0;
    /// Ticks between visibility flips
    pub const BONUS_BLINK_TICKS: u32 = 20;

    /// Spawn intervals (ms)
    pub const HAZARD_INTERVAL_MS: f32 = 2000.0;
    pub const COIN_INTERVAL_MS: f32 = 1000.0;

    /// Every this many points the coins speed up and a bonus coin appears
    pub const SCORE_MILESTONE: u32 = 20;
    pub const COIN_SPEED_MULTIPLIER: f32 = 2.0;

    /// Points per one unit of coupon value
    pub const POINTS_PER_REWARD_UNIT: u32 = 20;

    /// Fill colors (CSS)
    pub const PLAYER_COLOR: &str = "blue";
    pub const HAZARD_COLOR: &str = "red";
    pub const COIN_COLOR: &str = "gold";
    pub const BONUS_COLOR: &str = "orange";
    pub const TEXT_COLOR: &str = "white";

    /// Page element ids the host looks up
    pub const CANVAS_ID: &str = "gameCanvas";
    pub const TUNING_SCRIPT_ID: &str = "tuning";
    pub const RESTART_BUTTON_ID: &str = "restart-btn";
}

/// Clamp `x` so a span of `width` starting at `x` stays inside `[0, bounds]`.
///
/// Returns the clamped value and whether clamping happened.
#[inline]
pub fn clamp_span(x: f32, width: f32, bounds: f32) -> (f32, bool) {
    let max = (bounds - width).max(0.0);
    let clamped = x.clamp(0.0, max);
    (clamped, clamped != x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_span() {
        assert_eq!(clamp_span(-4.0, 50.0, 480.0), (0.0, true));
        assert_eq!(clamp_span(500.0, 50.0, 480.0), (430.0, true));
        assert_eq!(clamp_span(100.0, 50.0, 480.0), (100.0, false));
        // Surface narrower than the span pins to the left edge
        assert_eq!(clamp_span(10.0, 50.0, 40.0), (0.0, true));
    }

    #[test]
    fn test_page_defines_host_elements() {
        let page = include_str!("../index.html");
        for id in [consts::CANVAS_ID, consts::TUNING_SCRIPT_ID, consts::RESTART_BUTTON_ID] {
            assert!(page.contains(&format!("id=\"{id}\"")), "index.html lacks #{id}");
        }
    }
}

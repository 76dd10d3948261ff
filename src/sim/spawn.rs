//! Entity factories
//!
//! Each spawn appends exactly one entity to its list. Positions come from the
//! session RNG so a seed replays the same run.

use glam::Vec2;
use rand::Rng;

use super::state::{BonusCoin, Coin, GameState, Hazard};
use crate::consts::*;

impl GameState {
    /// Random x for an entity of `size` that fits fully on screen
    fn random_spawn_x(&mut self, size: f32) -> f32 {
        let max = (self.width - size).max(0.0);
        self.rng.random_range(0.0..=max)
    }

    /// Drop a hazard from a random column at the top edge
    pub fn spawn_hazard(&mut self) {
        let size = self.tuning.hazard_size;
        let x = self.random_spawn_x(size);
        self.hazards.push(Hazard {
            pos: Vec2::new(x, 0.0),
            size,
            speed: self.tuning.hazard_speed,
            color: HAZARD_COLOR,
        });
        log::debug!("Spawned hazard at x={x:.1}");
    }

    /// Drop a coin from a random column at the top edge
    pub fn spawn_coin(&mut self) {
        let size = self.tuning.coin_size;
        let x = self.random_spawn_x(size);
        self.coins.push(Coin {
            pos: Vec2::new(x, 0.0),
            size,
            color: COIN_COLOR,
        });
        log::debug!("Spawned coin at x={x:.1}");
    }

    /// Launch a bonus coin from the top of the left or right edge, drifting
    /// left or right (each a coin flip)
    pub fn spawn_bonus_coin(&mut self) {
        let size = self.tuning.bonus_size;
        let x = if self.rng.random_bool(0.5) {
            0.0
        } else {
            (self.width - size).max(0.0)
        };
        let direction = if self.rng.random_bool(0.5) { -1.0 } else { 1.0 };
        self.bonus_coins.push(BonusCoin {
            pos: Vec2::new(x, 0.0),
            size,
            vel: Vec2::new(direction * self.tuning.bonus_speed_x, self.tuning.bonus_speed_y),
            blink_ticks: 0,
            visible: true,
            color: BONUS_COLOR,
        });
        log::debug!("Spawned bonus coin at x={x:.1}");
    }
}

//! Demo autopilot
//!
//! Steers like a keyboard player: dodge whatever lethal thing is about to land
//! on the paddle, otherwise chase the lowest coin still catchable.

use glam::Vec2;

use super::collision::Aabb;
use super::state::GameState;
use crate::input::Direction;

/// How far above the paddle a falling threat starts to matter (pixels)
const LOOKAHEAD: f32 = 160.0;
/// Extra width around the paddle treated as unsafe
const MARGIN: f32 = 12.0;

/// Pick a steering direction for this tick (None = coast)
pub fn steer(state: &GameState) -> Option<Direction> {
    let player = state.player.bounds();
    let center = player.center().x;

    // Danger zone: the paddle's column, widened, from LOOKAHEAD above it down
    let danger = Aabb {
        min: player.min - Vec2::new(MARGIN, LOOKAHEAD),
        max: player.max + Vec2::new(MARGIN, 0.0),
    };

    let threat = state
        .hazards
        .iter()
        .map(|h| h.bounds())
        .chain(state.bonus_coins.iter().map(|b| b.bounds()))
        .filter(|b| danger.overlaps(b))
        .max_by(|a, b| a.top().total_cmp(&b.top()));

    if let Some(threat) = threat {
        let away = if threat.center().x < center {
            Direction::Right
        } else {
            Direction::Left
        };
        // Cornered: squeeze past on the other side
        let at_wall = match away {
            Direction::Left => player.left() <= 0.0,
            Direction::Right => player.right() >= state.width,
        };
        return Some(if at_wall {
            match away {
                Direction::Left => Direction::Right,
                Direction::Right => Direction::Left,
            }
        } else {
            away
        });
    }

    let target = state
        .coins
        .iter()
        .map(|c| c.bounds())
        .filter(|c| c.top() < player.top())
        .max_by(|a, b| a.top().total_cmp(&b.top()))?;

    let dx = target.center().x - center;
    if dx.abs() <= state.player.speed {
        None
    } else if dx < 0.0 {
        Some(Direction::Left)
    } else {
        Some(Direction::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Coin, Hazard};
    use crate::tuning::Tuning;

    #[test]
    fn test_dodges_hazard_overhead() {
        let mut state = GameState::new(480.0, 640.0, Tuning::default(), 1);
        // Slightly left of the paddle center (240)
        state.hazards.push(Hazard {
            pos: Vec2::new(220.0, 500.0),
            size: HAZARD_SIZE,
            speed: HAZARD_SPEED,
            color: HAZARD_COLOR,
        });
        assert_eq!(steer(&state), Some(Direction::Right));
    }

    #[test]
    fn test_chases_lowest_coin() {
        let mut state = GameState::new(480.0, 640.0, Tuning::default(), 1);
        state.coins.push(Coin {
            pos: Vec2::new(400.0, 100.0),
            size: COIN_SIZE,
            color: COIN_COLOR,
        });
        state.coins.push(Coin {
            pos: Vec2::new(20.0, 300.0),
            size: COIN_SIZE,
            color: COIN_COLOR,
        });
        assert_eq!(steer(&state), Some(Direction::Left));
    }

    #[test]
    fn test_idle_without_targets() {
        let state = GameState::new(480.0, 640.0, Tuning::default(), 1);
        assert_eq!(steer(&state), None);
    }
}

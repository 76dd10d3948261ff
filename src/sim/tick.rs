//! Fixed timestep simulation tick
//!
//! One tick = steer the player, run the spawn timers, move and prune
//! entities, then resolve collisions. A finished game never ticks.

use super::autopilot;
use super::state::{Coin, GameEvent, GamePhase, GameState, LethalKind};
use crate::input::Direction;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Where the paddle center should be (pointer/touch x)
    pub target_x: Option<f32>,
    /// Key currently held (keyboard scheme)
    pub steer: Option<Direction>,
    /// Idle/demo mode - the bot steers
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep of `dt_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    // Update player position
    let width = state.width;
    let friction = state.tuning.player_friction;
    match (input.autopilot, input.target_x) {
        (false, Some(x)) => state.player.move_to(x, width),
        (false, None) => state.player.drive(input.steer, friction, width),
        (true, _) => {
            let steer = autopilot::steer(state);
            state.player.drive(steer, friction, width);
        }
    }

    // Spawn timers
    for _ in 0..state.hazard_timer.advance(dt_ms) {
        state.spawn_hazard();
    }
    for _ in 0..state.coin_timer.advance(dt_ms) {
        state.spawn_coin();
    }

    advance_entities(state);
    resolve_collisions(state);
}

/// Move every entity by its velocity and drop whatever left the screen
pub fn advance_entities(state: &mut GameState) {
    let (width, height) = (state.width, state.height);

    state.hazards.retain_mut(|hazard| {
        hazard.pos += hazard.velocity();
        hazard.pos.y <= height
    });

    let coin_vel = Coin::velocity(state.coin_speed);
    state.coins.retain_mut(|coin| {
        coin.pos += coin_vel;
        coin.pos.y <= height
    });

    let blink_period = state.tuning.bonus_blink_ticks;
    state.bonus_coins.retain_mut(|bonus| {
        bonus.pos += bonus.vel;
        bonus.blink(blink_period);
        bonus.pos.y <= height && bonus.pos.x + bonus.size >= 0.0 && bonus.pos.x <= width
    });
}

/// Player vs coins, then hazards, then bonus coins
pub fn resolve_collisions(state: &mut GameState) {
    let player = state.player.bounds();

    let before = state.coins.len();
    state.coins.retain(|coin| !player.overlaps(&coin.bounds()));
    let caught = before - state.coins.len();
    for _ in 0..caught {
        collect_coin(state);
    }

    if state.hazards.iter().any(|h| player.overlaps(&h.bounds())) {
        state.end_game(LethalKind::Hazard);
        return;
    }

    // Bonus coins count as hazards
    if state.bonus_coins.iter().any(|b| player.overlaps(&b.bounds())) {
        state.end_game(LethalKind::BonusCoin);
    }
}

/// Score one coin, escalating at every milestone
fn collect_coin(state: &mut GameState) {
    state.score += 1;
    state.push_event(GameEvent::CoinCollected { score: state.score });

    if state.score.is_multiple_of(state.tuning.score_milestone) {
        state.coin_speed *= state.tuning.coin_speed_multiplier;
        state.spawn_bonus_coin();
        log::info!("Score {}: coin speed now {}", state.score, state.coin_speed);
        state.push_event(GameEvent::Milestone {
            score: state.score,
            coin_speed: state.coin_speed,
        });
    }
}

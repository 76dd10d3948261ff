//! Draw-list generation for 2D primitives
//!
//! Turns a [`GameState`] into backend-agnostic [`DrawCommand`]s. The list is
//! plain data so it can be tested without a canvas.

use glam::Vec2;

use crate::consts::TEXT_COLOR;
use crate::reward::Reward;
use crate::sim::{Aabb, GameState};

pub const SCORE_FONT: &str = "24px Arial";
pub const BANNER_FONT: &str = "48px Arial";

/// One drawing operation against a 2D surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { width: f32, height: f32 },
    FillRect { pos: Vec2, size: Vec2, color: &'static str },
    FillCircle { center: Vec2, radius: f32, color: &'static str },
    /// Text with its baseline-left corner at `pos`
    Text { text: String, pos: Vec2, font: &'static str, color: &'static str },
}

/// Filled circle inscribed in a bounding square
pub fn circle(bounds: Aabb, color: &'static str) -> DrawCommand {
    DrawCommand::FillCircle {
        center: bounds.center(),
        radius: (bounds.right() - bounds.left()) / 2.0,
        color,
    }
}

fn text(text: String, pos: Vec2, font: &'static str) -> DrawCommand {
    DrawCommand::Text {
        text,
        pos,
        font,
        color: TEXT_COLOR,
    }
}

/// Everything to draw for one frame: clear, player, coins, hazards, bonus
/// coins (when lit), score, and the game-over overlay once the run ended
pub fn frame(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(
        4 + state.coins.len() + state.hazards.len() + state.bonus_coins.len(),
    );

    commands.push(DrawCommand::Clear {
        width: state.width,
        height: state.height,
    });

    let player = &state.player;
    commands.push(DrawCommand::FillRect {
        pos: player.pos,
        size: player.size,
        color: player.color,
    });

    commands.extend(state.coins.iter().map(|c| circle(c.bounds(), c.color)));
    commands.extend(state.hazards.iter().map(|h| circle(h.bounds(), h.color)));
    commands.extend(
        state
            .bonus_coins
            .iter()
            .filter(|b| b.visible)
            .map(|b| circle(b.bounds(), b.color)),
    );

    commands.push(text(
        format!("Score: {}", state.score),
        Vec2::new(10.0, 30.0),
        SCORE_FONT,
    ));

    if state.is_game_over() {
        commands.extend(game_over_overlay(state));
    }

    commands
}

/// Final score and coupon value, centered on the surface
pub fn game_over_overlay(state: &GameState) -> Vec<DrawCommand> {
    let center = Vec2::new(state.width / 2.0, state.height / 2.0);
    let reward = Reward::new(state.score, state.tuning.points_per_reward_unit);
    vec![
        text(
            "Game Over!".to_string(),
            center + Vec2::new(-120.0, 0.0),
            BANNER_FONT,
        ),
        text(
            format!("Final Score: {}", state.score),
            center + Vec2::new(-80.0, 40.0),
            SCORE_FONT,
        ),
        text(
            format!("Coupon Value: {}{}", state.tuning.currency_symbol, reward),
            center + Vec2::new(-100.0, 80.0),
            SCORE_FONT,
        ),
    ]
}

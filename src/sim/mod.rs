//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (list order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{
    BonusCoin, Coin, GameEvent, GamePhase, GameState, Hazard, LethalKind, Player, SpawnTimer,
};
pub use tick::{TickInput, advance_entities, resolve_collisions, tick};

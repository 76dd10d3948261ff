//! Game balance configuration
//!
//! Every gameplay constant lives in [`Tuning`] so a page can ship its own
//! balance as inline JSON. Defaults reproduce the classic game.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::ControlScheme;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_size: f32,
    /// Pixels per tick while a key is held
    pub player_speed: f32,
    /// Velocity multiplier per tick with no key held (0-1)
    pub player_friction: f32,

    // === Falling entities ===
    pub hazard_size: f32,
    pub hazard_speed: f32,
    pub coin_size: f32,
    /// Starting coin fall speed (escalates at milestones)
    pub coin_speed: f32,
    pub bonus_size: f32,
    pub bonus_speed_x: f32,
    pub bonus_speed_y: f32,
    pub bonus_blink_ticks: u32,

    // === Spawning ===
    pub hazard_interval_ms: f32,
    pub coin_interval_ms: f32,

    // === Escalation ===
    pub score_milestone: u32,
    pub coin_speed_multiplier: f32,

    // === Reward ===
    pub points_per_reward_unit: u32,
    pub currency_symbol: String,
    /// Phone number (with country code) the claim link is addressed to
    pub claim_phone: Option<String>,

    // === Controls ===
    /// Forces a control scheme instead of detecting one
    pub controls: Option<ControlScheme>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_friction: PLAYER_FRICTION,

            hazard_size: HAZARD_SIZE,
            hazard_speed: HAZARD_SPEED,
            coin_size: COIN_SIZE,
            coin_speed: COIN_START_SPEED,
            bonus_size: BONUS_SIZE,
            bonus_speed_x: BONUS_SPEED_X,
            bonus_speed_y: BONUS_SPEED_Y,
            bonus_blink_ticks: BONUS_BLINK_TICKS,

            hazard_interval_ms: HAZARD_INTERVAL_MS,
            coin_interval_ms: COIN_INTERVAL_MS,

            score_milestone: SCORE_MILESTONE,
            coin_speed_multiplier: COIN_SPEED_MULTIPLIER,

            points_per_reward_unit: POINTS_PER_REWARD_UNIT,
            currency_symbol: "₹".to_string(),
            claim_phone: None,

            controls: None,
        }
    }
}

/// Why a tuning document was rejected
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    /// Not valid JSON for [`Tuning`]
    #[error("tuning is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Parsed, but a value is out of range
    #[error("invalid tuning `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

impl Tuning {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Like [`Tuning::from_json`], but logs and falls back to defaults
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from page");
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    /// Check every value is usable by the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("player_size", self.player_size),
            ("player_speed", self.player_speed),
            ("hazard_size", self.hazard_size),
            ("hazard_speed", self.hazard_speed),
            ("coin_size", self.coin_size),
            ("coin_speed", self.coin_speed),
            ("bonus_size", self.bonus_size),
            ("hazard_interval_ms", self.hazard_interval_ms),
            ("coin_interval_ms", self.coin_interval_ms),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid { field, reason: "must be positive and finite" });
            }
        }

        let intervals = [
            ("hazard_interval_ms", self.hazard_interval_ms),
            ("coin_interval_ms", self.coin_interval_ms),
        ];
        for (field, value) in intervals {
            if value < TICK_MS {
                return Err(TuningError::Invalid { field, reason: "must be at least one tick" });
            }
        }

        for (field, value) in [
            ("bonus_speed_x", self.bonus_speed_x),
            ("bonus_speed_y", self.bonus_speed_y),
        ] {
            if !value.is_finite() {
                return Err(TuningError::Invalid { field, reason: "must be finite" });
            }
        }

        if !(0.0..=1.0).contains(&self.player_friction) {
            return Err(TuningError::Invalid {
                field: "player_friction",
                reason: "must be within 0..=1",
            });
        }
        if !self.coin_speed_multiplier.is_finite() || self.coin_speed_multiplier < 1.0 {
            return Err(TuningError::Invalid {
                field: "coin_speed_multiplier",
                reason: "must be at least 1",
            });
        }
        if self.score_milestone == 0 {
            return Err(TuningError::Invalid { field: "score_milestone", reason: "must be non-zero" });
        }
        if self.points_per_reward_unit == 0 {
            return Err(TuningError::Invalid {
                field: "points_per_reward_unit",
                reason: "must be non-zero",
            });
        }
        if self.bonus_blink_ticks == 0 {
            return Err(TuningError::Invalid { field: "bonus_blink_ticks", reason: "must be non-zero" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "coin_interval_ms": 500, "controls": "keyboard" }"#)
            .expect("valid tuning");
        assert_eq!(tuning.coin_interval_ms, 500.0);
        assert_eq!(tuning.controls, Some(ControlScheme::Keyboard));
        assert_eq!(tuning.hazard_interval_ms, HAZARD_INTERVAL_MS);
        assert_eq!(tuning.currency_symbol, "₹");
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "player_friction": 1.5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "player_friction", .. }));

        let err = Tuning::from_json(r#"{ "score_milestone": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "score_milestone", .. }));

        let err = Tuning::from_json(r#"{ "coin_interval_ms": -1 }"#).unwrap_err();
        assert!(err.to_string().contains("coin_interval_ms"));
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(TuningError::Json(_))));
        assert_eq!(Tuning::from_json_or_default("{ nope"), Tuning::default());
    }

    #[test]
    fn test_json_error_keeps_source() {
        let err = Tuning::from_json(r#"{ "player_size": "big" }"#).unwrap_err();
        assert!(err.to_string().starts_with("tuning is not valid JSON"));
        assert!(std::error::Error::source(&err).is_some());

        let err = Tuning::from_json(r#"{ "score_milestone": 0 }"#).unwrap_err();
        assert_eq!(err.to_string(), "invalid tuning `score_milestone`: must be non-zero");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_rejects_sub_tick_intervals() {
        let err = Tuning::from_json(r#"{ "coin_interval_ms": 1e-7 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "coin_interval_ms", .. }));

        let err = Tuning::from_json(r#"{ "hazard_interval_ms": 10 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "hazard_interval_ms", .. }));

        // One full tick is the shortest usable interval
        let mut tuning = Tuning::default();
        tuning.coin_interval_ms = TICK_MS;
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_finite_values() {
        // JSON has no infinity literal, but overflowing numbers parse to it
        assert!(Tuning::from_json(r#"{ "coin_interval_ms": 1e300 }"#).is_err());

        let mut tuning = Tuning::default();
        tuning.bonus_speed_x = f32::NAN;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Invalid { field: "bonus_speed_x", .. })
        ));

        let mut tuning = Tuning::default();
        tuning.coin_speed_multiplier = f32::INFINITY;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Invalid { field: "coin_speed_multiplier", .. })
        ));

        let mut tuning = Tuning::default();
        tuning.player_friction = f32::NAN;
        assert!(tuning.validate().is_err());
    }
}

//! Control schemes and input normalization
//!
//! The host turns raw DOM events into [`InputEvent`]s and feeds them to an
//! [`InputAdapter`], which accumulates them into the next [`TickInput`].
//! Exactly one [`ControlScheme`] is active per session.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// How the player steers the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlScheme {
    /// Mouse drag, paddle centered under the pointer
    Pointer,
    /// Arrow keys set a velocity that decays when released
    Keyboard,
    /// Finger drag, same contract as pointer
    Touch,
}

impl ControlScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlScheme::Pointer => "pointer",
            ControlScheme::Keyboard => "keyboard",
            ControlScheme::Touch => "touch",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pointer" | "mouse" => Some(ControlScheme::Pointer),
            "keyboard" | "keys" => Some(ControlScheme::Keyboard),
            "touch" => Some(ControlScheme::Touch),
            _ => None,
        }
    }

    /// Pick the scheme for a session. An explicit preference wins; otherwise
    /// touch-capable devices get touch and everything else gets the pointer.
    pub fn select(touch_capable: bool, preferred: Option<ControlScheme>) -> Self {
        match preferred {
            Some(scheme) => scheme,
            None if touch_capable => ControlScheme::Touch,
            None => ControlScheme::Pointer,
        }
    }
}

/// Horizontal steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1 for left, +1 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Normalized input events, in surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32 },
    KeyDown(Direction),
    KeyUp(Direction),
    /// `None` when the touch list carried no coordinates
    TouchMove { x: Option<f32> },
}

/// Accumulates events for the active scheme into tick input
#[derive(Debug, Clone)]
pub struct InputAdapter {
    scheme: ControlScheme,
    input: TickInput,
}

impl InputAdapter {
    pub fn new(scheme: ControlScheme) -> Self {
        log::info!("Control scheme: {}", scheme.as_str());
        Self {
            scheme,
            input: TickInput::default(),
        }
    }

    pub fn scheme(&self) -> ControlScheme {
        self.scheme
    }

    /// Apply one event. Events for other schemes and malformed events are ignored.
    pub fn handle(&mut self, event: InputEvent) {
        match (self.scheme, event) {
            (ControlScheme::Pointer, InputEvent::PointerMove { x })
            | (ControlScheme::Touch, InputEvent::TouchMove { x: Some(x) }) => {
                if x.is_finite() {
                    self.input.target_x = Some(x);
                }
            }
            (ControlScheme::Keyboard, InputEvent::KeyDown(dir)) => {
                self.input.steer = Some(dir);
            }
            (ControlScheme::Keyboard, InputEvent::KeyUp(dir)) => {
                // Releasing the opposite key keeps the held one steering
                if self.input.steer == Some(dir) {
                    self.input.steer = None;
                }
            }
            _ => {}
        }
    }

    /// Toggle the demo autopilot
    pub fn toggle_autopilot(&mut self) -> bool {
        self.input.autopilot = !self.input.autopilot;
        self.input.autopilot
    }

    /// Input for the next tick. Held keys and the last pointer position persist.
    pub fn tick_input(&self) -> &TickInput {
        &self.input
    }

    /// Forget all accumulated input (new session)
    pub fn reset(&mut self) {
        self.input = TickInput::default();
    }
}

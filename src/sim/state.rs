//! Game state and core simulation types
//!
//! One [`GameState`] is one session: player, falling entities, score and
//! spawn timers. Nothing here touches the platform.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::clamp_span;
use crate::consts::*;
use crate::input::Direction;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended (terminal)
    GameOver,
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LethalKind {
    Hazard,
    BonusCoin,
}

/// Notable things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    CoinCollected { score: u32 },
    /// Score hit a milestone: coins sped up and a bonus coin spawned
    Milestone { score: u32, coin_speed: f32 },
    GameOver { score: u32, cause: LethalKind },
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick while steering
    pub speed: f32,
    /// Horizontal velocity (pixels per tick)
    pub vel_x: f32,
    pub color: &'static str,
}

impl Player {
    /// Centered horizontally, resting near the bottom of the surface
    pub fn new(width: f32, height: f32, tuning: &Tuning) -> Self {
        let size = tuning.player_size;
        let (x, _) = clamp_span(width / 2.0 - size / 2.0, size, width);
        Self {
            pos: Vec2::new(x, height - PLAYER_BOTTOM_OFFSET),
            size: Vec2::splat(size),
            speed: tuning.player_speed,
            vel_x: 0.0,
            color: PLAYER_COLOR,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Center the paddle on `x`, clamped to the surface
    pub fn move_to(&mut self, x: f32, bounds_width: f32) {
        self.pos.x = x - self.size.x / 2.0;
        self.vel_x = 0.0;
        self.clamp(bounds_width);
    }

    /// One tick of keyboard-style motion: steer sets the velocity, otherwise
    /// it decays by `friction`
    pub fn drive(&mut self, steer: Option<Direction>, friction: f32, bounds_width: f32) {
        match steer {
            Some(dir) => self.vel_x = dir.sign() * self.speed,
            None => {
                self.vel_x *= friction;
                if self.vel_x.abs() < 0.01 {
                    self.vel_x = 0.0;
                }
            }
        }
        self.pos.x += self.vel_x;
        self.clamp(bounds_width);
    }

    /// Keep the paddle fully on screen, killing velocity at the walls
    pub fn clamp(&mut self, bounds_width: f32) {
        let (x, clamped) = clamp_span(self.pos.x, self.size.x, bounds_width);
        self.pos.x = x;
        if clamped {
            self.vel_x = 0.0;
        }
    }
}

/// A falling obstacle; touching one ends the run
#[derive(Debug, Clone)]
pub struct Hazard {
    pub pos: Vec2,
    pub size: f32,
    /// Pixels per tick
    pub speed: f32,
    pub color: &'static str,
}

impl Hazard {
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(0.0, self.speed)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// A falling coin. Fall speed is shared by all coins (see [`GameState::coin_speed`]).
#[derive(Debug, Clone)]
pub struct Coin {
    pub pos: Vec2,
    pub size: f32,
    pub color: &'static str,
}

impl Coin {
    pub fn velocity(coin_speed: f32) -> Vec2 {
        Vec2::new(0.0, coin_speed)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// Blinking coin that drifts diagonally. Looks like a reward, kills like a hazard.
#[derive(Debug, Clone)]
pub struct BonusCoin {
    pub pos: Vec2,
    pub size: f32,
    pub vel: Vec2,
    /// Ticks since the last visibility flip
    pub blink_ticks: u32,
    /// Render hint only
    pub visible: bool,
    pub color: &'static str,
}

impl BonusCoin {
    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }

    /// Advance the blink counter, flipping visibility every `period` ticks
    pub fn blink(&mut self, period: u32) {
        self.blink_ticks += 1;
        if self.blink_ticks >= period {
            self.blink_ticks = 0;
            self.visible = !self.visible;
        }
    }
}

/// Periodic spawner driven by simulated elapsed time
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    pub interval_ms: f32,
    elapsed_ms: f32,
    active: bool,
}

impl SpawnTimer {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance by `dt_ms`, returning how many times the timer fired.
    /// Like an interval timer, the first fire comes one full interval after start.
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        if !self.active {
            return 0;
        }
        if !(self.interval_ms.is_finite() && self.interval_ms > 0.0) {
            return 0;
        }
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms < self.interval_ms {
            return 0;
        }
        let fired = (self.elapsed_ms / self.interval_ms).floor();
        self.elapsed_ms = (self.elapsed_ms - fired * self.interval_ms).max(0.0);
        fired as u32
    }

    /// Stop the timer. Returns false if it was already stopped.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}

/// Complete session state (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Balance values for this session
    pub tuning: Tuning,
    /// Drawing surface size in pixels
    pub width: f32,
    pub height: f32,
    /// Score (coins caught)
    pub score: u32,
    /// Current fall speed of every coin
    pub coin_speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub hazard_timer: SpawnTimer,
    pub coin_timer: SpawnTimer,
    pub player: Player,
    pub hazards: Vec<Hazard>,
    pub coins: Vec<Coin>,
    pub bonus_coins: Vec<BonusCoin>,
    /// Events since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session for a surface of `width` x `height` pixels
    pub fn new(width: f32, height: f32, tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            width,
            height,
            score: 0,
            coin_speed: tuning.coin_speed,
            time_ticks: 0,
            phase: GamePhase::Running,
            hazard_timer: SpawnTimer::new(tuning.hazard_interval_ms),
            coin_timer: SpawnTimer::new(tuning.coin_interval_ms),
            player: Player::new(width, height, &tuning),
            hazards: Vec::new(),
            coins: Vec::new(),
            bonus_coins: Vec::new(),
            events: Vec::new(),
            tuning,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Running -> GameOver. Halts both spawners; later calls do nothing.
    pub fn end_game(&mut self, cause: LethalKind) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.hazard_timer.cancel();
        self.coin_timer.cancel();
        log::info!("Game over ({:?}) with score {}", cause, self.score);
        self.push_event(GameEvent::GameOver {
            score: self.score,
            cause,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(480.0, 640.0, Tuning::default(), 1);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.pos, Vec2::new(215.0, 590.0));
        assert!(state.hazard_timer.is_active());
        assert!(state.coin_timer.is_active());
    }

    #[test]
    fn test_spawn_timer_fires_per_interval() {
        let mut timer = SpawnTimer::new(1000.0);
        assert_eq!(timer.advance(999.0), 0);
        assert_eq!(timer.advance(1.0), 1);
        assert_eq!(timer.advance(2500.0), 2);
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.advance(5000.0), 0);
    }

    #[test]
    fn test_spawn_timer_tiny_interval_returns() {
        // Below f32 precision at one tick of elapsed time
        let mut timer = SpawnTimer::new(1e-7);
        let fired = timer.advance(TICK_MS);
        assert!(fired > 1_000_000);
        assert!(timer.elapsed_ms < 0.001);

        let mut timer = SpawnTimer::new(0.0);
        assert_eq!(timer.advance(TICK_MS), 0);
        let mut timer = SpawnTimer::new(f32::NAN);
        assert_eq!(timer.advance(TICK_MS), 0);
    }

    #[test]
    fn test_end_game_once() {
        let mut state = GameState::new(480.0, 640.0, Tuning::default(), 1);
        state.end_game(LethalKind::Hazard);
        state.end_game(LethalKind::BonusCoin);
        assert!(state.is_game_over());
        assert!(!state.hazard_timer.is_active());
        assert!(!state.coin_timer.is_active());
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver { score: 0, cause: LethalKind::Hazard }]
        );
    }

    #[test]
    fn test_drive_friction_and_clamp() {
        let tuning = Tuning::default();
        let mut player = Player::new(480.0, 640.0, &tuning);
        player.drive(Some(Direction::Right), 0.9, 480.0);
        assert_eq!(player.vel_x, 5.0);
        assert_eq!(player.pos.x, 220.0);

        player.drive(None, 0.9, 480.0);
        assert!((player.vel_x - 4.5).abs() < 1e-5);

        // Ram the left wall
        for _ in 0..200 {
            player.drive(Some(Direction::Left), 0.9, 480.0);
        }
        assert_eq!(player.pos.x, 0.0);
        assert_eq!(player.vel_x, 0.0);
    }

    #[test]
    fn test_move_to_centers_and_clamps() {
        let tuning = Tuning::default();
        let mut player = Player::new(480.0, 640.0, &tuning);
        player.move_to(100.0, 480.0);
        assert_eq!(player.pos.x, 75.0);
        player.move_to(479.0, 480.0);
        assert_eq!(player.pos.x, 430.0);
        player.move_to(-30.0, 480.0);
        assert_eq!(player.pos.x, 0.0);
    }

    #[test]
    fn test_bonus_blink() {
        let mut bonus = BonusCoin {
            pos: Vec2::ZERO,
            size: 20.0,
            vel: Vec2::new(2.0, 3.0),
            blink_ticks: 0,
            visible: true,
            color: BONUS_COLOR,
        };
        for _ in 0..19 {
            bonus.blink(20);
        }
        assert!(bonus.visible);
        bonus.blink(20);
        assert!(!bonus.visible);
        for _ in 0..20 {
            bonus.blink(20);
        }
        assert!(bonus.visible);
    }
}

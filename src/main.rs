//! Coin Catcher entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use coin_catcher::consts::*;
    use coin_catcher::renderer::{CanvasRenderer, frame};
    use coin_catcher::reward::claim_url;
    use coin_catcher::sim::{GameEvent, GameState, tick};
    use coin_catcher::{ControlScheme, Direction, InputAdapter, InputEvent, Reward, Tuning};

    const CLAIM_BUTTON_ID: &str = "claim-btn";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: InputAdapter,
        tuning: Tuning,
        accumulator: f32,
        last_time: f64,
        size: (f32, f32),
    }

    impl Game {
        fn new(renderer: CanvasRenderer, input: InputAdapter, tuning: Tuning, size: (f32, f32)) -> Self {
            let seed = js_sys::Date::now() as u64;
            log::info!("Game initialized with seed: {}", seed);
            Self {
                state: GameState::new(size.0, size.1, tuning.clone(), seed),
                renderer,
                input,
                tuning,
                accumulator: 0.0,
                last_time: 0.0,
                size,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt_ms: f32) {
            let dt_ms = dt_ms.min(100.0);
            self.accumulator += dt_ms;

            let mut substeps = 0;
            while self.accumulator >= TICK_MS && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, self.input.tick_input(), TICK_MS);
                self.accumulator -= TICK_MS;
                substeps += 1;
            }

            for event in self.state.drain_events() {
                match event {
                    GameEvent::CoinCollected { score } => log::debug!("Coin! score={}", score),
                    GameEvent::Milestone { score, coin_speed } => {
                        log::info!("Milestone {}: coins now fall at {}", score, coin_speed)
                    }
                    GameEvent::GameOver { score, .. } => self.show_claim(score),
                }
            }
        }

        /// Render the current frame
        fn render(&self) {
            self.renderer.render(&frame(&self.state));
        }

        /// Hand the reward to the claim link, addressed to the configured
        /// phone number when there is one
        fn show_claim(&self, score: u32) {
            let reward = Reward::new(score, self.tuning.points_per_reward_unit);
            log::info!("Final score {} -> coupon {}{}", score, self.tuning.currency_symbol, reward);

            let message = reward.claim_message(&self.tuning.currency_symbol);
            let encoded: String = js_sys::encode_uri_component(&message).into();
            let url = claim_url(self.tuning.claim_phone.as_deref(), &encoded);

            if let Err(e) = add_claim_button(url) {
                log::warn!("Could not show claim button: {:?}", e);
            }
        }

        /// Reset game state for restart
        fn restart(&mut self) {
            let seed = js_sys::Date::now() as u64;
            self.state = GameState::new(self.size.0, self.size.1, self.tuning.clone(), seed);
            self.accumulator = 0.0;
            self.input.reset();
            remove_claim_button();
            log::info!("Game restarted with seed: {}", seed);
        }
    }

    fn document() -> Result<Document, JsValue> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))
    }

    fn add_claim_button(url: String) -> Result<(), JsValue> {
        let document = document()?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

        let button = document.create_element("button")?;
        button.set_id(CLAIM_BUTTON_ID);
        button.set_text_content(Some("Claim Coupon"));
        button.set_attribute(
            "style",
            "position:absolute;left:50%;top:70%;transform:translate(-50%,-50%);\
             padding:10px 20px;font-size:20px;cursor:pointer",
        )?;

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                    log::warn!("Could not open claim link: {:?}", e);
                }
            }
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();

        body.append_child(&button)?;
        Ok(())
    }

    fn remove_claim_button() {
        if let Some(el) = document().ok().and_then(|d| d.get_element_by_id(CLAIM_BUTTON_ID)) {
            el.remove();
        }
    }

    /// Tuning from `<script id="tuning" type="application/json">`, if present
    fn load_tuning(document: &Document) -> Tuning {
        match document.get_element_by_id(TUNING_SCRIPT_ID).and_then(|el| el.text_content()) {
            Some(json) => Tuning::from_json_or_default(&json),
            None => {
                log::info!("Using default tuning");
                Tuning::default()
            }
        }
    }

    /// `?controls=keyboard` style override
    fn controls_from_query() -> Option<ControlScheme> {
        let search = web_sys::window()?.location().search().ok()?;
        search
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.strip_prefix("controls="))
            .and_then(ControlScheme::from_str)
    }

    /// Client x to surface pixels (canvas may be CSS-scaled)
    fn surface_x(canvas: &HtmlCanvasElement, client_x: i32) -> Option<f32> {
        let rect = canvas.get_bounding_client_rect();
        if rect.width() <= 0.0 {
            return None;
        }
        let scale = f64::from(canvas.width()) / rect.width();
        Some(((f64::from(client_x) - rect.left()) * scale) as f32)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Coin Catcher starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = document()?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;
        let size = (canvas.width() as f32, canvas.height() as f32);

        let tuning = load_tuning(&document);
        let touch_capable = window.navigator().max_touch_points() > 0;
        let scheme = ControlScheme::select(touch_capable, controls_from_query().or(tuning.controls));

        let renderer = CanvasRenderer::new(&canvas)?;
        let game = Rc::new(RefCell::new(Game::new(
            renderer,
            InputAdapter::new(scheme),
            tuning,
            size,
        )));

        setup_input_handlers(&canvas, scheme, game.clone())?;
        setup_restart_button(&document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Coin Catcher running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        scheme: ControlScheme,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        match scheme {
            ControlScheme::Pointer => {
                let game = game.clone();
                let canvas_clone = canvas.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                    if let Some(x) = surface_x(&canvas_clone, event.client_x()) {
                        game.borrow_mut().input.handle(InputEvent::PointerMove { x });
                    }
                });
                canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
                closure.forget();
            }
            ControlScheme::Touch => {
                let game = game.clone();
                let canvas_clone = canvas.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    let x = event
                        .touches()
                        .get(0)
                        .and_then(|touch| surface_x(&canvas_clone, touch.client_x()));
                    game.borrow_mut().input.handle(InputEvent::TouchMove { x });
                });
                canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
                closure.forget();
            }
            ControlScheme::Keyboard => {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                    if let Some(dir) = Direction::from_key(&event.key()) {
                        event.prevent_default();
                        game.borrow_mut().input.handle(InputEvent::KeyUp(dir));
                    }
                });
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
                closure.forget();
            }
        }

        // Keyboard: steering (keyboard scheme only), autopilot, restart
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                match key.as_str() {
                    "i" | "I" => {
                        let on = g.input.toggle_autopilot();
                        log::info!("Autopilot: {}", on);
                    }
                    "Enter" if g.state.is_game_over() => g.restart(),
                    _ => {
                        if let Some(dir) = Direction::from_key(&key) {
                            if g.input.scheme() == ControlScheme::Keyboard {
                                event.prevent_default();
                            }
                            g.input.handle(InputEvent::KeyDown(dir));
                        }
                    }
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id(RESTART_BUTTON_ID) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().restart();
            });
            if let Err(e) = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
                log::warn!("Could not wire restart button: {:?}", e);
            }
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window; game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Draw first, then advance. Keeps running after game over so the final
    /// frame stays on screen.
    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt_ms = if g.last_time > 0.0 {
                (time - g.last_time) as f32
            } else {
                TICK_MS
            };
            g.last_time = time;

            g.render();
            g.update(dt_ms);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coin Catcher (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    run_demo(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the autopilot play one session and report the result
#[cfg(not(target_arch = "wasm32"))]
fn run_demo(seed: u64) {
    use coin_catcher::Reward;
    use coin_catcher::consts::TICK_MS;
    use coin_catcher::sim::{GameEvent, GameState, TickInput, tick};
    use coin_catcher::tuning::Tuning;

    // Two minutes of play
    const DEMO_TICKS: u64 = 60 * 120;

    let mut state = GameState::new(480.0, 640.0, Tuning::default(), seed);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    while state.time_ticks < DEMO_TICKS && !state.is_game_over() {
        tick(&mut state, &input, TICK_MS);
        for event in state.drain_events() {
            match event {
                GameEvent::Milestone { score, coin_speed } => {
                    log::info!("Milestone {}: coins now fall at {}", score, coin_speed)
                }
                other => log::debug!("{:?}", other),
            }
        }
    }

    let reward = Reward::new(state.score, state.tuning.points_per_reward_unit);
    println!(
        "seed {}: {} after {} ticks, score {}, coupon {}{}",
        seed,
        if state.is_game_over() { "game over" } else { "survived" },
        state.time_ticks,
        state.score,
        state.tuning.currency_symbol,
        reward
    );
}

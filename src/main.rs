//! Cosmic Collector entry point
//!
//! Platform half of the frame loop: requestAnimationFrame scheduling,
//! buffered pointer/resize input, HUD DOM updates, and a canvas-2d draw
//! adapter. The sim itself never touches any of this.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::f64::consts::TAU;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

    use cosmic_collector::consts::*;
    use cosmic_collector::highscore::LocalStore;
    use cosmic_collector::sim::{tick, FrameSnapshot, GamePhase, GameState, TickInput};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        store: LocalStore,
        input: TickInput,
        last_time: f64,
        adapter: CanvasAdapter,
        /// Cleared on pagehide; no further frames get scheduled
        running: Rc<Cell<bool>>,
    }

    impl Game {
        fn new(seed: u64, adapter: CanvasAdapter) -> Self {
            let store = LocalStore;
            Self {
                state: GameState::new(seed, &store),
                store,
                input: TickInput::default(),
                last_time: 0.0,
                adapter,
                running: Rc::new(Cell::new(true)),
            }
        }

        /// Run one tick from the buffered input, then clear one-shots
        fn update(&mut self, time: f64) {
            let delta = if self.last_time > 0.0 {
                ((time - self.last_time) / FRAME_INTERVAL_MS as f64) as f32
            } else {
                1.0
            };
            self.last_time = time;

            tick(&mut self.state, &self.input, delta, &mut self.store);

            // Latest pointer sample stays buffered; commands are one-shot
            self.input.start = false;
            self.input.reset = false;
            self.input.resize = None;
        }

        /// Hand the frame snapshot to the draw adapter
        fn render(&self) {
            self.adapter.draw(self.state.snapshot());
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-high-score") {
                el.set_text_content(Some(&self.state.high_score.to_string()));
            }

            // Overlays follow the phase
            let phase = self.state.phase;
            if let Some(el) = document.get_element_by_id("start-screen") {
                let class = if phase == GamePhase::Idle { "overlay" } else { "overlay hidden" };
                let _ = el.set_attribute("class", class);
            }
            if let Some(el) = document.get_element_by_id("game-over-screen") {
                let class = if phase == GamePhase::GameOver {
                    "overlay"
                } else {
                    "overlay hidden"
                };
                let _ = el.set_attribute("class", class);
            }
            if phase == GamePhase::GameOver {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&self.state.score.to_string()));
                }
            }
        }
    }

    /// Canvas-2d draw adapter
    ///
    /// Consumes frame snapshots and never mutates game state: a
    /// translucent trail fade, glowing orbs, flat red hazards, and a
    /// cyan triangle ship.
    struct CanvasAdapter {
        ctx: CanvasRenderingContext2d,
        width: f64,
        height: f64,
    }

    impl CanvasAdapter {
        fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
            Self { ctx, width, height }
        }

        fn resize(&mut self, width: f64, height: f64) {
            self.width = width;
            self.height = height;
        }

        fn draw(&self, frame: FrameSnapshot) {
            let ctx = &self.ctx;

            // Fade instead of clear, leaving short motion trails
            ctx.set_fill_style_str("rgba(0, 0, 0, 0.1)");
            ctx.fill_rect(0.0, 0.0, self.width, self.height);

            if frame.phase != GamePhase::Playing {
                return;
            }

            for c in frame.collectibles {
                ctx.save();
                let color = format!("hsl({}, 80%, 60%)", c.hue);
                ctx.set_shadow_blur(10.0 * c.glow as f64);
                ctx.set_shadow_color(&color);
                ctx.set_fill_style_str(&color);
                ctx.begin_path();
                let _ = ctx.arc(c.pos.x as f64, c.pos.y as f64, c.radius as f64, 0.0, TAU);
                ctx.fill();
                ctx.restore();
            }

            for h in frame.hazards {
                ctx.set_fill_style_str("#FF4444");
                ctx.begin_path();
                let _ = ctx.arc(h.pos.x as f64, h.pos.y as f64, h.radius as f64, 0.0, TAU);
                ctx.fill();
            }

            // Player ship
            let (px, py) = (frame.player.pos.x as f64, frame.player.pos.y as f64);
            ctx.save();
            ctx.set_fill_style_str("#00FFFF");
            ctx.set_shadow_blur(15.0);
            ctx.set_shadow_color("#00FFFF");
            ctx.begin_path();
            ctx.move_to(px, py - 15.0);
            ctx.line_to(px - 20.0, py + 15.0);
            ctx.line_to(px + 20.0, py + 15.0);
            ctx.close_path();
            ctx.fill();
            ctx.restore();
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cosmic Collector starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let width = canvas.client_width() as u32;
        let height = canvas.client_height() as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");
        let adapter = CanvasAdapter::new(ctx, width as f64, height as f64);

        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(seed, adapter);
        game.input.resize = Some((width as f32, height as f32));
        let game = Rc::new(RefCell::new(game));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());
        setup_cancellation(game.clone());

        request_animation_frame(game);

        log::info!("Cosmic Collector running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - buffer latest pointer x, consumed next tick
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().input.pointer_x = Some(event.offset_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    game.borrow_mut().input.pointer_x = Some(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window resize - buffer new field size, consumed next tick
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let w = canvas_clone.client_width() as u32;
                let h = canvas_clone.client_height() as u32;
                canvas_clone.set_width(w);
                canvas_clone.set_height(h);
                let mut g = game.borrow_mut();
                g.adapter.resize(w as f64, h as f64);
                g.input.resize = Some((w as f32, h as f32));
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.start = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.reset = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Stop scheduling frames when the page goes away. Cooperative: a
    /// tick in flight finishes, the next one is never requested.
    fn setup_cancellation(game: Rc<RefCell<Game>>) {
        let running = game.borrow().running.clone();
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            running.set(false);
            log::info!("Frame loop cancelled");
        });
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        if !game.borrow().running.get() {
            return;
        }
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cosmic_collector::highscore::MemoryStore;
    use cosmic_collector::sim::{tick, GamePhase, GameState, TickInput};

    env_logger::init();
    log::info!("Cosmic Collector (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    let mut store = MemoryStore::default();
    let mut state = GameState::new(0xC0_5111C, &store);
    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, 1.0, &mut store);

    // Sweep the pointer back and forth until a hazard ends the run
    let mut ticks = 0u64;
    while state.phase == GamePhase::Playing && ticks < 600_000 {
        let x = (ticks as f32 * 0.01).sin() * 0.5 + 0.5;
        let input = TickInput {
            pointer_x: Some(x * state.field_width),
            ..Default::default()
        };
        tick(&mut state, &input, 1.0, &mut store);
        ticks += 1;
    }

    println!(
        "Demo run over after {} ticks: score {}, high score {}",
        ticks, state.score, state.high_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

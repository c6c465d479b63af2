//! Bouncy Box entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use bouncy_box::renderer::CanvasRenderer;
    use bouncy_box::sim::{GameState, Level, PointerEvent, TickInput, tick};
    use bouncy_box::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Option<CanvasRenderer>,
        last_time: f64,
        input: TickInput,
    }

    impl Game {
        fn new(seed: u64, level: Level, tuning: Tuning) -> Self {
            Self {
                state: GameState::new(seed, level, tuning),
                renderer: None,
                last_time: 0.0,
                input: TickInput::default(),
            }
        }

        /// Frame delta in seconds, scaled and clamped for the sim;
        /// the first frame runs with dt = 0
        fn frame_dt(&mut self, time: f64) -> f32 {
            let dt = if self.last_time > 0.0 {
                (((time - self.last_time) / 1000.0) as f32).max(0.0)
            } else {
                0.0
            };
            self.last_time = time;
            dt * self.state.tuning.time_scale
        }

        /// Run one simulation frame, draining queued pointer events
        fn update(&mut self, dt: f32) {
            let input = std::mem::take(&mut self.input);
            tick(&mut self.state, &input, dt);
        }

        /// Render the current frame
        fn render(&self) {
            if let Some(ref renderer) = self.renderer {
                renderer.render(&self.state);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bouncy Box starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("viewport")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let level = Level::from_canvas(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, level, Tuning::default())));

        log::info!("Game initialized with seed: {}", seed);

        match CanvasRenderer::new(&canvas) {
            Ok(renderer) => game.borrow_mut().renderer = Some(renderer),
            Err(e) => {
                log::error!("Failed to acquire 2d context: {:?}", e);
                return;
            }
        }

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Bouncy Box running!");
    }

    /// Translate a mouse event into canvas coordinates via the bounding rect
    fn mouse_pos(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let x = (event.client_x() as f64 - rect.left()) / (rect.right() - rect.left())
            * canvas.width() as f64;
        let y = (event.client_y() as f64 - rect.top()) / (rect.bottom() - rect.top())
            * canvas.height() as f64;
        Vec2::new(x.round() as f32, y.round() as f32)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = mouse_pos(&canvas_clone, &event);
                game.borrow_mut().input.pointer.push(PointerEvent::Move(pos));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down (click credit)
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = mouse_pos(&canvas_clone, &event);
                game.borrow_mut().input.pointer.push(PointerEvent::Down(pos));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = mouse_pos(&canvas_clone, &event);
                game.borrow_mut().input.pointer.push(PointerEvent::Up(pos));
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse out
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.pointer.push(PointerEvent::Leave);
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
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
            let dt = g.frame_dt(time);
            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bouncy Box (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to get the canvas frontend");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use bouncy_box::sim::{GameState, Level, PointerEvent, TickInput, tick};
    use bouncy_box::tuning::Tuning;

    let level = Level::from_canvas(600.0, 400.0);
    let mut state = GameState::new(42, level, Tuning::default());

    let quiet = TickInput::default();
    for _ in 0..300 {
        tick(&mut state, &quiet, 1.0 / 60.0);
    }

    // Click the first square dead center
    let target = state.squares[0].pos + state.squares[0].size / 2.0;
    let click = TickInput {
        pointer: vec![PointerEvent::Down(target)],
    };
    tick(&mut state, &click, 1.0 / 60.0);

    for square in &state.squares {
        assert!(square.pos.x >= level.x && square.right() <= level.right() + 1e-3);
        assert!(square.pos.y >= level.y && square.bottom() <= level.bottom() + 1e-3);
        log::info!(
            "square {}: pos=({:.1}, {:.1}) score={}",
            square.id,
            square.pos.x,
            square.pos.y,
            square.score
        );
    }

    println!(
        "✓ Headless run: 301 frames, total score {}",
        state.score
    );
}

//! Glide Snake entry point
//!
//! Browser builds run the interactive game on a canvas. Native builds run a
//! headless attract mode with an autopilot at the controls.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use glide_snake::audio::WebAudio;
    use glide_snake::platform::{Clock, InputEvent, Key, ScriptedInput, SystemClock};
    use glide_snake::renderer::CanvasRenderer;
    use glide_snake::{Game, Settings};

    /// Everything the animation-frame callback needs
    struct App {
        game: Game,
        input: ScriptedInput,
        renderer: CanvasRenderer,
        audio: WebAudio,
        clock: SystemClock,
        settings: Settings,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            return;
        }

        log::info!("Glide Snake starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };
        let Some(renderer) = CanvasRenderer::new(&canvas, document) else {
            log::error!("Canvas has no 2D context");
            return;
        };

        let settings = Settings::load();
        let seed = settings.seed_or(js_sys::Date::now() as u64);
        let app = Rc::new(RefCell::new(App {
            game: Game::new(&settings, seed),
            input: ScriptedInput::new(),
            renderer,
            audio: WebAudio::new(&settings),
            clock: SystemClock::new(),
            settings,
        }));

        setup_input_handlers(app.clone());
        request_animation_frame(app);

        log::info!("Glide Snake running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        for (kind, down) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_web(&event.key()) else {
                    return;
                };
                // Keep Tab/Space/arrows from moving focus or scrolling
                event.prevent_default();
                if down && event.repeat() {
                    return;
                }
                let input = if down {
                    InputEvent::KeyDown(key)
                } else {
                    InputEvent::KeyUp(key)
                };
                app.borrow_mut().input.push(input);
            });
            let _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let running = {
            let mut guard = app.borrow_mut();
            let App {
                game,
                input,
                renderer,
                audio,
                clock,
                settings,
            } = &mut *guard;
            renderer.begin_frame();
            let running = game.frame(clock.now_ms(), input, renderer, audio);
            // Tab picks a new difficulty; keep it for the next visit
            if settings.remember_difficulty(game.state.difficulty) {
                settings.save();
            }
            running
        };

        if running {
            request_animation_frame(app);
        } else {
            log::info!("Glide Snake stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod attract {
    use glide_snake::audio::LogAudio;
    use glide_snake::platform::{Clock, Key, ManualClock, ScriptedInput};
    use glide_snake::renderer::VertexBatch;
    use glide_snake::sim::{Direction, GameState};
    use glide_snake::{Game, Settings};

    /// Simulated frame length (60 Hz)
    const FRAME_MS: u64 = 16;
    /// Ten simulated minutes
    const MAX_FRAMES: u32 = 60 * 60 * 10;
    /// Runs to play before stopping
    const MAX_RUNS: u32 = 3;

    fn key_for(dir: Direction) -> Option<Key> {
        match dir {
            Direction::Left => Some(Key::Left),
            Direction::Right => Some(Key::Right),
            Direction::Up => Some(Key::Up),
            Direction::Down => Some(Key::Down),
            Direction::Stopped => None,
        }
    }

    /// Head for the fruit along the longer axis, never reversing
    fn autopilot(state: &GameState) -> Option<Key> {
        let delta = state.fruit.pos() - state.head.pos();
        let horizontal = if delta.x < 0.0 { Direction::Left } else { Direction::Right };
        let vertical = if delta.y < 0.0 { Direction::Down } else { Direction::Up };
        let (first, second) = if delta.x.abs() > delta.y.abs() {
            (horizontal, vertical)
        } else {
            (vertical, horizontal)
        };
        let want = if first == state.direction.opposite() { second } else { first };
        if want == state.direction {
            None
        } else {
            key_for(want)
        }
    }

    pub fn run() {
        let mut settings = Settings::load();
        let clock = ManualClock::new(0);
        let seed = settings.seed_or(
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        );

        let mut game = Game::new(&settings, seed);
        let mut input = ScriptedInput::new();
        let mut batch = VertexBatch::new();
        let mut audio = LogAudio::default();
        let mut runs = 0;

        for _ in 0..MAX_FRAMES {
            if game.state.is_over() {
                if runs == MAX_RUNS {
                    break;
                }
                runs += 1;
                input.press(Key::Enter);
            } else if let Some(key) = autopilot(&game.state) {
                input.press(key);
            }

            batch.clear();
            if !game.frame(clock.now_ms(), &mut input, &mut batch, &mut audio) {
                break;
            }
            clock.advance(FRAME_MS);
        }

        log::info!(
            "Attract mode finished after {:.1}s: {} runs, last score {}, high score {}, level {}",
            clock.now_ms() as f64 / 1000.0,
            runs,
            game.state.score,
            game.state.high_score,
            game.state.level
        );

        if settings.remember_difficulty(game.state.difficulty) {
            settings.save();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Glide Snake (native attract mode)");
    attract::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

//! Canvas Pong entry point
//!
//! Browser builds wire the canvas, keyboard and buttons to a `Session`.
//! Native builds run the game headless and print frames as text.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use canvas_pong::renderer::CanvasSurface;
    use canvas_pong::{Session, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("pong")
            .ok_or("missing #pong canvas")?
            .dyn_into::<HtmlCanvasElement>()?;

        let settings = Settings::load();
        canvas.set_width(settings.surface_width as u32);
        canvas.set_height(settings.surface_height as u32);
        canvas
            .style()
            .set_property("background", &settings.background_color().to_css())?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(settings, seed),
            surface: CanvasSurface::new(canvas)?,
        }));

        setup_input_handlers(game.clone())?;
        setup_control_buttons(game.clone());
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().session.key_down(&event.key());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().session.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_control_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        // Pause / Resume
        if let Some(btn) = document.get_element_by_id("pauseBtn") {
            let game = game.clone();
            let label_target = btn.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let label = game.borrow_mut().session.toggle_pause();
                label_target.set_text_content(Some(label));
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #pauseBtn element; pause control disabled");
        }

        // Reset
        if let Some(btn) = document.get_element_by_id("resetBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().session.reset();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #resetBtn element; reset control disabled");
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let Game { session, surface } = &mut *g;
            session.frame(surface);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use canvas_pong::platform::{FramePacer, InputScript};
    use canvas_pong::renderer::AsciiSurface;
    use canvas_pong::sim::GameEvent;
    use canvas_pong::{Session, Settings};

    #[derive(Parser, Debug)]
    #[command(about = "Run Canvas Pong headless, drawing frames as text", version)]
    pub struct Args {
        /// Number of frames to simulate
        #[arg(long, default_value_t = 600)]
        frames: u64,
        /// RNG seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
        /// Settings JSON file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Input script JSON file
        #[arg(long)]
        script: Option<PathBuf>,
        #[arg(long, default_value_t = 80)]
        cols: usize,
        #[arg(long, default_value_t = 20)]
        rows: usize,
        /// Print a frame every N frames (0 prints only the last)
        #[arg(long, default_value_t = 0)]
        every: u64,
        /// Pace frames at the configured frame rate
        #[arg(long)]
        realtime: bool,
        /// Print the final game state as JSON
        #[arg(long)]
        dump_state: bool,
    }

    fn time_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    }

    pub fn run(args: Args) -> Result<()> {
        let settings = match &args.config {
            Some(path) => Settings::load_from(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::load(),
        };
        let script = match &args.script {
            Some(path) => InputScript::load(path)
                .with_context(|| format!("loading input script from {}", path.display()))?,
            None => InputScript::default(),
        };

        let seed = args.seed.unwrap_or_else(time_seed);
        let mut surface = AsciiSurface::new(
            settings.surface_width,
            settings.surface_height,
            args.cols,
            args.rows,
        );
        let mut session = Session::new(settings, seed);
        let mut pacer = args
            .realtime
            .then(|| FramePacer::new(session.settings().frame_period()));

        let mut paddle_hits = 0usize;
        for frame in 0..args.frames {
            for action in script.actions_at(frame) {
                session.apply(action);
            }

            let events = session.frame(&mut surface);
            paddle_hits += events
                .iter()
                .filter(|e| matches!(e, GameEvent::PaddleHit))
                .count();

            let shown = frame + 1;
            if args.every > 0 && shown % args.every == 0 {
                println!("frame {shown} [{}]\n{surface}", session.control_label());
            }
            if let Some(pacer) = pacer.as_mut() {
                pacer.wait();
            }
        }

        if args.every == 0 || args.frames % args.every != 0 {
            println!("frame {}\n{surface}", args.frames);
        }

        let (p1, p2) = session.state().scores();
        println!("Score: {p1} - {p2} ({paddle_hits} paddle hits, seed {seed})");

        if args.dump_state {
            let json = serde_json::to_string_pretty(session.state())
                .context("serializing game state")?;
            println!("{json}");
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    log::info!("Canvas Pong (headless) starting...");
    headless::run(headless::Args::parse())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

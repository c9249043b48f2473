//! Tap Runner entry point
//!
//! Handles platform-specific initialization and owns the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use tap_runner::input::InputHandler;
    use tap_runner::render::{CanvasSurface, draw_frame};
    use tap_runner::sim::{JumpStrength, Phase, World, tick};
    use tap_runner::ui;

    /// The frame callback, held so pause/resume can re-arm the same closure
    type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Game instance holding all state
    struct Game {
        world: World,
        rng: Pcg32,
        surface: CanvasSurface,
        input: InputHandler,
        /// Phase painted into the HUD last frame
        last_phase: Phase,
        /// Driver-owned decision to keep scheduling frames
        cadence_active: bool,
        /// A frame callback is queued and has not run yet
        frame_pending: bool,
    }

    impl Game {
        fn new(surface: CanvasSurface, seed: u64) -> Self {
            let world = World::new(surface.view());
            Self {
                world,
                rng: Pcg32::seed_from_u64(seed),
                surface,
                input: InputHandler::new(),
                last_phase: Phase::Running,
                cadence_active: true,
                frame_pending: false,
            }
        }

        /// One animation frame: poll the hold deadline, advance the world,
        /// draw, refresh the HUD
        fn frame(&mut self, time: f64) {
            self.surface.sync_size();
            let view = self.surface.view();

            if let Some(strength) = self.input.poll(time) {
                self.world.try_jump(strength);
            }
            tick(&mut self.world, view, &mut self.rng);
            draw_frame(&self.world, &mut self.surface);
            self.refresh_hud();
        }

        /// Score label every frame; message and restart button on transitions
        fn refresh_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&ui::score_label(self.world.score)));
            }
            self.sync_phase_paint(&document);
        }

        /// Repaint the phase-dependent HUD pieces if the phase moved
        ///
        /// Also called straight from the visibility handler: no frames run
        /// while the tab is hidden, so the pause message cannot wait for the
        /// frame loop.
        fn sync_phase_paint(&mut self, document: &web_sys::Document) {
            if self.world.phase != self.last_phase {
                self.last_phase = self.world.phase;
                self.paint_phase(document);
            }
        }

        /// Push the phase-dependent HUD pieces into the DOM
        fn paint_phase(&self, document: &web_sys::Document) {
            if let Some(el) = document.get_element_by_id("msg") {
                el.set_text_content(Some(&ui::status_message(&self.world)));
            }
            if let Some(btn) = document.get_element_by_id("restart") {
                if self.world.phase == Phase::GameOver {
                    let _ = btn.class_list().remove_1("hidden");
                } else {
                    let _ = btn.class_list().add_1("hidden");
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Tap Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let seed = js_sys::Date::now() as u64;
        let surface = CanvasSurface::new(canvas.clone());
        let game = Rc::new(RefCell::new(Game::new(surface, seed)));
        game.borrow().paint_phase(&document);

        log::info!("world seeded with {}", seed);

        // The frame callback re-arms itself; hiding the tab parks it and the
        // visibility handler re-requests it, with frame_pending making sure
        // the two paths never schedule the loop twice.
        let frame: FrameClosure = Rc::new(RefCell::new(None));
        {
            let game = game.clone();
            let frame_handle = frame.clone();
            *frame.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                let keep_going = {
                    let mut g = game.borrow_mut();
                    g.frame_pending = false;
                    if g.cadence_active {
                        g.frame(time);
                    }
                    g.cadence_active
                };
                if keep_going {
                    request_frame(&game, &frame_handle);
                }
            }));
        }

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());
        setup_auto_pause(game.clone(), frame.clone());

        request_frame(&game, &frame);

        log::info!("Tap Runner running!");
    }

    /// Queue the frame callback unless one is already in flight
    fn request_frame(game: &Rc<RefCell<Game>>, frame: &FrameClosure) {
        {
            let mut g = game.borrow_mut();
            if g.frame_pending {
                return;
            }
            g.frame_pending = true;
        }
        let window = web_sys::window().expect("no window");
        let frame = frame.borrow();
        let closure = frame.as_ref().expect("frame closure not installed");
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Press down - mouse and touch arm the same hold tracking. Only
        // recorded while the run advances; a press begun on the game-over
        // screen must not jump into the next run.
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.world.is_running() {
                    g.input.press_down(event.time_stamp());
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release anywhere on the page still ends the press
        {
            let game = game.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                if let Some(strength) = g.input.press_up(event.time_stamp()) {
                    g.world.try_jump(strength);
                }
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch pair; preventDefault also suppresses the synthetic mouse events
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if g.world.is_running() {
                    g.input.press_down(event.time_stamp());
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if let Some(strength) = g.input.press_up(event.time_stamp()) {
                    g.world.try_jump(strength);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Space is a plain jump with no hold tracking
        {
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    game.borrow_mut().world.try_jump(JumpStrength::Normal);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(btn) = document.get_element_by_id("restart") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let view = g.surface.view();
                g.world.reset(view);
                g.input.clear();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>, frame: FrameClosure) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let hidden = document_clone.visibility_state() == web_sys::VisibilityState::Hidden;
            if hidden {
                let mut g = game.borrow_mut();
                g.world.pause();
                g.cadence_active = false;
                g.sync_phase_paint(&document_clone);
            } else {
                {
                    let mut g = game.borrow_mut();
                    g.world.resume();
                    g.cadence_active = true;
                    g.sync_phase_paint(&document_clone);
                }
                request_frame(&game, &frame);
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::SeedableRng;
    use tap_runner::sim::{JumpStrength, Phase, View, World, tick};

    env_logger::init();
    log::info!("Tap Runner (native) starting...");
    log::info!("No native window - run with `trunk serve` for the browser version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let view = View::new(800.0, 450.0);
    let mut world = World::new(view);
    let mut rng = rand_pcg::Pcg32::seed_from_u64(seed);

    // Headless demo: hop over whatever the spawner throws for up to a minute
    println!("\nRunning headless demo (seed {seed})...");
    for _ in 0..3600 {
        let player_front = world.player.pos.x + world.player.size.x;
        let threat_ahead = world.obstacles.iter().any(|ob| {
            let gap = ob.pos.x - player_front;
            (0.0..world.speed * 18.0).contains(&gap)
        });
        if world.player.on_ground && threat_ahead {
            world.try_jump(JumpStrength::Boosted);
        }

        tick(&mut world, view, &mut rng);
        if world.phase == Phase::GameOver {
            break;
        }
    }

    println!(
        "Demo over: score {} after {} ticks (session best {})",
        world.score,
        world.ticks,
        world.session_best.best()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

//! Browser game-loop driver
//!
//! Owns frame scheduling, delta computation, input wiring, the completion
//! hand-off, and teardown. Single-writer discipline: only this module
//! mutates the run state; the renderer and score store just read it. Input
//! listeners set flags that are coalesced into the next tick.

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use crate::config::SurfaceConfig;
    use crate::renderer::CanvasRenderer;
    use crate::scores::{self, ScoreLog};
    use crate::sim::{GamePhase, GameState, TickInput, tick};

    /// Everything the frame callback needs, behind one RefCell
    struct Driver {
        state: GameState,
        renderer: CanvasRenderer,
        canvas: HtmlCanvasElement,
        config: SurfaceConfig,
        input: TickInput,
        last_time: f64,
        /// Host callback handed the final score, once per run
        on_run_complete: Option<js_sys::Function>,
        /// Latched when the Over hand-off has fired for the current run
        completion_fired: bool,
        raf_handle: Option<i32>,
        destroyed: bool,
    }

    impl Driver {
        /// Advance one frame. Returns the final score exactly once per run,
        /// on the tick that left Running.
        fn frame(&mut self, now: f64) -> Option<u32> {
            let dt = if self.last_time > 0.0 {
                ((now - self.last_time) as f32).max(0.0)
            } else {
                0.0
            };
            self.last_time = now;

            if self.state.phase == GamePhase::Running {
                let input = std::mem::take(&mut self.input);
                tick(&mut self.state, &input, dt);
            }

            let finished = if self.state.phase == GamePhase::Over && !self.completion_fired {
                self.completion_fired = true;
                Some(self.state.score)
            } else {
                None
            };

            // Per-frame error boundary: a failed paint abandons this frame
            // only; the last good run state is untouched and scheduling
            // continues.
            if let Err(e) = self.renderer.render(&self.state, now) {
                log::warn!("render fault, frame skipped: {e:?}");
            }

            finished
        }
    }

    type SharedDriver = Rc<RefCell<Driver>>;

    /// The embeddable game. The host constructs it over a canvas, calls
    /// `start` on user action, and must call `destroy` on unmount.
    #[wasm_bindgen]
    pub struct Minigame {
        driver: SharedDriver,
        raf_closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
        key_listener: Closure<dyn FnMut(KeyboardEvent)>,
        pointer_listener: Closure<dyn FnMut(PointerEvent)>,
        resize_listener: Closure<dyn FnMut(web_sys::Event)>,
    }

    #[wasm_bindgen]
    impl Minigame {
        /// Build a game over the given canvas at the requested display size
        /// (presentation pixels). Nothing is scheduled until `start`.
        #[wasm_bindgen(constructor)]
        pub fn new(
            canvas: HtmlCanvasElement,
            display_width: u32,
            display_height: u32,
            on_run_complete: Option<js_sys::Function>,
        ) -> Result<Minigame, JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let config = SurfaceConfig::new(display_width, display_height);
            let (w, h) = config.logical_size();
            let dpr = window.device_pixel_ratio().max(1.0);

            let mut renderer = CanvasRenderer::new(&canvas)?;
            renderer.resize_backing(&canvas, &config, dpr)?;

            // Feature-detect persistence once; the game plays on without it
            if !ScoreLog::available() {
                log::warn!("local storage unavailable; scores will not persist");
            }

            let seed = js_sys::Date::now() as u64;
            let driver: SharedDriver = Rc::new(RefCell::new(Driver {
                state: GameState::new(w as f32, h as f32, seed),
                renderer,
                canvas: canvas.clone(),
                config,
                input: TickInput::default(),
                last_time: 0.0,
                on_run_complete,
                completion_fired: false,
                raf_handle: None,
                destroyed: false,
            }));

            let key_listener = {
                let driver = driver.clone();
                Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                    if event.code() == "Space" || event.key() == " " {
                        event.prevent_default();
                        driver.borrow_mut().input.jump = true;
                    }
                })
            };
            window.add_event_listener_with_callback(
                "keydown",
                key_listener.as_ref().unchecked_ref(),
            )?;

            let pointer_listener = {
                let driver = driver.clone();
                Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                    driver.borrow_mut().input.jump = true;
                })
            };
            canvas.add_event_listener_with_callback(
                "pointerdown",
                pointer_listener.as_ref().unchecked_ref(),
            )?;

            // Device pixel ratio can change at runtime (zoom, monitor move);
            // only the backing store reacts, never simulation coordinates.
            let resize_listener = {
                let driver = driver.clone();
                Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    let mut d = driver.borrow_mut();
                    let dpr = web_sys::window()
                        .map(|w| w.device_pixel_ratio())
                        .unwrap_or(1.0)
                        .max(1.0);
                    let canvas = d.canvas.clone();
                    let config = d.config;
                    if let Err(e) = d.renderer.resize_backing(&canvas, &config, dpr) {
                        log::warn!("backing-store resize failed: {e:?}");
                    }
                })
            };
            window.add_event_listener_with_callback(
                "resize",
                resize_listener.as_ref().unchecked_ref(),
            )?;

            log::info!("minigame ready ({w}x{h} logical, seed {seed})");

            Ok(Minigame {
                driver,
                raf_closure: Rc::new(RefCell::new(None)),
                key_listener,
                pointer_listener,
                resize_listener,
            })
        }

        /// Explicit user-initiated start; begins frame scheduling.
        pub fn start(&self) -> Result<(), JsValue> {
            {
                let mut d = self.driver.borrow_mut();
                if d.destroyed {
                    return Err(JsValue::from_str("game has been destroyed"));
                }
                d.state.start();
                d.last_time = 0.0;
            }
            self.schedule()?;
            log::info!("game started");
            Ok(())
        }

        /// Full reset into a fresh running state with a new seed. Only the
        /// persisted score history survives.
        pub fn restart(&self) -> Result<(), JsValue> {
            {
                let mut d = self.driver.borrow_mut();
                if d.destroyed {
                    return Err(JsValue::from_str("game has been destroyed"));
                }
                let seed = js_sys::Date::now() as u64;
                d.state.restart(seed);
                d.input = TickInput::default();
                d.completion_fired = false;
                d.last_time = 0.0;
            }
            self.schedule()?;
            Ok(())
        }

        /// Stop frame scheduling and detach every input listener. Mandatory
        /// on unmount; the handle is inert afterwards.
        pub fn destroy(&self) -> Result<(), JsValue> {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let mut d = self.driver.borrow_mut();
            if d.destroyed {
                return Ok(());
            }
            d.destroyed = true;

            if let Some(handle) = d.raf_handle.take() {
                window.cancel_animation_frame(handle)?;
            }
            window.remove_event_listener_with_callback(
                "keydown",
                self.key_listener.as_ref().unchecked_ref(),
            )?;
            window.remove_event_listener_with_callback(
                "resize",
                self.resize_listener.as_ref().unchecked_ref(),
            )?;
            d.canvas.remove_event_listener_with_callback(
                "pointerdown",
                self.pointer_listener.as_ref().unchecked_ref(),
            )?;

            log::info!("game torn down");
            Ok(())
        }

        /// Current score: live during a run, final after it
        pub fn score(&self) -> u32 {
            self.driver.borrow().state.score
        }

        /// Whether the current run has ended
        pub fn is_over(&self) -> bool {
            self.driver.borrow().state.phase == GamePhase::Over
        }

        /// Arm the self-rescheduling frame callback if it is not running yet
        fn schedule(&self) -> Result<(), JsValue> {
            if self.raf_closure.borrow().is_some() {
                return Ok(());
            }

            let driver = self.driver.clone();
            let raf_cell = self.raf_closure.clone();
            let closure = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                let finished = {
                    let mut d = driver.borrow_mut();
                    if d.destroyed {
                        return;
                    }
                    d.frame(time)
                };

                // Hand-off runs outside the state borrow so the host
                // callback may call back into the handle.
                if let Some(score) = finished {
                    let cb = driver.borrow().on_run_complete.clone();
                    if let Some(cb) = cb {
                        if let Err(e) = cb.call1(&JsValue::NULL, &JsValue::from_f64(score.into()))
                        {
                            log::warn!("run-complete callback failed: {e:?}");
                        }
                    }
                    if score > 0 {
                        scores::record_run(score);
                    }
                }

                if driver.borrow().destroyed {
                    return;
                }
                let raf = raf_cell.borrow();
                if let (Some(window), Some(cb)) = (web_sys::window(), raf.as_ref()) {
                    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        Ok(handle) => driver.borrow_mut().raf_handle = Some(handle),
                        Err(e) => log::warn!("frame scheduling failed: {e:?}"),
                    }
                }
            });

            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let handle = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
            self.driver.borrow_mut().raf_handle = Some(handle);
            *self.raf_closure.borrow_mut() = Some(closure);
            Ok(())
        }
    }

    /// Highest persisted score, for the host page's trophy/badge logic
    #[wasm_bindgen]
    pub fn best_score() -> u32 {
        ScoreLog::load().max_score()
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{Minigame, best_score};

//! Block Breaker entry point
//!
//! On the web this wires the canvas, WebGPU and keyboard into a [`Game`].
//! Natively it plays a headless round with a simple autopilot and logs the
//! result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_host {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, Window};

    use block_breaker::consts::CONTROLS_HELP;
    use block_breaker::platform::InstanceSlot;
    use block_breaker::platform::web::WebPlatform;
    use block_breaker::renderer::{RenderState, TextLabel, tessellate};
    use block_breaker::{Game, GameError, Settings};

    /// Element the paused prompt is written into
    const PROMPT_ELEMENT_ID: &str = "prompt";
    const CONTROLS_ELEMENT_ID: &str = "controls";

    thread_local! {
        /// At most one live game per page
        static ACTIVE: RefCell<InstanceSlot<Rc<RefCell<Host>>>> =
            const { RefCell::new(InstanceSlot::new()) };
    }

    /// A window listener kept alive until the game is disposed
    struct Listener {
        event: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    }

    struct Host {
        game: Game<WebPlatform>,
        render_state: RenderState,
        window: Window,
        prompt: Option<Element>,
        listeners: Vec<Listener>,
    }

    impl Host {
        /// Unhook every window listener this game registered
        fn detach(&mut self) {
            for listener in self.listeners.drain(..) {
                if let Err(e) = self.window.remove_event_listener_with_callback(
                    listener.event,
                    listener.closure.as_ref().unchecked_ref(),
                ) {
                    log::warn!("Failed to remove {} listener: {:?}", listener.event, e);
                }
            }
            if let Some(el) = &self.prompt {
                let _ = el.set_attribute("class", "hidden");
            }
        }

        fn frame(&mut self) {
            self.game.frame();
            self.present();
        }

        /// Draw the game's last rendered frame
        fn present(&mut self) {
            let frame = tessellate(self.game.draw_list());
            match self.render_state.render(&frame) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
            self.show_labels(&frame.labels);
        }

        fn show_labels(&self, labels: &[TextLabel]) {
            let Some(el) = &self.prompt else {
                return;
            };
            match labels.first() {
                Some(label) => {
                    let [r, g, b, a] = label.color.map(|c| (c * 255.0).round() as u8);
                    let style = format!(
                        "font-size: {}px; color: rgba({}, {}, {}, {:.2})",
                        label.size,
                        r,
                        g,
                        b,
                        a as f32 / 255.0
                    );
                    el.set_text_content(Some(&label.text));
                    let _ = el.set_attribute("style", &style);
                    let _ = el.set_attribute("class", "");
                }
                None => {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    /// Start a game unless one is already starting or running
    pub async fn start() -> Result<(), GameError> {
        if !ACTIVE.with(|a| a.borrow_mut().begin()) {
            log::warn!("Block Breaker already running; ignoring second start");
            return Ok(());
        }

        match run().await {
            Ok(host) => {
                ACTIVE.with(|a| a.borrow_mut().activate(host));
                log::info!("Block Breaker ready");
                Ok(())
            }
            Err(e) => {
                ACTIVE.with(|a| a.borrow_mut().abort());
                Err(e)
            }
        }
    }

    async fn run() -> Result<Rc<RefCell<Host>>, GameError> {
        log::info!("Block Breaker starting...");

        let window =
            web_sys::window().ok_or_else(|| GameError::SurfaceUnavailable("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::SurfaceUnavailable("no document".into()))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into().ok())
            .ok_or_else(|| GameError::SurfaceUnavailable("no #canvas element".into()))?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = ((canvas.client_width() as f64 * dpr) as u32).max(1);
        let height = ((canvas.client_height() as f64 * dpr) as u32).max(1);
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        // Persist so the bindings and tuning can be edited in LocalStorage
        settings.save();
        let field = Vec2::new(settings.tuning.field_width, settings.tuning.field_height);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| GameError::SurfaceUnavailable(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| GameError::AdapterUnavailable)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, field).await?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(settings, seed, WebPlatform::new()?)?;

        let host = Rc::new(RefCell::new(Host {
            game,
            render_state,
            window: window.clone(),
            prompt: document.get_element_by_id(PROMPT_ELEMENT_ID),
            listeners: Vec::new(),
        }));

        {
            let weak = Rc::downgrade(&host);
            let on_frame: Rc<dyn Fn()> = Rc::new(move || {
                if let Some(host) = weak.upgrade() {
                    host.borrow_mut().frame();
                }
            });
            let mut h = host.borrow_mut();
            h.game.platform_mut().set_frame_callback(on_frame);
            h.present();
        }

        if let Some(el) = document.get_element_by_id(CONTROLS_ELEMENT_ID) {
            let help: String = CONTROLS_HELP
                .iter()
                .map(|line| format!("<p>{line}</p>"))
                .collect();
            el.set_inner_html(&help);
        }

        let listeners = setup_input_handlers(&window, Rc::downgrade(&host));
        host.borrow_mut().listeners = listeners;

        Ok(host)
    }

    /// Tear down the running game and its listeners; a new one may start after
    pub fn dispose() {
        let Some(host) = ACTIVE.with(|a| a.borrow_mut().take()) else {
            return;
        };
        host.borrow_mut().detach();
        // Pending frame callbacks only hold weak references
        match Rc::try_unwrap(host) {
            Ok(host) => {
                let _platform = host.into_inner().game.dispose();
            }
            Err(_) => log::warn!("Game still referenced at dispose"),
        }
        log::info!("Block Breaker disposed");
    }

    fn setup_input_handlers(window: &Window, host: Weak<RefCell<Host>>) -> Vec<Listener> {
        let mut listeners = Vec::new();
        let mut listen = |event: &'static str, handler: Box<dyn FnMut(web_sys::Event)>| {
            let closure = Closure::wrap(handler);
            if let Err(e) =
                window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to add {} listener: {:?}", event, e);
            }
            listeners.push(Listener { event, closure });
        };

        // Key down
        {
            let host = host.clone();
            listen(
                "keydown",
                Box::new(move |event: web_sys::Event| {
                    let (Some(host), Some(key)) = (host.upgrade(), event.dyn_ref::<KeyboardEvent>())
                    else {
                        return;
                    };
                    if host.borrow_mut().game.key_down(&key.key()) {
                        event.prevent_default();
                    }
                }),
            );
        }

        // Key up
        {
            let host = host.clone();
            listen(
                "keyup",
                Box::new(move |event: web_sys::Event| {
                    let (Some(host), Some(key)) = (host.upgrade(), event.dyn_ref::<KeyboardEvent>())
                    else {
                        return;
                    };
                    if host.borrow_mut().game.key_up(&key.key()) {
                        event.prevent_default();
                    }
                }),
            );
        }

        // Window blur: key-ups for held keys will never arrive
        listen(
            "blur",
            Box::new(move |_event: web_sys::Event| {
                if let Some(host) = host.upgrade() {
                    host.borrow_mut().game.blur();
                    log::debug!("Window blurred, released held keys");
                }
            }),
        );

        listeners
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    start_game().await;
}

/// Start a game (host panel opened); ignored while one is already live
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn start_game() {
    if let Err(e) = web_host::start().await {
        log::error!("Block Breaker failed to start: {}", e);
    }
}

/// Stop the running game (host panel closed)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn dispose_game() {
    web_host::dispose();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use block_breaker::platform::ManualPlatform;
    use block_breaker::{Game, Settings};

    /// Give up on rounds the autopilot keeps alive forever
    const MAX_FRAMES: u32 = 200_000;

    env_logger::init();
    log::info!("Block Breaker (native) starting headless autopilot run");

    // Optional settings JSON path as the only argument
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::from_json(&std::fs::read_to_string(&path)?)?,
        None => Settings::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let mut game = Game::new(settings, seed, ManualPlatform::new())?;

    game.key_down(" ");
    game.key_up(" ");

    let mut frames = 0;
    while frames < MAX_FRAMES {
        steer(&mut game);
        if !game.pump() {
            break;
        }
        frames += 1;
    }

    let platform = game.dispose();
    log::info!(
        "Played {} frames; outcomes {:?}; readouts pushed {}",
        frames,
        platform.notifications,
        platform.readouts.len()
    );
    if let Some(best) = platform.readouts.iter().map(|(score, _)| *score).max() {
        log::info!("Best score reached: {}", best);
    }
    Ok(())
}

/// Hold whichever arrow key moves the paddle under the ball
#[cfg(not(target_arch = "wasm32"))]
fn steer(game: &mut block_breaker::Game<block_breaker::platform::ManualPlatform>) {
    let state = game.state();
    let paddle_center = state.paddle.pos.x + state.paddle.width / 2.0;
    // Aim slightly off-center so the ball keeps some sideways speed
    let target = state.ball.pos.x + state.paddle.width / 5.0;
    let dead_zone = state.paddle.speed;

    let (hold, release) = if target < paddle_center - dead_zone {
        (Some("ArrowLeft"), "ArrowRight")
    } else if target > paddle_center + dead_zone {
        (Some("ArrowRight"), "ArrowLeft")
    } else {
        (None, "ArrowLeft")
    };

    game.key_up(release);
    match hold {
        Some(key) => {
            game.key_down(key);
        }
        None => {
            game.key_up("ArrowRight");
        }
    }
}

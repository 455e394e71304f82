//! Browser platform: requestAnimationFrame, `alert()` and DOM readouts

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use super::{FrameScheduler, Readouts, RoundNotifier};
use crate::error::GameError;
use crate::sim::RoundOutcome;

/// Element ids the readouts write into
pub const SCORE_ELEMENT_ID: &str = "score";
pub const LIVES_ELEMENT_ID: &str = "lives";

pub struct WebPlatform {
    window: Window,
    document: Document,
    /// Runs one game frame; installed once the host owns the game
    on_frame: Option<Rc<dyn Fn()>>,
}

impl WebPlatform {
    pub fn new() -> Result<Self, GameError> {
        let window = web_sys::window()
            .ok_or_else(|| GameError::SurfaceUnavailable("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::SurfaceUnavailable("no document".into()))?;
        Ok(Self {
            window,
            document,
            on_frame: None,
        })
    }

    pub fn set_frame_callback(&mut self, on_frame: Rc<dyn Fn()>) {
        self.on_frame = Some(on_frame);
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}

impl FrameScheduler for WebPlatform {
    fn request_frame(&mut self) {
        let Some(on_frame) = self.on_frame.clone() else {
            log::warn!("Frame requested before the host installed a callback");
            return;
        };
        let closure = Closure::once(move |_time: f64| on_frame());
        if let Err(e) = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }
}

impl RoundNotifier for WebPlatform {
    fn notify(&mut self, outcome: RoundOutcome) {
        // alert() blocks the page until dismissed
        if let Err(e) = self.window.alert_with_message(outcome.message()) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

impl Readouts for WebPlatform {
    fn show(&mut self, score: u64, lives: u32) {
        self.set_text(SCORE_ELEMENT_ID, &score.to_string());
        self.set_text(LIVES_ELEMENT_ID, &lives.to_string());
    }
}

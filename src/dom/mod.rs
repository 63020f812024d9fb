//! Thin layer over the browser APIs the sections need.

mod listener;

pub use listener::WindowListener;

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::Element;
use yew::NodeRef;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("failed to register `{event}` listener: {message}")]
    Listener { event: &'static str, message: String },
}

impl DomError {
    pub(crate) fn listener(event: &'static str, err: JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{:?}", err));
        DomError::Listener { event, message }
    }
}

/// A box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<web_sys::DomRect> for Rect {
    fn from(rect: web_sys::DomRect) -> Self {
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Anything that may currently resolve to an on-screen box.
pub trait ElementRect {
    /// `None` while the element is not mounted.
    fn bounding_rect(&self) -> Option<Rect>;
}

impl ElementRect for Element {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(Rect::from(self.get_bounding_client_rect()))
    }
}

impl ElementRect for NodeRef {
    fn bounding_rect(&self) -> Option<Rect> {
        self.cast::<Element>()?.bounding_rect()
    }
}

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

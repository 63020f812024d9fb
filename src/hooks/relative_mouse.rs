use std::rc::Rc;

use log::error;
use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom::{DomError, ElementRect, WindowListener};
use crate::motion::{batch, MotionValue};

/// Where pointer movements come from.
pub trait PointerSource {
    /// Keeps the handler registered until dropped.
    type Guard;

    fn subscribe(&self, handler: Box<dyn FnMut(f64, f64)>) -> Result<Self::Guard, DomError>;
}

/// Global `mousemove` events on the browser window.
pub struct WindowPointer;

impl PointerSource for WindowPointer {
    type Guard = WindowListener;

    fn subscribe(&self, mut handler: Box<dyn FnMut(f64, f64)>) -> Result<WindowListener, DomError> {
        WindowListener::new("mousemove", move |event: MouseEvent| {
            let (x, y) = client_position(&event);
            handler(x, y);
        })
    }
}

/// `clientX`/`clientY` as doubles; the typed getters round to whole pixels.
fn client_position(event: &MouseEvent) -> (f64, f64) {
    let read = |key: &str, fallback: i32| {
        Reflect::get(event, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(fallback as f64)
    };
    (read("clientX", event.client_x()), read("clientY", event.client_y()))
}

/// Pointer position measured from the top-left corner of `target`.
pub struct PointerTracker<R> {
    target: R,
    x: MotionValue<f64>,
    y: MotionValue<f64>,
}

impl<R: ElementRect + 'static> PointerTracker<R> {
    pub fn new(target: R) -> Self {
        Self {
            target,
            x: MotionValue::new(0.0),
            y: MotionValue::new(0.0),
        }
    }

    pub fn x(&self) -> MotionValue<f64> {
        self.x.clone()
    }

    pub fn y(&self) -> MotionValue<f64> {
        self.y.clone()
    }

    /// Publishes the position relative to the target as one update. Does
    /// nothing while the target is not mounted.
    pub fn handle_move(&self, client_x: f64, client_y: f64) {
        let Some(rect) = self.target.bounding_rect() else {
            return;
        };
        batch(|| {
            self.x.set(client_x - rect.left);
            self.y.set(client_y - rect.top);
        });
    }

    /// Starts following `source`; stops when the guard is dropped.
    pub fn attach<S: PointerSource>(self: Rc<Self>, source: &S) -> Result<S::Guard, DomError> {
        source.subscribe(Box::new(move |x, y| self.handle_move(x, y)))
    }
}

/// Tracks the mouse relative to the element behind `target` for as long as
/// the calling component is mounted.
#[hook]
pub fn use_relative_mouse_position(target: NodeRef) -> (MotionValue<f64>, MotionValue<f64>) {
    let tracker = use_memo(|target| PointerTracker::new(target.clone()), target.clone());

    {
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |_| {
                let listener = match tracker.attach(&WindowPointer) {
                    Ok(listener) => Some(listener),
                    Err(err) => {
                        error!("Pointer tracking disabled: {}", err);
                        None
                    }
                };
                move || drop(listener)
            },
            target,
        );
    }

    (tracker.x(), tracker.y())
}

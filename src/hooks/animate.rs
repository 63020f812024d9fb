use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use yew::prelude::*;

use crate::motion::animate::loop_position;
use crate::motion::MotionValue;

struct FrameLoop {
    position: MotionValue<f64>,
    distance: f64,
    duration_ms: f64,
    started: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl FrameLoop {
    fn schedule(self: &Rc<Self>) {
        let this = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| this.tick(timestamp));
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        let started = match self.started.get() {
            Some(started) => started,
            None => {
                self.started.set(Some(timestamp));
                timestamp
            }
        };
        self.position
            .set(loop_position(timestamp - started, self.duration_ms, self.distance));
        self.schedule();
    }

    fn stop(&self) {
        // Dropping the handle cancels the pending frame.
        self.frame.borrow_mut().take();
    }
}

/// A value sweeping from 0 to `distance` every `duration_ms`, advanced once
/// per animation frame until the component unmounts.
#[hook]
pub fn use_linear_loop(distance: f64, duration_ms: f64) -> MotionValue<f64> {
    let position = use_memo(|_| MotionValue::new(0.0), ());

    {
        let position = (*position).clone();
        use_effect_with_deps(
            move |&(distance, duration_ms): &(f64, f64)| {
                let frames = Rc::new(FrameLoop {
                    position,
                    distance,
                    duration_ms,
                    started: Cell::new(None),
                    frame: RefCell::new(None),
                });
                frames.schedule();
                move || frames.stop()
            },
            (distance, duration_ms),
        );
    }

    (*position).clone()
}

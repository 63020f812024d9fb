use std::rc::Rc;

use log::error;
use web_sys::Event;
use yew::prelude::*;

use crate::dom::{viewport_height, ElementRect, WindowListener};
use crate::motion::scroll::{scroll_progress, ScrollOffset};
use crate::motion::MotionValue;

/// Progress of `target` through `offset`, recomputed on every scroll and
/// resize while mounted.
#[hook]
pub fn use_scroll(target: NodeRef, offset: ScrollOffset) -> MotionValue<f64> {
    let progress = use_memo(|_| MotionValue::new(0.0), ());

    {
        let progress = (*progress).clone();
        use_effect_with_deps(
            move |(target, offset): &(NodeRef, ScrollOffset)| {
                let target = target.clone();
                let offset = *offset;
                let measure = Rc::new(move || {
                    if let (Some(rect), Some(height)) = (target.bounding_rect(), viewport_height()) {
                        progress.set(scroll_progress(&rect, height, &offset));
                    }
                });
                measure();

                let listeners: Vec<WindowListener> = ["scroll", "resize"]
                    .into_iter()
                    .filter_map(|event| {
                        let measure = measure.clone();
                        WindowListener::new(event, move |_: Event| measure())
                            .map_err(|err| error!("Scroll tracking degraded: {}", err))
                            .ok()
                    })
                    .collect();

                move || drop(listeners)
            },
            (target, offset),
        );
    }

    (*progress).clone()
}

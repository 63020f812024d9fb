use log::error;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::motion::MotionValue;

/// Writes `value` into the inline `property` of `node` whenever it changes,
/// without re-rendering the component.
#[hook]
pub fn use_style_binding(node: NodeRef, property: &'static str, value: MotionValue<String>) {
    use_effect_with_deps(
        move |(node, property, value): &(NodeRef, &'static str, MotionValue<String>)| {
            let node = node.clone();
            let property: &'static str = *property;
            let apply = move |css: &String| {
                if let Some(element) = node.cast::<HtmlElement>() {
                    if let Err(err) = element.style().set_property(property, css) {
                        error!("Failed to set `{}`: {:?}", property, err);
                    }
                }
            };
            apply(&value.get());
            let subscription = value.on_change(apply);
            move || drop(subscription)
        },
        (node, property, value),
    );
}

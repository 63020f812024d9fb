//! Hooks that connect live values to the browser.

pub mod animate;
pub mod relative_mouse;
pub mod scroll;
pub mod style;

pub use animate::use_linear_loop;
pub use relative_mouse::use_relative_mouse_position;
pub use scroll::use_scroll;
pub use style::use_style_binding;

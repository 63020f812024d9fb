//! Scroll progress of an element through the viewport.

use crate::dom::Rect;

/// A point along an element or the viewport, as a fraction of its height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Start,
    End,
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::End => 1.0,
        }
    }
}

/// The moment where an edge of the tracked element meets an edge of the
/// viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub target: Edge,
    pub container: Edge,
}

impl Intersection {
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }

    /// Distance scrolled past the element's top when this intersection holds.
    fn scroll_position(&self, element_height: f64, viewport_height: f64) -> f64 {
        self.target.fraction() * element_height - self.container.fraction() * viewport_height
    }
}

/// The window over which progress runs from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffset {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollOffset {
    /// From the element's top touching the viewport bottom until its bottom
    /// touches the viewport top.
    pub const ENTER_TO_EXIT: ScrollOffset = ScrollOffset {
        start: Intersection::new(Edge::Start, Edge::End),
        end: Intersection::new(Edge::End, Edge::Start),
    };
}

impl Default for ScrollOffset {
    fn default() -> Self {
        Self::ENTER_TO_EXIT
    }
}

/// Progress through `offset` for an element whose viewport-relative rect is
/// `rect`. Always within `[0, 1]`.
pub fn scroll_progress(rect: &Rect, viewport_height: f64, offset: &ScrollOffset) -> f64 {
    let scrolled = -rect.top;
    let from = offset.start.scroll_position(rect.height, viewport_height);
    let to = offset.end.scroll_position(rect.height, viewport_height);
    let span = to - from;
    if span == 0.0 {
        return if scrolled < from { 0.0 } else { 1.0 };
    }
    ((scrolled - from) / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn section_at(top: f64) -> Rect {
        Rect {
            left: 0.0,
            top,
            width: 1200.0,
            height: 400.0,
        }
    }

    #[test]
    fn zero_when_top_meets_viewport_bottom() {
        let progress = scroll_progress(&section_at(VIEWPORT), VIEWPORT, &ScrollOffset::ENTER_TO_EXIT);
        assert_eq!(progress, 0.0);
    }

    #[test]
    fn one_when_bottom_meets_viewport_top() {
        let progress = scroll_progress(&section_at(-400.0), VIEWPORT, &ScrollOffset::ENTER_TO_EXIT);
        assert_eq!(progress, 1.0);
    }

    #[test]
    fn halfway_through_window() {
        // window is 1200px long, starting at top = 800
        let progress = scroll_progress(&section_at(200.0), VIEWPORT, &ScrollOffset::ENTER_TO_EXIT);
        assert_eq!(progress, 0.5);
    }

    #[test]
    fn clamped_outside_window() {
        let offset = ScrollOffset::default();
        assert_eq!(scroll_progress(&section_at(5000.0), VIEWPORT, &offset), 0.0);
        assert_eq!(scroll_progress(&section_at(-5000.0), VIEWPORT, &offset), 1.0);
    }

    #[test]
    fn zero_length_window_is_a_step() {
        let offset = ScrollOffset {
            start: Intersection::new(Edge::Start, Edge::Start),
            end: Intersection::new(Edge::Start, Edge::Start),
        };
        assert_eq!(scroll_progress(&section_at(0.0), VIEWPORT, &offset), 1.0);
        assert_eq!(scroll_progress(&section_at(1.0), VIEWPORT, &offset), 0.0);
    }
}

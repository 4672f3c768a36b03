//! Contracts a gesture recogniser consumes from its environment.

use crate::events::TouchId;
use crate::listener::EventListener;
use gesturekit_geometry::Point;

/// The display object a gesture is attached to.
pub trait GestureHost {
    /// Fired when a touch lands on this object.
    fn on_touch_begin(&self) -> &EventListener;

    /// Converts a stage point into this object's local coordinate space.
    fn global_to_local(&self, global: Point) -> Point;
}

/// The global input surface: every touch, wherever it is.
pub trait InputStage {
    fn on_touch_move(&self) -> &EventListener;

    fn on_touch_end(&self) -> &EventListener;

    /// Number of touches currently pressed.
    fn touch_count(&self) -> usize;

    /// Writes the ids of the pressed touches into `buffer` in the stage's
    /// enumeration order and returns how many were written. Touches beyond
    /// `buffer.len()` are dropped.
    fn all_touches(&self, buffer: &mut [TouchId]) -> usize;

    /// Current stage position of `touch`, or `None` if it is not pressed.
    fn touch_position(&self, touch: TouchId) -> Option<Point>;
}

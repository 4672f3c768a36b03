use gesturekit_geometry::Point;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Identifier of a touch slot on the input stage.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct TouchId(pub u32);

impl TouchId {
    /// The first finger down, or the mouse.
    pub const PRIMARY: TouchId = TouchId(0);
}

impl fmt::Display for TouchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "touch#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEventKind {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// Low-level touch record produced by the input stage.
///
/// Gestures never interpret this payload; they forward it verbatim to their
/// own listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputEvent {
    pub touch_id: TouchId,
    pub kind: InputEventKind,
    /// Stage (global) coordinates.
    pub position: Point,
    /// Number of touches pressed when the event was produced.
    pub touch_count: usize,
}

impl InputEvent {
    pub fn new(touch_id: TouchId, kind: InputEventKind, position: Point) -> Self {
        Self {
            touch_id,
            kind,
            position,
            touch_count: 0,
        }
    }

    pub fn with_touch_count(mut self, touch_count: usize) -> Self {
        self.touch_count = touch_count;
        self
    }
}

/// Notification kinds carried by [`EventContext`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    TouchBegin,
    TouchMove,
    TouchEnd,
    RotationBegin,
    RotationAction,
    RotationEnd,
}

impl EventType {
    /// Stable listener name, as exposed to scripting and debug output.
    pub fn name(&self) -> &'static str {
        match self {
            EventType::TouchBegin => "onTouchBegin",
            EventType::TouchMove => "onTouchMove",
            EventType::TouchEnd => "onTouchEnd",
            EventType::RotationBegin => "onRotationBegin",
            EventType::RotationAction => "onRotationAction",
            EventType::RotationEnd => "onRotationEnd",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single dispatch of an [`EventType`] to the callbacks of one listener.
///
/// Clones share the propagation flag, so a callback that stops propagation is
/// observed by the dispatcher that handed out the context.
#[derive(Clone, Debug)]
pub struct EventContext {
    pub event_type: EventType,
    pub input_event: InputEvent,
    stopped: Rc<Cell<bool>>,
}

impl EventContext {
    pub fn new(event_type: EventType, input_event: InputEvent) -> Self {
        Self {
            event_type,
            input_event,
            stopped: Rc::new(Cell::new(false)),
        }
    }

    /// Skip the callbacks that have not yet run for this dispatch.
    pub fn stop_propagation(&self) {
        self.stopped.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.stopped.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_names() {
        assert_eq!(EventType::RotationBegin.name(), "onRotationBegin");
        assert_eq!(EventType::RotationAction.to_string(), "onRotationAction");
        assert_eq!(EventType::TouchEnd.name(), "onTouchEnd");
    }

    #[test]
    fn stop_propagation_is_shared_between_clones() {
        let event = InputEvent::new(TouchId(3), InputEventKind::Moved, Point::ZERO);
        let context = EventContext::new(EventType::TouchMove, event);
        let copy = context.clone();
        copy.stop_propagation();
        assert!(context.is_propagation_stopped());
    }
}

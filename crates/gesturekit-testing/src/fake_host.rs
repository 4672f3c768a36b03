//! In-memory display object for attaching gestures in tests.

use gesturekit_core::{EventListener, EventType, GestureHost, InputEvent};
use gesturekit_geometry::{Point, Rect, Size, Transform};
use std::cell::Cell;

/// A host with a stage transform and optional local bounds.
///
/// Without bounds every point hits the host.
pub struct FakeHost {
    transform: Cell<Transform>,
    size: Option<Size>,
    on_touch_begin: EventListener,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            transform: Cell::new(Transform::IDENTITY),
            size: None,
            on_touch_begin: EventListener::new(EventType::TouchBegin),
        }
    }

    pub fn with_transform(self, transform: Transform) -> Self {
        self.transform.set(transform);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn transform(&self) -> Transform {
        self.transform.get()
    }

    /// Moves the host on stage; affects subsequent `global_to_local` calls.
    pub fn set_transform(&self, transform: Transform) {
        self.transform.set(transform);
    }

    /// Whether a stage point lands on the host.
    pub fn hit_test(&self, global: Point) -> bool {
        match self.size {
            Some(size) => Rect::from_size(size).contains_point(self.global_to_local(global)),
            None => true,
        }
    }

    /// Fires the host's touch-begin notification.
    pub fn begin(&self, event: InputEvent) {
        self.on_touch_begin.call(event);
    }
}

impl GestureHost for FakeHost {
    fn on_touch_begin(&self) -> &EventListener {
        &self.on_touch_begin
    }

    fn global_to_local(&self, global: Point) -> Point {
        self.transform.get().global_to_local(global)
    }
}

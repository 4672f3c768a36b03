//! Scripted input stage.
//!
//! Touches are enumerated in the order they were pressed, which makes the
//! pair a two-finger gesture captures predictable in tests.

use gesturekit_core::{EventListener, EventType, InputEvent, InputEventKind, InputStage, TouchId};
use gesturekit_geometry::Point;
use rustc_hash::FxHashMap;
use std::cell::RefCell;

#[derive(Default)]
struct Touches {
    order: Vec<TouchId>,
    positions: FxHashMap<TouchId, Point>,
}

impl Touches {
    fn insert(&mut self, id: TouchId, position: Point) {
        if self.positions.insert(id, position).is_none() {
            self.order.push(id);
        }
    }

    fn remove(&mut self, id: TouchId) -> Option<Point> {
        let position = self.positions.remove(&id)?;
        self.order.retain(|touch| *touch != id);
        Some(position)
    }
}

pub struct FakeStage {
    touches: RefCell<Touches>,
    on_touch_move: EventListener,
    on_touch_end: EventListener,
}

impl Default for FakeStage {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeStage {
    pub fn new() -> Self {
        Self {
            touches: RefCell::new(Touches::default()),
            on_touch_move: EventListener::new(EventType::TouchMove),
            on_touch_end: EventListener::new(EventType::TouchEnd),
        }
    }

    fn event(&self, id: TouchId, kind: InputEventKind, position: Point) -> InputEvent {
        InputEvent::new(id, kind, position).with_touch_count(self.touch_count())
    }

    /// Puts a finger down. The stage has no begin listener of its own; the
    /// returned event is what a host would receive.
    pub fn press(&self, id: TouchId, position: Point) -> InputEvent {
        self.touches.borrow_mut().insert(id, position);
        log::trace!("stage: press {id} at {position:?}");
        self.event(id, InputEventKind::Began, position)
    }

    /// Updates a pressed touch without dispatching anything.
    ///
    /// Returns false if `id` is not pressed.
    pub fn set_position(&self, id: TouchId, position: Point) -> bool {
        match self.touches.borrow_mut().positions.get_mut(&id) {
            Some(current) => {
                *current = position;
                true
            }
            None => false,
        }
    }

    /// Moves a pressed touch and dispatches the stage move notification.
    pub fn move_to(&self, id: TouchId, position: Point) -> InputEvent {
        if !self.set_position(id, position) {
            log::warn!("stage: move for unknown {id}");
        }
        let event = self.event(id, InputEventKind::Moved, position);
        self.on_touch_move.call(event);
        event
    }

    /// Lifts a touch and dispatches the stage end notification.
    pub fn release(&self, id: TouchId) -> InputEvent {
        let position = self.touches.borrow_mut().remove(id).unwrap_or_else(|| {
            log::warn!("stage: release for unknown {id}");
            Point::ZERO
        });
        let event = self.event(id, InputEventKind::Ended, position);
        self.on_touch_end.call(event);
        event
    }

    /// Drops a touch without dispatching anything.
    pub fn forget(&self, id: TouchId) -> Option<Point> {
        self.touches.borrow_mut().remove(id)
    }

    pub fn pressed(&self) -> Vec<TouchId> {
        self.touches.borrow().order.clone()
    }
}

impl InputStage for FakeStage {
    fn on_touch_move(&self) -> &EventListener {
        &self.on_touch_move
    }

    fn on_touch_end(&self) -> &EventListener {
        &self.on_touch_end
    }

    fn touch_count(&self) -> usize {
        self.touches.borrow().order.len()
    }

    fn all_touches(&self, buffer: &mut [TouchId]) -> usize {
        let touches = self.touches.borrow();
        let count = touches.order.len().min(buffer.len());
        buffer[..count].copy_from_slice(&touches.order[..count]);
        count
    }

    fn touch_position(&self, touch: TouchId) -> Option<Point> {
        self.touches.borrow().positions.get(&touch).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_in_press_order() {
        let stage = FakeStage::new();
        stage.press(TouchId(7), Point::ZERO);
        stage.press(TouchId(2), Point::ZERO);
        stage.press(TouchId(5), Point::ZERO);

        let mut buffer = [TouchId::default(); 2];
        assert_eq!(stage.all_touches(&mut buffer), 2);
        assert_eq!(buffer, [TouchId(7), TouchId(2)]);
        assert_eq!(stage.touch_count(), 3);
    }

    #[test]
    fn release_removes_touch_and_reports_last_position() {
        let stage = FakeStage::new();
        stage.press(TouchId(1), Point::new(3.0, 4.0));
        stage.move_to(TouchId(1), Point::new(5.0, 6.0));

        let event = stage.release(TouchId(1));

        assert_eq!(event.kind, InputEventKind::Ended);
        assert_eq!(event.position, Point::new(5.0, 6.0));
        assert_eq!(event.touch_count, 0);
        assert_eq!(stage.touch_position(TouchId(1)), None);
    }

    #[test]
    fn pressing_same_id_twice_keeps_one_slot() {
        let stage = FakeStage::new();
        stage.press(TouchId(1), Point::ZERO);
        stage.press(TouchId(1), Point::new(1.0, 1.0));

        assert_eq!(stage.pressed(), vec![TouchId(1)]);
        assert_eq!(stage.touch_position(TouchId(1)), Some(Point::new(1.0, 1.0)));
    }
}

//! Typed notification points.

use crate::events::{EventContext, EventType, InputEvent};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Callback registered on an [`EventListener`]. Identity is the `Rc` pointer.
pub type EventCallback = Rc<dyn Fn(&EventContext)>;

/// A subscribable notification point for a single [`EventType`].
///
/// Registration is idempotent: adding a callback that is already present, or
/// removing one that is absent, is a no-op. Dispatch works on a snapshot of
/// the callback list, so callbacks may add or remove listeners (themselves
/// included) while being called.
pub struct EventListener {
    event_type: EventType,
    callbacks: RefCell<SmallVec<[EventCallback; 2]>>,
}

impl EventListener {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            callbacks: RefCell::new(SmallVec::new()),
        }
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// Registers `callback`. Returns false if it was already registered.
    pub fn add(&self, callback: EventCallback) -> bool {
        let mut callbacks = self.callbacks.borrow_mut();
        if callbacks.iter().any(|cb| Rc::ptr_eq(cb, &callback)) {
            return false;
        }
        callbacks.push(callback);
        true
    }

    /// Unregisters `callback`. Returns false if it was not registered.
    pub fn remove(&self, callback: &EventCallback) -> bool {
        let mut callbacks = self.callbacks.borrow_mut();
        let before = callbacks.len();
        callbacks.retain(|cb| !Rc::ptr_eq(cb, callback));
        callbacks.len() != before
    }

    pub fn contains(&self, callback: &EventCallback) -> bool {
        self.callbacks
            .borrow()
            .iter()
            .any(|cb| Rc::ptr_eq(cb, callback))
    }

    pub fn clear(&self) {
        self.callbacks.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    /// Dispatches `input_event` to every registered callback in registration
    /// order, stopping early if a callback stops propagation.
    pub fn call(&self, input_event: InputEvent) {
        // Snapshot so callbacks can mutate the registration list.
        let callbacks: SmallVec<[EventCallback; 2]> =
            self.callbacks.borrow().iter().map(Rc::clone).collect();
        if callbacks.is_empty() {
            return;
        }

        let context = EventContext::new(self.event_type, input_event);
        for callback in callbacks {
            callback(&context);
            if context.is_propagation_stopped() {
                log::trace!("{} propagation stopped", self.event_type);
                break;
            }
        }
    }
}

impl fmt::Debug for EventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListener")
            .field("event_type", &self.event_type)
            .field("callbacks", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{InputEventKind, TouchId};
    use gesturekit_geometry::Point;
    use std::cell::Cell;

    fn event() -> InputEvent {
        InputEvent::new(TouchId(1), InputEventKind::Moved, Point::new(1.0, 2.0))
    }

    fn counter() -> (Rc<Cell<u32>>, EventCallback) {
        let count = Rc::new(Cell::new(0));
        let callback: EventCallback = {
            let count = count.clone();
            Rc::new(move |_: &EventContext| count.set(count.get() + 1))
        };
        (count, callback)
    }

    #[test]
    fn add_is_idempotent() {
        let listener = EventListener::new(EventType::TouchMove);
        let (count, callback) = counter();

        assert!(listener.add(callback.clone()));
        assert!(!listener.add(callback.clone()));
        assert_eq!(listener.len(), 1);

        listener.call(event());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn remove_absent_callback_is_noop() {
        let listener = EventListener::new(EventType::TouchEnd);
        let (_, callback) = counter();

        assert!(!listener.remove(&callback));
        listener.add(callback.clone());
        assert!(listener.remove(&callback));
        assert!(!listener.remove(&callback));
        assert!(listener.is_empty());
    }

    #[test]
    fn context_carries_type_and_payload() {
        let listener = EventListener::new(EventType::RotationAction);
        let seen = Rc::new(RefCell::new(None));
        listener.add({
            let seen = seen.clone();
            Rc::new(move |ctx: &EventContext| {
                *seen.borrow_mut() = Some((ctx.event_type, ctx.input_event));
            })
        });

        listener.call(event());

        assert_eq!(
            *seen.borrow(),
            Some((EventType::RotationAction, event()))
        );
    }

    #[test]
    fn callback_can_remove_itself_during_dispatch() {
        let listener = Rc::new(EventListener::new(EventType::TouchEnd));
        let count = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<EventCallback>>> = Rc::new(RefCell::new(None));

        let callback: EventCallback = {
            let listener = Rc::downgrade(&listener);
            let slot = slot.clone();
            let count = count.clone();
            Rc::new(move |_: &EventContext| {
                count.set(count.get() + 1);
                if let (Some(listener), Some(me)) = (listener.upgrade(), slot.borrow().as_ref()) {
                    listener.remove(me);
                }
            })
        };
        *slot.borrow_mut() = Some(callback.clone());
        listener.add(callback);

        listener.call(event());
        listener.call(event());

        assert_eq!(count.get(), 1);
        assert!(listener.is_empty());
    }

    #[test]
    fn stop_propagation_skips_remaining_callbacks() {
        let listener = EventListener::new(EventType::TouchBegin);
        let (count, callback) = counter();
        listener.add(Rc::new(|ctx: &EventContext| ctx.stop_propagation()));
        listener.add(callback);

        listener.call(event());

        assert_eq!(count.get(), 0);
    }
}

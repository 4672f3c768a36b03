//! Captures the notification stream of a [`RotationGesture`].

use gesturekit_core::{EventCallback, EventContext, EventType, InputEvent};
use gesturekit_foundation::{GesturePhase, RotationGesture};
use std::cell::RefCell;
use std::rc::Rc;

/// One notification together with the outputs visible while it fired.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordedEvent {
    pub event_type: EventType,
    pub input_event: InputEvent,
    pub rotation: f32,
    pub delta: f32,
    pub phase: GesturePhase,
}

pub struct EventRecorder {
    records: Rc<RefCell<Vec<RecordedEvent>>>,
    callback: EventCallback,
}

impl EventRecorder {
    /// Subscribes to `on_begin`, `on_action` and `on_end` of `gesture`.
    pub fn attach(gesture: &RotationGesture) -> Self {
        let records = Rc::new(RefCell::new(Vec::new()));
        let callback: EventCallback = {
            let records = records.clone();
            let reader = gesture.reader();
            Rc::new(move |context: &EventContext| {
                let Some(snapshot) = reader.snapshot() else {
                    return;
                };
                records.borrow_mut().push(RecordedEvent {
                    event_type: context.event_type,
                    input_event: context.input_event,
                    rotation: snapshot.rotation,
                    delta: snapshot.delta,
                    phase: snapshot.phase,
                });
            })
        };

        gesture.on_begin().add(callback.clone());
        gesture.on_action().add(callback.clone());
        gesture.on_end().add(callback.clone());

        Self { records, callback }
    }

    pub fn detach(&self, gesture: &RotationGesture) {
        gesture.on_begin().remove(&self.callback);
        gesture.on_action().remove(&self.callback);
        gesture.on_end().remove(&self.callback);
    }

    pub fn records(&self) -> Vec<RecordedEvent> {
        self.records.borrow().clone()
    }

    pub fn event_types(&self) -> Vec<EventType> {
        self.records.borrow().iter().map(|r| r.event_type).collect()
    }

    pub fn count(&self, event_type: EventType) -> usize {
        self.records
            .borrow()
            .iter()
            .filter(|r| r.event_type == event_type)
            .count()
    }

    /// `(rotation, delta)` of every action notification, in order.
    pub fn actions(&self) -> Vec<(f32, f32)> {
        self.records
            .borrow()
            .iter()
            .filter(|r| r.event_type == EventType::RotationAction)
            .map(|r| (r.rotation, r.delta))
            .collect()
    }

    pub fn last(&self) -> Option<RecordedEvent> {
        self.records.borrow().last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

//! Two-finger rotation gesture recogniser.
//!
//! The recogniser listens for a touch landing on its host. Once exactly two
//! touches are pressed it records the vector between them (in host-local
//! coordinates) as the zero-rotation baseline, then follows global move and
//! end events:
//!
//! ```text
//!            begin, 2 touches             angle > threshold
//!   Idle ─────────────────────▶ Tracking ──────────────────▶ Active ─┐
//!    ▲                             │                           │  ▲  │ move
//!    └──────── touch end ──────────┴──────── touch end ────────┘  └──┘
//! ```
//!
//! Every angle is measured against the baseline captured on entry to
//! `Tracking`, so `delta` values are first differences of an absolute series
//! and `rotation` telescopes back to the current absolute angle.

use crate::gesture_constants::{ROTATION_THRESHOLD_DEGREES, ROTATION_TOUCH_COUNT};
use gesturekit_core::{
    EventCallback, EventContext, EventListener, EventType, GestureError, GestureHost, InputStage,
    TouchId,
};
use gesturekit_geometry::{angle_between_degrees, round_half_even, Vector};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

const GESTURE_NAME: &str = "RotationGesture";

/// Tunables for [`RotationGesture`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationConfig {
    /// Round angles to whole degrees and drop moves that round to zero.
    pub snapping: bool,
    /// Angle the pair must exceed (strictly, signed) before the gesture begins.
    pub threshold_degrees: f32,
    /// Re-capture the baseline when the host reports another touch begin while
    /// the gesture is still below its threshold.
    pub rebaseline_before_activation: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            snapping: true,
            threshold_degrees: ROTATION_THRESHOLD_DEGREES,
            rebaseline_before_activation: false,
        }
    }
}

impl RotationConfig {
    pub fn with_snapping(mut self, snapping: bool) -> Self {
        self.snapping = snapping;
        self
    }

    pub fn with_threshold_degrees(mut self, threshold_degrees: f32) -> Self {
        self.threshold_degrees = threshold_degrees;
        self
    }

    pub fn with_rebaseline_before_activation(mut self, rebaseline: bool) -> Self {
        self.rebaseline_before_activation = rebaseline;
        self
    }
}

/// Where a gesture is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// No touch pair captured.
    Idle,
    /// Pair captured, angle still within the threshold.
    Tracking,
    /// Threshold crossed; action notifications are being emitted.
    Active,
}

/// Output values of a rotation gesture at one point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationSnapshot {
    /// Accumulated rotation in degrees since the gesture began.
    pub rotation: f32,
    /// Change in degrees since the previous action notification.
    pub delta: f32,
    /// `rotation` as of the previous action notification.
    pub last_rotation: f32,
    /// Phase the gesture was in when the snapshot was taken.
    pub phase: GesturePhase,
}

#[derive(Clone, Copy, Debug)]
struct TouchPair {
    touches: [TouchId; ROTATION_TOUCH_COUNT],
    start_vector: Vector,
}

struct RotationState {
    config: RotationConfig,
    pair: Option<TouchPair>,
    started: bool,
    enabled: bool,
    rotation: f32,
    last_rotation: f32,
    delta: f32,
}

impl RotationState {
    fn phase(&self) -> GesturePhase {
        match (self.pair.is_some(), self.started) {
            (_, true) => GesturePhase::Active,
            (true, false) => GesturePhase::Tracking,
            (false, false) => GesturePhase::Idle,
        }
    }

    fn snapshot(&self) -> RotationSnapshot {
        RotationSnapshot {
            rotation: self.rotation,
            delta: self.delta,
            last_rotation: self.last_rotation,
            phase: self.phase(),
        }
    }
}

enum Notify {
    Begin,
    Action,
}

struct Handlers {
    touch_begin: EventCallback,
    touch_move: EventCallback,
    touch_end: EventCallback,
}

struct Shared {
    host: RefCell<Option<Weak<dyn GestureHost>>>,
    stage: Rc<dyn InputStage>,
    state: RefCell<RotationState>,
    handlers: Handlers,
    on_begin: EventListener,
    on_action: EventListener,
    on_end: EventListener,
}

fn handler(weak: &Weak<Shared>, handle: fn(&Shared, &EventContext)) -> EventCallback {
    let weak = weak.clone();
    Rc::new(move |context: &EventContext| {
        if let Some(shared) = weak.upgrade() {
            handle(&shared, context);
        }
    })
}

impl Shared {
    fn live_host(&self) -> Option<Rc<dyn GestureHost>> {
        self.host.borrow().as_ref().and_then(|host| host.upgrade())
    }

    /// `local(touch0) - local(touch1)` for the current touch positions.
    fn local_vector(&self, host: &dyn GestureHost, touches: [TouchId; 2]) -> Option<Vector> {
        let first = self.stage.touch_position(touches[0])?;
        let second = self.stage.touch_position(touches[1])?;
        Some(host.global_to_local(first) - host.global_to_local(second))
    }

    fn handle_touch_begin(&self, _context: &EventContext) {
        let Some(host) = self.live_host() else {
            return;
        };
        if self.stage.touch_count() != ROTATION_TOUCH_COUNT {
            return;
        }

        {
            let state = self.state.borrow();
            if state.started {
                return;
            }
            if state.pair.is_some() && !state.config.rebaseline_before_activation {
                log::trace!("{GESTURE_NAME}: pair already captured, ignoring touch begin");
                return;
            }
        }

        let mut touches = [TouchId::default(); ROTATION_TOUCH_COUNT];
        if self.stage.all_touches(&mut touches) < touches.len() {
            return;
        }
        let Some(start_vector) = self.local_vector(host.as_ref(), touches) else {
            log::trace!("{GESTURE_NAME}: missing position for {touches:?}");
            return;
        };

        self.state.borrow_mut().pair = Some(TouchPair {
            touches,
            start_vector,
        });
        self.stage.on_touch_move().add(self.handlers.touch_move.clone());
        self.stage.on_touch_end().add(self.handlers.touch_end.clone());
        log::debug!(
            "{GESTURE_NAME}: tracking {} and {}, baseline {start_vector:?}",
            touches[0],
            touches[1]
        );
    }

    fn handle_touch_move(&self, context: &EventContext) {
        let Some(host) = self.live_host() else {
            return;
        };
        let Some(pair) = self.state.borrow().pair else {
            return;
        };
        let Some(current) = self.local_vector(host.as_ref(), pair.touches) else {
            log::trace!("{GESTURE_NAME}: tracked touch lost, skipping move");
            return;
        };

        let mut rot = angle_between_degrees(pair.start_vector, current);
        let notify = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            if state.config.snapping {
                rot = round_half_even(rot);
                if rot == 0.0 {
                    log::trace!("{GESTURE_NAME}: snapped angle is zero, suppressed");
                    return;
                }
            }

            if !state.started {
                if rot <= state.config.threshold_degrees {
                    log::trace!("{GESTURE_NAME}: {rot} deg, below threshold");
                    return;
                }
                state.started = true;
                state.rotation = 0.0;
                state.last_rotation = 0.0;
                state.delta = 0.0;
                log::debug!("{GESTURE_NAME}: began at {rot} deg");
                Notify::Begin
            } else {
                state.delta = rot - state.last_rotation;
                state.last_rotation = rot;
                state.rotation += state.delta;
                log::trace!(
                    "{GESTURE_NAME}: rotation {} delta {}",
                    state.rotation,
                    state.delta
                );
                Notify::Action
            }
        };

        // State borrow is released so listeners can read the outputs.
        match notify {
            Notify::Begin => self.on_begin.call(context.input_event),
            Notify::Action => self.on_action.call(context.input_event),
        }
    }

    fn handle_touch_end(&self, context: &EventContext) {
        self.stage.on_touch_move().remove(&self.handlers.touch_move);
        self.stage.on_touch_end().remove(&self.handlers.touch_end);

        let was_started = {
            let mut state = self.state.borrow_mut();
            state.pair = None;
            std::mem::replace(&mut state.started, false)
        };

        if was_started {
            log::debug!("{GESTURE_NAME}: ended by {}", context.input_event.touch_id);
            self.on_end.call(context.input_event);
        } else {
            log::trace!("{GESTURE_NAME}: pair released before threshold");
        }
    }

    fn subscribe(&self, host: &dyn GestureHost) {
        host.on_touch_begin().add(self.handlers.touch_begin.clone());
        self.state.borrow_mut().enabled = true;
    }

    fn unsubscribe(&self, host: Option<&dyn GestureHost>) {
        {
            let mut state = self.state.borrow_mut();
            state.started = false;
            state.pair = None;
            state.enabled = false;
        }
        if let Some(host) = host {
            host.on_touch_begin().remove(&self.handlers.touch_begin);
        }
        self.stage.on_touch_move().remove(&self.handlers.touch_move);
        self.stage.on_touch_end().remove(&self.handlers.touch_end);
    }
}

/// Recognises two fingers turning around each other on a host.
///
/// The gesture holds a weak reference to its host and a shared reference to
/// the input stage. It is enabled on construction. Dropping the gesture
/// disposes it.
///
/// ```ignore
/// let gesture = RotationGesture::new(&host, stage.clone());
/// let reader = gesture.reader();
/// gesture.on_action().add(Rc::new(move |_ctx: &EventContext| {
///     if let Some(snapshot) = reader.snapshot() {
///         image.rotate_by(snapshot.delta);
///     }
/// }));
/// ```
pub struct RotationGesture {
    shared: Rc<Shared>,
}

impl RotationGesture {
    pub fn new<H, S>(host: &Rc<H>, stage: Rc<S>) -> Self
    where
        H: GestureHost + 'static,
        S: InputStage + 'static,
    {
        Self::with_config(host, stage, RotationConfig::default())
    }

    pub fn with_config<H, S>(host: &Rc<H>, stage: Rc<S>, config: RotationConfig) -> Self
    where
        H: GestureHost + 'static,
        S: InputStage + 'static,
    {
        let weak_host: Weak<H> = Rc::downgrade(host);
        let weak_host: Weak<dyn GestureHost> = weak_host;
        let stage: Rc<dyn InputStage> = stage;

        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| Shared {
            host: RefCell::new(Some(weak_host)),
            stage,
            state: RefCell::new(RotationState {
                config,
                pair: None,
                started: false,
                enabled: false,
                rotation: 0.0,
                last_rotation: 0.0,
                delta: 0.0,
            }),
            handlers: Handlers {
                touch_begin: handler(weak, Shared::handle_touch_begin),
                touch_move: handler(weak, Shared::handle_touch_move),
                touch_end: handler(weak, Shared::handle_touch_end),
            },
            on_begin: EventListener::new(EventType::RotationBegin),
            on_action: EventListener::new(EventType::RotationAction),
            on_end: EventListener::new(EventType::RotationEnd),
        });

        shared.subscribe(&**host);
        log::debug!("{GESTURE_NAME}: created with {config:?}");
        Self { shared }
    }

    /// Fired when the pair first turns past the threshold.
    pub fn on_begin(&self) -> &EventListener {
        &self.shared.on_begin
    }

    /// Fired after `rotation` and `delta` were updated by a move.
    pub fn on_action(&self) -> &EventListener {
        &self.shared.on_action
    }

    /// Fired when a touch ends while the gesture is active.
    pub fn on_end(&self) -> &EventListener {
        &self.shared.on_end
    }

    /// Subscribes to, or unsubscribes from, the host and stage.
    ///
    /// Disabling drops any captured pair and clears the started flag without
    /// firing `on_end`. Both directions are idempotent.
    pub fn enable(&self, value: bool) -> Result<(), GestureError> {
        if self.is_disposed() {
            return Err(GestureError::Disposed {
                gesture: GESTURE_NAME,
            });
        }

        let host = self.shared.live_host();
        if value {
            let host = host.ok_or(GestureError::HostDropped {
                gesture: GESTURE_NAME,
            })?;
            self.shared.subscribe(&*host);
            log::debug!("{GESTURE_NAME}: enabled");
        } else {
            self.shared.unsubscribe(host.as_deref());
            log::debug!("{GESTURE_NAME}: disabled");
        }
        Ok(())
    }

    /// Disables the gesture and releases the host. Calling it twice is a no-op.
    pub fn dispose(&self) {
        if self.is_disposed() {
            return;
        }
        let host = self.shared.live_host();
        self.shared.unsubscribe(host.as_deref());
        self.shared.host.replace(None);
        log::debug!("{GESTURE_NAME}: disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.host.borrow().is_none()
    }

    pub fn is_enabled(&self) -> bool {
        self.shared.state.borrow().enabled
    }

    pub fn is_started(&self) -> bool {
        self.shared.state.borrow().started
    }

    pub fn phase(&self) -> GesturePhase {
        self.shared.state.borrow().phase()
    }

    pub fn rotation(&self) -> f32 {
        self.shared.state.borrow().rotation
    }

    pub fn delta(&self) -> f32 {
        self.shared.state.borrow().delta
    }

    pub fn last_rotation(&self) -> f32 {
        self.shared.state.borrow().last_rotation
    }

    pub fn snapshot(&self) -> RotationSnapshot {
        self.shared.state.borrow().snapshot()
    }

    /// The touch pair captured for the current session, in capture order.
    pub fn tracked_touches(&self) -> Option<[TouchId; 2]> {
        self.shared.state.borrow().pair.map(|pair| pair.touches)
    }

    /// Zero-rotation baseline of the current session, in host-local space.
    pub fn start_vector(&self) -> Option<Vector> {
        self.shared.state.borrow().pair.map(|pair| pair.start_vector)
    }

    pub fn snapping(&self) -> bool {
        self.shared.state.borrow().config.snapping
    }

    pub fn set_snapping(&self, snapping: bool) {
        self.shared.state.borrow_mut().config.snapping = snapping;
    }

    pub fn config(&self) -> RotationConfig {
        self.shared.state.borrow().config
    }

    /// A handle listeners can capture to read outputs during a notification.
    pub fn reader(&self) -> RotationReader {
        RotationReader {
            shared: Rc::downgrade(&self.shared),
        }
    }
}

impl Drop for RotationGesture {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Weak, read-only view of a [`RotationGesture`].
#[derive(Clone)]
pub struct RotationReader {
    shared: Weak<Shared>,
}

impl RotationReader {
    /// Current outputs, or `None` once the gesture has been dropped.
    pub fn snapshot(&self) -> Option<RotationSnapshot> {
        self.shared
            .upgrade()
            .map(|shared| shared.state.borrow().snapshot())
    }
}

pub mod gestures;

pub use gesturekit_core::{EventContext, EventType, InputEvent, InputEventKind, TouchId};

pub mod prelude {
    pub use super::gestures::{
        GesturePhase, RotationConfig, RotationGesture, RotationReader, RotationSnapshot,
    };
    pub use gesturekit_core::{EventContext, EventType, InputEvent, InputEventKind, TouchId};
}

//! Core input plumbing for gesturekit
//!
//! Touch events, the listener type gestures subscribe through, and the two
//! collaborator contracts every recogniser is built against: the host display
//! object ([`GestureHost`]) and the input stage ([`InputStage`]).

mod error;
mod events;
mod listener;
mod stage;

pub use error::GestureError;
pub use events::{EventContext, EventType, InputEvent, InputEventKind, TouchId};
pub use listener::{EventCallback, EventListener};
pub use stage::{GestureHost, InputStage};

pub mod prelude {
    pub use crate::error::GestureError;
    pub use crate::events::{EventContext, EventType, InputEvent, InputEventKind, TouchId};
    pub use crate::listener::{EventCallback, EventListener};
    pub use crate::stage::{GestureHost, InputStage};
}

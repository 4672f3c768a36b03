//! Gesture recognisers for gesturekit: constants and input handling

pub mod gesture_constants;
pub mod input;

// Re-export commonly used items
pub use gesture_constants::*;
pub use input::gestures::{
    GesturePhase, RotationConfig, RotationGesture, RotationReader, RotationSnapshot,
};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::input::prelude::*;
    pub use gesturekit_core::prelude::*;
}

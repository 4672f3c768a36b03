pub mod rotation;

pub use rotation::{
    GesturePhase, RotationConfig, RotationGesture, RotationReader, RotationSnapshot,
};

//! Testing utilities and harness for gesturekit
//!
//! Everything here runs without a window or a real touch screen: a scripted
//! [`FakeStage`], a [`FakeHost`] with a configurable transform, a
//! [`GestureRobot`] that drives both, and an [`EventRecorder`] that captures a
//! gesture's notification stream.

pub mod assertions;
pub mod fake_host;
pub mod fake_stage;
pub mod recorder;
pub mod robot;

pub use assertions::*;
pub use fake_host::FakeHost;
pub use fake_stage::FakeStage;
pub use recorder::{EventRecorder, RecordedEvent};
pub use robot::{pair_at_angle, GestureRobot};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::fake_host::FakeHost;
    pub use crate::fake_stage::FakeStage;
    pub use crate::recorder::{EventRecorder, RecordedEvent};
    pub use crate::robot::{pair_at_angle, GestureRobot};
}

//! Robot-style driver for multi-touch scenarios
//!
//! A [`GestureRobot`] couples a [`FakeHost`] with a [`FakeStage`] the way a
//! real input system does: a press that lands on the host fires the host's
//! touch-begin notification, moves and releases go through the stage.
//!
//! # Example
//!
//! ```
//! use gesturekit_geometry::Point;
//! use gesturekit_testing::GestureRobot;
//!
//! let robot = GestureRobot::new();
//! let pair = robot.press_pair(Point::new(150.0, 100.0), Point::new(50.0, 100.0));
//! robot.twist(pair, 30.0, 3);
//! robot.release(pair[1]);
//! ```

use crate::fake_host::FakeHost;
use crate::fake_stage::FakeStage;
use gesturekit_core::{InputStage, TouchId};
use gesturekit_geometry::{Point, Vector};
use std::cell::Cell;
use std::rc::Rc;

/// Positions for a finger pair whose vector `first - second` points at
/// `degrees`, `2 * radius` long and centred on `center`.
pub fn pair_at_angle(center: Point, radius: f32, degrees: f32) -> (Point, Point) {
    let offset = Vector::from_angle_degrees(degrees) * radius;
    (center + offset, center + -offset)
}

pub struct GestureRobot {
    host: Rc<FakeHost>,
    stage: Rc<FakeStage>,
    next_id: Cell<u32>,
}

impl Default for GestureRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRobot {
    pub fn new() -> Self {
        Self::with_host(FakeHost::new())
    }

    pub fn with_host(host: FakeHost) -> Self {
        Self {
            host: Rc::new(host),
            stage: Rc::new(FakeStage::new()),
            next_id: Cell::new(1),
        }
    }

    pub fn host(&self) -> &Rc<FakeHost> {
        &self.host
    }

    pub fn stage(&self) -> &Rc<FakeStage> {
        &self.stage
    }

    fn allocate_id(&self) -> TouchId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        TouchId(id)
    }

    /// Presses `id` at `position`. Returns whether the press hit the host.
    pub fn press(&self, id: TouchId, position: Point) -> bool {
        let event = self.stage.press(id, position);
        let hit = self.host.hit_test(position);
        if hit {
            self.host.begin(event);
        }
        hit
    }

    /// Presses two fresh touches, first then second.
    pub fn press_pair(&self, first: Point, second: Point) -> [TouchId; 2] {
        let pair = [self.allocate_id(), self.allocate_id()];
        self.press(pair[0], first);
        self.press(pair[1], second);
        pair
    }

    pub fn move_to(&self, id: TouchId, position: Point) {
        self.stage.move_to(id, position);
    }

    /// Moves both fingers in one frame: the first silently, the second with a
    /// stage move notification.
    pub fn move_pair(&self, pair: [TouchId; 2], first: Point, second: Point) {
        self.stage.set_position(pair[0], first);
        self.stage.move_to(pair[1], second);
    }

    /// Turns the pair about its midpoint by `degrees`, spread over `steps`
    /// frames of equal size.
    pub fn twist(&self, pair: [TouchId; 2], degrees: f32, steps: u32) {
        let (Some(first), Some(second)) = (
            self.stage.touch_position(pair[0]),
            self.stage.touch_position(pair[1]),
        ) else {
            log::warn!("robot: twist on a released pair {pair:?}");
            return;
        };

        let center = first.midpoint(second);
        let steps = steps.max(1);
        for step in 1..=steps {
            let angle = degrees * step as f32 / steps as f32;
            self.move_pair(
                pair,
                center + (first - center).rotated_degrees(angle),
                center + (second - center).rotated_degrees(angle),
            );
        }
    }

    pub fn release(&self, id: TouchId) {
        self.stage.release(id);
    }

    pub fn release_all(&self) {
        for id in self.stage.pressed() {
            self.stage.release(id);
        }
    }
}

use gesturekit_core::EventContext;
use gesturekit_foundation::{RotationConfig, RotationGesture};
use gesturekit_geometry::{Point, Size, Transform};
use gesturekit_testing::{FakeHost, GestureRobot};
use std::rc::Rc;

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== gesturekit rotation demo ===");
    println!("Two fingers land on a 300x300 host, twist 90 degrees, then lift.");
    println!("Set RUST_LOG=debug to see the recogniser's state transitions.");
    println!();

    let robot = GestureRobot::with_host(
        FakeHost::new()
            .with_transform(Transform::translation(50.0, 50.0))
            .with_size(Size::new(300.0, 300.0)),
    );
    let gesture = RotationGesture::with_config(
        robot.host(),
        robot.stage().clone(),
        RotationConfig::default(),
    );

    let reader = gesture.reader();
    let print: Rc<dyn Fn(&EventContext)> = Rc::new(move |context: &EventContext| {
        let Some(snapshot) = reader.snapshot() else {
            return;
        };
        println!(
            "{:<18} {} rotation={:>6.1} delta={:>5.1}",
            context.event_type.name(),
            context.input_event.touch_id,
            snapshot.rotation,
            snapshot.delta
        );
    });
    gesture.on_begin().add(print.clone());
    gesture.on_action().add(print.clone());
    gesture.on_end().add(print);

    let pair = robot.press_pair(Point::new(260.0, 200.0), Point::new(140.0, 200.0));
    robot.twist(pair, 90.0, 12);
    robot.release(pair[0]);

    log::info!("final rotation {:.1}", gesture.rotation());
    gesture.dispose();
}

// Host-side tests for the gesture-to-control mapping, including the end-to-end
// hand scenarios against the control state and orbit camera.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::{
    Action, Classification, ControlDeltas, Controls, GestureBinding, GestureKind,
    GestureProcessor, HandFrame, Landmark, OrbitCamera, SceneMode, TrackerStatus, MIN_DISTANCE,
};

const EPS: f32 = 1e-6;

fn hand_at(x: f32, y: f32) -> HandFrame {
    HandFrame {
        landmarks: vec![Landmark { x, y, z: 0.0 }; 21],
        gesture: None,
    }
}

fn hand_with(label: &str, score: f32) -> HandFrame {
    HandFrame {
        gesture: Some(Classification {
            kind: GestureKind::from_label(label),
            score,
        }),
        ..hand_at(0.5, 0.5)
    }
}

#[test]
fn labels_round_trip_through_the_catalog() {
    for kind in [
        GestureKind::ClosedFist,
        GestureKind::OpenPalm,
        GestureKind::PointingUp,
        GestureKind::ThumbDown,
        GestureKind::ThumbUp,
        GestureKind::Victory,
        GestureKind::ILoveYou,
    ] {
        assert_eq!(GestureKind::from_label(kind.label()), kind);
    }
    assert_eq!(GestureKind::from_label("None"), GestureKind::Unrecognized);
    assert_eq!(GestureKind::from_label("Wave"), GestureKind::Unrecognized);
    assert_eq!(
        GestureKind::Unrecognized.binding(),
        GestureBinding::Nothing
    );
    assert_eq!(GestureKind::ILoveYou.binding(), GestureBinding::Nothing);
}

#[test]
fn centered_hand_does_not_rotate() {
    let p = GestureProcessor::default();
    let out = p.process(Some(&hand_at(0.5, 0.5)), false);
    assert_eq!(out.deltas, ControlDeltas::ZERO);
    assert!(out.actions.is_empty());
    assert_eq!(out.status, Some(TrackerStatus::Ready));
}

#[test]
fn hand_at_left_edge_rotates_at_full_gain() {
    let p = GestureProcessor::default();
    let out = p.process(Some(&hand_at(0.0, 0.5)), false);
    assert!((out.deltas.rotation_speed - 0.075).abs() < EPS);

    let mut camera = OrbitCamera::default();
    let before = camera.azimuth();
    camera.advance(&out.deltas, SceneMode::Chaos, 1.0 / 60.0);
    assert!((camera.azimuth() - before - 0.075).abs() < 1e-5);
}

#[test]
fn deadzones_resolve_to_exact_zero() {
    let p = GestureProcessor::default();
    // |(0.5 - x) * 0.15| <= 0.01  <=>  |0.5 - x| <= 0.0667
    assert_eq!(p.rotation_speed(0.45), 0.0);
    assert_eq!(p.rotation_speed(0.55), 0.0);
    assert!(p.rotation_speed(0.4) > 0.01);
    assert!(p.rotation_speed(0.6) < -0.01);
    // |(y - 0.5) * 0.8| <= 0.05  <=>  |y - 0.5| <= 0.0625
    assert_eq!(p.tilt_delta(0.55), 0.0);
    assert_eq!(p.tilt_delta(0.45), 0.0);
    assert!(p.tilt_delta(0.6) > 0.05);
    assert!(p.tilt_delta(0.4) < -0.05);
}

#[test]
fn thumb_up_zooms_in_by_one_and_a_half() {
    let p = GestureProcessor::default();
    let out = p.process(Some(&hand_with("Thumb_Up", 0.9)), false);
    assert!((out.deltas.zoom_delta + 1.5).abs() < EPS);

    let mut camera = OrbitCamera::default();
    let before = camera.distance();
    camera.advance(&out.deltas, SceneMode::Chaos, 1.0 / 60.0);
    assert!((camera.distance() - (before - 1.5)).abs() < 1e-4);

    // repeated zoom-in stops at the near clamp
    for _ in 0..100 {
        camera.advance(&out.deltas, SceneMode::Chaos, 1.0 / 60.0);
    }
    assert_eq!(camera.distance(), MIN_DISTANCE);
}

#[test]
fn thumb_down_zooms_out() {
    let p = GestureProcessor::default();
    let out = p.process(Some(&hand_with("Thumb_Down", 0.8)), false);
    assert!((out.deltas.zoom_delta - 1.5).abs() < EPS);
}

#[test]
fn low_confidence_gestures_are_ignored() {
    let p = GestureProcessor::default();
    for label in ["Thumb_Up", "Open_Palm", "Closed_Fist", "Pointing_Up", "Victory"] {
        let out = p.process(Some(&hand_with(label, 0.4)), true);
        assert_eq!(out.deltas.zoom_delta, 0.0, "{label}");
        assert!(out.actions.is_empty(), "{label}");
        assert_eq!(out.status, Some(TrackerStatus::Ready), "{label}");
    }
}

#[test]
fn palm_and_fist_set_the_mode() {
    let p = GestureProcessor::default();
    let palm = p.process(Some(&hand_with("Open_Palm", 0.9)), false);
    assert_eq!(palm.actions.as_slice(), &[Action::SetMode(SceneMode::Chaos)]);
    let fist = p.process(Some(&hand_with("Closed_Fist", 0.9)), false);
    assert_eq!(fist.actions.as_slice(), &[Action::SetMode(SceneMode::Formed)]);
    assert_eq!(fist.deltas.zoom_delta, 0.0);
}

#[test]
fn one_and_two_finger_gestures_focus_and_unfocus() {
    let p = GestureProcessor::default();
    let one = p.process(Some(&hand_with("Pointing_Up", 0.9)), false);
    assert_eq!(one.actions.as_slice(), &[Action::FocusRandom]);
    assert_eq!(one.deltas.zoom_delta, 0.0);
    let two = p.process(Some(&hand_with("Victory", 0.9)), false);
    assert_eq!(two.actions.as_slice(), &[Action::Unfocus]);
    assert_eq!(two.deltas.zoom_delta, 0.0);
}

#[test]
fn debug_mode_reports_the_detected_label() {
    let p = GestureProcessor::default();
    let quiet = p.process(Some(&hand_with("Victory", 0.9)), false);
    assert_eq!(quiet.status, Some(TrackerStatus::Ready));
    let loud = p.process(Some(&hand_with("Victory", 0.9)), true);
    assert_eq!(loud.status, Some(TrackerStatus::Detected("Victory")));
    assert_eq!(loud.status.unwrap().to_string(), "DETECTED: Victory");
}

#[test]
fn no_hand_for_five_cycles_zeroes_every_delta() {
    let p = GestureProcessor::default();
    let mut controls = Controls::new(10);
    let mut rng = StdRng::seed_from_u64(3);

    // a moving hand first, so there is something to clear
    let moving = HandFrame {
        gesture: Some(Classification {
            kind: GestureKind::ThumbDown,
            score: 0.95,
        }),
        ..hand_at(0.1, 0.9)
    };
    controls.apply_gesture(p.process(Some(&moving), false), 0.0, &mut rng);
    assert_ne!(controls.deltas(), ControlDeltas::ZERO);

    for cycle in 1..=5 {
        controls.apply_gesture(p.process(None, false), cycle as f64 * 33.0, &mut rng);
        assert_eq!(controls.deltas(), ControlDeltas::ZERO);
        assert_eq!(*controls.status(), TrackerStatus::NoHand);
    }
    assert_eq!(controls.status().to_string(), "AI READY: NO HAND");
}

#[test]
fn returning_hand_replaces_the_no_hand_status() {
    let p = GestureProcessor::default();
    let mut controls = Controls::new(10);
    let mut rng = StdRng::seed_from_u64(5);

    controls.apply_gesture(p.process(None, false), 0.0, &mut rng);
    assert_eq!(*controls.status(), TrackerStatus::NoHand);

    let hand = hand_at(0.0, 0.5);
    for cycle in 1..=5 {
        controls.apply_gesture(p.process(Some(&hand), false), cycle as f64 * 33.0, &mut rng);
        assert!((controls.deltas().rotation_speed - 0.075).abs() < EPS);
        assert_eq!(*controls.status(), TrackerStatus::Ready);
    }
    assert_eq!(controls.status().to_string(), "AI READY: SHOW HAND");

    // and back again once the hand leaves
    controls.apply_gesture(p.process(None, false), 500.0, &mut rng);
    assert_eq!(*controls.status(), TrackerStatus::NoHand);
}

#[test]
fn empty_landmark_list_counts_as_no_hand() {
    let p = GestureProcessor::default();
    let out = p.process(Some(&HandFrame::default()), true);
    assert_eq!(out.deltas, ControlDeltas::ZERO);
    assert_eq!(out.status, Some(TrackerStatus::NoHand));
}

#[test]
fn held_gestures_are_debounced_through_controls() {
    let p = GestureProcessor::default();
    let mut controls = Controls::new(300);
    let mut rng = StdRng::seed_from_u64(9);
    let point = hand_with("Pointing_Up", 0.9);

    // a held one-finger pose arrives every ~33 ms for just under a second
    controls.apply_gesture(p.process(Some(&point), false), 0.0, &mut rng);
    let first = controls.focus();
    assert!(first.is_some());
    let mut changes = 0;
    let mut last = first;
    for i in 1..30 {
        controls.apply_gesture(p.process(Some(&point), false), i as f64 * 33.0, &mut rng);
        if controls.focus() != last {
            changes += 1;
            last = controls.focus();
        }
    }
    assert_eq!(changes, 0);

    let fist = hand_with("Closed_Fist", 0.9);
    controls.apply_gesture(p.process(Some(&fist), false), 2_000.0, &mut rng);
    controls.apply_gesture(p.process(Some(&fist), false), 2_010.0, &mut rng);
    assert_eq!(controls.mode(), SceneMode::Formed);
}

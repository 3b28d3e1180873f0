//! Unit tests for the signature pad state machine.

use super::*;

fn pad() -> SignaturePad {
    SignaturePad::new(Point::new(0.0, 0.0), 120, 60)
}

#[test]
fn test_initial_state_is_idle_without_ink() {
    let pad = pad();
    assert_eq!(pad.state(), PadState::Idle);
    assert!(!pad.has_ink());
    assert!(!pad.can_confirm());
}

#[test]
fn test_confirm_before_begin_yields_nothing() {
    let pad = pad();
    assert!(pad.confirm().unwrap().is_none());
}

#[test]
fn test_begin_marks_ink_immediately() {
    let mut pad = pad();
    pad.begin(Point::new(10.0, 10.0));
    assert_eq!(pad.state(), PadState::Drawing);
    // Before any movement
    assert!(pad.has_ink());
    assert_eq!(pad.stroke_count(), 1);
}

#[test]
fn test_end_transitions_to_inked() {
    let mut pad = pad();
    pad.begin(Point::new(10.0, 10.0));
    pad.end();
    assert_eq!(pad.state(), PadState::Inked);
    assert!(pad.can_confirm());
}

#[test]
fn test_end_without_begin_stays_idle() {
    let mut pad = pad();
    pad.end();
    assert_eq!(pad.state(), PadState::Idle);
    assert!(!pad.has_ink());
}

#[test]
fn test_extend_outside_drawing_is_a_noop() {
    let mut pad = pad();
    pad.extend(Point::new(30.0, 30.0));
    assert_eq!(pad.state(), PadState::Idle);
    assert!(!pad.has_ink());
    assert!(!pad.canvas().has_visible_ink());
}

#[test]
fn test_non_finite_points_are_ignored() {
    let mut pad = pad();
    pad.begin(Point::new(f32::NAN, 10.0));
    assert_eq!(pad.state(), PadState::Idle);
    assert!(!pad.has_ink());

    pad.begin(Point::new(10.0, 10.0));
    pad.extend(Point::new(f32::INFINITY, 20.0));
    assert_eq!(pad.stroke_count(), 1);
}

#[test]
fn test_clear_fully_resets_state() {
    let mut pad = pad();
    pad.begin(Point::new(10.0, 10.0));
    pad.extend(Point::new(40.0, 20.0));
    pad.end();
    pad.clear();

    assert_eq!(pad.state(), PadState::Idle);
    assert!(!pad.has_ink());
    assert_eq!(pad.stroke_count(), 0);
    assert!(!pad.canvas().has_visible_ink());
    // The capture invariant holds after the reset
    assert!(pad.confirm().unwrap().is_none());
}

#[test]
fn test_full_session_yields_one_capture_with_ink() {
    let mut pad = pad();
    pad.begin(Point::new(10.0, 10.0));
    pad.extend(Point::new(40.0, 20.0));
    pad.extend(Point::new(80.0, 40.0));
    pad.end();

    let capture = pad.confirm().unwrap().expect("capture expected");
    assert!(capture.has_ink);
    assert_eq!(capture.width, 120 * BACKING_SCALE);
    assert_eq!(capture.height, 60 * BACKING_SCALE);

    // The snapshot raster reflects the drawn segments
    let img = image::load_from_memory(&capture.png).unwrap().to_rgba8();
    let inked = img
        .pixels()
        .filter(|p| p.0 != [255, 255, 255, 255])
        .count();
    assert!(inked > 0, "snapshot contains no ink pixels");
}

#[test]
fn test_origin_offset_maps_viewport_points_onto_surface() {
    // Surface origin at (100, 50) in viewport space
    let mut pad = SignaturePad::new(Point::new(100.0, 50.0), 120, 60);
    pad.begin(Point::new(110.0, 60.0));
    pad.extend(Point::new(150.0, 80.0));
    pad.end();
    assert!(pad.canvas().has_visible_ink());
}

#[test]
fn test_event_machine_matches_direct_calls() {
    let mut pad = pad();
    assert!(pad.handle(PadEvent::Confirm).unwrap().is_none());

    pad.handle(PadEvent::PointerDown(Point::new(10.0, 10.0))).unwrap();
    pad.handle(PadEvent::PointerMove(Point::new(30.0, 30.0))).unwrap();
    pad.handle(PadEvent::PointerUp).unwrap();

    match pad.handle(PadEvent::Confirm).unwrap() {
        Some(PadOutcome::Confirmed(capture)) => assert!(capture.has_ink),
        other => panic!("expected a confirmed capture, got {:?}", other),
    }
}

#[test]
fn test_cancel_discards_the_session() {
    let mut pad = pad();
    pad.begin(Point::new(10.0, 10.0));
    pad.end();

    match pad.handle(PadEvent::Cancel).unwrap() {
        Some(PadOutcome::Cancelled) => {}
        other => panic!("expected a cancelled outcome, got {:?}", other),
    }
    assert!(!pad.has_ink());
    assert!(!pad.canvas().has_visible_ink());
}

#[test]
fn test_data_uri_is_embeddable() {
    let mut pad = pad();
    pad.begin(Point::new(10.0, 10.0));
    pad.end();

    let capture = pad.confirm().unwrap().unwrap();
    let uri = capture.data_uri();
    assert!(uri.starts_with("data:image/png;base64,"));
    assert!(uri.len() > "data:image/png;base64,".len());
}

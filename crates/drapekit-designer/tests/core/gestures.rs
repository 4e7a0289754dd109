use drapekit_core::{ObjectId, PointerId, ScreenPoint, Transform};
use drapekit_designer::viewport::Viewport;
use drapekit_designer::{Canvas, Garment, GestureKind, TargetKind};

const EPS: f64 = 1e-9;

fn jacket_canvas() -> Canvas {
    let mut canvas = Canvas::with_viewport(Viewport::with_size(400.0, 600.0));
    canvas.add_garment(Garment::new(ObjectId(1), "jacket", 150.0, 150.0));
    canvas
}

fn transform_of(canvas: &Canvas, id: u64) -> Transform {
    canvas.garment(ObjectId(id)).unwrap().transform
}

#[test]
fn test_single_pointer_drag() {
    let mut canvas = jacket_canvas();

    assert!(canvas.pointer_down(
        PointerId(1),
        ScreenPoint::new(200.0, 200.0),
        TargetKind::Body,
        ObjectId(1)
    ));
    assert_eq!(canvas.active_gesture().unwrap().kind(), GestureKind::Drag);
    assert_eq!(canvas.selected_id(), Some(ObjectId(1)));

    let emitted = canvas
        .pointer_move(PointerId(1), ScreenPoint::new(220.0, 230.0))
        .unwrap();
    assert_eq!(emitted, Transform::new(170.0, 180.0, 1.0, 0.0));
    assert_eq!(transform_of(&canvas, 1), emitted);

    canvas.pointer_up(PointerId(1));
    assert!(canvas.active_gesture().is_none());
    assert!(canvas.engine().pointers().is_empty());
    assert_eq!(canvas.selected_id(), Some(ObjectId(1)));
}

#[test]
fn test_handle_rotates_quarter_turn() {
    let mut canvas = Canvas::with_viewport(Viewport::new(ScreenPoint::new(0.0, 0.0), 400.0, 600.0));
    canvas.add_garment(Garment::new(ObjectId(1), "jacket", 100.0, 100.0));

    canvas.pointer_down(
        PointerId(1),
        ScreenPoint::new(150.0, 100.0),
        TargetKind::Handle,
        ObjectId(1),
    );
    assert_eq!(canvas.active_gesture().unwrap().kind(), GestureKind::HandleTransform);

    let t = canvas
        .pointer_move(PointerId(1), ScreenPoint::new(100.0, 150.0))
        .unwrap();
    assert!((t.scale - 1.0).abs() < EPS);
    assert!((t.rotation - 90.0).abs() < EPS);
    assert_eq!((t.x, t.y), (100.0, 100.0));
}

#[test]
fn test_handle_pivot_follows_container_origin() {
    let mut canvas = Canvas::with_viewport(Viewport::new(ScreenPoint::new(50.0, 20.0), 400.0, 600.0));
    canvas.add_garment(Garment::new(ObjectId(1), "jacket", 100.0, 100.0));

    // pivot on screen is (150, 120)
    canvas.pointer_down(
        PointerId(1),
        ScreenPoint::new(200.0, 120.0),
        TargetKind::Handle,
        ObjectId(1),
    );
    let t = canvas
        .pointer_move(PointerId(1), ScreenPoint::new(250.0, 120.0))
        .unwrap();
    assert!((t.scale - 2.0).abs() < EPS);
    assert!(t.rotation.abs() < EPS);
}

#[test]
fn test_pinch_rotate_scale() {
    let mut canvas = jacket_canvas();

    canvas.pointer_down(
        PointerId(1),
        ScreenPoint::new(100.0, 100.0),
        TargetKind::Body,
        ObjectId(1),
    );
    canvas.pointer_down(
        PointerId(2),
        ScreenPoint::new(200.0, 100.0),
        TargetKind::Body,
        ObjectId(1),
    );
    assert_eq!(canvas.active_gesture().unwrap().kind(), GestureKind::Pinch);

    canvas.pointer_move(PointerId(1), ScreenPoint::new(90.0, 90.0));
    let t = canvas
        .pointer_move(PointerId(2), ScreenPoint::new(210.0, 110.0))
        .unwrap();

    let expected_distance = (120.0f64 * 120.0 + 20.0 * 20.0).sqrt();
    assert!((t.scale - expected_distance / 100.0).abs() < EPS);
    assert!((t.scale - 1.21655).abs() < 1e-4);
    let expected_angle = (20.0f64 / 120.0).atan().to_degrees();
    assert!((t.rotation - expected_angle).abs() < EPS);
    assert!((t.rotation - 9.4623).abs() < 1e-3);
    assert_eq!((t.x, t.y), (150.0, 150.0));
}

#[test]
fn test_lifting_one_pinch_pointer_ends_gesture() {
    let mut canvas = jacket_canvas();
    canvas.pointer_down(PointerId(1), ScreenPoint::new(100.0, 100.0), TargetKind::Body, ObjectId(1));
    canvas.pointer_down(PointerId(2), ScreenPoint::new(200.0, 100.0), TargetKind::Body, ObjectId(1));

    canvas.pointer_up(PointerId(2));
    assert!(canvas.active_gesture().is_none());
    assert_eq!(canvas.engine().pointers().len(), 1);

    let before = transform_of(&canvas, 1);
    assert!(canvas
        .pointer_move(PointerId(1), ScreenPoint::new(0.0, 0.0))
        .is_none());
    assert_eq!(transform_of(&canvas, 1), before);
}

#[test]
fn test_cancel_behaves_like_up() {
    let mut canvas = jacket_canvas();
    canvas.pointer_down(PointerId(7), ScreenPoint::new(10.0, 10.0), TargetKind::Body, ObjectId(1));
    canvas.pointer_cancel(PointerId(7));
    assert!(canvas.active_gesture().is_none());
    assert!(canvas.engine().pointers().is_empty());
}

#[test]
fn test_up_for_unknown_pointer_is_ignored() {
    let mut canvas = jacket_canvas();
    canvas.pointer_down(PointerId(1), ScreenPoint::new(10.0, 10.0), TargetKind::Body, ObjectId(1));
    canvas.pointer_up(PointerId(99));
    assert!(canvas.active_gesture().is_some());
}

#[test]
fn test_move_from_untracked_pointer_is_ignored() {
    let mut canvas = jacket_canvas();
    canvas.pointer_down(PointerId(1), ScreenPoint::new(10.0, 10.0), TargetKind::Body, ObjectId(1));
    assert!(canvas
        .pointer_move(PointerId(2), ScreenPoint::new(500.0, 500.0))
        .is_none());
    assert_eq!(transform_of(&canvas, 1), Transform::at(150.0, 150.0));
    assert_eq!(canvas.engine().pointers().len(), 1);
}

#[test]
fn test_down_on_missing_object() {
    let mut canvas = jacket_canvas();
    assert!(!canvas.pointer_down(
        PointerId(1),
        ScreenPoint::new(0.0, 0.0),
        TargetKind::Body,
        ObjectId(42)
    ));
    assert!(canvas.active_gesture().is_none());
    assert!(canvas.engine().pointers().is_empty());
    assert_eq!(canvas.selected_id(), None);
}

#[test]
fn test_new_gesture_replaces_old() {
    let mut canvas = jacket_canvas();
    canvas.add_garment(Garment::new(ObjectId(2), "hat", 300.0, 50.0));

    canvas.pointer_down(PointerId(1), ScreenPoint::new(150.0, 150.0), TargetKind::Body, ObjectId(1));
    canvas.pointer_down(PointerId(2), ScreenPoint::new(300.0, 50.0), TargetKind::Handle, ObjectId(2));

    let active = canvas.active_gesture().unwrap();
    assert_eq!(active.target_id(), ObjectId(2));
    assert_eq!(active.kind(), GestureKind::HandleTransform);
    assert_eq!(canvas.selected_id(), Some(ObjectId(2)));
}

#[test]
fn test_coincident_pinch_start_does_not_blow_up() {
    let mut canvas = jacket_canvas();
    canvas.pointer_down(PointerId(1), ScreenPoint::new(100.0, 100.0), TargetKind::Body, ObjectId(1));
    canvas.pointer_down(PointerId(2), ScreenPoint::new(100.0, 100.0), TargetKind::Body, ObjectId(1));

    let t = canvas
        .pointer_move(PointerId(2), ScreenPoint::new(103.0, 104.0))
        .unwrap();
    assert!(t.scale.is_finite());
    assert!(t.rotation.is_finite());
    assert!((t.scale - 5.0).abs() < EPS);
}

#[test]
fn test_background_down_clears_selection_only() {
    let mut canvas = jacket_canvas();
    canvas.pointer_down(PointerId(1), ScreenPoint::new(150.0, 150.0), TargetKind::Body, ObjectId(1));
    canvas.background_down();

    assert_eq!(canvas.selected_id(), None);
    assert!(canvas.active_gesture().is_some());
}

#[test]
fn test_removing_target_ends_gesture() {
    let mut canvas = jacket_canvas();
    canvas.pointer_down(PointerId(1), ScreenPoint::new(150.0, 150.0), TargetKind::Body, ObjectId(1));
    assert!(canvas.remove_garment(ObjectId(1)).is_some());

    assert!(canvas.active_gesture().is_none());
    assert_eq!(canvas.selected_id(), None);
    assert!(canvas
        .pointer_move(PointerId(1), ScreenPoint::new(0.0, 0.0))
        .is_none());
}

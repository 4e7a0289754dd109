use drapekit_core::{ObjectId, PointerId, ScreenPoint, Transform, MIN_SCALE};
use drapekit_designer::{Canvas, Garment, GestureConfig, TargetKind};
use drapekit_designer::viewport::Viewport;
use proptest::prelude::*;

fn canvas_with(transform: Transform, config: GestureConfig) -> Canvas {
    let mut garment = Garment::new(ObjectId(1), "item", transform.x, transform.y);
    garment.transform = transform;
    let mut canvas = Canvas::with_config(Viewport::default(), config);
    canvas.add_garment(garment);
    canvas
}

fn coord() -> impl Strategy<Value = f64> {
    -2000.0f64..2000.0
}

fn transform() -> impl Strategy<Value = Transform> {
    (coord(), coord(), 0.1f64..10.0, -720.0f64..720.0)
        .prop_map(|(x, y, scale, rotation)| Transform::new(x, y, scale, rotation))
}

proptest! {
    #[test]
    fn drag_only_translates(
        origin in transform(),
        (sx, sy) in (coord(), coord()),
        (cx, cy) in (coord(), coord()),
    ) {
        let mut canvas = canvas_with(origin, GestureConfig::default());
        canvas.pointer_down(PointerId(1), ScreenPoint::new(sx, sy), TargetKind::Body, ObjectId(1));
        let t = canvas.pointer_move(PointerId(1), ScreenPoint::new(cx, cy)).unwrap();

        prop_assert_eq!(t.scale, origin.scale);
        prop_assert_eq!(t.rotation, origin.rotation);
        prop_assert!((t.x - (origin.x + cx - sx)).abs() < 1e-9);
        prop_assert!((t.y - (origin.y + cy - sy)).abs() < 1e-9);
    }

    #[test]
    fn scale_never_below_floor(
        origin in transform(),
        floor in MIN_SCALE..2.0,
        (ax, ay, bx, by) in (coord(), coord(), coord(), coord()),
        (mx, my) in (coord(), coord()),
    ) {
        let config = GestureConfig::new(floor).unwrap();
        let mut canvas = canvas_with(origin, config);
        canvas.pointer_down(PointerId(1), ScreenPoint::new(ax, ay), TargetKind::Body, ObjectId(1));
        canvas.pointer_down(PointerId(2), ScreenPoint::new(bx, by), TargetKind::Body, ObjectId(1));
        let t = canvas.pointer_move(PointerId(2), ScreenPoint::new(mx, my)).unwrap();

        prop_assert!(t.scale >= floor);
        prop_assert!(t.rotation.is_finite());
    }

    #[test]
    fn repeated_move_is_idempotent(
        origin in transform(),
        (hx, hy) in (coord(), coord()),
        (mx, my) in (coord(), coord()),
    ) {
        let mut canvas = canvas_with(origin, GestureConfig::default());
        canvas.pointer_down(PointerId(1), ScreenPoint::new(hx, hy), TargetKind::Handle, ObjectId(1));
        let first = canvas.pointer_move(PointerId(1), ScreenPoint::new(mx, my)).unwrap();
        let second = canvas.pointer_move(PointerId(1), ScreenPoint::new(mx, my)).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn pinch_ignores_common_translation(
        origin in transform(),
        (ax, ay) in (coord(), coord()),
        (bx, by) in (coord(), coord()),
        (dx, dy) in (coord(), coord()),
    ) {
        prop_assume!(((ax - bx).powi(2) + (ay - by).powi(2)).sqrt() > 1.0);

        let mut canvas = canvas_with(origin, GestureConfig::default());
        canvas.pointer_down(PointerId(1), ScreenPoint::new(ax, ay), TargetKind::Body, ObjectId(1));
        canvas.pointer_down(PointerId(2), ScreenPoint::new(bx, by), TargetKind::Body, ObjectId(1));
        canvas.pointer_move(PointerId(1), ScreenPoint::new(ax + dx, ay + dy));
        let t = canvas.pointer_move(PointerId(2), ScreenPoint::new(bx + dx, by + dy)).unwrap();

        prop_assert!((t.scale - origin.scale).abs() < 1e-6 * origin.scale.max(1.0));
        prop_assert!((t.rotation - origin.rotation).abs() < 1e-6);
        prop_assert_eq!((t.x, t.y), (origin.x, origin.y));
    }

    #[test]
    fn handle_rotation_is_continuous(
        radius in 20.0f64..500.0,
        start_deg in 90.0f64..170.0,
        steps in 10usize..200,
    ) {
        // pivot sits at screen (400, 300); the orbit crosses the negative X axis
        let center = Transform::at(400.0, 300.0);
        let mut canvas = canvas_with(center, GestureConfig::default());
        let at = |deg: f64| {
            let rad = deg.to_radians();
            ScreenPoint::new(400.0 + radius * rad.cos(), 300.0 + radius * rad.sin())
        };

        canvas.pointer_down(PointerId(1), at(start_deg), TargetKind::Handle, ObjectId(1));
        let step = 180.0 / steps as f64;
        let mut previous = 0.0;
        for i in 1..=steps {
            let t = canvas
                .pointer_move(PointerId(1), at(start_deg + step * i as f64))
                .unwrap();
            prop_assert!((t.rotation - previous - step).abs() < 1e-6);
            previous = t.rotation;
        }
        prop_assert!((previous - 180.0).abs() < 1e-6);
    }
}

proptest! {
    #[test]
    fn pinch_ignores_pointer_order(
        origin in transform(),
        (ax, ay, bx, by) in (coord(), coord(), coord(), coord()),
        (max, may, mbx, mby) in (coord(), coord(), coord(), coord()),
    ) {
        prop_assume!(((ax - bx).powi(2) + (ay - by).powi(2)).sqrt() > 1.0);
        prop_assume!(((max - mbx).powi(2) + (may - mby).powi(2)).sqrt() > 1.0);

        let (a, b) = (PointerId(1), PointerId(2));
        let run = |down_first: PointerId, down_second: PointerId| {
            let mut canvas = canvas_with(origin, GestureConfig::default());
            let start = |id: PointerId| if id == a { (ax, ay) } else { (bx, by) };
            for id in [down_first, down_second] {
                let (x, y) = start(id);
                canvas.pointer_down(id, ScreenPoint::new(x, y), TargetKind::Body, ObjectId(1));
            }
            canvas.pointer_move(a, ScreenPoint::new(max, may));
            canvas.pointer_move(b, ScreenPoint::new(mbx, mby)).unwrap()
        };

        let forward = run(a, b);
        let reversed = run(b, a);

        prop_assert!((forward.scale - reversed.scale).abs() < 1e-9 * forward.scale.max(1.0));
        let turn = (forward.rotation - reversed.rotation).rem_euclid(360.0);
        prop_assert!(turn < 1e-6 || 360.0 - turn < 1e-6);
    }
}

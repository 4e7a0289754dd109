use std::sync::{Arc, Mutex};
use std::thread;

use drapekit_core::{
    thread_safe, AppEvent, CanvasEvent, EventBus, EventCategory, EventFilter, LayerEvent,
    ObjectId, PointerId, ScreenPoint,
};
use drapekit_designer::{Canvas, Garment, PromptBuilder, SharedCanvas, TargetKind, WearMode};

fn recording_bus() -> (Arc<EventBus>, Arc<Mutex<Vec<AppEvent>>>) {
    let bus = Arc::new(EventBus::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    bus.subscribe(EventFilter::All, move |event| {
        sink.lock().unwrap().push(event.clone());
    });
    (bus, seen)
}

#[test]
fn test_add_generates_ids_on_top() {
    let mut canvas = Canvas::new();
    let first = canvas.add("shirt", 10.0, 10.0);
    let second = canvas.add("scarf", 20.0, 20.0);

    assert_ne!(first, second);
    assert_eq!(canvas.garment_count(), 2);
    assert!(canvas.garment(second).unwrap().z_index > canvas.garment(first).unwrap().z_index);
}

#[test]
fn test_gesture_publishes_events() {
    let (bus, seen) = recording_bus();
    let mut canvas = Canvas::new();
    canvas.attach_event_bus(Arc::clone(&bus));
    canvas.add_garment(Garment::new(ObjectId(1), "jacket", 150.0, 150.0));

    canvas.pointer_down(PointerId(1), ScreenPoint::new(200.0, 200.0), TargetKind::Body, ObjectId(1));
    canvas.pointer_move(PointerId(1), ScreenPoint::new(210.0, 200.0));
    canvas.pointer_up(PointerId(1));

    let events = seen.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            AppEvent::Canvas(CanvasEvent::GarmentAdded { id: ObjectId(1) }),
            AppEvent::Canvas(CanvasEvent::SelectionChanged { id: Some(ObjectId(1)) }),
            AppEvent::Canvas(CanvasEvent::GestureStarted {
                id: ObjectId(1),
                kind: "drag".to_string(),
            }),
            AppEvent::Canvas(CanvasEvent::TransformChanged {
                id: ObjectId(1),
                transform: drapekit_core::Transform::at(160.0, 150.0),
            }),
            AppEvent::Canvas(CanvasEvent::GestureEnded { id: ObjectId(1) }),
        ]
    );
}

#[test]
fn test_layer_events_are_filterable() {
    let bus = Arc::new(EventBus::new());
    let layers = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&layers);
    bus.subscribe(EventFilter::Categories(vec![EventCategory::Layers]), move |event| {
        sink.lock().unwrap().push(event.clone());
    });

    let mut canvas = Canvas::new();
    canvas.attach_event_bus(bus);
    let a = canvas.add("a", 0.0, 0.0);
    let b = canvas.add("b", 0.0, 0.0);
    canvas.select(a);
    canvas.bring_to_front();

    let layers = layers.lock().unwrap();
    assert_eq!(
        *layers,
        vec![AppEvent::Layers(LayerEvent::Reordered { order: vec![b, a] })]
    );
}

#[test]
fn test_select_unknown_garment_is_ignored() {
    let mut canvas = Canvas::new();
    canvas.select(ObjectId(9));
    assert_eq!(canvas.selected_id(), None);
}

#[test]
fn test_clear_empties_canvas() {
    let mut canvas = Canvas::new();
    let id = canvas.add("hat", 1.0, 1.0);
    canvas.pointer_down(PointerId(3), ScreenPoint::new(1.0, 1.0), TargetKind::Body, id);

    canvas.clear();
    assert_eq!(canvas.garment_count(), 0);
    assert!(canvas.active_gesture().is_none());
    assert!(canvas.engine().pointers().is_empty());
    assert_eq!(canvas.selected_id(), None);
}

#[test]
fn test_prompt_from_canvas() {
    let mut canvas = Canvas::new();
    canvas.add_garment(
        Garment::new(ObjectId(1), "denim jacket", 400.0, 150.0).with_wear_mode(WearMode::Layered),
    );

    let prompt = PromptBuilder::new()
        .with_preamble("Dress the person.")
        .build(&canvas.layout().unwrap())
        .unwrap();
    assert_eq!(
        prompt,
        "Dress the person.\n\n1. denim jacket: layered over the current clothing, \
centered at 50% from left and 25% from top, scaled 1.00x, upright."
    );
}

#[test]
fn test_prompt_requires_garments() {
    let canvas = Canvas::new();
    assert!(PromptBuilder::new().build(&canvas.layout().unwrap()).is_err());
}

#[test]
fn test_shared_canvas_across_threads() {
    let shared: SharedCanvas = thread_safe(Canvas::new());
    let id = shared.lock().add("coat", 0.0, 0.0);

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let canvas = Arc::clone(&shared);
            thread::spawn(move || {
                let pointer = PointerId(n);
                let mut canvas = canvas.lock();
                canvas.pointer_down(pointer, ScreenPoint::new(0.0, 0.0), TargetKind::Body, id);
                canvas.pointer_move(pointer, ScreenPoint::new(1.0, 0.0));
                canvas.pointer_up(pointer);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let canvas = shared.lock();
    assert_eq!(canvas.garment(id).unwrap().transform.x, 4.0);
    assert!(canvas.engine().pointers().is_empty());
}

#[test]
fn test_broadcast_observer_reads_shared_canvas() {
    let bus = Arc::new(EventBus::new());
    let shared: SharedCanvas = thread_safe(Canvas::new());
    shared.lock().attach_event_bus(Arc::clone(&bus));
    let id = shared.lock().add("coat", 0.0, 0.0);

    let mut receiver = bus.receiver();
    let observer = {
        let canvas = Arc::clone(&shared);
        thread::spawn(move || loop {
            match receiver.blocking_recv() {
                Ok(AppEvent::Canvas(CanvasEvent::TransformChanged { id, .. })) => {
                    return canvas.lock().garment(id).unwrap().transform.x;
                }
                Ok(_) => continue,
                Err(err) => panic!("bus closed: {err}"),
            }
        })
    };

    {
        let mut canvas = shared.lock();
        canvas.pointer_down(PointerId(1), ScreenPoint::new(0.0, 0.0), TargetKind::Body, id);
        canvas.pointer_move(PointerId(1), ScreenPoint::new(5.0, 0.0));
        canvas.pointer_up(PointerId(1));
    }

    assert_eq!(observer.join().unwrap(), 5.0);
}

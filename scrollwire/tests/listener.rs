use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use scrolldom::{Element, OffsetBox, RawEvent};
use scrollwire::attach_selector;
use scrollwire::debounce::SCROLL_END_DELAY;
use scrollwire::events::{Callbacks, ScrollbarEvent};
use scrollwire::listener::ScrollListener;

type EventLog = Rc<RefCell<Vec<ScrollbarEvent>>>;

fn pane() -> Element {
    Element::new("pane")
        .with_rect(OffsetBox::new(100.0, 0.0, 20.0, 400.0))
        .scrollable(true)
}

fn recording(log: &EventLog) -> Callbacks {
    let mut callbacks = Callbacks::new();
    for event in ScrollbarEvent::ALL {
        let log = Rc::clone(log);
        callbacks = callbacks.on(event, move || log.borrow_mut().push(event));
    }
    callbacks
}

fn listener_with_log() -> (ScrollListener, EventLog) {
    let element = pane();
    let mut listener = ScrollListener::attach(&element);
    let log: EventLog = Rc::default();
    listener.listen(recording(&log));
    (listener, log)
}

fn mouse_down(screen_x: f64, client_y: f64, target: &str) -> RawEvent {
    RawEvent::MouseDown {
        screen_x,
        client_y,
        target: Some(target.to_string()),
    }
}

#[test]
fn test_thumb_click_sequence() {
    let (mut listener, log) = listener_with_log();
    let t0 = Instant::now();

    listener.on_event(&mouse_down(115.0, 5.0, "pane"), t0);
    listener.on_event(&RawEvent::Scroll, t0);
    listener.poll(t0 + SCROLL_END_DELAY);

    assert_eq!(
        *log.borrow(),
        vec![
            ScrollbarEvent::ScrollStart,
            ScrollbarEvent::ThumbClick,
            ScrollbarEvent::TopThumbClick,
            ScrollbarEvent::ScrollEnd,
        ]
    );
}

#[test]
fn test_bottom_thumb_click_on_mouse_up() {
    let (mut listener, log) = listener_with_log();
    let t0 = Instant::now();

    listener.on_event(&mouse_down(115.0, 395.0, "pane"), t0);
    listener.on_event(&RawEvent::MouseUp, t0);

    assert_eq!(
        *log.borrow(),
        vec![ScrollbarEvent::ThumbClick, ScrollbarEvent::BottomThumbClick]
    );
}

#[test]
fn test_track_press_emits_track_only() {
    let (mut listener, log) = listener_with_log();
    let t0 = Instant::now();

    listener.on_event(&mouse_down(115.0, 200.0, "pane"), t0);
    listener.on_event(&RawEvent::MouseUp, t0);

    assert_eq!(*log.borrow(), vec![ScrollbarEvent::Track]);
}

#[test]
fn test_press_on_descendant_is_ignored() {
    let (mut listener, log) = listener_with_log();
    let t0 = Instant::now();

    listener.on_event(&mouse_down(115.0, 5.0, "child"), t0);
    listener.on_event(&RawEvent::MouseUp, t0);

    assert!(log.borrow().is_empty());
}

#[test]
fn test_press_without_target_is_ignored() {
    let (mut listener, log) = listener_with_log();
    let t0 = Instant::now();

    listener.on_event(
        &RawEvent::MouseDown {
            screen_x: 115.0,
            client_y: 5.0,
            target: None,
        },
        t0,
    );
    listener.on_event(&RawEvent::MouseUp, t0);

    assert!(log.borrow().is_empty());
}

#[test]
fn test_mouse_up_without_capture_is_silent() {
    let (mut listener, log) = listener_with_log();

    listener.on_event(&RawEvent::MouseUp, Instant::now());

    assert!(log.borrow().is_empty());
}

#[test]
fn test_wheel_emits_mouse_wheel_immediately() {
    let (mut listener, log) = listener_with_log();

    listener.on_event(&RawEvent::Wheel, Instant::now());

    assert_eq!(*log.borrow(), vec![ScrollbarEvent::MouseWheel]);
}

#[test]
fn test_wheel_driven_scroll_suppresses_classification() {
    let (mut listener, log) = listener_with_log();
    let t0 = Instant::now();

    // Even with a captured press, a wheel-driven cycle stays silent:
    // no ScrollStart, no thumb or track classification.
    listener.on_event(&mouse_down(115.0, 5.0, "pane"), t0);
    listener.on_event(&RawEvent::Wheel, t0);
    listener.on_event(&RawEvent::Scroll, t0);
    listener.poll(t0 + SCROLL_END_DELAY);

    assert_eq!(
        *log.borrow(),
        vec![ScrollbarEvent::MouseWheel, ScrollbarEvent::ScrollEnd]
    );
}

#[test]
fn test_debounce_coalesces_ticks() {
    let (mut listener, log) = listener_with_log();
    let t0 = Instant::now();
    let gap = Duration::from_millis(50);

    for i in 0..5u32 {
        let now = t0 + gap * i;
        listener.poll(now);
        listener.on_event(&RawEvent::Scroll, now);
    }
    let last_tick = t0 + gap * 4;
    listener.poll(last_tick + SCROLL_END_DELAY);

    assert_eq!(
        *log.borrow(),
        vec![ScrollbarEvent::ScrollStart, ScrollbarEvent::ScrollEnd]
    );
}

#[test]
fn test_scroll_end_fires_after_quiet_period() {
    let (mut listener, log) = listener_with_log();
    let t0 = Instant::now();

    listener.on_event(&RawEvent::Scroll, t0);
    listener.poll(t0 + SCROLL_END_DELAY - Duration::from_millis(1));
    assert_eq!(*log.borrow(), vec![ScrollbarEvent::ScrollStart]);

    listener.poll(t0 + SCROLL_END_DELAY);
    assert_eq!(
        *log.borrow(),
        vec![ScrollbarEvent::ScrollStart, ScrollbarEvent::ScrollEnd]
    );

    // The deadline is single-shot.
    listener.poll(t0 + SCROLL_END_DELAY * 2);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn test_tick_reschedules_pending_deadline() {
    let (mut listener, _log) = listener_with_log();
    let t0 = Instant::now();

    listener.on_event(&RawEvent::Scroll, t0);
    let first = listener.next_deadline().unwrap();
    listener.on_event(&RawEvent::Scroll, t0 + Duration::from_millis(100));
    let second = listener.next_deadline().unwrap();

    assert_eq!(first, t0 + SCROLL_END_DELAY);
    assert_eq!(second, t0 + Duration::from_millis(100) + SCROLL_END_DELAY);
}

#[test]
fn test_new_cycle_emits_start_again() {
    let (mut listener, log) = listener_with_log();
    let t0 = Instant::now();

    listener.on_event(&RawEvent::Scroll, t0);
    listener.poll(t0 + SCROLL_END_DELAY);

    let t1 = t0 + Duration::from_secs(1);
    listener.on_event(&RawEvent::Scroll, t1);
    listener.poll(t1 + SCROLL_END_DELAY);

    assert_eq!(
        *log.borrow(),
        vec![
            ScrollbarEvent::ScrollStart,
            ScrollbarEvent::ScrollEnd,
            ScrollbarEvent::ScrollStart,
            ScrollbarEvent::ScrollEnd,
        ]
    );
}

#[test]
fn test_mouse_up_before_scroll_settles_resolves_once() {
    let (mut listener, log) = listener_with_log();
    let t0 = Instant::now();

    listener.on_event(&mouse_down(115.0, 5.0, "pane"), t0);
    listener.on_event(&RawEvent::Scroll, t0);
    // Release before the debounce window closes; the press was already
    // classified at the tick, so this adds nothing.
    listener.on_event(&RawEvent::MouseUp, t0 + Duration::from_millis(20));
    listener.poll(t0 + SCROLL_END_DELAY);

    assert_eq!(
        *log.borrow(),
        vec![
            ScrollbarEvent::ScrollStart,
            ScrollbarEvent::ThumbClick,
            ScrollbarEvent::TopThumbClick,
            ScrollbarEvent::ScrollEnd,
        ]
    );
}

#[test]
fn test_listen_replaces_previous_table() {
    let element = pane();
    let mut listener = ScrollListener::attach(&element);
    let first: EventLog = Rc::default();
    let second: EventLog = Rc::default();

    listener.listen(recording(&first));
    listener.listen(recording(&second));
    listener.on_event(&RawEvent::Wheel, Instant::now());

    assert!(first.borrow().is_empty());
    assert_eq!(*second.borrow(), vec![ScrollbarEvent::MouseWheel]);
}

#[test]
fn test_partial_table_never_errors() {
    let element = pane();
    let mut listener = ScrollListener::attach(&element);
    let log: EventLog = Rc::default();
    let log_clone = Rc::clone(&log);

    // Only one handler registered; everything else is a silent no-op.
    listener.listen(
        Callbacks::new().on(ScrollbarEvent::ThumbClick, move || {
            log_clone.borrow_mut().push(ScrollbarEvent::ThumbClick);
        }),
    );

    let t0 = Instant::now();
    listener.on_event(&mouse_down(115.0, 5.0, "pane"), t0);
    listener.on_event(&RawEvent::Scroll, t0);
    listener.poll(t0 + SCROLL_END_DELAY);

    assert_eq!(*log.borrow(), vec![ScrollbarEvent::ThumbClick]);
}

#[test]
fn test_reserved_kinds_never_emitted() {
    let element = pane();
    let mut listener = ScrollListener::attach(&element);
    let log: EventLog = Rc::default();

    let reserved = Rc::clone(&log);
    let dragged = Rc::clone(&log);
    listener.listen(
        Callbacks::new()
            .on(ScrollbarEvent::TrackClick, move || {
                reserved.borrow_mut().push(ScrollbarEvent::TrackClick);
            })
            .on(ScrollbarEvent::TrackDrag, move || {
                dragged.borrow_mut().push(ScrollbarEvent::TrackDrag);
            }),
    );

    let t0 = Instant::now();
    listener.on_event(&mouse_down(115.0, 200.0, "pane"), t0);
    listener.on_event(&RawEvent::Scroll, t0);
    listener.on_event(&RawEvent::MouseUp, t0);
    listener.on_event(&RawEvent::Wheel, t0);
    listener.poll(t0 + SCROLL_END_DELAY);

    assert!(log.borrow().is_empty());
}

#[test]
fn test_detach_cancels_pending_end() {
    let (mut listener, log) = listener_with_log();
    let t0 = Instant::now();

    listener.on_event(&RawEvent::Scroll, t0);
    assert!(listener.next_deadline().is_some());

    listener.detach();
    assert!(listener.next_deadline().is_none());

    listener.poll(t0 + SCROLL_END_DELAY * 2);
    assert_eq!(*log.borrow(), vec![ScrollbarEvent::ScrollStart]);
}

#[test]
fn test_attach_selector_resolves_and_attaches() {
    let root = Element::new("root")
        .with_rect(OffsetBox::new(0.0, 0.0, 300.0, 300.0))
        .child(pane());

    let listener = attach_selector(&root, "#pane").unwrap();
    assert_eq!(listener.element_id(), "pane");
    assert_eq!(listener.geometry().left_edge, 120.0);
}

#[test]
fn test_attach_selector_rejects_bad_param() {
    let root = pane();

    let err = attach_selector(&root, "#missing").unwrap_err();
    assert_eq!(err.to_string(), "Error parsing element param");

    assert!(attach_selector(&root, "").is_err());
}

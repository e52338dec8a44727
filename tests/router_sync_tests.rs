//! Integration tests for router-initiated navigation.
//!
//! Exercises pushes and pops from both paradigms through the public API and
//! verifies the published sub-path stays in sync with the frame that owns it
//! after every operation settles.

mod common;

use common::{
    assert_top_frame_in_sync, declarative_root_with, record_events, router_with_stack, NativeOp,
};
use hybrid_navigator::{NavigationDirection, Router, Screen, SubScreen};

#[test]
fn test_route_native_presents_then_pushes() {
    let (mut router, stack) = router_with_stack();

    router.route_native(Screen::declarative_root());
    router.route_native(Screen::Detail);

    assert_eq!(
        stack.borrow().ops,
        vec![
            NativeOp::Present("declarative-root"),
            NativeOp::Present("detail"),
        ]
    );
    assert_eq!(router.depth(), 2);
}

#[test]
fn test_route_native_publishes_embedded_sub_path() {
    let (mut router, _stack) = router_with_stack();
    let events = record_events(&mut router);

    let screen = Screen::declarative_root();
    let id = screen.sub_path().expect("owns a sub-path").id();
    router.route_native(screen);

    assert_eq!(router.sub_path().id(), id);
    assert!(router.sub_path().is_empty());

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].direction, NavigationDirection::Replace);
    assert_eq!(events[0].sub_path.id(), id);
}

#[test]
fn test_push_updates_published_and_owning_frame() {
    let (mut router, _stack) = router_with_stack();
    router.route_native(Screen::declarative_root());

    router.push(SubScreen::Imperative);

    assert_eq!(router.sub_path().sub_screens(), &[SubScreen::Imperative]);
    assert_eq!(
        router.path()[0].sub_screens(),
        &[SubScreen::Imperative],
        "push must be written back into the owning frame"
    );
    assert_top_frame_in_sync(&router);
}

#[test]
fn test_full_scenario_route_push_pop_native() {
    // The end-to-end walk: empty stacks, route to the declarative root,
    // push within it, then pop the outer frame natively.
    let (mut router, stack) = router_with_stack();
    let events = record_events(&mut router);

    router.route_native(Screen::declarative_root());
    let id = router.sub_path().id();
    assert_eq!(router.path().len(), 1);

    router.push(SubScreen::Imperative);
    assert_eq!(router.sub_path().id(), id);
    assert_eq!(router.sub_path().sub_screens(), &[SubScreen::Imperative]);
    assert_top_frame_in_sync(&router);

    router.pop_native();
    assert!(router.path().is_empty());
    // Documented behavior: the published sub-path survives the outer pop,
    // stale, not auto-cleared.
    assert_eq!(router.sub_path().id(), id);
    assert_eq!(router.sub_path().sub_screens(), &[SubScreen::Imperative]);

    assert_eq!(
        stack.borrow().ops,
        vec![NativeOp::Present("declarative-root"), NativeOp::Pop]
    );
    // Replace (frame sync), Forward (push); the native pop revealed no
    // owning frame, so nothing was emitted for it.
    let directions: Vec<_> = events.borrow().iter().map(|e| e.direction).collect();
    assert_eq!(
        directions,
        vec![NavigationDirection::Replace, NavigationDirection::Forward]
    );
}

#[test]
fn test_pop_native_requests_native_pop() {
    let (mut router, stack) = router_with_stack();
    router.route_native(Screen::Detail);

    let removed = router.pop_native();

    assert_eq!(removed, Some(Screen::Detail));
    assert_eq!(
        stack.borrow().ops,
        vec![NativeOp::Present("detail"), NativeOp::Pop]
    );
}

#[test]
fn test_pop_to_root_requests_and_clears() {
    let (mut router, stack) = router_with_stack();
    router.route_native(Screen::Detail);
    router.route_native(Screen::declarative_root());

    router.pop_to_root();

    assert!(router.path().is_empty());
    assert_eq!(stack.borrow().ops.last(), Some(&NativeOp::PopToRoot));
}

#[test]
fn test_push_pop_inverse_restores_contents() {
    let (mut router, _stack) = router_with_stack();
    router.route_native(Screen::declarative_root());
    router.push(SubScreen::Declarative);
    let before = router.sub_path().clone();

    router.push(SubScreen::Imperative);
    router.pop();

    assert_eq!(router.sub_path(), &before);
    assert_top_frame_in_sync(&router);
}

#[test]
fn test_pop_to_sub_root_orphans_old_identity() {
    let (mut router, _stack) = router_with_stack();
    router.route_native(Screen::declarative_root());
    router.push(SubScreen::Declarative);
    let old_id = router.sub_path().id();

    router.pop_to_sub_root();

    assert!(router.is_sub_path_empty());
    assert_ne!(router.sub_path().id(), old_id);
    // The owning frame now embeds the new, empty contents.
    assert!(router.path()[0].sub_screens().is_empty());
}

#[test]
fn test_invariant_holds_after_every_mixed_operation() {
    let (mut router, _stack) = router_with_stack();

    router.push(SubScreen::Declarative);
    assert_top_frame_in_sync(&router);

    router.route_native(Screen::declarative_root());
    assert_top_frame_in_sync(&router);

    router.push(SubScreen::Imperative);
    assert_top_frame_in_sync(&router);
    router.push(SubScreen::Declarative);
    assert_top_frame_in_sync(&router);
    router.pop();
    assert_top_frame_in_sync(&router);

    router.push_native(Screen::Detail);
    assert_top_frame_in_sync(&router);

    router.push_native(declarative_root_with(vec![SubScreen::Declarative]));
    assert_top_frame_in_sync(&router);

    router.pop_to_sub_root();
    assert_top_frame_in_sync(&router);

    router.sync_path_on_pop();
    assert_top_frame_in_sync(&router);
    router.sync_path_on_pop();
    assert_top_frame_in_sync(&router);
}

#[test]
fn test_pushing_the_same_variant_twice_keeps_frames_distinct() {
    let (mut router, _stack) = router_with_stack();
    router.route_native(Screen::declarative_root());
    router.push(SubScreen::Declarative);
    router.route_native(Screen::declarative_root());

    // The second root frame has its own identity and an empty stack; the
    // first keeps its pushed contents.
    assert_eq!(router.depth(), 2);
    assert!(router.sub_path().is_empty());
    assert_eq!(router.path()[0].sub_screens(), &[SubScreen::Declarative]);
    assert_ne!(
        router.path()[0].sub_path().map(hybrid_navigator::SubPath::id),
        router.path()[1].sub_path().map(hybrid_navigator::SubPath::id),
    );
}

#[test]
fn test_gesture_gating_via_is_sub_path_empty() {
    let (mut router, _stack) = router_with_stack();
    router.route_native(Screen::declarative_root());
    assert!(router.is_sub_path_empty(), "gesture permitted on empty stack");

    router.push(SubScreen::Declarative);
    assert!(
        !router.is_sub_path_empty(),
        "gesture must be disabled while inner content is showing"
    );

    router.pop_to_sub_root();
    assert!(router.is_sub_path_empty(), "gesture permitted again after reset");
}

#[test]
fn test_unsubscribe_stops_event_delivery() {
    let mut router = Router::new();
    let events = std::rc::Rc::new(std::cell::RefCell::new(0_usize));

    let sink = std::rc::Rc::clone(&events);
    let subscription = router.subscribe(move |_| *sink.borrow_mut() += 1);

    router.push(SubScreen::Declarative);
    assert!(router.unsubscribe(subscription));
    router.push(SubScreen::Declarative);

    assert_eq!(*events.borrow(), 1);
}

#[test]
fn test_events_emit_settled_state() {
    // Observers must never see a torn state: by the time a handler runs,
    // the write-back into the owning frame has already happened.
    let (mut router, _stack) = router_with_stack();
    router.route_native(Screen::declarative_root());

    let seen = record_events(&mut router);
    router.push(SubScreen::Imperative);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].sub_path.sub_screens(), &[SubScreen::Imperative]);
}

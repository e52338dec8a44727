//! Test utilities for router synchronization tests.
//!
//! Provides a recording [`NativeStack`] implementation, an event recorder,
//! and assertion helpers shared by the integration tests.

#![allow(dead_code)]

use hybrid_navigator::{
    NativeStack, NativeStackHandle, Router, Screen, SubPathEvent, SubScreen,
};
use std::cell::RefCell;
use std::rc::Rc;

/// One request the router issued to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeOp {
    Present(&'static str),
    Pop,
    PopToRoot,
}

/// [`NativeStack`] implementation that records every request in order.
#[derive(Debug, Default)]
pub struct RecordingStack {
    pub ops: Vec<NativeOp>,
}

impl NativeStack for RecordingStack {
    fn present(&mut self, screen: &Screen) {
        self.ops.push(NativeOp::Present(screen.label()));
    }

    fn pop(&mut self) {
        self.ops.push(NativeOp::Pop);
    }

    fn pop_to_root(&mut self) {
        self.ops.push(NativeOp::PopToRoot);
    }
}

/// Create a router wired to a fresh recording stack.
///
/// The returned `Rc` keeps the stack alive; the router itself only holds a
/// non-owning handle.
pub fn router_with_stack() -> (Router, Rc<RefCell<RecordingStack>>) {
    let stack = Rc::new(RefCell::new(RecordingStack::default()));
    let handle: NativeStackHandle = stack.clone();
    let mut router = Router::new();
    router.attach_native_stack(&handle);
    (router, stack)
}

/// Subscribe a collector for every emitted [`SubPathEvent`].
pub fn record_events(router: &mut Router) -> Rc<RefCell<Vec<SubPathEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    router.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}

/// A declarative-root frame pre-populated with the given sub-screens.
pub fn declarative_root_with(sub_screens: Vec<SubScreen>) -> Screen {
    Screen::declarative_root().update(sub_screens)
}

/// Assert the router's core invariant: if the top frame owns a sub-path, its
/// contents equal the published sub-path's contents.
///
/// Contents, not full equality: `pop_to_sub_root` publishes a fresh identity
/// while the write-back leaves the owning frame's identity alone, so the two
/// identities are allowed to diverge at that one point.
pub fn assert_top_frame_in_sync(router: &Router) {
    if let Some(embedded) = router.path().last().and_then(Screen::sub_path) {
        assert_eq!(
            embedded.sub_screens(),
            router.sub_path().sub_screens(),
            "top frame's embedded sub-path diverged from the published one"
        );
    }
}

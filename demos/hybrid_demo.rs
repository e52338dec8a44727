//! Hybrid Navigation Demo
//!
//! Drives the router through a full mixed-paradigm session with a terminal
//! stand-in for the presentation layer: display requests print to stdout,
//! and a subscriber prints every published sub-path value.
//!
//! Run with logging enabled to watch the reconciliation decisions:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example hybrid_demo
//! ```

use hybrid_navigator::{NativeStack, NativeStackHandle, Router, Screen, SubScreen};
use std::cell::RefCell;
use std::rc::Rc;

/// Terminal presentation layer: prints what a real UI stack would render.
#[derive(Default)]
struct TerminalStack {
    frames: Vec<&'static str>,
}

impl NativeStack for TerminalStack {
    fn present(&mut self, screen: &Screen) {
        self.frames.push(screen.label());
        println!("  [native] present {screen} -> {:?}", self.frames);
    }

    fn pop(&mut self) {
        self.frames.pop();
        println!("  [native] pop -> {:?}", self.frames);
    }

    fn pop_to_root(&mut self) {
        self.frames.clear();
        println!("  [native] pop to root -> {:?}", self.frames);
    }
}

fn main() {
    env_logger::init();

    let stack = Rc::new(RefCell::new(TerminalStack::default()));
    let handle: NativeStackHandle = stack.clone();

    let mut router = Router::new();
    router.attach_native_stack(&handle);
    router.subscribe(|event| {
        println!("  [declarative] re-render {} ({:?})", event.sub_path, event.direction);
    });

    println!("route to the declarative root:");
    router.route_native(Screen::declarative_root());

    println!("push within the declarative stack:");
    router.push(SubScreen::Imperative);
    router.push(SubScreen::Declarative);
    println!("  back gesture gated: sub-path empty = {}", router.is_sub_path_empty());

    println!("pop one sub-screen:");
    router.pop();

    println!("route onward to a plain native screen:");
    router.route_native(Screen::Detail);

    println!("back gesture pops the detail frame, presentation layer reports it:");
    stack.borrow_mut().pop();
    router.sync_path_on_pop();

    println!("reset the declarative stack:");
    router.pop_to_sub_root();
    println!("  back gesture gated: sub-path empty = {}", router.is_sub_path_empty());

    println!("pop everything back to the native root:");
    router.pop_to_root();
    println!("  router depth = {}, sub-path = {}", router.depth(), router.sub_path());
}

//! The seam between the router and the imperative presentation layer.
//!
//! The router never renders anything. It issues display requests through the
//! [`NativeStack`] trait and expects the presentation layer to report back
//! any pops that happen outside the router's control (a back gesture, a
//! multi-level native pop) via
//! [`Router::sync_path_on_pop`](crate::Router::sync_path_on_pop) /
//! [`Router::sync_path_on_pop_to_root`](crate::Router::sync_path_on_pop_to_root).
//!
//! All methods are **synchronous** — the router runs on a single UI-confined
//! thread and every operation completes before the next event is processed.
//!
//! # Contract
//!
//! Implementations must not call back into the router from inside these
//! methods. When the router itself initiates a pop
//! ([`pop_native`](crate::Router::pop_native),
//! [`pop_to_root`](crate::Router::pop_to_root)) it performs its own
//! bookkeeping afterwards; a native stack that reports those same pops back
//! would desynchronize the router's `path` from reality. The sync callbacks
//! exist solely for pops the router did *not* initiate.
//!
//! # Example
//!
//! ```
//! use hybrid_navigator::{NativeStack, Screen};
//!
//! struct PrintingStack;
//!
//! impl NativeStack for PrintingStack {
//!     fn present(&mut self, screen: &Screen) {
//!         println!("present {screen}");
//!     }
//!
//!     fn pop(&mut self) {
//!         println!("pop");
//!     }
//!
//!     fn pop_to_root(&mut self) {
//!         println!("pop to root");
//!     }
//! }
//! ```

use crate::screen::Screen;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared, single-thread-confined handle to a [`NativeStack`].
///
/// The presentation layer owns the strong reference; the router keeps only a
/// `Weak` obtained from it (see
/// [`Router::attach_native_stack`](crate::Router::attach_native_stack)).
pub type NativeStackHandle = Rc<RefCell<dyn NativeStack>>;

/// Imperative navigation stack driven by the router.
pub trait NativeStack {
    /// Display request for a frame about to be pushed.
    ///
    /// For [`Screen::Detail`] the presentation layer shows its fixed detail
    /// view. For [`Screen::DeclarativeRoot`] it mounts a view subtree bound
    /// to the router's published sub-path, so that subsequent
    /// [`SubPathEvent`](crate::SubPathEvent)s re-render the embedded stack.
    fn present(&mut self, screen: &Screen);

    /// Pop the native stack by one frame.
    fn pop(&mut self);

    /// Pop the native stack all the way to its root frame.
    fn pop_to_root(&mut self);
}

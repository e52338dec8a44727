//! The router: native-stack / declarative-stack reconciliation.
//!
//! The router owns two differently shaped navigation representations and
//! keeps them consistent under pushes and pops initiated from either side:
//!
//! - `path` — the native (outer) stack, a flat sequence of [`Screen`] frames,
//!   bottom = root, top = current frame.
//! - `sub_path` — the published declarative (inner) stack, conceptually the
//!   one embedded in the topmost `path` frame that owns one.
//!
//! The correctness condition is a single invariant: whenever `path` is
//! non-empty and its top frame owns an embedded sub-path, the published
//! `sub_path` holds that frame's sub-path contents immediately after any
//! public operation settles. The identities coincide too, with one
//! deliberate exception: [`pop_to_sub_root`](Router::pop_to_sub_root)
//! publishes a fresh identity while the write-back leaves the owning
//! frame's identity alone (a later frame switch republishes the frame's
//! own identity).
//!
//! Two reconciliation routines uphold it:
//!
//! - [`sync_path_stack`](Router::sync_path_stack) writes an incoming
//!   sub-path value *back* into the owning frame before it is published —
//!   run on every commit, so changes driven from the declarative side land
//!   in `path`.
//! - [`sync_sub_path_stack`](Router::sync_sub_path_stack) reads the new top
//!   frame's embedded sub-path *out* into the published value — run after
//!   every native-stack change, so the declarative side switches to the
//!   frame that became visible.
//!
//! Pops can also happen entirely outside the router (an edge-swipe back
//! gesture, a multi-level native pop). The presentation layer reports those
//! after the fact through [`sync_path_on_pop`](Router::sync_path_on_pop)
//! (once per frame actually popped) and
//! [`sync_path_on_pop_to_root`](Router::sync_path_on_pop_to_root); the
//! router then reconciles its own bookkeeping to match. Omitting these calls
//! silently desynchronizes `path` from reality — treat them as a contract
//! precondition, enforced by tests rather than runtime checks.
//!
//! Every operation is total: popping or resetting an already-empty stack is
//! a defined no-op, never a failure.
//!
//! # Example
//!
//! ```
//! use hybrid_navigator::{Router, Screen, SubScreen};
//!
//! let mut router = Router::new();
//!
//! router.route_native(Screen::declarative_root());
//! router.push(SubScreen::Imperative);
//!
//! assert_eq!(router.depth(), 1);
//! assert_eq!(router.sub_path().sub_screens(), &[SubScreen::Imperative]);
//! assert_eq!(router.path()[0].sub_screens(), router.sub_path().sub_screens());
//! ```

use crate::events::{NavigationDirection, Observers, SubPathEvent, Subscription};
use crate::native::{NativeStack, NativeStackHandle};
use crate::screen::Screen;
use crate::sub_path::{SubPath, SubScreen};
use crate::{debug_log, info_log, trace_log, warn_log};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Coordinator for one native stack and the declarative stack nested in it.
///
/// A single router is created at application startup and lives for the
/// process lifetime. All operations are confined to one logical thread (the
/// UI event thread) — the `Rc`/`RefCell` handle types make the router
/// `!Send`, so the confinement is encoded in the type. No operation blocks
/// or suspends; every change notification reflects a fully settled state.
///
/// The router reaches the presentation layer through a **non-owning**
/// [`NativeStack`] handle recorded with
/// [`attach_native_stack`](Self::attach_native_stack). While no handle is
/// attached (or after the presentation layer is gone), display requests are
/// dropped with a warning and only the router's own bookkeeping runs.
pub struct Router {
    native: Option<Weak<RefCell<dyn NativeStack>>>,
    path: Vec<Screen>,
    sub_path: SubPath,
    observers: Observers,
}

impl Router {
    /// Create a router with an empty native stack, a fresh empty sub-path
    /// and no attached presentation layer.
    pub fn new() -> Self {
        Self {
            native: None,
            path: Vec::new(),
            sub_path: SubPath::new(),
            observers: Observers::new(),
        }
    }

    // ========================================================================
    // Wiring
    // ========================================================================

    /// Record a non-owning handle to the presentation layer.
    ///
    /// The router never controls the presentation layer's lifetime; if the
    /// last strong reference is dropped, subsequent display requests become
    /// no-ops.
    pub fn attach_native_stack(&mut self, native: &NativeStackHandle) {
        self.native = Some(Rc::downgrade(native));
    }

    /// Register an observer for committed sub-path changes.
    ///
    /// Handlers run synchronously, in registration order, after the state
    /// has settled. Delivery continues until [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&mut self, handler: F) -> Subscription
    where
        F: Fn(&SubPathEvent) + 'static,
    {
        self.observers.subscribe(handler)
    }

    /// Stop delivering events to a previously registered observer.
    ///
    /// Returns `true` if the subscription was still registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.observers.unsubscribe(subscription)
    }

    fn native(&self) -> Option<Rc<RefCell<dyn NativeStack>>> {
        self.native.as_ref().and_then(Weak::upgrade)
    }

    // ========================================================================
    // Declarative-side operations
    // ========================================================================

    /// Push a sub-screen onto the declarative stack.
    ///
    /// Never touches the native stack beyond the write-back into the owning
    /// frame. Returns the emitted event.
    pub fn push(&mut self, sub_screen: SubScreen) -> SubPathEvent {
        info_log!("push: '{}' onto sub-path {}", sub_screen, self.sub_path);
        let mut next = self.sub_path.clone();
        next.push(sub_screen);
        self.commit_sub_path(next, NavigationDirection::Forward)
    }

    /// Pop the topmost sub-screen off the declarative stack.
    ///
    /// No-op returning `None` when the declarative stack is empty.
    pub fn pop(&mut self) -> Option<SubPathEvent> {
        if self.sub_path.is_empty() {
            debug_log!("pop: sub-path already empty, nothing to do");
            return None;
        }
        let mut next = self.sub_path.clone();
        let popped = next.pop();
        info_log!("pop: '{:?}' off sub-path, now {}", popped, next);
        Some(self.commit_sub_path(next, NavigationDirection::Back))
    }

    /// Reset the declarative stack to its root.
    ///
    /// Replaces the published sub-path with a brand-new empty one — fresh
    /// identity, empty contents. The old identity is deliberately orphaned:
    /// any component keyed on it is forced to rebuild, which is what makes
    /// this a full reset of the declarative stack. No-op returning `None`
    /// when the stack is already empty.
    pub fn pop_to_sub_root(&mut self) -> Option<SubPathEvent> {
        if self.sub_path.is_empty() {
            debug_log!("pop_to_sub_root: sub-path already empty, nothing to do");
            return None;
        }
        info_log!("pop_to_sub_root: discarding sub-path {}", self.sub_path);
        Some(self.commit_sub_path(SubPath::new(), NavigationDirection::Replace))
    }

    // ========================================================================
    // Native-side operations
    // ========================================================================

    /// Present a frame through the imperative side, then push it.
    ///
    /// The display request goes out through the attached [`NativeStack`];
    /// the frame is pushed onto `path` unconditionally afterwards, whether
    /// or not a presentation layer was there to receive the request.
    pub fn route_native(&mut self, screen: Screen) {
        info_log!("route_native: presenting '{}'", screen.label());
        if let Some(native) = self.native() {
            native.borrow_mut().present(&screen);
        } else {
            warn_log!(
                "route_native: no native stack attached, display request for '{}' dropped",
                screen.label()
            );
        }
        self.push_native(screen);
    }

    /// Push a frame onto the native stack and switch the published sub-path
    /// to the one the new top frame owns, if any.
    pub fn push_native(&mut self, screen: Screen) {
        debug_log!(
            "push_native: '{}' (depth {} -> {})",
            screen.label(),
            self.path.len(),
            self.path.len() + 1
        );
        self.path.push(screen);
        self.sync_sub_path_stack();
    }

    /// Ask the presentation layer to pop one frame, then reconcile.
    ///
    /// Returns the frame removed from `path`, if any.
    pub fn pop_native(&mut self) -> Option<Screen> {
        if let Some(native) = self.native() {
            native.borrow_mut().pop();
        } else {
            warn_log!("pop_native: no native stack attached, pop request dropped");
        }
        self.sync_path_on_pop()
    }

    /// Ask the presentation layer to pop to its root, then clear `path`.
    ///
    /// The published sub-path is **not** reset — same stale-value behavior
    /// as [`sync_path_on_pop_to_root`](Self::sync_path_on_pop_to_root).
    pub fn pop_to_root(&mut self) {
        info_log!("pop_to_root: clearing {} frame(s)", self.path.len());
        if let Some(native) = self.native() {
            native.borrow_mut().pop_to_root();
        } else {
            warn_log!("pop_to_root: no native stack attached, pop request dropped");
        }
        self.path.clear();
    }

    // ========================================================================
    // Reconciliation with externally-triggered pops
    // ========================================================================

    /// Reconcile after one frame was popped natively.
    ///
    /// Called by [`pop_native`](Self::pop_native), and called directly by
    /// the presentation layer when a pop happened outside the router's
    /// control — once per frame actually popped. Removes the top of `path`,
    /// then switches the published sub-path to the new top frame's embedded
    /// one, if it owns any. No-op returning `None` when `path` is empty.
    pub fn sync_path_on_pop(&mut self) -> Option<Screen> {
        let removed = self.path.pop()?;
        debug_log!(
            "sync_path_on_pop: removed '{}' (depth now {})",
            removed.label(),
            self.path.len()
        );
        self.sync_sub_path_stack();
        Some(removed)
    }

    /// Reconcile after `count` frames were popped natively in one go.
    ///
    /// A native pop-to-specific-frame removes several frames at once; the
    /// presentation layer reports how many and this loops
    /// [`sync_path_on_pop`](Self::sync_path_on_pop) that many times. Returns
    /// the number of frames actually removed (less than `count` if `path`
    /// ran out first).
    pub fn sync_path_on_multi_pop(&mut self, count: usize) -> usize {
        let mut removed = 0;
        for _ in 0..count {
            if self.sync_path_on_pop().is_none() {
                warn_log!(
                    "sync_path_on_multi_pop: path exhausted after {} of {} pop(s)",
                    removed,
                    count
                );
                break;
            }
            removed += 1;
        }
        removed
    }

    /// Reconcile after the native stack was popped to its root.
    ///
    /// Clears `path` entirely. Deliberately does **not** resynchronize the
    /// published sub-path — it keeps whatever contents it had, stale. A
    /// caller that wants the declarative stack reset as well must do so
    /// separately (e.g. [`pop_to_sub_root`](Self::pop_to_sub_root)). No-op
    /// when `path` is already empty.
    pub fn sync_path_on_pop_to_root(&mut self) {
        if self.path.is_empty() {
            debug_log!("sync_path_on_pop_to_root: path already empty, nothing to do");
            return;
        }
        info_log!(
            "sync_path_on_pop_to_root: clearing {} frame(s), sub-path left as {}",
            self.path.len(),
            self.sub_path
        );
        self.path.clear();
    }

    // ========================================================================
    // Reconciliation primitives
    // ========================================================================

    /// Switch the published sub-path to the top frame's embedded one.
    ///
    /// If `path` is non-empty and its top frame owns a sub-path, that
    /// sub-path is committed as the published value. A top frame without
    /// one leaves the published value unchanged — stale — so callers that
    /// care must consult [`Screen::has_sub_screens`] /
    /// [`is_sub_path_empty`](Self::is_sub_path_empty) themselves.
    pub fn sync_sub_path_stack(&mut self) {
        let embedded = match self.path.last() {
            Some(top) => top.sub_path().cloned(),
            None => {
                trace_log!("sync_sub_path_stack: path empty, sub-path left unchanged");
                return;
            }
        };
        match embedded {
            Some(next) => {
                debug_log!("sync_sub_path_stack: switching published sub-path to {}", next);
                self.commit_sub_path(next, NavigationDirection::Replace);
            }
            None => {
                trace_log!(
                    "sync_sub_path_stack: top frame owns no sub-screens, sub-path left unchanged"
                );
            }
        }
    }

    /// Write an incoming sub-path's contents back into the owning frame.
    ///
    /// If `path` is non-empty and its top frame owns a sub-path, the frame
    /// is replaced by a copy whose embedded contents are `new_sub_path`'s.
    /// The frame keeps its position at the top of the stack and its embedded
    /// sub-path keeps its identity. Runs as the first step of every commit,
    /// so changes the declarative layer makes to the published value land in
    /// `path` before the new value becomes visible.
    pub fn sync_path_stack(&mut self, new_sub_path: &SubPath) {
        if !self.path.last().is_some_and(Screen::has_sub_screens) {
            return;
        }
        if let Some(top) = self.path.pop() {
            trace_log!(
                "sync_path_stack: writing {} back into '{}'",
                new_sub_path,
                top.label()
            );
            self.path.push(top.update(new_sub_path.sub_screens().to_vec()));
        }
    }

    /// Write-back, commit, then notify — in that order, always.
    fn commit_sub_path(
        &mut self,
        new_sub_path: SubPath,
        direction: NavigationDirection,
    ) -> SubPathEvent {
        self.sync_path_stack(&new_sub_path);
        self.sub_path = new_sub_path;
        let event = SubPathEvent {
            sub_path: self.sub_path.clone(),
            direction,
        };
        self.observers.notify(&event);
        event
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Return `true` if the published sub-path holds no sub-screens.
    ///
    /// The presentation layer queries this to gate the edge-swipe back
    /// gesture: the gesture must stay disabled while the declarative stack
    /// is showing content, or the gesture would pop the outer frame out from
    /// under it.
    pub fn is_sub_path_empty(&self) -> bool {
        self.sub_path.is_empty()
    }

    /// The published sub-path.
    pub fn sub_path(&self) -> &SubPath {
        &self.sub_path
    }

    /// The native stack, bottom = root, top = current frame.
    pub fn path(&self) -> &[Screen] {
        &self.path
    }

    /// Number of frames on the native stack.
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("path", &self.path)
            .field("sub_path", &self.sub_path)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Change events and the observer registry for the published sub-path.
//!
//! The declarative side of the application re-renders from the router's
//! published [`SubPath`], so every committed mutation emits a
//! [`SubPathEvent`] synchronously, on the same call stack as the mutation.
//! By the time a handler runs, the router state has fully settled — handlers
//! never observe a torn state.
//!
//! Handlers are registered through
//! [`Router::subscribe`](crate::Router::subscribe), which returns a
//! [`Subscription`] token. The router lives for the process lifetime, so
//! dropping the token does nothing; delivery stops only on an explicit
//! [`Router::unsubscribe`](crate::Router::unsubscribe).

use crate::sub_path::SubPath;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Events
// ============================================================================

/// Direction of a navigation change, from the observer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// A sub-screen was pushed.
    Forward,
    /// A sub-screen was popped.
    Back,
    /// The whole sub-path was replaced (reset to root, or the visible frame
    /// changed).
    Replace,
}

/// A committed change to the published sub-path.
///
/// Carries the full new value rather than a delta: observers re-render from
/// it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubPathEvent {
    /// The sub-path as published after the mutation settled.
    pub sub_path: SubPath,
    /// What kind of change produced this value.
    pub direction: NavigationDirection,
}

// ============================================================================
// Observer registry
// ============================================================================

/// Handler invoked on every committed sub-path change.
pub type SubPathObserver = Arc<dyn Fn(&SubPathEvent)>;

/// Token identifying a registered observer.
///
/// Returned by [`Observers::subscribe`]; pass it to
/// [`Observers::unsubscribe`] to stop delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: usize,
}

/// Registry of sub-path observers.
///
/// Notification is synchronous and runs handlers in registration order.
#[derive(Default)]
pub struct Observers {
    handlers: Vec<(usize, SubPathObserver)>,
    next_id: usize,
}

impl Observers {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, returning its [`Subscription`] token.
    pub fn subscribe<F>(&mut self, handler: F) -> Subscription
    where
        F: Fn(&SubPathEvent) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.push((id, Arc::new(handler)));
        Subscription { id }
    }

    /// Remove a previously registered handler.
    ///
    /// Returns `true` if the subscription was still registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(id, _)| *id != subscription.id);
        self.handlers.len() != before
    }

    /// Deliver `event` to every handler, in registration order.
    pub fn notify(&self, event: &SubPathEvent) {
        for (_, handler) in &self.handlers {
            handler(event);
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Return `true` if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("handlers", &self.handlers.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

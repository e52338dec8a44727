//! Hybrid navigation router: one navigation hierarchy, two UI paradigms.
//!
//! Mobile-style applications sometimes interleave an imperative
//! view-controller stack with a declarative, path-driven stack nested inside
//! one of its frames. The hard part is not rendering either side — it is
//! keeping the two differently shaped representations consistent while the
//! user pushes, pops and pops-to-root through *either* paradigm, including
//! multi-level pops and gesture-driven pops that bypass the normal push/pop
//! API entirely.
//!
//! This crate is that reconciliation core:
//!
//! - [`Screen`] — one frame of the native (outer) stack. The
//!   [`DeclarativeRoot`](Screen::DeclarativeRoot) variant embeds a
//!   [`SubPath`].
//! - [`SubPath`] / [`SubScreen`] — the declarative (inner) stack, tagged
//!   with a stable identity.
//! - [`Router`] — owns both stacks, exposes push/pop for each side and the
//!   synchronization routines that reconcile them, and publishes every
//!   committed sub-path value as a [`SubPathEvent`].
//! - [`NativeStack`] — the trait seam to the presentation layer, which
//!   receives display requests and reports externally-triggered pops back.
//!
//! Rendering, widgets, view lifecycle and app bootstrap are out of scope:
//! the presentation layer implements [`NativeStack`] and subscribes to
//! sub-path events, nothing more.
//!
//! # Quick start
//!
//! ```
//! use hybrid_navigator::{Router, Screen, SubScreen};
//!
//! let mut router = Router::new();
//! let events = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
//!
//! let sink = std::rc::Rc::clone(&events);
//! router.subscribe(move |event| sink.borrow_mut().push(event.clone()));
//!
//! // Imperative side pushes the frame hosting the declarative stack...
//! router.route_native(Screen::declarative_root());
//! // ...and the declarative side navigates within it.
//! router.push(SubScreen::Imperative);
//!
//! assert_eq!(router.path()[0].sub_screens(), router.sub_path().sub_screens());
//! assert_eq!(events.borrow().len(), 2);
//! ```
//!
//! # Features
//!
//! | Feature   | Description                            | Default |
//! |-----------|----------------------------------------|---------|
//! | `log`     | Log through the `log` crate            | yes     |
//! | `tracing` | Log through the `tracing` crate        | no      |
//!
//! The two logging features are mutually exclusive — enable at most one.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod events;
pub mod logging;
pub mod native;
pub mod router;
pub mod screen;
pub mod sub_path;

pub use events::{NavigationDirection, Observers, SubPathEvent, SubPathObserver, Subscription};
pub use native::{NativeStack, NativeStackHandle};
pub use router::Router;
pub use screen::Screen;
pub use sub_path::{SubPath, SubScreen};

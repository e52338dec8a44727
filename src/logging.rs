//! Logging abstraction layer.
//!
//! The router logs through a thin macro layer that dispatches to either the
//! [`log`](https://docs.rs/log) or [`tracing`](https://docs.rs/tracing)
//! crate, selected by feature flag. The two features are **mutually
//! exclusive** — enable at most one.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! With neither feature enabled the macros compile to nothing.
//!
//! The router uses the levels as follows: `info_log!` for committed
//! navigations, `debug_log!` for reconciliation decisions, `trace_log!` for
//! write-back detail, and `warn_log!` for dropped display requests and other
//! contract-risk situations. All macros accept `format!`-style arguments:
//!
//! ```ignore
//! use hybrid_navigator::{debug_log, info_log};
//!
//! info_log!("push: '{}' onto sub-path", sub_screen);
//! debug_log!("sync_path_on_pop: removed '{}'", screen.label());
//! ```

/// Emit a **trace**-level log message.
///
/// Accepts `format!`-style arguments; dispatches to the backend selected by
/// feature flag.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level log message.
///
/// Accepts `format!`-style arguments; dispatches to the backend selected by
/// feature flag.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit an **info**-level log message.
///
/// Accepts `format!`-style arguments; dispatches to the backend selected by
/// feature flag.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}

/// Emit a **warn**-level log message.
///
/// Accepts `format!`-style arguments; dispatches to the backend selected by
/// feature flag.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}

/// Emit an **error**-level log message.
///
/// Accepts `format!`-style arguments; dispatches to the backend selected by
/// feature flag.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
    };
}

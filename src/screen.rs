//! Value type for one frame of the native (outer) navigation stack.
//!
//! A [`Screen`] is what the router pushes onto its `path`. Most frames are
//! plain imperative screens; the [`DeclarativeRoot`](Screen::DeclarativeRoot)
//! variant is special in that it owns an embedded [`SubPath`] — the
//! declarative stack nested inside that frame. The router's whole job is to
//! keep that embedded sub-path and the published one consistent, so this
//! type exposes the accessors the reconciliation needs:
//! [`has_sub_screens`](Screen::has_sub_screens),
//! [`sub_path`](Screen::sub_path) and [`update`](Screen::update).

use crate::sub_path::{SubPath, SubScreen};
use std::fmt;

/// One frame of the native navigation stack.
///
/// Value semantics throughout: a frame's identity for stack purposes is its
/// tag plus payload, never a reference. [`update`](Self::update) returns a
/// new frame rather than mutating shared state.
///
/// # Example
///
/// ```
/// use hybrid_navigator::{Screen, SubScreen};
///
/// let detail = Screen::Detail;
/// assert!(!detail.has_sub_screens());
///
/// let root = Screen::declarative_root();
/// assert!(root.has_sub_screens());
/// assert!(root.sub_screens().is_empty());
///
/// let root = root.update(vec![SubScreen::Declarative]);
/// assert_eq!(root.sub_screens(), &[SubScreen::Declarative]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Screen {
    /// A plain imperative screen. Owns no embedded stack.
    Detail,
    /// The frame hosting the declarative paradigm, with its embedded stack.
    DeclarativeRoot(SubPath),
}

impl Screen {
    /// Create a [`DeclarativeRoot`](Self::DeclarativeRoot) frame with a
    /// fresh, empty sub-path.
    pub fn declarative_root() -> Self {
        Self::DeclarativeRoot(SubPath::new())
    }

    /// Whether this frame owns an embedded declarative stack.
    pub fn has_sub_screens(&self) -> bool {
        matches!(self, Self::DeclarativeRoot(_))
    }

    /// The embedded sub-path, for frames that own one.
    pub fn sub_path(&self) -> Option<&SubPath> {
        match self {
            Self::DeclarativeRoot(sub_path) => Some(sub_path),
            Self::Detail => None,
        }
    }

    /// The embedded sub-path's contents. Empty for frames without one.
    pub fn sub_screens(&self) -> &[SubScreen] {
        match self {
            Self::DeclarativeRoot(sub_path) => sub_path.sub_screens(),
            Self::Detail => &[],
        }
    }

    /// Return a frame whose embedded sub-path contents are replaced with
    /// `sub_screens`. The sub-path identity is preserved. For frames without
    /// an embedded stack this is an identity operation.
    #[must_use]
    pub fn update(self, sub_screens: Vec<SubScreen>) -> Self {
        match self {
            Self::DeclarativeRoot(mut sub_path) => {
                sub_path.update(sub_screens);
                Self::DeclarativeRoot(sub_path)
            }
            Self::Detail => Self::Detail,
        }
    }

    /// Short lowercase label, used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Detail => "detail",
            Self::DeclarativeRoot(_) => "declarative-root",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detail => f.write_str("detail"),
            Self::DeclarativeRoot(sub_path) => write!(f, "declarative-root{sub_path}"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_owns_no_sub_path() {
        let screen = Screen::Detail;
        assert!(!screen.has_sub_screens());
        assert!(screen.sub_path().is_none());
        assert!(screen.sub_screens().is_empty());
    }

    #[test]
    fn test_declarative_root_defaults_to_empty_sub_path() {
        let screen = Screen::declarative_root();
        assert!(screen.has_sub_screens());
        assert!(screen.sub_path().is_some_and(SubPath::is_empty));
    }

    #[test]
    fn test_update_replaces_contents_and_keeps_identity() {
        let screen = Screen::declarative_root();
        let id = screen.sub_path().map(SubPath::id);

        let screen = screen.update(vec![SubScreen::Imperative, SubScreen::Declarative]);
        assert_eq!(
            screen.sub_screens(),
            &[SubScreen::Imperative, SubScreen::Declarative]
        );
        assert_eq!(screen.sub_path().map(SubPath::id), id);
    }

    #[test]
    fn test_update_is_identity_for_detail() {
        let screen = Screen::Detail.update(vec![SubScreen::Declarative]);
        assert_eq!(screen, Screen::Detail);
    }

    #[test]
    fn test_value_equality() {
        let sub_path = SubPath::with_sub_screens(vec![SubScreen::Declarative]);
        let a = Screen::DeclarativeRoot(sub_path.clone());
        let b = Screen::DeclarativeRoot(sub_path);
        assert_eq!(a, b);

        // Fresh sub-paths never compare equal: distinct identities.
        assert_ne!(Screen::declarative_root(), Screen::declarative_root());
        assert_eq!(Screen::Detail, Screen::Detail);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Screen::Detail.label(), "detail");
        assert_eq!(Screen::declarative_root().label(), "declarative-root");
        assert_eq!(Screen::Detail.to_string(), "detail");
    }
}

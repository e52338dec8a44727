//! Value types for the declarative (inner) navigation stack.
//!
//! This module defines two types:
//!
//! - [`SubScreen`] — one entry of the declarative stack. A closed set of
//!   variants describing which paradigm renders the entry.
//! - [`SubPath`] — the declarative stack itself: an ordered sequence of
//!   sub-screens tagged with a stable identity. The identity is assigned at
//!   construction and never changes for the lifetime of the value; replacing
//!   a `SubPath` with a freshly constructed one (see
//!   [`Router::pop_to_sub_root`](crate::Router::pop_to_sub_root)) therefore
//!   orphans anything keyed on the old identity.
//!
//! Both types have plain value semantics: they are compared structurally and
//! mutation of one copy is never observable through another.
//!
//! # Example
//!
//! ```
//! use hybrid_navigator::{SubPath, SubScreen};
//!
//! let mut sub_path = SubPath::new();
//! assert!(sub_path.is_empty());
//!
//! sub_path.push(SubScreen::Declarative);
//! sub_path.push(SubScreen::Imperative);
//! assert_eq!(sub_path.len(), 2);
//! assert_eq!(sub_path.pop(), Some(SubScreen::Imperative));
//!
//! // Replacing the contents keeps the identity.
//! let id = sub_path.id();
//! sub_path.update(vec![SubScreen::Declarative]);
//! assert_eq!(sub_path.id(), id);
//! ```

use std::fmt;
use uuid::Uuid;

// ============================================================================
// SubScreen
// ============================================================================

/// One entry of the declarative navigation stack.
///
/// The declarative stack can host content from either paradigm, so the
/// variant records which side renders the entry. Equality is by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubScreen {
    /// An imperatively managed view hosted inside the declarative stack.
    Imperative,
    /// A view native to the declarative paradigm.
    Declarative,
}

impl SubScreen {
    /// Short lowercase label, used in log output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Imperative => "imperative",
            Self::Declarative => "declarative",
        }
    }
}

impl fmt::Display for SubScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// SubPath
// ============================================================================

/// The declarative navigation stack, bottom to top, with a stable identity.
///
/// The identity is what a declarative view layer keys its stack widget on;
/// two `SubPath` values are equal only when both the identity and the
/// contents are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubPath {
    id: Uuid,
    sub_screens: Vec<SubScreen>,
}

impl SubPath {
    /// Create an empty sub-path with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            sub_screens: Vec::new(),
        }
    }

    /// Create a sub-path with a fresh identity and the given contents.
    pub fn with_sub_screens(sub_screens: Vec<SubScreen>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sub_screens,
        }
    }

    /// The identity assigned at construction. Never changes.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The stacked sub-screens, bottom to top.
    pub fn sub_screens(&self) -> &[SubScreen] {
        &self.sub_screens
    }

    /// Return `true` if no sub-screens are stacked.
    pub fn is_empty(&self) -> bool {
        self.sub_screens.is_empty()
    }

    /// Number of stacked sub-screens.
    pub fn len(&self) -> usize {
        self.sub_screens.len()
    }

    /// Append a sub-screen to the top of the stack.
    pub fn push(&mut self, sub_screen: SubScreen) {
        self.sub_screens.push(sub_screen);
    }

    /// Remove and return the topmost sub-screen, if any.
    pub fn pop(&mut self) -> Option<SubScreen> {
        self.sub_screens.pop()
    }

    /// Remove all sub-screens. The identity is kept.
    pub fn clear(&mut self) {
        self.sub_screens.clear();
    }

    /// Replace the contents wholesale. The identity is kept.
    pub fn update(&mut self, sub_screens: Vec<SubScreen>) {
        self.sub_screens = sub_screens;
    }
}

impl Default for SubPath {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, sub_screen) in self.sub_screens.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{sub_screen}")?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// Tests
// ============================================================================

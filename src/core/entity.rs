//! Button identification.
//!
//! Every button in a session has a `ButtonId` equal to its creation index.
//! Identities are 0-based; the label a player sees is 1-based.
//!
//! ## Usage
//!
//! ```
//! use scramble_recall::core::ButtonId;
//!
//! let first = ButtonId::new(0);
//! assert_eq!(first.label(), 1);
//!
//! let ids: Vec<_> = ButtonId::sequence(3).collect();
//! assert_eq!(ids, vec![ButtonId(0), ButtonId(1), ButtonId(2)]);
//! ```

use serde::{Deserialize, Serialize};

/// Identity of one button, fixed for its whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ButtonId(pub u32);

impl ButtonId {
    /// Create a button ID from its creation index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into identity-ordered storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Number shown on the button face (identity + 1).
    #[must_use]
    pub const fn label(self) -> u32 {
        self.0 + 1
    }

    /// Iterate identities `0..count` in creation order.
    pub fn sequence(count: u32) -> impl Iterator<Item = ButtonId> {
        (0..count).map(ButtonId)
    }
}

impl From<u32> for ButtonId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Button({})", self.0)
    }
}

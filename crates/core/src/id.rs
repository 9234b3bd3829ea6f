//! Identify menus and their entries.
use smol_str::SmolStr;

use std::fmt;

/// The identifier of a menu or of one of its entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id(Internal);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Internal {
    Unique(u64),
    Custom(SmolStr),
}

impl Id {
    /// Creates a custom [`Id`].
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(Internal::Custom(id.into()))
    }

    /// Returns the [`Id`] of an entry derived from this one, e.g.
    /// `menu-3` and `activedescendant` become `menu-3-activedescendant`.
    #[must_use]
    pub fn derive(&self, suffix: &str) -> Self {
        Self(Internal::Custom(SmolStr::new(format!("{self}-{suffix}"))))
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Internal::Unique(n) => write!(f, "menu-{n}"),
            Internal::Custom(id) => f.write_str(id),
        }
    }
}

/// A generator of unique [`Id`]s.
///
/// Uniqueness is only guaranteed among the ids produced by the same
/// [`Generator`]; hosts that need unique ids across several menus share
/// one generator between them.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    next: u64,
}

impl Generator {
    /// Creates a new [`Generator`] starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh [`Id`].
    pub fn unique(&mut self) -> Id {
        let id = Id(Internal::Unique(self.next));
        self.next += 1;

        id
    }
}

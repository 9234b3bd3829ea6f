//! Place submenus next to the item that opens them.
use crate::core::alignment::Anchor;
use crate::core::{Point, Rectangle, Size, Vector};
use crate::menu::tree::Node;

use std::fmt;
use std::rc::Rc;

/// Describes how a submenu is placed relative to its anchor item.
///
/// The point `my` of the submenu is put on the point `at` of the anchor,
/// then moved by `offset`. The default opens submenus to the right, with
/// their top edges aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// The point of the submenu to align.
    pub my: Anchor,
    /// The point of the anchor to align to.
    pub at: Anchor,
    /// An additional translation.
    pub offset: Vector,
}

impl Placement {
    /// Creates a new [`Placement`].
    pub const fn new(my: Anchor, at: Anchor) -> Self {
        Self {
            my,
            at,
            offset: Vector::ZERO,
        }
    }

    /// Sets the offset of the [`Placement`].
    #[must_use]
    pub fn offset(mut self, offset: Vector) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the top left corner of a menu of the given [`Size`] placed
    /// against `anchor`.
    pub fn resolve(&self, anchor: Rectangle, size: Size) -> Point {
        anchor.position() + self.at.offset(anchor.size()) - self.my.offset(size) + self.offset
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new(Anchor::TOP_LEFT, Anchor::TOP_RIGHT)
    }
}

/// The positioning strategy of a menu.
#[derive(Clone)]
pub enum Position {
    /// Every submenu uses the same [`Placement`].
    Static(Placement),
    /// The [`Placement`] is computed from the item that opens the submenu.
    Dynamic(Rc<dyn Fn(&Node) -> Placement>),
}

impl Position {
    /// Returns the [`Placement`] of a submenu opened by `anchor`.
    pub fn placement(&self, anchor: &Node) -> Placement {
        match self {
            Self::Static(placement) => *placement,
            Self::Dynamic(f) => f(anchor),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::Static(Placement::default())
    }
}

impl From<Placement> for Position {
    fn from(placement: Placement) -> Self {
        Self::Static(placement)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(placement) => f.debug_tuple("Static").field(placement).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

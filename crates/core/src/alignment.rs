//! Align and position menus relative to their anchors.

/// Alignment on the axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Align at the start of the axis.
    Start,

    /// Align at the center of the axis.
    Center,

    /// Align at the end of the axis.
    End,
}

impl Alignment {
    /// Returns the distance from the start of a segment of the given
    /// `length` to the point this [`Alignment`] refers to.
    #[must_use]
    pub fn offset(self, length: f32) -> f32 {
        match self {
            Self::Start => 0.0,
            Self::Center => length / 2.0,
            Self::End => length,
        }
    }
}

impl From<Horizontal> for Alignment {
    fn from(horizontal: Horizontal) -> Self {
        match horizontal {
            Horizontal::Left => Self::Start,
            Horizontal::Center => Self::Center,
            Horizontal::Right => Self::End,
        }
    }
}

impl From<Vertical> for Alignment {
    fn from(vertical: Vertical) -> Self {
        match vertical {
            Vertical::Top => Self::Start,
            Vertical::Center => Self::Center,
            Vertical::Bottom => Self::End,
        }
    }
}

/// The horizontal [`Alignment`] of some resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Horizontal {
    /// Align left
    Left,

    /// Horizontally centered
    Center,

    /// Align right
    Right,
}

impl From<Alignment> for Horizontal {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Start => Self::Left,
            Alignment::Center => Self::Center,
            Alignment::End => Self::Right,
        }
    }
}

/// The vertical [`Alignment`] of some resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vertical {
    /// Align top
    Top,

    /// Vertically centered
    Center,

    /// Align bottom
    Bottom,
}

impl From<Alignment> for Vertical {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Start => Self::Top,
            Alignment::Center => Self::Center,
            Alignment::End => Self::Bottom,
        }
    }
}

/// A point of a rectangle, named by its horizontal and vertical alignment.
///
/// `Anchor::new(Horizontal::Right, Vertical::Top)` is the top right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    /// The horizontal component.
    pub horizontal: Horizontal,
    /// The vertical component.
    pub vertical: Vertical,
}

impl Anchor {
    /// The top left corner.
    pub const TOP_LEFT: Self = Self::new(Horizontal::Left, Vertical::Top);

    /// The top right corner.
    pub const TOP_RIGHT: Self = Self::new(Horizontal::Right, Vertical::Top);

    /// The bottom left corner.
    pub const BOTTOM_LEFT: Self = Self::new(Horizontal::Left, Vertical::Bottom);

    /// Creates a new [`Anchor`].
    pub const fn new(horizontal: Horizontal, vertical: Vertical) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Returns the offset of this [`Anchor`] inside a rectangle of the given size.
    #[must_use]
    pub fn offset(self, size: crate::Size) -> crate::Vector {
        crate::Vector::new(
            Alignment::from(self.horizontal).offset(size.width),
            Alignment::from(self.vertical).offset(size.height),
        )
    }
}

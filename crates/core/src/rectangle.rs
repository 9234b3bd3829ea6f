use crate::{Point, Size, Vector};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    /// X coordinate of the top-left corner.
    pub x: f32,

    /// Y coordinate of the top-left corner.
    pub y: f32,

    /// Width of the rectangle.
    pub width: f32,

    /// Height of the rectangle.
    pub height: f32,
}

impl Rectangle {
    /// Creates a new [`Rectangle`] with its top-left corner in the given
    /// [`Point`] and with the provided [`Size`].
    pub const fn new(top_left: Point, size: Size) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Creates a new [`Rectangle`] with its top-left corner at the origin
    /// and with the provided [`Size`].
    pub const fn with_size(size: Size) -> Self {
        Self::new(Point::ORIGIN, size)
    }

    /// Returns the position of the top left corner of the [`Rectangle`].
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the [`Size`] of the [`Rectangle`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the bottom edge of the [`Rectangle`].
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the given [`Point`] is contained in the [`Rectangle`].
    ///
    /// The right and bottom edges are excluded, so adjacent rectangles
    /// never contain the same point.
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x
            && point.x < self.x + self.width
            && self.y <= point.y
            && point.y < self.y + self.height
    }
}

impl std::ops::Add<Vector> for Rectangle {
    type Output = Rectangle;

    fn add(self, translation: Vector) -> Self {
        Rectangle {
            x: self.x + translation.x,
            y: self.y + translation.y,
            ..self
        }
    }
}

impl std::ops::Sub<Vector> for Rectangle {
    type Output = Rectangle;

    fn sub(self, translation: Vector) -> Self {
        Rectangle {
            x: self.x - translation.x,
            y: self.y - translation.y,
            ..self
        }
    }
}

//! Integer screen coordinates.

/// A point on the screen. `x` grows to the right, `y` grows downwards.
///
/// Points are replaced rather than mutated: build a new one with
/// [`Point::new`] or [`Point::offset`].
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Origin, `(0, 0)`.
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> i32 {
        self.x
    }

    pub const fn y(self) -> i32 {
        self.y
    }

    /// This point translated by `(dx, dy)`, clamped to the `i32` range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Squared Euclidean distance to `other`, widened so screen-sized
    /// coordinates can never overflow.
    pub fn distance_squared(self, other: Point) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for embedded_graphics::prelude::Point {
    fn from(p: Point) -> Self {
        embedded_graphics::prelude::Point::new(p.x, p.y)
    }
}

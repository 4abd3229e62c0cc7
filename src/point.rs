//! 3D integer key type.

use std::fmt;

/// A key in 3D integer space.
///
/// Points are plain values: two points are equal exactly when all three
/// coordinates are equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Z coordinate
    pub z: i32,
}

impl Point {
    /// Creates a point from its three coordinates
    ///
    /// # Example
    /// ```
    /// use octbst::Point;
    /// let p = Point::new(1, -2, 3);
    /// assert_eq!((p.x, p.y, p.z), (1, -2, 3));
    /// ```
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Coordinates as an array, `[x, y, z]`
    #[must_use]
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<(i32, i32, i32)> for Point {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for Point {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point> for (i32, i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y, p.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

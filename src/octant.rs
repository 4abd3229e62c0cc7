//! Octant classification shared by the tree and the balancer.
//!
//! Octants are numbered by which axes of `key` are *not* greater than the
//! reference. Bit 0 is x, bit 1 is y, bit 2 is z; a set bit means
//! "less than or equal".
//!
//! | octant | x   | y   | z   |
//! |--------|-----|-----|-----|
//! | 0      | >   | >   | >   |
//! | 1      | <=  | >   | >   |
//! | 2      | >   | <=  | >   |
//! | 3      | <=  | <=  | >   |
//! | 4      | >   | >   | <=  |
//! | 5      | <=  | >   | <=  |
//! | 6      | >   | <=  | <=  |
//! | 7      | <=  | <=  | <=  |

use crate::Point;

/// Number of child slots per node
pub const OCTANT_COUNT: usize = 8;

/// Returns the octant (0..=7) that `key` occupies relative to `reference`.
///
/// Equal coordinates on an axis classify the same as "less than", so a key
/// compared against itself lands in octant 7. The tree never does that,
/// since equal keys are rejected before descending.
///
/// # Example
/// ```
/// use octbst::{octant_of, Point};
/// let reference = Point::new(3, 3, 3);
/// assert_eq!(octant_of(&Point::new(4, 3, 1), &reference), 6);
/// assert_eq!(octant_of(&Point::new(1, 5, 2), &reference), 5);
/// ```
#[inline]
#[must_use]
pub fn octant_of(key: &Point, reference: &Point) -> usize {
    let mut octant = OCTANT_COUNT - 1;
    if key.x > reference.x {
        octant -= 1;
    }
    if key.y > reference.y {
        octant -= 2;
    }
    if key.z > reference.z {
        octant -= 4;
    }
    octant
}

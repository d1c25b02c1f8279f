//! This module contains a struct, [`Coord`](coord::Coord), that models a point in 3D space. It is
//! the Cartesian side of every conversion in [`transformations`](transformations), and it also
//! holds tristimulus (XYZ) samples of colour-matching functions, where the axes are simply read as
//! X, Y, and Z.

use std::ops::{Add, Sub};

/// A point in 3D space. `Coord` has three axes, denoted `x`, `y`, and `z`. These are not any
/// different in any method of `Coord`, so the distinction between them is completely
/// conventional: a tristimulus value stores X, Y, and Z on the axes with the same names.
///
/// # Example
/// ```
/// # use locus::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord::from((7., 2., 3.));
/// // componentwise difference: the point (-6, 6, 4)
/// let diff = point_1 - point_2;
/// assert_eq!(diff, Coord{x: -6., y: 6., z: 4.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// For any Coords c1, c2, and c3, c1 + c2 = c3 implies c3 - c2 = c1, down to floating point error.
impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from(t: (f64, f64, f64)) -> Coord {
        Coord {
            x: t.0,
            y: t.1,
            z: t.2,
        }
    }
}

impl From<[f64; 3]> for Coord {
    fn from(arr: [f64; 3]) -> Coord {
        Coord {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}

impl Into<[f64; 3]> for Coord {
    fn into(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Coord {
    /// The sum of the three components. For a tristimulus value this is the X + Y + Z denominator
    /// of the chromaticity projection.
    pub fn sum(&self) -> f64 {
        self.x + self.y + self.z
    }

    /// The length of the vector from the origin to this point.
    /// # Example
    /// ```
    /// # use locus::coord::Coord;
    /// let point = Coord{x: 2., y: 3., z: 6.};
    /// assert!((point.norm() - 7.).abs() <= 1e-10);
    /// ```
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// The Euclidean distance between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis.
    /// # Example
    /// ```
    /// # use locus::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        (*self - *other).norm()
    }
}

//! This module defines [`Chromaticity`](chromaticity::Chromaticity), a point on the CIE 1931 xy
//! chromaticity diagram, along with the little bit of 2D arithmetic that the spectral locus
//! computations need. Distances are delegated to the `geo` crate, and every `Chromaticity` converts
//! to and from `geo`'s point types so that the segment algorithms can run on it directly.

use std::ops::{Add, Div, Mul, Sub};

use coord::Coord;
use float_cmp::{ApproxEq, F64Margin};
use geo::{Coord as GeoCoord, EuclideanDistance, Point};
use num;
use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can scale a [`Chromaticity`].
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A pair of chromaticity coordinates `x` and `y`. These are the projections X / (X + Y + Z) and
/// Y / (X + Y + Z) of a tristimulus value, which throw away luminance and keep only what the colour
/// "is". Every colour visible to the human eye lands inside the horseshoe traced by the spectral
/// locus.
///
/// # Example
/// ```
/// # use locus::chromaticity::Chromaticity;
/// # use locus::coord::Coord;
/// // the D65 white point, X = 95.047, Y = 100, Z = 108.883
/// let d65 = Chromaticity::from_xyz(Coord{x: 95.047, y: 100., z: 108.883});
/// assert!((d65.x - 0.31272).abs() <= 1e-5);
/// assert!((d65.y - 0.32902).abs() <= 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Chromaticity {
    /// The x chromaticity coordinate, roughly how red the colour is.
    pub x: f64,
    /// The y chromaticity coordinate. Also used as a stand-in for luminance in colorimetric purity.
    pub y: f64,
}

impl Add for Chromaticity {
    type Output = Chromaticity;
    fn add(self, rhs: Chromaticity) -> Chromaticity {
        Chromaticity {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Chromaticity {
    type Output = Chromaticity;
    fn sub(self, rhs: Chromaticity) -> Chromaticity {
        Chromaticity {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

// Scalar multiplication and division. Scalars that can't be represented as f64 become NaN, and
// dividing by zero gives infinities: bad values propagate instead of panicking.
impl<U: Scalar> Mul<U> for Chromaticity {
    type Output = Chromaticity;
    fn mul(self, rhs: U) -> Chromaticity {
        let r: f64 = num::cast(rhs).unwrap_or(::std::f64::NAN);
        Chromaticity {
            x: self.x * r,
            y: self.y * r,
        }
    }
}

impl<U: Scalar> Div<U> for Chromaticity {
    type Output = Chromaticity;
    fn div(self, rhs: U) -> Chromaticity {
        let r: f64 = num::cast(rhs).unwrap_or(::std::f64::NAN);
        Chromaticity {
            x: self.x / r,
            y: self.y / r,
        }
    }
}

impl Chromaticity {
    /// Projects a tristimulus value, stored as a [`Coord`] with X, Y, and Z on the matching axes,
    /// onto the chromaticity diagram. Black (X + Y + Z = 0) has no chromaticity and comes out as
    /// NaN.
    ///
    /// [`Coord`]: ../coord/struct.Coord.html
    pub fn from_xyz(xyz: Coord) -> Chromaticity {
        let sum = xyz.sum();
        Chromaticity {
            x: xyz.x / sum,
            y: xyz.y / sum,
        }
    }

    /// The straight-line distance between two points on the chromaticity diagram.
    /// # Example
    /// ```
    /// # use locus::chromaticity::Chromaticity;
    /// let a = Chromaticity{x: 0.1, y: 0.1};
    /// let b = Chromaticity{x: 0.4, y: 0.5};
    /// assert!((a.euclidean_distance(&b) - 0.5).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Chromaticity) -> f64 {
        Point::from(*self).euclidean_distance(&Point::from(*other))
    }

    /// Returns `true` if both coordinates are finite, i.e., the point is usable as geometry.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl ApproxEq for Chromaticity {
    type Margin = F64Margin;

    /// Componentwise approximate equality with the same margin on both axes.
    fn approx_eq<M: Into<F64Margin>>(self, other: Chromaticity, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}

impl From<(f64, f64)> for Chromaticity {
    fn from(t: (f64, f64)) -> Chromaticity {
        Chromaticity { x: t.0, y: t.1 }
    }
}

impl From<[f64; 2]> for Chromaticity {
    fn from(arr: [f64; 2]) -> Chromaticity {
        Chromaticity {
            x: arr[0],
            y: arr[1],
        }
    }
}

impl From<GeoCoord<f64>> for Chromaticity {
    fn from(c: GeoCoord<f64>) -> Chromaticity {
        Chromaticity { x: c.x, y: c.y }
    }
}

impl From<Chromaticity> for GeoCoord<f64> {
    fn from(c: Chromaticity) -> GeoCoord<f64> {
        GeoCoord { x: c.x, y: c.y }
    }
}

impl From<Chromaticity> for Point<f64> {
    fn from(c: Chromaticity) -> Point<f64> {
        Point::new(c.x, c.y)
    }
}

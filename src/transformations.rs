//! This module implements conversions between Cartesian coordinates, held in a [`Coord`], and the
//! two curvilinear systems used throughout colour science: spherical coordinates and cylindrical
//! coordinates. Each conversion is written once for a single point; the `_batch` forms just map it
//! over a slice, so every element gets exactly the result it would get on its own no matter how the
//! caller groups its data.
//!
//! Angles are in radians. Note the two conventions that differ from what a physics text would use:
//! the spherical `theta` is the *inclination* from the xy-plane (`atan2(z, hypot(x, y))`), not the
//! colatitude from the z-axis, and cylindrical triples put the passthrough `z` first, as
//! `(z, theta, rho)`.
//!
//! [`Coord`]: ../coord/struct.Coord.html

use coord::Coord;

/// A point in spherical coordinates.
/// # Example
///
/// ```
/// # use locus::coord::Coord;
/// # use locus::transformations::{cartesian_to_spherical, spherical_to_cartesian};
/// let point = Coord{x: 3., y: 1., z: 6.};
/// let sph = cartesian_to_spherical(point);
/// assert!((sph.r - 6.78232998).abs() <= 1e-7);
/// assert!((sph.theta - 1.08574654).abs() <= 1e-7);
/// assert!((sph.phi - 0.32175055).abs() <= 1e-7);
/// let back = spherical_to_cartesian(sph);
/// assert!(back.euclidean_distance(&point) <= 1e-10);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    /// The radial distance from the origin. Never negative for a converted point.
    pub r: f64,
    /// The inclination above (positive) or below (negative) the xy-plane, in [-π/2, π/2].
    pub theta: f64,
    /// The azimuth measured from the positive x-axis, in (-π, π].
    pub phi: f64,
}

/// A point in cylindrical coordinates. The axial coordinate comes first.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cylindrical {
    /// The height along the axis, identical to the Cartesian `z`.
    pub z: f64,
    /// The azimuth measured from the positive x-axis, in (-π, π].
    pub theta: f64,
    /// The distance from the axis.
    pub rho: f64,
}

/// Converts a Cartesian point to spherical coordinates `(r, theta, phi)`.
pub fn cartesian_to_spherical(point: Coord) -> Spherical {
    let r = point.norm();
    let theta = point.z.atan2(point.x.hypot(point.y));
    let phi = point.y.atan2(point.x);
    Spherical { r, theta, phi }
}

/// Converts spherical coordinates back to a Cartesian point. The exact inverse of
/// [`cartesian_to_spherical`](fn.cartesian_to_spherical.html), up to floating point error.
pub fn spherical_to_cartesian(sph: Spherical) -> Coord {
    let (sin_theta, cos_theta) = sph.theta.sin_cos();
    let (sin_phi, cos_phi) = sph.phi.sin_cos();
    Coord {
        x: sph.r * cos_theta * cos_phi,
        y: sph.r * cos_theta * sin_phi,
        z: sph.r * sin_theta,
    }
}

/// Converts a Cartesian point to cylindrical coordinates `(z, theta, rho)`.
/// # Example
/// ```
/// # use locus::coord::Coord;
/// # use locus::transformations::cartesian_to_cylindrical;
/// let cyl = cartesian_to_cylindrical(Coord{x: 3., y: 1., z: 6.});
/// assert_eq!(cyl.z, 6.);
/// assert!((cyl.theta - 0.32175055).abs() <= 1e-7);
/// assert!((cyl.rho - 3.16227766).abs() <= 1e-7);
/// ```
pub fn cartesian_to_cylindrical(point: Coord) -> Cylindrical {
    Cylindrical {
        z: point.z,
        theta: point.y.atan2(point.x),
        rho: point.x.hypot(point.y),
    }
}

/// Converts cylindrical coordinates back to a Cartesian point.
pub fn cylindrical_to_cartesian(cyl: Cylindrical) -> Coord {
    let (sin, cos) = cyl.theta.sin_cos();
    Coord {
        x: cyl.rho * cos,
        y: cyl.rho * sin,
        z: cyl.z,
    }
}

/// Converts every point of a batch with [`cartesian_to_spherical`](fn.cartesian_to_spherical.html).
pub fn cartesian_to_spherical_batch(points: &[Coord]) -> Vec<Spherical> {
    points.iter().map(|&p| cartesian_to_spherical(p)).collect()
}

/// Converts every point of a batch with [`spherical_to_cartesian`](fn.spherical_to_cartesian.html).
pub fn spherical_to_cartesian_batch(points: &[Spherical]) -> Vec<Coord> {
    points.iter().map(|&p| spherical_to_cartesian(p)).collect()
}

/// Converts every point of a batch with
/// [`cartesian_to_cylindrical`](fn.cartesian_to_cylindrical.html).
pub fn cartesian_to_cylindrical_batch(points: &[Coord]) -> Vec<Cylindrical> {
    points.iter().map(|&p| cartesian_to_cylindrical(p)).collect()
}

/// Converts every point of a batch with
/// [`cylindrical_to_cartesian`](fn.cylindrical_to_cartesian.html).
pub fn cylindrical_to_cartesian_batch(points: &[Cylindrical]) -> Vec<Coord> {
    points.iter().map(|&p| cylindrical_to_cartesian(p)).collect()
}

impl From<Coord> for Spherical {
    fn from(c: Coord) -> Spherical {
        cartesian_to_spherical(c)
    }
}

impl From<Spherical> for Coord {
    fn from(s: Spherical) -> Coord {
        spherical_to_cartesian(s)
    }
}

impl From<Coord> for Cylindrical {
    fn from(c: Coord) -> Cylindrical {
        cartesian_to_cylindrical(c)
    }
}

impl From<Cylindrical> for Coord {
    fn from(c: Cylindrical) -> Coord {
        cylindrical_to_cartesian(c)
    }
}

// raw component access in field order, no conversion involved
impl From<[f64; 3]> for Spherical {
    fn from(arr: [f64; 3]) -> Spherical {
        Spherical {
            r: arr[0],
            theta: arr[1],
            phi: arr[2],
        }
    }
}

impl Into<[f64; 3]> for Spherical {
    fn into(self) -> [f64; 3] {
        [self.r, self.theta, self.phi]
    }
}

impl From<[f64; 3]> for Cylindrical {
    fn from(arr: [f64; 3]) -> Cylindrical {
        Cylindrical {
            z: arr[0],
            theta: arr[1],
            rho: arr[2],
        }
    }
}

impl Into<[f64; 3]> for Cylindrical {
    fn into(self) -> [f64; 3] {
        [self.z, self.theta, self.rho]
    }
}

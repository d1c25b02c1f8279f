//! Line segment primitives on the chromaticity diagram: extending a segment past one of its ends,
//! and intersecting two segments. Intersection is an annoying algorithm to get robust, so it's
//! handed off to `geo`.

use chromaticity::Chromaticity;
use geo::line_intersection::{line_intersection, LineIntersection};
use geo::Line;

/// How far past the colour stimulus a ray from the achromatic point is extended before it is tested
/// against the spectral locus. The whole diagram fits inside the unit square, so one unit is always
/// enough to cross the locus.
pub const EXTENSION_DISTANCE: f64 = 1.0;

/// A line segment between two chromaticity points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// The first end.
    pub start: Chromaticity,
    /// The second end.
    pub end: Chromaticity,
}

impl Segment {
    /// Constructs a new segment from its two ends.
    pub fn new(start: Chromaticity, end: Chromaticity) -> Segment {
        Segment { start, end }
    }

    /// Returns `true` if both ends have finite coordinates.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

impl From<Segment> for Line<f64> {
    fn from(s: Segment) -> Line<f64> {
        Line::new(s.start, s.end)
    }
}

/// Given two points A and B, returns the point C that lies `distance` past B on the line from A
/// through B. If A and B coincide there is no direction to extend in, and C has NaN coordinates.
/// # Example
/// ```
/// # use locus::chromaticity::Chromaticity;
/// # use locus::segment::extend_line_segment;
/// let a = Chromaticity{x: 0.2, y: 0.2};
/// let b = Chromaticity{x: 0.5, y: 0.6};
/// let c = extend_line_segment(a, b, 1.);
/// assert!((c.x - 1.1).abs() <= 1e-10);
/// assert!((c.y - 1.4).abs() <= 1e-10);
/// ```
pub fn extend_line_segment(a: Chromaticity, b: Chromaticity, distance: f64) -> Chromaticity {
    let length = a.euclidean_distance(&b);
    b + (b - a) / length * distance
}

/// Returns the point where two segments cross, or `None` if they don't. Segments touching at an end
/// count as crossing there. Collinear overlaps don't have a single crossing point and return
/// `None`, as do segments with non-finite ends.
/// # Example
/// ```
/// # use locus::chromaticity::Chromaticity;
/// # use locus::segment::{intersect_line_segments, Segment};
/// let l1 = Segment::new(Chromaticity{x: 0., y: 0.}, Chromaticity{x: 1., y: 1.});
/// let l2 = Segment::new(Chromaticity{x: 0., y: 1.}, Chromaticity{x: 1., y: 0.});
/// let p = intersect_line_segments(l1, l2).unwrap();
/// assert!((p.x - 0.5).abs() <= 1e-12 && (p.y - 0.5).abs() <= 1e-12);
///
/// let l3 = Segment::new(Chromaticity{x: 2., y: 2.}, Chromaticity{x: 3., y: 2.});
/// assert_eq!(intersect_line_segments(l1, l3), None);
/// ```
pub fn intersect_line_segments(l1: Segment, l2: Segment) -> Option<Chromaticity> {
    if !l1.is_finite() || !l2.is_finite() {
        return None;
    }
    match line_intersection(l1.into(), l2.into()) {
        Some(LineIntersection::SinglePoint { intersection, .. }) => Some(intersection.into()),
        Some(LineIntersection::Collinear { .. }) | None => None,
    }
}

/// Returns `true` if [`intersect_line_segments`](fn.intersect_line_segments.html) would find a
/// crossing point.
pub fn line_segments_intersect(l1: Segment, l2: Segment) -> bool {
    intersect_line_segments(l1, l2).is_some()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::ApproxEq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Chromaticity{x: x1, y: y1}, Chromaticity{x: x2, y: y2})
    }

    #[test]
    fn test_extend_keeps_direction() {
        let a = Chromaticity{x: 0.31270, y: 0.32900};
        let b = Chromaticity{x: 0.26415, y: 0.37770};
        let c = extend_line_segment(a, b, EXTENSION_DISTANCE);
        // C is exactly one unit past B, on the same line
        assert!((b.euclidean_distance(&c) - 1.).abs() <= 1e-12);
        assert!((a.euclidean_distance(&c) - a.euclidean_distance(&b) - 1.).abs() <= 1e-12);
    }

    #[test]
    fn test_extend_degenerate() {
        let a = Chromaticity{x: 0.3, y: 0.3};
        assert!(!extend_line_segment(a, a, 1.).is_finite());
    }

    #[test]
    fn test_proper_intersection() {
        let p = intersect_line_segments(seg(0., 0., 2., 1.), seg(0., 1., 2., 0.));
        assert!(p.is_some());
        assert!(p.unwrap().approx_eq(Chromaticity{x: 1., y: 0.5}, (1e-12, 2)));
    }

    #[test]
    fn test_endpoint_intersection() {
        // touching at an end still counts
        let p = intersect_line_segments(seg(0., 0., 1., 1.), seg(1., 1., 2., 0.));
        assert_eq!(p, Some(Chromaticity{x: 1., y: 1.}));
        assert!(line_segments_intersect(seg(0., 0., 1., 1.), seg(1., 1., 2., 0.)));
    }

    #[test]
    fn test_no_intersection() {
        assert_eq!(intersect_line_segments(seg(0., 0., 1., 0.), seg(0., 1., 1., 1.)), None);
        // crossing lines whose segments stop short of each other
        assert_eq!(intersect_line_segments(seg(0., 0., 1., 1.), seg(3., 0., 2., 1.)), None);
        assert!(!line_segments_intersect(seg(0., 0., 1., 0.), seg(0., 1., 1., 1.)));
    }

    #[test]
    fn test_collinear_overlap_is_not_a_point() {
        assert_eq!(intersect_line_segments(seg(0., 0., 2., 2.), seg(1., 1., 3., 3.)), None);
    }

    #[test]
    fn test_non_finite_segment() {
        let nan = ::std::f64::NAN;
        assert_eq!(intersect_line_segments(seg(0., 0., nan, nan), seg(0., 1., 1., 0.)), None);
    }
}

//! This module finds where colours sit relative to the spectral locus. A colour stimulus `xy` is
//! described by the ray from an achromatic point `xy_n` (usually an illuminant's white point)
//! through `xy`: the wavelength where that ray leaves the diagram is the colour's *dominant
//! wavelength*, the one where the opposite ray leaves is its *complementary wavelength*, and how
//! far along the ray `xy` sits gives its *purity*.
//!
//! The locus is closed into a loop by the line of purples, the straight edge between its violet and
//! red ends. Purples have no dominant wavelength, because their ray hits that edge instead of the
//! curve: in that case the complementary wavelength is reported instead, negated, so that a negative
//! wavelength always signals a purple.
//!
//! Every function comes in a single-colour form and a batch form. Batches fail as a whole: the first
//! colour in input order that has no intersection is returned as the error, with no partial
//! results.

use std::error::Error;
use std::fmt;

use chromaticity::Chromaticity;
use cmfs::ColorMatchingFunctions;
use segment::{extend_line_segment, intersect_line_segments, line_segments_intersect, Segment,
              EXTENSION_DISTANCE};

/// An error that occurs when the ray from the achromatic point through a colour doesn't cross the
/// spectral locus anywhere. This happens when the colour *is* the achromatic point, when either point
/// has non-finite coordinates, or when the locus has no samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GeometryError {
    /// No crossing was found for the ray from `xy_n` through `xy`.
    NoIntersection {
        /// The colour stimulus.
        xy: Chromaticity,
        /// The achromatic point.
        xy_n: Chromaticity,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GeometryError::NoIntersection { xy, xy_n } => write!(
                f,
                "no spectral locus intersection found for colour stimulus ({}, {}) and achromatic \
                 stimulus ({}, {})",
                xy.x, xy.y, xy_n.x, xy_n.y
            ),
        }
    }
}

impl Error for GeometryError {}

/// Where a ray crosses the spectral locus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocusIntersection {
    /// Index of the locus sample closest to the crossing point. Always a valid index into the locus
    /// and its wavelengths.
    pub index: usize,
    /// The crossing point itself.
    pub xy: Chromaticity,
}

/// The result of a dominant or complementary wavelength computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DominantWavelength {
    /// The wavelength in nanometers. Negative if the ray hit the line of purples and the wavelength
    /// from the opposite direction was substituted.
    pub wavelength: f64,
    /// Where the ray crosses the locus, in the requested direction. On the line of purples this is
    /// a point on the purple edge.
    pub first: Chromaticity,
    /// Where the wavelength was read off. Equal to `first` unless the line of purples was hit, in
    /// which case it is the crossing in the opposite direction.
    pub second: Chromaticity,
}

impl DominantWavelength {
    /// Returns `true` if the ray hit the line of purples, so that `wavelength` is the negated
    /// wavelength from the other direction.
    pub fn crosses_line_of_purples(&self) -> bool {
        self.wavelength.is_sign_negative()
    }
}

/// The segment from `xy_n` reaching past `xy` (or, reversed, past `xy_n` away from `xy`).
fn ray_segment(xy: Chromaticity, xy_n: Chromaticity, reverse: bool) -> Segment {
    let xy_e = if reverse {
        extend_line_segment(xy, xy_n, EXTENSION_DISTANCE)
    } else {
        extend_line_segment(xy_n, xy, EXTENSION_DISTANCE)
    };
    Segment::new(xy_n, xy_e)
}

/// Consecutive locus edges, followed by the closing edge from the last sample back to the first.
fn locus_edges<'a>(xy_s: &'a [Chromaticity]) -> impl Iterator<Item = Segment> + 'a {
    let closing = xy_s
        .last()
        .into_iter()
        .zip(xy_s.first())
        .map(|(&last, &first)| Segment::new(last, first));
    xy_s.windows(2)
        .map(|w| Segment::new(w[0], w[1]))
        .chain(closing)
}

/// Index of the sample closest to `xy`, the lowest one on ties. `xy_s` must not be empty.
fn nearest_sample(xy: Chromaticity, xy_s: &[Chromaticity]) -> usize {
    let mut best = 0;
    let mut best_distance = ::std::f64::INFINITY;
    for (i, sample) in xy_s.iter().enumerate() {
        let distance = xy.euclidean_distance(sample);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

/// Finds where the ray from the achromatic point `xy_n` through the colour `xy` crosses the spectral
/// locus `xy_s`, and which locus sample is closest to that crossing. With `reverse`, the ray points
/// the opposite way, away from `xy`.
///
/// The locus is closed with the edge from its last sample back to its first. If the ray crosses more
/// than one edge, which only happens when it passes exactly through a sample, the first edge in
/// locus order wins.
/// # Errors
/// Returns `GeometryError::NoIntersection` if the ray crosses no edge.
/// # Example
/// ```
/// # use locus::cmfs::ColorMatchingFunctions;
/// # use locus::chromaticity::Chromaticity;
/// # use locus::dominant::closest_spectral_locus_wavelength;
/// # use locus::illuminants::Illuminant;
/// let xy_s = ColorMatchingFunctions::cie_1931_2_degree().chromaticities();
/// let xy = Chromaticity{x: 0.26415, y: 0.37770};
/// let hit = closest_spectral_locus_wavelength(xy, Illuminant::D65.chromaticity(), &xy_s, false).unwrap();
/// assert_eq!(hit.index, 144);
/// assert!((hit.xy.x - 0.0036969).abs() <= 1e-6);
/// assert!((hit.xy.y - 0.6389577).abs() <= 1e-6);
/// ```
pub fn closest_spectral_locus_wavelength(
    xy: Chromaticity,
    xy_n: Chromaticity,
    xy_s: &[Chromaticity],
    reverse: bool,
) -> Result<LocusIntersection, GeometryError> {
    let ray = ray_segment(xy, xy_n, reverse);
    let mut hits = locus_edges(xy_s).filter_map(|edge| intersect_line_segments(ray, edge));
    let xy_wl = match hits.next() {
        Some(xy_wl) => xy_wl,
        None => {
            debug!(
                "no spectral locus intersection for xy = {:?}, xy_n = {:?}, reverse = {}",
                xy, xy_n, reverse
            );
            return Err(GeometryError::NoIntersection { xy, xy_n });
        }
    };
    trace!(
        "ray {:?} crosses the locus at {:?}, {} further crossings",
        ray,
        xy_wl,
        hits.count()
    );
    Ok(LocusIntersection {
        index: nearest_sample(xy_wl, xy_s),
        xy: xy_wl,
    })
}

/// Batch form of [`closest_spectral_locus_wavelength`](fn.closest_spectral_locus_wavelength.html),
/// with one achromatic point shared by every colour.
pub fn closest_spectral_locus_wavelengths(
    xys: &[Chromaticity],
    xy_n: Chromaticity,
    xy_s: &[Chromaticity],
    reverse: bool,
) -> Result<Vec<LocusIntersection>, GeometryError> {
    xys.iter()
        .map(|&xy| closest_spectral_locus_wavelength(xy, xy_n, xy_s, reverse))
        .collect()
}

/// Dominant wavelength against an already projected locus, index-aligned with `wavelengths`.
fn dominant_wavelength_on_locus(
    xy: Chromaticity,
    xy_n: Chromaticity,
    xy_s: &[Chromaticity],
    wavelengths: &[f64],
    reverse: bool,
) -> Result<DominantWavelength, GeometryError> {
    let hit = closest_spectral_locus_wavelength(xy, xy_n, xy_s, reverse)?;
    // a hit means the locus isn't empty
    let purples = Segment::new(xy_s[0], xy_s[xy_s.len() - 1]);
    let ray = ray_segment(xy, xy_n, reverse);
    let opposite = closest_spectral_locus_wavelength(xy, xy_n, xy_s, !reverse)?;

    if line_segments_intersect(ray, purples) {
        debug!(
            "xy = {:?} lies on the line of purples side of xy_n = {:?}, using {} nm from the \
             opposite side",
            xy, xy_n, wavelengths[opposite.index]
        );
        Ok(DominantWavelength {
            wavelength: -wavelengths[opposite.index],
            first: hit.xy,
            second: opposite.xy,
        })
    } else {
        Ok(DominantWavelength {
            wavelength: wavelengths[hit.index],
            first: hit.xy,
            second: hit.xy,
        })
    }
}

/// Computes the dominant wavelength of the colour `xy` seen against the achromatic point `xy_n`,
/// using the spectral locus of `cmfs`. With `reverse`, computes the complementary wavelength
/// instead.
///
/// If the ray hits the line of purples, the wavelength from the opposite direction is returned,
/// negated, and `second` holds that crossing.
/// # Errors
/// Returns `GeometryError::NoIntersection` if either ray fails to cross the locus, e.g., when
/// `xy == xy_n`.
/// # Example
/// ```
/// # use locus::cmfs::ColorMatchingFunctions;
/// # use locus::chromaticity::Chromaticity;
/// # use locus::dominant::dominant_wavelength;
/// # use locus::illuminants::Illuminant;
/// let cmfs = ColorMatchingFunctions::cie_1931_2_degree();
/// let d65 = Illuminant::D65.chromaticity();
/// // a teal
/// let teal = dominant_wavelength(Chromaticity{x: 0.26415, y: 0.37770}, d65, cmfs, false).unwrap();
/// assert_eq!(teal.wavelength, 504.);
/// assert_eq!(teal.first, teal.second);
/// // a purple has no dominant wavelength, so the complementary one is reported, negated
/// let purple = dominant_wavelength(Chromaticity{x: 0.35, y: 0.25}, d65, cmfs, false).unwrap();
/// assert_eq!(purple.wavelength, -520.);
/// assert!(purple.crosses_line_of_purples());
/// ```
pub fn dominant_wavelength(
    xy: Chromaticity,
    xy_n: Chromaticity,
    cmfs: &ColorMatchingFunctions,
    reverse: bool,
) -> Result<DominantWavelength, GeometryError> {
    let xy_s = cmfs.chromaticities();
    dominant_wavelength_on_locus(xy, xy_n, &xy_s, cmfs.wavelengths(), reverse)
}

/// Batch form of [`dominant_wavelength`](fn.dominant_wavelength.html). The locus is projected once
/// for the whole batch.
pub fn dominant_wavelengths(
    xys: &[Chromaticity],
    xy_n: Chromaticity,
    cmfs: &ColorMatchingFunctions,
    reverse: bool,
) -> Result<Vec<DominantWavelength>, GeometryError> {
    let xy_s = cmfs.chromaticities();
    xys.iter()
        .map(|&xy| dominant_wavelength_on_locus(xy, xy_n, &xy_s, cmfs.wavelengths(), reverse))
        .collect()
}

/// Computes the complementary wavelength of the colour `xy` seen against the achromatic point
/// `xy_n`: the wavelength on the opposite side of `xy_n`. Colours whose complement would be a purple
/// get their dominant wavelength instead, negated. This is exactly
/// [`dominant_wavelength`](fn.dominant_wavelength.html) with `reverse` set.
/// # Example
/// ```
/// # use locus::cmfs::ColorMatchingFunctions;
/// # use locus::chromaticity::Chromaticity;
/// # use locus::dominant::complementary_wavelength;
/// # use locus::illuminants::Illuminant;
/// let cmfs = ColorMatchingFunctions::cie_1931_2_degree();
/// let d65 = Illuminant::D65.chromaticity();
/// let green = complementary_wavelength(Chromaticity{x: 0.35, y: 0.25}, d65, cmfs).unwrap();
/// assert_eq!(green.wavelength, 520.);
/// ```
pub fn complementary_wavelength(
    xy: Chromaticity,
    xy_n: Chromaticity,
    cmfs: &ColorMatchingFunctions,
) -> Result<DominantWavelength, GeometryError> {
    dominant_wavelength(xy, xy_n, cmfs, true)
}

/// Batch form of [`complementary_wavelength`](fn.complementary_wavelength.html).
pub fn complementary_wavelengths(
    xys: &[Chromaticity],
    xy_n: Chromaticity,
    cmfs: &ColorMatchingFunctions,
) -> Result<Vec<DominantWavelength>, GeometryError> {
    dominant_wavelengths(xys, xy_n, cmfs, true)
}

fn excitation_purity_on_locus(
    xy: Chromaticity,
    xy_n: Chromaticity,
    xy_s: &[Chromaticity],
    wavelengths: &[f64],
) -> Result<(f64, DominantWavelength), GeometryError> {
    let dominant = dominant_wavelength_on_locus(xy, xy_n, xy_s, wavelengths, false)?;
    let purity = xy_n.euclidean_distance(&xy) / xy_n.euclidean_distance(&dominant.first);
    Ok((purity, dominant))
}

fn colorimetric_purity_on_locus(
    xy: Chromaticity,
    xy_n: Chromaticity,
    xy_s: &[Chromaticity],
    wavelengths: &[f64],
) -> Result<f64, GeometryError> {
    let (p_e, dominant) = excitation_purity_on_locus(xy, xy_n, xy_s, wavelengths)?;
    Ok(p_e * dominant.first.y / xy.y)
}

/// Computes the excitation purity of the colour `xy` against the achromatic point `xy_n`: how far
/// `xy` is along the way from `xy_n` to the locus, from 0 at `xy_n` to 1 on the locus (or on the
/// line of purples). Not clamped, so colours outside the locus give values above 1.
/// # Errors
/// Fails like [`dominant_wavelength`](fn.dominant_wavelength.html).
/// # Example
/// ```
/// # use locus::cmfs::ColorMatchingFunctions;
/// # use locus::chromaticity::Chromaticity;
/// # use locus::dominant::excitation_purity;
/// # use locus::illuminants::Illuminant;
/// let cmfs = ColorMatchingFunctions::cie_1931_2_degree();
/// let d65 = Illuminant::D65.chromaticity();
/// let p_e = excitation_purity(Chromaticity{x: 0.2835, y: 0.687}, d65, cmfs).unwrap();
/// assert!((p_e - 0.9386035).abs() <= 2e-6);
/// // the white point itself has no hue to be pure in
/// assert!(excitation_purity(d65, d65, cmfs).is_err());
/// ```
pub fn excitation_purity(
    xy: Chromaticity,
    xy_n: Chromaticity,
    cmfs: &ColorMatchingFunctions,
) -> Result<f64, GeometryError> {
    let xy_s = cmfs.chromaticities();
    excitation_purity_on_locus(xy, xy_n, &xy_s, cmfs.wavelengths()).map(|(p_e, _)| p_e)
}

/// Batch form of [`excitation_purity`](fn.excitation_purity.html).
pub fn excitation_purities(
    xys: &[Chromaticity],
    xy_n: Chromaticity,
    cmfs: &ColorMatchingFunctions,
) -> Result<Vec<f64>, GeometryError> {
    let xy_s = cmfs.chromaticities();
    xys.iter()
        .map(|&xy| excitation_purity_on_locus(xy, xy_n, &xy_s, cmfs.wavelengths()).map(|(p_e, _)| p_e))
        .collect()
}

/// Computes the colorimetric purity of the colour `xy` against the achromatic point `xy_n`: the
/// excitation purity weighted by the ratio of the locus crossing's `y` to the colour's `y`, which
/// approximates the luminance share of the monochromatic component. A colour with `y = 0` gives an
/// infinite or NaN result rather than an error.
/// # Errors
/// Fails like [`dominant_wavelength`](fn.dominant_wavelength.html).
/// # Example
/// ```
/// # use locus::cmfs::ColorMatchingFunctions;
/// # use locus::chromaticity::Chromaticity;
/// # use locus::dominant::colorimetric_purity;
/// # use locus::illuminants::Illuminant;
/// let cmfs = ColorMatchingFunctions::cie_1931_2_degree();
/// let p_c = colorimetric_purity(Chromaticity{x: 0.2835, y: 0.687}, Illuminant::D65.chromaticity(), cmfs).unwrap();
/// assert!((p_c - 0.9705976).abs() <= 1e-6);
/// ```
pub fn colorimetric_purity(
    xy: Chromaticity,
    xy_n: Chromaticity,
    cmfs: &ColorMatchingFunctions,
) -> Result<f64, GeometryError> {
    let xy_s = cmfs.chromaticities();
    colorimetric_purity_on_locus(xy, xy_n, &xy_s, cmfs.wavelengths())
}

/// Batch form of [`colorimetric_purity`](fn.colorimetric_purity.html).
pub fn colorimetric_purities(
    xys: &[Chromaticity],
    xy_n: Chromaticity,
    cmfs: &ColorMatchingFunctions,
) -> Result<Vec<f64>, GeometryError> {
    let xy_s = cmfs.chromaticities();
    xys.iter()
        .map(|&xy| colorimetric_purity_on_locus(xy, xy_n, &xy_s, cmfs.wavelengths()))
        .collect()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use illuminants::Illuminant;

    fn cie() -> &'static ColorMatchingFunctions {
        ColorMatchingFunctions::cie_1931_2_degree()
    }

    fn d65() -> Chromaticity {
        Illuminant::D65.chromaticity()
    }

    fn close(a: Chromaticity, x: f64, y: f64, tol: f64) -> bool {
        (a.x - x).abs() <= tol && (a.y - y).abs() <= tol
    }

    const TEAL: Chromaticity = Chromaticity { x: 0.26415, y: 0.37770 };
    const PURPLE: Chromaticity = Chromaticity { x: 0.35, y: 0.25 };

    #[test]
    fn test_closest_wavelength() {
        let xy_s = cie().chromaticities();
        let hit = closest_spectral_locus_wavelength(TEAL, d65(), &xy_s, false).unwrap();
        assert_eq!(hit.index, 144);
        assert_eq!(cie().wavelengths()[hit.index], 504.);
        assert!(close(hit.xy, 0.0036969, 0.6389577, 1e-6));
    }

    #[test]
    fn test_closest_wavelength_reverse_hits_purples() {
        // the reverse ray of a teal lands on the closing edge, nearest to an orange sample
        let xy_s = cie().chromaticities();
        let hit = closest_spectral_locus_wavelength(TEAL, d65(), &xy_s, true).unwrap();
        assert!(close(hit.xy, 0.4897494, 0.1514035, 1e-7));
        assert_eq!(cie().wavelengths()[hit.index], 611.);
    }

    #[test]
    fn test_dominant_wavelength() {
        let dw = dominant_wavelength(TEAL, d65(), cie(), false).unwrap();
        assert_eq!(dw.wavelength, 504.);
        assert!(close(dw.first, 0.0036969, 0.6389577, 1e-6));
        assert_eq!(dw.first, dw.second);
        assert!(!dw.crosses_line_of_purples());
    }

    #[test]
    fn test_dominant_wavelength_on_purples() {
        let dw = dominant_wavelength(PURPLE, d65(), cie(), false).unwrap();
        assert_eq!(dw.wavelength, -520.);
        assert!(dw.crosses_line_of_purples());
        assert!(close(dw.first, 0.4133314, 0.1158663, 1e-7));
        assert!(close(dw.second, 0.0743553, 0.8338050, 3e-7));
    }

    #[test]
    fn test_complementary_wavelength() {
        let cw = complementary_wavelength(PURPLE, d65(), cie()).unwrap();
        assert_eq!(cw.wavelength, 520.);
        assert!(close(cw.first, 0.0743553, 0.8338050, 3e-7));
        assert_eq!(cw.first, cw.second);

        let cw = complementary_wavelength(TEAL, d65(), cie()).unwrap();
        assert_eq!(cw.wavelength, -504.);
        assert!(close(cw.first, 0.4897494, 0.1514035, 1e-7));
        assert!(close(cw.second, 0.0036969, 0.6389577, 1e-6));
    }

    #[test]
    fn test_complementary_is_reversed_dominant() {
        for &xy in &[TEAL, PURPLE, Chromaticity { x: 0.2835, y: 0.687 }] {
            assert_eq!(
                complementary_wavelength(xy, d65(), cie()),
                dominant_wavelength(xy, d65(), cie(), true)
            );
        }
    }

    #[test]
    fn test_purities() {
        let xy = Chromaticity { x: 0.2835, y: 0.687 };
        let p_e = excitation_purity(xy, d65(), cie()).unwrap();
        assert!(approx_eq!(f64, p_e, 0.9386035, epsilon = 2e-6));
        let p_c = colorimetric_purity(xy, d65(), cie()).unwrap();
        assert!(approx_eq!(f64, p_c, 0.9705976, epsilon = 1e-6));
    }

    #[test]
    fn test_purity_on_the_locus_is_one() {
        let dw = dominant_wavelength(TEAL, d65(), cie(), false).unwrap();
        let p_e = excitation_purity(dw.first, d65(), cie()).unwrap();
        assert!((p_e - 1.).abs() <= 1e-9);
    }

    #[test]
    fn test_degenerate_stimulus() {
        let err = dominant_wavelength(d65(), d65(), cie(), false).unwrap_err();
        assert_eq!(err, GeometryError::NoIntersection { xy: d65(), xy_n: d65() });
        assert!(err.to_string().starts_with("no spectral locus intersection"));
        assert!(excitation_purity(d65(), d65(), cie()).is_err());
        assert!(colorimetric_purity(d65(), d65(), cie()).is_err());
    }

    #[test]
    fn test_empty_locus() {
        let err = closest_spectral_locus_wavelength(TEAL, d65(), &[], false);
        assert_eq!(err, Err(GeometryError::NoIntersection { xy: TEAL, xy_n: d65() }));
    }

    #[test]
    fn test_batches_match_single() {
        let xys = [TEAL, PURPLE, Chromaticity { x: 0.2835, y: 0.687 }];
        let dws = dominant_wavelengths(&xys, d65(), cie(), false).unwrap();
        let cws = complementary_wavelengths(&xys, d65(), cie()).unwrap();
        let p_es = excitation_purities(&xys, d65(), cie()).unwrap();
        let p_cs = colorimetric_purities(&xys, d65(), cie()).unwrap();
        let xy_s = cie().chromaticities();
        let hits = closest_spectral_locus_wavelengths(&xys, d65(), &xy_s, false).unwrap();
        for (i, &xy) in xys.iter().enumerate() {
            assert_eq!(dws[i], dominant_wavelength(xy, d65(), cie(), false).unwrap());
            assert_eq!(cws[i], complementary_wavelength(xy, d65(), cie()).unwrap());
            assert_eq!(p_es[i], excitation_purity(xy, d65(), cie()).unwrap());
            assert_eq!(p_cs[i], colorimetric_purity(xy, d65(), cie()).unwrap());
            assert_eq!(hits[i], closest_spectral_locus_wavelength(xy, d65(), &xy_s, false).unwrap());
        }
    }

    #[test]
    fn test_batch_fails_as_a_whole() {
        let xys = [TEAL, d65(), PURPLE];
        let err = dominant_wavelengths(&xys, d65(), cie(), false).unwrap_err();
        assert_eq!(err, GeometryError::NoIntersection { xy: d65(), xy_n: d65() });
        assert!(excitation_purities(&xys, d65(), cie()).is_err());
        assert!(colorimetric_purities(&xys, d65(), cie()).is_err());
        assert!(complementary_wavelengths(&xys, d65(), cie()).is_err());
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(dominant_wavelengths(&[], d65(), cie(), false), Ok(vec![]));
    }
}

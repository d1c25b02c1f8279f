//! Locus is a library for measuring colours against the spectral locus, the horseshoe-shaped curve
//! that monochromatic light traces on the CIE 1931 chromaticity diagram. Given a colour and an
//! achromatic reference such as an illuminant's white point, it computes the colour's dominant and
//! complementary wavelengths and its excitation and colorimetric purities. These are the classical
//! descriptors of hue and saturation, predating modern colour spaces, and they are still what a
//! spectrometer or a lighting standard will report.
//!
//! Alongside this it provides conversions between Cartesian, spherical, and cylindrical coordinates,
//! the colour-matching functions of the CIE 1931 2° standard observer, and the standard illuminants.
//!
//! # Example
//! ```
//! use locus::prelude::*;
//!
//! let cmfs = ColorMatchingFunctions::cie_1931_2_degree();
//! let white = Illuminant::D65.chromaticity();
//! let green = Chromaticity{x: 0.2835, y: 0.687};
//!
//! let dw = dominant_wavelength(green, white, cmfs, false).unwrap();
//! assert_eq!(dw.wavelength, 547.);
//! let p_e = excitation_purity(green, white, cmfs).unwrap();
//! assert!((p_e - 0.9386035).abs() <= 2e-6);
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare 0.0036969 with 0.003_696_9
#![allow(clippy::unreadable_literal)]

extern crate csv;
extern crate geo;
extern crate num;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate float_cmp;
#[cfg(test)]
extern crate rand;

pub mod chromaticity;
pub mod cmfs;
pub mod coord;
pub mod dominant;
pub mod illuminants;
pub mod prelude;
pub mod segment;
pub mod transformations;

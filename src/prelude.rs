//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. It includes the point types, the bundled colour-matching functions, the
//! [`Illuminant`] enum, and the dominant wavelength and purity functions with their result and error
//! types. The coordinate transformations and segment primitives are left in their own modules.
//!
//! [`Illuminant`]: ../illuminants/enum.Illuminant.html

pub use chromaticity::Chromaticity;
pub use cmfs::{ColorMatchingFunctions, SpectralDataError};
pub use coord::Coord;
pub use dominant::{colorimetric_purity, complementary_wavelength, dominant_wavelength,
                   excitation_purity, DominantWavelength, GeometryError, LocusIntersection};
pub use illuminants::Illuminant;

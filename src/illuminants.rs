//! This module provides an enum of CIE standard illuminants, which supply the achromatic reference
//! point that dominant wavelength and purity are measured from. White points are taken from the
//! [ASTM E308 standard](https://www.astm.org/Standards/E308.htm) tables for the CIE 1931 2° observer,
//! normalized so that the Y (luminance) value is 100. Chromaticities are the CIE published values,
//! which round slightly differently from a projection of the XYZ table.

use chromaticity::Chromaticity;
use coord::Coord;

/// A listing of the supported CIE standard illuminants, standards that describe a particular set of
/// lighting conditions. D65 is the usual reference for screens, D50 for print.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Illuminant {
    /// Incandescent tungsten light, about 2856 K.
    A,
    /// Average daylight, a filtered version of A. Superseded by the D series.
    C,
    /// Horizon daylight, about 5003 K.
    D50,
    /// Mid-morning daylight, about 5503 K.
    D55,
    /// Noon daylight, about 6504 K.
    D65,
    /// North sky daylight, about 7504 K.
    D75,
    /// The equal-energy radiator: a flat spectrum, sitting at the centre of the diagram.
    E,
    /// Represents a light of any given hue, as an array [X, Y, Z] in CIE 1931 space.
    Custom([f64; 3]),
}

/// An array of the standard illuminants, in the same order as the enum and the tables below.
pub static ILLUMINANTS: [Illuminant; 7] = [
    Illuminant::A,
    Illuminant::C,
    Illuminant::D50,
    Illuminant::D55,
    Illuminant::D65,
    Illuminant::D75,
    Illuminant::E,
];

/// White points of the standard illuminants as X, Y, Z, with Y normalized to 100. Rows follow the
/// order of [`ILLUMINANTS`](static.ILLUMINANTS.html).
pub static ILLUMINANT_WHITE_POINTS: [[f64; 3]; 7] = [
    [109.850, 100.000, 35.585],
    [98.074, 100.000, 118.232],
    [96.422, 100.000, 82.521],
    [95.682, 100.000, 92.149],
    [95.047, 100.000, 108.883],
    [94.972, 100.000, 122.638],
    [100.000, 100.000, 100.000],
];

/// CIE 1931 2° chromaticity coordinates of the standard illuminants, in the same order.
pub static ILLUMINANT_CHROMATICITIES: [[f64; 2]; 7] = [
    [0.44757, 0.40745],
    [0.31006, 0.31616],
    [0.34570, 0.35850],
    [0.33243, 0.34744],
    [0.31270, 0.32900],
    [0.29903, 0.31488],
    [1.0 / 3.0, 1.0 / 3.0],
];

impl Illuminant {
    /// Gets the XYZ coordinates of the white point value of the illuminant, normalized so that Y is
    /// 100. Custom illuminants are rescaled the same way.
    /// # Example
    /// ```
    /// # use locus::illuminants::Illuminant;
    /// assert_eq!(Illuminant::D65.white_point(), [95.047, 100., 108.883]);
    /// assert_eq!(Illuminant::Custom([0.5, 0.5, 0.25]).white_point(), [100., 100., 50.]);
    /// ```
    pub fn white_point(&self) -> [f64; 3] {
        match *self {
            Illuminant::A => ILLUMINANT_WHITE_POINTS[0],
            Illuminant::C => ILLUMINANT_WHITE_POINTS[1],
            Illuminant::D50 => ILLUMINANT_WHITE_POINTS[2],
            Illuminant::D55 => ILLUMINANT_WHITE_POINTS[3],
            Illuminant::D65 => ILLUMINANT_WHITE_POINTS[4],
            Illuminant::D75 => ILLUMINANT_WHITE_POINTS[5],
            Illuminant::E => ILLUMINANT_WHITE_POINTS[6],
            Illuminant::Custom(xyz) => [
                xyz[0] * 100.0 / xyz[1],
                100.0,
                xyz[2] * 100.0 / xyz[1],
            ],
        }
    }

    /// Gets the chromaticity of the illuminant: the achromatic point on the diagram when viewing
    /// colours under this light. Custom illuminants are projected from their XYZ value.
    /// # Example
    /// ```
    /// # use locus::illuminants::Illuminant;
    /// let d65 = Illuminant::D65.chromaticity();
    /// assert_eq!((d65.x, d65.y), (0.31270, 0.32900));
    /// ```
    pub fn chromaticity(&self) -> Chromaticity {
        let xy = match *self {
            Illuminant::A => ILLUMINANT_CHROMATICITIES[0],
            Illuminant::C => ILLUMINANT_CHROMATICITIES[1],
            Illuminant::D50 => ILLUMINANT_CHROMATICITIES[2],
            Illuminant::D55 => ILLUMINANT_CHROMATICITIES[3],
            Illuminant::D65 => ILLUMINANT_CHROMATICITIES[4],
            Illuminant::D75 => ILLUMINANT_CHROMATICITIES[5],
            Illuminant::E => ILLUMINANT_CHROMATICITIES[6],
            Illuminant::Custom(xyz) => return Chromaticity::from_xyz(xyz.into()),
        };
        xy.into()
    }
}

impl From<Illuminant> for Coord {
    fn from(illuminant: Illuminant) -> Coord {
        illuminant.white_point().into()
    }
}

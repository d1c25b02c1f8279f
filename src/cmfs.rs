//! This module provides colour-matching functions: the tabulated responses of a standard observer
//! to monochromatic light of each wavelength. Projected onto the chromaticity diagram, the samples
//! trace out the spectral locus that dominant wavelength and purity are measured against.
//!
//! Tables are read from CSV files with a `wavelength,xbar,ybar,zbar` header. The CIE 1931 2° standard
//! observer from 360 nm to 830 nm in 1 nm steps ships with the crate and is parsed on first use.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chromaticity::Chromaticity;
use coord::Coord;
use csv;

static CIE_1931_2_DEGREE_CSV: &'static str = include_str!("../data/cie-1931-2-degree.csv");

lazy_static! {
    static ref CIE_1931_2_DEGREE: ColorMatchingFunctions = {
        let data = ColorMatchingFunctions::from_reader(
            "CIE 1931 2 Degree Standard Observer",
            CIE_1931_2_DEGREE_CSV.as_bytes(),
        );
        // we should panic on bad data: this file is supplied by us!
        match data {
            Ok(cmfs) => cmfs,
            Err(e) => panic!("bundled CIE 1931 spectral data could not be read: {}", e),
        }
    };
}

#[derive(Debug, Serialize, Deserialize)]
struct Record {
    wavelength: f64,
    xbar: f64,
    ybar: f64,
    zbar: f64,
}

/// Errors that can come up when building a table of colour-matching functions.
#[derive(Debug)]
pub enum SpectralDataError {
    /// The CSV data couldn't be read or a row couldn't be parsed into a wavelength and three
    /// samples.
    Read(csv::Error),
    /// The table has no samples at all.
    Empty,
    /// The number of wavelengths and the number of samples differ.
    MismatchedLengths,
    /// The wavelengths are not strictly increasing: the wavelength at this index is not larger than
    /// the one before it.
    UnsortedWavelengths {
        /// Index of the first out-of-order wavelength.
        index: usize,
    },
}

impl fmt::Display for SpectralDataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SpectralDataError::Read(ref e) => write!(f, "could not read spectral data: {}", e),
            SpectralDataError::Empty => write!(f, "spectral data has no samples"),
            SpectralDataError::MismatchedLengths => {
                write!(f, "spectral data has different numbers of wavelengths and samples")
            }
            SpectralDataError::UnsortedWavelengths { index } => write!(
                f,
                "spectral data wavelengths are not strictly increasing at index {}",
                index
            ),
        }
    }
}

impl Error for SpectralDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            SpectralDataError::Read(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for SpectralDataError {
    fn from(e: csv::Error) -> SpectralDataError {
        SpectralDataError::Read(e)
    }
}

/// A standard observer's colour-matching functions: tristimulus samples `x̄`, `ȳ`, `z̄` at a strictly
/// increasing sequence of wavelengths, in nanometers. Each sample is stored as a [`Coord`] with the
/// three functions on the `x`, `y`, and `z` axes.
///
/// # Example
/// ```
/// # use locus::cmfs::ColorMatchingFunctions;
/// let cmfs = ColorMatchingFunctions::cie_1931_2_degree();
/// assert_eq!(cmfs.len(), 471);
/// assert_eq!(cmfs.wavelengths()[144], 504.);
/// // the locus starts in the violet corner of the diagram
/// let violet = cmfs.chromaticities()[0];
/// assert!(violet.x > 0.17 && violet.y < 0.01);
/// ```
///
/// [`Coord`]: ../coord/struct.Coord.html
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMatchingFunctions {
    name: String,
    wavelengths: Vec<f64>,
    values: Vec<Coord>,
}

impl ColorMatchingFunctions {
    /// Builds a table from wavelengths and the matching tristimulus samples.
    /// # Errors
    /// Returns `SpectralDataError::Empty` for empty input, `MismatchedLengths` if the two vectors
    /// differ in length, and `UnsortedWavelengths` if the wavelengths are not strictly increasing.
    pub fn new(
        name: &str,
        wavelengths: Vec<f64>,
        values: Vec<Coord>,
    ) -> Result<ColorMatchingFunctions, SpectralDataError> {
        if wavelengths.len() != values.len() {
            return Err(SpectralDataError::MismatchedLengths);
        }
        if wavelengths.is_empty() {
            return Err(SpectralDataError::Empty);
        }
        // NaN fails this comparison as well, which is what we want
        if let Some(i) = (1..wavelengths.len()).find(|&i| !(wavelengths[i] > wavelengths[i - 1])) {
            return Err(SpectralDataError::UnsortedWavelengths { index: i });
        }
        Ok(ColorMatchingFunctions {
            name: name.to_string(),
            wavelengths,
            values,
        })
    }

    /// Reads a table from CSV data with a `wavelength,xbar,ybar,zbar` header row.
    /// # Errors
    /// Any CSV or number parsing problem becomes `SpectralDataError::Read`; the checks of
    /// [`new`](#method.new) apply to the parsed rows.
    pub fn from_reader<R: Read>(
        name: &str,
        rdr: R,
    ) -> Result<ColorMatchingFunctions, SpectralDataError> {
        let mut reader = csv::Reader::from_reader(rdr);
        let mut wavelengths = vec![];
        let mut values = vec![];
        for result in reader.deserialize() {
            let record: Record = result?;
            wavelengths.push(record.wavelength);
            values.push(Coord {
                x: record.xbar,
                y: record.ybar,
                z: record.zbar,
            });
        }
        ColorMatchingFunctions::new(name, wavelengths, values)
    }

    /// Reads a table from a CSV file. See [`from_reader`](#method.from_reader) for the format.
    pub fn from_path<P: AsRef<Path>>(
        name: &str,
        path: P,
    ) -> Result<ColorMatchingFunctions, SpectralDataError> {
        let file = File::open(path).map_err(|e| SpectralDataError::Read(e.into()))?;
        ColorMatchingFunctions::from_reader(name, file)
    }

    /// The CIE 1931 2° standard observer, 360-830 nm in 1 nm steps. Parsed once and shared.
    pub fn cie_1931_2_degree() -> &'static ColorMatchingFunctions {
        &CIE_1931_2_DEGREE
    }

    /// The name of the observer these functions describe.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sampled wavelengths, strictly increasing.
    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    /// The tristimulus samples, index-aligned with [`wavelengths`](#method.wavelengths).
    pub fn values(&self) -> &[Coord] {
        &self.values
    }

    /// The number of samples. Never zero.
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    /// The spectral locus: every sample projected onto the chromaticity diagram, in wavelength
    /// order.
    pub fn chromaticities(&self) -> Vec<Chromaticity> {
        self.values.iter().map(|&xyz| Chromaticity::from_xyz(xyz)).collect()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_bundled_cie_1931() {
        let cmfs = ColorMatchingFunctions::cie_1931_2_degree();
        assert_eq!(cmfs.name(), "CIE 1931 2 Degree Standard Observer");
        assert_eq!(cmfs.len(), 471);
        assert_eq!(cmfs.values().len(), 471);
        assert_eq!(cmfs.wavelengths()[0], 360.);
        assert_eq!(cmfs.wavelengths()[470], 830.);
        // the 5 nm tabulated values come through untouched
        let y_555 = cmfs.values()[195];
        assert_eq!(cmfs.wavelengths()[195], 555.);
        assert_eq!(y_555.y, 1.);
        // and every point is a real chromaticity
        assert!(cmfs.chromaticities().iter().all(|xy| xy.is_finite()));
    }

    #[test]
    fn test_line_of_purples_endpoints() {
        // the purple edge runs between the 360 nm and 830 nm samples, which must carry the full
        // CIE precision rather than a rounded tail
        let cmfs = ColorMatchingFunctions::cie_1931_2_degree();
        assert_eq!(cmfs.values()[0], Coord{x: 0.0001299, y: 3.917e-06, z: 0.0006061});
        assert_eq!(cmfs.values()[470], Coord{x: 1.251141e-06, y: 4.5181e-07, z: 0.});
        let xy_s = cmfs.chromaticities();
        assert!(approx_eq!(f64, xy_s[470].x, 0.7346900, epsilon = 1e-7));
        assert!(approx_eq!(f64, xy_s[470].y, 0.2653100, epsilon = 1e-7));
        assert!(approx_eq!(f64, xy_s[0].x, 0.1755602, epsilon = 1e-7));
        assert!(approx_eq!(f64, xy_s[0].y, 0.0052938, epsilon = 1e-7));
    }

    #[test]
    fn test_from_reader() {
        let data = "wavelength,xbar,ybar,zbar\n500,0.0049,0.323,0.272\n505,0.0024,0.4073,0.2123\n";
        let cmfs = ColorMatchingFunctions::from_reader("test", data.as_bytes()).unwrap();
        assert_eq!(cmfs.wavelengths(), &[500., 505.]);
        assert_eq!(cmfs.values()[1], Coord{x: 0.0024, y: 0.4073, z: 0.2123});
        let xy = cmfs.chromaticities()[0];
        assert!((xy.x - 0.0049 / 0.5999).abs() <= 1e-12);
    }

    #[test]
    fn test_empty_table() {
        let data = "wavelength,xbar,ybar,zbar\n";
        match ColorMatchingFunctions::from_reader("empty", data.as_bytes()) {
            Err(SpectralDataError::Empty) => {}
            other => panic!("expected Empty, got {:?}", other),
        }
    }

    #[test]
    fn test_unsorted_wavelengths() {
        let data = "wavelength,xbar,ybar,zbar\n500,0.1,0.2,0.3\n510,0.1,0.2,0.3\n505,0.1,0.2,0.3\n";
        match ColorMatchingFunctions::from_reader("unsorted", data.as_bytes()) {
            Err(SpectralDataError::UnsortedWavelengths { index }) => assert_eq!(index, 2),
            other => panic!("expected UnsortedWavelengths, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_row() {
        let data = "wavelength,xbar,ybar,zbar\n500,0.1,green,0.3\n";
        let err = ColorMatchingFunctions::from_reader("bad", data.as_bytes()).unwrap_err();
        match err {
            SpectralDataError::Read(_) => assert!(err.source().is_some()),
            other => panic!("expected Read, got {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_lengths() {
        let err = ColorMatchingFunctions::new("short", vec![400., 410.], vec![Coord{x: 1., y: 1., z: 1.}]);
        match err {
            Err(SpectralDataError::MismatchedLengths) => {}
            other => panic!("expected MismatchedLengths, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = ColorMatchingFunctions::from_path("missing", "/nonexistent/cmfs.csv").unwrap_err();
        assert!(err.to_string().starts_with("could not read spectral data"));
    }
}

use thiserror::Error;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 1e-9;

/// Errors raised while parsing or rendering WKT geometries
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("WKT input is empty")]
    EmptyInput,
    #[error("mal-formed WKT, {0}")]
    MalformedWkt(String),
    #[error("invalid number in coordinate: '{0}'")]
    NumericFormat(String),
    #[error("unsupported geometry type: {0}")]
    UnsupportedType(String),
}

/// Result alias used throughout the crate
pub type GeomResult<T> = Result<T, GeometryError>;

/// Coordinate dimensionality declared by a WKT prefix.
///
/// Derived once per WKT text from the trailing `Z` / `M` / `ZM` marker and
/// shared by every coordinate in that text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dims {
    pub has_z: bool,
    pub has_m: bool,
}

impl Dims {
    /// Number of numeric words a coordinate group must contain
    pub fn coord_count(&self) -> usize {
        2 + self.has_z as usize + self.has_m as usize
    }

    /// Keyword tag emitted after the geometry keyword on output
    pub fn tag(&self) -> &'static str {
        match (self.has_z, self.has_m) {
            (false, false) => "",
            (true, false) => "Z",
            (false, true) => "M",
            (true, true) => "ZM",
        }
    }

    /// Human-readable word arrangement, used in coordinate arity errors
    pub fn arrangement(&self) -> &'static str {
        match (self.has_z, self.has_m) {
            (false, false) => "x and y",
            (true, false) => "x y z",
            (false, true) => "x y m",
            (true, true) => "x y z m",
        }
    }
}

/// Render a WKT keyword with the dimensionality tag, e.g. `POINT` / `POINT Z`
pub(crate) fn keyword_with_tag(keyword: &str, dims: Dims) -> String {
    let tag = dims.tag();
    if tag.is_empty() {
        String::from(keyword)
    } else {
        format!("{keyword} {tag}")
    }
}

/// Trait with common functionality for all geometric objects
pub trait GeometricObject {
    fn wkt(&self) -> String;
}

/// Macro to implement the Display trait for Geometric Object types
macro_rules! display_for_geom {
    ($type:ty) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.wkt())
            }
        }
    };
}

pub(crate) use display_for_geom;

/// Return whether two numbers are approximately equal.
///
/// Determines if the given numbers are close with the given absolute and relative tolerances.
///
/// Examples:
/// ```rust
/// use wktlib;
///
/// println!("Close: {}", wktlib::is_close(0.0, 0.0, 1e-10, 1e-10));
/// ```
pub fn is_close(a: f64, b: f64, rtol: f64, atol: f64) -> bool {
    assert!(rtol >= 0.0 && atol >= 0.0);
    let scale = a.abs().max(b.abs());
    (a - b).abs() < (atol + rtol * scale)
}

/// Determine if two values are approximately equal to one another.
///
/// Determine if two floating point values are approximately equal. This is equivalent to calling
/// `is_close` with relative tolerance of `1e-9` and absolute tolerance of `1e-12`.
///
/// Example:
/// ```rust
/// use wktlib;
/// let x1 = 0.123;
/// let x2 = 0.123 + 1e-14;
///
/// assert!(wktlib::approx(x1, x2));
/// ```
pub fn approx(a: f64, b: f64) -> bool {
    is_close(a, b, RTOL, ATOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_counts() {
        assert_eq!(Dims::default().coord_count(), 2);

        let z = Dims {
            has_z: true,
            has_m: false,
        };
        let m = Dims {
            has_z: false,
            has_m: true,
        };
        let zm = Dims {
            has_z: true,
            has_m: true,
        };
        assert_eq!(z.coord_count(), 3);
        assert_eq!(m.coord_count(), 3);
        assert_eq!(zm.coord_count(), 4);
    }

    #[test]
    fn test_keyword_tags() {
        assert_eq!(keyword_with_tag("POINT", Dims::default()), "POINT");

        let zm = Dims {
            has_z: true,
            has_m: true,
        };
        assert_eq!(keyword_with_tag("LINESTRING", zm), "LINESTRING ZM");
    }

    #[test]
    fn test_error_messages() {
        let err = GeometryError::MalformedWkt(String::from(
            "wrong number of elements, expecting x and y",
        ));
        assert_eq!(
            err.to_string(),
            "mal-formed WKT, wrong number of elements, expecting x and y"
        );

        assert_eq!(
            GeometryError::NumericFormat(String::from("abc")).to_string(),
            "invalid number in coordinate: 'abc'"
        );
    }
}

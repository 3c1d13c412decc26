use super::core::{Dims, GeomResult, GeometryError};
use super::token::WktToken;
use super::*;
use regex::Regex;
use std::sync::OnceLock;

const KEYWORD: &str =
    r"^(point|linestring|polygon|polyhedralsurface|triangle|tin|multipoint|multilinestring|multipolygon|geometrycollection)";

static KEYWORD_RE: OnceLock<Regex> = OnceLock::new();

/// Get keyword regex once to avoid recompilation (thread-safe)
fn keyword_re() -> &'static Regex {
    KEYWORD_RE.get_or_init(|| Regex::new(KEYWORD).unwrap())
}

/// Geometry type keyword recognized in a WKT prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomType {
    None,
    Point,
    LineString,
    Polygon,
    Triangle,
    PolyhedralSurface,
    Tin,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

/// A WKT string split into its prefix and outermost parenthesized body.
///
/// The prefix (everything before the first `(`) carries the geometry type
/// keyword and the optional `Z` / `M` / `ZM` dimensionality marker; the body
/// becomes the root [`WktToken`]. Dimensionality is derived here once and
/// shared by every nested token.
pub struct WktText<'a> {
    geom_type: GeomType,
    dims: Dims,
    prefix: String,
    token: WktToken<'a>,
    has_body: bool,
}

impl<'a> WktText<'a> {
    /// Scan the prefix of a WKT string
    pub fn new(s: &'a str) -> GeomResult<Self> {
        if s.trim().is_empty() {
            return Err(GeometryError::EmptyInput);
        }

        let open = s.find('(');
        let close = s.rfind(')');
        let prefix = match open {
            Some(i) => &s[..i],
            None => s,
        };
        let prefix = prefix.trim().to_lowercase();

        // The suffix checks run independently in this order; a trailing
        // " zm" passes the last check and sets both flags.
        let mut has_z = false;
        let mut has_m = false;
        if prefix.ends_with(" z") {
            has_z = true;
        }
        if prefix.ends_with(" m") {
            has_m = true;
        }
        if prefix.ends_with(" zm") {
            has_z = true;
            has_m = true;
        }

        let geom_type = match keyword_re().find(&prefix) {
            Some(m) => match m.as_str() {
                "point" => GeomType::Point,
                "linestring" => GeomType::LineString,
                "polygon" => GeomType::Polygon,
                "polyhedralsurface" => GeomType::PolyhedralSurface,
                "triangle" => GeomType::Triangle,
                "tin" => GeomType::Tin,
                "multipoint" => GeomType::MultiPoint,
                "multilinestring" => GeomType::MultiLineString,
                "multipolygon" => GeomType::MultiPolygon,
                "geometrycollection" => GeomType::GeometryCollection,
                _ => GeomType::None,
            },
            None => GeomType::None,
        };

        let token = match (open, close) {
            (Some(i), Some(j)) if j > i => WktToken::new(s, i, j + 1),
            _ => WktToken::empty(s),
        };

        Ok(Self {
            geom_type,
            dims: Dims { has_z, has_m },
            prefix,
            token,
            has_body: open.is_some(),
        })
    }

    pub fn geom_type(&self) -> GeomType {
        self.geom_type
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn token(&self) -> &WktToken<'a> {
        &self.token
    }

    /// Whether the text contains a parenthesized body at all
    pub fn has_body(&self) -> bool {
        self.has_body
    }
}

/// Parse a WKT string and return the parsed geometry object.
///
/// Returns `Ok(None)` for text with no parenthesized body (e.g.
/// `LINESTRING EMPTY`); every structural problem in a text that does carry a
/// body is reported as an error.
///
/// Examples
/// ```rust
/// use wktlib::serialization::{self, GeomWrapper};
///
/// // Instantiate a point from string
/// if let Ok(Some(GeomWrapper::Point(pt))) = serialization::parse_wkt("POINT (30 10)") {
///     println!("My point is: {pt:?}");
/// }
///
/// // Instantiate a polygon
/// match serialization::parse_wkt("POLYGON ((0 0, 0 1, 1 1, 0 0))") {
///     Ok(Some(GeomWrapper::Polygon(poly))) => println!("I got a polygon! {poly:?}"),
///     Ok(_) => println!("This is weird..."),
///     _ => panic!("Failed"),
/// }
/// ```
pub fn parse_wkt(raw: &str) -> GeomResult<Option<GeomWrapper>> {
    let wkt = WktText::new(raw)?;
    log::trace!(
        "scanned WKT prefix: type {:?}, dims {:?}",
        wkt.geom_type,
        wkt.dims
    );
    if !wkt.has_body {
        return Ok(None);
    }

    let token = &wkt.token;
    let dims = wkt.dims;
    let geom = match wkt.geom_type {
        GeomType::Point => GeomWrapper::Point(build_point(token, dims)?),
        GeomType::LineString => GeomWrapper::LineString(build_linestring(token, dims)?),
        GeomType::Polygon | GeomType::Triangle => {
            GeomWrapper::Polygon(build_polygon(token, dims)?)
        }
        GeomType::PolyhedralSurface => {
            GeomWrapper::PolyhedralSurface(build_surface(token, dims)?)
        }
        GeomType::MultiPoint => GeomWrapper::MultiPoint(build_multipoint(token, dims)?),
        GeomType::MultiLineString => {
            GeomWrapper::MultiLineString(build_multilinestring(token, dims)?)
        }
        GeomType::MultiPolygon | GeomType::Tin => {
            GeomWrapper::MultiPolygon(build_multipolygon(token, dims)?)
        }
        GeomType::GeometryCollection => GeomWrapper::Collection(build_collection(token)?),
        GeomType::None => {
            return Err(GeometryError::MalformedWkt(format!(
                "unrecognized geometry type in '{}'",
                wkt.prefix
            )));
        }
    };
    Ok(Some(geom))
}

/// Render a geometry object as WKT text.
///
/// Examples
/// ```rust
/// use wktlib::{LineString, Point};
/// use wktlib::serialization::{self, GeomWrapper};
///
/// let line = GeomWrapper::LineString(LineString::new(vec![
///     Point::new(30.0, 10.0),
///     Point::new(10.0, 30.0),
/// ]));
/// assert_eq!(serialization::to_wkt(&line).unwrap(), "LINESTRING (30 10,10 30)");
/// ```
pub fn to_wkt(geom: &GeomWrapper) -> GeomResult<String> {
    match geom {
        GeomWrapper::Point(g) => Ok(g.wkt()),
        GeomWrapper::LineString(g) => Ok(g.wkt()),
        GeomWrapper::Polygon(g) => Ok(g.wkt()),
        GeomWrapper::MultiPoint(g) => Ok(g.wkt()),
        GeomWrapper::MultiLineString(g) => Ok(g.wkt()),
        GeomWrapper::MultiPolygon(g) => Ok(g.wkt()),
        GeomWrapper::PolyhedralSurface(g) => Ok(g.wkt()),
        GeomWrapper::Collection(_) => Err(GeometryError::UnsupportedType(String::from(
            "geometry collections to well known text is not yet supported",
        ))),
    }
}

/// Build one point from a coordinate group token
fn build_point(token: &WktToken, dims: Dims) -> GeomResult<Point> {
    let words: Vec<f64> = token.coords().collect::<GeomResult<Vec<f64>>>()?;
    if words.len() != dims.coord_count() {
        return Err(GeometryError::MalformedWkt(format!(
            "wrong number of elements, expecting {}",
            dims.arrangement()
        )));
    }

    let mut point = Point::new(words[0], words[1]);
    if dims.has_z {
        point = point.with_z(words[2]);
    }
    if dims.has_m {
        point = point.with_m(words[if dims.has_z { 3 } else { 2 }]);
    }
    Ok(point)
}

fn build_points(token: &WktToken, dims: Dims) -> GeomResult<Vec<Point>> {
    token.children().map(|t| build_point(&t, dims)).collect()
}

fn build_linestring(token: &WktToken, dims: Dims) -> GeomResult<LineString> {
    Ok(LineString::new(build_points(token, dims)?))
}

fn build_ring(token: &WktToken, dims: Dims) -> GeomResult<Ring> {
    Ok(Ring::new(build_points(token, dims)?))
}

fn build_polygon(token: &WktToken, dims: Dims) -> GeomResult<Polygon> {
    let rings = token
        .children()
        .map(|t| build_ring(&t, dims))
        .collect::<GeomResult<Vec<Ring>>>()?;
    Ok(Polygon::new(rings))
}

/// Tolerant of both `(x y)` and bare `x y` member forms; the token
/// constructor strips the optional parens.
fn build_multipoint(token: &WktToken, dims: Dims) -> GeomResult<MultiPoint> {
    Ok(MultiPoint::new(build_points(token, dims)?))
}

fn build_multilinestring(token: &WktToken, dims: Dims) -> GeomResult<MultiLineString> {
    let lines = token
        .children()
        .map(|t| build_linestring(&t, dims))
        .collect::<GeomResult<Vec<LineString>>>()?;
    Ok(MultiLineString::new(lines))
}

fn build_multipolygon(token: &WktToken, dims: Dims) -> GeomResult<MultiPolygon> {
    let polygons = token
        .children()
        .map(|t| build_polygon(&t, dims))
        .collect::<GeomResult<Vec<Polygon>>>()?;
    Ok(MultiPolygon::new(polygons))
}

fn build_surface(token: &WktToken, dims: Dims) -> GeomResult<PolyhedralSurface> {
    let mut patches = Vec::new();
    for patch_token in token.children() {
        let rings = patch_token
            .children()
            .map(|t| build_ring(&t, dims))
            .collect::<GeomResult<Vec<Ring>>>()?;
        patches.push(SurfacePatch::from_rings(rings));
    }
    Ok(PolyhedralSurface::new(patches))
}

/// Each member is re-scanned from scratch as an independent WKT fragment,
/// with its own prefix and dimensionality.
fn build_collection(token: &WktToken) -> GeomResult<Vec<GeomWrapper>> {
    let mut members = Vec::new();
    for child in token.children() {
        match parse_wkt(child.text())? {
            Some(geom) => members.push(geom),
            None => {
                return Err(GeometryError::MalformedWkt(String::from(
                    "geometry collection member has no body",
                )));
            }
        }
    }
    Ok(members)
}

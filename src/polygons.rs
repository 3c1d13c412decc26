use super::core::{Dims, GeometricObject, display_for_geom, keyword_with_tag};
use super::points::{Point, coord_group};

/// A closed boundary of a polygon face.
///
/// Closure (first point equal to last) and orientation are not checked here;
/// topological validity is the concern of whatever geometry engine consumes
/// the parsed value.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub points: Vec<Point>,
}

/// Represents a polygon as an ordered sequence of rings.
///
/// The first ring is the outer boundary, any following rings are holes. A
/// polygon carrying several disjoint outer rings still renders as `POLYGON`;
/// WKT has no single-geometry form for that shape and no split into a
/// multipolygon is attempted.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub rings: Vec<Ring>,
}

/// A collection of polygons
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPolygon {
    pub polygons: Vec<Polygon>,
}

impl Ring {
    /// Instantiate a ring from a vector of points
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub(crate) fn body(&self) -> String {
        coord_group(&self.points)
    }
}

impl Polygon {
    /// Instantiate a polygon from its rings
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    /// Dimensionality of the polygon, read from the first coordinate
    pub fn dims(&self) -> Dims {
        self.rings
            .first()
            .and_then(|r| r.points.first())
            .map(Point::dims)
            .unwrap_or_default()
    }

    pub(crate) fn body(&self) -> String {
        let mut out = String::from("(");
        for ring in &self.rings {
            out.push_str(&ring.body());
            out.push(',');
        }
        if out.ends_with(',') {
            out.pop();
        }
        out.push(')');
        out
    }
}

impl GeometricObject for Polygon {
    /// WKT representation of the polygon
    fn wkt(&self) -> String {
        format!("{} {}", keyword_with_tag("POLYGON", self.dims()), self.body())
    }
}

display_for_geom!(Polygon);

impl MultiPolygon {
    /// Instantiate a new collection of polygons
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn dims(&self) -> Dims {
        self.polygons.first().map(Polygon::dims).unwrap_or_default()
    }

    pub(crate) fn body(&self) -> String {
        let mut out = String::from("(");
        for poly in &self.polygons {
            out.push_str(&poly.body());
            out.push(',');
        }
        if out.ends_with(',') {
            out.pop();
        }
        out.push(')');
        out
    }
}

impl GeometricObject for MultiPolygon {
    /// WKT representation of the collection
    fn wkt(&self) -> String {
        format!(
            "{} {}",
            keyword_with_tag("MULTIPOLYGON", self.dims()),
            self.body()
        )
    }
}

display_for_geom!(MultiPolygon);

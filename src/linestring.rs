use super::core::{Dims, GeometricObject, display_for_geom, keyword_with_tag};
use super::points::{Point, coord_group};

/// Represents a sequence of line segments
#[derive(Clone, Debug, PartialEq)]
pub struct LineString {
    pub points: Vec<Point>,
}

/// A collection of line strings
#[derive(Clone, Debug, PartialEq)]
pub struct MultiLineString {
    pub lines: Vec<LineString>,
}

impl LineString {
    /// Instantiate a new LineString from a vector of points
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Get the total number of vertices in the linestring.
    pub fn total_vertices(&self) -> usize {
        self.points.len()
    }

    /// Dimensionality of the linestring, read from the first point
    pub fn dims(&self) -> Dims {
        self.points.first().map(Point::dims).unwrap_or_default()
    }

    pub(crate) fn body(&self) -> String {
        coord_group(&self.points)
    }
}

impl GeometricObject for LineString {
    /// WKT representation of the LineString
    fn wkt(&self) -> String {
        format!("{} {}", keyword_with_tag("LINESTRING", self.dims()), self.body())
    }
}

display_for_geom!(LineString);

impl MultiLineString {
    /// Instantiate a new collection of linestrings
    pub fn new(lines: Vec<LineString>) -> Self {
        Self { lines }
    }

    pub fn dims(&self) -> Dims {
        self.lines.first().map(LineString::dims).unwrap_or_default()
    }

    pub(crate) fn body(&self) -> String {
        let mut out = String::from("(");
        for line in &self.lines {
            out.push_str(&line.body());
            out.push(',');
        }
        if out.ends_with(',') {
            out.pop();
        }
        out.push(')');
        out
    }
}

impl GeometricObject for MultiLineString {
    /// WKT representation of the collection
    fn wkt(&self) -> String {
        format!(
            "{} {}",
            keyword_with_tag("MULTILINESTRING", self.dims()),
            self.body()
        )
    }
}

display_for_geom!(MultiLineString);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linestring_wkt() {
        let ls = LineString::new(vec![
            Point::new(30.0, 10.0),
            Point::new(10.0, 30.0),
            Point::new(40.0, 40.0),
        ]);
        assert_eq!(ls.total_vertices(), 3);
        assert_eq!(ls.wkt(), "LINESTRING (30 10,10 30,40 40)");
    }

    #[test]
    fn test_empty_linestring_wkt() {
        let ls = LineString::new(Vec::new());
        assert_eq!(ls.wkt(), "LINESTRING ()");
    }

    #[test]
    fn test_multilinestring_wkt() {
        let mls = MultiLineString::new(vec![
            LineString::new(vec![
                Point::new(10.0, 10.0),
                Point::new(20.0, 20.0),
                Point::new(10.0, 40.0),
            ]),
            LineString::new(vec![
                Point::new(40.0, 40.0),
                Point::new(30.0, 30.0),
            ]),
        ]);
        assert_eq!(
            mls.wkt(),
            "MULTILINESTRING ((10 10,20 20,10 40),(40 40,30 30))"
        );
    }

    #[test]
    fn test_zm_tagging() {
        let ls = LineString::new(vec![
            Point::new(1.0, 2.0).with_z(3.0),
            Point::new(4.0, 5.0).with_z(6.0),
        ]);
        assert_eq!(ls.wkt(), "LINESTRING Z (1 2 3,4 5 6)");
    }
}

use super::core::{self, Dims, GeometricObject, display_for_geom, keyword_with_tag};

/// A single Point on the plane, optionally carrying Z and/or M components
///
/// Examples
/// ```rust
/// use wktlib::Point;
/// let my_point = Point::new(0.2, -7.9);
/// let (x, y) = my_point.coords();
/// let with_elevation = Point::new(0.2, -7.9).with_z(120.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

/// A simple collection of points
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPoint {
    pub points: Vec<Point>,
}

impl Point {
    /// Instantiate a new 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// Attach an elevation component
    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Attach a measure component
    pub fn with_m(mut self, m: f64) -> Self {
        self.m = Some(m);
        self
    }

    /// Get the X and Y coordinates as a tuple
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Dimensionality carried by this point
    pub fn dims(&self) -> Dims {
        Dims {
            has_z: self.z.is_some(),
            has_m: self.m.is_some(),
        }
    }

    /// Return true if the point is approximately equal to other.
    ///
    /// Components present on one side but absent on the other are a mismatch.
    pub fn is_close(&self, other: &Point) -> bool {
        core::approx(self.x, other.x)
            && core::approx(self.y, other.y)
            && opt_close(self.z, other.z)
            && opt_close(self.m, other.m)
    }

    /// Space-separated numeric words in X Y Z M order
    pub(crate) fn words(&self) -> String {
        let mut out = format!("{} {}", self.x, self.y);
        if let Some(z) = self.z {
            out.push_str(&format!(" {z}"));
        }
        if let Some(m) = self.m {
            out.push_str(&format!(" {m}"));
        }
        out
    }
}

fn opt_close(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => core::approx(x, y),
        _ => false,
    }
}

impl GeometricObject for Point {
    /// WKT representation of the point
    fn wkt(&self) -> String {
        format!("{} ({})", keyword_with_tag("POINT", self.dims()), self.words())
    }
}

display_for_geom!(Point);

impl MultiPoint {
    /// Instantiate a multipoint collection
    ///
    /// Example
    /// ```rust
    /// use wktlib::{MultiPoint, Point};
    /// let my_points = MultiPoint::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0)]);
    /// ```
    pub fn new(pts: Vec<Point>) -> Self {
        Self { points: pts }
    }

    /// Dimensionality of the collection, read from the first point
    pub fn dims(&self) -> Dims {
        self.points.first().map(Point::dims).unwrap_or_default()
    }

    pub(crate) fn body(&self) -> String {
        coord_group(&self.points)
    }
}

impl GeometricObject for MultiPoint {
    /// WKT representation of the multipoint collection
    fn wkt(&self) -> String {
        format!("{} {}", keyword_with_tag("MULTIPOINT", self.dims()), self.body())
    }
}

display_for_geom!(MultiPoint);

/// Render a sequence of points as one parenthesized coordinate list
pub(crate) fn coord_group(points: &[Point]) -> String {
    let mut out = String::from("(");
    for pt in points {
        out.push_str(&pt.words());
        out.push(',');
    }
    if out.ends_with(',') {
        out.pop();
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_wkt() {
        let pt = Point::new(30.0, 10.0);
        assert_eq!(pt.wkt(), "POINT (30 10)");
        assert_eq!(pt.to_string(), "POINT (30 10)");

        let pt_z = Point::new(1.0, 2.0).with_z(3.0);
        assert_eq!(pt_z.wkt(), "POINT Z (1 2 3)");

        let pt_m = Point::new(1.0, 2.0).with_m(3.0);
        assert_eq!(pt_m.wkt(), "POINT M (1 2 3)");

        let pt_zm = Point::new(1.0, 2.0).with_z(3.0).with_m(4.0);
        assert_eq!(pt_zm.wkt(), "POINT ZM (1 2 3 4)");
    }

    #[test]
    fn test_dims() {
        assert_eq!(Point::new(0.0, 0.0).dims(), Dims::default());

        let zm = Point::new(0.0, 0.0).with_z(1.0).with_m(2.0).dims();
        assert!(zm.has_z && zm.has_m);
        assert_eq!(zm.coord_count(), 4);
    }

    #[test]
    fn test_close_pts() {
        let p1 = Point::new(20.0, 20.0);
        let p2 = Point::new(20.0 + 1e-7, 20.0);
        let p3 = Point::new(20.0 + 1e-12, 20.0 - 1e-12);

        assert!(!p1.is_close(&p2));
        assert!(p1.is_close(&p3));

        // A 2D point never matches its Z-carrying twin
        assert!(!p1.is_close(&p1.with_z(0.0)));
        assert!(p1.with_z(5.0).is_close(&p1.with_z(5.0)));
    }

    #[test]
    fn test_multipoint_wkt() {
        let mp = MultiPoint::new(vec![
            Point::new(10.0, 40.0),
            Point::new(40.0, 30.0),
            Point::new(20.0, 20.0),
            Point::new(30.0, 10.0),
        ]);
        assert_eq!(mp.wkt(), "MULTIPOINT (10 40,40 30,20 20,30 10)");

        let empty = MultiPoint::new(Vec::new());
        assert_eq!(empty.wkt(), "MULTIPOINT ()");
    }
}

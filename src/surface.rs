use super::core::{Dims, GeometricObject, display_for_geom, keyword_with_tag};
use super::points::Point;
use super::polygons::Ring;

/// Role of a ring inside a surface patch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingRole {
    Outer,
    Inner,
}

/// A ring together with its role inside the enclosing patch
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceRing {
    pub role: RingRole,
    pub ring: Ring,
}

/// One face of a polyhedral surface.
///
/// Roles are positional: the first ring of a patch is the outer boundary,
/// every following ring an inner one.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfacePatch {
    pub rings: Vec<SurfaceRing>,
}

/// A surface assembled from polygonal patches
#[derive(Clone, Debug, PartialEq)]
pub struct PolyhedralSurface {
    pub patches: Vec<SurfacePatch>,
}

impl SurfacePatch {
    /// Build a patch from plain rings, assigning roles by position
    pub fn from_rings(rings: Vec<Ring>) -> Self {
        let rings = rings
            .into_iter()
            .enumerate()
            .map(|(i, ring)| SurfaceRing {
                role: if i == 0 { RingRole::Outer } else { RingRole::Inner },
                ring,
            })
            .collect();
        Self { rings }
    }

    pub(crate) fn body(&self) -> String {
        let mut out = String::from("(");
        for sr in &self.rings {
            out.push_str(&sr.ring.body());
            out.push(',');
        }
        if out.ends_with(',') {
            out.pop();
        }
        out.push(')');
        out
    }
}

impl PolyhedralSurface {
    /// Instantiate a surface from its patches
    pub fn new(patches: Vec<SurfacePatch>) -> Self {
        Self { patches }
    }

    /// Dimensionality of the surface, read from the first coordinate
    pub fn dims(&self) -> Dims {
        self.patches
            .first()
            .and_then(|p| p.rings.first())
            .and_then(|sr| sr.ring.points.first())
            .map(Point::dims)
            .unwrap_or_default()
    }

    pub(crate) fn body(&self) -> String {
        let mut out = String::from("(");
        for patch in &self.patches {
            out.push_str(&patch.body());
            out.push(',');
        }
        if out.ends_with(',') {
            out.pop();
        }
        out.push(')');
        out
    }
}

impl GeometricObject for PolyhedralSurface {
    /// WKT representation of the surface
    fn wkt(&self) -> String {
        format!(
            "{} {}",
            keyword_with_tag("POLYHEDRALSURFACE", self.dims()),
            self.body()
        )
    }
}

display_for_geom!(PolyhedralSurface);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_by_position() {
        let patch = SurfacePatch::from_rings(vec![
            Ring::new(vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 10.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 0.0),
            ]),
            Ring::new(vec![
                Point::new(2.0, 2.0),
                Point::new(2.0, 4.0),
                Point::new(4.0, 4.0),
                Point::new(2.0, 2.0),
            ]),
        ]);
        assert_eq!(patch.rings[0].role, RingRole::Outer);
        assert_eq!(patch.rings[1].role, RingRole::Inner);
    }

    #[test]
    fn test_surface_wkt() {
        let surface = PolyhedralSurface::new(vec![
            SurfacePatch::from_rings(vec![Ring::new(vec![
                Point::new(0.0, 0.0).with_z(0.0),
                Point::new(0.0, 0.0).with_z(1.0),
                Point::new(0.0, 1.0).with_z(1.0),
                Point::new(0.0, 0.0).with_z(0.0),
            ])]),
            SurfacePatch::from_rings(vec![Ring::new(vec![
                Point::new(0.0, 0.0).with_z(0.0),
                Point::new(0.0, 1.0).with_z(0.0),
                Point::new(1.0, 1.0).with_z(0.0),
                Point::new(0.0, 0.0).with_z(0.0),
            ])]),
        ]);
        assert_eq!(
            surface.wkt(),
            "POLYHEDRALSURFACE Z (((0 0 0,0 0 1,0 1 1,0 0 0)),((0 0 0,0 1 0,1 1 0,0 0 0)))"
        );
    }
}

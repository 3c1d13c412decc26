use super::*;
pub mod token;
pub mod wkt;

pub use wkt::{parse_wkt, to_wkt};

/// Wrapper for geometry objects obtained from parsing serialized input.
///
/// `TRIANGLE` input decodes as [`Polygon`] and `TIN` as [`MultiPolygon`];
/// both keywords map onto the same structural builders.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomWrapper {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    PolyhedralSurface(PolyhedralSurface),
    Collection(Vec<GeomWrapper>),
}

use super::serialization::*;
use std::fs::File;
use std::io::Write;

/// Parse an input string and print some details about the shape
pub fn parse_show_detail(input: String) -> Result<(), String> {
    match parse_wkt(&input) {
        Err(e) => {
            log::debug!("Failed to parse WKT input: {e}");
            Err(format!("Failed to parse WKT: {}", e))
        }
        Ok(None) => {
            println!("The text declares no geometry body.");
            Ok(())
        }
        Ok(Some(GeomWrapper::Point(pt))) => {
            let (x, y) = pt.coords();
            println!("Parsed a Geometry of Type Point!");
            println!("The point coordinates are: ({x}, {y})");
            if let Some(z) = pt.z {
                println!("The point elevation is: {z}");
            }
            if let Some(m) = pt.m {
                println!("The point measure is: {m}");
            }
            Ok(())
        }
        Ok(Some(GeomWrapper::MultiPoint(mp))) => {
            println!("Parsed a Geometry of Type MultiPoint!");
            println!("The multipoint contains {} total points.", mp.points.len());
            println!("Raw value: {mp:?}");
            Ok(())
        }
        Ok(Some(GeomWrapper::LineString(ls))) => {
            println!("Parsed a Geometry of Type LineString!");
            println!("The linestring contains {} total vertices.", ls.total_vertices());
            println!("Raw value: {ls:?}");
            Ok(())
        }
        Ok(Some(GeomWrapper::MultiLineString(mls))) => {
            println!("Parsed a Geometry of Type MultiLineString!");
            println!("The collection contains {} total linestrings.", mls.lines.len());
            Ok(())
        }
        Ok(Some(GeomWrapper::Polygon(poly))) => {
            println!("Parsed a Geometry of Type Polygon!");
            println!("The polygon contains {} total rings.", poly.rings.len());
            println!("Raw value: {poly:?}");
            Ok(())
        }
        Ok(Some(GeomWrapper::MultiPolygon(mp))) => {
            println!("Parsed a Geometry of Type MultiPolygon!");
            println!("The collection contains {} total polygons.", mp.polygons.len());
            Ok(())
        }
        Ok(Some(GeomWrapper::PolyhedralSurface(surface))) => {
            println!("Parsed a Geometry of Type PolyhedralSurface!");
            println!("The surface contains {} total patches.", surface.patches.len());
            Ok(())
        }
        Ok(Some(GeomWrapper::Collection(members))) => {
            println!("Parsed a Geometry of Type GeometryCollection!");
            println!("The collection contains {} total members.", members.len());
            Ok(())
        }
    }
}

/// Parse the given input string and write it back in canonical WKT form,
/// optionally saving the result to a file
pub fn normalize_wkt(input: String, output_path: Option<String>) -> Result<(), String> {
    let geom = match parse_wkt(&input) {
        Err(e) => return Err(format!("Failed to parse WKT: {}", e)),
        Ok(None) => {
            return Err(String::from(
                "Nothing to write, the text declares no geometry body",
            ));
        }
        Ok(Some(g)) => g,
    };

    let canonical = match to_wkt(&geom) {
        Err(e) => {
            log::debug!("Failed to render parsed geometry: {e}");
            return Err(format!("Failed to render WKT: {}", e));
        }
        Ok(s) => s,
    };

    match output_path {
        None => {
            println!("{canonical}");
            Ok(())
        }
        Some(ref fp) => {
            let mut file = match File::create(fp) {
                Ok(f) => f,
                Err(e) => return Err(format!("Failed to create file: {}", e)),
            };
            match file.write_all(canonical.as_bytes()) {
                Err(_) => Err(String::from("Failed to write to file!")),
                Ok(_) => {
                    println!("Geometry saved to file: '{fp}'");
                    Ok(())
                }
            }
        }
    }
}

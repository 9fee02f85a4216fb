//! GPX file generation from route coordinates.
//!
//! Produces GPX 1.1 documents that [`headwind::path::RoutePath::from_gpx`] can read back.

/// Generates a GPX 1.1 XML document with a single track segment.
pub fn generate_gpx(coords: &[(f64, f64)], route_name: &str) -> Vec<u8> {
    let mut gpx = String::new();

    gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    gpx.push('\n');
    gpx.push_str(r#"<gpx version="1.1" creator="headwind-test-data""#);
    gpx.push_str(r#" xmlns="http://www.topografix.com/GPX/1/1">"#);
    gpx.push('\n');

    gpx.push_str("  <trk>\n");
    gpx.push_str(&format!("    <name>{}</name>\n", escape_xml(route_name)));
    gpx.push_str("    <trkseg>\n");
    for (lat, lon) in coords {
        gpx.push_str(&format!(
            "      <trkpt lat=\"{:.7}\" lon=\"{:.7}\"></trkpt>\n",
            lat, lon
        ));
    }
    gpx.push_str("    </trkseg>\n");
    gpx.push_str("  </trk>\n");
    gpx.push_str("</gpx>\n");

    gpx.into_bytes()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

//! Embedded ZIP gazetteer
//!
//! Centroids for a set of well-known US ZIP codes. This stands in for a
//! full geocoding dataset; anything not in the table is reported as
//! unresolvable so callers can prompt the user again.

use crate::domain::{DomainError, DomainResult, GeoPoint};
use crate::infrastructure::traits::Geocoder;

/// (zip, lat, lon) centroid rows, sorted by zip for binary search.
#[rustfmt::skip]
const ZIP_CENTROIDS: &[(&str, f64, f64)] = &[
    ("02108", 42.3575, -71.0636),   // Boston, MA
    ("02139", 42.3647, -71.1042),   // Cambridge, MA
    ("10001", 40.7506, -73.9971),   // New York, NY (Chelsea)
    ("10002", 40.7157, -73.9860),   // New York, NY (Lower East Side)
    ("10003", 40.7317, -73.9891),   // New York, NY (East Village)
    ("10029", 40.7918, -73.9441),   // New York, NY (East Harlem)
    ("11201", 40.6937, -73.9904),   // Brooklyn, NY
    ("11215", 40.6627, -73.9866),   // Brooklyn, NY (Park Slope)
    ("19103", 39.9524, -75.1745),   // Philadelphia, PA
    ("20001", 38.9109, -77.0163),   // Washington, DC
    ("20500", 38.8977, -77.0365),   // Washington, DC (White House)
    ("27514", 35.9206, -79.0459),   // Chapel Hill, NC
    ("30303", 33.7525, -84.3888),   // Atlanta, GA
    ("33130", 25.7676, -80.2036),   // Miami, FL
    ("48226", 42.3316, -83.0466),   // Detroit, MI
    ("53703", 43.0731, -89.3838),   // Madison, WI
    ("55401", 44.9833, -93.2690),   // Minneapolis, MN
    ("60601", 41.8858, -87.6181),   // Chicago, IL
    ("60614", 41.9227, -87.6533),   // Chicago, IL (Lincoln Park)
    ("70112", 29.9579, -90.0772),   // New Orleans, LA
    ("73301", 30.2240, -97.7594),   // Austin, TX
    ("75201", 32.7876, -96.7994),   // Dallas, TX
    ("77002", 29.7589, -95.3616),   // Houston, TX
    ("80202", 39.7491, -104.9973),  // Denver, CO
    ("85004", 33.4512, -112.0685),  // Phoenix, AZ
    ("87501", 35.6870, -105.9378),  // Santa Fe, NM
    ("89501", 39.5262, -119.8117),  // Reno, NV
    ("90012", 34.0614, -118.2385),  // Los Angeles, CA (Civic Center)
    ("90210", 34.0901, -118.4065),  // Beverly Hills, CA
    ("94103", 37.7726, -122.4099),  // San Francisco, CA (SoMa)
    ("94110", 37.7485, -122.4156),  // San Francisco, CA (Mission)
    ("94612", 37.8095, -122.2713),  // Oakland, CA
    ("95814", 38.5805, -121.4916),  // Sacramento, CA
    ("97204", 45.5186, -122.6740),  // Portland, OR
    ("98101", 47.6101, -122.3344),  // Seattle, WA
];

/// Geocoder backed by the embedded centroid table.
#[derive(Debug, Default)]
pub struct ZipGazetteer;

impl Geocoder for ZipGazetteer {
    fn resolve(&self, zip: &str) -> DomainResult<GeoPoint> {
        ZIP_CENTROIDS
            .binary_search_by(|(z, _, _)| z.cmp(&zip))
            .map(|idx| {
                let (_, lat, lon) = ZIP_CENTROIDS[idx];
                GeoPoint::new(lat, lon)
            })
            .map_err(|_| DomainError::UnresolvableZip(zip.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        for pair in ZIP_CENTROIDS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_resolve_known_zip() {
        let point = ZipGazetteer.resolve("10001").unwrap();
        assert!((point.lat - 40.7506).abs() < 1e-6);
    }

    #[test]
    fn test_resolve_unknown_zip() {
        assert!(matches!(
            ZipGazetteer.resolve("99999"),
            Err(DomainError::UnresolvableZip(_))
        ));
    }

    #[test]
    fn test_locate_normalizes_plus4() {
        let loc = ZipGazetteer.locate("10001-4356").unwrap();
        assert_eq!(loc.zip(), "10001");
    }
}

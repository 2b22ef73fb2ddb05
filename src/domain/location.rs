//! Geographic locations resolved from ZIP codes

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// Mean earth radius in miles, for haversine.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// A resolved geographic point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another point, in miles (haversine).
    pub fn distance_miles(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_MILES * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

/// A place derived from a postal code.
///
/// Constructed once when its owning entity is created and immutable after
/// that. Resolution from ZIP to coordinates happens at the infrastructure
/// boundary (`Geocoder`); the domain only carries the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    zip: String,
    point: GeoPoint,
}

impl Location {
    /// Build a location from an already-resolved point.
    /// `zip` must be in canonical form (see [`canonicalize_zip`]).
    pub fn new(zip: String, point: GeoPoint) -> Self {
        Self { zip, point }
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn point(&self) -> &GeoPoint {
        &self.point
    }

    /// Distance to another location, in miles. Always non-negative.
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.point.distance_miles(&other.point)
    }
}

/// Normalize a user-supplied ZIP code to its canonical 5-digit form.
///
/// Trims whitespace and truncates ZIP+4 (`10001-1234` → `10001`).
/// Anything that is not five ASCII digits after that is rejected.
pub fn canonicalize_zip(raw: &str) -> DomainResult<String> {
    let trimmed = raw.trim();
    let base = trimmed.split('-').next().unwrap_or(trimmed);
    if base.len() == 5 && base.bytes().all(|b| b.is_ascii_digit()) {
        Ok(base.to_string())
    } else {
        Err(DomainError::MalformedZip(raw.to_string()))
    }
}

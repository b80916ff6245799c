//! Coordinates, bounds, and the string forms they travel in.
//!
//! Quiz questions carry latitude/longitude as strings end to end. Parsing to
//! floats happens only here, right before a marker is placed.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Parse a latitude/longitude string pair.
///
/// Returns `None` when either side is not a finite float. Surrounding
/// whitespace is ignored.
#[must_use]
pub fn parse_lat_lng(latitude: &str, longitude: &str) -> Option<LatLng> {
    Some(LatLng { lat: parse_degrees(latitude)?, lng: parse_degrees(longitude)? })
}

fn parse_degrees(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Format a coordinate the way it is handed back to click listeners.
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    value.to_string()
}

/// Axis-aligned bounding box in degrees (south-west / north-east corners).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for an empty input.
    #[must_use]
    pub fn covering<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self { south_west: first, north_east: first };
        for p in iter {
            bounds.extend(p);
        }
        Some(bounds)
    }

    /// Grow the box to include `point`.
    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }
}

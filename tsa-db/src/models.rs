//! Query result model structs for the dashboard views.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// A coordinate-augmented province row, the unit every view derives from.
///
/// Latitude and longitude are `None` when the province is missing from the
/// static coordinate table; such rows stay in the bar and pie views but are
/// omitted from the map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProvinceRecord {
    /// Thai province name, the unique key across the whole system.
    pub province: String,
    /// Romanized province name for labels ("" when no coordinate row exists).
    pub name_en: String,
    /// Male student count.
    pub male: i64,
    /// Female student count.
    pub female: i64,
    /// Total student count as reported by the feed.
    pub total: i64,
    /// Latitude in decimal degrees, if known.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees, if known.
    pub longitude: Option<f64>,
}

impl ProvinceRecord {
    /// The (latitude, longitude) pair when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProvinceRecord;

    fn record(lat: Option<f64>, lon: Option<f64>) -> ProvinceRecord {
        ProvinceRecord {
            province: "ตรัง".to_string(),
            name_en: "Trang".to_string(),
            male: 1,
            female: 2,
            total: 3,
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn coordinates_require_both_components() {
        assert_eq!(record(Some(7.5), Some(99.6)).coordinates(), Some((7.5, 99.6)));
        assert_eq!(record(Some(7.5), None).coordinates(), None);
        assert_eq!(record(None, None).coordinates(), None);
    }
}

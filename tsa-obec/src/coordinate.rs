use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Embedded coordinate table for all 77 Thai provinces.
///
/// The OBEC feed carries no geography, so marker positions come from this
/// fixture. Provinces missing from it simply render without a map marker.
pub static COORDINATES_CSV: &str = include_str!("../../fixtures/province_coordinates.csv");

/// A province centroid from the static coordinate table.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ProvinceCoordinate {
    /// Thai province name, matching the feed's `schools_province` values
    pub province: String,
    /// Romanized province name, for labels and CLI output
    pub name_en: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl ProvinceCoordinate {
    /// Get the coordinate vector from the embedded fixture CSV.
    pub fn get_coordinate_vector() -> Vec<ProvinceCoordinate> {
        if let Ok(c) = ProvinceCoordinate::parse_coordinate_csv(COORDINATES_CSV) {
            c
        } else {
            panic!("failed to parse province coordinates csv")
        }
    }

    /// Parse a CSV string of province coordinates.
    ///
    /// Expected CSV columns: province, name_en, latitude, longitude
    pub fn parse_coordinate_csv(
        csv_object: &str,
    ) -> Result<Vec<ProvinceCoordinate>, std::io::Error> {
        let mut coordinate_list: Vec<ProvinceCoordinate> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let province = String::from(record.get(0).expect("province parse fail").trim());
            let name_en = String::from(record.get(1).expect("name_en parse fail").trim());
            let latitude = record
                .get(2)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            let longitude = record
                .get(3)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            coordinate_list.push(ProvinceCoordinate {
                province,
                name_en,
                latitude,
                longitude,
            });
        }
        Ok(coordinate_list)
    }

    /// Build a lookup map from Thai province name to (latitude, longitude).
    pub fn coordinate_map() -> HashMap<String, (f64, f64)> {
        ProvinceCoordinate::get_coordinate_vector()
            .into_iter()
            .map(|c| (c.province, (c.latitude, c.longitude)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ProvinceCoordinate;
    use std::collections::HashSet;

    #[test]
    fn test_coordinate_vector() {
        let coordinates = ProvinceCoordinate::get_coordinate_vector();
        assert_eq!(coordinates.len(), 77);

        let unique: HashSet<&str> = coordinates.iter().map(|c| c.province.as_str()).collect();
        assert_eq!(unique.len(), 77, "province names must be unique");
    }

    #[test]
    fn test_bangkok_centroid() {
        let map = ProvinceCoordinate::coordinate_map();
        let (lat, lon) = map["กรุงเทพมหานคร"];
        assert!((lat - 13.7563).abs() < 0.001);
        assert!((lon - 100.5018).abs() < 0.001);
    }

    #[test]
    fn test_all_coordinates_inside_thailand() {
        for c in ProvinceCoordinate::get_coordinate_vector() {
            assert!(
                (5.0..21.0).contains(&c.latitude),
                "{} latitude out of range: {}",
                c.name_en,
                c.latitude
            );
            assert!(
                (97.0..106.0).contains(&c.longitude),
                "{} longitude out of range: {}",
                c.name_en,
                c.longitude
            );
        }
    }

    #[test]
    fn test_parse_custom_csv() {
        let csv_data = "\
PROVINCE,NAME_EN,LATITUDE,LONGITUDE
ภูเก็ต,Phuket,7.8804,98.3923
";
        let coordinates = ProvinceCoordinate::parse_coordinate_csv(csv_data).unwrap();
        assert_eq!(coordinates.len(), 1);
        assert_eq!(coordinates[0].name_en, "Phuket");
        assert!((coordinates[0].latitude - 7.8804).abs() < f64::EPSILON);
    }
}

//! Data loading functions for populating the in-memory SQLite database.
//!
//! Coordinates come from the static CSV fixture embedded in `tsa-obec`;
//! student counts come from the OBEC feed JSON (fetched at startup or read
//! from an offline snapshot). Both loaders upsert, so reloading a newer
//! feed body replaces prior rows.

use crate::Database;
use rusqlite::params;
use tsa_obec::coordinate::ProvinceCoordinate;
use tsa_obec::province::parse_province_feed;

impl Database {
    /// Load province coordinates from a CSV string.
    ///
    /// Expected columns (with headers): `PROVINCE,NAME_EN,LATITUDE,LONGITUDE`.
    /// Typically called with [`tsa_obec::coordinate::COORDINATES_CSV`].
    pub fn load_coordinates(&self, csv_data: &str) -> anyhow::Result<()> {
        let coordinates = ProvinceCoordinate::parse_coordinate_csv(csv_data)?;
        let conn = self.conn.borrow();

        let mut count = 0u32;
        for c in &coordinates {
            conn.execute(
                "INSERT OR REPLACE INTO coordinates (province, name_en, latitude, longitude)
                 VALUES (?1, ?2, ?3, ?4)",
                params![c.province, c.name_en, c.latitude, c.longitude],
            )?;
            count += 1;
        }
        log::info!("loader: Loaded {} province coordinates", count);
        Ok(())
    }

    /// Load student counts from an OBEC feed JSON body.
    ///
    /// Rows with empty province names are dropped by the feed parser before
    /// insertion. Counts are upserted by province name.
    pub fn load_student_counts(&self, json_data: &str) -> anyhow::Result<()> {
        let counts = parse_province_feed(json_data)?;
        let conn = self.conn.borrow();

        let mut count = 0u32;
        for c in &counts {
            conn.execute(
                "INSERT OR REPLACE INTO student_counts (province, male, female, total)
                 VALUES (?1, ?2, ?3, ?4)",
                params![c.province, c.male, c.female, c.total],
            )?;
            count += 1;
        }
        log::info!("loader: Loaded {} province student counts", count);
        Ok(())
    }
}

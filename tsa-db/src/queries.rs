//! Typed query methods for retrieving joined province records.
//!
//! All queries return structs from [`crate::models`] that can be serialized
//! to JSON for the D3.js chart components. The coordinate augmentation the
//! dashboard needs is a LEFT JOIN here, so missing coordinates surface as
//! `None` rather than dropped rows.

use crate::models::ProvinceRecord;
use crate::Database;
use rusqlite::{params, OptionalExtension};

impl Database {
    /// Get every loaded province record, coordinate-augmented, ordered by
    /// province name.
    pub fn query_records(&self) -> anyhow::Result<Vec<ProvinceRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT s.province, COALESCE(c.name_en, ''), s.male, s.female, s.total,
                    c.latitude, c.longitude
             FROM student_counts s
             LEFT JOIN coordinates c ON s.province = c.province
             ORDER BY s.province",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ProvinceRecord {
                    province: row.get(0)?,
                    name_en: row.get(1)?,
                    male: row.get(2)?,
                    female: row.get(3)?,
                    total: row.get(4)?,
                    latitude: row.get(5)?,
                    longitude: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_records returned {} records", rows.len());
        Ok(rows)
    }

    /// Get a single province record by exact Thai name, if loaded.
    pub fn query_record(&self, province: &str) -> anyhow::Result<Option<ProvinceRecord>> {
        let conn = self.conn.borrow();
        let record = conn
            .query_row(
                "SELECT s.province, COALESCE(c.name_en, ''), s.male, s.female, s.total,
                        c.latitude, c.longitude
                 FROM student_counts s
                 LEFT JOIN coordinates c ON s.province = c.province
                 WHERE s.province = ?1",
                params![province],
                |row| {
                    Ok(ProvinceRecord {
                        province: row.get(0)?,
                        name_en: row.get(1)?,
                        male: row.get(2)?,
                        female: row.get(3)?,
                        total: row.get(4)?,
                        latitude: row.get(5)?,
                        longitude: row.get(6)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    /// Nationwide (male, female, total) sums across loaded provinces.
    pub fn query_total_students(&self) -> anyhow::Result<(i64, i64, i64)> {
        let conn = self.conn.borrow();
        let totals = conn.query_row(
            "SELECT COALESCE(SUM(male), 0), COALESCE(SUM(female), 0), COALESCE(SUM(total), 0)
             FROM student_counts",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;
        Ok(totals)
    }
}

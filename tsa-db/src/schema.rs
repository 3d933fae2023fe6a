//! SQL schema definitions for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// Two tables, both keyed by Thai province name:
///
/// - `coordinates` - Static province centroids (name_en, latitude, longitude)
/// - `student_counts` - Per-province male/female/total counts from the OBEC feed
///
/// Joined records are derived on demand via LEFT JOIN in
/// [`crate::Database::query_records`]; nothing is precomputed.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS coordinates (
        province TEXT PRIMARY KEY,
        name_en TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS student_counts (
        province TEXT PRIMARY KEY,
        male INTEGER NOT NULL,
        female INTEGER NOT NULL,
        total INTEGER NOT NULL
    );
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in ["coordinates", "student_counts"] {
            let count: i64 = conn
                .query_row(
                    &format!(
                        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='{}'",
                        table
                    ),
                    [],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}

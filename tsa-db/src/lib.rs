//! In-memory SQLite database layer for the student distribution dashboard.
//!
//! Loads the OBEC feed JSON and the static province coordinate CSV into an
//! in-memory SQLite database and exposes typed query methods for the
//! Dioxus/D3.js dashboard compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - Coordinate CSV embedded via `include_str!` in `tsa-obec`; feed JSON fetched
//!   at startup or embedded as an offline snapshot
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! The coordinate join happens in SQL: [`Database::query_records`] LEFT JOINs
//! `student_counts` against `coordinates`, so provinces absent from the
//! coordinate table come back with `None` latitude/longitude.
//!
//! # Usage
//!
//! ```rust
//! use tsa_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_coordinates("PROVINCE,NAME_EN,LATITUDE,LONGITUDE\nภูเก็ต,Phuket,7.8804,98.3923\n").unwrap();
//! db.load_student_counts(r#"[{"schools_province":"ภูเก็ต","totalmale":4200,"totalfemale":4100,"totalstd":8300}]"#).unwrap();
//!
//! let records = db.query_records().unwrap();
//! assert_eq!(records.len(), 1);
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding one academic year of province data.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_student_counts(
            r#"[{"schools_province":"ตาก","totalmale":10,"totalfemale":12,"totalstd":22}]"#,
        )
        .unwrap();
        let records = db2.query_records().unwrap();
        assert_eq!(records.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let records = db.query_records().unwrap();
        assert!(records.is_empty(), "New database should have no records");
    }
}

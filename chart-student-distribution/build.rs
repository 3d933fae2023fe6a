//! Build script for chart-student-distribution.
//!
//! Copies the offline feed snapshot into OUT_DIR so it can be embedded via
//! `include_str!` at compile time. The dashboard fetches the live OBEC feed
//! at startup and only falls back to this snapshot when the fetch fails.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let src_path = "../fixtures/students_snapshot.json";
    let src = Path::new(src_path);
    let dest = Path::new(&out_dir).join("students_snapshot.json");
    if src.exists() {
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
        });
    } else {
        fs::write(&dest, "").unwrap();
        println!(
            "cargo:warning=Fixture file {} not found, using empty placeholder",
            src_path
        );
    }
    println!("cargo:rerun-if-changed={}", src_path);
    println!("cargo:rerun-if-changed=build.rs");
}

//! Summary table implementation.

use log::info;
use tsa_db::Database;
use tsa_obec::coordinate::COORDINATES_CSV;
use tsa_obec::feed;
use tsa_utils::format::{format_count, percentage};
use tsa_utils::names::matches_province;

/// Print per-province student counts from a snapshot file or the live feed.
pub async fn run_summary(
    snapshot: Option<&str>,
    province: Option<&str>,
    top: usize,
) -> anyhow::Result<()> {
    let body = match snapshot {
        Some(path) => {
            info!("Reading snapshot from {}", path);
            std::fs::read_to_string(path)?
        }
        None => {
            let client = reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()?;
            feed::fetch_feed_text(&client)
                .await
                .ok_or_else(|| anyhow::anyhow!("all fetch attempts for the OBEC feed failed"))?
        }
    };

    let db = Database::new()?;
    db.load_coordinates(COORDINATES_CSV)?;
    db.load_student_counts(&body)?;
    let records = db.query_records()?;

    match province {
        Some(wanted) => {
            let record = records
                .iter()
                .find(|r| {
                    matches_province(&r.province, wanted) || matches_province(&r.name_en, wanted)
                })
                .ok_or_else(|| anyhow::anyhow!("no province matching '{}'", wanted))?;

            println!("{} ({})", record.province, record.name_en);
            println!(
                "  male:   {:>10}  ({:.1}%)",
                format_count(record.male),
                percentage(record.male, record.total)
            );
            println!(
                "  female: {:>10}  ({:.1}%)",
                format_count(record.female),
                percentage(record.female, record.total)
            );
            println!("  total:  {:>10}", format_count(record.total));
            match (record.latitude, record.longitude) {
                (Some(lat), Some(lon)) => println!("  location: {:.4}, {:.4}", lat, lon),
                _ => println!("  location: unknown"),
            }
        }
        None => {
            let mut ranked = records.clone();
            ranked.sort_by(|a, b| b.total.cmp(&a.total));

            println!(
                "{:<22} {:>12} {:>12} {:>12}",
                "PROVINCE", "MALE", "FEMALE", "TOTAL"
            );
            for record in ranked.iter().take(top) {
                let label = if record.name_en.is_empty() {
                    record.province.clone()
                } else {
                    record.name_en.clone()
                };
                println!(
                    "{:<22} {:>12} {:>12} {:>12}",
                    label,
                    format_count(record.male),
                    format_count(record.female),
                    format_count(record.total)
                );
            }

            let (male, female, total) = db.query_total_students()?;
            println!(
                "\nNationwide ({} provinces): {} male / {} female / {} total",
                records.len(),
                format_count(male),
                format_count(female),
                format_count(total)
            );
        }
    }
    Ok(())
}

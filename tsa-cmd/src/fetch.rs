//! Snapshot fetch implementation.

use log::info;
use tsa_obec::feed;
use tsa_obec::province::parse_province_feed;
use tsa_utils::era;

/// Download the OBEC feed and write the raw body to `output`.
///
/// The body is parsed before writing so a bad upstream response never
/// clobbers a good snapshot.
pub async fn run_fetch(output: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    let body = feed::fetch_feed_text(&client)
        .await
        .ok_or_else(|| anyhow::anyhow!("all fetch attempts for the OBEC feed failed"))?;

    let counts = parse_province_feed(&body)?;
    if counts.is_empty() {
        anyhow::bail!("feed parsed but contained no province rows");
    }

    std::fs::write(output, &body)?;

    let today = chrono::Local::now().naive_local().date();
    info!(
        "Wrote {} province rows ({} bytes) to {} during academic year {} BE",
        counts.len(),
        body.len(),
        output,
        era::current_academic_year_be(today)
    );
    Ok(())
}

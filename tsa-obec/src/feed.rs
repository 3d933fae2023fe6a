//! OBEC feed endpoint and the native fetch client.
//!
//! The feed is a single JSON document republished once per academic year,
//! so there is no incremental fetch; the client just retries transient
//! failures with backoff.

#[cfg(feature = "api")]
use crate::province::{parse_province_feed, ProvinceCount};
#[cfg(feature = "api")]
use log::{info, warn};
#[cfg(feature = "api")]
use reqwest::{Client, StatusCode};
#[cfg(feature = "api")]
use std::{thread::sleep, time::Duration};

/// Province-level student counts for academic year 2566 BE.
pub const FEED_URL: &str = "https://gpa.obec.go.th/reportdata/pp3-4_2566_province.json";

/// Fetch the raw feed body with retry and exponential backoff.
///
/// Returns `None` after all attempts fail; callers fall back to a local
/// snapshot or surface the failure.
#[cfg(feature = "api")]
pub async fn fetch_feed_text(client: &Client) -> Option<String> {
    let max_tries = 3;
    let mut sleep_millis: u64 = 1000;

    for attempt in 1..=max_tries {
        match client.get(FEED_URL).send().await {
            Ok(response) => {
                if response.status() != StatusCode::OK {
                    warn!(
                        "Attempt {}/{}: Bad response status from OBEC feed: {}",
                        attempt,
                        max_tries,
                        response.status()
                    );
                } else {
                    match response.text().await {
                        Ok(body) => {
                            if body.len() <= 2 {
                                warn!("Attempt {}/{}: Empty feed body", attempt, max_tries);
                            } else {
                                return Some(body);
                            }
                        }
                        Err(e) => {
                            warn!(
                                "Attempt {}/{}: Failed to read feed body: {}",
                                attempt, max_tries, e
                            );
                        }
                    }
                }
            }
            Err(e) => {
                warn!("Attempt {}/{}: Feed request failed: {}", attempt, max_tries, e);
            }
        }

        if attempt < max_tries {
            info!("Sleeping for {} milliseconds before feed retry", sleep_millis);
            sleep(Duration::from_millis(sleep_millis));
            sleep_millis *= 2;
        }
    }

    warn!("All feed fetch attempts failed");
    None
}

/// Fetch and parse the feed into province counts.
#[cfg(feature = "api")]
pub async fn fetch_province_counts(client: &Client) -> Option<Vec<ProvinceCount>> {
    let body = fetch_feed_text(client).await?;
    match parse_province_feed(&body) {
        Ok(counts) => {
            info!("Fetched {} province rows from OBEC feed", counts.len());
            Some(counts)
        }
        Err(e) => {
            warn!("Feed body did not parse: {}", e);
            None
        }
    }
}

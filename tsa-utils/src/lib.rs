//! Shared utility functions for TSA crates.

/// Province name helpers
pub mod names {
    /// Normalize a province name for comparison.
    ///
    /// Trims whitespace, strips an optional "จังหวัด" prefix (users type it,
    /// the feed does not carry it), and lowercases ASCII so romanized names
    /// compare case-insensitively.
    pub fn normalize_province(name: &str) -> String {
        let trimmed = name.trim();
        let stripped = trimmed
            .strip_prefix("จังหวัด")
            .map(str::trim)
            .unwrap_or(trimmed);
        stripped.to_lowercase()
    }

    /// Check whether two province names refer to the same province.
    pub fn matches_province(a: &str, b: &str) -> bool {
        let a = normalize_province(a);
        !a.is_empty() && a == normalize_province(b)
    }

}

/// Count formatting for chart labels and CLI output
pub mod format {
    /// Format a count with comma thousands separators, e.g. 98441 -> "98,441".
    pub fn format_count(count: i64) -> String {
        let digits = count.abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if count < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    /// Percentage of part within whole, rounded to one decimal place.
    /// Returns 0.0 when the whole is zero.
    pub fn percentage(part: i64, whole: i64) -> f64 {
        if whole == 0 {
            return 0.0;
        }
        (part as f64 * 1000.0 / whole as f64).round() / 10.0
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_count() {
            assert_eq!(format_count(0), "0");
            assert_eq!(format_count(999), "999");
            assert_eq!(format_count(1000), "1,000");
            assert_eq!(format_count(98441), "98,441");
            assert_eq!(format_count(1234567), "1,234,567");
        }

        #[test]
        fn test_percentage() {
            assert_eq!(percentage(1, 4), 25.0);
            assert_eq!(percentage(1, 3), 33.3);
            assert_eq!(percentage(5, 0), 0.0);
        }
    }
}

/// Buddhist Era year helpers for the OBEC academic-year feeds
pub mod era {
    use chrono::Datelike;

    /// Offset between Buddhist Era and Common Era years.
    pub const BE_OFFSET: i32 = 543;

    /// Convert a Common Era year to Buddhist Era (2023 -> 2566).
    pub fn be_year(ce_year: i32) -> i32 {
        ce_year + BE_OFFSET
    }

    /// The Buddhist Era academic year that started most recently.
    ///
    /// Thai academic years begin in mid-May; before May the previous
    /// year's feed is the current one.
    pub fn current_academic_year_be(today: chrono::NaiveDate) -> i32 {
        let year = if today.month() >= 5 {
            today.year()
        } else {
            today.year() - 1
        };
        be_year(year)
    }

    /// Parse an academic year argument, accepting either era
    /// ("2566" or "2023").
    pub fn parse_academic_year(s: &str) -> anyhow::Result<i32> {
        let year: i32 = s.trim().parse()?;
        if year < 2100 {
            Ok(be_year(year))
        } else {
            Ok(year)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_be_year() {
            assert_eq!(be_year(2023), 2566);
        }

        #[test]
        fn test_current_academic_year_be() {
            let june = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
            let february = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
            assert_eq!(current_academic_year_be(june), 2566);
            assert_eq!(current_academic_year_be(february), 2566);
        }

        #[test]
        fn test_parse_academic_year_either_era() {
            assert_eq!(parse_academic_year("2566").unwrap(), 2566);
            assert_eq!(parse_academic_year(" 2023 ").unwrap(), 2566);
            assert!(parse_academic_year("next").is_err());
        }
    }
}

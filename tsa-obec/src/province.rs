use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One row of the OBEC province feed: per-province student counts.
///
/// Field names follow the feed JSON (`schools_province`, `totalmale`,
/// `totalfemale`, `totalstd`). The feed is not strict about numeric types;
/// counts occasionally arrive as strings, so parsing is tolerant.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ProvinceCount {
    #[serde(rename = "schools_province")]
    pub province: String,
    #[serde(rename = "totalmale", deserialize_with = "deserialize_count", default)]
    pub male: i64,
    #[serde(rename = "totalfemale", deserialize_with = "deserialize_count", default)]
    pub female: i64,
    #[serde(rename = "totalstd", deserialize_with = "deserialize_count", default)]
    pub total: i64,
}

/// Parse a count value from whatever the feed sent.
///
/// Numbers parse directly, numeric strings (with optional thousands
/// separators) are accepted, anything else counts as 0. Negative values
/// are clamped to 0.
pub fn parse_count(value: &Value) -> i64 {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
            cleaned.parse::<i64>().unwrap_or(0)
        }
        _ => 0,
    };
    parsed.max(0)
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_count(&value))
}

/// Parse the feed JSON document into a vector of province counts.
///
/// Province names are trimmed; rows whose province name is empty after
/// trimming are dropped. Unknown feed fields are ignored.
pub fn parse_province_feed(json_object: &str) -> anyhow::Result<Vec<ProvinceCount>> {
    let mut counts: Vec<ProvinceCount> = serde_json::from_str(json_object)?;
    for count in counts.iter_mut() {
        count.province = count.province.trim().to_string();
    }
    counts.retain(|c| !c.province.is_empty());
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::{parse_count, parse_province_feed};
    use serde_json::json;

    #[test]
    fn test_parse_feed_numeric_counts() {
        let body = r#"[
            {"schools_province": "เชียงใหม่", "totalmale": 18000, "totalfemale": 17500, "totalstd": 35500},
            {"schools_province": "ภูเก็ต", "totalmale": 4200, "totalfemale": 4100, "totalstd": 8300}
        ]"#;
        let counts = parse_province_feed(body).unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].province, "เชียงใหม่");
        assert_eq!(counts[0].male, 18000);
        assert_eq!(counts[0].female, 17500);
        assert_eq!(counts[0].total, 35500);
    }

    #[test]
    fn test_parse_feed_string_counts() {
        let body = r#"[
            {"schools_province": " สงขลา ", "totalmale": "14,200", "totalfemale": "13900", "totalstd": "28,100"}
        ]"#;
        let counts = parse_province_feed(body).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].province, "สงขลา", "province names are trimmed");
        assert_eq!(counts[0].male, 14200);
        assert_eq!(counts[0].female, 13900);
        assert_eq!(counts[0].total, 28100);
    }

    #[test]
    fn test_parse_feed_drops_empty_province() {
        let body = r#"[
            {"schools_province": "  ", "totalmale": 1, "totalfemale": 2, "totalstd": 3},
            {"schools_province": "ตรัง", "totalmale": 10, "totalfemale": 20, "totalstd": 30}
        ]"#;
        let counts = parse_province_feed(body).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].province, "ตรัง");
    }

    #[test]
    fn test_parse_feed_ignores_unknown_fields() {
        let body = r#"[
            {"schools_province": "น่าน", "totalmale": 5, "totalfemale": 6, "totalstd": 11,
             "schools_count": 412, "region": "north"}
        ]"#;
        let counts = parse_province_feed(body).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].total, 11);
    }

    #[test]
    fn test_parse_feed_missing_counts_default_to_zero() {
        let body = r#"[{"schools_province": "ระนอง"}]"#;
        let counts = parse_province_feed(body).unwrap();
        assert_eq!(counts[0].male, 0);
        assert_eq!(counts[0].female, 0);
        assert_eq!(counts[0].total, 0);
    }

    #[test]
    fn test_parse_count_garbage_and_null() {
        assert_eq!(parse_count(&json!(null)), 0);
        assert_eq!(parse_count(&json!("n/a")), 0);
        assert_eq!(parse_count(&json!("")), 0);
        assert_eq!(parse_count(&json!(-40)), 0, "negative counts clamp to 0");
        assert_eq!(parse_count(&json!(1234.6)), 1235);
    }

    #[test]
    fn test_parse_feed_rejects_non_array() {
        assert!(parse_province_feed(r#"{"rows": []}"#).is_err());
    }
}

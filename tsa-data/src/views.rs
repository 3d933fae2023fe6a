//! Pure derivations from `(records, selection)` to the three chart views.
//!
//! Each view is an independent function of the immutable record set and the
//! current selection; re-rendering after an input event is just calling all
//! three again. Serialization for the D3 bridge happens in the app, not here.

use crate::selection::Selection;
use serde::Serialize;
use tsa_db::models::ProvinceRecord;

/// Pie chart fallback when nothing is selected.
pub const DEFAULT_PROVINCE: &str = "กรุงเทพมหานคร";

/// Map zoom when showing the whole country.
pub const WIDE_ZOOM: f64 = 1.0;

/// Map zoom when focused on a selected province.
pub const FOCUS_ZOOM: f64 = 4.0;

/// Fallback map center when no loaded province has coordinates.
pub const THAILAND_CENTER: (f64, f64) = (15.87, 100.99);

/// Rows for the grouped male/female/total bar chart.
///
/// Empty selection falls back to the full record set in record order;
/// otherwise the selected records are emitted in selection order, so the
/// newest search lands on the right edge of the chart.
pub fn bar_view(records: &[ProvinceRecord], selection: &Selection) -> Vec<ProvinceRecord> {
    if selection.is_empty() {
        return records.to_vec();
    }
    selection
        .provinces()
        .iter()
        .filter_map(|name| records.iter().find(|r| &r.province == name))
        .cloned()
        .collect()
}

/// One marker on the province map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapMarker {
    pub province: String,
    pub name_en: String,
    pub latitude: f64,
    pub longitude: f64,
    pub male: i64,
    pub female: i64,
    pub total: i64,
    /// Selected markers get the highlight styling.
    pub selected: bool,
}

/// The marker map: every located province, plus center/zoom.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapView {
    pub markers: Vec<MapMarker>,
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom: f64,
}

/// Derive the marker map.
///
/// Provinces without coordinates are omitted from the markers entirely.
/// With a non-empty selection the view centers on the most recently added
/// selection that has coordinates at [`FOCUS_ZOOM`]; otherwise it centers
/// on the mean coordinate of all located records at [`WIDE_ZOOM`].
pub fn map_view(records: &[ProvinceRecord], selection: &Selection) -> MapView {
    let markers: Vec<MapMarker> = records
        .iter()
        .filter_map(|r| {
            r.coordinates().map(|(latitude, longitude)| MapMarker {
                province: r.province.clone(),
                name_en: r.name_en.clone(),
                latitude,
                longitude,
                male: r.male,
                female: r.female,
                total: r.total,
                selected: selection.contains(&r.province),
            })
        })
        .collect();

    let mean = mean_coordinate(&markers).unwrap_or(THAILAND_CENTER);

    let focus = selection
        .provinces()
        .iter()
        .rev()
        .find_map(|name| {
            markers
                .iter()
                .find(|m| &m.province == name)
                .map(|m| (m.latitude, m.longitude))
        });

    match focus {
        Some((center_latitude, center_longitude)) => MapView {
            markers,
            center_latitude,
            center_longitude,
            zoom: FOCUS_ZOOM,
        },
        None => MapView {
            markers,
            center_latitude: mean.0,
            center_longitude: mean.1,
            zoom: WIDE_ZOOM,
        },
    }
}

fn mean_coordinate(markers: &[MapMarker]) -> Option<(f64, f64)> {
    if markers.is_empty() {
        return None;
    }
    let n = markers.len() as f64;
    let lat: f64 = markers.iter().map(|m| m.latitude).sum();
    let lon: f64 = markers.iter().map(|m| m.longitude).sum();
    Some((lat / n, lon / n))
}

/// The male/female split for a single province.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieView {
    pub province: String,
    pub name_en: String,
    pub male: i64,
    pub female: i64,
}

/// Derive the pie chart: the most recently added selection, or
/// [`DEFAULT_PROVINCE`] when the selection is empty.
///
/// Returns `None` when the chosen province has no record (the app destroys
/// the chart rather than rendering a stale one).
pub fn pie_view(records: &[ProvinceRecord], selection: &Selection) -> Option<PieView> {
    let province = selection.most_recent().unwrap_or(DEFAULT_PROVINCE);
    records
        .iter()
        .find(|r| r.province == province)
        .map(|r| PieView {
            province: r.province.clone(),
            name_en: r.name_en.clone(),
            male: r.male,
            female: r.female,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;
    use tsa_db::models::ProvinceRecord;

    fn record(province: &str, total: i64, coords: Option<(f64, f64)>) -> ProvinceRecord {
        ProvinceRecord {
            province: province.to_string(),
            name_en: String::new(),
            male: total / 2,
            female: total - total / 2,
            total,
            latitude: coords.map(|c| c.0),
            longitude: coords.map(|c| c.1),
        }
    }

    fn records() -> Vec<ProvinceRecord> {
        vec![
            record("A", 100, Some((10.0, 100.0))),
            record("B", 200, Some((20.0, 102.0))),
            record(DEFAULT_PROVINCE, 300, Some((13.75, 100.5))),
            record("D", 50, None),
        ]
    }

    #[test]
    fn bar_view_empty_selection_is_full_record_set() {
        let records = records();
        let rows = bar_view(&records, &Selection::new());
        assert_eq!(rows, records);
    }

    #[test]
    fn bar_view_restricts_to_selection() {
        let records = records();
        let rows = bar_view(&records, &Selection::from_names(["B"]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].province, "B");
    }

    #[test]
    fn bar_view_rows_follow_selection_order() {
        let records = records();
        let rows = bar_view(&records, &Selection::from_names(["B", "A"]));
        let names: Vec<&str> = rows.iter().map(|r| r.province.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn map_view_omits_unlocated_records() {
        let records = records();
        let view = map_view(&records, &Selection::new());
        assert_eq!(view.markers.len(), 3);
        assert!(view.markers.iter().all(|m| m.province != "D"));
    }

    #[test]
    fn map_view_empty_selection_centers_on_mean_at_wide_zoom() {
        let records = records();
        let view = map_view(&records, &Selection::new());
        assert_eq!(view.zoom, WIDE_ZOOM);
        assert!((view.center_latitude - (10.0 + 20.0 + 13.75) / 3.0).abs() < 1e-9);
        assert!((view.center_longitude - (100.0 + 102.0 + 100.5) / 3.0).abs() < 1e-9);
        assert!(view.markers.iter().all(|m| !m.selected));
    }

    #[test]
    fn map_view_centers_on_most_recent_selection() {
        let records = records();
        let view = map_view(&records, &Selection::from_names(["A", "B"]));
        assert_eq!(view.zoom, FOCUS_ZOOM);
        assert_eq!((view.center_latitude, view.center_longitude), (20.0, 102.0));

        let selected: Vec<&str> = view
            .markers
            .iter()
            .filter(|m| m.selected)
            .map(|m| m.province.as_str())
            .collect();
        assert_eq!(selected, ["A", "B"]);
    }

    #[test]
    fn map_view_skips_unlocated_focus() {
        // "D" has no coordinates; the focus falls back to the previous
        // located selection.
        let records = records();
        let view = map_view(&records, &Selection::from_names(["A", "D"]));
        assert_eq!(view.zoom, FOCUS_ZOOM);
        assert_eq!((view.center_latitude, view.center_longitude), (10.0, 100.0));
    }

    #[test]
    fn map_view_no_located_records_uses_fixed_center() {
        let records = vec![record("D", 50, None)];
        let view = map_view(&records, &Selection::new());
        assert!(view.markers.is_empty());
        assert_eq!(
            (view.center_latitude, view.center_longitude),
            THAILAND_CENTER
        );
        assert_eq!(view.zoom, WIDE_ZOOM);
    }

    #[test]
    fn pie_view_shows_most_recent_selection() {
        let records = records();
        let pie = pie_view(&records, &Selection::from_names(["A", "B"])).unwrap();
        assert_eq!(pie.province, "B");
        assert_eq!(pie.male + pie.female, 200);
    }

    #[test]
    fn pie_view_empty_selection_uses_default_province() {
        let records = records();
        let pie = pie_view(&records, &Selection::new()).unwrap();
        assert_eq!(pie.province, DEFAULT_PROVINCE);
    }

    #[test]
    fn pie_view_missing_province_is_none() {
        let records = vec![record("A", 100, None)];
        assert!(pie_view(&records, &Selection::new()).is_none());
        assert!(pie_view(&[], &Selection::new()).is_none());
    }
}

//! The province selection and its reducer.
//!
//! The selection is an ordered, deduplicated list of province names fed by
//! three input channels: the dropdown's Search button, map marker clicks,
//! and the Reset button. All three go through [`apply`], which returns a new
//! selection and never touches the record set.

use tsa_db::models::ProvinceRecord;

/// A discrete input event from one of the dashboard controls.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// Search pressed with the dropdown's current choice (`None` when the
    /// placeholder entry is still selected).
    Submit(Option<String>),
    /// A map marker was clicked. Marker names come from the record set, so
    /// no validity check is needed.
    MapClick(String),
    /// Clear the whole selection.
    Reset,
}

/// Ordered, deduplicated list of selected provinces.
///
/// Append-only except for the full clear; the last element is the
/// "most recent" selection the map centers on and the pie chart shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    provinces: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from already-validated names, preserving order and
    /// dropping duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Selection::new();
        for name in names {
            let name = name.into();
            if !selection.contains(&name) {
                selection.provinces.push(name);
            }
        }
        selection
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.provinces.len()
    }

    pub fn contains(&self, province: &str) -> bool {
        self.provinces.iter().any(|p| p == province)
    }

    /// Selected province names, oldest first.
    pub fn provinces(&self) -> &[String] {
        &self.provinces
    }

    /// The most recently added selection.
    pub fn most_recent(&self) -> Option<&str> {
        self.provinces.last().map(String::as_str)
    }

    fn appended(&self, province: String) -> Selection {
        let mut provinces = self.provinces.clone();
        provinces.push(province);
        Selection { provinces }
    }
}

/// Apply one input event to the current selection, returning the new one.
///
/// - `Reset` empties the selection regardless of prior state.
/// - `Submit` appends its province if it names a known record and is not
///   already selected; empty or unknown names are no-ops.
/// - `MapClick` appends its province if not already selected.
///
/// Malformed events are treated as no-ops; there are no error conditions.
pub fn apply(
    event: SelectionEvent,
    current: &Selection,
    records: &[ProvinceRecord],
) -> Selection {
    match event {
        SelectionEvent::Reset => Selection::new(),
        SelectionEvent::Submit(choice) => {
            let province = match choice {
                Some(p) => p.trim().to_string(),
                None => return current.clone(),
            };
            if province.is_empty() || current.contains(&province) {
                return current.clone();
            }
            if !records.iter().any(|r| r.province == province) {
                log::debug!("ignoring submit for unknown province: {}", province);
                return current.clone();
            }
            current.appended(province)
        }
        SelectionEvent::MapClick(province) => {
            if province.is_empty() || current.contains(&province) {
                return current.clone();
            }
            current.appended(province)
        }
    }
}

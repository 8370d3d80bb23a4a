use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::CanonicalStatus;

/// One application row after normalization.
///
/// `application_no` is the business key; the transformer drops raw items
/// that resolve to an empty one. The canonical status is always derived
/// from `status` on demand so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_no: String,
    #[serde(default)]
    pub pro: String,
    #[serde(default)]
    pub campus: String,
    #[serde(default)]
    pub dgm: String,
    #[serde(default)]
    pub zone: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub status: String,
    /// UI-only row selection, never sent back to the backend
    #[serde(default)]
    pub is_selected: bool,
}

impl ApplicationRecord {
    pub fn canonical_status(&self) -> CanonicalStatus {
        CanonicalStatus::normalize(&self.status)
    }

    pub fn display_status(&self) -> String {
        self.canonical_status().label()
    }
}

/// Flip the selection flag of the record(s) carrying `application_no`.
///
/// Copy-on-write: returns a fresh list instead of mutating in place, so
/// memoized filters downstream see a new value. Duplicate keys (kept
/// permissive by the transformer) all toggle together.
pub fn toggle_selection(
    records: &[ApplicationRecord],
    application_no: &str,
) -> Vec<ApplicationRecord> {
    records
        .iter()
        .map(|record| {
            if record.application_no == application_no {
                let mut updated = record.clone();
                updated.is_selected = !record.is_selected;
                updated
            } else {
                record.clone()
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn sample(application_no: &str, campus: &str, status: &str) -> ApplicationRecord {
    ApplicationRecord {
        application_no: application_no.to_string(),
        pro: String::new(),
        campus: campus.to_string(),
        dgm: String::new(),
        zone: String::new(),
        date: Utc::now(),
        status: status.to_string(),
        is_selected: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_status_tracks_raw_status() {
        let mut record = sample("A1", "North", "Fast Sold");
        assert_eq!(record.canonical_status(), CanonicalStatus::FastSold);
        record.status = "Damaged".to_string();
        assert_eq!(record.canonical_status(), CanonicalStatus::Damaged);
    }

    #[test]
    fn test_toggle_selection_replaces_by_key() {
        let records = vec![sample("A1", "", "Sold"), sample("A2", "", "Sold")];
        let toggled = toggle_selection(&records, "A2");
        assert!(!toggled[0].is_selected);
        assert!(toggled[1].is_selected);
        // source list untouched
        assert!(!records[1].is_selected);
        let toggled_back = toggle_selection(&toggled, "A2");
        assert!(!toggled_back[1].is_selected);
    }

    #[test]
    fn test_toggle_selection_covers_duplicate_keys() {
        let records = vec![sample("A1", "", "Sold"), sample("A1", "", "Sold")];
        let toggled = toggle_selection(&records, "A1");
        assert!(toggled.iter().all(|r| r.is_selected));
    }

    #[test]
    fn test_toggle_selection_unknown_key_is_noop() {
        let records = vec![sample("A1", "", "Sold")];
        let toggled = toggle_selection(&records, "B9");
        assert_eq!(toggled, records);
    }
}

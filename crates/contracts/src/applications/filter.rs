use serde::{Deserialize, Serialize};

use super::record::ApplicationRecord;
use super::status::CanonicalStatus;

/// Sentinel campus value meaning "no campus narrowing"
pub const ALL_CAMPUSES: &str = "All Campuses";

/// Independent status-category flags, OR-combined.
///
/// `all` means "no narrowing" only while every other flag is off; once a
/// specific flag is selected, `all` stops mattering and records must
/// match at least one selected predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCategoryFilter {
    pub all: bool,
    pub sold: bool,
    pub confirmed: bool,
    pub unsold: bool,
    pub with_pro: bool,
    pub damaged: bool,
    pub unavailable: bool,
}

impl Default for StatusCategoryFilter {
    fn default() -> Self {
        Self {
            all: true,
            sold: false,
            confirmed: false,
            unsold: false,
            with_pro: false,
            damaged: false,
            unavailable: false,
        }
    }
}

impl StatusCategoryFilter {
    pub fn is_all_selected(&self) -> bool {
        self.all
            && !(self.sold
                || self.confirmed
                || self.unsold
                || self.with_pro
                || self.damaged
                || self.unavailable)
    }

    /// Whether any selected flag's predicate matches the canonical status.
    /// The `unsold` flag targets fast-sold records.
    pub fn matches(&self, status: &CanonicalStatus) -> bool {
        (self.sold && *status == CanonicalStatus::Sold)
            || (self.confirmed && *status == CanonicalStatus::Confirmed)
            || (self.unsold && *status == CanonicalStatus::FastSold)
            || (self.with_pro && *status == CanonicalStatus::WithPro)
            || (self.damaged && *status == CanonicalStatus::Damaged)
            || (self.unavailable && *status == CanonicalStatus::Unavailable)
    }

    /// Number of narrowing flags switched on, for the filter badge
    pub fn active_count(&self) -> usize {
        [
            self.sold,
            self.confirmed,
            self.unsold,
            self.with_pro,
            self.damaged,
            self.unavailable,
        ]
        .iter()
        .filter(|flag| **flag)
        .count()
    }
}

/// Compound roster filter: campus plus status categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    pub campus: String,
    pub status: StatusCategoryFilter,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            campus: ALL_CAMPUSES.to_string(),
            status: StatusCategoryFilter::default(),
        }
    }
}

/// Campus stage: exact, case-sensitive match unless the sentinel is set
pub fn by_campus(records: &[ApplicationRecord], campus: &str) -> Vec<ApplicationRecord> {
    if campus.is_empty() || campus == ALL_CAMPUSES {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.campus == campus)
        .cloned()
        .collect()
}

/// Status stage: no-op only in the explicit all-selected state. A record
/// matching zero selected predicates is dropped even when `all` is on.
pub fn by_status(
    records: &[ApplicationRecord],
    status: &StatusCategoryFilter,
) -> Vec<ApplicationRecord> {
    if status.is_all_selected() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| status.matches(&record.canonical_status()))
        .cloned()
        .collect()
}

/// Full pipeline: campus stage then status stage, order-preserving
pub fn apply(records: &[ApplicationRecord], filter: &ListFilter) -> Vec<ApplicationRecord> {
    by_status(&by_campus(records, &filter.campus), &filter.status)
}

/// Distinct campuses in first-seen order, sentinel first. These are the
/// dropdown options for the campus filter.
pub fn campus_options(records: &[ApplicationRecord]) -> Vec<String> {
    let mut options = vec![ALL_CAMPUSES.to_string()];
    for record in records {
        if !record.campus.is_empty() && !options.iter().any(|campus| campus == &record.campus) {
            options.push(record.campus.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applications::record::sample;

    fn roster() -> Vec<ApplicationRecord> {
        vec![
            sample("A1", "North", "Sold"),
            sample("A2", "South", "With PRO"),
            sample("A3", "North", "Fast Sold"),
            sample("A4", "North", "Damaged"),
            sample("A5", "South", "Waiting List"),
        ]
    }

    #[test]
    fn test_campus_stage_exact_match() {
        let filtered = by_campus(&roster(), "North");
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|r| r.campus == "North"));
        // case-sensitive
        assert!(by_campus(&roster(), "north").is_empty());
    }

    #[test]
    fn test_campus_sentinel_is_noop() {
        assert_eq!(by_campus(&roster(), ALL_CAMPUSES).len(), 5);
        assert_eq!(by_campus(&roster(), "").len(), 5);
    }

    #[test]
    fn test_status_stage_noop_when_all_selected() {
        let filter = StatusCategoryFilter::default();
        assert!(filter.is_all_selected());
        assert_eq!(by_status(&roster(), &filter).len(), 5);
    }

    #[test]
    fn test_status_flags_or_combine() {
        let filter = StatusCategoryFilter {
            all: false,
            sold: true,
            unsold: true,
            ..StatusCategoryFilter::default()
        };
        let filtered = by_status(&roster(), &filter);
        let keys: Vec<&str> = filtered.iter().map(|r| r.application_no.as_str()).collect();
        assert_eq!(keys, vec!["A1", "A3"]);
    }

    #[test]
    fn test_all_flag_ignored_when_specific_flag_set() {
        let filter = StatusCategoryFilter {
            all: true,
            damaged: true,
            ..StatusCategoryFilter::default()
        };
        assert!(!filter.is_all_selected());
        let filtered = by_status(&roster(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].application_no, "A4");
    }

    #[test]
    fn test_nothing_selected_yields_empty() {
        let filter = StatusCategoryFilter {
            all: false,
            ..StatusCategoryFilter::default()
        };
        assert!(by_status(&roster(), &filter).is_empty());
    }

    #[test]
    fn test_pipeline_is_subset_and_order_preserving() {
        let records = roster();
        let filter = ListFilter {
            campus: "North".to_string(),
            status: StatusCategoryFilter {
                all: false,
                sold: true,
                damaged: true,
                ..StatusCategoryFilter::default()
            },
        };
        let filtered = apply(&records, &filter);
        assert!(filtered.len() <= records.len());
        let keys: Vec<&str> = filtered.iter().map(|r| r.application_no.as_str()).collect();
        assert_eq!(keys, vec!["A1", "A4"]);
    }

    #[test]
    fn test_campus_options_first_seen_order() {
        let options = campus_options(&roster());
        assert_eq!(options, vec![ALL_CAMPUSES, "North", "South"]);
    }

    #[test]
    fn test_active_count() {
        let filter = StatusCategoryFilter {
            all: false,
            sold: true,
            with_pro: true,
            ..StatusCategoryFilter::default()
        };
        assert_eq!(filter.active_count(), 2);
        assert_eq!(StatusCategoryFilter::default().active_count(), 0);
    }
}

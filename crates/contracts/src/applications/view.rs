use super::record::ApplicationRecord;

/// Queries shorter than this keep the full table on screen
pub const SEARCH_MIN_LEN: usize = 3;
/// Card-view result cap
pub const MAX_SEARCH_RESULTS: usize = 5;

/// How a populated roster is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    SearchResults,
}

/// Overall view state. Loading, Error and Empty are mutually exclusive
/// and take precedence over any filter or search rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error,
    Empty,
    Populated(ViewMode),
}

/// Presentation-mode decision from query length alone. Switching modes
/// never touches the underlying filtered set.
pub fn view_mode(query: &str) -> ViewMode {
    if query.trim().chars().count() >= SEARCH_MIN_LEN {
        ViewMode::SearchResults
    } else {
        ViewMode::Table
    }
}

/// Derive the view state from fetch status, snapshot size and query.
/// There are no manual transitions.
pub fn resolve_view_state(
    loading: bool,
    has_error: bool,
    snapshot_len: usize,
    query: &str,
) -> ViewState {
    if loading {
        ViewState::Loading
    } else if has_error {
        ViewState::Error
    } else if snapshot_len == 0 {
        ViewState::Empty
    } else {
        ViewState::Populated(view_mode(query))
    }
}

/// Card-view matches over the already-filtered set: case-insensitive
/// substring on the application number, restricted to statuses with
/// display metadata, capped at `max_results`.
pub fn search_results(
    records: &[ApplicationRecord],
    query: &str,
    max_results: usize,
) -> Vec<ApplicationRecord> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < SEARCH_MIN_LEN {
        return Vec::new();
    }
    records
        .iter()
        .filter(|record| record.application_no.to_lowercase().contains(&needle))
        .filter(|record| record.canonical_status().display_meta().is_some())
        .take(max_results)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applications::record::sample;

    fn roster() -> Vec<ApplicationRecord> {
        vec![
            sample("APP-101", "North", "Sold"),
            sample("APP-102", "North", "odd status"),
            sample("APP-103", "South", "Fast Sold"),
            sample("APP-204", "South", "Confirmed"),
        ]
    }

    #[test]
    fn test_view_mode_threshold() {
        assert_eq!(view_mode(""), ViewMode::Table);
        assert_eq!(view_mode("AP"), ViewMode::Table);
        assert_eq!(view_mode("  AP "), ViewMode::Table);
        assert_eq!(view_mode("APP"), ViewMode::SearchResults);
        assert_eq!(view_mode("APP-101"), ViewMode::SearchResults);
    }

    #[test]
    fn test_view_state_precedence() {
        assert_eq!(resolve_view_state(true, true, 0, ""), ViewState::Loading);
        assert_eq!(resolve_view_state(false, true, 9, ""), ViewState::Error);
        assert_eq!(resolve_view_state(false, false, 0, "APP"), ViewState::Empty);
        assert_eq!(
            resolve_view_state(false, false, 9, ""),
            ViewState::Populated(ViewMode::Table)
        );
        assert_eq!(
            resolve_view_state(false, false, 9, "APP"),
            ViewState::Populated(ViewMode::SearchResults)
        );
    }

    #[test]
    fn test_search_matches_case_insensitive() {
        let results = search_results(&roster(), "app-1", MAX_SEARCH_RESULTS);
        let keys: Vec<&str> = results.iter().map(|r| r.application_no.as_str()).collect();
        // APP-102 has no display meta and is excluded from the card view
        assert_eq!(keys, vec!["APP-101", "APP-103"]);
    }

    #[test]
    fn test_search_results_are_capped() {
        let records: Vec<ApplicationRecord> = (0..10)
            .map(|i| sample(&format!("APP-{i}"), "North", "Sold"))
            .collect();
        assert_eq!(search_results(&records, "APP", 5).len(), 5);
    }

    #[test]
    fn test_short_query_yields_no_cards() {
        assert!(search_results(&roster(), "AP", MAX_SEARCH_RESULTS).is_empty());
    }

    #[test]
    fn test_no_matches_is_empty_not_table() {
        // mode still says SearchResults; the view shows its own
        // "no results" indicator rather than an empty table
        assert!(search_results(&roster(), "ZZZ", MAX_SEARCH_RESULTS).is_empty());
        assert_eq!(view_mode("ZZZ"), ViewMode::SearchResults);
    }
}

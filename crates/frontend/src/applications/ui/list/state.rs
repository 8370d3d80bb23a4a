use contracts::applications::filter::ListFilter;
use contracts::applications::paging::DEFAULT_PAGE_SIZE;
use contracts::applications::record::ApplicationRecord;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ApplicationsListState {
    /// Current snapshot, one fetch per identity value
    pub records: Vec<ApplicationRecord>,
    pub filter: ListFilter,
    pub search_query: String,
    pub page: usize,
    pub page_size: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ApplicationsListState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            filter: ListFilter::default(),
            search_query: String::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            loading: false,
            error: None,
        }
    }
}

pub fn create_state() -> RwSignal<ApplicationsListState> {
    RwSignal::new(ApplicationsListState::default())
}

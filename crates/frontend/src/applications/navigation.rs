//! Router adapter for the roster.
//!
//! The resolvers in `contracts::applications::navigation` stay pure and
//! only compute route requests; this adapter owns the collaborators
//! that carry them out. Two sale strategies are configured: route
//! navigation when a router is present (the normal case here), and the
//! search-reveal fallback otherwise.

use std::rc::Rc;

use contracts::applications::navigation::{
    card_click_target, resolve_confirmation_target, resolve_damage_target, resolve_sale_target,
    RouteRequest, SaleTarget,
};
use contracts::applications::record::ApplicationRecord;
use contracts::enums::InstitutionCategory;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::location::State;
use leptos_router::NavigateOptions;
use serde::{Deserialize, Serialize};

/// History-state payload attached to every workflow navigation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteState {
    #[serde(rename = "applicationData")]
    pub application_data: ApplicationRecord,
}

type NavigateFn = Rc<dyn Fn(&str, NavigateOptions)>;

#[derive(Clone, Copy)]
pub struct Navigator {
    // The navigate closure is a JS-side value; it lives in local storage
    // so the Navigator itself stays Copy + thread-safe for the views.
    navigate: StoredValue<Option<NavigateFn>, LocalStorage>,
    reveal_in_search: Callback<String>,
    open_sale_page: StoredValue<Option<Callback<ApplicationRecord>>>,
}

impl Navigator {
    /// Build with the router strategy active. Must be called inside the
    /// Router component tree.
    pub fn with_router(reveal_in_search: Callback<String>) -> Self {
        let navigate = use_navigate();
        Self {
            navigate: StoredValue::new_local(Some(Rc::new(navigate) as NavigateFn)),
            reveal_in_search,
            open_sale_page: StoredValue::new(None),
        }
    }

    /// Build without a router. Sales fall back to the search-reveal
    /// strategy (college) or the supplied sale-page callback (school).
    pub fn without_router(
        reveal_in_search: Callback<String>,
        open_sale_page: Option<Callback<ApplicationRecord>>,
    ) -> Self {
        Self {
            navigate: StoredValue::new_local(None),
            reveal_in_search,
            open_sale_page: StoredValue::new(open_sale_page),
        }
    }

    fn router_available(&self) -> bool {
        self.navigate.with_value(|n| n.is_some())
    }

    fn run(&self, request: RouteRequest) {
        let Some(navigate) = self.navigate.with_value(|n| n.clone()) else {
            log::warn!("no router collaborator for {}", request.path);
            return;
        };
        let state = serde_wasm_bindgen::to_value(&RouteState {
            application_data: request.application,
        })
        .ok();
        let options = NavigateOptions {
            state: State::new(state),
            ..Default::default()
        };
        navigate(&request.path, options);
    }

    pub fn sale(&self, record: &ApplicationRecord, category: InstitutionCategory) {
        match resolve_sale_target(record, category, self.router_available()) {
            Some(SaleTarget::Navigate(request)) => {
                if self.router_available() {
                    self.run(request);
                } else if let Some(open_sale_page) = self.open_sale_page.get_value() {
                    open_sale_page.run(request.application);
                }
            }
            Some(SaleTarget::RevealInSearch(application_no)) => {
                self.reveal_in_search.run(application_no);
            }
            None => {}
        }
    }

    pub fn confirmation(&self, record: &ApplicationRecord, category: InstitutionCategory) {
        if let Some(request) = resolve_confirmation_target(record, category) {
            self.run(request);
        }
    }

    pub fn damage(&self, record: &ApplicationRecord) {
        if let Some(request) = resolve_damage_target(record) {
            self.run(request);
        }
    }

    pub fn card_click(&self, record: &ApplicationRecord) {
        if let Some(request) = card_click_target(record) {
            self.run(request);
        }
    }
}

/// Read the routed application back on a destination page
pub fn routed_application() -> Option<ApplicationRecord> {
    let state = web_sys::window()?.history().ok()?.state().ok()?;
    serde_wasm_bindgen::from_value::<RouteState>(state)
        .ok()
        .map(|route_state| route_state.application_data)
}

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::applications::ui::list::ApplicationsListPage;
use crate::pages::{
    CollegeConfirmationPage, CollegeFastSalePage, CollegeSalePage, ConfirmationPage,
    DamageReportPage, SalePage,
};

/// Route table. The workflow paths mirror the constants in
/// `contracts::applications::navigation::routes`; the destination pages
/// pick the routed application out of history state.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <ApplicationsListPage /> }>
                <Route path=path!("/") view=ApplicationsListPage />
                <Route path=path!("/applications/sale") view=SalePage />
                <Route path=path!("/applications/confirm") view=ConfirmationPage />
                <Route path=path!("/applications/damage-report") view=DamageReportPage />
                <Route path=path!("/college/sale") view=CollegeSalePage />
                <Route path=path!("/college/fast-sale") view=CollegeFastSalePage />
                <Route path=path!("/college/confirm") view=CollegeConfirmationPage />
            </Routes>
        </Router>
    }
}

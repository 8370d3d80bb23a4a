use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::session;

#[component]
pub fn App() -> impl IntoView {
    // Category is ambient session state; the view engine only ever sees
    // it as an explicit parameter read from this context.
    provide_context(session::current_category());

    view! {
        <AppRoutes />
    }
}

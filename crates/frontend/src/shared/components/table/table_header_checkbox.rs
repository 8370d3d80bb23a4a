//! Select-all checkbox for the table header
//!
//! Checked when every visible row is selected; toggling applies the
//! new state to all visible rows at once.

use leptos::prelude::*;

#[component]
pub fn TableHeaderCheckbox(
    /// Whether every visible row is currently selected
    #[prop(into)]
    all_selected: Signal<bool>,

    /// Callback with the new state for all visible rows
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <th class="fixed-checkbox-column">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || all_selected.get()
                on:change=move |ev| {
                    let value = event_target_checked(&ev);
                    on_change.run(value);
                }
            />
        </th>
    }
}

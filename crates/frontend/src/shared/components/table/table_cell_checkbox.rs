//! Row-selection checkbox cell
//!
//! Stops click propagation so the row's own handlers do not fire when
//! the checkbox is toggled.

use leptos::prelude::*;

#[component]
pub fn TableCellCheckbox(
    /// Business key of the row
    #[prop(into)]
    item_id: String,

    /// Current selection state of the row
    checked: bool,

    /// Callback on change (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let item_id_for_change = item_id.clone();

    view! {
        <td class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| {
                    let value = event_target_checked(&ev);
                    on_change.run((item_id_for_change.clone(), value));
                }
            />
        </td>
    }
}

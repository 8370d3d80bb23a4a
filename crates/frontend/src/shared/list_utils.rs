/// List helpers shared by the roster views (search input, highlighting)
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use contracts::applications::view::SEARCH_MIN_LEN;

/// Input debounce before the search query is published
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Highlight query matches in a text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    if filter.trim().is_empty() || filter.trim().len() < SEARCH_MIN_LEN {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();

    if !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(
                view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any(),
            );
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <span class="search-highlight">
                {text[actual_pos..match_end].to_string()}
            </span>
        }.into_any());

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search input with debounce and a clear button.
///
/// The published value can also be set from outside (the college sale
/// action reveals a record by writing its number into the query); the
/// sync effect keeps the box consistent with that.
#[component]
pub fn SearchInput(
    /// Current published query
    #[prop(into)]
    value: Signal<String>,
    /// Callback publishing the debounced query
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search (min 3 chars)...".to_string()
    } else {
        placeholder
    };

    // Local state for the input (before debounce)
    let (input_value, set_input_value) = signal(String::new());

    // Pending debounce task; re-typing cancels it before scheduling anew
    let debounce = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let external = value.get();
        if external != input_value.get_untracked() {
            set_input_value.set(external);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        debounce.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });

        let timer = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        });
        debounce.set_value(Some(timer));
    };

    let is_filter_active = move || {
        let text = value.get();
        text.trim().len() >= SEARCH_MIN_LEN
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class=move || {
            if is_filter_active() {
                "search-input search-input--active"
            } else {
                "search-input"
            }
        }>
            <input
                type="text"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

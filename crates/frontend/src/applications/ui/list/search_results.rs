//! Capped card view shown while a search query is active.
//!
//! Only records with a mapped display status appear here; zero matches
//! render an explicit indicator instead of an empty table.

use contracts::applications::record::ApplicationRecord;
use contracts::applications::status::CanonicalStatus;
use leptos::prelude::*;

use crate::applications::navigation::Navigator;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::highlight_matches;

#[component]
pub fn SearchResultCards(
    /// Matches over the filtered set, already capped
    #[prop(into)]
    results: Signal<Vec<ApplicationRecord>>,

    /// Active query, for match highlighting
    #[prop(into)]
    query: Signal<String>,

    navigator: Navigator,
) -> impl IntoView {
    view! {
        <div class="search-results">
            {move || {
                let items = results.get();
                if items.is_empty() {
                    view! {
                        <div class="search-results__empty">
                            "No applications match this search."
                        </div>
                    }
                    .into_any()
                } else {
                    let filter = query.get();
                    items
                        .into_iter()
                        .map(|record| {
                            view! {
                                <ApplicationCard
                                    record=record
                                    filter=filter.clone()
                                    navigator=navigator
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ApplicationCard(
    record: ApplicationRecord,
    filter: String,
    navigator: Navigator,
) -> impl IntoView {
    let status = record.canonical_status();
    // Confirmed cards are inert; the click resolver returns no request
    // for them, the class just makes that visible
    let disabled = status == CanonicalStatus::Confirmed;
    let badge_class = status.badge_class().to_string();
    let label = status.label();
    let click_record = record.clone();

    view! {
        <div
            class=if disabled {
                "application-card application-card--disabled"
            } else {
                "application-card"
            }
            on:click=move |_| navigator.card_click(&click_record)
        >
            <div class="application-card__header">
                <span class="application-card__no">
                    {highlight_matches(&record.application_no, &filter)}
                </span>
                <Badge class=badge_class>{label}</Badge>
            </div>
            <div class="application-card__body">
                <span class="application-card__campus">{record.campus.clone()}</span>
                <span class="application-card__date">{format_datetime(&record.date)}</span>
            </div>
        </div>
    }
}

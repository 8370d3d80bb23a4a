mod row_menu;
mod search_results;
mod state;

use std::collections::HashSet;

use contracts::applications::filter::{self, StatusCategoryFilter, ALL_CAMPUSES};
use contracts::applications::paging;
use contracts::applications::record::{toggle_selection, ApplicationRecord};
use contracts::applications::status::CanonicalStatus;
use contracts::applications::transform::extract_records;
use contracts::applications::view::{self, ViewMode, ViewState, MAX_SEARCH_RESULTS};
use contracts::enums::InstitutionCategory;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::applications::api;
use crate::applications::navigation::Navigator;
use crate::session;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use row_menu::RowActions;
use search_results::SearchResultCards;
use state::create_state;

#[component]
pub fn ApplicationsListPage() -> impl IntoView {
    let category =
        use_context::<InstitutionCategory>().unwrap_or(InstitutionCategory::School);
    let state = create_state();

    // Search-reveal strategy: the college sale action may ask the view
    // to populate the search box so the matching card renders
    let reveal_in_search = Callback::new(move |application_no: String| {
        state.update(|s| s.search_query = application_no);
    });
    let navigator = Navigator::with_router(reveal_in_search);

    // Identity parameter; the roster reloads whenever it changes
    let (employee_id, set_employee_id) = signal(session::employee_campus_id());

    // Guards stale responses: only the newest fetch may write state
    let fetch_epoch = StoredValue::new(0u64);

    let load = move |employee_campus_id: Option<i64>| {
        let epoch = fetch_epoch.get_value() + 1;
        fetch_epoch.set_value(epoch);

        let Some(id) = employee_campus_id else {
            // No identity: empty roster, not loading, not an error
            state.update(|s| {
                s.records = Vec::new();
                s.loading = false;
                s.error = None;
            });
            return;
        };

        state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        spawn_local(async move {
            let result = api::fetch_applications(id).await;
            if fetch_epoch.get_value() != epoch {
                log::debug!("discarding stale applications response for employee {}", id);
                return;
            }
            match result {
                Ok(payload) => {
                    let records = extract_records(&payload);
                    log::debug!("loaded {} applications for employee {}", records.len(), id);
                    state.update(|s| {
                        s.records = records;
                        s.loading = false;
                    });
                }
                Err(e) => {
                    log::warn!("applications fetch failed: {}", e);
                    state.update(|s| {
                        s.loading = false;
                        s.error = Some(e.to_string());
                    });
                }
            }
        });
    };

    Effect::new(move |_| {
        load(employee_id.get());
    });

    let filtered = move || state.with(|s| filter::apply(&s.records, &s.filter));
    let paged = move || {
        let rows = filtered();
        state.with(|s| paging::page_slice(&rows, s.page, s.page_size))
    };
    let search_matches = move || {
        let rows = filtered();
        state.with(|s| view::search_results(&rows, &s.search_query, MAX_SEARCH_RESULTS))
    };
    let campus_options = move || state.with(|s| filter::campus_options(&s.records));
    let view_state = move || {
        state.with(|s| {
            view::resolve_view_state(s.loading, s.error.is_some(), s.records.len(), &s.search_query)
        })
    };

    // Never land on an empty page: re-checked on every change of the
    // filtered set, not just on explicit page changes
    Effect::new(move |_| {
        let len = filtered().len();
        let (page, page_size) = state.with_untracked(|s| (s.page, s.page_size));
        if paging::needs_reset(len, page, page_size) {
            state.update(|s| s.page = 0);
        }
    });

    let on_toggle_row = Callback::new(move |(application_no, _checked): (String, bool)| {
        state.update(|s| s.records = toggle_selection(&s.records, &application_no));
    });

    let all_selected = Signal::derive(move || {
        let rows = paged();
        !rows.is_empty() && rows.iter().all(|r| r.is_selected)
    });

    let on_toggle_all = Callback::new(move |checked: bool| {
        let visible: HashSet<String> = paged().into_iter().map(|r| r.application_no).collect();
        state.update(|s| {
            s.records = s
                .records
                .iter()
                .map(|record| {
                    if visible.contains(&record.application_no) {
                        let mut updated = record.clone();
                        updated.is_selected = checked;
                        updated
                    } else {
                        record.clone()
                    }
                })
                .collect();
        });
    });

    let filter_expanded = RwSignal::new(true);
    let active_filters_count = Signal::derive(move || {
        state.with(|s| {
            usize::from(s.filter.campus != ALL_CAMPUSES) + s.filter.status.active_count()
        })
    });

    view! {
        <div class="applications-page">
            <div class="page-header">
                <h2 class="page-header__title">
                    {move || format!("{} Applications", category.display_name())}
                </h2>
                <div class="page-header__actions">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                        on_change=Callback::new(move |query: String| {
                            state.update(|s| s.search_query = query);
                        })
                        placeholder="Search application number (min 3 chars)..."
                    />
                    <button
                        class="refresh-btn"
                        on:click=move |_| set_employee_id.set(session::employee_campus_id())
                        prop:disabled=move || state.with(|s| s.loading)
                        title="Reload the roster"
                    >
                        {icon("refresh")}
                        " Refresh"
                    </button>
                </div>
            </div>

            <FilterPanel is_expanded=filter_expanded active_filters_count=active_filters_count>
                <div class="filter-row">
                    <label class="filter-row__label">"Campus:"</label>
                    <select
                        class="campus-select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| {
                                s.filter.campus = value;
                                s.page = 0;
                            });
                        }
                        prop:value=move || state.with(|s| s.filter.campus.clone())
                    >
                        {move || {
                            let current = state.with(|s| s.filter.campus.clone());
                            campus_options()
                                .into_iter()
                                .map(|campus| {
                                    let value = campus.clone();
                                    let selected = campus == current;
                                    view! {
                                        <option value=value selected=selected>{campus}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div class="filter-row">
                    <label class="filter-row__label">"Status:"</label>
                    <StatusFlag
                        label="All"
                        checked=Signal::derive(move || state.with(|s| s.filter.status.all))
                        on_toggle=Callback::new(move |checked| {
                            state.update(|s| {
                                if checked {
                                    s.filter.status = StatusCategoryFilter::default();
                                } else {
                                    s.filter.status.all = false;
                                }
                                s.page = 0;
                            });
                        })
                    />
                    <StatusFlag
                        label="Sold"
                        checked=Signal::derive(move || state.with(|s| s.filter.status.sold))
                        on_toggle=Callback::new(move |checked| {
                            state.update(|s| {
                                s.filter.status.sold = checked;
                                s.page = 0;
                            });
                        })
                    />
                    <StatusFlag
                        label="Confirmed"
                        checked=Signal::derive(move || state.with(|s| s.filter.status.confirmed))
                        on_toggle=Callback::new(move |checked| {
                            state.update(|s| {
                                s.filter.status.confirmed = checked;
                                s.page = 0;
                            });
                        })
                    />
                    <StatusFlag
                        label="Unsold"
                        checked=Signal::derive(move || state.with(|s| s.filter.status.unsold))
                        on_toggle=Callback::new(move |checked| {
                            state.update(|s| {
                                s.filter.status.unsold = checked;
                                s.page = 0;
                            });
                        })
                    />
                    <StatusFlag
                        label="With PRO"
                        checked=Signal::derive(move || state.with(|s| s.filter.status.with_pro))
                        on_toggle=Callback::new(move |checked| {
                            state.update(|s| {
                                s.filter.status.with_pro = checked;
                                s.page = 0;
                            });
                        })
                    />
                    <StatusFlag
                        label="Damaged"
                        checked=Signal::derive(move || state.with(|s| s.filter.status.damaged))
                        on_toggle=Callback::new(move |checked| {
                            state.update(|s| {
                                s.filter.status.damaged = checked;
                                s.page = 0;
                            });
                        })
                    />
                    <StatusFlag
                        label="Unavailable"
                        checked=Signal::derive(move || state.with(|s| s.filter.status.unavailable))
                        on_toggle=Callback::new(move |checked| {
                            state.update(|s| {
                                s.filter.status.unavailable = checked;
                                s.page = 0;
                            });
                        })
                    />
                </div>
            </FilterPanel>

            {move || {
                if view_state() == ViewState::Populated(ViewMode::Table) {
                    let rows = filtered();
                    let count = |key: &CanonicalStatus| {
                        rows.iter().filter(|r| r.canonical_status() == *key).count()
                    };
                    view! {
                        <div class="list-summary">
                            <span><strong>"Total: "</strong>{rows.len()}</span>
                            <span><strong>"Sold: "</strong>{count(&CanonicalStatus::Sold)}</span>
                            <span><strong>"Confirmed: "</strong>{count(&CanonicalStatus::Confirmed)}</span>
                            <span><strong>"Fast Sold: "</strong>{count(&CanonicalStatus::FastSold)}</span>
                            <span><strong>"Damaged: "</strong>{count(&CanonicalStatus::Damaged)}</span>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || match view_state() {
                ViewState::Loading => view! {
                    <div class="list-placeholder">"Loading applications..."</div>
                }
                .into_any(),
                ViewState::Error => view! {
                    <div class="list-error">
                        <strong>"Error: "</strong>
                        {state.with(|s| s.error.clone().unwrap_or_default())}
                    </div>
                }
                .into_any(),
                ViewState::Empty => view! {
                    <div class="list-placeholder">"No applications found."</div>
                }
                .into_any(),
                ViewState::Populated(ViewMode::SearchResults) => view! {
                    <SearchResultCards
                        results=Signal::derive(search_matches)
                        query=Signal::derive(move || state.with(|s| s.search_query.clone()))
                        navigator=navigator
                    />
                }
                .into_any(),
                ViewState::Populated(ViewMode::Table) => view! {
                    <ApplicationsTable
                        rows=Signal::derive(paged)
                        category=category
                        navigator=navigator
                        on_toggle_row=on_toggle_row
                        all_selected=all_selected
                        on_toggle_all=on_toggle_all
                    />
                }
                .into_any(),
            }}

            {move || {
                if view_state() == ViewState::Populated(ViewMode::Table) {
                    view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page))
                            total_pages=Signal::derive(move || {
                                paging::total_pages(
                                    filtered().len(),
                                    state.with(|s| s.page_size),
                                )
                            })
                            total_count=Signal::derive(move || filtered().len())
                            page_size=Signal::derive(move || state.with(|s| s.page_size))
                            on_page_change=Callback::new(move |page| {
                                state.update(|s| s.page = page);
                            })
                            on_page_size_change=Callback::new(move |page_size| {
                                state.update(|s| {
                                    s.page_size = page_size;
                                    s.page = 0;
                                });
                            })
                        />
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn StatusFlag(
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="status-flag">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

#[component]
fn ApplicationsTable(
    #[prop(into)] rows: Signal<Vec<ApplicationRecord>>,
    category: InstitutionCategory,
    navigator: Navigator,
    on_toggle_row: Callback<(String, bool)>,
    #[prop(into)] all_selected: Signal<bool>,
    on_toggle_all: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="data-table">
                <thead>
                    <tr>
                        <TableHeaderCheckbox all_selected=all_selected on_change=on_toggle_all />
                        <th>"Application №"</th>
                        <th>"Date"</th>
                        <th>"PRO"</th>
                        <th>"Campus"</th>
                        <th>"DGM"</th>
                        <th>"Zone"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows.get().into_iter().map(|record| {
                        let status = record.canonical_status();
                        let badge_class = status.badge_class().to_string();
                        let label = status.label();
                        view! {
                            <tr>
                                <TableCellCheckbox
                                    item_id=record.application_no.clone()
                                    checked=record.is_selected
                                    on_change=on_toggle_row
                                />
                                <td class="cell-application-no">{record.application_no.clone()}</td>
                                <td>{format_date(&record.date)}</td>
                                <td>{record.pro.clone()}</td>
                                <td>{record.campus.clone()}</td>
                                <td>{record.dgm.clone()}</td>
                                <td>{record.zone.clone()}</td>
                                <td><Badge class=badge_class>{label}</Badge></td>
                                <td class="cell-actions">
                                    <RowActions record=record category=category navigator=navigator />
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

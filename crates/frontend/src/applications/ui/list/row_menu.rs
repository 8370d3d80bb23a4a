//! Per-row workflow actions.
//!
//! College rosters get a hover-revealed action menu; school rosters
//! show the buttons inline. The hover reveal is a cancellable scheduled
//! task: leaving the row (or re-entering it) before the delay elapses
//! must never pop the menu open afterwards.

use contracts::applications::record::ApplicationRecord;
use contracts::enums::InstitutionCategory;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::applications::navigation::Navigator;
use crate::shared::icons::icon;

/// Hover delay before the action menu is revealed
const MENU_REVEAL_DELAY_MS: u32 = 1_000;

/// Menu phases: Idle -> Pending(timer) -> Revealed, with cancellation
/// transitions on leave and re-entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuPhase {
    Idle,
    Pending,
    Revealed,
}

#[component]
pub fn RowActions(
    record: ApplicationRecord,
    category: InstitutionCategory,
    navigator: Navigator,
) -> impl IntoView {
    match category {
        InstitutionCategory::College => view! {
            <HoverActionMenu record=record category=category navigator=navigator />
        }
        .into_any(),
        InstitutionCategory::School => view! {
            <div class="row-actions row-actions--inline">
                <ActionButtons record=record category=category navigator=navigator />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn HoverActionMenu(
    record: ApplicationRecord,
    category: InstitutionCategory,
    navigator: Navigator,
) -> impl IntoView {
    let (phase, set_phase) = signal(MenuPhase::Idle);
    let pending = StoredValue::new_local(None::<Timeout>);

    let cancel_pending = move || {
        pending.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
    };

    let on_enter = move |_| {
        cancel_pending();
        set_phase.set(MenuPhase::Pending);
        let timer = Timeout::new(MENU_REVEAL_DELAY_MS, move || {
            set_phase.set(MenuPhase::Revealed);
        });
        pending.set_value(Some(timer));
    };

    let on_leave = move |_| {
        cancel_pending();
        set_phase.set(MenuPhase::Idle);
    };

    view! {
        <div
            class="row-actions"
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <button class="row-actions__trigger" title="Actions">
                {icon("more-vertical")}
            </button>
            {move || {
                if phase.get() == MenuPhase::Revealed {
                    view! {
                        <div class="row-actions__menu">
                            <ActionButtons
                                record=record.clone()
                                category=category
                                navigator=navigator
                            />
                        </div>
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
fn ActionButtons(
    record: ApplicationRecord,
    category: InstitutionCategory,
    navigator: Navigator,
) -> impl IntoView {
    let sale_record = record.clone();
    let confirm_record = record.clone();
    let damage_record = record;

    view! {
        <button
            class="action-btn action-btn--sale"
            on:click=move |_| navigator.sale(&sale_record, category)
        >
            "Sale"
        </button>
        <button
            class="action-btn action-btn--confirm"
            on:click=move |_| navigator.confirmation(&confirm_record, category)
        >
            "Confirm"
        </button>
        <button
            class="action-btn action-btn--damage"
            on:click=move |_| navigator.damage(&damage_record)
        >
            "Damage report"
        </button>
    }
}

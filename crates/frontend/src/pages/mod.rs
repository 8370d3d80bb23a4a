//! Destination pages for the application workflow steps.
//!
//! These are collaborators of the roster view, not part of it: each one
//! picks the routed application out of history state and hands it to
//! its own form flow.

use leptos::prelude::*;

use crate::applications::navigation::routed_application;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;

#[component]
fn WorkflowPage(title: &'static str) -> impl IntoView {
    let application = routed_application();

    view! {
        <div class="workflow-page">
            <div class="workflow-page__header">
                {icon("file-text")}
                <h2>{title}</h2>
            </div>
            {match application {
                Some(application) => {
                    let status = application.canonical_status();
                    view! {
                        <div class="workflow-page__application">
                            <span class="workflow-page__no">
                                {application.application_no.clone()}
                            </span>
                            <Badge class=status.badge_class().to_string()>
                                {status.label()}
                            </Badge>
                            <span class="workflow-page__campus">
                                {application.campus.clone()}
                            </span>
                        </div>
                    }
                    .into_any()
                }
                None => view! {
                    <div class="workflow-page__missing">
                        "No application was routed to this page."
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
pub fn SalePage() -> impl IntoView {
    view! { <WorkflowPage title="Sale" /> }
}

#[component]
pub fn CollegeSalePage() -> impl IntoView {
    view! { <WorkflowPage title="College Sale" /> }
}

#[component]
pub fn CollegeFastSalePage() -> impl IntoView {
    view! { <WorkflowPage title="Complete Fast Sale" /> }
}

#[component]
pub fn ConfirmationPage() -> impl IntoView {
    view! { <WorkflowPage title="Confirmation" /> }
}

#[component]
pub fn CollegeConfirmationPage() -> impl IntoView {
    view! { <WorkflowPage title="College Confirmation" /> }
}

#[component]
pub fn DamageReportPage() -> impl IntoView {
    view! { <WorkflowPage title="Damage Report" /> }
}

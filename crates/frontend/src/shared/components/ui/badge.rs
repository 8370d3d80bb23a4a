use leptos::prelude::*;

/// Badge component. The modifier class comes from the status display
/// metadata ("badge--success", "badge--error", ...); unknown statuses
/// pass an empty one and render unstyled.
#[component]
pub fn Badge(
    /// Modifier class appended to the base "badge" class
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=move || {
            let modifier = class.get().unwrap_or_default();
            if modifier.is_empty() {
                "badge".to_string()
            } else {
                format!("badge {}", modifier)
            }
        }>
            {children()}
        </span>
    }
}

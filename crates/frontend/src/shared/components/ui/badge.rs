use leptos::prelude::*;

/// Small label chip, used for product badges.
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="chip">
            {children()}
        </span>
    }
}

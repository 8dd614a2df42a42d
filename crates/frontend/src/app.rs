use crate::layout::{ConfirmModalService, ToastService};
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // App-wide notification services, reachable from any page via context.
    provide_context(ToastService::new());
    provide_context(ConfirmModalService::new());

    view! {
        <AppRoutes />
    }
}

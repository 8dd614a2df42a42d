use leptos::prelude::*;

pub fn icon(name: &str) -> AnyView {
    match name {
        "arrow-right" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" focusable="false">
                <path d="M5 12h12"/>
                <path d="M13 5l7 7-7 7"/>
            </svg>
        }
        .into_any(),
        "leaf" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" focusable="false">
                <path d="M11 20A7 7 0 0 1 4 13c0-5 4-9 9-9a9 9 0 0 1 7 3c0 7-4 13-9 13z"/>
                <path d="M4 21c4-4 7-6 12-8"/>
            </svg>
        }
        .into_any(),
        _ => view! { <></> }.into_any(),
    }
}

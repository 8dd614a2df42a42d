//! Thin wrappers around the browser document.
//!
//! Every helper tolerates a missing window, document or element by doing
//! nothing (or returning a fallback) instead of failing.

use chrono::NaiveDate;
use wasm_bindgen::JsCast;

/// Move keyboard focus to the element with the given id, if it exists.
pub fn focus_by_id(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Current year, for the footer.
pub fn current_year() -> String {
    js_sys::Date::new_0().get_full_year().to_string()
}

/// Today's local calendar date, time-of-day truncated. The browser clock is
/// the only clock a wasm app can trust.
pub fn today_local() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

use contracts::domain::contact::form::error_slot_for;
use leptos::prelude::*;

/// Radio button component
#[component]
pub fn Radio(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Radio value
    #[prop(into)]
    value: String,
    /// Current selected value
    #[prop(into)]
    checked_value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
) -> impl IntoView {
    let value_for_id = value.clone();
    let value_for_check = value.clone();
    let value_for_change = value.clone();

    let radio_id = format!("{}-{}", name, value_for_id);
    let is_checked = move || checked_value.get() == value_for_check;

    view! {
        <div class="form__radio-wrapper">
            <input
                id=radio_id.clone()
                type="radio"
                class="form__radio"
                name=name
                value=value
                prop:checked=is_checked
                on:change=move |_| {
                    if let Some(handler) = on_change {
                        handler.run(value_for_change.clone());
                    }
                }
            />
            <label class="form__radio-label" for=radio_id>
                {label}
            </label>
        </div>
    }
}

/// Mutually exclusive radio group with a shared error slot.
///
/// The group's `name` is its field identity; the error message, when set,
/// lands in the matching `error-*` slot under the options.
#[component]
pub fn RadioGroup(
    /// Label for the group
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current selected value; empty means nothing checked
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Current validation error for the group
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let slot_id = error_slot_for(&name);

    view! {
        <div class="form__group" role="radiogroup">
            {move || label.get().map(|l| view! {
                <span class="form__label">{l}</span>
            })}
            <div class="form__radio-group">
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children={
                        let name = name.clone();
                        move |(val, lbl)| {
                            let on_change_inner = move |new_val: String| {
                                if let Some(handler) = on_change {
                                    handler.run(new_val);
                                }
                            };
                            view! {
                                <Radio
                                    label=lbl
                                    value=val
                                    checked_value=value
                                    on_change=Callback::new(on_change_inner)
                                    name=name.clone()
                                />
                            }
                        }
                    }
                />
            </div>
            <p class="form__error" id=slot_id role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </div>
    }
}

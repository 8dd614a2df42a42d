use contracts::domain::contact::form::error_slot_for;
use leptos::prelude::*;

/// Input component with label and inline error support.
///
/// When `error` carries a message the control gets the accessible invalid
/// flag plus the `is-invalid` class, and the message lands in the paired
/// `error-*` slot; clearing the error reverts both. Both directions are
/// idempotent because everything renders from the same `error` prop.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// ID of the input element, also the field identity for the error slot
    #[prop(into)]
    id: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "tel", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// Current validation error for this field
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let slot_id = error_slot_for(&id);
    let label_for = id.clone();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <input
                id=id
                class=move || {
                    if has_error() {
                        "form__input is-invalid"
                    } else {
                        "form__input"
                    }
                }
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                autocomplete=input_autocomplete
                aria-invalid=move || has_error().then_some("true")
                aria-describedby=slot_id.clone()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <p class="form__error" id=slot_id role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </div>
    }
}

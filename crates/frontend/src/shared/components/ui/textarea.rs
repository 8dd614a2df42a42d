use contracts::domain::contact::form::error_slot_for;
use leptos::prelude::*;

/// Textarea component with label and inline error support.
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// ID of the textarea element, also the field identity for the error slot
    #[prop(into)]
    id: String,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// Current validation error for this field
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let slot_id = error_slot_for(&id);
    let label_for = id.clone();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <textarea
                id=id
                class=move || {
                    if has_error() {
                        "form__textarea is-invalid"
                    } else {
                        "form__textarea"
                    }
                }
                prop:value=move || value.get()
                placeholder=textarea_placeholder
                required=required
                rows=textarea_rows
                aria-invalid=move || has_error().then_some("true")
                aria-describedby=slot_id.clone()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {value.get_untracked()}
            </textarea>
            <p class="form__error" id=slot_id role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </div>
    }
}

use contracts::domain::contact::form::{validate, ContactField, ContactForm, ContactFormErrors};
use leptos::prelude::*;

use crate::layout::{ConfirmModalService, ToastService};
use crate::shared::components::ui::{Button, Input, RadioGroup, Textarea};
use crate::shared::dom::{focus_by_id, today_local};

/// Contact request page.
///
/// Two states only: editing (typing clears the touched field's error) and a
/// validated submit. A submit runs every check, paints every failing field
/// and focuses the first invalid one; a clean submit notifies, opens the
/// confirmation dialog and resets the form.
#[component]
#[allow(non_snake_case)]
pub fn ContactPage() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");
    let modal =
        use_context::<ConfirmModalService>().expect("ConfirmModalService not provided in context");

    let last_name = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let time_slot = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let errors = RwSignal::new(ContactFormErrors::default());

    // Editing a field is optimistic: its error disappears immediately.
    let field_input = move |field: ContactField, target: RwSignal<String>| {
        Callback::new(move |value: String| {
            target.set(value);
            errors.update(|e| e.clear(field));
        })
    };

    let field_error = move |field: ContactField| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let slot_options = Signal::derive(|| {
        vec![
            ("matin".to_string(), "Matin (9h – 12h)".to_string()),
            ("apres-midi".to_string(), "Après-midi (14h – 17h)".to_string()),
            ("soir".to_string(), "Soir (18h – 20h)".to_string()),
        ]
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = ContactForm {
            last_name: last_name.get(),
            first_name: first_name.get(),
            birth_date: birth_date.get(),
            email: email.get(),
            phone: phone.get(),
            time_slot: time_slot.get(),
            message: message.get(),
        };

        let result = validate(&form, today_local());
        if result.is_ok() {
            errors.set(ContactFormErrors::default());
            toast.show("Succès : ton message a bien été envoyé.");
            modal.open();
            for field in [
                last_name, first_name, birth_date, email, phone, time_slot, message,
            ] {
                field.set(String::new());
            }
        } else {
            let first = result.first_invalid();
            errors.set(result);
            if let Some(field) = first {
                focus_by_id(field.id());
            }
        }
    };

    view! {
        <section class="contact">
            <h1>"Contacte l’atelier"</h1>
            <p class="contact__intro">
                "Une question, une commande sur mesure ? Laisse-nous un message."
            </p>

            <form id="contactForm" class="form" novalidate=true on:submit=on_submit>
                <div class="form__row">
                    <Input
                        label="Nom"
                        id=ContactField::LastName.id()
                        value=last_name
                        on_input=field_input(ContactField::LastName, last_name)
                        autocomplete="family-name"
                        required=true
                        error=field_error(ContactField::LastName)
                    />
                    <Input
                        label="Prénom"
                        id=ContactField::FirstName.id()
                        value=first_name
                        on_input=field_input(ContactField::FirstName, first_name)
                        autocomplete="given-name"
                        required=true
                        error=field_error(ContactField::FirstName)
                    />
                </div>

                <Input
                    label="Date de naissance"
                    id=ContactField::BirthDate.id()
                    value=birth_date
                    on_input=field_input(ContactField::BirthDate, birth_date)
                    placeholder="JJ/MM/AAAA"
                    required=true
                    error=field_error(ContactField::BirthDate)
                />

                <div class="form__row">
                    <Input
                        label="Email"
                        id=ContactField::Email.id()
                        value=email
                        on_input=field_input(ContactField::Email, email)
                        input_type="email"
                        placeholder="prenom.nom@domaine.com"
                        autocomplete="email"
                        required=true
                        error=field_error(ContactField::Email)
                    />
                    <Input
                        label="Téléphone"
                        id=ContactField::Phone.id()
                        value=phone
                        on_input=field_input(ContactField::Phone, phone)
                        input_type="tel"
                        placeholder="06 12 34 56 78"
                        autocomplete="tel"
                        required=true
                        error=field_error(ContactField::Phone)
                    />
                </div>

                <RadioGroup
                    label="Plage horaire pour te rappeler"
                    name=ContactField::TimeSlot.id()
                    value=time_slot
                    on_change=field_input(ContactField::TimeSlot, time_slot)
                    options=slot_options
                    error=field_error(ContactField::TimeSlot)
                />

                <Textarea
                    label="Message"
                    id=ContactField::Message.id()
                    value=message
                    on_input=field_input(ContactField::Message, message)
                    placeholder="Dis-nous en plus sur ton projet (10 caractères minimum)."
                    rows=6
                    required=true
                    error=field_error(ContactField::Message)
                />

                <Button button_type="submit">"Envoyer"</Button>
            </form>
        </section>
    }
}

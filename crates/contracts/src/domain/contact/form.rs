//! Contact request form: field identities, per-field error state and the
//! submit-time validation pass.

use chrono::NaiveDate;

use super::validators;

/// Stable identity of a contact form field, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    LastName,
    FirstName,
    BirthDate,
    Email,
    Phone,
    TimeSlot,
    Message,
}

/// Fields that carry the invalid marker and can receive focus. The time slot
/// is a radio group and is never marked invalid itself, only its error slot
/// is filled, so it is not a focus target.
pub const FOCUSABLE_FIELDS: [ContactField; 6] = [
    ContactField::LastName,
    ContactField::FirstName,
    ContactField::BirthDate,
    ContactField::Email,
    ContactField::Phone,
    ContactField::Message,
];

impl ContactField {
    /// The input element id this field binds to.
    pub fn id(&self) -> &'static str {
        match self {
            ContactField::LastName => "lastName",
            ContactField::FirstName => "firstName",
            ContactField::BirthDate => "birthDate",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::TimeSlot => "timeSlot",
            ContactField::Message => "message",
        }
    }

    /// The id of the error-text slot paired with this field.
    pub fn error_slot_id(&self) -> String {
        error_slot_for(self.id())
    }
}

/// Deterministic field-identity to error-slot mapping: `error-` plus the
/// kebab-cased element id.
pub fn error_slot_for(field_id: &str) -> String {
    let mut slot = String::with_capacity(field_id.len() + 8);
    slot.push_str("error-");
    for c in field_id.chars() {
        if c.is_ascii_uppercase() {
            slot.push('-');
            slot.push(c.to_ascii_lowercase());
        } else {
            slot.push(c);
        }
    }
    slot
}

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub last_name: String,
    pub first_name: String,
    pub birth_date: String,
    pub email: String,
    pub phone: String,
    pub time_slot: String,
    pub message: String,
}

impl ContactForm {
    /// Value of the checked option of the time-slot radio group, or `None`
    /// when nothing is checked yet.
    pub fn selected_time_slot(&self) -> Option<&str> {
        if self.time_slot.is_empty() {
            None
        } else {
            Some(&self.time_slot)
        }
    }
}

/// One optional message per field. Created on each submit attempt, discarded
/// as soon as the UI has been updated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormErrors {
    last_name: Option<String>,
    first_name: Option<String>,
    birth_date: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    time_slot: Option<String>,
    message: Option<String>,
}

impl ContactFormErrors {
    fn slot(&self, field: ContactField) -> &Option<String> {
        match field {
            ContactField::LastName => &self.last_name,
            ContactField::FirstName => &self.first_name,
            ContactField::BirthDate => &self.birth_date,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::TimeSlot => &self.time_slot,
            ContactField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut Option<String> {
        match field {
            ContactField::LastName => &mut self.last_name,
            ContactField::FirstName => &mut self.first_name,
            ContactField::BirthDate => &mut self.birth_date,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::TimeSlot => &mut self.time_slot,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: ContactField, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: ContactField) {
        *self.slot_mut(field) = None;
    }

    pub fn is_ok(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// First invalid input in document order, radio group excluded.
    pub fn first_invalid(&self) -> Option<ContactField> {
        FOCUSABLE_FIELDS
            .into_iter()
            .find(|f| self.get(*f).is_some())
    }
}

impl ContactField {
    pub const ALL: [ContactField; 7] = [
        ContactField::LastName,
        ContactField::FirstName,
        ContactField::BirthDate,
        ContactField::Email,
        ContactField::Phone,
        ContactField::TimeSlot,
        ContactField::Message,
    ];
}

/// Runs every field check in document order and annotates each failure.
///
/// Checks never short-circuit: a failing last name still lets the phone
/// check run, so one submit paints the whole form. `today` bounds the birth
/// date (no future dates).
pub fn validate(form: &ContactForm, today: NaiveDate) -> ContactFormErrors {
    let mut errors = ContactFormErrors::default();

    if form.last_name.trim().is_empty() {
        errors.set(ContactField::LastName, "Le nom est requis.");
    } else if !validators::is_valid_name(&form.last_name) {
        errors.set(
            ContactField::LastName,
            "Nom invalide (lettres, accents, espaces, tirets, apostrophes).",
        );
    }

    if form.first_name.trim().is_empty() {
        errors.set(ContactField::FirstName, "Le prénom est requis.");
    } else if !validators::is_valid_name(&form.first_name) {
        errors.set(
            ContactField::FirstName,
            "Prénom invalide (lettres, accents, espaces, tirets, apostrophes).",
        );
    }

    if form.birth_date.trim().is_empty() {
        errors.set(ContactField::BirthDate, "La date de naissance est requise.");
    } else if validators::parse_birth_date(&form.birth_date, today).is_none() {
        errors.set(
            ContactField::BirthDate,
            "Date invalide. Format JJ/MM/AAAA (pas dans le futur).",
        );
    }

    if form.email.trim().is_empty() {
        errors.set(ContactField::Email, "L’email est requis.");
    } else if !validators::is_valid_email(&form.email) {
        errors.set(
            ContactField::Email,
            "Email invalide. Exemple : prenom.nom@domaine.com",
        );
    }

    if form.phone.trim().is_empty() {
        errors.set(ContactField::Phone, "Le téléphone est requis.");
    } else if !validators::is_valid_phone_fr(&form.phone) {
        errors.set(
            ContactField::Phone,
            "Téléphone invalide. Ex : 06 12 34 56 78 ou +33 6 12 34 56 78",
        );
    }

    if form.selected_time_slot().is_none() {
        errors.set(ContactField::TimeSlot, "Choisis une plage horaire.");
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.set(ContactField::Message, "Le message est requis.");
    } else if message.chars().count() < 10 {
        errors.set(
            ContactField::Message,
            "Le message doit faire au moins 10 caractères.",
        );
    } else if message.chars().count() > 1000 {
        errors.set(
            ContactField::Message,
            "Le message ne doit pas dépasser 1000 caractères.",
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            last_name: "Quignon".to_string(),
            first_name: "Élise".to_string(),
            birth_date: "14/07/1988".to_string(),
            email: "elise.quignon@exemple.fr".to_string(),
            phone: "06 12 34 56 78".to_string(),
            time_slot: "matin".to_string(),
            message: "Bonjour, je voudrais une planche sur mesure.".to_string(),
        }
    }

    #[test]
    fn empty_form_marks_every_field() {
        let errors = validate(&ContactForm::default(), today());
        for field in ContactField::ALL {
            assert!(errors.get(field).is_some(), "{} not marked", field.id());
        }
        assert!(!errors.is_ok());
    }

    #[test]
    fn valid_form_marks_nothing() {
        let errors = validate(&valid_form(), today());
        assert!(errors.is_ok());
        assert_eq!(errors.first_invalid(), None);
    }

    #[test]
    fn checks_do_not_short_circuit() {
        let form = ContactForm {
            last_name: "--".to_string(),
            phone: "123".to_string(),
            ..valid_form()
        };
        let errors = validate(&form, today());
        assert!(errors.get(ContactField::LastName).is_some());
        assert!(errors.get(ContactField::Phone).is_some());
        assert!(errors.get(ContactField::Email).is_none());
    }

    #[test]
    fn message_bounds_are_enforced() {
        let short = ContactForm {
            message: "trop peu".to_string(),
            ..valid_form()
        };
        assert!(validate(&short, today())
            .get(ContactField::Message)
            .is_some());

        let long = ContactForm {
            message: "a".repeat(1001),
            ..valid_form()
        };
        assert!(validate(&long, today()).get(ContactField::Message).is_some());
    }

    #[test]
    fn first_invalid_follows_document_order_and_skips_radio_group() {
        let form = ContactForm {
            time_slot: String::new(),
            message: String::new(),
            ..valid_form()
        };
        let errors = validate(&form, today());
        // Time slot is flagged but not focusable; message comes first.
        assert!(errors.get(ContactField::TimeSlot).is_some());
        assert_eq!(errors.first_invalid(), Some(ContactField::Message));

        let form = ContactForm {
            email: "pas-un-email".to_string(),
            message: String::new(),
            ..valid_form()
        };
        assert_eq!(
            validate(&form, today()).first_invalid(),
            Some(ContactField::Email)
        );
    }

    #[test]
    fn set_and_clear_are_idempotent() {
        let mut errors = ContactFormErrors::default();
        errors.set(ContactField::Email, "Email invalide.");
        errors.set(ContactField::Email, "Email invalide.");
        assert_eq!(errors.get(ContactField::Email), Some("Email invalide."));
        errors.clear(ContactField::Email);
        errors.clear(ContactField::Email);
        assert_eq!(errors.get(ContactField::Email), None);
        assert!(errors.is_ok());
    }

    #[test]
    fn error_slots_use_kebab_case_ids() {
        assert_eq!(ContactField::LastName.error_slot_id(), "error-last-name");
        assert_eq!(ContactField::BirthDate.error_slot_id(), "error-birth-date");
        assert_eq!(ContactField::TimeSlot.error_slot_id(), "error-time-slot");
        assert_eq!(ContactField::Message.error_slot_id(), "error-message");
    }
}

//! Pure validation predicates for the contact form fields.
//!
//! Every function works on trimmed input and holds no state; the caller
//! decides what to do with a rejection.

use chrono::NaiveDate;

/// A name is letter-runs separated by single spaces, apostrophes or hyphens:
/// no leading, trailing or doubled separator, and at least two characters
/// once trimmed. `char::is_alphabetic` covers the whole Unicode letter class,
/// accented Latin included.
pub fn is_valid_name(value: &str) -> bool {
    let v = value.trim();
    if v.chars().count() < 2 {
        return false;
    }

    let mut prev_is_letter = false;
    for c in v.chars() {
        if c.is_alphabetic() {
            prev_is_letter = true;
        } else if matches!(c, ' ' | '\'' | '-') {
            if !prev_is_letter {
                return false;
            }
            prev_is_letter = false;
        } else {
            return false;
        }
    }
    prev_is_letter
}

/// Parses a strict `DD/MM/YYYY` birth date.
///
/// The year must fall in [1900, 2100], the triple must form a real calendar
/// date (no 30 February), and the date may not lie after `today`. Returns the
/// parsed date, or `None` on any violation. `today` is passed in so the check
/// stays pure; the caller supplies the current local date truncated to
/// midnight.
pub fn parse_birth_date(value: &str, today: NaiveDate) -> Option<NaiveDate> {
    let v = value.trim();
    let (day_s, rest) = v.split_once('/')?;
    let (month_s, year_s) = rest.split_once('/')?;
    if day_s.len() != 2 || month_s.len() != 2 || year_s.len() != 4 {
        return None;
    }
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(day_s) || !all_digits(month_s) || !all_digits(year_s) {
        return None;
    }

    let day: u32 = day_s.parse().ok()?;
    let month: u32 = month_s.parse().ok()?;
    let year: i32 = year_s.parse().ok()?;

    if !(1900..=2100).contains(&year) {
        return None;
    }
    if !(1..=12).contains(&month) {
        return None;
    }
    if !(1..=31).contains(&day) {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    if date > today {
        return None;
    }
    Some(date)
}

/// Deliberately loose email shape: one `@` with non-whitespace, non-`@` runs
/// on both sides and a dot inside the domain. Not RFC 5322.
pub fn is_valid_email(value: &str) -> bool {
    let v = value.trim();
    let run_ok = |s: &str| !s.is_empty() && s.chars().all(|c| !c.is_whitespace() && c != '@');

    let Some((local, domain)) = v.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    run_ok(local) && run_ok(host) && run_ok(tld)
}

/// French phone number: after stripping spaces, dots and hyphens the string
/// must be `0`, `+33` or `0033` followed by nine digits.
pub fn is_valid_phone_fr(value: &str) -> bool {
    let normalized: String = value
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.' && *c != '-')
        .collect();

    let nine_digits = |rest: &str| rest.len() == 9 && rest.chars().all(|c| c.is_ascii_digit());

    if let Some(rest) = normalized.strip_prefix("0033") {
        return nine_digits(rest);
    }
    if let Some(rest) = normalized.strip_prefix("+33") {
        return nine_digits(rest);
    }
    if let Some(rest) = normalized.strip_prefix('0') {
        return nine_digits(rest);
    }
    false
}

/// Message body must fit in [10, 1000] characters once trimmed.
pub fn is_valid_message_length(value: &str) -> bool {
    let n = value.trim().chars().count();
    (10..=1000).contains(&n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn name_accepts_compound_and_accented() {
        assert!(is_valid_name("Jean-Paul"));
        assert!(is_valid_name("O'Neil"));
        assert!(is_valid_name("José María"));
        assert!(is_valid_name("  Anne  "));
    }

    #[test]
    fn name_rejects_short_and_malformed() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("A"));
        assert!(!is_valid_name(" a "));
        assert!(!is_valid_name("123"));
        assert!(!is_valid_name("Jean--Paul"));
        assert!(!is_valid_name("-Jean"));
        assert!(!is_valid_name("Jean-"));
        assert!(!is_valid_name("Jean  Paul"));
        assert!(is_valid_name("Jean Paul"));
    }

    #[test]
    fn birth_date_accepts_real_dates_only() {
        let today = date(2024, 6, 1);
        assert_eq!(
            parse_birth_date("29/02/2024", today),
            Some(date(2024, 2, 29))
        );
        assert_eq!(parse_birth_date("29/02/2023", today), None);
        assert_eq!(parse_birth_date("31/04/2024", today), None);
        assert_eq!(
            parse_birth_date("01/01/1900", today),
            Some(date(1900, 1, 1))
        );
    }

    #[test]
    fn birth_date_rejects_out_of_range_years() {
        let today = date(2024, 6, 1);
        assert_eq!(parse_birth_date("31/12/1899", today), None);
        assert_eq!(parse_birth_date("01/01/2101", today), None);
    }

    #[test]
    fn birth_date_rejects_future() {
        let today = date(2024, 6, 1);
        assert_eq!(parse_birth_date("02/06/2024", today), None);
        assert_eq!(
            parse_birth_date("01/06/2024", today),
            Some(date(2024, 6, 1))
        );
    }

    #[test]
    fn birth_date_rejects_malformed_shapes() {
        let today = date(2024, 6, 1);
        assert_eq!(parse_birth_date("1/06/2024", today), None);
        assert_eq!(parse_birth_date("01-06-2024", today), None);
        assert_eq!(parse_birth_date("01/06/24", today), None);
        assert_eq!(parse_birth_date("01/06/2024/x", today), None);
        assert_eq!(parse_birth_date("", today), None);
    }

    #[test]
    fn email_loose_pattern() {
        assert!(is_valid_email("prenom.nom@domaine.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("a@b.c.d"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_fr_accepts_usual_writings() {
        assert!(is_valid_phone_fr("06 12 34 56 78"));
        assert!(is_valid_phone_fr("+33612345678"));
        assert!(is_valid_phone_fr("0033 6 12 34 56 78"));
        assert!(is_valid_phone_fr("06.12.34.56.78"));
        assert!(is_valid_phone_fr("06-12-34-56-78"));
    }

    #[test]
    fn phone_fr_rejects_everything_else() {
        assert!(!is_valid_phone_fr(""));
        assert!(!is_valid_phone_fr("123456"));
        assert!(!is_valid_phone_fr("+44 20 7946 0958"));
        assert!(!is_valid_phone_fr("06 12 34 56 7"));
        assert!(!is_valid_phone_fr("06 12 34 56 789"));
        assert!(!is_valid_phone_fr("+3361234567a"));
    }

    #[test]
    fn message_length_bounds() {
        assert!(!is_valid_message_length(""));
        assert!(!is_valid_message_length(&"trop court"[..9]));
        assert!(is_valid_message_length("dix chars!"));
        assert!(is_valid_message_length(&"a".repeat(1000)));
        assert!(!is_valid_message_length(&"a".repeat(1001)));
        assert!(!is_valid_message_length(&format!("   {}   ", "a".repeat(9))));
    }
}

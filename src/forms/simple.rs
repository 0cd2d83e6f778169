//! Simple form: two required fields.

use super::{AGE, MISSING_AGE, MISSING_NAME, NAME};
use crate::field::{Form, FormResult, ValidationContext};

/// Build the simple form.
///
pub fn simple_form() -> Form {
    Form::new("simple")
        .field(NAME, "", validate_name)
        .field(AGE, "", validate_age)
}

fn validate_name(form: &mut Form, _: ValidationContext) -> FormResult<Option<String>> {
    Ok(form
        .value(NAME)?
        .is_blank()
        .then(|| MISSING_NAME.to_string()))
}

fn validate_age(form: &mut Form, _: ValidationContext) -> FormResult<Option<String>> {
    Ok(form.value(AGE)?.is_blank().then(|| MISSING_AGE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_empty_form_shows_both_errors() {
        let mut form = simple_form();
        let outcome = form.submit().unwrap();
        assert!(!outcome.accepted);
        assert_eq!(outcome.invalid_fields, vec![NAME, AGE]);
        assert_eq!(
            form.field_state(NAME).unwrap().error_message(),
            Some(MISSING_NAME)
        );
        assert_eq!(
            form.field_state(AGE).unwrap().error_message(),
            Some(MISSING_AGE)
        );
    }

    #[test]
    fn test_submit_filled_form() {
        let mut form = simple_form();
        form.update(NAME, "Ada").unwrap();
        form.update(AGE, "36").unwrap();
        assert!(form.submit().unwrap().accepted);
    }

    #[test]
    fn test_clearing_a_field_reports_it_while_typing() {
        let mut form = simple_form();
        form.update(NAME, "A").unwrap();
        assert!(form.field_state(NAME).unwrap().is_valid());
        form.update(NAME, "").unwrap();
        assert_eq!(
            form.field_state(NAME).unwrap().error_message(),
            Some(MISSING_NAME)
        );
    }
}

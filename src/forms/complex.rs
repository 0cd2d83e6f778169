//! Complex form: name, age and birth date.
//!
//! Age and birth date depend on each other. A final age check re-validates
//! the birth date, and a valid birth date fills in a blank age. Writing the
//! age from the birth date rule goes through `update`, which validates the
//! age in editing mode and so never re-validates the birth date. Submitting
//! checks age before birth date, so the birth date is always compared with
//! the age that is current after age's own check.

use super::{AGE, BIRTH_DATE, MISSING_AGE, MISSING_NAME, NAME};
use crate::field::{FieldValue, Form, FormResult, ValidationContext};
use chrono::{Datelike, Local, NaiveDate};
use log::*;
use regex::Regex;

/// Youngest age accepted by the form.
///
pub const MINIMUM_AGE: i64 = 13;

/// Below this age a birth date is required.
///
pub const BIRTH_DATE_REQUIRED_BELOW: i64 = 18;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_SHAPE: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Build the complex form, computing ages relative to today.
///
pub fn complex_form() -> Form {
    complex_form_at(Local::now().date_naive())
}

/// Build the complex form, computing ages relative to the given date.
///
pub fn complex_form_at(today: NaiveDate) -> Form {
    Form::new("complex")
        .field(NAME, "", validate_name)
        .field(AGE, "", validate_age)
        .field(BIRTH_DATE, "", move |form: &mut Form, context| {
            validate_birth_date(form, context, today)
        })
}

fn validate_name(form: &mut Form, context: ValidationContext) -> FormResult<Option<String>> {
    let name = form.value(NAME)?.to_string();
    let Some(first) = name.chars().next().filter(|_| !name.trim().is_empty()) else {
        return Ok(Some(MISSING_NAME.to_string()));
    };
    if first.to_uppercase().next() != Some(first) {
        return Ok(Some("First character should be uppercase".to_string()));
    }
    if !context.is_editing && name.chars().count() < 2 {
        return Ok(Some("A name must be at least two characters".to_string()));
    }
    Ok(None)
}

fn validate_age(form: &mut Form, context: ValidationContext) -> FormResult<Option<String>> {
    let age = form.value(AGE)?;
    if age.is_blank() {
        return Ok(Some(MISSING_AGE.to_string()));
    }
    let Some(years) = age.as_integer() else {
        return Ok(Some("Age must be a whole number".to_string()));
    };
    if years < 0 {
        return Ok(Some("Back from the future?".to_string()));
    }
    if !context.is_editing {
        if years < MINIMUM_AGE {
            return Ok(Some(format!(
                "We are sorry, but this form is only for grown ups. Please come back in {} years",
                MINIMUM_AGE - years
            )));
        }
        // Birth date rules read the age
        form.validate(BIRTH_DATE)?;
    }
    Ok(None)
}

fn validate_birth_date(
    form: &mut Form,
    context: ValidationContext,
    today: NaiveDate,
) -> FormResult<Option<String>> {
    let birth_date = form.value(BIRTH_DATE)?.to_string();
    let birth_date = birth_date.trim();
    let age = form.value(AGE)?.clone();
    let stated_age = age.as_integer();

    if birth_date.is_empty() {
        if !age.is_blank() && stated_age.map_or(false, |years| years < BIRTH_DATE_REQUIRED_BELOW) {
            return Ok(Some(format!(
                "You must tell us your birth date if you are below {}",
                BIRTH_DATE_REQUIRED_BELOW
            )));
        }
        return Ok(None);
    }
    if context.is_editing {
        return Ok(None);
    }

    let Some(date) = parse_birth_date(birth_date) else {
        return Ok(Some(
            "Please write your birth date on the format yyyy-mm-dd. I.e. 1955-02-24".to_string(),
        ));
    };
    if date > today {
        return Ok(Some("Birth date cannot be in the future".to_string()));
    }

    let real_age = age_on(date, today);
    if age.is_blank() {
        debug!("Deriving age {} from birth date {}", real_age, date);
        form.update(AGE, FieldValue::Integer(real_age))?;
    } else if stated_age != Some(real_age) {
        return Ok(Some("This does not match the age you entered".to_string()));
    }
    Ok(None)
}

/// Parse a strict `yyyy-mm-dd` calendar date.
///
pub fn parse_birth_date(text: &str) -> Option<NaiveDate> {
    match Regex::new(DATE_SHAPE) {
        Ok(shape) if !shape.is_match(text) => return None,
        Ok(_) => (),
        Err(e) => warn!("Failed to compile date pattern '{}': {}", DATE_SHAPE, e),
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Whole years between the birth date and the given day.
///
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i64 {
    let mut years = i64::from(today.year() - birth_date.year());
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years
}

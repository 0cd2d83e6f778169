//! Form state: an ordered set of named fields with their rules.

use super::{FieldState, FieldValue, FormError, FormResult};
use log::*;
use std::fmt;
use std::sync::Arc;

/// Context handed to a rule function on every validation run.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationContext {
    /// True while the user is still typing. Rules should skip checks that
    /// only make sense on a finished value.
    pub is_editing: bool,
}

impl ValidationContext {
    pub fn editing() -> Self {
        ValidationContext { is_editing: true }
    }

    pub fn final_value() -> Self {
        ValidationContext { is_editing: false }
    }
}

/// Rule function for one field. Returns an error message for an invalid
/// value and may read or update sibling fields through the form.
///
pub type Rule =
    Arc<dyn Fn(&mut Form, ValidationContext) -> FormResult<Option<String>> + Send + Sync>;

/// Completion hook fired once a field's update or validation has settled.
///
pub type Hook = Arc<dyn Fn(&Form, &str) + Send + Sync>;

/// Result of running every field's rule for a submission.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub accepted: bool,
    pub invalid_fields: Vec<String>,
}

struct Entry {
    name: String,
    default: FieldValue,
    state: FieldState,
    rule: Option<Rule>,
    hook: Option<Hook>,
}

/// Owns the field states of one form.
///
pub struct Form {
    name: String,
    entries: Vec<Entry>,
    validating: Vec<String>,
}

impl Form {
    /// Return a new form with no fields.
    ///
    pub fn new(name: impl Into<String>) -> Self {
        Form {
            name: name.into(),
            entries: vec![],
            validating: vec![],
        }
    }

    /// Declare a field validated by the given rule. Declaring a name twice
    /// replaces the earlier declaration.
    ///
    pub fn field<F>(self, name: &str, default: impl Into<FieldValue>, rule: F) -> Self
    where
        F: Fn(&mut Form, ValidationContext) -> FormResult<Option<String>> + Send + Sync + 'static,
    {
        let rule: Rule = Arc::new(rule);
        self.declare(name, default.into(), Some(rule))
    }

    /// Declare a field without a rule. It always validates.
    ///
    pub fn plain_field(self, name: &str, default: impl Into<FieldValue>) -> Self {
        self.declare(name, default.into(), None)
    }

    fn declare(mut self, name: &str, default: FieldValue, rule: Option<Rule>) -> Self {
        let entry = Entry {
            name: name.to_string(),
            state: FieldState::new(default.clone()),
            default,
            rule,
            hook: None,
        };
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    /// Attach a completion hook to a field.
    ///
    pub fn set_hook<F>(&mut self, name: &str, hook: F) -> FormResult<()>
    where
        F: Fn(&Form, &str) + Send + Sync + 'static,
    {
        let index = self.index_of(name)?;
        let hook: Hook = Arc::new(hook);
        self.entries[index].hook = Some(hook);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.entries.iter().map(|e| (e.name.as_str(), &e.state))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn field_state(&self, name: &str) -> FormResult<&FieldState> {
        let index = self.index_of(name)?;
        Ok(&self.entries[index].state)
    }

    pub fn value(&self, name: &str) -> FormResult<&FieldValue> {
        Ok(self.field_state(name)?.value())
    }

    /// True when every field passed its last validation run.
    ///
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|e| e.state.is_valid())
    }

    /// Set a field's value. The field becomes touched the first time the value
    /// actually changes; a touched field is then validated in editing mode.
    /// Validity is left as is until that validation runs.
    ///
    pub fn update(&mut self, name: &str, value: impl Into<FieldValue>) -> FormResult<()> {
        let index = self.index_of(name)?;
        let value = value.into();
        trace!("Updating field '{}' of form '{}' to {:?}", name, self.name, value);
        let touched = self.entries[index].state.replace_value(value);
        if touched && self.entries[index].rule.is_some() {
            self.validate_editing(name)?;
        } else {
            self.fire_hook(index);
        }
        Ok(())
    }

    /// Validate a field as a finished value. Returns true if it is valid.
    ///
    pub fn validate(&mut self, name: &str) -> FormResult<bool> {
        self.validate_with(name, ValidationContext::final_value())
    }

    /// Validate a field while it is still being edited.
    ///
    pub fn validate_editing(&mut self, name: &str) -> FormResult<bool> {
        self.validate_with(name, ValidationContext::editing())
    }

    /// Run the field's rule and store the result. The field is always marked
    /// touched. A rule may update or validate other fields; asking for a field
    /// whose rule is already running returns its current validity instead of
    /// running the rule again.
    ///
    pub fn validate_with(&mut self, name: &str, context: ValidationContext) -> FormResult<bool> {
        let index = self.index_of(name)?;
        if self.validating.iter().any(|n| n == name) {
            debug!(
                "Skipping nested validation of field '{}' in form '{}'",
                name, self.name
            );
            return Ok(self.entries[index].state.is_valid());
        }

        let message = match self.entries[index].rule.clone() {
            Some(rule) => {
                self.validating.push(name.to_string());
                let result = rule(self, context);
                self.validating.pop();
                result?
            }
            None => None,
        };

        let index = self.index_of(name)?;
        match &message {
            Some(message) => debug!("Field '{}' is invalid: {}", name, message),
            None => trace!("Field '{}' is valid", name),
        }
        let valid = message.is_none();
        self.entries[index].state.record_validation(message);
        self.fire_hook(index);
        Ok(valid)
    }

    /// Replace a field's error message without running its rule. The touched
    /// flag and value are kept.
    ///
    pub fn set_error_message(&mut self, name: &str, message: Option<String>) -> FormResult<()> {
        let index = self.index_of(name)?;
        self.entries[index].state.set_error_message(message);
        Ok(())
    }

    /// Validate every field as a finished value, in declaration order. All
    /// rules run even after a failure so every error is shown at once.
    ///
    pub fn submit(&mut self) -> FormResult<SubmitOutcome> {
        let names: Vec<String> = self.field_names().map(str::to_string).collect();
        let mut invalid_fields = vec![];
        for name in names {
            if !self.validate(&name)? {
                invalid_fields.push(name);
            }
        }
        let outcome = SubmitOutcome {
            accepted: invalid_fields.is_empty(),
            invalid_fields,
        };
        debug!("Submitted form '{}': {:?}", self.name, outcome);
        Ok(outcome)
    }

    /// Return every field to its declared default.
    ///
    pub fn reset(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.state = FieldState::new(entry.default.clone());
        }
    }

    /// Snapshot of the field values as a JSON object.
    ///
    pub fn values_json(&self) -> serde_json::Value {
        let values = self
            .entries
            .iter()
            .map(|e| {
                let value = serde_json::to_value(e.state.value()).unwrap_or_default();
                (e.name.clone(), value)
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(values)
    }

    fn index_of(&self, name: &str) -> FormResult<usize> {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| FormError::UnknownField {
                form: self.name.clone(),
                name: name.to_string(),
            })
    }

    fn fire_hook(&self, index: usize) {
        if let Some(hook) = self.entries[index].hook.clone() {
            hook(self, &self.entries[index].name);
        }
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("name", &self.name)
            .field(
                "fields",
                &self.entries.iter().map(|e| (&e.name, &e.state)).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn required(field: &'static str) -> impl Fn(&mut Form, ValidationContext) -> FormResult<Option<String>> {
        move |form: &mut Form, _: ValidationContext| {
            Ok(form
                .value(field)?
                .is_blank()
                .then(|| format!("Missing {}", field)))
        }
    }

    fn two_field_form() -> Form {
        Form::new("test")
            .field("name", "", required("name"))
            .field("city", "", required("city"))
    }

    #[test]
    fn test_new_fields_are_pristine() {
        let form = two_field_form();
        assert_eq!(form.len(), 2);
        for (_, state) in form.fields() {
            assert!(!state.is_touched());
            assert!(state.is_valid());
            assert!(state.error_message().is_none());
        }
        assert_eq!(form.field_names().collect::<Vec<_>>(), vec!["name", "city"]);
    }

    #[test]
    fn test_redeclaring_field_replaces_it() {
        let form = Form::new("test")
            .plain_field("name", "a")
            .plain_field("name", "b");
        assert_eq!(form.len(), 1);
        assert_eq!(form.value("name").unwrap(), &FieldValue::from("b"));
    }

    #[test]
    fn test_update_same_value_stays_pristine() {
        let mut form = two_field_form();
        form.update("name", "").unwrap();
        form.update("name", "").unwrap();
        let state = form.field_state("name").unwrap();
        assert!(!state.is_touched());
        assert!(state.is_valid());
    }

    #[test]
    fn test_update_change_touches_and_validates() {
        let mut form = two_field_form();
        form.update("name", "Ada").unwrap();
        let state = form.field_state("name").unwrap();
        assert!(state.is_touched());
        assert!(state.is_valid());

        form.update("name", "").unwrap();
        let state = form.field_state("name").unwrap();
        assert!(state.is_touched());
        assert_eq!(state.error_message(), Some("Missing name"));
    }

    #[test]
    fn test_touched_is_monotonic_across_updates() {
        let mut form = Form::new("test").plain_field("name", "a");
        let mut seen = vec![];
        for value in ["a", "a", "b", "a", "a"] {
            form.update("name", value).unwrap();
            seen.push(form.field_state("name").unwrap().is_touched());
        }
        assert_eq!(seen, vec![false, false, true, true, true]);
    }

    #[test]
    fn test_update_runs_rule_in_editing_mode() {
        let mut form = Form::new("test").field("name", "", |_, ctx: ValidationContext| {
            Ok((!ctx.is_editing).then(|| "final".to_string()))
        });
        form.update("name", "x").unwrap();
        assert!(form.field_state("name").unwrap().is_valid());
        assert!(!form.validate("name").unwrap());
        assert_eq!(
            form.field_state("name").unwrap().error_message(),
            Some("final")
        );
    }

    #[test]
    fn test_validate_editing_relaxes_rule() {
        let mut form =
            Form::new("test").field("code", "", |form: &mut Form, ctx: ValidationContext| {
                let short = form.value("code")?.to_string().chars().count() < 3;
                Ok((short && !ctx.is_editing).then(|| "Too short".to_string()))
            });
        form.update("code", "ab").unwrap();
        assert!(form.validate_editing("code").unwrap());
        assert!(form.field_state("code").unwrap().is_touched());
        assert!(form.field_state("code").unwrap().error_message().is_none());

        assert!(!form.validate("code").unwrap());
        assert_eq!(
            form.field_state("code").unwrap().error_message(),
            Some("Too short")
        );

        // An editing pass clears the final error again
        assert!(form.validate_editing("code").unwrap());
        assert!(form.field_state("code").unwrap().is_valid());
    }

    #[test]
    fn test_update_unknown_field_changes_nothing() {
        let mut form = two_field_form();
        form.update("name", "Ada").unwrap();
        let before = format!("{:?}", form);

        let error = form.update("nmae", "Bob").unwrap_err();
        assert_eq!(
            error,
            FormError::UnknownField {
                form: "test".to_string(),
                name: "nmae".to_string(),
            }
        );
        assert_eq!(format!("{:?}", form), before);
    }

    #[test]
    fn test_validate_unknown_field() {
        let mut form = two_field_form();
        assert!(matches!(
            form.validate("zip"),
            Err(FormError::UnknownField { .. })
        ));
        assert!(form.set_error_message("zip", None).is_err());
        assert!(form.field_state("zip").is_err());
    }

    #[test]
    fn test_validate_always_touches() {
        let mut form = two_field_form();
        assert!(!form.validate("name").unwrap());
        let state = form.field_state("name").unwrap();
        assert!(state.is_touched());
        assert!(!state.is_valid());

        let mut form = Form::new("test").plain_field("note", "");
        assert!(form.validate("note").unwrap());
        assert!(form.field_state("note").unwrap().is_touched());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut form = two_field_form();
        form.validate("name").unwrap();
        let first = form.field_state("name").unwrap().clone();
        form.validate("name").unwrap();
        assert_eq!(&first, form.field_state("name").unwrap());
    }

    #[test]
    fn test_rule_can_update_sibling() {
        let mut form = Form::new("test")
            .field("source", "", |form: &mut Form, _| {
                let text = form.value("source")?.to_string();
                form.update("mirror", text.to_uppercase())?;
                Ok(None)
            })
            .field("mirror", "", required("mirror"));
        form.update("source", "abc").unwrap();
        assert_eq!(form.value("mirror").unwrap(), &FieldValue::from("ABC"));
        let mirror = form.field_state("mirror").unwrap();
        assert!(mirror.is_touched());
        assert!(mirror.is_valid());
    }

    #[test]
    fn test_nested_validation_does_not_reenter() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let mut form = Form::new("test")
            .field("a", "", move |form: &mut Form, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                form.validate("b")?;
                Ok(None)
            })
            .field("b", "", |form: &mut Form, _| {
                form.validate("a")?;
                Ok(Some("b failed".to_string()))
            });
        assert!(form.validate("a").unwrap());
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(
            form.field_state("b").unwrap().error_message(),
            Some("b failed")
        );
    }

    #[test]
    fn test_rule_error_propagates() {
        let mut form =
            Form::new("test").field("a", "", |form: &mut Form, _| {
                form.validate("missing")?;
                Ok(None)
            });
        assert!(form.validate("a").is_err());
        // The guard is released after a failed rule
        assert!(form.validate("a").is_err());
    }

    #[test]
    fn test_set_error_message() {
        let mut form = two_field_form();
        form.set_error_message("name", Some("Taken".to_string()))
            .unwrap();
        let state = form.field_state("name").unwrap();
        assert!(!state.is_valid());
        assert!(!state.is_touched());
        assert!(!form.is_valid());

        form.set_error_message("name", None).unwrap();
        assert!(form.is_valid());
    }

    #[test]
    fn test_submit_runs_every_rule() {
        let mut form = two_field_form();
        let outcome = form.submit().unwrap();
        assert!(!outcome.accepted);
        assert_eq!(outcome.invalid_fields, vec!["name", "city"]);
        for (_, state) in form.fields() {
            assert!(state.is_touched());
            assert!(state.error_message().is_some());
        }
    }

    #[test]
    fn test_submit_accepts_valid_form() {
        let mut form = two_field_form();
        form.update("name", "Ada").unwrap();
        form.update("city", "Oslo").unwrap();
        let outcome = form.submit().unwrap();
        assert!(outcome.accepted);
        assert!(outcome.invalid_fields.is_empty());
    }

    #[test]
    fn test_submit_rejects_single_invalid_field() {
        let mut form = two_field_form();
        form.update("name", "Ada").unwrap();
        let outcome = form.submit().unwrap();
        assert!(!outcome.accepted);
        assert_eq!(outcome.invalid_fields, vec!["city"]);
        assert!(form.field_state("name").unwrap().is_touched());
    }

    #[test]
    fn test_hook_fires_after_update_and_validate() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut form = Form::new("test").plain_field("note", "");
        form.set_hook("note", move |_, name| {
            assert_eq!(name, "note");
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        form.update("note", "").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        form.update("note", "x").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        form.validate("note").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_hook_fires_once_when_update_validates() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut form = two_field_form();
        form.set_hook("name", move |form, name| {
            assert!(form.field_state(name).unwrap().is_touched());
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        form.update("name", "Ada").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reset() {
        let mut form = two_field_form();
        form.update("name", "Ada").unwrap();
        form.submit().unwrap();
        form.reset();
        for (_, state) in form.fields() {
            assert_eq!(state, &FieldState::new(""));
        }
    }

    #[test]
    fn test_values_json() {
        let mut form = Form::new("test")
            .plain_field("name", "")
            .plain_field("age", "");
        form.update("name", "Ada").unwrap();
        form.update("age", 36i64).unwrap();
        assert_eq!(
            form.values_json(),
            serde_json::json!({ "name": "Ada", "age": 36 })
        );
    }
}

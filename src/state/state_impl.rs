use super::form::{FormPane, SubmitStatus};
use super::navigation::View;
use super::StateError;
use crate::forms::FormKind;
use crate::logger::{new_log_buffer, LogBuffer};
use crate::ui::Theme;
use log::*;

/// Houses data representative of application state.
///
pub struct State {
    current_view: View,
    simple: FormPane,
    complex: FormPane,
    theme: Theme,
    log_buffer: LogBuffer,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            current_view: View::SimpleForm,
            simple: FormPane::new(FormKind::Simple),
            complex: FormPane::new(FormKind::Complex),
            theme: Theme::default(),
            log_buffer: new_log_buffer(),
        }
    }
}

impl State {
    /// Return new state showing the given form first.
    ///
    pub fn new(start_form: FormKind, theme: Theme, log_buffer: LogBuffer) -> Self {
        State {
            current_view: View::from(start_form),
            theme,
            log_buffer,
            ..State::default()
        }
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn current_view(&self) -> &View {
        &self.current_view
    }

    /// Switch to the other form.
    ///
    pub fn next_view(&mut self) -> &mut Self {
        self.current_view = self.current_view.next();
        debug!("Switched to {}", self.current_view.form_kind().title());
        self
    }

    pub fn pane(&self, kind: FormKind) -> &FormPane {
        match kind {
            FormKind::Simple => &self.simple,
            FormKind::Complex => &self.complex,
        }
    }

    fn pane_mut(&mut self, kind: FormKind) -> &mut FormPane {
        match kind {
            FormKind::Simple => &mut self.simple,
            FormKind::Complex => &mut self.complex,
        }
    }

    pub fn current_pane(&self) -> &FormPane {
        self.pane(self.current_view.form_kind())
    }

    pub fn current_pane_mut(&mut self) -> &mut FormPane {
        self.pane_mut(self.current_view.form_kind())
    }

    /// Validate the field being left as a finished value, then move the
    /// cursor to the next field.
    ///
    pub fn focus_next_field(&mut self) -> Result<&mut Self, StateError> {
        self.blur_focused_field()?;
        self.current_pane_mut().focus_next();
        Ok(self)
    }

    /// Validate the field being left as a finished value, then move the
    /// cursor to the previous field.
    ///
    pub fn focus_previous_field(&mut self) -> Result<&mut Self, StateError> {
        self.blur_focused_field()?;
        self.current_pane_mut().focus_previous();
        Ok(self)
    }

    fn blur_focused_field(&mut self) -> Result<(), StateError> {
        let pane = self.current_pane_mut();
        let field = pane.focused_field()?.name;
        pane.form_mut().validate(field)?;
        Ok(())
    }

    /// Append a character to the focused field.
    ///
    pub fn type_char(&mut self, c: char) -> Result<&mut Self, StateError> {
        self.edit_focused_field(|text| text.push(c))
    }

    /// Remove the last character of the focused field.
    ///
    pub fn delete_char(&mut self) -> Result<&mut Self, StateError> {
        self.edit_focused_field(|text| {
            text.pop();
        })
    }

    /// Empty the focused field.
    ///
    pub fn clear_field(&mut self) -> Result<&mut Self, StateError> {
        self.edit_focused_field(|text| text.clear())
    }

    fn edit_focused_field<F>(&mut self, edit: F) -> Result<&mut Self, StateError>
    where
        F: FnOnce(&mut String),
    {
        let pane = self.current_pane_mut();
        let field = pane.focused_field()?.name;
        let mut text = pane.form().value(field)?.to_string();
        edit(&mut text);
        pane.form_mut().update(field, text)?;
        if *pane.status() == SubmitStatus::Accepted {
            pane.set_status(SubmitStatus::NotSubmitted);
        }
        Ok(self)
    }

    /// Run the submit protocol on the current form. An accepted form is
    /// logged and reset for the next entry.
    ///
    pub fn submit_current_form(&mut self) -> Result<SubmitStatus, StateError> {
        let pane = self.current_pane_mut();
        let title = pane.kind().title();
        let outcome = pane.form_mut().submit()?;
        let status = if outcome.accepted {
            info!("Submitting {}: {}", title, pane.form().values_json());
            pane.form_mut().reset();
            pane.focus_first();
            SubmitStatus::Accepted
        } else {
            warn!(
                "{} has invalid fields: {}",
                title,
                outcome.invalid_fields.join(", ")
            );
            SubmitStatus::Rejected(outcome.invalid_fields)
        };
        pane.set_status(status.clone());
        Ok(status)
    }

    /// Return a copy of the captured log lines.
    ///
    pub fn get_log_entries(&self) -> Vec<String> {
        self.log_buffer
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

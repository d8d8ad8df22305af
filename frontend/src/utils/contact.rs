use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

// text@text.text, nothing stricter
static EMAIL_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
  Name,
  Email,
  Subject,
  Message,
}

impl Field {
  pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

  /// Value of the `name`/`id` attribute on the matching input.
  pub fn key(self) -> &'static str {
    match self {
      Field::Name => "name",
      Field::Email => "email",
      Field::Subject => "subject",
      Field::Message => "message",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      Field::Name => "Name",
      Field::Email => "Email",
      Field::Subject => "Subject",
      Field::Message => "Message",
    };
    f.write_str(label)
  }
}

/// Inline message shown under a field. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
  #[error("{0} is required")]
  Required(Field),
  #[error("Email is invalid")]
  InvalidEmail,
}

pub type ValidationErrors = BTreeMap<Field, FieldError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
  #[error("{} field(s) failed validation", .0.len())]
  Invalid(ValidationErrors),
  #[error("a submission is already in progress")]
  Busy,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactFields {
  pub name: String,
  pub email: String,
  pub subject: String,
  pub message: String,
}

impl ContactFields {
  pub fn get(&self, field: Field) -> &str {
    match field {
      Field::Name => &self.name,
      Field::Email => &self.email,
      Field::Subject => &self.subject,
      Field::Message => &self.message,
    }
  }

  fn slot(&mut self, field: Field) -> &mut String {
    match field {
      Field::Name => &mut self.name,
      Field::Email => &mut self.email,
      Field::Subject => &mut self.subject,
      Field::Message => &mut self.message,
    }
  }

  pub fn set(&mut self, field: Field, value: impl Into<String>) {
    *self.slot(field) = value.into();
  }
}

/// Check every field and collect one error per failing field.
pub fn validate(fields: &ContactFields) -> ValidationErrors {
  let mut errors = ValidationErrors::new();

  for field in Field::ALL {
    let value = fields.get(field);
    if value.trim().is_empty() {
      errors.insert(field, FieldError::Required(field));
    } else if field == Field::Email && !EMAIL_PATTERN.is_match(value) {
      errors.insert(field, FieldError::InvalidEmail);
    }
  }
  errors
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  #[default]
  Idle,
  Submitting,
  Submitted,
}

/// Client-side contact form: field values, inline errors and the simulated
/// submission lifecycle `Idle -> Submitting -> Submitted -> Idle`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContactForm {
  fields: ContactFields,
  errors: ValidationErrors,
  phase: Phase,
}

impl ContactForm {
  pub fn fields(&self) -> &ContactFields {
    &self.fields
  }

  pub fn value(&self, field: Field) -> &str {
    self.fields.get(field)
  }

  pub fn errors(&self) -> &ValidationErrors {
    &self.errors
  }

  pub fn error(&self, field: Field) -> Option<&FieldError> {
    self.errors.get(&field)
  }

  pub fn phase(&self) -> Phase {
    self.phase
  }

  pub fn is_submitting(&self) -> bool {
    self.phase == Phase::Submitting
  }

  pub fn is_submitted(&self) -> bool {
    self.phase == Phase::Submitted
  }

  /// Keystroke handler. Editing a field drops that field's error only.
  pub fn update(&mut self, field: Field, value: impl Into<String>) {
    self.fields.set(field, value);
    self.errors.remove(&field);
  }

  /// Validate and, if everything passes, move to `Submitting`.
  pub fn submit(&mut self) -> Result<(), SubmitError> {
    if self.phase != Phase::Idle {
      return Err(SubmitError::Busy);
    }

    self.errors = validate(&self.fields);
    if !self.errors.is_empty() {
      return Err(SubmitError::Invalid(self.errors.clone()));
    }

    self.phase = Phase::Submitting;
    Ok(())
  }

  /// The pretend round trip finished: clear the form and acknowledge.
  pub fn complete(&mut self) -> bool {
    if self.phase != Phase::Submitting {
      return false;
    }
    self.fields = ContactFields::default();
    self.errors.clear();
    self.phase = Phase::Submitted;
    true
  }

  /// The acknowledgement has been on screen long enough.
  pub fn dismiss_acknowledgement(&mut self) -> bool {
    if self.phase != Phase::Submitted {
      return false;
    }
    self.phase = Phase::Idle;
    true
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn filled() -> ContactForm {
    let mut form = ContactForm::default();
    form.update(Field::Name, "Jane Doe");
    form.update(Field::Email, "jane@example.com");
    form.update(Field::Subject, "Mentorship");
    form.update(Field::Message, "Tell me more about the strategy.");
    form
  }

  fn messages(errors: &ValidationErrors) -> Vec<String> {
    errors.values().map(|e| e.to_string()).collect()
  }

  #[test]
  fn empty_submit_reports_every_field() {
    let mut form = ContactForm::default();

    let err = form.submit().unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(ref errors) if errors.len() == 4));
    assert_eq!(
      messages(form.errors()),
      vec!["Name is required", "Email is required", "Subject is required", "Message is required"]
    );
    assert_eq!(form.phase(), Phase::Idle);
  }

  #[test]
  fn whitespace_only_counts_as_empty() {
    let mut form = filled();
    form.update(Field::Subject, "   \t");
    assert!(form.submit().is_err());
    assert_eq!(form.error(Field::Subject), Some(&FieldError::Required(Field::Subject)));
  }

  #[test]
  fn malformed_email_yields_only_format_error() {
    for bad in ["janeexample.com", "jane@", "jane@example", "@example.com"] {
      let mut form = filled();
      form.update(Field::Email, bad);
      assert!(form.submit().is_err(), "{bad} should be rejected");
      assert_eq!(messages(form.errors()), vec!["Email is invalid"], "input {bad}");
    }
  }

  #[test]
  fn email_error_independent_of_other_fields() {
    let mut form = ContactForm::default();
    form.update(Field::Email, "not-an-email");
    let _ = form.submit();

    assert_eq!(form.error(Field::Email), Some(&FieldError::InvalidEmail));
    assert_eq!(form.error(Field::Name), Some(&FieldError::Required(Field::Name)));
    assert_eq!(form.errors().len(), 4);
  }

  #[test]
  fn plausible_emails_pass() {
    for good in ["a@b.c", "jane.doe+fx@mail.example.co.uk"] {
      let mut fields = filled().fields().clone();
      fields.set(Field::Email, good);
      assert!(validate(&fields).is_empty(), "{good} should pass");
    }
  }

  #[test]
  fn typing_clears_only_that_fields_error() {
    let mut form = ContactForm::default();
    let _ = form.submit();

    form.update(Field::Email, "j");
    assert_eq!(form.error(Field::Email), None);
    assert_eq!(form.errors().len(), 3);
    assert!(form.error(Field::Name).is_some());
    assert!(form.error(Field::Subject).is_some());
    assert!(form.error(Field::Message).is_some());
  }

  #[test]
  fn resubmit_recomputes_errors_wholesale() {
    let mut form = ContactForm::default();
    let _ = form.submit();
    form.update(Field::Name, "Jane");
    form.update(Field::Email, "bad");

    let _ = form.submit();
    let keys: Vec<Field> = form.errors().keys().copied().collect();
    assert_eq!(keys, vec![Field::Email, Field::Subject, Field::Message]);
    assert_eq!(form.error(Field::Email), Some(&FieldError::InvalidEmail));
  }

  #[test]
  fn valid_submission_runs_full_lifecycle() {
    let mut form = filled();

    form.submit().unwrap();
    assert!(form.is_submitting());
    assert!(form.errors().is_empty());

    assert!(form.complete());
    assert!(form.is_submitted());
    assert_eq!(form.fields(), &ContactFields::default());

    assert!(form.dismiss_acknowledgement());
    assert_eq!(form.phase(), Phase::Idle);
  }

  #[test]
  fn cannot_submit_while_in_flight() {
    let mut form = filled();
    form.submit().unwrap();
    assert_eq!(form.submit(), Err(SubmitError::Busy));
    assert!(form.is_submitting());
  }

  #[test]
  fn out_of_order_transitions_are_ignored() {
    let mut form = filled();
    assert!(!form.complete());
    assert!(!form.dismiss_acknowledgement());
    assert_eq!(form.value(Field::Name), "Jane Doe");
  }

  #[test]
  fn submit_error_summarises_failures() {
    let mut form = ContactForm::default();
    let err = form.submit().unwrap_err();
    assert_eq!(err.to_string(), "4 field(s) failed validation");
  }
}

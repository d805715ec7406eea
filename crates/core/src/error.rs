use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Validation failed for fields: {}", field_list(.0))]
    InvalidFields(Vec<FieldViolation>),
}

/// A single field that failed validation, as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn field_list(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flatten `validator` output into one violation per failed rule, sorted by
/// field name so responses are stable.
pub fn violations_from(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} failed rule '{}'", e.code));
                FieldViolation::new(field.clone(), message)
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::InvalidFields(violations_from(&errors))
    }
}

/// Reject identifiers that no store could have assigned.
pub fn validate_id(entity: &'static str, id: DbId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(format!(
            "{entity} id must be greater than 0 (got {id})"
        )));
    }
    Ok(())
}

/// Field rule for text that must contain something other than whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_id_accepted() {
        assert!(validate_id("Task", 1).is_ok());
    }

    #[test]
    fn zero_and_negative_ids_rejected() {
        assert!(matches!(
            validate_id("Task", 0),
            Err(CoreError::Validation(_))
        ));
        assert!(validate_id("Task", -7).is_err());
    }

    #[test]
    fn blank_text_rejected() {
        assert!(validate_not_blank("x").is_ok());
        assert!(validate_not_blank("  padded  ").is_ok());

        let err = validate_not_blank(" \t\n").unwrap_err();
        assert_eq!(err.code, "blank");
        assert!(validate_not_blank("").is_err());
    }

    #[test]
    fn violations_are_sorted_and_use_custom_messages() {
        let mut errors = ValidationErrors::new();
        let mut too_short = ValidationError::new("length");
        too_short.message = Some("too short".into());
        errors.add("title", too_short);
        errors.add("email", ValidationError::new("email"));

        let violations = violations_from(&errors);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "email");
        assert_eq!(violations[0].message, "email failed rule 'email'");
        assert_eq!(violations[1], FieldViolation::new("title", "too short"));
    }

    #[test]
    fn invalid_fields_display_lists_field_names() {
        let err = CoreError::InvalidFields(vec![
            FieldViolation::new("name", "required"),
            FieldViolation::new("email", "invalid"),
        ]);
        assert_eq!(err.to_string(), "Validation failed for fields: name, email");
    }
}

//! Bridge between the `validator` crate and the domain error taxonomy.
//!
//! DTOs declare their constraints with `#[derive(Validate)]`. Handlers call
//! [`check`] before touching the store; a non-empty violation list becomes
//! [`CoreError::Validation`], which the API layer renders as a 422 with a
//! structured body.
//!
//! Partial-update DTOs get the relaxed rule-set for free: `Option` fields are
//! only validated when present, so a patch payload is checked field-by-field
//! against exactly the fields it provides.

use validator::Validate;

use crate::error::{CoreError, Violation};

/// Validate a DTO, converting any violations into [`CoreError::Validation`].
pub fn check<T: Validate>(value: &T) -> Result<(), CoreError> {
    value.validate().map_err(|errors| {
        let violations = collect_violations(&errors);
        CoreError::Validation(violations)
    })
}

/// Flatten `validator`'s nested error map into a list of `(field, message)`
/// pairs, sorted by field name for deterministic output.
fn collect_violations(errors: &validator::ValidationErrors) -> Vec<Violation> {
    let mut violations: Vec<Violation> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(|e| Violation {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("violates constraint `{}`", e.code)),
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

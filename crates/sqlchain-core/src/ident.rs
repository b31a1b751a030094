//! Identifier sanitization.
//!
//! Column, table, and group references accept an optional scope
//! qualifier (`scope.name`), so `users.id` and `mydb.users` are valid
//! while `a.b.c` is not. Identifiers are validated, never quoted or
//! rewritten.

use crate::error::{BuildResult, ValidationError};

/// Validates a single identifier, returning it unchanged.
///
/// An identifier must be non-empty and contain at most one `.`.
pub fn sanitize_ident(raw: &str) -> BuildResult<String> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyIdentifier);
    }
    if raw.matches('.').count() > 1 {
        return Err(ValidationError::TooManyScopes(String::from(raw)));
    }
    Ok(String::from(raw))
}

/// Validates a list of identifiers, preserving input order.
///
/// The list must contain at least one entry; each entry is checked by
/// [`sanitize_ident`].
pub fn sanitize_idents(raw: &[&str]) -> BuildResult<Vec<String>> {
    if raw.is_empty() {
        return Err(ValidationError::NoIdentifiers);
    }
    raw.iter().map(|ident| sanitize_ident(ident)).collect()
}

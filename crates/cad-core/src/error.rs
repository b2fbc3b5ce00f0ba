//! Core error types for Cadastro
//!
//! Two kinds of failure reach callers: validation errors (bad client input,
//! detected before the store is touched) and operational errors (anything
//! that happens during or after a store access).

use std::collections::BTreeMap;
use thiserror::Error;

/// Core error type for all Cadastro operations
#[derive(Error, Debug)]
pub enum CadError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    Database(String),
}

/// Standard Result type for Cadastro operations
pub type CadResult<T> = Result<T, CadError>;

/// Field-keyed validation messages
#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("Validation errors: {errors:?}")]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> messages
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Names of the fields that carry at least one error, in sorted order
    pub fn fields(&self) -> Vec<&str> {
        self.errors.keys().map(String::as_str).collect()
    }
}

impl CadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CadError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_collect_fields() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.add("telefone", "can't be blank");
        errors.add("nome", "can't be blank");
        errors.add("nome", "is invalid");

        assert!(errors.has_error("nome"));
        assert!(!errors.has_error("email"));
        assert_eq!(errors.fields(), vec!["nome", "telefone"]);
        assert_eq!(errors.get("nome").map(Vec::len), Some(2));
    }

    #[test]
    fn test_error_kinds() {
        let validation: CadError = ValidationErrors::new().into();
        assert!(matches!(validation, CadError::Validation(_)));
        assert!(!validation.is_not_found());

        let missing = CadError::NotFound { entity: "User", id: 7 };
        assert!(missing.is_not_found());
        assert_eq!(missing.to_string(), "Not found: User with id=7");

        assert_eq!(
            CadError::Database("boom".into()).to_string(),
            "Database error: boom"
        );
    }
}

//! Base contract system

use cad_core::error::ValidationErrors;

/// Result of contract validation
pub type ValidationResult<T = ()> = Result<T, ValidationErrors>;

/// A contract validates raw input and yields its typed form
pub trait Contract<Input> {
    type Output;

    fn validate(&self, input: Input) -> ValidationResult<Self::Output>;
}

/// Fold `validator` derive errors into field-keyed `ValidationErrors`
pub fn from_validator(errors: validator::ValidationErrors) -> ValidationErrors {
    let mut out = ValidationErrors::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            out.add(field, message);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cad_models::NewUser;
    use validator::Validate;

    #[test]
    fn test_from_validator_keeps_field_names() {
        let errors = NewUser::new("", "", "11").validate().unwrap_err();
        let converted = from_validator(errors);

        assert_eq!(converted.fields(), vec!["email", "nome"]);
        assert_eq!(
            converted.get("nome").cloned(),
            Some(vec!["can't be blank".to_string()])
        );
    }
}

//! Create contract for users

use cad_models::NewUser;
use serde::Deserialize;
use validator::Validate;

use crate::base::{from_validator, Contract, ValidationResult};

/// Raw create payload: `{nome, email, telefone}`.
///
/// Fields are optional here so that a missing key is reported as a
/// validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserInput {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

impl CreateUserInput {
    pub fn new(
        nome: impl Into<String>,
        email: impl Into<String>,
        telefone: impl Into<String>,
    ) -> Self {
        Self {
            nome: Some(nome.into()),
            email: Some(email.into()),
            telefone: Some(telefone.into()),
        }
    }
}

/// Contract for creating a user: all three fields present and non-empty
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateUserContract;

impl Contract<CreateUserInput> for CreateUserContract {
    type Output = NewUser;

    fn validate(&self, input: CreateUserInput) -> ValidationResult<NewUser> {
        let new_user = NewUser::new(
            input.nome.unwrap_or_default(),
            input.email.unwrap_or_default(),
            input.telefone.unwrap_or_default(),
        );
        new_user.validate().map_err(from_validator)?;
        Ok(new_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_input() {
        let user = CreateUserContract
            .validate(CreateUserInput::new("Ana", "ana@x.com", "11999999999"))
            .unwrap();
        assert_eq!(user, NewUser::new("Ana", "ana@x.com", "11999999999"));
    }

    #[test]
    fn test_missing_field() {
        let input = CreateUserInput {
            nome: Some("Ana".into()),
            email: None,
            telefone: Some("11999999999".into()),
        };

        let errors = CreateUserContract.validate(input).unwrap_err();
        assert_eq!(errors.fields(), vec!["email"]);
    }

    #[test]
    fn test_empty_fields() {
        let errors = CreateUserContract
            .validate(CreateUserInput::new("", "ana@x.com", ""))
            .unwrap_err();
        assert!(errors.has_error("nome"));
        assert!(errors.has_error("telefone"));
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        assert!(CreateUserContract
            .validate(CreateUserInput::new(" ", "ana@x.com", "1"))
            .is_ok());
    }
}

//! Update contract for users

use cad_core::error::ValidationErrors;
use cad_core::traits::Id;
use cad_models::{Patch, UserChanges};
use serde::Deserialize;
use serde_json::Value;

use crate::base::{Contract, ValidationResult};
use crate::id::parse_id_value;

/// Raw update payload: `{id, nome?, email?, telefone?}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserInput {
    /// JSON number or numeric string
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub nome: Patch<String>,
    #[serde(default)]
    pub email: Patch<String>,
    #[serde(default)]
    pub telefone: Patch<String>,
}

impl UpdateUserInput {
    pub fn for_id(id: Id) -> Self {
        Self {
            id: Some(Value::from(id)),
            ..Default::default()
        }
    }

    pub fn with_nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = Patch::Value(nome.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Patch::Value(email.into());
        self
    }

    pub fn with_telefone(mut self, telefone: impl Into<String>) -> Self {
        self.telefone = Patch::Value(telefone.into());
        self
    }
}

/// A validated update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub id: Id,
    pub changes: UserChanges,
}

/// Contract for updating a user.
///
/// Only the id is checked here; it must resolve to a positive integer.
/// Field values go to the store as sent: an omitted field is left
/// untouched, `""` is written, and `null` is refused by the store.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpdateUserContract;

impl Contract<UpdateUserInput> for UpdateUserContract {
    type Output = UserUpdate;

    fn validate(&self, input: UpdateUserInput) -> ValidationResult<UserUpdate> {
        let Some(id) = input.id.as_ref().and_then(parse_id_value) else {
            let mut errors = ValidationErrors::new();
            errors.add("id", "must be a positive integer");
            return Err(errors);
        };

        Ok(UserUpdate {
            id,
            changes: UserChanges {
                nome: input.nome,
                email: input.email,
                telefone: input.telefone,
            },
        })
    }
}

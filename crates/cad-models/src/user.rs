//! User model
//!
//! Table: users

use cad_core::traits::{Entity, Id};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::patch::Patch;

/// A persisted user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub nome: String,
    pub email: String,
    pub telefone: String,
}

impl Entity for User {
    const TYPE_NAME: &'static str = "User";
}

/// A user that has not been stored yet.
///
/// Only presence is checked; email and phone formats are free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "can't be blank"))]
    pub nome: String,
    #[validate(length(min = 1, message = "can't be blank"))]
    pub email: String,
    #[validate(length(min = 1, message = "can't be blank"))]
    pub telefone: String,
}

impl NewUser {
    pub fn new(
        nome: impl Into<String>,
        email: impl Into<String>,
        telefone: impl Into<String>,
    ) -> Self {
        Self {
            nome: nome.into(),
            email: email.into(),
            telefone: telefone.into(),
        }
    }
}

/// Changes applied by an update.
///
/// An absent field leaves the column untouched. A value, including `""`,
/// is written as given. `Null` asks the store to clear a NOT NULL column,
/// which the store refuses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub nome: Patch<String>,
    pub email: Patch<String>,
    pub telefone: Patch<String>,
}

impl UserChanges {
    fn columns(&self) -> [(&'static str, &Patch<String>); 3] {
        [
            ("nome", &self.nome),
            ("email", &self.email),
            ("telefone", &self.telefone),
        ]
    }

    /// Names of the columns this update touches
    pub fn changed_fields(&self) -> Vec<&'static str> {
        self.columns()
            .into_iter()
            .filter(|(_, patch)| !patch.is_absent())
            .map(|(name, _)| name)
            .collect()
    }

    /// Names of the columns this update would set to NULL
    pub fn null_fields(&self) -> Vec<&'static str> {
        self.columns()
            .into_iter()
            .filter(|(_, patch)| matches!(patch, Patch::Null))
            .map(|(name, _)| name)
            .collect()
    }

    /// Write the given values into `user`.
    ///
    /// `Null` entries are skipped; callers reject them first with
    /// [`UserChanges::null_fields`].
    pub fn apply_to(self, user: &mut User) {
        if let Some(nome) = self.nome.into_value() {
            user.nome = nome;
        }
        if let Some(email) = self.email.into_value() {
            user.email = email;
        }
        if let Some(telefone) = self.telefone.into_value() {
            user.telefone = telefone;
        }
    }
}

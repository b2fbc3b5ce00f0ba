//! Delete contract for users

use cad_core::error::ValidationErrors;
use cad_core::traits::Id;
use serde::Deserialize;

use crate::base::{Contract, ValidationResult};
use crate::id::parse_id_str;

/// Query parameters of `DELETE /api/users?id=<int>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteUserInput {
    pub id: Option<String>,
}

impl DeleteUserInput {
    pub fn for_id(id: Id) -> Self {
        Self {
            id: Some(id.to_string()),
        }
    }
}

/// Contract for deleting a user: the id must be present and numeric
#[derive(Debug, Default, Clone, Copy)]
pub struct DeleteUserContract;

impl Contract<DeleteUserInput> for DeleteUserContract {
    type Output = Id;

    fn validate(&self, input: DeleteUserInput) -> ValidationResult<Id> {
        let mut errors = ValidationErrors::new();
        match input.id.as_deref() {
            None | Some("") => errors.add("id", "is required"),
            Some(raw) => match parse_id_str(raw) {
                Some(id) => return Ok(id),
                None => errors.add("id", "must be a positive integer"),
            },
        }
        Err(errors)
    }
}

//! Update Service for Users

use async_trait::async_trait;
use cad_contracts::users::{UpdateUserContract, UpdateUserInput, UserUpdate};
use cad_contracts::Contract;
use cad_core::error::CadResult;
use cad_models::User;

use crate::base::{Callable, UserStore};

/// Service for updating users.
///
/// Only the fields present in the input change. A missing row comes back
/// as `CadError::NotFound`; a field sent as `null` fails in the store.
pub struct UpdateUserService<'a> {
    users: &'a UserStore,
    contract: UpdateUserContract,
}

impl<'a> UpdateUserService<'a> {
    pub fn new(users: &'a UserStore) -> Self {
        Self {
            users,
            contract: UpdateUserContract,
        }
    }
}

#[async_trait]
impl Callable<UpdateUserInput, User> for UpdateUserService<'_> {
    async fn call(&self, params: UpdateUserInput) -> CadResult<User> {
        let UserUpdate { id, changes } = self.contract.validate(params)?;
        let fields = changes.changed_fields();
        let user = self.users.update(id, changes).await?;

        tracing::info!(user_id = id, ?fields, "user updated");
        Ok(user)
    }
}

//! List Service for Users

use async_trait::async_trait;
use cad_core::error::CadResult;
use cad_models::User;

use crate::base::{Callable, UserStore};

/// Service returning every stored user in id order
pub struct ListUsersService<'a> {
    users: &'a UserStore,
}

impl<'a> ListUsersService<'a> {
    pub fn new(users: &'a UserStore) -> Self {
        Self { users }
    }
}

#[async_trait]
impl Callable<(), Vec<User>> for ListUsersService<'_> {
    async fn call(&self, _params: ()) -> CadResult<Vec<User>> {
        let users = self.users.find_all().await?;
        tracing::debug!(count = users.len(), "listed users");
        Ok(users)
    }
}

//! Delete Service for Users

use async_trait::async_trait;
use cad_contracts::users::{DeleteUserContract, DeleteUserInput};
use cad_contracts::Contract;
use cad_core::error::CadResult;
use cad_core::traits::Id;

use crate::base::{Callable, UserStore};

/// Service for deleting users; yields the id that was removed
pub struct DeleteUserService<'a> {
    users: &'a UserStore,
    contract: DeleteUserContract,
}

impl<'a> DeleteUserService<'a> {
    pub fn new(users: &'a UserStore) -> Self {
        Self {
            users,
            contract: DeleteUserContract,
        }
    }
}

#[async_trait]
impl Callable<DeleteUserInput, Id> for DeleteUserService<'_> {
    async fn call(&self, params: DeleteUserInput) -> CadResult<Id> {
        let id = self.contract.validate(params)?;
        self.users.delete(id).await?;

        tracing::info!(user_id = id, "user deleted");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cad_core::error::CadError;
    use cad_db::{InMemoryUserRepository, Repository};
    use cad_models::NewUser;

    #[tokio::test]
    async fn test_delete_user() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(NewUser::new("Ana", "a@x.com", "1")).await.unwrap();

        let id = DeleteUserService::new(&repo)
            .call(DeleteUserInput::for_id(user.id))
            .await
            .unwrap();

        assert_eq!(id, user.id);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(NewUser::new("Ana", "a@x.com", "1")).await.unwrap();
        let service = DeleteUserService::new(&repo);

        service.call(DeleteUserInput::for_id(user.id)).await.unwrap();
        let err = service
            .call(DeleteUserInput::for_id(user.id))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_missing_id() {
        let repo = InMemoryUserRepository::new();
        let err = DeleteUserService::new(&repo)
            .call(DeleteUserInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CadError::Validation(_)));
    }
}

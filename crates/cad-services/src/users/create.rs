//! Create Service for Users

use async_trait::async_trait;
use cad_contracts::users::{CreateUserContract, CreateUserInput};
use cad_contracts::Contract;
use cad_core::error::CadResult;
use cad_models::User;

use crate::base::{Callable, UserStore};

/// Service for creating users
///
/// # Example
/// ```ignore
/// let service = CreateUserService::new(&repo);
/// let user = service
///     .call(CreateUserInput::new("Ana", "ana@x.com", "11999999999"))
///     .await?;
/// ```
pub struct CreateUserService<'a> {
    users: &'a UserStore,
    contract: CreateUserContract,
}

impl<'a> CreateUserService<'a> {
    pub fn new(users: &'a UserStore) -> Self {
        Self {
            users,
            contract: CreateUserContract,
        }
    }
}

#[async_trait]
impl Callable<CreateUserInput, User> for CreateUserService<'_> {
    async fn call(&self, params: CreateUserInput) -> CadResult<User> {
        let new_user = self.contract.validate(params)?;
        let user = self.users.create(new_user).await?;

        tracing::info!(user_id = user.id, "user created");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cad_core::error::CadError;
    use cad_db::{InMemoryUserRepository, Repository};

    #[tokio::test]
    async fn test_create_user() {
        let repo = InMemoryUserRepository::new();
        let user = CreateUserService::new(&repo)
            .call(CreateUserInput::new("Ana", "ana@x.com", "11999999999"))
            .await
            .unwrap();

        assert!(user.id > 0);
        assert_eq!(user.nome, "Ana");
        assert_eq!(repo.find_all().await.unwrap(), vec![user]);
    }

    #[tokio::test]
    async fn test_missing_field_does_not_touch_store() {
        let repo = InMemoryUserRepository::new();
        let input = CreateUserInput {
            telefone: None,
            ..CreateUserInput::new("Ana", "ana@x.com", "")
        };

        let err = CreateUserService::new(&repo).call(input).await.unwrap_err();
        assert!(matches!(err, CadError::Validation(_)));
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}

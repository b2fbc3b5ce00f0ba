//! Repository traits
//!
//! Provides the CRUD surface the services are written against.

use std::sync::Arc;

use async_trait::async_trait;
use cad_core::error::CadError;
use cad_core::traits::Id;
use cad_models::{NewUser, User, UserChanges};

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: Id },

    #[error("null value in column \"{column}\" violates not-null constraint")]
    NotNull { column: &'static str },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<RepositoryError> for CadError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => CadError::NotFound { entity, id },
            other => CadError::Database(other.to_string()),
        }
    }
}

/// Base repository trait for CRUD operations
#[async_trait]
pub trait Repository<T, CreateDto, UpdateDto>: Send + Sync {
    /// Find all entities, in ascending id order
    async fn find_all(&self) -> RepositoryResult<Vec<T>>;

    /// Create a new entity; the store assigns its id
    async fn create(&self, dto: CreateDto) -> RepositoryResult<T>;

    /// Update an existing entity
    async fn update(&self, id: Id, dto: UpdateDto) -> RepositoryResult<T>;

    /// Delete an entity by ID
    async fn delete(&self, id: Id) -> RepositoryResult<()>;
}

/// Shared handle to whichever user store the process runs with
pub type DynUserRepository = Arc<dyn Repository<User, NewUser, UserChanges>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_core_error() {
        let err: CadError = RepositoryError::NotFound { entity: "User", id: 3 }.into();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_database_error_maps_to_core_error() {
        let err: CadError = RepositoryError::Database(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, CadError::Database(_)));

        let err: CadError = RepositoryError::NotNull { column: "nome" }.into();
        assert!(matches!(err, CadError::Database(ref msg) if msg.contains("\"nome\"")));
    }
}

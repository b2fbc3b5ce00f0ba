//! In-memory user repository
//!
//! Same contract as the PostgreSQL repository: ids come from a monotonic
//! counter and are never reused, listing is in id order.

use std::collections::BTreeMap;

use async_trait::async_trait;
use cad_core::traits::{Entity, Id};
use cad_models::{NewUser, User, UserChanges};
use parking_lot::RwLock;

use crate::repository::{Repository, RepositoryError, RepositoryResult};

#[derive(Debug)]
struct MemoryState {
    next_id: Id,
    rows: BTreeMap<Id, User>,
}

/// User repository held in process memory
#[derive(Debug)]
pub struct InMemoryUserRepository {
    state: RwLock<MemoryState>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    fn not_found(id: Id) -> RepositoryError {
        RepositoryError::NotFound {
            entity: User::TYPE_NAME,
            id,
        }
    }
}

#[async_trait]
impl Repository<User, NewUser, UserChanges> for InMemoryUserRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.state.read().rows.values().cloned().collect())
    }

    async fn create(&self, dto: NewUser) -> RepositoryResult<User> {
        let mut state = self.state.write();
        let id = state.next_id;
        state.next_id += 1;

        let user = User {
            id,
            nome: dto.nome,
            email: dto.email,
            telefone: dto.telefone,
        };
        state.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: Id, dto: UserChanges) -> RepositoryResult<User> {
        let mut state = self.state.write();
        let user = state.rows.get_mut(&id).ok_or_else(|| Self::not_found(id))?;
        // Same outcome as the NOT NULL constraint on the users table.
        if let Some(column) = dto.null_fields().into_iter().next() {
            return Err(RepositoryError::NotNull { column });
        }
        dto.apply_to(user);
        Ok(user.clone())
    }

    async fn delete(&self, id: Id) -> RepositoryResult<()> {
        self.state
            .write()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}

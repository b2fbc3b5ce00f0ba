//! User repository
//!
//! Database operations for users.

use async_trait::async_trait;
use cad_core::traits::{Entity, Id};
use cad_models::{NewUser, User, UserChanges};
use sqlx::{FromRow, PgPool};

use crate::repository::{Repository, RepositoryError, RepositoryResult};

/// User database entity
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub telefone: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            nome: row.nome,
            email: row.email,
            telefone: row.telefone,
        }
    }
}

/// PostgreSQL-backed user repository
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn not_found(id: Id) -> RepositoryError {
        RepositoryError::NotFound {
            entity: User::TYPE_NAME,
            id,
        }
    }
}

#[async_trait]
impl Repository<User, NewUser, UserChanges> for UserRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, nome, email, telefone
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "loaded users");
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn create(&self, dto: NewUser) -> RepositoryResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (nome, email, telefone)
            VALUES ($1, $2, $3)
            RETURNING id, nome, email, telefone
            "#,
        )
        .bind(&dto.nome)
        .bind(&dto.email)
        .bind(&dto.telefone)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(user_id = row.id, "inserted user");
        Ok(row.into())
    }

    async fn update(&self, id: Id, dto: UserChanges) -> RepositoryResult<User> {
        // Each column gets a (touched, value) pair so that an explicit null
        // reaches the NOT NULL constraint instead of being skipped.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                nome = CASE WHEN $1 THEN $2 ELSE nome END,
                email = CASE WHEN $3 THEN $4 ELSE email END,
                telefone = CASE WHEN $5 THEN $6 ELSE telefone END
            WHERE id = $7
            RETURNING id, nome, email, telefone
            "#,
        )
        .bind(!dto.nome.is_absent())
        .bind(dto.nome.as_value())
        .bind(!dto.email.is_absent())
        .bind(dto.email.as_value())
        .bind(!dto.telefone.is_absent())
        .bind(dto.telefone.as_value())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Self::not_found(id))?;

        tracing::debug!(user_id = id, fields = ?dto.changed_fields(), "updated user");
        Ok(row.into())
    }

    async fn delete(&self, id: Id) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }

        tracing::debug!(user_id = id, "deleted user");
        Ok(())
    }
}

//! # cad-db
//!
//! Database layer for Cadastro.
//!
//! This crate provides user persistence, including:
//!
//! - PostgreSQL connection pool management and migrations (SQLx)
//! - The `Repository` trait the services are written against
//! - A PostgreSQL user repository and an in-memory one for tests and demos
//!
//! ## Example
//!
//! ```ignore
//! use cad_db::{Database, DatabaseConfig, UserRepository, Repository};
//!
//! let config = DatabaseConfig::from_app_config(&AppConfig::from_env()?);
//! let db = Database::connect(&config).await?;
//! db.migrate().await?;
//!
//! let repo = UserRepository::new(db.pool().clone());
//! let users = repo.find_all().await?;
//! ```

pub mod memory;
pub mod pool;
pub mod repository;
pub mod users;

// Re-exports
pub use memory::InMemoryUserRepository;
pub use pool::{Database, DatabaseConfig, PoolStats};
pub use repository::{DynUserRepository, Repository, RepositoryError, RepositoryResult};
pub use users::{UserRepository, UserRow};

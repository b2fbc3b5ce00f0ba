//! # cad-models
//!
//! Domain models for Cadastro.
//!
//! The `User` record is the only entity. `Patch` carries the three-way
//! absent/null/value distinction that partial updates need.

pub use cad_core::traits::{Entity, Id};

pub mod patch;
pub mod user;

pub use patch::Patch;
pub use user::{NewUser, User, UserChanges};

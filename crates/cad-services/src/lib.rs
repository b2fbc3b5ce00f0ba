//! # cad-services
//!
//! Business logic services for Cadastro.
//!
//! Each service runs its contract over the raw input, then hands the typed
//! result to the user store. Validation failures never reach the store.

pub mod base;
pub mod users;

pub use base::*;

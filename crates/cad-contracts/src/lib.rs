//! # cad-contracts
//!
//! Contract validation for Cadastro.
//!
//! Contracts turn raw client input into the typed values a store accepts,
//! or reject it with field-keyed validation errors before the store is
//! touched.

pub mod base;
pub mod id;
pub mod users;

pub use base::*;

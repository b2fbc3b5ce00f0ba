//! # cad-core
//!
//! Core types and utilities for Cadastro.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types and the `CadResult` alias
//! - The `Id` alias and the `Entity` trait
//! - Configuration types

pub mod config;
pub mod error;
pub mod traits;

pub use error::*;
pub use traits::*;

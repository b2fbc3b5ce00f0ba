//! # cad-api
//!
//! REST API handlers for Cadastro.
//!
//! Exposes the user store under `/api/users`. Every failure body has the
//! shape `{"error": "<message>"}`.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use extractors::AppState;
pub use routes::router;

//! Base service traits

use async_trait::async_trait;
use cad_core::error::CadResult;
use cad_db::Repository;
use cad_models::{NewUser, User, UserChanges};

/// Base trait for all callable services
#[async_trait]
pub trait Callable<Params, Output> {
    /// Execute the service
    async fn call(&self, params: Params) -> CadResult<Output>;
}

/// The store every user service is written against
pub type UserStore = dyn Repository<User, NewUser, UserChanges>;

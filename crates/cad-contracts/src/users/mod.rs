//! User contracts

mod create;
mod delete;
mod update;

pub use create::{CreateUserContract, CreateUserInput};
pub use delete::{DeleteUserContract, DeleteUserInput};
pub use update::{UpdateUserContract, UpdateUserInput, UserUpdate};

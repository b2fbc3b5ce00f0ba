//! User services

mod create;
mod delete;
mod list;
mod update;

pub use create::CreateUserService;
pub use delete::DeleteUserService;
pub use list::ListUsersService;
pub use update::UpdateUserService;

//! # cad-client
//!
//! User management client for the Cadastro API.
//!
//! [`UsersPage`] owns the page state (list, modal, form, editing id) and
//! drives every effect through a [`UsersApi`]. Rendering is a pure function
//! of that state through a [`Layout`].
//!
//! ```ignore
//! let mut page = UsersPage::new(HttpUsersApi::new("http://localhost:8080"));
//! page.mount().await;
//! println!("{}", page.render(&CardGrid));
//! ```

pub mod api;
pub mod error;
pub mod layout;
pub mod page;
pub mod state;

pub use api::{HttpUsersApi, UsersApi};
pub use error::{ClientError, ClientResult};
pub use layout::{CardGrid, Layout, Table};
pub use page::{Confirm, UsersPage, DELETE_PROMPT};
pub use state::{Field, PageState, UserForm};

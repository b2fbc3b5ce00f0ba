//! Users page controller
//!
//! Lifecycle of a row: `idle -> editing -> submitting -> idle` on success,
//! back to `editing` with the form intact on failure. Deleting asks for
//! confirmation first and re-fetches on success.

use cad_core::traits::Id;
use cad_models::User;

use crate::api::UsersApi;
use crate::error::{ClientError, ClientResult};
use crate::layout::Layout;
use crate::state::{Field, PageState, UserForm};

pub const DELETE_PROMPT: &str = "Tem certeza que deseja excluir este usuário?";

/// Interactive yes/no confirmation
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Controller owning the page state
pub struct UsersPage<A> {
    api: A,
    state: PageState,
}

impl<A: UsersApi> UsersPage<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: PageState::default(),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Initial load; a failure is logged and the list stays as it was
    pub async fn mount(&mut self) {
        if let Err(e) = self.refresh().await {
            tracing::error!(error = %e, "failed to load users");
        }
    }

    /// Replace the list with a fresh fetch
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.state.users = self.api.list().await?;
        Ok(())
    }

    /// Open the modal in create mode with an empty form
    pub fn open_create(&mut self) {
        self.state.form = UserForm::default();
        self.state.editing_id = None;
        self.state.modal_open = true;
    }

    /// Open the modal in edit mode, pre-populated from `user`
    pub fn edit(&mut self, user: &User) {
        self.state.form = UserForm::from_user(user);
        self.state.editing_id = Some(user.id);
        self.state.modal_open = true;
    }

    /// Close the modal; the form and editing id are kept
    pub fn cancel(&mut self) {
        self.state.modal_open = false;
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.state.form.set(field, value);
    }

    /// Send the form as an update when editing, otherwise as a create.
    ///
    /// An incomplete form is refused without a request. On failure the
    /// modal stays open with its data.
    pub async fn submit(&mut self) -> ClientResult<User> {
        let missing = self.state.form.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(?missing, "form incomplete, not submitting");
            return Err(ClientError::Incomplete(missing));
        }

        let form = self.state.form.clone();
        let result = match self.state.editing_id {
            Some(id) => self.api.update(id, form).await,
            None => self.api.create(form).await,
        };

        let user = match result {
            Ok(user) => user,
            Err(e) => {
                tracing::error!(error = %e, editing_id = ?self.state.editing_id, "failed to save user");
                return Err(e);
            }
        };

        self.state.form = UserForm::default();
        self.state.editing_id = None;
        self.state.modal_open = false;

        if let Err(e) = self.refresh().await {
            tracing::error!(error = %e, "failed to reload users");
        }
        Ok(user)
    }

    /// Delete after confirmation. Returns `false` when the user declined.
    pub async fn delete<C>(&mut self, id: Id, confirm: &C) -> ClientResult<bool>
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(false);
        }

        if let Err(e) = self.api.delete(id).await {
            tracing::error!(error = %e, user_id = id, "failed to delete user");
            return Err(e);
        }

        if let Err(e) = self.refresh().await {
            tracing::error!(error = %e, "failed to reload users");
        }
        Ok(true)
    }

    pub fn render(&self, layout: &dyn Layout) -> String {
        layout.render(&self.state)
    }
}

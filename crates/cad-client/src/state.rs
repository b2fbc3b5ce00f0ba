//! Page state

use cad_core::traits::Id;
use cad_models::User;
use serde::Serialize;

/// The three editable user fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Nome,
    Email,
    Telefone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Nome, Field::Email, Field::Telefone];

    pub fn name(self) -> &'static str {
        match self {
            Field::Nome => "nome",
            Field::Email => "email",
            Field::Telefone => "telefone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Nome => "Nome",
            Field::Email => "Email",
            Field::Telefone => "Telefone",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Nome => "Nome completo",
            Field::Email => "seu.email@exemplo.com",
            Field::Telefone => "(99) 99999-9999",
        }
    }
}

/// Form contents; serializes as the create payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserForm {
    pub nome: String,
    pub email: String,
    pub telefone: String,
}

impl UserForm {
    pub fn new(
        nome: impl Into<String>,
        email: impl Into<String>,
        telefone: impl Into<String>,
    ) -> Self {
        Self {
            nome: nome.into(),
            email: email.into(),
            telefone: telefone.into(),
        }
    }

    /// Form pre-populated from a stored record
    pub fn from_user(user: &User) -> Self {
        Self::new(&user.nome, &user.email, &user.telefone)
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Nome => &self.nome,
            Field::Email => &self.email,
            Field::Telefone => &self.telefone,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Nome => self.nome = value,
            Field::Email => self.email = value,
            Field::Telefone => self.telefone = value,
        }
    }

    /// Names of the fields that are still empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .map(Field::name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Everything the page shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub users: Vec<User>,
    pub modal_open: bool,
    pub form: UserForm,
    /// Set while the modal edits an existing record
    pub editing_id: Option<Id>,
}

impl PageState {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn find(&self, id: Id) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }
}

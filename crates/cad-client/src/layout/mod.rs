//! Text layouts for the users page
//!
//! Both layouts show the same state: a heading, the list (or an empty
//! notice) and, while the modal is open, the form panel.

mod cards;
mod table;

pub use cards::CardGrid;
pub use table::Table;

use std::fmt::Write;

use crate::state::{Field, PageState};

pub const EMPTY_MESSAGE: &str = "Nenhum usuário cadastrado.";
pub const ADD_BUTTON: &str = "[+ Adicionar Usuário]";

/// Renders a `PageState` into text
pub trait Layout {
    fn render(&self, state: &PageState) -> String;
}

/// Modal title for the current mode
pub fn form_title(state: &PageState) -> &'static str {
    if state.is_editing() {
        "Editar Usuário"
    } else {
        "Adicionar Usuário"
    }
}

/// Submit label for the current mode
pub fn submit_label(state: &PageState) -> &'static str {
    if state.is_editing() {
        "Atualizar"
    } else {
        "Salvar"
    }
}

/// Append the form panel when the modal is open
fn render_form(state: &PageState, out: &mut String) {
    if !state.modal_open {
        return;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "== {} ==", form_title(state));
    for field in Field::ALL {
        let value = state.form.get(field);
        let shown = if value.is_empty() {
            format!("<{}>", field.placeholder())
        } else {
            value.to_string()
        };
        let _ = writeln!(out, "{:<9} {}", format!("{}:", field.label()), shown);
    }
    let _ = writeln!(out, "[Cancelar] [{}]", submit_label(state));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UserForm;

    #[test]
    fn test_form_hidden_when_closed() {
        let mut out = String::new();
        render_form(&PageState::default(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_form_modes() {
        let mut state = PageState {
            modal_open: true,
            ..Default::default()
        };

        let mut out = String::new();
        render_form(&state, &mut out);
        assert!(out.contains("== Adicionar Usuário =="));
        assert!(out.contains("<Nome completo>"));
        assert!(out.contains("[Cancelar] [Salvar]"));

        state.editing_id = Some(1);
        state.form = UserForm::new("Ana", "ana@x.com", "11999999999");
        let mut out = String::new();
        render_form(&state, &mut out);
        assert!(out.contains("== Editar Usuário =="));
        assert!(out.contains("Nome:     Ana"));
        assert!(out.contains("[Cancelar] [Atualizar]"));
    }
}

use std::fmt::Write;

use super::{render_form, Layout, ADD_BUTTON, EMPTY_MESSAGE};
use crate::state::PageState;

/// One card per user
#[derive(Debug, Default, Clone, Copy)]
pub struct CardGrid;

impl Layout for CardGrid {
    fn render(&self, state: &PageState) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Gerenciamento de Usuários  {ADD_BUTTON}");
        let _ = writeln!(out);

        if state.users.is_empty() {
            let _ = writeln!(out, "{EMPTY_MESSAGE}");
        }
        for user in &state.users {
            let _ = writeln!(out, "#{} {}  [Editar] [Excluir]", user.id, user.nome);
            let _ = writeln!(out, "   {}", user.email);
            let _ = writeln!(out, "   Telefone: {}", user.telefone);
            let _ = writeln!(out);
        }

        render_form(state, &mut out);
        out
    }
}

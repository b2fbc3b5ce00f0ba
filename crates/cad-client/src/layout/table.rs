use std::fmt::Write;

use super::{render_form, Layout, ADD_BUTTON, EMPTY_MESSAGE};
use crate::state::PageState;

const HEADERS: [&str; 5] = ["ID", "Nome", "Email", "Telefone", "Ações"];
const ACTIONS: &str = "[Editar] [Excluir]";

/// Tabular layout; columns are padded to their widest cell
#[derive(Debug, Default, Clone, Copy)]
pub struct Table;

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{cell}{}", " ".repeat(width.saturating_sub(len)))
}

impl Layout for Table {
    fn render(&self, state: &PageState) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Usuários  {ADD_BUTTON}");
        let _ = writeln!(out);

        if state.users.is_empty() {
            let _ = writeln!(out, "{EMPTY_MESSAGE}");
            render_form(state, &mut out);
            return out;
        }

        let rows: Vec<[String; 5]> = state
            .users
            .iter()
            .map(|user| {
                [
                    user.id.to_string(),
                    user.nome.clone(),
                    user.email.clone(),
                    user.telefone.clone(),
                    ACTIONS.to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |cells: Vec<String>| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| pad(cell, width))
                .collect();
            padded.join(" | ").trim_end().to_string()
        };

        let _ = writeln!(out, "{}", line(HEADERS.iter().map(|h| h.to_string()).collect()));
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let _ = writeln!(out, "{}", rule.join("-+-"));
        for row in rows {
            let _ = writeln!(out, "{}", line(row.to_vec()));
        }

        render_form(state, &mut out);
        out
    }
}

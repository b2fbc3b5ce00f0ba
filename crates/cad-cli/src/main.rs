//! Cadastro command-line client
//!
//! Lists, adds, edits and deletes users against a running server, printing
//! the re-rendered page after every command.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use cad_client::{CardGrid, Confirm, Field, HttpUsersApi, Layout, Table, UsersApi, UsersPage};

#[derive(Parser)]
#[command(name = "cadastro")]
#[command(about = "Manage users of a Cadastro server")]
#[command(version)]
struct Cli {
    /// Server base URL
    #[arg(
        long,
        global = true,
        env = "CADASTRO_API_URL",
        default_value = "http://localhost:8080"
    )]
    base_url: String,

    /// Page layout used for output
    #[arg(long, global = true, value_enum, default_value_t = LayoutArg::Cards)]
    layout: LayoutArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    Cards,
    Table,
}

impl LayoutArg {
    fn layout(self) -> &'static dyn Layout {
        match self {
            LayoutArg::Cards => &CardGrid,
            LayoutArg::Table => &Table,
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Show all users
    List,
    /// Add a user
    Add {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        telefone: String,
    },
    /// Edit a user; omitted fields keep their current value
    Edit {
        id: i64,
        #[arg(long)]
        nome: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        telefone: Option<String>,
    },
    /// Delete a user
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

/// Terminal confirmation through dialoguer
struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "confirmation prompt failed");
                false
            })
    }
}

struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Field values given on the command line, in form order
fn field_values(
    nome: Option<String>,
    email: Option<String>,
    telefone: Option<String>,
) -> Vec<(Field, String)> {
    [
        (Field::Nome, nome),
        (Field::Email, email),
        (Field::Telefone, telefone),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field, v)))
    .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut page = UsersPage::new(HttpUsersApi::new(&cli.base_url));
    run(&mut page, cli.command, &cli.base_url).await?;

    print!("{}", page.render(cli.layout.layout()));
    Ok(())
}

/// Apply one command to the page.
///
/// Only `edit` needs the current list up front; `add` and `delete` re-fetch
/// after they succeed, and `list` shows an empty page if the fetch fails.
async fn run<A: UsersApi>(
    page: &mut UsersPage<A>,
    command: Commands,
    base_url: &str,
) -> Result<()> {
    match command {
        Commands::List => page.mount().await,
        Commands::Add {
            nome,
            email,
            telefone,
        } => {
            page.open_create();
            for (field, value) in field_values(Some(nome), Some(email), Some(telefone)) {
                page.set_field(field, value);
            }
            let user = page.submit().await.context("failed to add user")?;
            eprintln!("Usuário {} criado.", user.id);
        }
        Commands::Edit {
            id,
            nome,
            email,
            telefone,
        } => {
            page.refresh()
                .await
                .with_context(|| format!("failed to load users from {base_url}"))?;
            let user = page
                .state()
                .find(id)
                .cloned()
                .with_context(|| format!("user {id} not found"))?;
            page.edit(&user);
            for (field, value) in field_values(nome, email, telefone) {
                page.set_field(field, value);
            }
            page.submit().await.context("failed to update user")?;
            eprintln!("Usuário {id} atualizado.");
        }
        Commands::Delete { id, yes } => {
            let confirm: &dyn Confirm = if yes { &AssumeYes } else { &PromptConfirm };
            if page
                .delete(id, confirm)
                .await
                .context("failed to delete user")?
            {
                eprintln!("Usuário {id} excluído.");
            }
        }
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cad_client::{ClientError, ClientResult, UserForm};
    use cad_models::User;
    use clap::CommandFactory;

    /// Server whose list endpoint is down; writes still succeed
    struct ListDown;

    fn list_failed() -> ClientError {
        ClientError::Api {
            status: 500,
            message: "Erro ao buscar usuários".into(),
        }
    }

    #[async_trait]
    impl UsersApi for ListDown {
        async fn list(&self) -> ClientResult<Vec<User>> {
            Err(list_failed())
        }

        async fn create(&self, form: UserForm) -> ClientResult<User> {
            Ok(User {
                id: 1,
                nome: form.nome,
                email: form.email,
                telefone: form.telefone,
            })
        }

        async fn update(&self, id: i64, form: UserForm) -> ClientResult<User> {
            Ok(User {
                id,
                nome: form.nome,
                email: form.email,
                telefone: form.telefone,
            })
        }

        async fn delete(&self, _id: i64) -> ClientResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_edit() {
        let cli = Cli::try_parse_from([
            "cadastro",
            "--base-url",
            "http://api.local",
            "edit",
            "3",
            "--email",
            "ana@y.com",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "http://api.local");
        assert_eq!(
            cli.command,
            Commands::Edit {
                id: 3,
                nome: None,
                email: Some("ana@y.com".into()),
                telefone: None,
            }
        );
    }

    #[test]
    fn test_parse_layout_and_delete() {
        let cli =
            Cli::try_parse_from(["cadastro", "delete", "9", "--yes", "--layout", "table"]).unwrap();

        assert_eq!(cli.layout, LayoutArg::Table);
        assert_eq!(cli.command, Commands::Delete { id: 9, yes: true });
    }

    #[test]
    fn test_add_requires_all_fields() {
        let result = Cli::try_parse_from(["cadastro", "add", "--nome", "Ana"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_field_values_skip_omitted() {
        let values = field_values(None, Some("a@x.com".into()), Some("1".into()));
        assert_eq!(
            values,
            vec![
                (Field::Email, "a@x.com".to_string()),
                (Field::Telefone, "1".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_list_shows_empty_page_when_fetch_fails() {
        let mut page = UsersPage::new(ListDown);
        run(&mut page, Commands::List, "http://api.local").await.unwrap();
        assert!(page.state().users.is_empty());
    }

    #[tokio::test]
    async fn test_add_and_delete_do_not_need_initial_list() {
        let mut page = UsersPage::new(ListDown);
        let add = Commands::Add {
            nome: "Ana".into(),
            email: "ana@x.com".into(),
            telefone: "1".into(),
        };
        run(&mut page, add, "http://api.local").await.unwrap();

        let delete = Commands::Delete { id: 1, yes: true };
        run(&mut page, delete, "http://api.local").await.unwrap();
    }

    #[tokio::test]
    async fn test_edit_requires_the_list() {
        let mut page = UsersPage::new(ListDown);
        let edit = Commands::Edit {
            id: 1,
            nome: Some("Bia".into()),
            email: None,
            telefone: None,
        };

        let err = run(&mut page, edit, "http://api.local").await.unwrap_err();
        assert_eq!(err.to_string(), "failed to load users from http://api.local");
    }

    #[test]
    fn test_assume_yes() {
        assert!(AssumeYes.confirm(cad_client::DELETE_PROMPT));
    }
}

//! Drives `UsersPage` over real HTTP against the API router backed by the
//! in-memory store.

use cad_api::AppState;
use cad_client::{ClientError, Field, HttpUsersApi, UsersApi, UsersPage};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = cad_api::router().with_state(AppState::in_memory());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn fill(page: &mut UsersPage<HttpUsersApi>, nome: &str, email: &str, telefone: &str) {
    page.set_field(Field::Nome, nome);
    page.set_field(Field::Email, email);
    page.set_field(Field::Telefone, telefone);
}

#[tokio::test]
async fn test_page_lifecycle_over_http() {
    let base_url = spawn_server().await;
    let mut page = UsersPage::new(HttpUsersApi::new(&base_url));

    page.mount().await;
    assert!(page.state().users.is_empty());

    // create
    page.open_create();
    fill(&mut page, "Ana", "ana@x.com", "11999999999");
    let ana = page.submit().await.unwrap();
    assert!(ana.id > 0);
    assert!(!page.state().modal_open);
    assert_eq!(page.state().users, vec![ana.clone()]);

    page.open_create();
    fill(&mut page, "Bia", "bia@x.com", "11888888888");
    let bia = page.submit().await.unwrap();
    assert_eq!(page.state().users, vec![ana.clone(), bia.clone()]);

    // edit only the name
    page.edit(&ana);
    page.set_field(Field::Nome, "Ana Maria");
    let updated = page.submit().await.unwrap();
    assert_eq!(updated.id, ana.id);
    assert_eq!(updated.nome, "Ana Maria");
    assert_eq!(updated.email, "ana@x.com");
    assert_eq!(updated.telefone, "11999999999");
    assert_eq!(page.state().users[0], updated);

    // delete
    let deleted = page.delete(bia.id, &|_: &str| true).await.unwrap();
    assert!(deleted);
    assert_eq!(page.state().users, vec![updated]);

    let declined = page.delete(ana.id, &|_: &str| false).await.unwrap();
    assert!(!declined);
    assert_eq!(page.state().users.len(), 1);
}

#[tokio::test]
async fn test_server_errors_reach_the_client() {
    let base_url = spawn_server().await;
    let api = HttpUsersApi::new(&base_url);
    let mut page = UsersPage::new(api.clone());

    // update of an id the store never assigned
    page.open_create();
    fill(&mut page, "Ana", "ana@x.com", "11999999999");
    let ana = page.submit().await.unwrap();

    let mut ghost = ana.clone();
    ghost.id = 9999;
    page.edit(&ghost);
    let err = page.submit().await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Erro ao atualizar usuário");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(page.state().modal_open);
    assert_eq!(page.state().editing_id, Some(9999));

    // second delete of the same id
    api.delete(ana.id).await.unwrap();
    assert!(api.list().await.unwrap().is_empty());

    let err = page.delete(ana.id, &|_: &str| true).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Api { status: 500, ref message } if message == "Erro ao deletar usuário"
    ));
}

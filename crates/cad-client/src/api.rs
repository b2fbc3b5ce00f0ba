//! HTTP access to `/api/users`

use async_trait::async_trait;
use cad_core::traits::Id;
use cad_models::User;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};
use crate::state::UserForm;

/// The four calls the page makes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<User>>;

    async fn create(&self, form: UserForm) -> ClientResult<User>;

    async fn update(&self, id: Id, form: UserForm) -> ClientResult<User>;

    async fn delete(&self, id: Id) -> ClientResult<()>;
}

#[derive(Serialize)]
struct UpdatePayload<'a> {
    id: Id,
    #[serde(flatten)]
    form: &'a UserForm,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// `UsersApi` over reqwest
#[derive(Debug, Clone)]
pub struct HttpUsersApi {
    client: Client,
    base_url: String,
}

impl HttpUsersApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn users_url(&self) -> String {
        format!("{}/api/users", self.base_url.trim_end_matches('/'))
    }

    /// Turn a non-success response into `ClientError::Api`
    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn list(&self) -> ClientResult<Vec<User>> {
        let response = self.client.get(self.users_url()).send().await?;
        let users = Self::check(response).await?.json().await?;
        Ok(users)
    }

    async fn create(&self, form: UserForm) -> ClientResult<User> {
        let response = self
            .client
            .post(self.users_url())
            .json(&form)
            .send()
            .await?;
        let user = Self::check(response).await?.json().await?;
        Ok(user)
    }

    async fn update(&self, id: Id, form: UserForm) -> ClientResult<User> {
        let response = self
            .client
            .put(self.users_url())
            .json(&UpdatePayload { id, form: &form })
            .send()
            .await?;
        let user = Self::check(response).await?.json().await?;
        Ok(user)
    }

    async fn delete(&self, id: Id) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.users_url())
            .query(&[("id", id)])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

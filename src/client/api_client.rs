use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::error::{TaskHubError, TaskHubResult};
use crate::models::*;

/// REST client for the TaskHub backend. The bearer token, when present, is
/// baked into the default headers so every request carries it.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<&str>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .expect("Invalid token format"),
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client without credentials, used by the auth endpoints.
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        Self::new(base_url, None)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path. `path` must start with '/'.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> TaskHubResult<T> {
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Non-2xx responses carry either a JSON `{"error": ...}` body or plain
    /// text; unwrap whichever is present into the error message.
    async fn check_status(response: Response) -> TaskHubResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.error.or(b.message))
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                } else {
                    body
                }
            });

        Err(TaskHubError::api(status.as_u16(), message))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> TaskHubResult<T> {
        let response = self.client.get(self.endpoint(path)).send().await?;
        self.read_json(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> TaskHubResult<T> {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;
        self.read_json(response).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> TaskHubResult<T> {
        let response = self
            .client
            .put(self.endpoint(path))
            .json(body)
            .send()
            .await?;
        self.read_json(response).await
    }

    // --- auth ---

    pub async fn login(&self, email: &str, password: &str) -> TaskHubResult<AuthResponse> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/login", &payload).await
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> TaskHubResult<AuthResponse> {
        let payload = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/register", &payload).await
    }

    // --- groups ---

    pub async fn get_groups(&self) -> TaskHubResult<Vec<Group>> {
        self.get("/groups").await
    }

    pub async fn create_group(&self, name: &str, description: &str) -> TaskHubResult<Group> {
        let payload = GroupCreate {
            name: name.to_string(),
            description: description.to_string(),
        };
        self.post("/groups", &payload).await
    }

    pub async fn get_group(&self, group_id: &str) -> TaskHubResult<GroupDetail> {
        let response: GroupDetailResponse = self.get(&format!("/groups/{}", group_id)).await?;
        Ok(response.into())
    }

    pub async fn remove_member(&self, group_id: &str, user_id: &str) -> TaskHubResult<()> {
        let payload = RemoveMember {
            user_id: user_id.to_string(),
        };
        let response = self
            .client
            .post(self.endpoint(&format!("/groups/{}/remove", group_id)))
            .json(&payload)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    // --- invites ---

    pub async fn create_invite(&self, group_id: &str) -> TaskHubResult<Invite> {
        self.post(&format!("/invites/{}/create", group_id), &json!({}))
            .await
    }

    pub async fn accept_invite(&self, token: &str) -> TaskHubResult<AcceptedInvite> {
        let payload = AcceptInvite {
            token: token.to_string(),
        };
        self.post("/invites/accept", &payload).await
    }

    // --- tasks ---

    pub async fn get_tasks(&self) -> TaskHubResult<Vec<Task>> {
        self.get("/tasks").await
    }

    pub async fn get_group_tasks(&self, group_id: &str) -> TaskHubResult<Vec<Task>> {
        self.get(&format!("/tasks/group/{}", group_id)).await
    }

    pub async fn create_task(&self, task: &TaskCreate) -> TaskHubResult<Task> {
        self.post("/tasks", task).await
    }

    pub async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> TaskHubResult<Task> {
        self.put(&format!("/tasks/{}", task_id), update).await
    }

    pub async fn delete_task(&self, task_id: &str) -> TaskHubResult<()> {
        let response = self
            .client
            .delete(self.endpoint(&format!("/tasks/{}", task_id)))
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        // Some deployments answer 204, others echo the deleted task.
        if response.status() != StatusCode::NO_CONTENT {
            let _ = response.text().await;
        }
        Ok(())
    }
}

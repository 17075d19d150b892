use serde::{Deserialize, Serialize};

use super::task::TaskStatus;
use super::user::User;

/// Body for `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Returned by both auth endpoints.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Body for `POST /groups`.
#[derive(Debug, Serialize)]
pub struct GroupCreate {
    pub name: String,
    pub description: String,
}

/// Body for `POST /groups/:id/remove`.
#[derive(Debug, Serialize)]
pub struct RemoveMember {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Body for `POST /tasks`. Unset optional fields are omitted entirely, not
/// sent as null.
#[derive(Debug, Serialize, Clone, Default)]
pub struct TaskCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(rename = "groupId", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Body for `PUT /tasks/:id`. Only fields being changed are sent.
#[derive(Debug, Serialize, Clone, Default)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(rename = "groupId", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.deadline.is_none()
            && self.group_id.is_none()
    }
}

/// Error payload some endpoints return alongside a non-2xx status.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

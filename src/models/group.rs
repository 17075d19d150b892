use serde::{Deserialize, Serialize};

use super::task::Task;
use super::user::User;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "ownerId")]
    pub owner_id: Option<String>,
    /// Some detail responses carry member ids directly on the group.
    #[serde(rename = "memberIds", default, skip_serializing_if = "Vec::is_empty")]
    pub member_ids: Vec<String>,
}

impl Group {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id.as_deref() == Some(user_id)
    }
}

/// Normalized `GET /groups/:id` response.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GroupDetail {
    pub group: Group,
    #[serde(default)]
    pub members: Vec<User>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// The backend answers `GET /groups/:id` with either `{group, members, tasks}`
/// or the bare group object. Deserialize both and normalize.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GroupDetailResponse {
    Full(GroupDetail),
    Bare(Group),
}

impl From<GroupDetailResponse> for GroupDetail {
    fn from(response: GroupDetailResponse) -> Self {
        match response {
            GroupDetailResponse::Full(detail) => detail,
            GroupDetailResponse::Bare(group) => GroupDetail {
                group,
                members: Vec::new(),
                tasks: Vec::new(),
            },
        }
    }
}

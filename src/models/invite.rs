use serde::{Deserialize, Serialize};

/// Response from `POST /invites/:groupId/create`. The token is the shareable
/// code; some deployments also return a ready-made link.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Invite {
    pub token: String,
    pub link: Option<String>,
}

/// Body for `POST /invites/accept`.
#[derive(Debug, Serialize)]
pub struct AcceptInvite {
    pub token: String,
}

/// Response from `POST /invites/accept`. A 2xx response without an explicit
/// `success` field counts as accepted.
#[derive(Debug, Deserialize, Clone)]
pub struct AcceptedInvite {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(rename = "groupId")]
    pub group_id: Option<String>,
    pub error: Option<String>,
}

fn default_success() -> bool {
    true
}

use serde_json::json;
use taskhub_cli::models::{
    GroupCreate, GroupDetail, GroupDetailResponse, LoginRequest, RegisterRequest, TaskCreate,
    TaskStatus,
};
use taskhub_cli::ApiClient;

#[test]
fn test_endpoint_paths() {
    let client = ApiClient::anonymous("http://localhost:4000/api");

    assert_eq!(client.endpoint("/auth/login"), "http://localhost:4000/api/auth/login");
    assert_eq!(client.endpoint("/groups"), "http://localhost:4000/api/groups");
    assert_eq!(client.endpoint("/groups/g-1"), "http://localhost:4000/api/groups/g-1");
    assert_eq!(
        client.endpoint("/groups/g-1/remove"),
        "http://localhost:4000/api/groups/g-1/remove"
    );
    assert_eq!(
        client.endpoint("/invites/g-1/create"),
        "http://localhost:4000/api/invites/g-1/create"
    );
    assert_eq!(
        client.endpoint("/invites/accept"),
        "http://localhost:4000/api/invites/accept"
    );
    assert_eq!(client.endpoint("/tasks"), "http://localhost:4000/api/tasks");
    assert_eq!(client.endpoint("/tasks/t-1"), "http://localhost:4000/api/tasks/t-1");
    assert_eq!(
        client.endpoint("/tasks/group/g-1"),
        "http://localhost:4000/api/tasks/group/g-1"
    );
}

#[test]
fn test_trailing_slash_in_base_url_is_trimmed() {
    let client = ApiClient::anonymous("http://localhost:4000/api/");
    assert_eq!(client.endpoint("/tasks"), "http://localhost:4000/api/tasks");
}

#[test]
fn test_login_payload_shape() {
    let payload = LoginRequest {
        email: "ada@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"email": "ada@example.com", "password": "hunter2"})
    );
}

#[test]
fn test_register_payload_shape() {
    let payload = RegisterRequest {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "password": "hunter2"
        })
    );
}

#[test]
fn test_group_create_payload_shape() {
    let payload = GroupCreate {
        name: "Team".to_string(),
        description: String::new(),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"name": "Team", "description": ""})
    );
}

#[test]
fn test_task_create_payload_matches_form_submission() {
    // What the create-task form sends for a group task with a deadline
    let payload = TaskCreate {
        title: "Prepare demo".to_string(),
        description: Some("Slides and a live run".to_string()),
        status: TaskStatus::Todo,
        deadline: Some("2026-09-15".to_string()),
        group_id: Some("g-7".to_string()),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "title": "Prepare demo",
            "description": "Slides and a live run",
            "status": "todo",
            "deadline": "2026-09-15",
            "groupId": "g-7"
        })
    );
}

#[test]
fn test_group_detail_shapes_normalize_identically() {
    let full: GroupDetailResponse = serde_json::from_value(json!({
        "group": {"id": "g-1", "name": "Team", "ownerId": "u-1", "description": null},
        "members": [],
        "tasks": []
    }))
    .unwrap();
    let bare: GroupDetailResponse = serde_json::from_value(json!({
        "id": "g-1", "name": "Team", "ownerId": "u-1", "description": null
    }))
    .unwrap();

    let full: GroupDetail = full.into();
    let bare: GroupDetail = bare.into();

    assert_eq!(full.group.id, bare.group.id);
    assert_eq!(full.group.name, bare.group.name);
    assert_eq!(full.members.len(), bare.members.len());
}

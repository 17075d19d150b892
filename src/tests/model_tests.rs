use serde_json::json;

use crate::models::{
    AcceptedInvite, AuthResponse, GroupDetail, GroupDetailResponse, RemoveMember, Task,
    TaskCreate, TaskStatus, TaskUpdate,
};

#[test]
fn test_task_create_omits_unset_fields() {
    let payload = TaskCreate {
        title: "Buy milk".to_string(),
        status: TaskStatus::Todo,
        ..Default::default()
    };

    let value = serde_json::to_value(&payload).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object["title"], json!("Buy milk"));
    assert_eq!(object["status"], json!("todo"));
    // Optional fields are omitted, never sent as null
    assert!(!object.contains_key("description"));
    assert!(!object.contains_key("deadline"));
    assert!(!object.contains_key("groupId"));
}

#[test]
fn test_task_create_with_group_and_deadline() {
    let payload = TaskCreate {
        title: "Plan retro".to_string(),
        description: Some("Agenda on the board".to_string()),
        status: TaskStatus::InProgress,
        deadline: Some("2026-09-01".to_string()),
        group_id: Some("g-42".to_string()),
    };

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["status"], json!("inprogress"));
    assert_eq!(value["deadline"], json!("2026-09-01"));
    assert_eq!(value["groupId"], json!("g-42"));
}

#[test]
fn test_task_status_wire_strings() {
    assert_eq!(
        serde_json::to_string(&TaskStatus::InProgress).unwrap(),
        "\"inprogress\""
    );
    assert_eq!(serde_json::to_string(&TaskStatus::Todo).unwrap(), "\"todo\"");
    assert_eq!(serde_json::to_string(&TaskStatus::Done).unwrap(), "\"done\"");

    let parsed: TaskStatus = serde_json::from_str("\"inprogress\"").unwrap();
    assert_eq!(parsed, TaskStatus::InProgress);
}

#[test]
fn test_task_status_from_str_aliases() {
    assert_eq!("todo".parse::<TaskStatus>().unwrap(), TaskStatus::Todo);
    assert_eq!(
        "in-progress".parse::<TaskStatus>().unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!("DONE".parse::<TaskStatus>().unwrap(), TaskStatus::Done);
    assert!("blocked".parse::<TaskStatus>().is_err());
}

#[test]
fn test_task_status_cycle() {
    assert_eq!(TaskStatus::Todo.next(), TaskStatus::InProgress);
    assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Done);
    assert_eq!(TaskStatus::Done.next(), TaskStatus::Todo);
}

#[test]
fn test_task_deadline_date_strips_time_suffix() {
    let task: Task = serde_json::from_value(json!({
        "id": "t-1",
        "title": "Ship it",
        "status": "todo",
        "deadline": "2026-08-07T00:00:00.000Z",
        "groupId": "g-1"
    }))
    .unwrap();

    assert_eq!(task.deadline_date(), Some("2026-08-07"));
    assert!(!task.is_personal());
}

#[test]
fn test_task_without_group_is_personal() {
    let task: Task = serde_json::from_value(json!({
        "id": "t-2",
        "title": "Water plants",
        "status": "done"
    }))
    .unwrap();

    assert!(task.is_personal());
    assert_eq!(task.deadline_date(), None);
}

#[test]
fn test_group_detail_full_shape() {
    let response: GroupDetailResponse = serde_json::from_value(json!({
        "group": {"id": "g-1", "name": "Team", "description": null, "ownerId": "u-1"},
        "members": [
            {"id": "u-1", "name": "Ada Lovelace", "email": "ada@example.com"},
            {"id": "u-2", "name": "Alan Turing", "email": "alan@example.com"}
        ],
        "tasks": [
            {"id": "t-1", "title": "Write docs", "status": "inprogress", "groupId": "g-1"}
        ]
    }))
    .unwrap();

    let detail: GroupDetail = response.into();
    assert_eq!(detail.group.id, "g-1");
    assert_eq!(detail.members.len(), 2);
    assert_eq!(detail.tasks.len(), 1);
    assert!(detail.group.is_owned_by("u-1"));
    assert!(!detail.group.is_owned_by("u-2"));
}

#[test]
fn test_group_detail_bare_shape() {
    let response: GroupDetailResponse = serde_json::from_value(json!({
        "id": "g-2",
        "name": "Solo",
        "description": "just me",
        "ownerId": "u-1",
        "memberIds": ["u-1"]
    }))
    .unwrap();

    let detail: GroupDetail = response.into();
    assert_eq!(detail.group.id, "g-2");
    assert_eq!(detail.group.member_ids, vec!["u-1"]);
    assert!(detail.members.is_empty());
    assert!(detail.tasks.is_empty());
}

#[test]
fn test_accepted_invite_defaults_to_success() {
    // A 2xx response with no body flags still counts as accepted
    let accepted: AcceptedInvite = serde_json::from_value(json!({"groupId": "g-9"})).unwrap();
    assert!(accepted.success);
    assert_eq!(accepted.group_id.as_deref(), Some("g-9"));

    let rejected: AcceptedInvite =
        serde_json::from_value(json!({"success": false, "error": "token expired"})).unwrap();
    assert!(!rejected.success);
    assert_eq!(rejected.error.as_deref(), Some("token expired"));
}

#[test]
fn test_auth_response_shape() {
    let auth: AuthResponse = serde_json::from_value(json!({
        "token": "jwt-abc",
        "user": {"id": "u-1", "name": "Ada Lovelace", "email": "ada@example.com"}
    }))
    .unwrap();

    assert_eq!(auth.token, "jwt-abc");
    assert_eq!(auth.user.email, "ada@example.com");
}

#[test]
fn test_remove_member_payload_shape() {
    let payload = RemoveMember {
        user_id: "u-2".to_string(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value, json!({"userId": "u-2"}));
}

#[test]
fn test_task_update_is_empty() {
    assert!(TaskUpdate::default().is_empty());

    let update = TaskUpdate {
        status: Some(TaskStatus::Done),
        ..Default::default()
    };
    assert!(!update.is_empty());

    // Only the provided field goes on the wire
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value, json!({"status": "done"}));
}

use super::*;

#[test]
fn task_deserializes_camel_case_fields() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "id": "t-1",
        "userId": "u-1",
        "title": "Groceries",
        "color": "#C8E6C9",
        "description": "<b>milk</b>",
        "completed": true,
        "createdAt": "2026-01-02T03:04:05Z"
    }))
    .unwrap();
    assert_eq!(task.id, "t-1");
    assert_eq!(task.user_id.as_deref(), Some("u-1"));
    assert_eq!(task.color, "#c8e6c9");
    assert_eq!(task.description, "<b>milk</b>");
    assert!(task.completed);
    assert_eq!(task.created_at.as_deref(), Some("2026-01-02T03:04:05Z"));
}

#[test]
fn task_defaults_missing_optional_fields() {
    let task: Task = serde_json::from_value(serde_json::json!({ "id": 7, "title": "Call mom" })).unwrap();
    assert_eq!(task.id, "7");
    assert_eq!(task.user_id, None);
    assert_eq!(task.color, "#fff9c4");
    assert_eq!(task.description, "");
    assert!(!task.completed);
    assert_eq!(task.created_at, None);
}

#[test]
fn task_replaces_null_or_invalid_color_with_default() {
    let null_color: Task =
        serde_json::from_value(serde_json::json!({ "id": "a", "title": "x", "color": null, "description": null }))
            .unwrap();
    assert_eq!(null_color.color, "#fff9c4");
    assert_eq!(null_color.description, "");

    let bad_color: Task =
        serde_json::from_value(serde_json::json!({ "id": "a", "title": "x", "color": "tomato" })).unwrap();
    assert_eq!(bad_color.color, "#fff9c4");
}

#[test]
fn task_accepts_mongo_style_id() {
    let task: Task = serde_json::from_value(serde_json::json!({ "_id": "abc123", "title": "x" })).unwrap();
    assert_eq!(task.id, "abc123");
}

#[test]
fn task_without_id_is_rejected() {
    let result = serde_json::from_value::<Task>(serde_json::json!({ "title": "x" }));
    assert!(result.is_err());
}

#[test]
fn task_patch_omits_unset_fields() {
    let body = serde_json::to_value(TaskPatch::completed(true)).unwrap();
    assert_eq!(body, serde_json::json!({ "completed": true }));
}

#[test]
fn task_patch_serializes_camel_case() {
    let patch = TaskPatch {
        user_id: Some("u-1".to_owned()),
        title: Some("Title".to_owned()),
        color: Some("#fff9c4".to_owned()),
        description: Some("body".to_owned()),
        completed: None,
    };
    assert_eq!(
        serde_json::to_value(patch).unwrap(),
        serde_json::json!({
            "userId": "u-1",
            "title": "Title",
            "color": "#fff9c4",
            "description": "body"
        })
    );
}

#[test]
fn auth_response_parses_token_and_user() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "token": "abc",
        "user": { "id": 42, "email": "user@test.com" }
    }))
    .unwrap();
    assert_eq!(resp.token.as_deref(), Some("abc"));
    let user = resp.user.unwrap();
    assert_eq!(user.id, "42");
    assert_eq!(user.email, "user@test.com");
}

#[test]
fn auth_response_tolerates_empty_body() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(resp, AuthResponse::default());
}

#[test]
fn email_request_serializes_email_only() {
    let body = serde_json::to_value(EmailRequest { email: "a@b.co" }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.co" }));
}

#[test]
fn task_accepts_numeric_created_at() {
    let task: Task =
        serde_json::from_str(r#"{"id":"1","title":"t","createdAt":1700000000000}"#).unwrap();
    assert_eq!(task.created_at.as_deref(), Some("1700000000000"));
}

#[test]
fn task_list_with_mixed_timestamps_decodes() {
    let tasks: Vec<Task> = serde_json::from_str(
        r#"[{"id":"1","title":"a","createdAt":"2026-01-02T03:04:05Z"},{"id":"2","title":"b","createdAt":1700000000000},{"id":"3","title":"c","createdAt":null}]"#,
    )
    .unwrap();
    let stamps: Vec<_> = tasks.iter().map(|t| t.created_at.as_deref()).collect();
    assert_eq!(stamps, vec![Some("2026-01-02T03:04:05Z"), Some("1700000000000"), None]);
}

#[test]
fn auth_user_null_id_reads_as_empty() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"token":"abc","user":{"id":null,"email":"a@b.co"}}"#).unwrap();
    let user = resp.user.unwrap();
    assert_eq!(user.id, "");
    assert_eq!(user.email, "a@b.co");
}

use super::*;

fn user(id: &str) -> User {
    User { id: id.to_owned(), email: Some("ada@example.com".to_owned()), user_metadata: serde_json::json!({}) }
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_deserializes_backend_token_response() {
    let session: Session = serde_json::from_value(serde_json::json!({
        "access_token": "at",
        "refresh_token": "rt",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1_700_003_600,
        "user": { "id": "u1", "email": "ada@example.com", "user_metadata": { "full_name": "Ada" } }
    }))
    .unwrap();
    assert_eq!(session.access_token, "at");
    assert_eq!(session.expires_at, Some(1_700_003_600));
    assert_eq!(session.user.display_name(), "Ada");
}

#[test]
fn session_expiry_is_filled_from_expires_in() {
    let session = Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at: None,
        user: user("u1"),
    }
    .with_expiry_from(1000);
    assert_eq!(session.expires_at, Some(4600));
    assert!(!session.is_expired(4000));
    assert!(session.is_expired(4600 - SESSION_EXPIRY_MARGIN_SECS));
}

#[test]
fn display_name_falls_back_to_email_then_id() {
    let mut u = user("u1");
    assert_eq!(u.display_name(), "ada@example.com");
    u.email = None;
    assert_eq!(u.display_name(), "u1");
}

// =============================================================
// Fragment tokens
// =============================================================

#[test]
fn parse_fragment_tokens_reads_oauth_redirect() {
    let tokens =
        parse_fragment_tokens("#access_token=abc&expires_in=7200&refresh_token=def&token_type=bearer&type=recovery")
            .unwrap();
    assert_eq!(tokens.access_token, "abc");
    assert_eq!(tokens.refresh_token, "def");
    assert_eq!(tokens.expires_in, 7200);
    assert_eq!(tokens.kind.as_deref(), Some("recovery"));
}

#[test]
fn parse_fragment_tokens_ignores_plain_anchors() {
    assert_eq!(parse_fragment_tokens("#pricing"), None);
    assert_eq!(parse_fragment_tokens(""), None);
    assert_eq!(parse_fragment_tokens("#access_token=abc"), None);
}

// =============================================================
// Project rows and webhook payload
// =============================================================

#[test]
fn project_config_serializes_type_keyword() {
    let config = ProjectConfig { site_type: "portfolio".to_owned(), ..ProjectConfig::default() };
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["type"], "portfolio");
    assert!(value.get("site_type").is_none());
    assert_eq!(value["features"], serde_json::json!([]));
}

#[test]
fn new_project_row_is_pending_with_full_config() {
    let config = ProjectConfig {
        name: "Atelier".to_owned(),
        site_type: "business".to_owned(),
        ..ProjectConfig::default()
    };
    let row = NewProjectRow::pending("u1", &config);
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["user_id"], "u1");
    assert_eq!(value["name"], "Atelier");
    assert_eq!(value["type"], "business");
    assert_eq!(value["status"], "pending");
    assert_eq!(value["config_json"]["name"], "Atelier");
}

#[test]
fn webhook_payload_uses_camel_case_keys() {
    let payload = WebhookPayload {
        project_id: "p1".to_owned(),
        user_id: "u1".to_owned(),
        config: ProjectConfig::default(),
        timestamp: "2026-10-17T12:00:00.000Z".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["projectId"], "p1");
    assert_eq!(value["userId"], "u1");
    assert_eq!(value["timestamp"], "2026-10-17T12:00:00.000Z");
}

#[test]
fn project_record_tolerates_sparse_rows() {
    let record: ProjectRecord = serde_json::from_value(serde_json::json!({ "id": "p1" })).unwrap();
    assert_eq!(record.id, "p1");
    assert_eq!(record.created_at, None);
}

#[test]
fn project_record_accepts_numeric_identity_key() {
    let record: ProjectRecord =
        serde_json::from_str(r#"{"id":42,"name":"Atelier","type":"portfolio","status":"pending"}"#).unwrap();
    assert_eq!(record.id, "42");
    assert_eq!(record.site_type, "portfolio");
}

#[test]
fn project_record_rejects_non_scalar_id() {
    let result = serde_json::from_value::<ProjectRecord>(serde_json::json!({ "id": null }));
    assert!(result.is_err());
}

// =============================================================
// Backend error bodies
// =============================================================

#[test]
fn backend_error_message_prefers_description() {
    let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
    assert_eq!(backend_error_message(400, body), "Invalid login credentials");
}

#[test]
fn backend_error_message_reads_data_api_shape() {
    let body = r#"{"code":"42501","message":"permission denied for table projects"}"#;
    assert_eq!(backend_error_message(403, body), "permission denied for table projects");
}

#[test]
fn backend_error_message_falls_back_to_status() {
    assert_eq!(backend_error_message(502, "<html>bad gateway</html>"), "request failed: 502");
}

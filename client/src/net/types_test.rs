use super::*;

#[test]
fn role_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::from_str::<Role>("\"user\"").unwrap(), Role::User);
    assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
}

#[test]
fn login_response_parses_server_body() {
    let raw = r#"{"message":"Login successful","user":{"id":"1","username":"sagor","role":"admin"}}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.message, "Login successful");
    assert_eq!(resp.user, User { id: "1".into(), username: "sagor".into(), role: Role::Admin });
    assert!(resp.user.is_admin());
}

#[test]
fn user_ignores_unexpected_fields() {
    let raw = r#"{"id":"2","username":"shohid","role":"user","password":"1234"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert!(!user.is_admin());
    let back = serde_json::to_value(&user).unwrap();
    assert!(back.get("password").is_none());
}

#[test]
fn login_request_serializes_both_fields() {
    let body = serde_json::to_value(LoginRequest { username: "sagor", password: "1234" }).unwrap();
    assert_eq!(body, serde_json::json!({"username": "sagor", "password": "1234"}));
}

use serde_json::json;

use super::*;
use crate::services::users::Role;
use crate::state::test_helpers::test_app_state;

fn request(username: Option<&str>, password: Option<&str>) -> LoginRequest {
    LoginRequest { username: username.map(Value::from), password: password.map(Value::from) }
}

// =============================================================================
// credentials
// =============================================================================

#[test]
fn credentials_accepts_both_fields() {
    let req = request(Some("sagor"), Some("1234"));
    assert_eq!(credentials(&req), Ok(Some(("sagor", "1234"))));
}

#[test]
fn credentials_rejects_missing_username() {
    let req = request(None, Some("1234"));
    assert_eq!(credentials(&req), Err(ApiError::Validation(MISSING_FIELDS)));
}

#[test]
fn credentials_rejects_missing_password() {
    let req = request(Some("sagor"), None);
    assert_eq!(credentials(&req), Err(ApiError::Validation(MISSING_FIELDS)));
}

#[test]
fn credentials_rejects_empty_strings() {
    assert!(credentials(&request(Some(""), Some("1234"))).is_err());
    assert!(credentials(&request(Some("sagor"), Some(""))).is_err());
}

#[test]
fn credentials_treats_falsy_values_as_missing() {
    for value in [json!(null), json!(false), json!(0), json!(0.0)] {
        let req = LoginRequest { username: Some(value.clone()), password: Some(json!("1234")) };
        assert_eq!(credentials(&req), Err(ApiError::Validation(MISSING_FIELDS)), "{value}");
    }
}

#[test]
fn credentials_non_string_values_cannot_match() {
    for value in [json!(123), json!(true), json!(["sagor"]), json!({"name": "sagor"})] {
        let req = LoginRequest { username: Some(value.clone()), password: Some(json!("1234")) };
        assert_eq!(credentials(&req), Ok(None), "{value}");
        let req = LoginRequest { username: Some(json!("sagor")), password: Some(value.clone()) };
        assert_eq!(credentials(&req), Ok(None), "{value}");
    }
}

#[test]
fn credentials_does_not_trim() {
    let req = request(Some(" sagor "), Some(" 1234 "));
    assert_eq!(credentials(&req), Ok(Some((" sagor ", " 1234 "))));
}

// =============================================================================
// login handler
// =============================================================================

#[tokio::test]
async fn login_admin_returns_public_user() {
    let state = test_app_state();
    let Json(resp) = login(State(state), Ok(Json(request(Some("sagor"), Some("1234")))))
        .await
        .unwrap();
    assert_eq!(resp.message, "Login successful");
    assert_eq!(resp.user.id, "1");
    assert_eq!(resp.user.role, Role::Admin);
}

#[tokio::test]
async fn login_regular_user_has_user_role() {
    let state = test_app_state();
    let Json(resp) = login(State(state), Ok(Json(request(Some("shohid"), Some("1234")))))
        .await
        .unwrap();
    assert_eq!(resp.user.username, "shohid");
    assert_eq!(resp.user.role, Role::User);
}

#[tokio::test]
async fn login_wrong_password_is_authentication_error() {
    let state = test_app_state();
    let err = login(State(state), Ok(Json(request(Some("sagor"), Some("wrong")))))
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Authentication);
}

#[tokio::test]
async fn login_numeric_username_is_authentication_error() {
    let state = test_app_state();
    let req = LoginRequest { username: Some(json!(123)), password: Some(json!("1234")) };
    let err = login(State(state), Ok(Json(req))).await.unwrap_err();
    assert_eq!(err, ApiError::Authentication);
}

#[tokio::test]
async fn login_missing_field_is_validation_error() {
    let state = test_app_state();
    let err = login(State(state), Ok(Json(request(Some("sagor"), None))))
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Validation(MISSING_FIELDS));
}

#[test]
fn login_response_serializes_without_password() {
    let state = test_app_state();
    let user = state.users.get_by_id("2").unwrap().to_public();
    let json = serde_json::to_value(LoginResponse { message: "Login successful", user }).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "message": "Login successful",
            "user": {"id": "2", "username": "shohid", "role": "user"}
        })
    );
}

use crate::helpers::{
    TestApp, UNAVAILABLE_DETAIL, USER_EMAIL, USER_PASSWORD, UnavailableUserStore,
};

#[tokio::test]
async fn should_return_200_and_identity_for_valid_credentials() {
    let app = TestApp::new().await;

    let response = app.login(USER_EMAIL, USER_PASSWORD).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["id"], app.user_id.to_string());
    assert_eq!(body["email"], USER_EMAIL);
    assert_eq!(body["name"], "User");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn should_return_401_for_wrong_password() {
    let app = TestApp::new().await;

    let response = app.login(USER_EMAIL, "wrong-password").await;

    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid credentials.");
}

#[tokio::test]
async fn should_not_distinguish_unknown_email_from_wrong_password() {
    let app = TestApp::new().await;

    let unknown = app.login("x@example.com", "whatever-password").await;
    let wrong = app.login(USER_EMAIL, "whatever-password").await;

    assert_eq!(unknown.status(), wrong.status());
    assert_eq!(
        unknown.json::<serde_json::Value>().await.unwrap(),
        wrong.json::<serde_json::Value>().await.unwrap()
    );
}

#[tokio::test]
async fn should_return_401_for_malformed_input() {
    let app = TestApp::new().await;

    let test_cases = [
        vec![("email", "not-an-email"), ("password", USER_PASSWORD)],
        vec![("email", USER_EMAIL), ("password", "12345")],
        vec![("email", USER_EMAIL)],
        vec![],
    ];

    for body in test_cases {
        let response = app.post_form("/login", &body).await;
        assert_eq!(response.status().as_u16(), 401, "Failed for input: {body:?}");
    }
}

#[tokio::test]
async fn should_return_500_without_detail_when_the_store_is_down() {
    let app = TestApp::with_user_store(UnavailableUserStore).await;

    let response = app.login(USER_EMAIL, USER_PASSWORD).await;

    assert_eq!(response.status().as_u16(), 500);
    let body = response.text().await.unwrap();
    assert!(!body.contains(UNAVAILABLE_DETAIL), "leaked: {body}");
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "message": "Something went wrong." })
    );
}

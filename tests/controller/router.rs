//! Tests driving the complete application, session cookie included.

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use medlog::{
    model::{account::SessionInfoDto, api::ErrorDto},
    server::{
        data::account::credential::CredentialRepository, model::app::AppState, router,
    },
};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use super::*;

fn app(test: &TestContext) -> Router {
    let session = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    router::app(test.to_app_state::<AppState>(), session)
}

fn json_request(method: Method, uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    request.body(Body::from(body.to_string())).unwrap()
}

fn session_cookie(resp: &Response) -> String {
    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set the session cookie")
        .to_str()
        .unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}

/// Sign up through the API and return the session cookie
async fn sign_up(app: &Router, username: &str) -> String {
    let body = format!(
        r#"{{"name":"Smith household","username":"{}","password":"secret1"}}"#,
        username
    );
    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/accounts", None, &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    session_cookie(&resp)
}

/// Expect the session created by sign-up to be recognized on the next request
#[tokio::test]
async fn sign_up_then_get_session() -> Result<(), TestError> {
    let test = test_setup_with_medlog_tables!()?;
    let app = app(&test);

    let cookie = sign_up(&app, "Alice").await;

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::GET,
            "/api/accounts/session",
            Some(&cookie),
            "",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: SessionInfoDto = body_json(resp).await;
    assert_eq!(body.account.unwrap().name, "Smith household");
    assert_eq!(body.username.as_deref(), Some("Alice"));

    Ok(())
}

/// Expect a session whose credential was deleted to be rejected as not recognized
#[tokio::test]
async fn stale_session_is_not_recognized() -> Result<(), TestError> {
    let test = test_setup_with_medlog_tables!()?;
    let app = app(&test);

    let cookie = sign_up(&app, "Alice").await;
    let credential_repo = CredentialRepository::new(&test.db);
    let credential = credential_repo.find_by_username("alice").await?.unwrap();
    credential_repo.delete(credential.id).await?;

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::GET,
            "/api/accounts/session",
            Some(&cookie),
            "",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Session was not recognized.");

    Ok(())
}

/// Expect an unknown id to be reported before a body which isn't valid JSON
#[tokio::test]
async fn unknown_id_reported_before_malformed_body() -> Result<(), TestError> {
    let test = test_setup_with_medlog_tables!()?;
    let app = app(&test);

    let cookie = sign_up(&app, "Alice").await;

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            "/api/medications/999",
            Some(&cookie),
            "{not json",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a body which isn't valid JSON to be a 400 once the session guard passes
#[tokio::test]
async fn malformed_body_is_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_medlog_tables!()?;
    let app = app(&test);

    let cookie = sign_up(&app, "Alice").await;

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/medications",
            Some(&cookie),
            "{not json",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect mutations without a session cookie to be rejected
#[tokio::test]
async fn anonymous_mutation_is_unauthorized() -> Result<(), TestError> {
    let test = test_setup_with_medlog_tables!()?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/insurance-cards",
            None,
            r#"{"subscriber_name":"Alice","purpose":"Dental"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

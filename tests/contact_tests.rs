
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn valid_submission_is_stored_and_returns_id() {
    let app = TestApp::spawn().await;

    let response = app.post_contact(&valid_contact()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["id"].is_string());
    assert_eq!(app.memory().count("contactmessage"), 1);
}

#[actix_rt::test]
async fn subject_may_be_omitted() {
    let app = TestApp::spawn().await;

    let response = app
        .post_contact(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hi",
        }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn duplicate_submissions_are_all_recorded() {
    let app = TestApp::spawn().await;

    let first: Value = app.post_contact(&valid_contact()).await.json().await.unwrap();
    let second: Value = app.post_contact(&valid_contact()).await.json().await.unwrap();

    assert_ne!(first["id"], second["id"]);
    assert_eq!(app.memory().count("contactmessage"), 2);
}

#[actix_rt::test]
async fn malformed_email_is_rejected() {
    let app = TestApp::spawn().await;
    let mut body = valid_contact();
    body["email"] = json!("not-an-email");

    let response = app.post_contact(&body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Validation failed");
    assert_eq!(error["details"][0]["field"], "email");
    assert_eq!(app.memory().count("contactmessage"), 0);
}

#[actix_rt::test]
async fn missing_message_is_rejected() {
    let app = TestApp::spawn().await;
    let mut body = valid_contact();
    body.as_object_mut().unwrap().remove("message");

    let response = app.post_contact(&body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(app.memory().count("contactmessage"), 0);
}

#[actix_rt::test]
async fn empty_message_is_rejected() {
    let app = TestApp::spawn().await;
    let mut body = valid_contact();
    body["message"] = json!("");

    let response = app.post_contact(&body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["details"][0]["field"], "message");
}

#[actix_rt::test]
async fn missing_store_still_acknowledges_with_null_id() {
    let app = TestApp::spawn_without_store().await;

    let response = app.post_contact(&valid_contact()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok", "id": null }));
}

#[actix_rt::test]
async fn validation_still_applies_without_store() {
    let app = TestApp::spawn_without_store().await;
    let mut body = valid_contact();
    body["email"] = json!("nope");

    let response = app.post_contact(&body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

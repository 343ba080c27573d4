use fake::{faker::{internet::en::SafeEmail, name::en::Name}, Fake};
use serde_json::{json, Value};

use crate::helpers::TestApp;

#[actix_web::test]
async fn duplicate_email_is_a_conflict(){
    let Some(app) = TestApp::spawn_app().await else { return };
    let email: String = SafeEmail().fake();
    let name: String = Name().fake();

    app.signup(&name, &email, "password123").await;

    let response = app.post("/user/signup", &json!({
        "name": name,
        "email": email,
        "password": "password123"
    })).await;
    assert_eq!(response.status().as_u16(), 409);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "email already exist");
}

#[actix_web::test]
async fn signup_never_returns_the_password(){
    let Some(app) = TestApp::spawn_app().await else { return };

    let body = app.signup("Sam Doe", "sam@example.com", "password123").await;
    assert!(body["data"].get("password").is_none());
    assert!(body["data"]["token"].is_string());
    assert!(body["data"]["refreshToken"].is_string());
}

#[actix_web::test]
async fn login_checks_password_and_reissues_tokens(){
    let Some(app) = TestApp::spawn_app().await else { return };
    let signup = app.signup("Sam Doe", "sam@example.com", "password123").await;

    let wrong = app.post("/user/login", &json!({
        "email": "sam@example.com",
        "password": "not-the-password"
    })).await;
    assert_eq!(wrong.status().as_u16(), 401);

    let unknown = app.post("/user/login", &json!({
        "email": "nobody@example.com",
        "password": "password123"
    })).await;
    assert_eq!(unknown.status().as_u16(), 404);

    let response = app.post("/user/login", &json!({
        "email": "sam@example.com",
        "password": "password123"
    })).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_ne!(body["data"]["token"], signup["data"]["token"]);
    assert_ne!(body["data"]["refreshToken"], signup["data"]["refreshToken"]);
}

#[actix_web::test]
async fn refresh_token_is_single_use(){
    let Some(app) = TestApp::spawn_app().await else { return };
    let signup = app.signup("Sam Doe", "sam@example.com", "password123").await;
    let refresh_token = signup["data"]["refreshToken"].clone();

    let response = app.post("/user/refresh-token", &json!({ "refreshToken": refresh_token })).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert!(body["data"]["token"].is_string());

    let replay = app.post("/user/refresh-token", &json!({ "refreshToken": refresh_token })).await;
    assert_eq!(replay.status().as_u16(), 401);
}

#[actix_web::test]
async fn logout_invalidates_the_refresh_token(){
    let Some(app) = TestApp::spawn_app().await else { return };
    let signup = app.signup("Sam Doe", "sam@example.com", "password123").await;
    let token = signup["data"]["token"].as_str().unwrap().to_string();
    let refresh_token = signup["data"]["refreshToken"].clone();

    let response = app.api_client
        .get(&format!("{}/user/logout", app.get_app_url()))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let replay = app.post("/user/refresh-token", &json!({ "refreshToken": refresh_token })).await;
    assert_eq!(replay.status().as_u16(), 401);
}

#[actix_web::test]
async fn user_listings_omit_tokens_and_password(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };
    app.signup("Sam Doe", "sam@example.com", "password123").await;

    let users: Value = app.get("/user/all").await.json().await.unwrap();
    let users = users["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("token").is_none());
        assert!(user.get("refreshToken").is_none());
        assert!(user.get("password").is_none());
    }

    let user_id = users[0]["userId"].as_str().unwrap();
    let user: Value = app.get(&format!("/user/{}", user_id)).await.json().await.unwrap();
    assert_eq!(user["data"]["userId"], user_id);
    assert!(user["data"].get("token").is_none());
    assert!(user["data"].get("refreshToken").is_none());
}

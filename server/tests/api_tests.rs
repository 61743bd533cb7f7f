mod common;

use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use reqwest::header::SET_COOKIE;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn test_health() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["nickname"], "alice");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_with_nickname() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "password": "secret1",
            "nickname": "Alice L."
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["nickname"], "Alice L.");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;
    app.register("alice", "secret1").await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "password": "another"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already taken"));
}

#[tokio::test]
async fn test_register_invalid_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "a b",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_password_too_long() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "password": "p".repeat(300)
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success_sets_session_cookie() {
    let app = TestApp::spawn().await;
    let user = app.register("alice", "secret1").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "alice",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("Missing Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("jwt="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Expires="));

    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap();
    assert_eq!(token.split('.').count(), 3);
    assert!(cookie.contains(token));
    assert_eq!(body["data"]["user"]["id"], user["id"]);
    assert!(body["data"]["expires_at"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.register("alice", "secret1").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "alice",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "bob",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_current_user_with_bearer_token() {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.register_and_login("alice", "secret1").await;

    // Fresh client: no cookie, header only
    let response = reqwest::Client::new()
        .get(format!("{}/api/users/me", app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], user_id);
    assert_eq!(body["data"]["username"], "alice");
}

#[tokio::test]
async fn test_current_user_with_session_cookie() {
    let app = TestApp::spawn().await;
    app.register_and_login("alice", "secret1").await;

    let response = app
        .get("/api/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_current_user_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::spawn().await;
    let user = app.register("alice", "secret1").await;
    let token = app.mint_token(
        user["id"].as_str().unwrap(),
        "alice",
        Utc::now() - Duration::hours(25),
    );

    let response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let app = TestApp::spawn().await;
    let (_, token) = app.register_and_login("alice", "secret1").await;

    let mut segments: Vec<String> = token.split('.').map(str::to_string).collect();
    let forged = app.mint_token(
        "00000000-0000-0000-0000-000000000001",
        "mallory",
        Utc::now(),
    );
    segments[1] = forged.split('.').nth(1).unwrap().to_string();
    let tampered = segments.join(".");

    let response = reqwest::Client::new()
        .get(format!("{}/api/users/me", app.address))
        .bearer_auth(&tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_token_for_deleted_principal_not_found() {
    let app = TestApp::spawn().await;
    let token = app.mint_token(&uuid::Uuid::new_v4().to_string(), "ghost", Utc::now());

    let response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_logout_clears_session_cookie() {
    let app = TestApp::spawn().await;
    app.register_and_login("alice", "secret1").await;

    let response = app
        .post("/api/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("Missing Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("jwt="));
    assert!(cookie.contains("Max-Age=0"));

    let response = app
        .get("/api/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_get_team() {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.register_and_login("alice", "secret1").await;

    let response = app
        .post_authenticated("/api/teams", &token)
        .json(&json!({ "name": "Compilers" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    let team_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["name"], "Compilers");
    assert_eq!(body["data"]["creator_id"], user_id);
    assert_eq!(body["data"]["member_ids"], json!([user_id]));

    let response = app
        .get_authenticated(&format!("/api/teams/{}", team_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], team_id);
}

#[tokio::test]
async fn test_get_team_invalid_and_unknown_ids() {
    let app = TestApp::spawn().await;
    let (_, token) = app.register_and_login("alice", "secret1").await;

    let response = app
        .get_authenticated("/api/teams/not-a-uuid", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .get_authenticated(&format!("/api/teams/{}", uuid::Uuid::new_v4()), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_team_requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/teams")
        .json(&json!({ "name": "Compilers" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_owned_project() {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.register_and_login("alice", "secret1").await;

    let response = app
        .post_authenticated("/api/projects", &token)
        .json(&json!({
            "name": "caduceus",
            "owner_type": "user",
            "owner_id": user_id
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["owner_type"], "user");
    assert_eq!(body["data"]["owner_id"], user_id);
    assert_eq!(body["data"]["creator_id"], user_id);

    let response = app
        .get_authenticated(
            &format!("/api/projects?owner_type=user&owner_id={}", user_id),
            &token,
        )
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let projects = body["data"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "caduceus");
}

#[tokio::test]
async fn test_project_for_another_user_forbidden() {
    let app = TestApp::spawn().await;
    let bob = app.register("bob", "secret2").await;
    let (_, token) = app.register_and_login("alice", "secret1").await;

    let response = app
        .post_authenticated("/api/projects", &token)
        .json(&json!({
            "name": "caduceus",
            "owner_type": "user",
            "owner_id": bob["id"]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_team_owned_project_requires_membership() {
    let app = TestApp::spawn().await;
    let (_, alice_token) = app.register_and_login("alice", "secret1").await;

    let response = app
        .post_authenticated("/api/teams", &alice_token)
        .json(&json!({ "name": "Compilers" }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let team_id = body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .post_authenticated("/api/projects", &alice_token)
        .json(&json!({
            "name": "frontend",
            "owner_type": "team",
            "owner_id": team_id
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    app.register("bob", "secret2").await;
    let bob_token = app.login("bob", "secret2").await;

    let response = app
        .post_authenticated("/api/projects", &bob_token)
        .json(&json!({
            "name": "backend",
            "owner_type": "team",
            "owner_id": team_id
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .get_authenticated(
            &format!("/api/projects?owner_type=team&owner_id={}", team_id),
            &bob_token,
        )
        .send()
        .await
        .expect("Failed to execute request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_project_invalid_owner_type() {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.register_and_login("alice", "secret1").await;

    let response = app
        .post_authenticated("/api/projects", &token)
        .json(&json!({
            "name": "caduceus",
            "owner_type": "organization",
            "owner_id": user_id
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_teams_of_current_user() {
    let app = TestApp::spawn().await;
    let (alice_id, alice_token) = app.register_and_login("alice", "secret1").await;
    let (_, bob_token) = app.register_and_login("bob", "secret2").await;

    for name in ["Compilers", "Runtime"] {
        let response = app
            .post_authenticated("/api/teams", &alice_token)
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .get_authenticated("/api/users/me/teams", &alice_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    let teams = body["data"].as_array().unwrap();
    assert_eq!(teams.len(), 2);
    assert!(teams
        .iter()
        .all(|team| team["member_ids"].as_array().unwrap().contains(&json!(alice_id))));

    let response = app
        .get_authenticated("/api/users/me/teams", &bob_token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_projects_of_current_user() {
    let app = TestApp::spawn().await;
    let (alice_id, alice_token) = app.register_and_login("alice", "secret1").await;

    let response = app
        .post_authenticated("/api/teams", &alice_token)
        .json(&json!({ "name": "Compilers" }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let team_id = body["data"]["id"].as_str().unwrap().to_string();

    for (name, owner_type, owner_id) in [
        ("scratch", "user", alice_id.as_str()),
        ("frontend", "team", team_id.as_str()),
    ] {
        let response = app
            .post_authenticated("/api/projects", &alice_token)
            .json(&json!({
                "name": name,
                "owner_type": owner_type,
                "owner_id": owner_id
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .get_authenticated("/api/users/me/projects", &alice_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|project| project["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["scratch", "frontend"]);

    let response = app
        .get("/api/users/me/projects")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_project_by_id() {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.register_and_login("alice", "secret1").await;

    let response = app
        .post_authenticated("/api/projects", &token)
        .json(&json!({
            "name": "caduceus",
            "owner_type": "user",
            "owner_id": user_id
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let created: Value = response.json().await.expect("Failed to parse response");
    let project_id = created["data"]["id"].as_str().unwrap();

    let response = app
        .get_authenticated(&format!("/api/projects/{}", project_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"], created["data"]);

    let response = app
        .get_authenticated("/api/projects/not-a-uuid", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .get_authenticated(&format!("/api/projects/{}", uuid::Uuid::new_v4()), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

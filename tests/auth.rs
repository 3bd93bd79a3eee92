mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use chrono::Utc;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tarefa_api::auth::{TokenIssuer, TokenResponse};
use tarefa_api::models::User;

use common::{TestState, TEST_SECRET};

#[actix_rt::test]
async fn test_register_and_login_flow() {
    let state = TestState::new();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/usuario")
        .set_json(json!({"nome": "Ana", "login": "ana1", "senha": "segredo"}))
        .to_request();
    let user: User = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"login": "ana1", "senha": "segredo"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: TokenResponse = test::read_body_json(resp).await;
    assert!(!body.token.is_empty(), "Token should not be empty");

    let claims = TokenIssuer::new(TEST_SECRET)
        .verify(&body.token)
        .expect("token should verify with the server secret");
    assert_eq!(claims.user_id, user.id);

    let expected = Utc::now().timestamp() + 24 * 3600;
    let drift = (claims.exp as i64 - expected).abs();
    assert!(drift <= 5, "exp should be ~24h out, drift was {}s", drift);

    assert!(
        TokenIssuer::new("some-other-secret").verify(&body.token).is_err(),
        "token must not verify under a different secret"
    );
}

#[actix_rt::test]
async fn test_login_failures_are_indistinguishable() {
    let state = TestState::new();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/usuario")
        .set_json(json!({"nome": "Ana", "login": "ana1", "senha": "segredo"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let mut bodies = Vec::new();
    for credentials in [
        json!({"login": "ana1", "senha": "errada"}),
        json!({"login": "ninguem", "senha": "segredo"}),
    ] {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(&credentials)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        bodies.push(test::read_body(resp).await);
    }

    assert_eq!(bodies[0], bodies[1]);
    let body: Value = serde_json::from_slice(&bodies[0]).unwrap();
    assert_eq!(body, json!({"message": "Credenciais inválidas"}));
}

#[actix_rt::test]
async fn test_login_rejects_malformed_body() {
    let state = TestState::new();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    for payload in [json!({"login": "ana1"}), json!({"usuario": "ana1", "senha": "x"})] {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
    }
}

#[actix_rt::test]
async fn test_logout_and_ping() {
    let state = TestState::new();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post().uri("/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Logout efetuado com sucesso");

    let req = test::TestRequest::get().uri("/ping").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"message": "pong"}));
}

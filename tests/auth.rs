use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header};
use test_utils::{prelude::*, JWT_SECRET};

mod register {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn success() {
        let app = get_cached_app().await;
        let username = format!("u_{}", &uuid()[..12]);

        let res = app
            .post("/api/auth/register")
            .json(&json!({
                "username": username,
                "email": format!("{username}@example.com"),
                "password": "secret123",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let data = res.data().await;
        assert_eq!(data["username"], username);
        assert_eq!(data["role"], "admin");
        assert!(data["id"].is_i64());
        assert!(data.get("password").is_none());
        assert!(data.get("deleted_at").is_none());
    }

    #[tokio::test]
    #[parallel]
    async fn email_taken() {
        let app = get_cached_app().await;
        let user = app.register_user().await;

        let res = app
            .post("/api/auth/register")
            .json(&json!({
                "username": format!("u_{}", &uuid()[..12]),
                "email": user.email,
                "password": "secret123",
            }))
            .send()
            .await;

        assert_error!(res, error::EMAIL_TAKEN);
    }

    #[tokio::test]
    #[parallel]
    async fn username_taken() {
        let app = get_cached_app().await;
        let user = app.register_user().await;

        let res = app
            .post("/api/auth/register")
            .json(&json!({
                "username": user.username,
                "email": format!("{}@example.com", uuid()),
                "password": "secret123",
            }))
            .send()
            .await;

        assert_error!(res, error::USERNAME_TAKEN);
    }

    #[tokio::test]
    #[parallel]
    async fn short_password() {
        let app = get_cached_app().await;

        let res = app
            .post("/api/auth/register")
            .json(&json!({
                "username": format!("u_{}", &uuid()[..12]),
                "email": format!("{}@example.com", uuid()),
                "password": "12345",
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }

    #[tokio::test]
    #[parallel]
    async fn invalid_email() {
        let app = get_cached_app().await;

        let res = app
            .post("/api/auth/register")
            .json(&json!({
                "username": format!("u_{}", &uuid()[..12]),
                "email": "not-an-email",
                "password": "secret123",
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }

    #[tokio::test]
    #[parallel]
    async fn missing_fields() {
        let app = get_cached_app().await;

        let res = app
            .post("/api/auth/register")
            .json(&json!({ "username": "nobody" }))
            .send()
            .await;

        assert_error!(res, error::JSON_MISSING_FIELDS);
    }

    #[tokio::test]
    #[parallel]
    async fn syntax_error() {
        let app = get_cached_app().await;

        let res = app
            .post("/api/auth/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body("{\"username\":")
            .send()
            .await;

        assert_error!(res, error::JSON_SYNTAX_ERROR);
    }

    #[tokio::test]
    #[parallel]
    async fn no_content_type() {
        let app = get_cached_app().await;

        let res = app
            .post("/api/auth/register")
            .body("{}")
            .send()
            .await;

        assert_error!(res, error::JSON_CONTENT_TYPE);
    }

    #[tokio::test]
    #[parallel]
    async fn body_too_large() {
        let app = get_cached_app().await;
        let padding = "a".repeat(2 * 1024 * 1024 + 1024);

        let res = app
            .post("/api/auth/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(format!("{{\"username\":\"{padding}\"}}"))
            .send()
            .await;

        assert_error!(res, error::JSON_BODY_INVALID);
    }
}

mod login {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn success() {
        let app = get_cached_app().await;
        let user = app.register_user().await;

        let res = app
            .post("/api/auth/login")
            .json(&json!({
                "email": user.email,
                "password": user.password,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let data = res.data().await;
        assert!(data["token"].is_string());
        assert_eq!(data["user"]["id"], user.id);
        assert!(data["user"].get("password").is_none());
    }

    #[tokio::test]
    #[parallel]
    async fn wrong_password() {
        let app = get_cached_app().await;
        let user = app.register_user().await;

        let res = app
            .post("/api/auth/login")
            .json(&json!({
                "email": user.email,
                "password": "definitely wrong",
            }))
            .send()
            .await;

        assert_error!(res, error::INVALID_CREDENTIALS);
    }

    #[tokio::test]
    #[parallel]
    async fn unknown_email() {
        let app = get_cached_app().await;

        let res = app
            .post("/api/auth/login")
            .json(&json!({
                "email": format!("{}@example.com", uuid()),
                "password": "secret123",
            }))
            .send()
            .await;

        assert_error!(res, error::INVALID_CREDENTIALS);
    }
}

mod me {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn success() {
        let app = get_cached_app().await;
        let user = app.register_user().await;

        let res = app.get("/api/auth/me").user(&user).send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let data = res.data().await;
        assert_eq!(data["id"], user.id);
        assert_eq!(data["email"], user.email);
    }

    #[tokio::test]
    #[parallel]
    async fn missing_token() {
        let app = get_cached_app().await;

        let res = app.get("/api/auth/me").send().await;

        assert_error!(res, error::MISSING_TOKEN);
    }

    #[tokio::test]
    #[parallel]
    async fn not_bearer_token() {
        let app = get_cached_app().await;

        let res = app
            .get("/api/auth/me")
            .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .send()
            .await;

        assert_error!(res, error::INVALID_TOKEN);
    }

    #[tokio::test]
    #[parallel]
    async fn garbage_token() {
        let app = get_cached_app().await;

        let res = app
            .get("/api/auth/me")
            .user(&Token("test.test.test".to_owned()))
            .send()
            .await;

        assert_error!(res, error::INVALID_TOKEN);
    }

    #[tokio::test]
    #[parallel]
    async fn wrong_signature() {
        let app = get_cached_app().await;
        let now = Utc::now().timestamp();

        let token = jsonwebtoken::encode(
            &Header::default(),
            &json!({
                "user_id": 1,
                "username": "mallory",
                "role": "admin",
                "exp": now + 3600,
                "iat": now,
            }),
            &EncodingKey::from_secret(b"not the secret"),
        )
        .unwrap();

        let res = app.get("/api/auth/me").user(&Token(token)).send().await;

        assert_error!(res, error::INVALID_TOKEN);
    }

    #[tokio::test]
    #[parallel]
    async fn expired_token() {
        let app = get_cached_app().await;
        let user = app.register_user().await;
        let now = Utc::now().timestamp();

        let token = jsonwebtoken::encode(
            &Header::default(),
            &json!({
                "user_id": user.id,
                "username": user.username,
                "role": "admin",
                "exp": now - 3600,
                "iat": now - 7200,
            }),
            &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
        )
        .unwrap();

        let res = app.get("/api/auth/me").user(&Token(token)).send().await;

        assert_error!(res, error::INVALID_TOKEN);
    }
}

#[tokio::test]
#[parallel]
async fn health() {
    let app = get_cached_app().await;

    let res = app.get("/health").send().await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.data().await["version"].is_string());
}

#[tokio::test]
#[parallel]
async fn protected_routes_need_a_token() {
    let app = get_cached_app().await;

    for url in [
        "/api/teams",
        "/api/players",
        "/api/matches",
        "/api/reports/matches",
    ] {
        let res = app.get(url).send().await;
        assert_error!(res, error::MISSING_TOKEN);
    }
}

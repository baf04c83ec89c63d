mod db;
mod logging;
pub mod macros;
pub mod prelude;
mod request;
mod response;
mod server;
mod team;
mod user;

use dotenvy::dotenv;
use http::{Method, StatusCode};
use request::RequestBuilder;
use reqwest::Client;
use serde_json::{json, Value};
use server::Server;
use std::sync::Arc;
use team::Team;
use tokio::sync::OnceCell;
use user::User;
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-secret";
pub const PASSWORD: &str = "correct horse battery";

/// Handle to the shared test server plus fixture builders going through the
/// public API.
#[derive(Clone, Debug)]
pub struct App {
    server: Arc<Server>,
    client: Client,
}

impl App {
    pub async fn new() -> Self {
        dotenv().ok();
        logging::init();

        let app = App {
            server: Arc::new(server::spawn().await),
            client: Client::new(),
        };

        app.server.db.clean().await;

        app
    }

    /// Registers a fresh account and logs it in.
    pub async fn register_user(&self) -> User {
        let username = format!("user_{}", &uuid()[..16]);
        let email = format!("{username}@example.com");

        let res = self
            .post("/api/auth/register")
            .json(&json!({
                "username": username,
                "email": email,
                "password": PASSWORD,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let id = res.data().await["id"].as_i64().expect("no user id");
        let access_token = self.login(&email, PASSWORD).await;

        User {
            id,
            username,
            email,
            password: PASSWORD.to_owned(),
            access_token,
        }
    }

    /// Returns the bearer token of a successful login.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let res = self
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        res.data().await["token"]
            .as_str()
            .expect("no token")
            .to_owned()
    }

    /// Creates a team in a city no other test uses.
    pub async fn create_team(&self, owner: &User) -> Team {
        let name = format!("Team {}", &uuid()[..8]);
        let city = format!("City {}", uuid());

        let res = self
            .post("/api/teams")
            .user(owner)
            .json(&json!({
                "name": name,
                "founded_year": 1902,
                "address": "1 Stadium Road",
                "city": city,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let id = res.data().await["id"].as_i64().expect("no team id");

        Team::new(id, name, city, owner.clone(), self.clone())
    }

    /// Schedules `home` against `away` on 2025-03-01 at 19:30.
    pub async fn create_match(&self, user: &User, home: &Team, away: &Team) -> i64 {
        let res = self
            .post("/api/matches")
            .user(user)
            .json(&json!({
                "home_team_id": home.id,
                "away_team_id": away.id,
                "match_date": "2025-03-01",
                "match_time": "19:30",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        res.data().await["id"].as_i64().expect("no match id")
    }

    /// Submits a result, `goals` being `(player_id, minute)` pairs.
    pub async fn submit_result(
        &self,
        user: &User,
        match_id: i64,
        home_score: i32,
        away_score: i32,
        goals: &[(i64, i32)],
    ) -> Value {
        let goals: Vec<Value> = goals
            .iter()
            .map(|(player_id, minute)| json!({ "player_id": player_id, "minute": minute }))
            .collect();

        let res = self
            .post(&format!("/api/matches/{match_id}/result"))
            .user(user)
            .json(&json!({
                "home_score": home_score,
                "away_score": away_score,
                "goals": goals,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        res.data().await
    }

    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let url = format!("http://{}{url}", self.server.addr);
        RequestBuilder::new(self.client.request(method, url))
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }
}

/// One server and database per test binary.
pub async fn get_cached_app() -> &'static App {
    static APP: OnceCell<App> = OnceCell::const_new();
    APP.get_or_init(App::new).await
}

pub fn uuid() -> String {
    Uuid::new_v4().simple().to_string()
}

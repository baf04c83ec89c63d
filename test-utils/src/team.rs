use crate::{prelude::*, user::User};

/// A team created through the API, plus helpers to fill it.
#[derive(Clone, Debug)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub city: String,
    owner: User,
    app: App,
}

impl Team {
    pub(crate) fn new(id: i64, name: String, city: String, owner: User, app: App) -> Self {
        Team {
            id,
            name,
            city,
            owner,
            app,
        }
    }

    /// Adds a forward wearing `jersey_number`, returns the player id.
    pub async fn add_player(&self, jersey_number: i32) -> i64 {
        let res = self
            .app
            .post("/api/players")
            .user(&self.owner)
            .json(&json!({
                "team_id": self.id,
                "name": format!("Player {jersey_number}"),
                "height": 180.0,
                "weight": 75.5,
                "position": "forward",
                "jersey_number": jersey_number,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        res.data().await["id"].as_i64().expect("no player id")
    }
}

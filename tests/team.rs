use test_utils::prelude::*;

fn team_body(city: &str) -> Value {
    json!({
        "name": "Ferencvárosi TC",
        "logo": "https://example.com/ftc.png",
        "founded_year": 1899,
        "address": "Üllői út 129",
        "city": city,
    })
}

mod create {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn success() {
        let app = get_cached_app().await;
        let user = app.register_user().await;
        let city = format!("Budapest {}", uuid());

        let res = app
            .post("/api/teams")
            .user(&user)
            .json(&team_body(&city))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let data = res.data().await;
        assert!(data["id"].is_i64());
        assert_eq!(data["name"], "Ferencvárosi TC");
        assert_eq!(data["city"], city);
        assert_eq!(data["founded_year"], 1899);
        assert!(data["created_at"].is_string());
        assert!(data.get("deleted_at").is_none());
    }

    #[tokio::test]
    #[parallel]
    async fn without_logo() {
        let app = get_cached_app().await;
        let user = app.register_user().await;

        let res = app
            .post("/api/teams")
            .user(&user)
            .json(&json!({
                "name": "No Logo FC",
                "founded_year": 1950,
                "address": "Somewhere 1",
                "city": format!("City {}", uuid()),
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.data().await["logo"], Value::Null);
    }

    #[tokio::test]
    #[parallel]
    async fn founded_year_out_of_range() {
        let app = get_cached_app().await;
        let user = app.register_user().await;

        let mut body = team_body("Nowhere");
        body["founded_year"] = json!(1700);

        let res = app.post("/api/teams").user(&user).json(&body).send().await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }

    #[tokio::test]
    #[parallel]
    async fn name_too_short() {
        let app = get_cached_app().await;
        let user = app.register_user().await;

        let mut body = team_body("Nowhere");
        body["name"] = json!("X");

        let res = app.post("/api/teams").user(&user).json(&body).send().await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }
}

mod get {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn with_players() {
        let app = get_cached_app().await;
        let user = app.register_user().await;
        let team = app.create_team(&user).await;

        let second = team.add_player(9).await;
        let first = team.add_player(1).await;

        let res = app
            .get(&format!("/api/teams/{}", team.id))
            .user(&user)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let data = res.data().await;
        assert_eq!(data["id"], team.id);
        assert_eq!(data["name"], team.name);
        assert_eq!(data["players"][0]["id"], first);
        assert_eq!(data["players"][1]["id"], second);
    }

    #[tokio::test]
    #[parallel]
    async fn not_found() {
        let app = get_cached_app().await;
        let user = app.register_user().await;

        let res = app
            .get("/api/teams/2147483647")
            .user(&user)
            .send()
            .await;

        assert_error!(res, error::TEAM_NOT_FOUND);
    }

    #[tokio::test]
    #[parallel]
    async fn invalid_id() {
        let app = get_cached_app().await;
        let user = app.register_user().await;

        let res = app.get("/api/teams/abc").user(&user).send().await;

        assert_error!(res, error::INVALID_PATH);
    }
}

mod list {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn filter_by_city() {
        let app = get_cached_app().await;
        let user = app.register_user().await;
        let team = app.create_team(&user).await;
        app.create_team(&user).await;

        // case-insensitive substring of the unique city
        let needle = team.city.to_uppercase()[5..].to_owned();

        let res = app
            .get("/api/teams")
            .user(&user)
            .query(&[("city", needle)])
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body["success"], true);
        assert_eq!(body["total"], 1);
        assert_eq!(body["data"][0]["id"], team.id);
    }

    #[tokio::test]
    #[parallel]
    async fn city_wildcards_are_literal() {
        let app = get_cached_app().await;
        let user = app.register_user().await;
        let suffix = uuid();

        let mut ids = Vec::new();
        for city in [format!("Tata_{suffix}"), format!("TataX{suffix}")] {
            let res = app
                .post("/api/teams")
                .user(&user)
                .json(&team_body(&city))
                .send()
                .await;
            assert_eq!(res.status(), StatusCode::CREATED);
            ids.push(res.data().await["id"].clone());
        }

        let res = app
            .get("/api/teams")
            .user(&user)
            .query(&[("city", format!("_{suffix}"))])
            .send()
            .await;

        let body: Value = res.json().await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["data"][0]["id"], ids[0]);

        let res = app
            .get("/api/teams")
            .user(&user)
            .query(&[("city", format!("%{suffix}"))])
            .send()
            .await;

        let body: Value = res.json().await;
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    #[parallel]
    async fn total_matches_data() {
        let app = get_cached_app().await;
        let user = app.register_user().await;
        app.create_team(&user).await;

        let res = app.get("/api/teams").user(&user).send().await;
        let body: Value = res.json().await;

        let total = body["total"].as_u64().unwrap();
        assert!(total >= 1);
        assert_eq!(body["data"].as_array().unwrap().len() as u64, total);
    }
}

mod update {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn success() {
        let app = get_cached_app().await;
        let user = app.register_user().await;
        let team = app.create_team(&user).await;
        let city = format!("Debrecen {}", uuid());

        let res = app
            .put(&format!("/api/teams/{}", team.id))
            .user(&user)
            .json(&team_body(&city))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let data = res.data().await;
        assert_eq!(data["id"], team.id);
        assert_eq!(data["city"], city);
        assert_eq!(data["address"], "Üllői út 129");
    }

    #[tokio::test]
    #[parallel]
    async fn not_found() {
        let app = get_cached_app().await;
        let user = app.register_user().await;

        let res = app
            .put("/api/teams/2147483647")
            .user(&user)
            .json(&team_body("Nowhere"))
            .send()
            .await;

        assert_error!(res, error::TEAM_NOT_FOUND);
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn soft_deletes() {
        let app = get_cached_app().await;
        let user = app.register_user().await;
        let team = app.create_team(&user).await;
        let player = team.add_player(7).await;

        let res = app
            .delete(&format!("/api/teams/{}", team.id))
            .user(&user)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let res = app
            .get(&format!("/api/teams/{}", team.id))
            .user(&user)
            .send()
            .await;
        assert_error!(res, error::TEAM_NOT_FOUND);

        let res = app
            .get("/api/teams")
            .user(&user)
            .query(&[("city", &team.city)])
            .send()
            .await;
        let body: Value = res.json().await;
        assert_eq!(body["total"], 0);

        // the player survives, without its team
        let res = app
            .get(&format!("/api/players/{player}"))
            .user(&user)
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.data().await["team"], Value::Null);
    }

    #[tokio::test]
    #[parallel]
    async fn twice() {
        let app = get_cached_app().await;
        let user = app.register_user().await;
        let team = app.create_team(&user).await;

        let url = format!("/api/teams/{}", team.id);

        let res = app.delete(&url).user(&user).send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = app.delete(&url).user(&user).send().await;
        assert_error!(res, error::TEAM_NOT_FOUND);
    }
}

mod players {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn only_live_players() {
        let app = get_cached_app().await;
        let user = app.register_user().await;
        let team = app.create_team(&user).await;

        let kept = team.add_player(10).await;
        let removed = team.add_player(11).await;

        let res = app
            .delete(&format!("/api/players/{removed}"))
            .user(&user)
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = app
            .get(&format!("/api/teams/{}/players", team.id))
            .user(&user)
            .send()
            .await;

        let body: Value = res.json().await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["data"][0]["id"], kept);
    }

    #[tokio::test]
    #[parallel]
    async fn team_not_found() {
        let app = get_cached_app().await;
        let user = app.register_user().await;

        let res = app
            .get("/api/teams/2147483647/players")
            .user(&user)
            .send()
            .await;

        assert_error!(res, error::TEAM_NOT_FOUND);
    }
}

use test_utils::prelude::*;

struct Fixture {
    user: User,
    home: Team,
    away: Team,
    game: i64,
}

async fn fixture(app: &App) -> Fixture {
    let user = app.register_user().await;
    let home = app.create_team(&user).await;
    let away = app.create_team(&user).await;
    let game = app.create_match(&user, &home, &away).await;

    Fixture {
        user,
        home,
        away,
        game,
    }
}

fn goal(player_id: i64, minute: i32) -> Value {
    json!({ "player_id": player_id, "minute": minute })
}

mod submit {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn success() {
        let app = get_cached_app().await;
        let f = fixture(app).await;
        let striker = f.home.add_player(9).await;
        let winger = f.home.add_player(11).await;
        let visitor = f.away.add_player(10).await;

        let res = app
            .post(&format!("/api/matches/{}/result", f.game))
            .user(&f.user)
            .json(&json!({
                "home_score": 2,
                "away_score": 1,
                "goals": [goal(winger, 78), goal(striker, 12), goal(visitor, 45)],
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let data = res.data().await;
        assert_eq!(data["match_id"], f.game);
        assert_eq!(data["home_score"], 2);
        assert_eq!(data["away_score"], 1);

        // ordered by minute
        let goals = data["goals"].as_array().unwrap();
        assert_eq!(goals.len(), 3);
        assert_eq!(goals[0]["player_id"], striker);
        assert_eq!(goals[1]["player_id"], visitor);
        assert_eq!(goals[2]["player_id"], winger);
        assert_eq!(goals[2]["minute"], 78);

        let res = app
            .get(&format!("/api/matches/{}", f.game))
            .user(&f.user)
            .send()
            .await;
        assert_eq!(res.data().await["status"], "completed");
    }

    #[tokio::test]
    #[parallel]
    async fn goalless_draw() {
        let app = get_cached_app().await;
        let f = fixture(app).await;

        let res = app
            .post(&format!("/api/matches/{}/result", f.game))
            .user(&f.user)
            .json(&json!({ "home_score": 0, "away_score": 0 }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.data().await["goals"], json!([]));
    }

    #[tokio::test]
    #[parallel]
    async fn resubmission_replaces_goals() {
        let app = get_cached_app().await;
        let f = fixture(app).await;
        let home_player = f.home.add_player(9).await;
        let away_player = f.away.add_player(9).await;

        app.submit_result(&f.user, f.game, 1, 0, &[(home_player, 10)])
            .await;
        let data = app
            .submit_result(&f.user, f.game, 0, 2, &[(away_player, 60), (away_player, 70)])
            .await;

        assert_eq!(data["home_score"], 0);
        assert_eq!(data["away_score"], 2);

        let res = app
            .get(&format!("/api/matches/{}/result", f.game))
            .user(&f.user)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let data = res.data().await;
        let goals = data["goals"].as_array().unwrap();
        assert_eq!(goals.len(), 2);
        assert!(goals.iter().all(|goal| goal["player_id"] == away_player));
    }

    #[tokio::test]
    #[parallel]
    async fn score_mismatch() {
        let app = get_cached_app().await;
        let f = fixture(app).await;
        let home_player = f.home.add_player(9).await;

        let res = app
            .post(&format!("/api/matches/{}/result", f.game))
            .user(&f.user)
            .json(&json!({
                "home_score": 0,
                "away_score": 1,
                "goals": [goal(home_player, 5)],
            }))
            .send()
            .await;

        assert_error!(res, error::SCORE_MISMATCH);

        // nothing was written
        let res = app
            .get(&format!("/api/matches/{}/result", f.game))
            .user(&f.user)
            .send()
            .await;
        assert_error!(res, error::RESULT_NOT_FOUND);

        let res = app
            .get(&format!("/api/matches/{}", f.game))
            .user(&f.user)
            .send()
            .await;
        assert_eq!(res.data().await["status"], "scheduled");
    }

    #[tokio::test]
    #[parallel]
    async fn player_not_in_match() {
        let app = get_cached_app().await;
        let f = fixture(app).await;
        let outsider = app.create_team(&f.user).await.add_player(9).await;

        let res = app
            .post(&format!("/api/matches/{}/result", f.game))
            .user(&f.user)
            .json(&json!({
                "home_score": 1,
                "away_score": 0,
                "goals": [goal(outsider, 5)],
            }))
            .send()
            .await;

        assert_error!(res, error::PLAYER_NOT_IN_MATCH);
    }

    #[tokio::test]
    #[parallel]
    async fn rejected_resubmission_keeps_result() {
        let app = get_cached_app().await;
        let f = fixture(app).await;
        let home_player = f.home.add_player(9).await;
        let away_player = f.away.add_player(9).await;
        let outsider = app.create_team(&f.user).await.add_player(7).await;

        app.submit_result(&f.user, f.game, 1, 0, &[(home_player, 10)])
            .await;

        let url = format!("/api/matches/{}/result", f.game);

        let res = app
            .post(&url)
            .user(&f.user)
            .json(&json!({
                "home_score": 0,
                "away_score": 2,
                "goals": [goal(away_player, 60)],
            }))
            .send()
            .await;
        assert_error!(res, error::SCORE_MISMATCH);

        let res = app
            .post(&url)
            .user(&f.user)
            .json(&json!({
                "home_score": 2,
                "away_score": 0,
                "goals": [goal(home_player, 30), goal(outsider, 40)],
            }))
            .send()
            .await;
        assert_error!(res, error::PLAYER_NOT_IN_MATCH);

        let res = app.get(&url).user(&f.user).send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let data = res.data().await;
        assert_eq!(data["home_score"], 1);
        assert_eq!(data["away_score"], 0);

        let goals = data["goals"].as_array().unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0]["player_id"], home_player);
        assert_eq!(goals[0]["minute"], 10);
    }

    #[tokio::test]
    #[parallel]
    async fn deleted_player() {
        let app = get_cached_app().await;
        let f = fixture(app).await;
        let player = f.home.add_player(9).await;

        app.delete(&format!("/api/players/{player}"))
            .user(&f.user)
            .send()
            .await;

        let res = app
            .post(&format!("/api/matches/{}/result", f.game))
            .user(&f.user)
            .json(&json!({
                "home_score": 1,
                "away_score": 0,
                "goals": [goal(player, 5)],
            }))
            .send()
            .await;

        assert_error!(res, error::PLAYER_NOT_FOUND);
    }

    #[tokio::test]
    #[parallel]
    async fn match_not_found() {
        let app = get_cached_app().await;
        let user = app.register_user().await;

        let res = app
            .post("/api/matches/2147483647/result")
            .user(&user)
            .json(&json!({ "home_score": 0, "away_score": 0 }))
            .send()
            .await;

        assert_error!(res, error::MATCH_NOT_FOUND);
    }

    #[tokio::test]
    #[parallel]
    async fn invalid_values() {
        let app = get_cached_app().await;
        let f = fixture(app).await;
        let player = f.home.add_player(9).await;

        for body in [
            json!({ "home_score": -1, "away_score": 0 }),
            json!({ "home_score": 1, "away_score": 0, "goals": [goal(player, 0)] }),
            json!({ "home_score": 1, "away_score": 0, "goals": [goal(player, 121)] }),
        ] {
            let res = app
                .post(&format!("/api/matches/{}/result", f.game))
                .user(&f.user)
                .json(&body)
                .send()
                .await;

            assert_error!(res, error::JSON_VALIDATE_INVALID);
        }
    }
}

mod get {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn not_submitted() {
        let app = get_cached_app().await;
        let f = fixture(app).await;

        let res = app
            .get(&format!("/api/matches/{}/result", f.game))
            .user(&f.user)
            .send()
            .await;

        assert_error!(res, error::RESULT_NOT_FOUND);
    }

    #[tokio::test]
    #[parallel]
    async fn keeps_deleted_scorer() {
        let app = get_cached_app().await;
        let f = fixture(app).await;
        let player = f.away.add_player(7).await;

        app.submit_result(&f.user, f.game, 0, 1, &[(player, 90)])
            .await;

        app.delete(&format!("/api/players/{player}"))
            .user(&f.user)
            .send()
            .await;

        let res = app
            .get(&format!("/api/matches/{}/result", f.game))
            .user(&f.user)
            .send()
            .await;

        let data = res.data().await;
        assert_eq!(data["goals"][0]["player_id"], player);
        assert_eq!(data["goals"][0]["player"]["id"], player);
    }
}

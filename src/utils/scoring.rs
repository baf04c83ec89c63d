use entity::matches;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalStatus {
    HomeWin,
    AwayWin,
    Draw,
}

impl FinalStatus {
    pub fn from_scores(home_score: i32, away_score: i32) -> Self {
        match home_score.cmp(&away_score) {
            std::cmp::Ordering::Greater => Self::HomeWin,
            std::cmp::Ordering::Less => Self::AwayWin,
            std::cmp::Ordering::Equal => Self::Draw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Which side of `game` a team plays on, `None` when it is not playing.
    pub fn of(game: &matches::Model, team_id: i32) -> Option<Self> {
        if team_id == game.home_team_id {
            Some(Self::Home)
        } else if team_id == game.away_team_id {
            Some(Self::Away)
        } else {
            None
        }
    }
}

/// Goals counted per side of a match.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub home: i32,
    pub away: i32,
}

impl Tally {
    pub fn count(&mut self, side: Side) {
        match side {
            Side::Home => self.home += 1,
            Side::Away => self.away += 1,
        }
    }

    pub fn reconciles(&self, home_score: i32, away_score: i32) -> bool {
        self.home == home_score && self.away == away_score
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopScorer {
    pub player_id: i32,
    pub player_name: String,
    pub goals: i64,
}

/// Players with the highest goal count, ties included, ordered by player id.
///
/// Takes one `(player_id, player_name)` pair per goal.
pub fn top_scorers<'a, I>(goals: I) -> Vec<TopScorer>
where
    I: IntoIterator<Item = (i32, &'a str)>,
{
    let mut scorers: BTreeMap<i32, TopScorer> = BTreeMap::new();

    for (player_id, player_name) in goals {
        scorers
            .entry(player_id)
            .or_insert_with(|| TopScorer {
                player_id,
                player_name: player_name.to_owned(),
                goals: 0,
            })
            .goals += 1;
    }

    let Some(max) = scorers.values().map(|scorer| scorer.goals).max() else {
        return Vec::new();
    };

    scorers
        .into_values()
        .filter(|scorer| scorer.goals == max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn game(home_team_id: i32, away_team_id: i32) -> matches::Model {
        matches::Model {
            id: 10,
            home_team_id,
            away_team_id,
            match_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            match_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            status: matches::MatchStatus::Scheduled,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn final_status() {
        assert_eq!(FinalStatus::from_scores(2, 1), FinalStatus::HomeWin);
        assert_eq!(FinalStatus::from_scores(0, 3), FinalStatus::AwayWin);
        assert_eq!(FinalStatus::from_scores(1, 1), FinalStatus::Draw);
        assert_eq!(FinalStatus::from_scores(0, 0), FinalStatus::Draw);
        assert_eq!(
            serde_json::to_value(FinalStatus::HomeWin).unwrap(),
            "home_win"
        );
    }

    #[test]
    fn side_of_team() {
        let game = game(1, 2);

        assert_eq!(Side::of(&game, 1), Some(Side::Home));
        assert_eq!(Side::of(&game, 2), Some(Side::Away));
        assert_eq!(Side::of(&game, 3), None);
    }

    #[test]
    fn tally_reconciles_with_scores() {
        let mut tally = Tally::default();
        tally.count(Side::Home);
        tally.count(Side::Home);
        tally.count(Side::Away);

        assert!(tally.reconciles(2, 1));
        assert!(!tally.reconciles(1, 2));
        assert!(!tally.reconciles(3, 1));
        assert!(Tally::default().reconciles(0, 0));
    }

    #[test]
    fn single_top_scorer() {
        let scorers = top_scorers([(5, "Ada"), (8, "Bo"), (5, "Ada")]);

        assert_eq!(
            scorers,
            vec![TopScorer {
                player_id: 5,
                player_name: "Ada".to_owned(),
                goals: 2,
            }]
        );
    }

    #[test]
    fn ties_are_all_included_in_id_order() {
        let scorers = top_scorers([(9, "Cy"), (3, "Di"), (9, "Cy"), (3, "Di"), (4, "Ed")]);
        let ids: Vec<_> = scorers.iter().map(|s| s.player_id).collect();

        assert_eq!(ids, vec![3, 9]);
        assert!(scorers.iter().all(|s| s.goals == 2));
    }

    #[test]
    fn no_goals_no_scorers() {
        assert!(top_scorers(std::iter::empty()).is_empty());
    }
}

mod utils;

pub use sea_orm_migration::prelude::*;

mod m20250210_091500_create_users_table;
mod m20250210_092000_create_teams_table;
mod m20250210_092500_create_players_table;
mod m20250211_101000_create_matches_table;
mod m20250211_101500_create_match_results_table;
mod m20250211_102000_create_goals_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250210_091500_create_users_table::Migration),
            Box::new(m20250210_092000_create_teams_table::Migration),
            Box::new(m20250210_092500_create_players_table::Migration),
            Box::new(m20250211_101000_create_matches_table::Migration),
            Box::new(m20250211_101500_create_match_results_table::Migration),
            Box::new(m20250211_102000_create_goals_table::Migration),
        ]
    }
}

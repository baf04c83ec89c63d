use crate::{
    extractors::Query,
    response::Envelope,
    Result, StateTrait,
};
use axum::extract::State;
use entity::{teams, SoftDelete};
use sea_orm::{
    sea_query::{extension::postgres::PgExpr, Expr},
    PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Filter {
    city: Option<String>,
}

pub async fn list_teams<S: StateTrait>(
    State(state): State<S>,
    Query(filter): Query<Filter>,
) -> Result<Envelope<Vec<teams::Model>>> {
    let mut query = teams::Entity::find_active();

    if let Some(city) = filter.city.filter(|city| !city.is_empty()) {
        query = query.filter(
            Expr::col((teams::Entity, teams::Column::City))
                .ilike(format!("%{}%", escape_like(&city))),
        );
    }

    let total = query.clone().count(state.db()).await?;
    let teams = query
        .order_by_asc(teams::Column::Id)
        .all(state.db())
        .await?;

    Ok(Envelope::ok("teams retrieved successfully", teams).with_total(total))
}

/// Escapes `LIKE` wildcards so the filter matches the text literally.
/// Postgres uses `\` as the default escape character.
fn escape_like(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escapes_wildcards() {
        assert_eq!(escape_like("Buda_pest"), r"Buda\_pest");
        assert_eq!(escape_like("100%"), r"100\%");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
        assert_eq!(escape_like("Győr"), "Győr");
    }
}

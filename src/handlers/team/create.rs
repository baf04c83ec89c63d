use crate::{extractors::ValidatedJson, response::Envelope, Result, StateTrait};
use axum::extract::State;
use entity::teams;
use sea_orm::{ActiveModelTrait, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    pub logo: Option<String>,
    #[validate(range(min = 1800, max = 2100))]
    pub founded_year: i32,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub city: String,
}

impl Request {
    /// Copies every field onto `model`, teams are always replaced as a whole.
    pub fn apply(self, model: &mut teams::ActiveModel) {
        model.name = Set(self.name);
        model.logo = Set(self.logo.filter(|logo| !logo.is_empty()));
        model.founded_year = Set(self.founded_year);
        model.address = Set(self.address);
        model.city = Set(self.city);
    }
}

pub async fn create_team<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Envelope<teams::Model>> {
    let mut team = <teams::ActiveModel as Default>::default();
    request.apply(&mut team);

    let team = team.insert(state.db()).await?;

    Ok(Envelope::created("team created successfully", team))
}

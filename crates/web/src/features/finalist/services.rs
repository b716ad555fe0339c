use sqlx::PgPool;
use storage::{
    error::Result,
    models::{Individual, Region},
    repository::finalist::FinalistRepository,
};

/// Individuals then regions, queried in sequence. The first failure aborts.
pub async fn get_finalists(pool: &PgPool) -> Result<(Vec<Individual>, Vec<Region>)> {
    let repo = FinalistRepository::new(pool);

    let individuals = repo.list_individuals().await?;
    let regions = repo.list_regions().await?;

    Ok((individuals, regions))
}

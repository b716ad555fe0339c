use sqlx::PgPool;

use crate::error::Result;
use crate::models::{Individual, Region};

const LIST_INDIVIDUALS: &str = r#"
    SELECT id::int8 AS id, shop_id::int8 AS shop_id, shop_name, region,
           total_points::int8 AS total_points, previous_points::int8 AS previous_points,
           current_position::int8 AS current_position,
           previous_position::int8 AS previous_position, processed_dttm
    FROM personal
    ORDER BY id ASC
"#;

const LIST_REGIONS: &str = r#"
    SELECT id::int8 AS id, region,
           total_points::int8 AS total_points, previous_points::int8 AS previous_points,
           current_position::int8 AS current_position,
           previous_position::int8 AS previous_position, processed_dttm
    FROM region
    ORDER BY id ASC
"#;

pub struct FinalistRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FinalistRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All individual finalists, ascending by id
    pub async fn list_individuals(&self) -> Result<Vec<Individual>> {
        let individuals = sqlx::query_as::<_, Individual>(LIST_INDIVIDUALS)
            .fetch_all(self.pool)
            .await?;

        Ok(individuals)
    }

    /// All regions, ascending by id
    pub async fn list_regions(&self) -> Result<Vec<Region>> {
        let regions = sqlx::query_as::<_, Region>(LIST_REGIONS)
            .fetch_all(self.pool)
            .await?;

        Ok(regions)
    }
}

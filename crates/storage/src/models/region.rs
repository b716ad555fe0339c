use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::LastChange;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Region {
    pub id: i64,
    pub region: String,
    pub total_points: i64,
    pub previous_points: i64,
    pub current_position: i64,
    pub previous_position: i64,
    #[serde(rename = "last_change")]
    #[schema(value_type = String)]
    pub processed_dttm: LastChange,
}

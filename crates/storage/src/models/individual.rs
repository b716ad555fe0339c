use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::LastChange;

/// One row of the `personal` table. Points and positions are computed
/// upstream and are only read back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Individual {
    pub id: i64,
    pub shop_id: i64,
    pub shop_name: String,
    pub region: String,
    pub total_points: i64,
    pub previous_points: i64,
    pub current_position: i64,
    pub previous_position: i64,
    #[serde(rename = "last_change")]
    #[schema(value_type = String)]
    pub processed_dttm: LastChange,
}

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Staff;

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffResponse {
    #[serde(rename = "Team")]
    pub team: Vec<Staff>,
}

impl From<Vec<Staff>> for StaffResponse {
    fn from(team: Vec<Staff>) -> Self {
        Self { team }
    }
}

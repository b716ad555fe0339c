use axum::{extract::State, response::Response};
use storage::{Database, dto::staff::StaffResponse};

use crate::error::WebResult;
use crate::response::json_response;

use super::services;

#[utoipa::path(
    get,
    path = "/api/staff/",
    responses(
        (status = 200, description = "Staff directory retrieved successfully", body = StaffResponse),
        (status = 500, description = "Database or serialization failure", body = String, content_type = "text/plain")
    ),
    tag = "staff"
)]
pub async fn list_staff(State(db): State<Database>) -> WebResult<Response> {
    let team = services::list_staff(db.pool()).await?;

    json_response(&StaffResponse::from(team))
}

use std::time::Instant;

use axum::{extract::State, response::Response};
use storage::{Database, dto::finalist::FinalistResponse};

use crate::error::WebResult;
use crate::response::json_response;

use super::services;

#[utoipa::path(
    get,
    path = "/microsite/v1/finalist",
    responses(
        (status = 200, description = "Finalist leaderboard retrieved successfully", body = FinalistResponse),
        (status = 500, description = "Database or serialization failure", body = String, content_type = "text/plain")
    ),
    tag = "finalist"
)]
pub async fn get_finalists(State(db): State<Database>) -> WebResult<Response> {
    let start = Instant::now();

    let (individuals, regions) = services::get_finalists(db.pool()).await?;

    let response = FinalistResponse::new(individuals, regions, start.elapsed());
    tracing::debug!(
        individual = response.header.total_data.individual,
        region = response.header.total_data.region,
        process_time = response.header.process_time,
        "Finalist leaderboard assembled"
    );

    json_response(&response)
}

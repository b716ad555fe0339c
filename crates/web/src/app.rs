use std::time::Duration;

use axum::{Router, http::Method};
use storage::Database;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features::{finalist, staff};

#[derive(OpenApi)]
#[openapi(
    paths(finalist::handlers::get_finalists),
    components(
        schemas(
            storage::dto::finalist::FinalistResponse,
            storage::dto::finalist::Header,
            storage::dto::finalist::TotalData,
            storage::dto::finalist::FinalistData,
            storage::models::Individual,
            storage::models::Region,
        )
    ),
    tags(
        (name = "finalist", description = "Finalist leaderboard for individuals and regions"),
    )
)]
pub struct FinalistApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(staff::handlers::list_staff),
    components(schemas(storage::dto::staff::StaffResponse, storage::models::Staff)),
    tags(
        (name = "staff", description = "Staff directory"),
    )
)]
pub struct StaffApiDoc;

pub fn finalist_app(db: Database) -> Router {
    build(finalist::routes::routes(), FinalistApiDoc::openapi(), db)
}

pub fn staff_app(db: Database) -> Router {
    build(staff::routes::routes(), StaffApiDoc::openapi(), db)
}

fn build(routes: Router<Database>, openapi: utoipa::openapi::OpenApi, db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    routes
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(db)
}

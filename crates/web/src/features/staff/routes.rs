use axum::{Router, routing::get};
use storage::Database;

use super::handlers::list_staff;

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/api/staff/", get(list_staff))
        .route("/api/staff", get(list_staff))
}

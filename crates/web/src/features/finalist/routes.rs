use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_finalists;

pub fn routes() -> Router<Database> {
    Router::new().route("/microsite/v1/finalist", get(get_finalists))
}

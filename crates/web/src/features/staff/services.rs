use sqlx::PgPool;
use storage::{error::Result, models::Staff, repository::staff::StaffRepository};

/// List the staff directory
pub async fn list_staff(pool: &PgPool) -> Result<Vec<Staff>> {
    let repo = StaffRepository::new(pool);
    repo.list().await
}

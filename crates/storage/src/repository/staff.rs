use sqlx::PgPool;

use crate::error::Result;
use crate::models::Staff;

const LIST_STAFF: &str = r#"
    SELECT id::int8 AS id, name, address, status::int8 AS status
    FROM staff
    ORDER BY id DESC
"#;

pub struct StaffRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StaffRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All staff members, newest id first
    pub async fn list(&self) -> Result<Vec<Staff>> {
        let staff = sqlx::query_as::<_, Staff>(LIST_STAFF)
            .fetch_all(self.pool)
            .await?;

        Ok(staff)
    }
}

use sqlx::{Error as SqlxError, Row, SqliteExecutor};
use tracing::{info, instrument};

use crate::database::connection::DbConnection;
use crate::models::resource::{CreateResourceRequest, ResourceId};

impl DbConnection {
    pub async fn add_resource(
        &self,
        request: &CreateResourceRequest,
    ) -> Result<ResourceId, SqlxError> {
        insert_resource(self.pool(), request).await
    }
}

/// No existence check: identical title/href pairs are stored as separate rows.
#[instrument(skip(executor))]
pub async fn insert_resource<'a, E: SqliteExecutor<'a>>(
    executor: E,
    request: &CreateResourceRequest,
) -> Result<ResourceId, SqlxError> {
    let id: ResourceId = sqlx::query(
        "
            INSERT INTO resources (title, href)
            VALUES (?, ?) RETURNING id;
        ",
    )
    .bind(&request.title)
    .bind(&request.href)
    .fetch_one(executor)
    .await?
    .try_get("id")?;
    info!("created resource with id: {}", id);
    Ok(id)
}

use sqlx::{Error as SqlxError, SqliteExecutor};
use tracing::instrument;

use crate::database::connection::DbConnection;
use crate::models::resource::{ListResourcesResponse, Resource};

impl DbConnection {
    pub async fn list_resources(&self) -> Result<ListResourcesResponse, SqlxError> {
        let resource_list = list_resources(self.pool()).await?;
        Ok(ListResourcesResponse { resource_list })
    }
}

#[instrument(skip(executor))]
pub async fn list_resources<'a, E: SqliteExecutor<'a>>(
    executor: E,
) -> Result<Vec<Resource>, SqlxError> {
    let resources: Vec<Resource> = sqlx::query_as(
        "
    SELECT
        id, title, href
    FROM
        resources
    ORDER BY
        id;
    ",
    )
    .fetch_all(executor)
    .await?;
    Ok(resources)
}

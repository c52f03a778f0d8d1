use sqlx::{Error as SqlxError, Sqlite, Transaction};
use tracing::instrument;

use crate::database::connection::DbConnection;

impl DbConnection {
    pub async fn create_all(&self) -> Result<(), SqlxError> {
        let mut transaction = self.pool().begin().await?;
        create_all_tables(&mut transaction).await?;
        transaction.commit().await?;
        Ok(())
    }

    #[cfg(test)]
    pub async fn drop_all(&self) -> Result<(), SqlxError> {
        let mut transaction = self.pool().begin().await?;
        drop_all_tables(&mut transaction).await?;
        transaction.commit().await?;
        Ok(())
    }
}

// AUTOINCREMENT keeps ids from being handed out twice, even after the highest
// row is removed out of band.
#[instrument(skip_all)]
pub async fn create_all_tables(transaction: &mut Transaction<'_, Sqlite>) -> Result<(), SqlxError> {
    sqlx::query(
        "
            CREATE TABLE IF NOT EXISTS resources (
                id      INTEGER PRIMARY KEY AUTOINCREMENT,
                title   TEXT NOT NULL,
                href    TEXT NOT NULL
            );
        ",
    )
    .execute(transaction.as_mut())
    .await?;
    Ok(())
}

#[cfg(test)]
#[instrument(skip_all)]
pub async fn drop_all_tables(transaction: &mut Transaction<'_, Sqlite>) -> Result<(), SqlxError> {
    let statements = ["DROP TABLE IF EXISTS resources;"];
    for statement in &statements {
        sqlx::query(statement).execute(transaction.as_mut()).await?;
    }
    Ok(())
}

use async_trait::async_trait;
use derive_new::new;
use kernel::model::grid::GridBox;
use kernel::repository::grid::GridRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::grid::GridBoxRow, ConnectionPool};

#[derive(new)]
pub struct GridRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl GridRepository for GridRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<GridBox>> {
        sqlx::query_as::<_, GridBoxRow>(
            r#"
                SELECT
                b.id,
                b.number,
                b.reserved,
                u.name AS user_name,
                u.phone AS user_phone
                FROM boxes AS b
                LEFT JOIN users AS u ON b.user_id = u.id
                ORDER BY b.number ASC
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(GridBox::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}

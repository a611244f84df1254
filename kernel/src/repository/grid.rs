use crate::model::grid::GridBox;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait GridRepository: Send + Sync {
    // 全ケースを番号順に、予約者の連絡先付きで取得する
    async fn find_all(&self) -> AppResult<Vec<GridBox>>;
}

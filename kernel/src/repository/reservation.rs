use crate::model::reservation::{event::CreateReservation, ReservationReceipt};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    // 指定ケースをまとめて予約する。一つでも埋まっていれば何も書き込まない
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationReceipt>;
    // 全ケースの予約と全ユーザーを消去する
    async fn reset_all(&self) -> AppResult<()>;
}

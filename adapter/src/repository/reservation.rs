use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::UserId;
use kernel::model::reservation::{event::CreateReservation, ReservationReceipt};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

use crate::database::ConnectionPool;

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationReceipt> {
        let mut tx = self.db.begin().await?;

        // 先に書き込みを行い、ストアの書き込みロックをこのトランザクションで確保する。
        // 以降の空き確認と予約は同じロックの下で行われる
        let user_id: UserId = sqlx::query_scalar(
            r#"
                INSERT INTO users (name, phone)
                VALUES (?, ?)
                RETURNING id
                ;
            "#,
        )
        .bind(&event.name)
        .bind(&event.phone)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        for &number in &event.box_numbers {
            // 空いている場合だけ更新する。更新件数 0 なら予約済みか存在しないケース
            let res = sqlx::query(
                r#"
                    UPDATE boxes
                    SET reserved = 1, user_id = ?
                    WHERE number = ? AND reserved = 0
                    ;
                "#,
            )
            .bind(user_id)
            .bind(number)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if res.rows_affected() < 1 {
                let exists: Option<i64> =
                    sqlx::query_scalar("SELECT number FROM boxes WHERE number = ?")
                        .bind(number)
                        .fetch_optional(&mut *tx)
                        .await
                        .map_err(AppError::SpecificOperationError)?;

                // ユーザーの追加とここまでの更新をすべて取り消す
                tx.rollback().await.map_err(AppError::TransactionError)?;

                return Err(match exists {
                    Some(_) => AppError::BoxAlreadyReserved(number),
                    None => AppError::UnknownBox(number),
                });
            }
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            user_id = %user_id,
            boxes = ?event.box_numbers,
            "reservation committed"
        );

        Ok(ReservationReceipt {
            user_id,
            reserved_count: event.box_numbers.len(),
        })
    }

    async fn reset_all(&self) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        // users を消す前に外部キー参照を外す
        let res = sqlx::query("UPDATE boxes SET reserved = 0, user_id = NULL;")
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No box has been reset".into(),
            ));
        }

        sqlx::query("DELETE FROM users;")
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::warn!("all reservations have been reset");

        Ok(())
    }
}

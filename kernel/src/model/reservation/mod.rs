use crate::model::id::UserId;

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationReceipt {
    pub user_id: UserId,
    pub reserved_count: usize,
}

use garde::Validate;
use kernel::model::reservation::event::CreateReservation;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// 欠けたフィールドは空値として受け取り、検証で 400 にする
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReserveRequest {
    #[serde(default, deserialize_with = "super::null_as_default")]
    #[garde(custom(not_blank))]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    #[garde(custom(not_blank))]
    pub phone: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    #[garde(length(min = 1), inner(range(min = 1, max = 12)), custom(distinct))]
    pub selected_boxes: Vec<i64>,
}

fn not_blank(value: &str, _: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("must not be blank"));
    }
    Ok(())
}

fn distinct(value: &[i64], _: &()) -> garde::Result {
    let mut seen = HashSet::with_capacity(value.len());
    if value.iter().all(|n| seen.insert(*n)) {
        Ok(())
    } else {
        Err(garde::Error::new("box numbers must be distinct"))
    }
}

impl From<ReserveRequest> for CreateReservation {
    fn from(value: ReserveRequest) -> Self {
        let ReserveRequest {
            name,
            phone,
            selected_boxes,
        } = value;
        CreateReservation::new(name.trim().into(), phone.trim().into(), selected_boxes)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReserveResponse {
    pub success: bool,
    pub message: String,
}

impl ReserveResponse {
    pub fn confirmed(count: usize) -> Self {
        Self {
            success: true,
            message: format!("Réservation confirmée pour {count} case(s)"),
        }
    }
}

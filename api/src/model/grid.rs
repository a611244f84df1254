use kernel::model::{grid::GridBox, id::BoxId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct BoxesResponse {
    pub boxes: Vec<BoxResponse>,
}

impl From<Vec<GridBox>> for BoxesResponse {
    fn from(value: Vec<GridBox>) -> Self {
        Self {
            boxes: value.into_iter().map(BoxResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoxResponse {
    pub id: BoxId,
    pub number: i64,
    pub reserved: bool,
    pub user_name: Option<String>,
    pub user_phone: Option<String>,
}

impl From<GridBox> for BoxResponse {
    fn from(value: GridBox) -> Self {
        let GridBox {
            id,
            number,
            reserved,
            holder,
        } = value;
        let (user_name, user_phone) = match holder {
            Some(h) => (Some(h.user_name), Some(h.user_phone)),
            None => (None, None),
        };
        Self {
            id,
            number,
            reserved,
            user_name,
            user_phone,
        }
    }
}

use kernel::model::{
    grid::{BoxHolder, GridBox},
    id::BoxId,
};

// boxes と users を LEFT JOIN した一行。未予約なら user_* は NULL
#[derive(sqlx::FromRow)]
pub struct GridBoxRow {
    pub id: BoxId,
    pub number: i64,
    pub reserved: bool,
    pub user_name: Option<String>,
    pub user_phone: Option<String>,
}

impl From<GridBoxRow> for GridBox {
    fn from(value: GridBoxRow) -> Self {
        let GridBoxRow {
            id,
            number,
            reserved,
            user_name,
            user_phone,
        } = value;
        let holder = match (user_name, user_phone) {
            (Some(user_name), Some(user_phone)) => Some(BoxHolder {
                user_name,
                user_phone,
            }),
            _ => None,
        };
        GridBox {
            id,
            number,
            reserved,
            holder,
        }
    }
}

use crate::model::id::BoxId;

/// Number of boxes seeded by the initial migration.
pub const GRID_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBox {
    pub id: BoxId,
    pub number: i64,
    pub reserved: bool,
    pub holder: Option<BoxHolder>,
}

/// Contact details of the user holding a reserved box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxHolder {
    pub user_name: String,
    pub user_phone: String,
}

pub fn count_reserved(boxes: &[GridBox]) -> usize {
    boxes.iter().filter(|b| b.reserved).count()
}

use derive_new::new;

#[derive(Debug, new)]
pub struct CreateReservation {
    pub name: String,
    pub phone: String,
    // 入力順に処理する。最初に埋まっていたケースが競合として報告される
    pub box_numbers: Vec<i64>,
}

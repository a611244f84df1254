pub mod admin;
pub mod grid;
pub mod id;
pub mod reservation;

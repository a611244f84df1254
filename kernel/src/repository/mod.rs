pub mod grid;
pub mod health;
pub mod reservation;

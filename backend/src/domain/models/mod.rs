pub mod reservation;
pub mod transaction;

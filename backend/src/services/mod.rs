pub mod catalog;
pub mod staff;
pub mod uploads;

pub mod geo;
pub mod staff;

pub mod turf;
pub mod user;

pub mod form;
pub mod models;
pub mod pii;

pub use models::turf::Turf;
pub use models::user::User;
pub use pii::Masked;

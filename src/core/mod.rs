pub mod coerce;
pub mod one_of;
pub mod repr;
pub mod validate;

pub use crate::domain::model::{EnumValue, FromRaw, Model};
pub use crate::utils::error::Result;

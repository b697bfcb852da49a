pub mod model;

pub use model::{EnumValue, FromRaw, Model};

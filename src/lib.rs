pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::coerce::{coerce_list, coerce_object, coerce_one_of_list};
pub use crate::core::one_of::{Candidate, OneOf, OneOfResolver};
pub use crate::core::validate::{match_enum, match_pattern};
pub use crate::domain::model::{EnumValue, FromRaw, Model};
pub use crate::utils::error::{ModelError, Result};

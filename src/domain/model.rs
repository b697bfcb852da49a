use crate::core::repr;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Mapping constructor: builds a typed value out of raw, JSON-shaped data.
///
/// Generated model structs and enums implement this; implementations for
/// the scalar primitives are provided here so list coercion can treat
/// every element type uniformly.
pub trait FromRaw: Sized {
    fn from_raw(raw: &Value) -> Result<Self>;
}

/// Implemented by every generated model struct.
pub trait Model: FromRaw {
    const NAME: &'static str;

    /// Projects the instance back onto raw, JSON-shaped data. Absent
    /// fields must project to null so field presence mirrors the instance.
    fn to_raw(&self) -> Value;

    /// Indented, human-readable rendering of the populated fields.
    /// Debug/logging only, not a serialization format.
    fn representation(&self) -> String {
        repr::render(Self::NAME, &self.to_raw())
    }
}

/// The underlying wire string of a value that may be either a generated
/// enum member or its plain string form.
pub trait EnumValue {
    fn enum_value(&self) -> &str;
}

impl EnumValue for String {
    fn enum_value(&self) -> &str {
        self
    }
}

impl EnumValue for &str {
    fn enum_value(&self) -> &str {
        self
    }
}

fn from_raw_scalar<T: DeserializeOwned>(raw: &Value) -> Result<T> {
    Ok(serde_json::from_value(raw.clone())?)
}

impl FromRaw for String {
    fn from_raw(raw: &Value) -> Result<Self> {
        from_raw_scalar(raw)
    }
}

impl FromRaw for i64 {
    fn from_raw(raw: &Value) -> Result<Self> {
        from_raw_scalar(raw)
    }
}

impl FromRaw for f64 {
    fn from_raw(raw: &Value) -> Result<Self> {
        from_raw_scalar(raw)
    }
}

impl FromRaw for bool {
    fn from_raw(raw: &Value) -> Result<Self> {
        from_raw_scalar(raw)
    }
}

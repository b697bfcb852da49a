use crate::core::one_of::{OneOf, OneOfResolver};
use crate::domain::model::FromRaw;
use crate::utils::error::{ModelError, Result};
use serde_json::Value;

/// Null passthrough, otherwise decode via the target's mapping
/// constructor. Already-typed values never re-enter coercion: the
/// generated typed constructors take typed arguments directly.
pub fn coerce_object<T: FromRaw>(raw: &Value) -> Result<Option<T>> {
    if raw.is_null() {
        return Ok(None);
    }

    Ok(Some(T::from_raw(raw)?))
}

/// Null passthrough, otherwise decode every element via the element
/// type's mapping constructor. The element type may be a generated model,
/// a generated enum or a scalar primitive; union-typed elements go
/// through [`coerce_one_of_list`] instead.
pub fn coerce_list<T: FromRaw>(raw: &Value) -> Result<Option<Vec<T>>> {
    if raw.is_null() {
        return Ok(None);
    }

    let items = raw.as_array().ok_or_else(|| ModelError::ValidationError {
        message: format!("Expected an array, got {}", value_kind(raw)),
    })?;

    let coerced = items.iter().map(T::from_raw).collect::<Result<Vec<T>>>()?;
    Ok(Some(coerced))
}

/// List coercion for union-typed elements: each element is resolved
/// against the union's candidate set, and null elements stay null.
pub fn coerce_one_of_list<T>(
    raw: &Value,
    resolver: &OneOfResolver<T>,
) -> Result<Option<Vec<Option<OneOf<T>>>>> {
    if raw.is_null() {
        return Ok(None);
    }

    let items = raw.as_array().ok_or_else(|| ModelError::ValidationError {
        message: format!("Expected an array, got {}", value_kind(raw)),
    })?;

    let resolved = items
        .iter()
        .map(|item| resolver.resolve(item))
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(resolved))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_object_null_passthrough() {
        assert_eq!(coerce_object::<i64>(&Value::Null).unwrap(), None);
    }

    #[test]
    fn test_coerce_object_scalar() {
        assert_eq!(coerce_object::<i64>(&json!(7)).unwrap(), Some(7));
        assert_eq!(
            coerce_object::<String>(&json!("seven")).unwrap(),
            Some("seven".to_string())
        );
        assert_eq!(coerce_object::<bool>(&json!(true)).unwrap(), Some(true));
        // Integers widen into float fields.
        assert_eq!(coerce_object::<f64>(&json!(3)).unwrap(), Some(3.0));
    }

    #[test]
    fn test_coerce_object_rejects_wrong_shape() {
        assert!(coerce_object::<i64>(&json!("seven")).is_err());
        assert!(coerce_object::<String>(&json!(7)).is_err());
    }

    #[test]
    fn test_coerce_list_null_passthrough() {
        assert_eq!(coerce_list::<String>(&Value::Null).unwrap(), None);
    }

    #[test]
    fn test_coerce_list_preserves_length_and_order() {
        let raw = json!(["a", "b", "c"]);
        let coerced = coerce_list::<String>(&raw).unwrap().unwrap();
        assert_eq!(coerced, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_coerce_list_rejects_non_array() {
        let err = coerce_list::<String>(&json!({"not": "a list"})).unwrap_err();
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_coerce_list_rejects_bad_element() {
        assert!(coerce_list::<i64>(&json!([1, "two", 3])).is_err());
    }
}

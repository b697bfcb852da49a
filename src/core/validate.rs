use crate::domain::model::EnumValue;
use crate::utils::error::{ModelError, Result};
use regex::Regex;

/// Checks a nullable string against a regex pattern and returns the value
/// unchanged on a match. Matching is anchored at the start only; callers
/// that need a full-string match must supply a trailing `$`.
pub fn match_pattern(
    value: Option<String>,
    pattern: &str,
    field_name: &str,
) -> Result<Option<String>> {
    let value = match value {
        Some(value) => value,
        None => return Ok(None),
    };

    let regex = Regex::new(&format!("^(?:{})", pattern))?;
    if regex.is_match(&value) {
        Ok(Some(value))
    } else {
        Err(ModelError::ValidationError {
            message: format!(
                "Invalid value for {}: must match {}",
                field_name, pattern
            ),
        })
    }
}

/// Checks a nullable enum-or-string value for membership in the allowed
/// set and returns the original value on a match, preserving its
/// symbolic-vs-string identity.
pub fn match_enum<V: EnumValue>(
    value: Option<V>,
    allowed: &[&str],
    field_name: &str,
) -> Result<Option<V>> {
    let value = match value {
        Some(value) => value,
        None => return Ok(None),
    };

    if allowed.contains(&value.enum_value()) {
        Ok(Some(value))
    } else {
        Err(ModelError::ValidationError {
            message: format!(
                "Invalid value for {}: must match one of {:?}",
                field_name, allowed
            ),
        })
    }
}

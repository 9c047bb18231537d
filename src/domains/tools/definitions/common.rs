//! Argument helpers shared across tool definitions.

use serde_json::Value;

use crate::domains::tools::ToolError;

/// Reject a required string argument that is empty or whitespace.
pub fn required(field: &str, value: String) -> Result<String, ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid_arguments(format!(
            "'{}' must not be empty",
            field
        )));
    }
    Ok(value)
}

/// Treat a blank optional string as absent.
///
/// Optional scope arguments switch the request to a different shape, so an
/// empty value must not produce e.g. `?teamId=`.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Treat a missing, zero or negative number as absent.
///
/// Integral values are rendered without a fraction, so `10.0` becomes `10`.
pub fn positive(value: Option<f64>) -> Option<String> {
    value.filter(|v| *v > 0.0).map(|v| v.to_string())
}

/// Drop top-level `null` members so absent optional fields are omitted
/// from request bodies instead of being sent as `null`.
pub fn without_nulls(mut body: Value) -> Value {
    if let Value::Object(map) = &mut body {
        map.retain(|_, v| !v.is_null());
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_rejects_blank() {
        assert!(required("name", "  ".to_string()).is_err());
        assert_eq!(required("name", "Shop".to_string()).unwrap(), "Shop");
    }

    #[test]
    fn test_required_error_names_field() {
        let err = required("projectKey", String::new()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid arguments: 'projectKey' must not be empty");
    }

    #[test]
    fn test_present() {
        assert_eq!(present(Some("team".to_string())), Some("team".to_string()));
        assert_eq!(present(Some(String::new())), None);
        assert_eq!(present(None), None);
    }

    #[test]
    fn test_positive() {
        assert_eq!(positive(Some(10.0)), Some("10".to_string()));
        assert_eq!(positive(Some(2.5)), Some("2.5".to_string()));
        assert_eq!(positive(Some(0.0)), None);
        assert_eq!(positive(Some(-3.0)), None);
        assert_eq!(positive(None), None);
    }

    #[test]
    fn test_without_nulls() {
        let body = without_nulls(json!({ "name": "a", "description": null }));
        assert_eq!(body, json!({ "name": "a" }));
    }
}

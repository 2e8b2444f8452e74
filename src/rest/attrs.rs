//! Declarative attribute contracts for create and update calls.
//!
//! Each creatable or updatable manager declares a [`RequiredOptional`] table.
//! Data is checked against it before the request is built, so a call missing
//! a required attribute fails with [`ResourceError::MissingAttributes`] and
//! never reaches the server.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::rest::{ResourceError, ResourceOperation};

/// Required and optional attribute names for one operation.
///
/// # Example
///
/// ```rust
/// use gitlab_api::rest::RequiredOptional;
/// use serde_json::json;
///
/// const ATTRS: RequiredOptional = RequiredOptional::new(&["key", "value"], &["variable_type"]);
///
/// let data = json!({"value": "production"});
/// let data = data.as_object().unwrap();
/// assert_eq!(ATTRS.missing(data, None), vec!["key"]);
/// // The identifier travels in the path on update
/// assert!(ATTRS.missing(data, Some("key")).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredOptional {
    /// Attributes that must be present.
    pub required: &'static [&'static str],
    /// Attributes that may be present.
    pub optional: &'static [&'static str],
}

impl RequiredOptional {
    /// Creates a new table. `const` so tables can be associated constants.
    #[must_use]
    pub const fn new(
        required: &'static [&'static str],
        optional: &'static [&'static str],
    ) -> Self {
        Self { required, optional }
    }

    /// Returns the required attributes absent from `data`.
    ///
    /// A `null` value counts as absent. `excluded` removes one name from the
    /// required set (the identifier of an object being updated).
    #[must_use]
    pub fn missing(&self, data: &Map<String, Value>, excluded: Option<&str>) -> Vec<&'static str> {
        self.required
            .iter()
            .copied()
            .filter(|name| Some(*name) != excluded)
            .filter(|name| data.get(*name).map_or(true, Value::is_null))
            .collect()
    }

    /// Fails with [`ResourceError::MissingAttributes`] if a required
    /// attribute is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingAttributes`] listing every absent name.
    pub fn validate(
        &self,
        data: &Map<String, Value>,
        excluded: Option<&str>,
        resource: &'static str,
        operation: ResourceOperation,
    ) -> Result<(), ResourceError> {
        let missing = self.missing(data, excluded);
        if missing.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            resource,
            operation = operation.as_str(),
            ?missing,
            "Rejecting request with missing attributes"
        );

        Err(ResourceError::MissingAttributes {
            resource,
            operation: operation.as_str(),
            missing,
        })
    }
}

/// Serializes request data into a JSON object.
///
/// `()` and `null` become an empty object.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidRequest`] if the data does not
/// serialize to a JSON object.
pub fn to_attributes<D: Serialize + ?Sized>(
    data: &D,
    resource: &'static str,
) -> Result<Map<String, Value>, ResourceError> {
    let value = serde_json::to_value(data).map_err(|e| ResourceError::InvalidRequest {
        resource,
        message: format!("Failed to serialize request data: {e}"),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(ResourceError::InvalidRequest {
            resource,
            message: format!("Request data must be a JSON object, got {other}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEDULE_CREATE: RequiredOptional =
        RequiredOptional::new(&["description", "ref", "cron"], &["cron_timezone", "active"]);

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_missing_lists_every_absent_required_attribute() {
        let data = object(json!({"ref": "main"}));
        assert_eq!(SCHEDULE_CREATE.missing(&data, None), vec!["description", "cron"]);
    }

    #[test]
    fn test_null_counts_as_missing() {
        let data = object(json!({"description": null, "ref": "main", "cron": "0 1 * * *"}));
        assert_eq!(SCHEDULE_CREATE.missing(&data, None), vec!["description"]);
    }

    #[test]
    fn test_excluded_identifier_is_not_required() {
        let attrs = RequiredOptional::new(&["key", "value"], &["variable_type"]);
        let data = object(json!({"value": "1"}));

        assert!(attrs.missing(&data, Some("key")).is_empty());
        assert_eq!(attrs.missing(&Map::new(), Some("key")), vec!["value"]);
    }

    #[test]
    fn test_validate_reports_resource_and_operation() {
        let result = SCHEDULE_CREATE.validate(
            &Map::new(),
            None,
            "ProjectPipelineSchedule",
            ResourceOperation::Create,
        );

        match result {
            Err(ResourceError::MissingAttributes {
                resource,
                operation,
                missing,
            }) => {
                assert_eq!(resource, "ProjectPipelineSchedule");
                assert_eq!(operation, "create");
                assert_eq!(missing, vec!["description", "ref", "cron"]);
            }
            other => panic!("expected MissingAttributes, got {other:?}"),
        }
    }

    #[test]
    fn test_optional_only_table_accepts_empty_data() {
        assert!(RequiredOptional::new(&[], &["cron_timezone"])
            .validate(&Map::new(), None, "X", ResourceOperation::Update)
            .is_ok());
    }

    #[test]
    fn test_to_attributes_accepts_structs_and_unit() {
        #[derive(Serialize)]
        struct Data {
            #[serde(rename = "ref")]
            ref_: &'static str,
        }

        assert_eq!(to_attributes(&Data { ref_: "main" }, "X").unwrap(), object(json!({"ref": "main"})));
        assert!(to_attributes(&(), "X").unwrap().is_empty());
        assert!(matches!(
            to_attributes(&vec![1, 2], "X"),
            Err(ResourceError::InvalidRequest { resource: "X", .. })
        ));
    }
}

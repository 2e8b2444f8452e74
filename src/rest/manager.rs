//! Manager traits for CRUD operations on GitLab collections.
//!
//! A *manager* is bound to one collection path, such as
//! `/projects/5/pipelines`. The operations a collection supports are
//! expressed as capability traits, each with a default implementation:
//!
//! | Trait | Operation | Request |
//! |-------|-----------|---------|
//! | [`ListManager`] | `list`, `list_all` | `GET {path}` |
//! | [`GetManager`] | `get` | `GET {path}/{id}` |
//! | [`CreateManager`] | `create` | `POST {create_path}` |
//! | [`UpdateManager`] | `update` | `PUT {path}/{id}` |
//! | [`DeleteManager`] | `delete` | `DELETE {path}/{id}` |
//!
//! A manager only implements the traits of the operations its collection
//! supports, so calling `delete` on a read-only collection does not compile.
//!
//! # Implementing a Manager
//!
//! ```rust,ignore
//! use gitlab_api::rest::{CreateManager, ListManager, RequiredOptional, RestManager};
//!
//! #[derive(Debug, Clone)]
//! pub struct DeployKeyManager {
//!     path: String,
//! }
//!
//! impl RestManager for DeployKeyManager {
//!     type Object = DeployKey;
//!
//!     fn path(&self) -> &str {
//!         &self.path
//!     }
//! }
//!
//! impl ListManager for DeployKeyManager {
//!     type Filters = ();
//! }
//!
//! impl CreateManager for DeployKeyManager {
//!     const CREATE_ATTRS: RequiredOptional = RequiredOptional::new(&["title", "key"], &[]);
//! }
//! ```

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{QueryParams, RestClient};
use crate::rest::{
    options_query, to_attributes, RequestOptions, RequiredOptional, ResourceError, ResourceId,
    ResourceOperation, ResourceResponse, RestObject,
};

/// A record type returned by a GitLab collection.
pub trait RestResource: Serialize + DeserializeOwned + Clone + Debug + Send + Sync {
    /// The resource name used in errors and logs (e.g. "`ProjectPipeline`").
    const NAME: &'static str;

    /// The attribute holding the record identifier.
    const ID_ATTR: &'static str = "id";

    /// Returns the identifier of this record, if it has one.
    fn get_id(&self) -> Option<String>;
}

/// A handle on one collection path.
pub trait RestManager: Clone + Debug + Send + Sync {
    /// The record type of the collection.
    type Object: RestResource;

    /// The resolved collection path, e.g. `/projects/5/pipelines`.
    fn path(&self) -> &str;

    /// Returns the path of a single record in the collection.
    fn object_path(&self, id: &ResourceId) -> String {
        format!("{}/{}", self.path(), id)
    }
}

/// Collections that can be listed.
#[allow(async_fn_in_trait)]
pub trait ListManager: RestManager {
    /// Filters accepted by `list`, serialized into the query string.
    type Filters: Serialize + Send + Sync;

    /// Lists one page of the collection.
    ///
    /// Filters are serialized into query parameters (`None` values are
    /// skipped, sequences become repeated `key[]` parameters). Options are
    /// applied last.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::List`] on a non-2xx response and
    /// [`ResourceError::Authentication`] on 401.
    async fn list(
        &self,
        client: &RestClient,
        filters: Option<&Self::Filters>,
        options: Option<&RequestOptions>,
    ) -> Result<ResourceResponse<Vec<RestObject<Self>>>, ResourceError> {
        let name = <Self::Object as RestResource>::NAME;
        let mut query = match filters {
            Some(filters) => serialize_to_query(filters, name)?,
            None => QueryParams::new(),
        };
        if let Some(options) = options {
            options.apply(&mut query);
        }

        let response = client
            .get(self.path(), Some(query))
            .await
            .map_err(|e| ResourceError::from_rest_error(ResourceOperation::List, name, e))?;

        let records: Vec<Self::Object> = decode_body(&response.body, name)?;
        let objects = records
            .into_iter()
            .map(|attrs| RestObject::new(attrs, self.clone()))
            .collect();

        Ok(ResourceResponse::from_parts(objects, &response))
    }

    /// Lists every page of the collection.
    ///
    /// Starts at the page given in `options` (or the first page) and follows
    /// the `x-next-page` header until it is absent.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`ListManager::list`].
    async fn list_all(
        &self,
        client: &RestClient,
        filters: Option<&Self::Filters>,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<RestObject<Self>>, ResourceError> {
        let mut options = options.cloned().unwrap_or_default();
        let mut objects = Vec::new();

        loop {
            let requested = options.requested_page();
            let page = self.list(client, filters, Some(&options)).await?;
            let next = page.next_page();
            objects.extend(page.into_inner());

            match next {
                Some(next) if Some(next) != requested => options = options.page(next),
                _ => break,
            }
        }

        Ok(objects)
    }
}

/// Collections whose records can be fetched by id.
#[allow(async_fn_in_trait)]
pub trait GetManager: RestManager {
    /// Fetches a single record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Get`] on a non-2xx response (including 404).
    async fn get(
        &self,
        client: &RestClient,
        id: impl Into<ResourceId>,
        options: Option<&RequestOptions>,
    ) -> Result<RestObject<Self>, ResourceError> {
        let name = <Self::Object as RestResource>::NAME;
        let path = self.object_path(&id.into());

        let response = client
            .get(&path, Some(options_query(options)))
            .await
            .map_err(|e| ResourceError::from_rest_error(ResourceOperation::Get, name, e))?;

        let attrs = decode_body(&response.body, name)?;
        Ok(RestObject::new(attrs, self.clone()))
    }
}

/// Collections that accept new records.
#[allow(async_fn_in_trait)]
pub trait CreateManager: RestManager {
    /// Attributes accepted on create.
    const CREATE_ATTRS: RequiredOptional;

    /// The path new records are posted to. Defaults to [`RestManager::path`].
    fn create_path(&self) -> &str {
        self.path()
    }

    /// Creates a record.
    ///
    /// Required attributes are checked before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingAttributes`] without sending a request
    /// when a required attribute is absent, and [`ResourceError::Create`] on a
    /// non-2xx response.
    async fn create<D: Serialize + Sync + ?Sized>(
        &self,
        client: &RestClient,
        data: &D,
        options: Option<&RequestOptions>,
    ) -> Result<RestObject<Self>, ResourceError> {
        let name = <Self::Object as RestResource>::NAME;
        let body = to_attributes(data, name)?;
        Self::CREATE_ATTRS.validate(&body, None, name, ResourceOperation::Create)?;

        let response = client
            .post(
                self.create_path(),
                Value::Object(body),
                Some(options_query(options)),
            )
            .await
            .map_err(|e| ResourceError::from_rest_error(ResourceOperation::Create, name, e))?;

        let attrs = decode_body(&response.body, name)?;
        Ok(RestObject::new(attrs, self.clone()))
    }
}

/// Collections whose records can be modified.
#[allow(async_fn_in_trait)]
pub trait UpdateManager: RestManager {
    /// Attributes accepted on update.
    const UPDATE_ATTRS: RequiredOptional;

    /// Updates a record and returns the server's JSON reply.
    ///
    /// The identifier attribute is never required in `data`; it is already
    /// part of the path.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingAttributes`] without sending a request
    /// when a required attribute is absent, and [`ResourceError::Update`] on a
    /// non-2xx response.
    async fn update<D: Serialize + Sync + ?Sized>(
        &self,
        client: &RestClient,
        id: impl Into<ResourceId>,
        data: &D,
        options: Option<&RequestOptions>,
    ) -> Result<Value, ResourceError> {
        let name = <Self::Object as RestResource>::NAME;
        let id_attr = <Self::Object as RestResource>::ID_ATTR;
        let path = self.object_path(&id.into());
        let body = to_attributes(data, name)?;
        Self::UPDATE_ATTRS.validate(&body, Some(id_attr), name, ResourceOperation::Update)?;

        let response = client
            .put(&path, Value::Object(body), Some(options_query(options)))
            .await
            .map_err(|e| ResourceError::from_rest_error(ResourceOperation::Update, name, e))?;

        Ok(response.body)
    }
}

/// Collections whose records can be removed.
#[allow(async_fn_in_trait)]
pub trait DeleteManager: RestManager {
    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Delete`] on a non-2xx response.
    async fn delete(
        &self,
        client: &RestClient,
        id: impl Into<ResourceId>,
        options: Option<&RequestOptions>,
    ) -> Result<(), ResourceError> {
        let name = <Self::Object as RestResource>::NAME;
        let path = self.object_path(&id.into());

        client
            .delete(&path, Some(options_query(options)))
            .await
            .map_err(|e| ResourceError::from_rest_error(ResourceOperation::Delete, name, e))?;

        Ok(())
    }
}

/// Serializes filter parameters into query pairs.
///
/// Null values are skipped. Arrays expand into repeated `key[]` pairs, the
/// form GitLab expects for multi-valued filters. Nested objects are sent as
/// JSON strings.
pub(crate) fn serialize_to_query<T: Serialize + ?Sized>(
    params: &T,
    resource: &'static str,
) -> Result<QueryParams, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::InvalidRequest {
        resource,
        message: format!("Failed to serialize filters: {e}"),
    })?;

    let map = match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(ResourceError::InvalidRequest {
                resource,
                message: format!("Filters must serialize to an object, got {other}"),
            })
        }
    };

    let mut query = QueryParams::new();
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let array_key = format!("{key}[]");
                query.extend(
                    items
                        .iter()
                        .filter_map(scalar_to_string)
                        .map(|item| (array_key.clone(), item)),
                );
            }
            Value::Object(_) => query.push((key, value.to_string())),
            scalar => {
                if let Some(text) = scalar_to_string(&scalar) {
                    query.push((key, text));
                }
            }
        }
    }

    Ok(query)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Decodes a response body into a typed value.
pub(crate) fn decode_body<T: DeserializeOwned>(
    body: &Value,
    resource: &'static str,
) -> Result<T, ResourceError> {
    serde_json::from_value(body.clone()).map_err(|e| ResourceError::InvalidResponse {
        resource,
        message: format!("Failed to decode response: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Default, Serialize)]
    struct Filters {
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        yaml_errors: Option<bool>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        scope: Vec<String>,
        username: Option<String>,
    }

    #[test]
    fn test_serialize_to_query_skips_none_and_null() {
        let filters = Filters {
            status: Some("running".to_string()),
            ..Default::default()
        };

        let query = serialize_to_query(&filters, "Test").unwrap();
        assert_eq!(query, vec![("status".to_string(), "running".to_string())]);
    }

    #[test]
    fn test_serialize_to_query_expands_arrays() {
        let filters = Filters {
            scope: vec!["success".to_string(), "failed".to_string()],
            yaml_errors: Some(true),
            ..Default::default()
        };

        let query = serialize_to_query(&filters, "Test").unwrap();
        assert!(query.contains(&("scope[]".to_string(), "success".to_string())));
        assert!(query.contains(&("scope[]".to_string(), "failed".to_string())));
        assert!(query.contains(&("yaml_errors".to_string(), "true".to_string())));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_serialize_to_query_unit_is_empty() {
        let query = serialize_to_query(&(), "Test").unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_serialize_to_query_rejects_scalars() {
        let result = serialize_to_query(&"scope", "Test");
        assert!(matches!(
            result,
            Err(ResourceError::InvalidRequest { resource: "Test", .. })
        ));
    }

    #[test]
    fn test_serialize_to_query_encodes_objects_as_json() {
        let query = serialize_to_query(&json!({"variables": {"a": 1}}), "Test").unwrap();
        assert_eq!(query, vec![("variables".to_string(), r#"{"a":1}"#.to_string())]);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: u64,
    }

    #[test]
    fn test_decode_body() {
        let record: Record = decode_body(&json!({"id": 3}), "Test").unwrap();
        assert_eq!(record, Record { id: 3 });

        let result: Result<Record, _> = decode_body(&json!({"id": "three"}), "Test");
        assert!(matches!(
            result,
            Err(ResourceError::InvalidResponse { .. })
        ));
    }
}

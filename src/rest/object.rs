//! Records bound to the manager that produced them.
//!
//! [`RestObject`] pairs a typed record with its [`RestManager`], so that
//! follow-up operations (`refresh`, `save`, `delete`, custom actions) know
//! which path to call. It also tracks local modifications: the serialized
//! state at load time is kept, and [`RestObject::changed_fields`] returns
//! the top-level attributes that differ from it.
//!
//! # Example
//!
//! ```rust,ignore
//! let schedules = ProjectPipelineScheduleManager::new(5);
//! let mut schedule = schedules.get(&client, 12, None).await?;
//! assert!(!schedule.is_dirty());
//!
//! schedule.description = Some("Nightly build".to_string());
//! assert!(schedule.is_dirty());
//!
//! // Sends only the changed attributes (plus any required ones)
//! schedule.save(&client, None).await?;
//! assert!(!schedule.is_dirty());
//! ```

use std::ops::{Deref, DerefMut};

use serde_json::{json, Map, Value};

use crate::clients::RestClient;
use crate::rest::{
    options_query, DeleteManager, GetManager, RequestOptions, ResourceError, ResourceId,
    ResourceOperation, RestManager, RestResource, UpdateManager,
};

/// A record together with the manager it belongs to.
///
/// Dereferences to the record, so its fields are accessed directly.
#[derive(Debug, Clone)]
pub struct RestObject<M: RestManager> {
    attrs: M::Object,
    manager: M,
    original_state: Value,
}

impl<M: RestManager> RestObject<M> {
    /// Wraps a record loaded from the server. The record starts clean.
    #[must_use]
    pub fn new(attrs: M::Object, manager: M) -> Self {
        let original_state = serde_json::to_value(&attrs).unwrap_or(Value::Null);
        Self {
            attrs,
            manager,
            original_state,
        }
    }

    /// Returns the manager this record belongs to.
    #[must_use]
    pub const fn manager(&self) -> &M {
        &self.manager
    }

    /// Returns the record identifier, if present.
    #[must_use]
    pub fn get_id(&self) -> Option<String> {
        self.attrs.get_id()
    }

    /// Returns the current value of an attribute by its JSON name.
    ///
    /// Unknown and null attributes both return `None`.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<Value> {
        self.to_json().get(name).filter(|value| !value.is_null()).cloned()
    }

    /// Serializes the record in its current state.
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::to_value(&self.attrs).unwrap_or(Value::Null)
    }

    /// Returns the wrapped record.
    #[must_use]
    pub const fn inner(&self) -> &M::Object {
        &self.attrs
    }

    /// Consumes the object and returns the record.
    #[must_use]
    pub fn into_inner(self) -> M::Object {
        self.attrs
    }

    /// Merges server-provided attributes into the record and marks it clean.
    ///
    /// Keys absent from `payload` keep their current value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidResponse`] when `payload` is not a JSON
    /// object or the merged attributes no longer decode.
    pub fn update_attrs(&mut self, payload: &Value) -> Result<(), ResourceError> {
        let name = <M::Object as RestResource>::NAME;
        let Value::Object(updates) = payload else {
            return Err(ResourceError::InvalidResponse {
                resource: name,
                message: format!("Expected a JSON object, got {payload}"),
            });
        };

        let mut merged = match self.to_json() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, value) in updates {
            merged.insert(key.clone(), value.clone());
        }

        self.attrs = serde_json::from_value(Value::Object(merged)).map_err(|e| {
            ResourceError::InvalidResponse {
                resource: name,
                message: format!("Failed to apply server attributes: {e}"),
            }
        })?;
        self.mark_clean();
        Ok(())
    }

    /// Returns `true` when the record differs from its last loaded state.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.to_json() != self.original_state
    }

    /// Returns the top-level attributes that differ from the loaded state.
    ///
    /// A changed nested value is returned whole. An attribute that was
    /// cleared since loading is returned as `null`.
    #[must_use]
    pub fn changed_fields(&self) -> Map<String, Value> {
        let current = match self.to_json() {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let mut changed = Map::new();
        if let Value::Object(original) = &self.original_state {
            for (key, value) in original {
                if !value.is_null() && !current.contains_key(key) {
                    changed.insert(key.clone(), Value::Null);
                }
            }
        }
        for (key, value) in current {
            if self.original_state.get(key.as_str()) != Some(&value) {
                changed.insert(key, value);
            }
        }
        changed
    }

    /// Makes the current state the new baseline.
    pub fn mark_clean(&mut self) {
        self.original_state = self.to_json();
    }

    /// Resolves the identifier used in by-id paths.
    pub(crate) fn require_id(&self, operation: &'static str) -> Result<ResourceId, ResourceError> {
        self.get_id()
            .map(ResourceId::new)
            .ok_or(ResourceError::PathResolutionFailed {
                resource: <M::Object as RestResource>::NAME,
                operation,
                id_attr: <M::Object as RestResource>::ID_ATTR,
            })
    }

    /// Runs a custom action: `POST {path}/{id}/{action}` with an empty body.
    pub(crate) async fn post_action(
        &self,
        client: &RestClient,
        operation: ResourceOperation,
        options: Option<&RequestOptions>,
    ) -> Result<Value, ResourceError> {
        let name = <M::Object as RestResource>::NAME;
        let id = self.require_id(operation.as_str())?;
        let path = format!("{}/{}", self.manager.object_path(&id), operation.as_str());

        tracing::debug!(resource = name, action = operation.as_str(), %path, "Running action");

        let response = client
            .post(&path, json!({}), Some(options_query(options)))
            .await
            .map_err(|e| ResourceError::from_rest_error(operation, name, e))?;

        Ok(response.body)
    }
}

impl<M: GetManager> RestObject<M> {
    /// Reloads the record from the server and marks it clean.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] when the record has no
    /// identifier, or [`ResourceError::Get`] on a non-2xx response.
    pub async fn refresh(
        &mut self,
        client: &RestClient,
        options: Option<&RequestOptions>,
    ) -> Result<(), ResourceError> {
        let id = self.require_id("refresh")?;
        let fresh = self.manager.get(client, id, options).await?;
        self.attrs = fresh.attrs;
        self.mark_clean();
        Ok(())
    }
}

impl<M: UpdateManager> RestObject<M> {
    /// Sends local modifications to the server.
    ///
    /// Does nothing when the record is clean. Otherwise the changed
    /// attributes are sent along with the current value of every attribute
    /// the update requires, and the server reply is merged back.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] when the record has no
    /// identifier, or any error raised by [`UpdateManager::update`].
    pub async fn save(
        &mut self,
        client: &RestClient,
        options: Option<&RequestOptions>,
    ) -> Result<(), ResourceError> {
        if !self.is_dirty() {
            tracing::debug!(
                resource = <M::Object as RestResource>::NAME,
                "Skipping save of unchanged record"
            );
            return Ok(());
        }

        let id = self.require_id("save")?;
        let mut body = self.changed_fields();
        let current = self.to_json();
        for name in M::UPDATE_ATTRS.required {
            if let Some(value) = current.get(*name).filter(|value| !value.is_null()) {
                body.entry((*name).to_string())
                    .or_insert_with(|| value.clone());
            }
        }

        let reply = self.manager.update(client, id, &body, options).await?;
        self.update_attrs(&reply)
    }
}

impl<M: DeleteManager> RestObject<M> {
    /// Deletes this record on the server.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] when the record has no
    /// identifier, or [`ResourceError::Delete`] on a non-2xx response.
    pub async fn delete(
        &self,
        client: &RestClient,
        options: Option<&RequestOptions>,
    ) -> Result<(), ResourceError> {
        let id = self.require_id("delete")?;
        self.manager.delete(client, id, options).await
    }
}

impl<M: RestManager> Deref for RestObject<M> {
    type Target = M::Object;

    fn deref(&self) -> &Self::Target {
        &self.attrs
    }
}

impl<M: RestManager> DerefMut for RestObject<M> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.attrs
    }
}

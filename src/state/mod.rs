//! Entity state source
//!
//! Read model of the home-automation state machine the panel runs against:
//! entity id to `{ state, attributes }`. Loaded from a JSON snapshot file or
//! built directly in code.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lookup failure while deriving rooms from entity state
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("attribute '{attribute}' not found on entity '{entity}'")]
    AttributeNotFound { entity: String, attribute: String },
}

/// One entity's state snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityState {
    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl EntityState {
    /// Entity with only a scalar state
    pub fn with_state(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            attributes: HashMap::new(),
        }
    }

    /// Add an attribute (builder-style)
    pub fn attribute(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }
}

/// All known entities, indexable by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateRegistry {
    #[serde(flatten)]
    entities: HashMap<String, EntityState>,
}

impl StateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read states file: {}", path.display()))?;

        let registry: StateRegistry = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse states file: {}", path.display()))?;

        Ok(registry)
    }

    /// Insert or replace an entity (builder-style)
    pub fn with_entity(mut self, id: impl Into<String>, entity: EntityState) -> Self {
        self.entities.insert(id.into(), entity);
        self
    }

    pub fn get(&self, entity_id: &str) -> Result<&EntityState, StateError> {
        self.entities
            .get(entity_id)
            .ok_or_else(|| StateError::EntityNotFound(entity_id.to_string()))
    }

    /// Resolve an `entity_id` or `entity_id.attributes.attr_name` reference
    /// to its current value
    pub fn resolve(&self, reference: &str) -> Result<serde_json::Value, StateError> {
        match reference.split_once(".attributes.") {
            Some((entity_id, attribute)) => {
                let entity = self.get(entity_id)?;
                entity
                    .attributes
                    .get(attribute)
                    .cloned()
                    .ok_or_else(|| StateError::AttributeNotFound {
                        entity: entity_id.to_string(),
                        attribute: attribute.to_string(),
                    })
            }
            None => Ok(serde_json::Value::String(self.get(reference)?.state.clone())),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_state_and_attributes() {
        let registry = StateRegistry::new().with_entity(
            "vacuum.robo",
            EntityState::with_state("docked").attribute("rooms", json!([[1, 2]])),
        );

        assert_eq!(registry.resolve("vacuum.robo").unwrap(), json!("docked"));
        assert_eq!(
            registry.resolve("vacuum.robo.attributes.rooms").unwrap(),
            json!([[1, 2]])
        );
    }

    #[test]
    fn missing_attribute_is_an_error() {
        let registry =
            StateRegistry::new().with_entity("vacuum.robo", EntityState::with_state("docked"));

        assert_eq!(
            registry.resolve("vacuum.robo.attributes.rooms"),
            Err(StateError::AttributeNotFound {
                entity: "vacuum.robo".to_string(),
                attribute: "rooms".to_string(),
            })
        );
    }
}

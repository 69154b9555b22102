//! Catalog Entities
//!
//! The platform-wide service / sub-service / clothing-item collections and
//! the snapshot aggregate they are persisted and transported as.

use serde::{Deserialize, Serialize};

use super::entity::{CatalogRecord, Entity};

/// A laundry service offered platform-wide (e.g. "Wash & Fold")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether the service is currently offered
    pub active: bool,
}

/// A processing tier applicable across services (e.g. "Express")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubService {
    pub id: String,
    pub name: String,
    pub active: bool,
}

/// A garment type studios can price individually
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    pub active: bool,
}

impl Service {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            active: true,
        }
    }
}

impl SubService {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            active: true,
        }
    }
}

impl ClothingItem {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            active: true,
        }
    }
}

impl Entity for Service {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for SubService {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for ClothingItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogRecord for Service {
    fn from_parts(id: String, name: String) -> Self {
        Self::new(id, name)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl CatalogRecord for SubService {
    fn from_parts(id: String, name: String) -> Self {
        Self::new(id, name)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl CatalogRecord for ClothingItem {
    fn from_parts(id: String, name: String) -> Self {
        Self::new(id, name)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Full three-collection catalog state, the unit of encode/decode/publish.
///
/// Field names follow the persisted JSON layout (`subServices`,
/// `clothingItems`). A collection field that arrives absent or not
/// array-shaped decodes as an empty collection rather than failing the
/// whole snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    /// Schema marker written on encode. Carried as inert metadata; nothing
    /// reads it back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub services: Vec<Service>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub sub_services: Vec<SubService>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub clothing_items: Vec<ClothingItem>,
}

fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_records_start_active() {
        let service = Service::new("svc-1".to_string(), "Wash & Fold".to_string());
        assert_eq!(service.id(), "svc-1");
        assert!(service.active);
    }

    #[test]
    fn test_snapshot_tolerates_non_array_field() {
        let snapshot: CatalogSnapshot = serde_json::from_str(
            r#"{"services":[{"id":"svc-1","name":"Wash","active":true}],"subServices":"oops"}"#,
        )
        .expect("snapshot should still parse");
        assert_eq!(snapshot.services.len(), 1);
        assert!(snapshot.sub_services.is_empty());
        assert!(snapshot.clothing_items.is_empty());
    }

    #[test]
    fn test_snapshot_field_names_match_persisted_layout() {
        let mut snapshot = CatalogSnapshot::default();
        snapshot.clothing_items.push(ClothingItem::new("it-1".to_string(), "Shirt".to_string()));
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"clothingItems\""));
        assert!(json.contains("\"subServices\""));
    }
}

//! Studio Entities
//!
//! A studio is a laundry business that adopts a subset of the platform
//! catalog with its own pricing. These records persist under their own
//! storage key, separate from the catalog collections.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A laundry business onboarded onto the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Studio {
    pub id: String,
    pub name: String,
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub studio_services: Vec<StudioService>,
}

impl Entity for Studio {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Profile fields captured by the onboarding form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudioProfile {
    pub name: String,
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// A studio's adoption of one catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioService {
    pub id: String,
    pub name: String,
    pub active: bool,
    /// Catalog Service this adoption points at
    pub service_id: String,
    #[serde(default)]
    pub sub_services: Vec<StudioSubService>,
}

impl StudioService {
    pub fn new(id: String, name: String, service_id: String) -> Self {
        Self {
            id,
            name,
            active: true,
            service_id,
            sub_services: Vec::new(),
        }
    }

    /// True when at least one sub-service is active (absent flag counts
    /// as active).
    pub fn has_active_sub_service(&self) -> bool {
        self.sub_services.iter().any(StudioSubService::is_active_or_default)
    }
}

/// Per-studio configuration of one catalog sub-service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioSubService {
    pub id: String,
    /// Holds the catalog SubService **id**, not a display name. The
    /// persisted format has always used `name` for this; kept for
    /// compatibility with existing stored records.
    pub name: String,
    /// Tri-state: absent means active, only an explicit `false` deactivates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_price_per_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub express_price_per_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_price_per_item: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub express_price_per_item: Option<f64>,
    /// Clothing-item ids this sub-service covers
    #[serde(default)]
    pub selected_items: Vec<String>,
    /// Per-item standard prices, keyed by clothing-item id
    #[serde(default)]
    pub standard_item_prices: HashMap<String, f64>,
    /// Per-item express prices, keyed by clothing-item id
    #[serde(default)]
    pub express_item_prices: HashMap<String, f64>,
    /// Per-item active flags, keyed by clothing-item id; missing means active
    #[serde(default)]
    pub clothing_items_status: HashMap<String, bool>,
}

impl StudioSubService {
    pub fn new(id: String, sub_service_id: String) -> Self {
        Self {
            id,
            name: sub_service_id,
            active: None,
            standard_price_per_kg: None,
            express_price_per_kg: None,
            standard_price_per_item: None,
            express_price_per_item: None,
            selected_items: Vec::new(),
            standard_item_prices: HashMap::new(),
            express_item_prices: HashMap::new(),
            clothing_items_status: HashMap::new(),
        }
    }

    /// Catalog SubService id this record points at
    pub fn sub_service_id(&self) -> &str {
        &self.name
    }

    /// Active unless explicitly switched off
    pub fn is_active_or_default(&self) -> bool {
        self.active != Some(false)
    }

    /// Item status with the same absent-means-active convention
    pub fn item_active(&self, item_id: &str) -> bool {
        self.clothing_items_status.get(item_id).copied().unwrap_or(true)
    }

    /// True when at least one selected item is active
    pub fn has_active_item(&self) -> bool {
        self.selected_items.iter().any(|item| self.item_active(item))
    }
}

/// The four price fields of a sub-service, updated as one unit
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubServicePricing {
    pub standard_price_per_kg: Option<f64>,
    pub express_price_per_kg: Option<f64>,
    pub standard_price_per_item: Option<f64>,
    pub express_price_per_item: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_active_flag_counts_as_active() {
        let sub = StudioSubService::new("ss-1".to_string(), "sub-1".to_string());
        assert!(sub.active.is_none());
        assert!(sub.is_active_or_default());
    }

    #[test]
    fn test_only_explicit_false_deactivates() {
        let mut sub = StudioSubService::new("ss-1".to_string(), "sub-1".to_string());
        sub.active = Some(true);
        assert!(sub.is_active_or_default());
        sub.active = Some(false);
        assert!(!sub.is_active_or_default());
    }

    #[test]
    fn test_item_status_defaults_to_active() {
        let mut sub = StudioSubService::new("ss-1".to_string(), "sub-1".to_string());
        sub.selected_items.push("it-1".to_string());
        assert!(sub.item_active("it-1"));
        assert!(sub.has_active_item());
        sub.clothing_items_status.insert("it-1".to_string(), false);
        assert!(!sub.has_active_item());
    }

    #[test]
    fn test_name_field_carries_sub_service_id() {
        let sub = StudioSubService::new("ss-1".to_string(), "sub-7".to_string());
        assert_eq!(sub.sub_service_id(), "sub-7");
        assert_eq!(sub.name, "sub-7");
    }
}

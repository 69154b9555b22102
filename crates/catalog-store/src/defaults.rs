//! Built-in Defaults
//!
//! Seed collections adopted when neither the URL payload nor storage
//! carries usable data, plus sample studios for a fresh install.

use chrono::Utc;

use crate::domain::{ClothingItem, Service, Studio, SubService};

pub fn default_services() -> Vec<Service> {
    vec![
        Service::new("svc-1".to_string(), "Wash & Fold".to_string()),
        Service::new("svc-2".to_string(), "Wash & Iron".to_string()),
        Service::new("svc-3".to_string(), "Dry Cleaning".to_string()),
        Service::new("svc-4".to_string(), "Steam Ironing".to_string()),
    ]
}

pub fn default_sub_services() -> Vec<SubService> {
    vec![
        SubService::new("sub-1".to_string(), "Standard".to_string()),
        SubService::new("sub-2".to_string(), "Express".to_string()),
        SubService::new("sub-3".to_string(), "Premium".to_string()),
    ]
}

pub fn default_clothing_items() -> Vec<ClothingItem> {
    vec![
        ClothingItem::new("it-1".to_string(), "Shirt".to_string()),
        ClothingItem::new("it-2".to_string(), "Trousers".to_string()),
        ClothingItem::new("it-3".to_string(), "Saree".to_string()),
        ClothingItem::new("it-4".to_string(), "Blazer".to_string()),
    ]
}

/// Sample studios shown on a fresh install, before any onboarding
pub fn default_studios() -> Vec<Studio> {
    vec![
        Studio {
            id: "studio-1".to_string(),
            name: "Sparkle Laundry Hub".to_string(),
            owner_name: "Priya Sharma".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "priya@sparklehub.in".to_string(),
            address: "14 MG Road, Indiranagar, Bengaluru".to_string(),
            active: true,
            created_at: Utc::now(),
            studio_services: Vec::new(),
        },
        Studio {
            id: "studio-2".to_string(),
            name: "FreshPress Studio".to_string(),
            owner_name: "Arjun Mehta".to_string(),
            phone: "+91 91234 56789".to_string(),
            email: "arjun@freshpress.in".to_string(),
            address: "221 Linking Road, Bandra West, Mumbai".to_string(),
            active: true,
            created_at: Utc::now(),
            studio_services: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_collection_sizes() {
        assert_eq!(default_services().len(), 4);
        assert_eq!(default_sub_services().len(), 3);
        assert_eq!(default_clothing_items().len(), 4);
    }

    #[test]
    fn test_default_ids_are_unique() {
        let services = default_services();
        let mut ids: Vec<_> = services.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), services.len());
    }
}

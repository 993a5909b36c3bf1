//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Menu item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub section: String,
    pub description: String,
    pub price: f64,
    pub dietary_restriction: String,
}

/// Restaurant data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub location: String,
}

/// One row of the per-restaurant item-count view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantItemCount {
    pub restaurant_name: String,
    pub total_items: u32,
    pub average_price: f64,
}

/// One row of the dietary-restriction distribution view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietaryBreakdown {
    pub restriction_type: String,
    pub item_count: u32,
    pub percentage: f64,
}

/// One row of the per-restaurant price-analysis view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAnalysis {
    pub restaurant_name: String,
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
}

/// Pre-aggregated analytics payload served by the backend.
/// Lists default to empty so a partial report still renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyticsReport {
    #[serde(default)]
    pub menu_items_per_restaurant: Vec<RestaurantItemCount>,
    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryBreakdown>,
    #[serde(default)]
    pub price_analysis: Vec<PriceAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_matches_wire_format() {
        let json = r#"{
            "id": 7,
            "name": "Carnitas Taco",
            "section": "Tacos",
            "description": "Slow-braised pork, onion, cilantro",
            "price": 4.50,
            "dietary_restriction": "none"
        }"#;

        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Carnitas Taco");
        assert_eq!(item.section, "Tacos");
        assert_eq!(item.price, 4.5);
        assert_eq!(item.dietary_restriction, "none");
    }

    #[test]
    fn test_analytics_report_matches_wire_format() {
        let json = r#"{
            "menu_items_per_restaurant": [
                {"restaurant_name": "La Taqueria", "total_items": 12, "average_price": 8.25}
            ],
            "dietary_restrictions": [
                {"restriction_type": "vegan", "item_count": 3, "percentage": 25.0}
            ],
            "price_analysis": [
                {"restaurant_name": "La Taqueria", "min_price": 3.0, "max_price": 18.5, "avg_price": 8.25}
            ]
        }"#;

        let report: AnalyticsReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.menu_items_per_restaurant.len(), 1);
        assert_eq!(report.menu_items_per_restaurant[0].total_items, 12);
        assert_eq!(report.dietary_restrictions[0].restriction_type, "vegan");
        assert_eq!(report.price_analysis[0].max_price, 18.5);
    }

    #[test]
    fn test_analytics_report_tolerates_missing_lists() {
        let report: AnalyticsReport = serde_json::from_str("{}").unwrap();
        assert!(report.menu_items_per_restaurant.is_empty());
        assert!(report.dietary_restrictions.is_empty());
        assert!(report.price_analysis.is_empty());
    }
}

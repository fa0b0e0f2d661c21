use serde::{Deserialize, Serialize};

/// A bookable sports venue. Catalog records never change at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Turf {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Hourly price in rupees
    pub price: u32,
    pub rating: f64,
    pub image: String,
    pub sport: String,
    pub amenities: Vec<String>,
    pub is_indoor: bool,
    pub has_lighting: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turf_uses_camel_case_flags() {
        let json = r#"
            {
                "id": "7",
                "name": "Arena Seven",
                "location": "Pune",
                "price": 1200,
                "rating": 4.5,
                "image": "https://images.example.com/arena.jpg",
                "sport": "Football",
                "amenities": ["Parking"],
                "isIndoor": true,
                "hasLighting": false
            }
        "#;
        let turf: Turf = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(turf.is_indoor);
        assert!(!turf.has_lighting);
        assert_eq!(turf.amenities, vec!["Parking".to_string()]);
    }
}

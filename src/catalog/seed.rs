use crate::catalog::traits::ListingSource;
use crate::models::{Location, Price, Property, PropertyType};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Built-in featured listings shown when no catalog file is given
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedSource;

#[async_trait]
impl ListingSource for SeedSource {
    async fn load(&self) -> Result<Vec<Property>> {
        Ok(featured_properties())
    }

    fn source_name(&self) -> &'static str {
        "seed"
    }
}

/// The three featured listings
pub fn featured_properties() -> Vec<Property> {
    info!("📋 Loading featured seed listings");

    vec![
        Property {
            id: "1".to_string(),
            title: "Luxury Apartment in NYC".to_string(),
            price: Price(1_500_000),
            location: Location {
                city: "New York".to_string(),
                latitude: 40.7128,
                longitude: -74.0060,
            },
            kind: PropertyType::Apartment,
            bedrooms: 3,
            bathrooms: 2,
            square_feet: 1500,
            description: "A luxury apartment located in the heart of NYC with stunning views of Central Park.".to_string(),
            image: "assets/appartments.png".to_string(),
            available: true,
            rating: 4.5,
            reviews: 150,
        },
        Property {
            id: "2".to_string(),
            title: "Beachfront Villa".to_string(),
            price: Price(2_200_000),
            location: Location {
                city: "Miami".to_string(),
                latitude: 25.7617,
                longitude: -80.1918,
            },
            kind: PropertyType::Villa,
            bedrooms: 5,
            bathrooms: 4,
            square_feet: 3500,
            description: "A gorgeous beachfront villa with private pool and easy beach access.".to_string(),
            image: "assets/beachFront.png".to_string(),
            available: false,
            rating: 4.7,
            reviews: 180,
        },
        Property {
            id: "3".to_string(),
            title: "Downtown Loft".to_string(),
            price: Price(800_000),
            location: Location {
                city: "Los Angeles".to_string(),
                latitude: 34.0522,
                longitude: -118.2437,
            },
            kind: PropertyType::Loft,
            bedrooms: 2,
            bathrooms: 2,
            square_feet: 1200,
            description: "Modern loft in downtown Los Angeles with an industrial chic vibe.".to_string(),
            image: "assets/loft.png".to_string(),
            available: true,
            rating: 4.0,
            reviews: 80,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn seed_has_three_unique_listings() {
        let properties = SeedSource.load().await.unwrap();
        assert_eq!(properties.len(), 3);

        let ids: HashSet<_> = properties.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
    }
}

pub mod json;
pub mod seed;
pub mod traits;

pub use json::JsonFileSource;
pub use seed::SeedSource;
pub use traits::ListingSource;

use crate::error::CatalogError;
use crate::models::Property;
use std::collections::HashMap;

/// Ordered set of listings with an id index
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: Vec<Property>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn from_properties(properties: Vec<Property>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(properties.len());
        for (pos, property) in properties.iter().enumerate() {
            if index.insert(property.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(property.id.clone()));
            }
        }
        Ok(Self { properties, index })
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.index.get(id).map(|&pos| &self.properties[pos])
    }

    pub fn require(&self, id: &str) -> Result<&Property, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownProperty(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

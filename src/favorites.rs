use crate::catalog::Catalog;
use crate::models::Property;
use serde::Serialize;

/// Session-scoped favorites, kept as property ids in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// Flip membership and return whether `id` is now a favorite
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Drop `id`; absent ids are left alone. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|fav| fav != id);
        self.ids.len() != before
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Look favorites up in the catalog, skipping ids it no longer carries
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Property> {
        self.ids.iter().filter_map(|id| catalog.get(id)).collect()
    }
}

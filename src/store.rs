use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::favorites::Favorites;
use crate::feed::{feed_view, FilterCriteria};
use crate::models::Property;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{debug, info};

/// Everything the screens read: listings, favorites and the active feed inputs
#[derive(Debug, Default)]
pub struct AppState {
    pub catalog: Catalog,
    pub favorites: Favorites,
    pub query: String,
    pub criteria: FilterCriteria,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    /// Current home feed
    pub fn visible(&self) -> Vec<&Property> {
        feed_view(&self.query, &self.criteria, self.catalog.properties())
    }

    pub fn favorite_properties(&self) -> Vec<&Property> {
        self.favorites.resolve(&self.catalog)
    }
}

/// Shared handle to the state owned by the app root.
///
/// Screens read through [`StoreHandle::read`] and go through the update methods
/// for every mutation.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    inner: Arc<RwLock<AppState>>,
}

impl StoreHandle {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, AppState> {
        self.inner.read().await
    }

    pub async fn property(&self, id: &str) -> Result<Property, CatalogError> {
        self.inner.read().await.catalog.require(id).cloned()
    }

    pub async fn set_query(&self, query: &str) {
        let mut state = self.inner.write().await;
        state.query = query.to_string();
        debug!("Search query set to {:?}", state.query);
    }

    pub async fn apply_filters(&self, criteria: FilterCriteria) {
        let mut state = self.inner.write().await;
        info!("Applying filters: {}", criteria);
        state.criteria = criteria;
    }

    pub async fn clear(&self) {
        let mut state = self.inner.write().await;
        state.query.clear();
        state.criteria = FilterCriteria::default();
        info!("Cleared search and filters");
    }

    /// Flip a listing's favorite flag; returns the new membership
    pub async fn toggle_favorite(&self, id: &str) -> Result<bool, CatalogError> {
        let mut state = self.inner.write().await;
        state.catalog.require(id)?;
        let now_favorite = state.favorites.toggle(id);
        info!(
            "{} property {} ({} favorites)",
            if now_favorite { "Favorited" } else { "Unfavorited" },
            id,
            state.favorites.len()
        );
        Ok(now_favorite)
    }

    /// Remove a favorite; absent ids are not an error
    pub async fn remove_favorite(&self, id: &str) -> bool {
        let mut state = self.inner.write().await;
        let removed = state.favorites.remove(id);
        if removed {
            info!("Removed property {} from favorites", id);
        } else {
            debug!("Property {} was not a favorite", id);
        }
        removed
    }
}

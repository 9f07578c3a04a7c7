use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply listings to the catalog
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load every listing the source knows about
    async fn load(&self) -> Result<Vec<Property>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}

pub mod filter;
pub mod search;
pub mod types;

pub use filter::filter;
pub use search::search;
pub use types::{FilterCriteria, FilterOptions, PriceRange};

use crate::models::Property;

/// The home feed: search narrowed further by the structured filter
pub fn feed_view<'a>(
    query: &str,
    criteria: &FilterCriteria,
    properties: &'a [Property],
) -> Vec<&'a Property> {
    filter(criteria, search(query, properties))
}

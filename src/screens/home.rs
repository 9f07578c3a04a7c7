use crate::map::{self, Region};
use crate::screens::{heart, APP_NAME};
use crate::store::AppState;

pub const NO_RESULTS: &str = "No properties match your search.";

/// Home feed: search state, map of the current view and the featured list
pub fn render(state: &AppState) -> String {
    let visible = state.visible();
    let mut out = format!("=== {} ===  (♥ {})\n", APP_NAME, state.favorites.len());

    let query = if state.query.is_empty() {
        "(none)"
    } else {
        state.query.as_str()
    };
    out.push_str(&format!("Search: {}\nFilters: {}\n\n", query, state.criteria));

    out.push_str("Explore Nearby Properties\n");
    out.push_str(&map::render(&Region::home(), &map::markers(visible.iter().copied())));
    out.push('\n');

    out.push_str("Featured Properties\n");
    if visible.is_empty() {
        out.push_str(&format!("  {}\n", NO_RESULTS));
    }
    for property in &visible {
        out.push_str(&format!(
            "  [{}] {} {} {}\n",
            property.id,
            heart(state.favorites.contains(&property.id)),
            property.title,
            property.price
        ));
    }

    out.push_str("\nLooking for your dream home? Type 'contact' to reach us.\n");
    out
}

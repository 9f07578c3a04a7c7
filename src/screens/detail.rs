use crate::map::{self, MapMarker, Region};
use crate::models::Property;
use crate::screens::heart;

/// Full listing page with its own map
pub fn render(property: &Property, is_favorite: bool) -> String {
    let mut out = String::from("--- Property Details ---\n");
    out.push_str(&format!("{} {}\n", heart(is_favorite), property.title));
    out.push_str(&format!("{}\n", property.price));
    out.push_str(&format!(
        "{} · {}\nBedrooms: {}  Bathrooms: {}  Area: {} sqft\n",
        property.kind,
        property.location.city,
        property.bedrooms,
        property.bathrooms,
        property.square_feet
    ));
    out.push_str(&format!(
        "{}  ★ {:.1} ({} reviews)\n",
        if property.available { "Available" } else { "Not available" },
        property.rating,
        property.reviews
    ));
    if !property.description.is_empty() {
        out.push_str(&format!("\n{}\n", property.description));
    }

    out.push_str("\nProperty Location\n");
    out.push_str(&map::render(
        &Region::around(property),
        &[MapMarker::from(property)],
    ));
    out.push_str("\nType 'contact-agent' to reach the listing agent.\n");
    out
}

pub fn agent_inquiry(property: &Property) -> String {
    format!("Contacting agent for {}", property.title)
}

use crate::models::Property;

/// Free-text search over title, city and the formatted price.
///
/// A blank (whitespace-only) query keeps everything. Otherwise the query as typed,
/// surrounding spaces included, is a case-insensitive substring test. Input order
/// is kept.
pub fn search<'a, I>(query: &str, properties: I) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    if query.trim().is_empty() {
        return properties.into_iter().collect();
    }
    let needle = query.to_lowercase();

    properties
        .into_iter()
        .filter(|p| matches(p, &needle))
        .collect()
}

fn matches(property: &Property, needle: &str) -> bool {
    property.title.to_lowercase().contains(needle)
        || property.location.city.to_lowercase().contains(needle)
        || property.price.display().to_lowercase().contains(needle)
}

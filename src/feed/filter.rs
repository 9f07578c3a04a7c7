use crate::feed::types::FilterCriteria;
use crate::models::Property;

/// Narrow listings by price range, then type, then bedroom count.
///
/// Dimensions without a criterion are skipped, so empty criteria keep the input.
pub fn filter<'a, I>(criteria: &FilterCriteria, properties: I) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    let mut narrowed: Vec<&Property> = properties.into_iter().collect();

    if let Some(range) = &criteria.price_range {
        narrowed.retain(|p| range.contains(p.price));
    }
    if let Some(kind) = criteria.property_type {
        narrowed.retain(|p| p.kind == kind);
    }
    if let Some(bedrooms) = criteria.bedrooms {
        narrowed.retain(|p| p.bedrooms == bedrooms);
    }

    narrowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::featured_properties;
    use crate::feed::types::PriceRange;
    use crate::models::PropertyType;

    fn ids(found: &[&Property]) -> Vec<String> {
        found.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn empty_criteria_keep_everything_in_order() {
        let all = featured_properties();
        let kept = filter(&FilterCriteria::default(), &all);
        assert_eq!(kept, all.iter().collect::<Vec<_>>());
    }

    #[test]
    fn filters_by_type() {
        let all = featured_properties();
        let criteria = FilterCriteria {
            property_type: Some(PropertyType::Loft),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&criteria, &all)), vec!["3"]);
    }

    #[test]
    fn filters_by_numeric_price() {
        let all = featured_properties();
        let criteria = FilterCriteria {
            price_range: Some(PriceRange::new(1_000_000, None)),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&criteria, &all)), vec!["1", "2"]);

        let criteria = FilterCriteria {
            price_range: Some(PriceRange::new(0, Some(500_000))),
            ..Default::default()
        };
        assert!(filter(&criteria, &all).is_empty());
    }

    #[test]
    fn criteria_are_conjunctive() {
        let all = featured_properties();
        let both = FilterCriteria {
            property_type: Some(PropertyType::Villa),
            bedrooms: Some(5),
            ..Default::default()
        };
        let by_type = FilterCriteria {
            property_type: Some(PropertyType::Villa),
            ..Default::default()
        };
        let by_beds = FilterCriteria {
            bedrooms: Some(5),
            ..Default::default()
        };

        let type_ids = ids(&filter(&by_type, &all));
        let bed_ids = ids(&filter(&by_beds, &all));
        let intersection: Vec<_> = type_ids
            .into_iter()
            .filter(|id| bed_ids.contains(id))
            .collect();

        assert_eq!(ids(&filter(&both, &all)), intersection);
        assert_eq!(intersection, vec!["2"]);
    }

    #[test]
    fn mismatched_dimensions_yield_nothing() {
        let all = featured_properties();
        let criteria = FilterCriteria {
            property_type: Some(PropertyType::Villa),
            bedrooms: Some(2),
            ..Default::default()
        };
        assert!(filter(&criteria, &all).is_empty());
    }
}

use crate::models::Property;
use serde::Serialize;

/// One pin on the map surface
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub description: String,
}

impl From<&Property> for MapMarker {
    fn from(property: &Property) -> Self {
        Self {
            latitude: property.location.latitude,
            longitude: property.location.longitude,
            title: property.title.clone(),
            description: property.price.display(),
        }
    }
}

/// Visible area of the map
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    /// Starting viewport of the home map (San Francisco)
    pub fn home() -> Self {
        Self {
            latitude: 37.7749,
            longitude: -122.4194,
            latitude_delta: 1.0,
            longitude_delta: 1.0,
        }
    }

    /// Close-up viewport for a single listing
    pub fn around(property: &Property) -> Self {
        Self {
            latitude: property.location.latitude,
            longitude: property.location.longitude,
            latitude_delta: 0.0922,
            longitude_delta: 0.0421,
        }
    }
}

pub fn markers<'a, I>(properties: I) -> Vec<MapMarker>
where
    I: IntoIterator<Item = &'a Property>,
{
    properties.into_iter().map(MapMarker::from).collect()
}

/// Text rendering of a map: viewport line followed by one line per marker
pub fn render(region: &Region, markers: &[MapMarker]) -> String {
    let mut out = format!(
        "Map centred on ({:.4}, {:.4}), span {:.4} x {:.4}\n",
        region.latitude, region.longitude, region.latitude_delta, region.longitude_delta
    );
    if markers.is_empty() {
        out.push_str("  (no markers)\n");
    }
    for marker in markers {
        out.push_str(&format!(
            "  📍 {} ({:.4}, {:.4}) {}\n",
            marker.title, marker.latitude, marker.longitude, marker.description
        ));
    }
    out
}

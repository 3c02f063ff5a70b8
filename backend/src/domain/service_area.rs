//! Recognized "City, State" locations accepted for new reviews.

use super::Location;

/// Locations in the service area. Matching is exact and case-sensitive.
/// "Salt Lake City, Utah" appears twice in the published list; duplicates
/// are harmless.
pub const RECOGNIZED_LOCATIONS: &[&str] = &[
    "Albuquerque, New Mexico",
    "Carlsbad, California",
    "Chula Vista, California",
    "Colorado Springs, Colorado",
    "Denver, Colorado",
    "El Cajon, California",
    "El Paso, Texas",
    "Escondido, California",
    "Fresno, California",
    "La Mesa, California",
    "Las Vegas, Nevada",
    "Los Angeles, California",
    "Oceanside, California",
    "Phoenix, Arizona",
    "Sacramento, California",
    "Salt Lake City, Utah",
    "Salt Lake City, Utah",
    "San Diego, California",
    "Tucson, Arizona",
];

/// Set of locations that new submissions may use.
///
/// # Examples
/// ```
/// use review_analyzer::domain::{Location, ServiceArea};
///
/// let area = ServiceArea::default();
/// assert!(area.contains(&Location::new("Denver, Colorado")));
/// assert!(!area.contains(&Location::new("denver, colorado")));
/// ```
#[derive(Debug, Clone)]
pub struct ServiceArea {
    locations: Vec<String>,
}

impl ServiceArea {
    /// Build a service area from an explicit list.
    pub fn new<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locations: locations.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `location` is recognized.
    pub fn contains(&self, location: &Location) -> bool {
        self.locations
            .iter()
            .any(|known| known.as_str() == location.as_str())
    }
}

impl Default for ServiceArea {
    fn default() -> Self {
        Self::new(RECOGNIZED_LOCATIONS.iter().copied())
    }
}

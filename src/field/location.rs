use serde::{Deserialize, Serialize};

/// A named sampling point. Depth is in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    latitude: f64,
    longitude: f64,
    depth: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, depth: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            depth,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `(latitude, longitude)`.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Moves the point in place. The name is kept.
    pub fn update_location(&mut self, latitude: f64, longitude: f64, depth: f64) {
        self.latitude = latitude;
        self.longitude = longitude;
        self.depth = depth;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates() {
        let loc = Location::new("Point A", 40.5678, 39.8765, 15.5);
        assert_eq!(loc.coordinates(), (40.5678, 39.8765));
        assert_eq!(loc.depth(), 15.5);
        assert_eq!(loc.name(), "Point A");
    }

    #[test]
    fn test_update_location_overwrites_position() {
        let mut loc = Location::new("Point A", 40.5678, 39.8765, 15.5);
        loc.update_location(41.0, 38.5, 3.0);

        assert_eq!(loc.coordinates(), (41.0, 38.5));
        assert_eq!(loc.depth(), 3.0);
        assert_eq!(loc.name(), "Point A");
    }
}

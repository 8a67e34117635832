use serde::{Deserialize, Serialize};

/// A point in WGS84 degrees, serialized the way both the places directory and the
/// frontend expect it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

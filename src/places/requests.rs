use crate::map::models::Coordinates;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNearbyRequest {
    pub location_restriction: LocationRestriction,
    pub max_result_count: u32,
}

#[derive(Debug, Serialize)]
pub struct LocationRestriction {
    pub circle: Circle,
}

#[derive(Debug, Serialize)]
pub struct Circle {
    pub center: Coordinates,
    pub radius: f64,
}

impl SearchNearbyRequest {
    pub fn new(center: Coordinates, radius: f64, max_result_count: u32) -> Self {
        Self {
            location_restriction: LocationRestriction {
                circle: Circle { center, radius },
            },
            max_result_count,
        }
    }
}

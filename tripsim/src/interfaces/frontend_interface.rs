use crate::core::element::Element;
use crate::core::road_surface::RoadSurface;

pub const MAX_FRONTEND_UPDATE_FREQUENCY: f64 = 20.0;

/// TripState is the snapshot of a trip that is handed to a frontend for drawing.
#[derive(Debug, Clone, Default)]
pub struct TripState {
    pub t_trip: f64,
    pub speed: f64,
    pub fuel_level: f64,
    pub distance: f64,
    pub goal: f64,
    pub goal_reached: bool,
    pub surface: RoadSurface,
    pub visible_elements: Vec<Element>,
}

impl TripState {
    /// get_trip_prog returns the trip progress in the range [0.0, 1.0].
    pub fn get_trip_prog(&self) -> f64 {
        if self.goal <= 0.0 {
            return 1.0;
        }
        (self.distance / self.goal).max(0.0).min(1.0)
    }
}

use crate::core::element::Element;
use anyhow::Context;
use helpers::general::{is_non_negative, InputValueError};
use serde::Deserialize;

fn default_view_distance() -> f64 {
    200.0
}

fn default_t_max() -> f64 {
    3600.0
}

/// * `initial_distance` - (m) Distance already covered at the start of the trip
/// * `goal` - (m) Distance at which the trip is completed
/// * `view_distance` - (m) Half width of the visible window around the vehicle
/// * `t_max` - (s) Simulated time after which an unfinished trip is aborted
#[derive(Debug, Deserialize, Clone)]
pub struct TripPars {
    pub initial_distance: f64,
    pub goal: f64,
    #[serde(default = "default_view_distance")]
    pub view_distance: f64,
    #[serde(default = "default_t_max")]
    pub t_max: f64,
}

#[derive(Debug, Clone)]
pub struct Trip {
    distance: f64,
    goal: f64,
    elements: Vec<Element>,
    idxs_by_distance: Vec<usize>,
}

impl Trip {
    pub fn new(initial_distance: f64, goal: f64) -> Trip {
        Trip {
            distance: initial_distance,
            goal,
            elements: vec![],
            idxs_by_distance: vec![],
        }
    }

    /// The method advances the trip by the inserted distance. The distance is not clamped to the
    /// goal. Negative deltas are rejected since the vehicle only travels forward.
    pub fn update_distance(&mut self, delta: f64) -> anyhow::Result<()> {
        if !is_non_negative(delta) {
            return Err(InputValueError).context(format!(
                "Distance delta must be non-negative, but is {}m!",
                delta
            ));
        }

        self.distance += delta;
        Ok(())
    }

    pub fn get_distance(&self) -> f64 {
        self.distance
    }

    pub fn get_goal(&self) -> f64 {
        self.goal
    }

    pub fn is_goal_reached(&self) -> bool {
        self.distance >= self.goal
    }

    /// get_remaining_distance returns the distance left until the goal (zero after reaching it).
    pub fn get_remaining_distance(&self) -> f64 {
        (self.goal - self.distance).max(0.0)
    }

    /// The method appends an element. Neither ordering nor uniqueness of the distances is
    /// required, but the distance must be finite.
    pub fn add_element(&mut self, element: Element) -> anyhow::Result<()> {
        if !element.get_distance().is_finite() {
            return Err(InputValueError).context(format!(
                "Element {} must be placed at a finite distance, but is placed at {}m!",
                element.get_id(),
                element.get_distance()
            ));
        }

        // keep the index sorted by distance, equal distances stay in insertion order
        let pos = self
            .idxs_by_distance
            .partition_point(|&idx| self.elements[idx].get_distance() <= element.get_distance());

        self.idxs_by_distance.insert(pos, self.elements.len());
        self.elements.push(element);
        Ok(())
    }

    pub fn get_elements(&self) -> &[Element] {
        &self.elements
    }

    /// get_visible_elements returns all elements within [distance - view_distance,
    /// distance + view_distance] (both boundaries included) in the order they were added.
    pub fn get_visible_elements(&self, view_distance: f64) -> anyhow::Result<Vec<Element>> {
        if !is_non_negative(view_distance) {
            return Err(InputValueError).context(format!(
                "view_distance must be non-negative, but is {}m!",
                view_distance
            ));
        }

        let s_min = self.distance - view_distance;
        let s_max = self.distance + view_distance;

        let idx_start = self
            .idxs_by_distance
            .partition_point(|&idx| self.elements[idx].get_distance() < s_min);
        let idx_end = self
            .idxs_by_distance
            .partition_point(|&idx| self.elements[idx].get_distance() <= s_max);

        if idx_start >= idx_end {
            return Ok(vec![]);
        }

        // restore insertion order
        let mut idxs_visible = self.idxs_by_distance[idx_start..idx_end].to_vec();
        idxs_visible.sort_unstable();

        Ok(idxs_visible
            .iter()
            .map(|&idx| self.elements[idx])
            .collect())
    }
}

use serde::Deserialize;

/// * `throttle_zones` - (m) Start and end of the route sections in which the driver holds the
/// throttle (empty for full throttle during the entire trip)
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DriverPars {
    #[serde(default)]
    pub throttle_zones: Vec<[f64; 2]>,
}

/// Driver decides about the accelerate intent depending on the position along the route.
#[derive(Debug)]
pub struct Driver {
    throttle_zones: Vec<[f64; 2]>,
}

impl Driver {
    pub fn new(driver_pars: &DriverPars) -> Driver {
        Driver {
            throttle_zones: driver_pars.throttle_zones.to_owned(),
        }
    }

    /// wants_throttle returns true if the inserted distance lies within a throttle zone (start
    /// included, end excluded).
    pub fn wants_throttle(&self, distance: f64) -> bool {
        self.throttle_zones.is_empty()
            || self
                .throttle_zones
                .iter()
                .any(|zone| zone[0] <= distance && distance < zone[1])
    }

    /// throttle_ahead returns true if any throttle zone lies at or beyond the inserted distance,
    /// i.e. if the driver would hold the throttle again somewhere further along the route.
    pub fn throttle_ahead(&self, distance: f64) -> bool {
        self.throttle_zones.is_empty()
            || self.throttle_zones.iter().any(|zone| distance < zone[1])
    }
}

use crate::core::road_surface::RoadSurface;
use std::fmt;
use std::fmt::Write;

/// TripOutcome states why the simulation of a trip ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripOutcome {
    GoalReached,
    Stalled,
    TimeLimit,
}

impl fmt::Display for TripOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TripOutcome::GoalReached => write!(f, "goal reached"),
            TripOutcome::Stalled => write!(f, "vehicle stalled"),
            TripOutcome::TimeLimit => write!(f, "time limit exceeded"),
        }
    }
}

/// TripSample is a snapshot of the vehicle and trip state at a specific point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSample {
    pub t: f64,
    pub distance: f64,
    pub speed: f64,
    pub fuel_level: f64,
    pub surface: RoadSurface,
}

/// TripResult contains all trip information that is required for post-processing the results.
#[derive(Debug, Clone)]
pub struct TripResult {
    pub outcome: TripOutcome,
    pub goal: f64,
    pub t_trip: f64,
    pub distance: f64,
    pub speed: f64,
    pub fuel_level: f64,
    pub no_elements_seen: usize,
    pub samples: Vec<TripSample>,
}

impl TripResult {
    /// get_avg_speed returns the average speed over the entire trip.
    pub fn get_avg_speed(&self) -> f64 {
        match (self.samples.first(), self.t_trip > 0.0) {
            (Some(first), true) => (self.distance - first.distance) / self.t_trip,
            _ => 0.0,
        }
    }

    /// get_summary_string creates the console summary of the trip including the sampled states.
    pub fn get_summary_string(&self) -> String {
        let mut tmp_string_samples = String::from("      t,  distance,    speed,     fuel, surface\n");

        for sample in self.samples.iter() {
            writeln!(
                &mut tmp_string_samples,
                "{:6.1}s, {:8.1}m, {:6.2}m/s, {:7.3}%, {}",
                sample.t, sample.distance, sample.speed, sample.fuel_level, sample.surface
            )
            .unwrap();
        }

        let mut tmp_string_summary = String::new();
        writeln!(&mut tmp_string_summary, "outcome:        {}", self.outcome).unwrap();
        writeln!(
            &mut tmp_string_summary,
            "trip time:      {:.3}s",
            self.t_trip
        )
        .unwrap();
        writeln!(
            &mut tmp_string_summary,
            "distance:       {:.1}m of {:.1}m",
            self.distance, self.goal
        )
        .unwrap();
        writeln!(
            &mut tmp_string_summary,
            "average speed:  {:.2}m/s",
            self.get_avg_speed()
        )
        .unwrap();
        writeln!(
            &mut tmp_string_summary,
            "final speed:    {:.2}m/s",
            self.speed
        )
        .unwrap();
        writeln!(
            &mut tmp_string_summary,
            "fuel left:      {:.3}%",
            self.fuel_level
        )
        .unwrap();
        write!(
            &mut tmp_string_summary,
            "elements seen:  {}",
            self.no_elements_seen
        )
        .unwrap();

        format!(
            "RESULT: Trip summary\n{}\n\nRESULT: Trip samples\n{}",
            tmp_string_summary, tmp_string_samples
        )
    }

    /// print_summary prints the trip summary to the console output.
    pub fn print_summary(&self) {
        println!("{}", self.get_summary_string());
    }
}

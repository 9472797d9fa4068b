use crate::core::course::Course;
use crate::core::driver::Driver;
use crate::core::road_surface::{get_surface_effect, RoadSurface};
use crate::core::trip::Trip;
use crate::core::vehicle::Vehicle;
use crate::interfaces::frontend_interface::TripState;
use crate::post::trip_result::{TripOutcome, TripResult, TripSample};
use crate::pre::read_sim_pars::SimPars;
use std::collections::HashSet;

/// Interval of the trip samples stored for post-processing.
const SAMPLE_INTERVAL: f64 = 1.0;

#[derive(Debug)]
pub struct TripSim {
    pub timestep_size: f64,
    pub cur_time: f64,
    t_max: f64,
    view_distance: f64,
    pub vehicle: Vehicle,
    pub trip: Trip,
    pub course: Course,
    driver: Driver,
    cur_surface: RoadSurface,
    element_ids_seen: HashSet<usize>,
    samples: Vec<TripSample>,
    t_next_sample: f64,
    outcome: Option<TripOutcome>,
}

impl TripSim {
    pub fn new(sim_pars: &SimPars, timestep_size: f64) -> anyhow::Result<TripSim> {
        let course = Course::new(&sim_pars.course_pars);

        // create the trip and place the elements of the course along it
        let mut trip = Trip::new(
            sim_pars.trip_pars.initial_distance,
            sim_pars.trip_pars.goal,
        );

        for element in course.get_elements().iter() {
            trip.add_element(*element)?;
        }

        let cur_surface = course.surface_at(trip.get_distance());

        let mut trip_sim = TripSim {
            timestep_size,
            cur_time: 0.0,
            t_max: sim_pars.trip_pars.t_max,
            view_distance: sim_pars.trip_pars.view_distance,
            vehicle: Vehicle::new(&sim_pars.vehicle_pars)?,
            trip,
            course,
            driver: Driver::new(&sim_pars.driver_pars),
            cur_surface,
            element_ids_seen: HashSet::new(),
            samples: vec![],
            t_next_sample: 0.0,
            outcome: None,
        };

        // elements next to the start position are seen before the first time step, and the start
        // can already be the goal
        trip_sim.remember_visible_elements()?;
        trip_sim.record_sample();
        trip_sim.check_finished();

        Ok(trip_sim)
    }

    // ---------------------------------------------------------------------------------------------
    // MAIN METHOD ---------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// The method simulates one time step. Execution order:
    /// 1. Set the accelerate intent of the vehicle according to the driver's throttle zones.
    /// 2. Determine the surface at the current position and the resulting effective drag.
    /// 3. Update speed and fuel of the vehicle.
    /// 4. Advance the trip distance using the speed after the vehicle update.
    /// 5. Increment the discretization variable (cur_time).
    /// 6. Remember the elements that are visible from the new position and store a sample if the
    /// sample interval has passed.
    /// 7. Check if the trip is finished (goal reached, vehicle stalled, or time limit exceeded).
    pub fn simulate_timestep(&mut self) -> anyhow::Result<()> {
        if self.outcome.is_some() {
            return Ok(());
        }

        // driver input
        if self.driver.wants_throttle(self.trip.get_distance()) {
            self.vehicle.accelerate();
        } else {
            self.vehicle.stop_accelerating();
        }

        // surface effect
        self.cur_surface = self.course.surface_at(self.trip.get_distance());
        let drag_eff =
            self.vehicle.get_drag() * get_surface_effect(self.cur_surface).drag_multiplier;

        // vehicle and trip progress
        self.vehicle
            .on_tick_with_drag(self.timestep_size, drag_eff)?;
        self.trip
            .update_distance(self.vehicle.get_speed() * self.timestep_size)?;
        self.cur_time += self.timestep_size;

        // bookkeeping
        self.remember_visible_elements()?;

        if self.cur_time >= self.t_next_sample - 1e-9 {
            self.record_sample();
        }

        self.check_finished();
        Ok(())
    }

    // ---------------------------------------------------------------------------------------------
    // METHODS -------------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    fn remember_visible_elements(&mut self) -> anyhow::Result<()> {
        for element in self.trip.get_visible_elements(self.view_distance)?.iter() {
            self.element_ids_seen.insert(element.get_id());
        }
        Ok(())
    }

    fn record_sample(&mut self) {
        self.samples.push(TripSample {
            t: self.cur_time,
            distance: self.trip.get_distance(),
            speed: self.vehicle.get_speed(),
            fuel_level: self.vehicle.get_fuel_level(),
            surface: self.course.surface_at(self.trip.get_distance()),
        });
        self.t_next_sample += SAMPLE_INTERVAL;
    }

    /// The method determines if the trip is finished. A vehicle is stalled if it stands still and
    /// does not accelerate anymore (no fuel left or no throttle at the current position), since its
    /// position cannot change afterwards.
    fn check_finished(&mut self) {
        if self.outcome.is_some() {
            return;
        }

        self.outcome = if self.trip.is_goal_reached() {
            Some(TripOutcome::GoalReached)
        } else if self.vehicle.get_speed() <= 0.0 && !self.driver_can_start() {
            Some(TripOutcome::Stalled)
        } else if self.cur_time >= self.t_max {
            Some(TripOutcome::TimeLimit)
        } else {
            None
        };

        if self.outcome == Some(TripOutcome::Stalled)
            && self.vehicle.get_fuel_level() > 0.0
            && self.driver.throttle_ahead(self.trip.get_distance())
        {
            tracing::warn!(
                "Vehicle stalled at {:.1}m before reaching the next throttle zone!",
                self.trip.get_distance()
            );
        }

        // make sure the final state is part of the samples
        if self.outcome.is_some()
            && self
                .samples
                .last()
                .map_or(true, |sample| sample.t < self.cur_time)
        {
            self.record_sample();
        }
    }

    /// driver_can_start returns true if the vehicle will accelerate in the next time step.
    fn driver_can_start(&self) -> bool {
        self.vehicle.get_fuel_level() > 0.0
            && self.driver.wants_throttle(self.trip.get_distance())
    }

    pub fn get_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn get_outcome(&self) -> Option<TripOutcome> {
        self.outcome
    }

    /// get_cur_surface returns the surface the last time step was driven on, i.e. the surface
    /// that determined the effective drag.
    pub fn get_cur_surface(&self) -> RoadSurface {
        self.cur_surface
    }

    /// get_trip_state returns the snapshot of the trip that is sent to a frontend.
    pub fn get_trip_state(&self) -> anyhow::Result<TripState> {
        Ok(TripState {
            t_trip: self.cur_time,
            speed: self.vehicle.get_speed(),
            fuel_level: self.vehicle.get_fuel_level(),
            distance: self.trip.get_distance(),
            goal: self.trip.get_goal(),
            goal_reached: self.trip.is_goal_reached(),
            surface: self.course.surface_at(self.trip.get_distance()),
            visible_elements: self.trip.get_visible_elements(self.view_distance)?,
        })
    }

    pub fn get_trip_result(&self) -> TripResult {
        TripResult {
            outcome: self.outcome.unwrap_or(TripOutcome::TimeLimit),
            goal: self.trip.get_goal(),
            t_trip: self.cur_time,
            distance: self.trip.get_distance(),
            speed: self.vehicle.get_speed(),
            fuel_level: self.vehicle.get_fuel_level(),
            no_elements_seen: self.element_ids_seen.len(),
            samples: self.samples.to_owned(),
        }
    }
}

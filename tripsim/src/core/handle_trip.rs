use crate::core::trip_sim::TripSim;
use crate::interfaces::frontend_interface::{TripState, MAX_FRONTEND_UPDATE_FREQUENCY};
use crate::post::trip_result::TripResult;
use crate::pre::read_sim_pars::SimPars;
use anyhow::Context;
use flume::Sender;
use std::thread::sleep;
use std::time::{Duration, Instant};

/// handle_trip creates and simulates a trip on the basis of the inserted parameters, and returns
/// the results for post-processing.
pub fn handle_trip(
    sim_pars: &SimPars,
    timestep_size: f64,
    print_debug: bool,
    tx: Option<&Sender<TripState>>,
    realtime_factor: f64,
) -> anyhow::Result<TripResult> {
    // create the trip simulation
    let mut trip_sim = TripSim::new(sim_pars, timestep_size)?;

    // simulate the trip -> execute simulation steps until the trip is finished
    match tx {
        None => {
            // NORMAL SIMULATION -------------------------------------------------------------------
            while !trip_sim.get_finished() {
                trip_sim.simulate_timestep()?;
            }
        }
        Some(tx) => {
            // REAL-TIME SIMULATION ----------------------------------------------------------------
            let mut t_trip_update_print = 0.0;
            let mut t_trip_update_frontend = f64::NEG_INFINITY;

            loop {
                let t_start = Instant::now();

                // simulate time step
                trip_sim.simulate_timestep()?;
                let finished = trip_sim.get_finished();

                // log status (with a maximum of 1 Hz)
                if trip_sim.cur_time > t_trip_update_print + 0.9999 {
                    tracing::info!(
                        "Simulating... Current trip time is {:.3}s, distance is {:.1}m, speed is \
                        {:.2}m/s",
                        trip_sim.cur_time,
                        trip_sim.trip.get_distance(),
                        trip_sim.vehicle.get_speed()
                    );
                    t_trip_update_print = trip_sim.cur_time;
                }

                // update frontend (the final state is always sent)
                if finished
                    || trip_sim.cur_time
                        > t_trip_update_frontend + 1.0 / MAX_FRONTEND_UPDATE_FREQUENCY - 0.001
                {
                    tx.send(trip_sim.get_trip_state()?)
                        .context("Failed to send trip state to frontend!")?;
                    t_trip_update_frontend = trip_sim.cur_time;
                }

                if finished {
                    break;
                }

                // sleep until time step is finished in real-time as well (calculation in ms)
                let t_sleep = (trip_sim.timestep_size * 1000.0 / realtime_factor) as i64
                    - t_start.elapsed().as_millis() as i64;

                if t_sleep > 0 {
                    sleep(Duration::from_millis(t_sleep as u64));
                } else {
                    tracing::warn!("Could not keep up with real-time!")
                }
            }
        }
    }

    // print debug information if indicated
    if print_debug {
        tracing::debug!(
            "Trip finished after {:.3}s ({:?}), {:.1}m remaining, {} elements on the course",
            trip_sim.cur_time,
            trip_sim.get_outcome(),
            trip_sim.trip.get_remaining_distance(),
            trip_sim.trip.get_elements().len()
        );
    }

    // return trip result
    Ok(trip_sim.get_trip_result())
}

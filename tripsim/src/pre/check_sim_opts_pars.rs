use crate::core::vehicle::FUEL_FULL;
use crate::pre::read_sim_pars::SimPars;
use crate::pre::sim_opts::SimOpts;
use anyhow::Context;
use helpers::general::{is_non_negative, is_within, InputValueError};

/// check_sim_opts assures that the inserted options are within reasonable limits and raises an
/// error if not.
pub fn check_sim_opts(sim_opts: &SimOpts) -> anyhow::Result<()> {
    if !is_within(sim_opts.timestep_size, 0.001, 1.0) {
        return Err(InputValueError).context(format!(
            "timestep_size is {:.3}s, which is not within the reasonable range of [0.001, 1.0]s!",
            sim_opts.timestep_size
        ));
    }

    if sim_opts.parfile_path.is_empty() {
        return Err(InputValueError).context("At least one parameter file must be inserted!");
    }

    if sim_opts.realtime && sim_opts.parfile_path.len() != 1 {
        return Err(InputValueError)
            .context("If realtime is activated, exactly one parameter file must be inserted!");
    }

    if sim_opts.realtime && !is_within(sim_opts.realtime_factor, 0.1, 100.0) {
        return Err(InputValueError).context(format!(
            "realtime_factor is {:.3}, which is not within the reasonable range of [0.1, 100.0]!",
            sim_opts.realtime_factor
        ));
    }

    Ok(())
}

/// check_sim_pars assures that the inserted parameters are within reasonable limits and raises an
/// error if not.
pub fn check_sim_pars(sim_pars: &SimPars) -> anyhow::Result<()> {
    // TRIP ----------------------------------------------------------------------------------------
    let trip_pars = &sim_pars.trip_pars;

    if !is_non_negative(trip_pars.initial_distance) {
        return Err(InputValueError).context(format!(
            "initial_distance must be non-negative, but is {:.1}m!",
            trip_pars.initial_distance
        ));
    }
    if !(trip_pars.goal > trip_pars.initial_distance && trip_pars.goal.is_finite()) {
        return Err(InputValueError).context(format!(
            "goal must be finite and greater than initial_distance, but is {:.1}m!",
            trip_pars.goal
        ));
    }
    if !is_non_negative(trip_pars.view_distance) {
        return Err(InputValueError).context(format!(
            "view_distance must be non-negative, but is {:.1}m!",
            trip_pars.view_distance
        ));
    }
    if !(trip_pars.t_max > 0.0) {
        return Err(InputValueError).context(format!(
            "t_max must be positive, but is {:.1}s!",
            trip_pars.t_max
        ));
    }

    // VEHICLE -------------------------------------------------------------------------------------
    let vehicle_pars = &sim_pars.vehicle_pars;

    if !(vehicle_pars.max_speed > 0.0) {
        return Err(InputValueError).context(format!(
            "max_speed must be positive, but is {:.2}m/s!",
            vehicle_pars.max_speed
        ));
    }
    if !is_within(vehicle_pars.initial_speed, 0.0, vehicle_pars.max_speed) {
        return Err(InputValueError).context(format!(
            "initial_speed is {:.2}m/s, which is not within the required range [0.0, max_speed]!",
            vehicle_pars.initial_speed
        ));
    }
    if !is_within(vehicle_pars.initial_fuel, 0.0, FUEL_FULL) {
        return Err(InputValueError).context(format!(
            "initial_fuel is {:.3}%, which is not within the required range [0.0, 100.0]%!",
            vehicle_pars.initial_fuel
        ));
    }
    if [
        vehicle_pars.acceleration,
        vehicle_pars.drag,
        vehicle_pars.fuel_consumption_rate,
    ]
    .iter()
    .any(|&x| !is_non_negative(x))
    {
        return Err(InputValueError)
            .context("acceleration, drag, and fuel_consumption_rate must be non-negative!");
    }

    // COURSE --------------------------------------------------------------------------------------
    if sim_pars
        .course_pars
        .surface_sections
        .iter()
        .any(|section| !is_non_negative(section.start))
    {
        return Err(InputValueError).context("A surface section starts at a negative distance!");
    }

    for (i, element_pars) in sim_pars.course_pars.elements.iter().enumerate() {
        if !is_non_negative(element_pars.distance) {
            return Err(InputValueError).context(format!(
                "Element {} is placed at a negative distance ({:.1}m)!",
                i, element_pars.distance
            ));
        }
        if !is_within(element_pars.horizontal_position, -1.0, 1.0) {
            return Err(InputValueError).context(format!(
                "horizontal_position of element {} is {:.2}, which is not within the required \
                range [-1.0, 1.0]!",
                i, element_pars.horizontal_position
            ));
        }
        if !is_non_negative(element_pars.size) {
            return Err(InputValueError)
                .context(format!("size of element {} must be non-negative!", i));
        }
    }

    // DRIVER --------------------------------------------------------------------------------------
    if sim_pars
        .driver_pars
        .throttle_zones
        .iter()
        .any(|zone| !(is_non_negative(zone[0]) && zone[0] <= zone[1]))
    {
        return Err(InputValueError).context(
            "A throttle zone must start at a non-negative distance and must not end before it \
            starts!",
        );
    }

    Ok(())
}

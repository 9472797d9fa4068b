mod console_frontend;

use anyhow::Context;
use clap::Parser;
use console_frontend::ConsoleFrontend;
use rayon::prelude::*;
use std::thread;
use std::time::Instant;
use tripsim::core::handle_trip::handle_trip;
use tripsim::post::trip_result::TripResult;
use tripsim::pre::check_sim_opts_pars::{check_sim_opts, check_sim_pars};
use tripsim::pre::read_elements::read_elements;
use tripsim::pre::read_sim_pars::{read_sim_pars, SimPars};
use tripsim::pre::sim_opts::SimOpts;

fn init_tracing(debug: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let default_level = if debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get simulation options from the command line arguments
    let sim_opts: SimOpts = SimOpts::parse();
    init_tracing(sim_opts.debug);
    check_sim_opts(&sim_opts)?;

    // read additional elements that are placed along every course
    let extra_elements = match &sim_opts.elementfile_path {
        Some(elementfile_path) => read_elements(elementfile_path)?,
        None => vec![],
    };

    // read and check simulation parameters
    let mut sim_pars_all: Vec<SimPars> = Vec::with_capacity(sim_opts.parfile_path.len());

    for parfile_path in sim_opts.parfile_path.iter() {
        let mut sim_pars = read_sim_pars(parfile_path)?;
        sim_pars
            .course_pars
            .elements
            .extend(extra_elements.iter().cloned());

        check_sim_pars(&sim_pars).context(format!(
            "Parameter file {} contains invalid parameters!",
            parfile_path.display()
        ))?;

        tracing::info!(
            "Simulating a {:.0}m trip from {} with a time step size of {:.3}s",
            sim_pars.trip_pars.goal - sim_pars.trip_pars.initial_distance,
            parfile_path.display(),
            sim_opts.timestep_size
        );
        sim_pars_all.push(sim_pars);
    }

    // EXECUTION -----------------------------------------------------------------------------------
    let trip_results: Vec<TripResult> = if !sim_opts.realtime {
        // NON-REAL-TIME CASE ----------------------------------------------------------------------
        let t_start = Instant::now();

        let trip_results = if sim_pars_all.len() == 1 {
            // SINGLE THREAD -----------------------------------------------------------------------
            vec![handle_trip(
                &sim_pars_all[0],
                sim_opts.timestep_size,
                sim_opts.debug,
                None,
                1.0,
            )?]
        } else {
            // MULTIPLE THREADS --------------------------------------------------------------------
            sim_pars_all
                .par_iter()
                .map(|sim_pars| {
                    handle_trip(sim_pars, sim_opts.timestep_size, sim_opts.debug, None, 1.0)
                })
                .collect::<anyhow::Result<Vec<TripResult>>>()?
        };

        tracing::info!(
            "Execution time (total): {}ms",
            t_start.elapsed().as_millis()
        );

        trip_results
    } else {
        // REAL-TIME CASE --------------------------------------------------------------------------
        // create channel for communication between the simulation and the console frontend
        let (tx, rx) = flume::unbounded();

        // create a separate thread for the simulation (executed in real-time) -> the sender is
        // dropped when the trip is finished, which ends the frontend loop
        let sim_pars_thread = sim_pars_all[0].clone();
        let sim_opts_thread = sim_opts.clone();

        let sim_thread = thread::spawn(move || {
            handle_trip(
                &sim_pars_thread,
                sim_opts_thread.timestep_size,
                sim_opts_thread.debug,
                Some(&tx),
                sim_opts_thread.realtime_factor,
            )
        });

        ConsoleFrontend::new(rx).run();

        let trip_result = sim_thread
            .join()
            .map_err(|_| anyhow::anyhow!("Simulation thread panicked!"))??;

        vec![trip_result]
    };

    // POST-PROCESSING -----------------------------------------------------------------------------
    // print results
    for (parfile_path, trip_result) in sim_opts.parfile_path.iter().zip(trip_results.iter()) {
        if trip_results.len() > 1 {
            println!("RESULT: Parameter file {}", parfile_path.display());
        }
        trip_result.print_summary();
    }

    Ok(())
}

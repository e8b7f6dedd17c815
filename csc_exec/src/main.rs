//! CSC path planner executable entry point.
//!
//! Reads a JSON planning request, plans the path and prints the JSON response to stdout. Planning
//! failures (no valid path, invalid radius etc.) are reported in the response rather than as a
//! process error, so the exit code only indicates whether the request could be processed at all.
//!
//! Logs and planning reports are written into a new session directory.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use log::info;
use std::fs::read_to_string;
use std::path::PathBuf;
use structopt::StructOpt;

// Internal
use csc_lib::{
    interface,
    nav::{PathPlanner, PathPlannerParams},
};
use plan_if::PlanRequest;
use util::{
    logger::{logger_init, verbosity_to_level},
    session::Session,
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Plan a circle-straight-circle path between two poses.
#[derive(Debug, StructOpt)]
#[structopt(name = "csc_exec")]
struct Opts {
    /// Path to the JSON request file.
    #[structopt(parse(from_os_str))]
    request: PathBuf,

    /// Planner parameter file, defaults to `params/csc_exec.toml` under the software root.
    #[structopt(short, long, parse(from_os_str))]
    params: Option<PathBuf>,

    /// Directory to create the session in, relative to the software root.
    #[structopt(long, default_value = "sessions")]
    sessions_dir: String,

    /// Increase the log verbosity, may be given more than once.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u64,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    // ---- EARLY INITIALISATION ----

    let session = Session::new("csc_exec", &opts.sessions_dir)
        .wrap_err("Failed to create the session")?;

    logger_init(verbosity_to_level(opts.verbose), &session)
        .wrap_err("Failed to initialise logging")?;

    info!("CSC Path Planner Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let params: PathPlannerParams = match opts.params {
        Some(ref path) => util::params::load_from_path(path),
        None => util::params::load("csc_exec.toml"),
    }
    .wrap_err("Could not load planner params")?;

    info!("Planner parameters loaded (ranking: {:?})", params.ranking);

    // ---- LOAD REQUEST ----

    let request_str = read_to_string(&opts.request)
        .wrap_err_with(|| format!("Could not read the request file {:?}", opts.request))?;
    let request: PlanRequest =
        serde_json::from_str(&request_str).wrap_err("Could not parse the planning request")?;

    // ---- PLAN ----

    let planner = PathPlanner::new(params);
    info!(
        "Simulating at {} m/s with a {} s step, footprint {:?}",
        planner.params().sim.speed_ms,
        planner.params().sim.time_step_s,
        planner.params().sim.footprint
    );
    let response = interface::handle_request(&planner, &request);

    if response.is_path() {
        info!("Planning succeeded");
    } else {
        info!("Planning failed");
    }

    let response_str = serde_json::to_string_pretty(&response)
        .map_err(|e| eyre!("Could not serialise the response: {}", e))?;
    println!("{}", response_str);

    // ---- SHUTDOWN ----

    session.exit();

    Ok(())
}

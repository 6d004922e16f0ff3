use tracing::info;

use crate::error::AppError;
use crate::init_config::InitConfig;
use crate::simulation::World;

pub mod clock;
pub mod command_loop;
pub mod logging;
pub mod simulation_loop;

/// Load `init_config.toml` (or defaults), run the headless loop and print the
/// final snapshot as JSON on stdout.
pub fn run() -> Result<(), AppError> {
    let init = InitConfig::load_default_or_builtin()?;
    logging::setup_logging(&init.run.log_level)?;

    let mut world = World::from_init_config(&init)?;
    info!(
        molecules = world.molecule_count(),
        dt = world.config().dt,
        ticks = init.run.ticks,
        "simulation ready"
    );

    let snapshot = simulation_loop::run_simulation_loop(&mut world, &init.run);

    #[cfg(feature = "profiling")]
    crate::PROFILER.lock().print_and_clear();

    let json = serde_json::to_string_pretty(&snapshot)?;
    println!("{}", json);
    Ok(())
}

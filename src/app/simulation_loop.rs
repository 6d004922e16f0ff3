use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use super::clock::FrameClock;
use super::command_loop::{self, CommandOutcome, SimCommand};
use crate::init_config::RunConfig;
use crate::profile_scope;
use crate::simulation::{World, WorldSnapshot};

/// Commands for tick `tick` (zero-based) of a scripted run.
pub fn commands_for_tick(tick: usize, elapsed_millis: u64, run: &RunConfig) -> Vec<SimCommand> {
    let mut commands = Vec::with_capacity(2);
    if run.spawn_every > 0 && tick % run.spawn_every == 0 {
        commands.push(SimCommand::Spawn);
    }
    commands.push(SimCommand::Tick { elapsed_millis });
    commands
}

/// Drive the world for `run.ticks` clock ticks and return the final state.
///
/// In realtime mode the loop sleeps between ticks and feeds the measured
/// elapsed time, so slow ticks produce more sub-steps. Otherwise every tick
/// reports exactly `run.tick_millis`.
pub fn run_simulation_loop(world: &mut World, run: &RunConfig) -> WorldSnapshot {
    let start = Instant::now();
    let mut clock = FrameClock::new(0);
    let mut capped_ticks = 0usize;

    for tick in 0..run.ticks {
        profile_scope!("simulation_loop");
        let elapsed_millis = if run.realtime {
            thread::sleep(Duration::from_millis(run.tick_millis));
            clock.tick(start.elapsed().as_millis() as u64)
        } else {
            run.tick_millis
        };

        for cmd in commands_for_tick(tick, elapsed_millis, run) {
            if let CommandOutcome::Stepped(report) = command_loop::handle_command(cmd, world) {
                if report.capped {
                    capped_ticks += 1;
                }
            }
        }

        if tick % 60 == 0 {
            info!(
                tick,
                frame = world.frame(),
                molecules = world.molecule_count(),
                kinetic_energy = world.kinetic_energy(),
                "progress"
            );
        }
    }

    info!(
        ticks = run.ticks,
        frames = world.frame(),
        molecules = world.molecule_count(),
        capped_ticks,
        "run finished"
    );
    world.snapshot()
}

use tracing::debug;

use crate::profile_scope;
use crate::simulation::{StepReport, World};

/// Events the outside world feeds into the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimCommand {
    /// Clock tick carrying the milliseconds since the previous tick
    Tick { elapsed_millis: u64 },
    /// Spawn trigger
    Spawn,
}

/// Outcome of one command, for logging by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Stepped(StepReport),
    Spawned(usize),
}

pub fn handle_command(cmd: SimCommand, world: &mut World) -> CommandOutcome {
    profile_scope!("command_handling");
    match cmd {
        SimCommand::Tick { elapsed_millis } => CommandOutcome::Stepped(world.step(elapsed_millis)),
        SimCommand::Spawn => {
            let added = world.spawn();
            debug!(added, "spawn trigger handled");
            CommandOutcome::Spawned(added)
        }
    }
}

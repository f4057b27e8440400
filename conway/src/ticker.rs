// ticker.rs - Background simulation clock

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::engine::{Engine, Tick};

/// Spawns a task on the current tokio runtime that calls [`Engine::tick`]
/// every `period`.
///
/// `on_tick` runs after the engine lock has been released, so it may call
/// back into the engine or into the host toolkit. It is skipped for
/// [`Tick::Paused`]. The task runs until it is aborted or the runtime shuts
/// down.
pub fn spawn_ticker<F>(engine: Engine, period: Duration, on_tick: F) -> JoinHandle<()>
where
    F: Fn(Tick) + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;
            let outcome = engine.tick();
            if outcome != Tick::Paused {
                on_tick(outcome);
            }
        }
    })
}

//! Periodic durability checkpoint.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::ledger::Ledger;

/// Default checkpoint interval: 30 seconds.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// Spawn the auto-save task.
///
/// Every `period` the task flushes the ledger if in-memory state is ahead of
/// the last successful save. With save-on-every-mutation in effect this is
/// normally a no-op; its real job is retrying after a failed save. The task
/// runs until the handle is aborted or the runtime shuts down.
pub fn spawn_autosave(ledger: Arc<Ledger>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; skip it.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            if !ledger.is_dirty() {
                continue;
            }

            match ledger.flush().await {
                Ok(()) => tracing::debug!("periodic checkpoint complete"),
                Err(e) => {
                    tracing::warn!(error = %e, "periodic checkpoint failed, will retry");
                }
            }
        }
    })
}

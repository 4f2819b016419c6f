//! Periodic background reload of the selected partition.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::manager::EmployeeManager;

/// Running poll loop; dropping the handle stops it
pub struct PollHandle {
    task: JoinHandle<()>,
}

impl PollHandle {
    pub fn stop(self) {
        self.task.abort();
    }

    /// True once the loop exited, e.g. after a partition switch
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Reload the manager's current partition every `every`
///
/// Ticks are skipped while an edit is in flight. The loop ends when the
/// manager switches to another partition; start a new poller for it.
pub fn start_polling(manager: EmployeeManager, every: Duration) -> PollHandle {
    let task = tokio::spawn(async move {
        let partition = manager.partition().await;
        let mut ticker = interval_at(Instant::now() + every, every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        log::debug!("Polling {} every {:?}", partition, every);

        loop {
            ticker.tick().await;
            if manager.partition().await != partition {
                log::debug!("Partition changed, stopping poll of {}", partition);
                break;
            }
            match manager.refresh().await {
                Ok(true) => {}
                Ok(false) => log::debug!("Poll of {} skipped", partition),
                Err(e) => log::warn!("Poll of {} failed: {}", partition, e),
            }
        }
    });

    PollHandle { task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Employee, Restaurant};
    use crate::repository::testing::FlakyStore;
    use crate::repository::{MemoryStore, RecordStore};
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    const TICK: Duration = Duration::from_millis(20);

    #[tokio::test]
    async fn test_poll_picks_up_external_changes() {
        let store = Arc::new(FlakyStore::new(MemoryStore::new()));
        let manager = EmployeeManager::new(store.clone(), Restaurant::Dickens, Duration::from_secs(5));
        manager.reload().await.unwrap();

        let handle = start_polling(manager.clone(), TICK);
        store
            .inner
            .save(Restaurant::Dickens, &[Employee::new(1, "Удалых")])
            .await
            .unwrap();

        let mut seen = false;
        for _ in 0..50 {
            if manager.employees().await.len() == 1 {
                seen = true;
                break;
            }
            tokio::time::sleep(TICK).await;
        }
        assert!(seen);
        handle.stop();
    }

    #[tokio::test]
    async fn test_poll_ends_on_partition_switch() {
        let store = Arc::new(FlakyStore::new(MemoryStore::seeded()));
        let manager = EmployeeManager::new(store.clone(), Restaurant::Port, Duration::from_secs(5));
        manager.reload().await.unwrap();

        let handle = start_polling(manager.clone(), TICK);
        manager.select_partition(Restaurant::Bar).await.unwrap();

        let mut finished = false;
        for _ in 0..50 {
            if handle.is_finished() {
                finished = true;
                break;
            }
            tokio::time::sleep(TICK).await;
        }
        assert!(finished);
    }

    #[tokio::test]
    async fn test_stopped_poll_does_not_load() {
        let store = Arc::new(FlakyStore::new(MemoryStore::new()));
        let manager = EmployeeManager::new(store.clone(), Restaurant::Bar, Duration::from_secs(5));

        let handle = start_polling(manager, TICK);
        handle.stop();
        tokio::time::sleep(TICK * 4).await;
        assert_eq!(store.loads.load(Ordering::SeqCst), 0);
    }
}

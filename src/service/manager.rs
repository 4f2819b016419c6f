//! Employee Lifecycle Manager
//!
//! Holds the selected partition's collection and applies user edits
//! optimistically: the change is visible locally at once, then committed to
//! the record store. A failed commit is never retried; the partition is
//! reloaded from the store instead, dropping the uncommitted edit.
//!
//! Reloads and edits are ordered through an edit epoch. A guarded reload
//! (`refresh`, used by the poller) remembers the epoch it started at and
//! throws its result away if any edit began or is still in flight, so a poll
//! can never revert an edit before that edit's own commit resolves.
//!
//! Authoritative reloads (explicit, or recovery after a failed commit) always
//! apply, but the local version of every employee with a commit still in
//! flight is laid back over the loaded data. If such a reload ran while
//! commits were pending, the partition is loaded once more after the last of
//! them resolves.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::domain::resolver::set_condition;
use crate::domain::{Condition, DomainError, DomainResult, Employee, ItemKind, Month, Restaurant, Size, Uniform};
use crate::repository::RecordStore;
use super::stats::{DashboardStats, SizeDemandMode};

/// A rename typed locally but not yet committed
#[derive(Debug, Clone)]
struct PendingName {
    /// Name as last seen in the store
    stored: String,
    current: String,
}

/// Local uniform of an employee whose commits have not resolved
#[derive(Debug, Clone)]
struct InFlightEdit {
    commits: usize,
    uniform: Uniform,
}

struct ManagerState {
    partition: Restaurant,
    employees: Vec<Employee>,
    epoch: u64,
    in_flight: usize,
    pending_names: HashMap<u32, PendingName>,
    in_flight_edits: HashMap<u32, InFlightEdit>,
    /// A reload was applied while commits were pending
    stale: bool,
}

impl ManagerState {
    fn find_mut(&mut self, id: u32) -> DomainResult<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Employee {} not found", id)))
    }

    /// Replace the collection with store data, keeping uncommitted renames
    /// and edits still in flight
    fn apply_loaded(&mut self, mut employees: Vec<Employee>) {
        self.pending_names.retain(|id, _| employees.iter().any(|e| e.id == *id));
        for emp in employees.iter_mut() {
            if let Some(pending) = self.pending_names.get_mut(&emp.id) {
                pending.stored = emp.name.clone();
                emp.name = pending.current.clone();
            }
            if let Some(edit) = self.in_flight_edits.get(&emp.id) {
                emp.uniform = edit.uniform.clone();
            }
        }
        self.employees = employees;
        if self.in_flight > 0 {
            self.stale = true;
        }
    }

    /// Record the local uniform of an edit about to be committed
    fn start_commit(&mut self, employee: &Employee) {
        let edit = self.in_flight_edits.entry(employee.id).or_insert(InFlightEdit {
            commits: 0,
            uniform: employee.uniform.clone(),
        });
        edit.commits += 1;
        edit.uniform = employee.uniform.clone();
        self.in_flight += 1;
        self.epoch += 1;
    }

    /// Settle one commit; returns whether a follow-up reload is due
    fn finish_commit(&mut self, id: Option<u32>, ok: bool) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if let Some(id) = id {
            if ok {
                if let Some(edit) = self.in_flight_edits.get_mut(&id) {
                    edit.commits = edit.commits.saturating_sub(1);
                    if edit.commits == 0 {
                        self.in_flight_edits.remove(&id);
                    }
                }
            } else {
                // The recovery reload drops this employee's local version
                self.in_flight_edits.remove(&id);
            }
        }
        if self.in_flight == 0 && self.stale {
            self.stale = false;
            return true;
        }
        false
    }
}

/// Store-facing copy of an employee, without uncommitted renames
fn committed_view(state: &ManagerState, employee: &Employee) -> Employee {
    let mut employee = employee.clone();
    if let Some(pending) = state.pending_names.get(&employee.id) {
        employee.name = pending.stored.clone();
    }
    employee
}

#[derive(Clone)]
pub struct EmployeeManager {
    store: Arc<dyn RecordStore>,
    state: Arc<Mutex<ManagerState>>,
    timeout: Duration,
}

impl EmployeeManager {
    /// Manager for `partition` with an empty collection; call `reload` to fill it
    pub fn new(store: Arc<dyn RecordStore>, partition: Restaurant, timeout: Duration) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(ManagerState {
                partition,
                employees: Vec::new(),
                epoch: 0,
                in_flight: 0,
                pending_names: HashMap::new(),
                in_flight_edits: HashMap::new(),
                stale: false,
            })),
            timeout,
        }
    }

    pub async fn partition(&self) -> Restaurant {
        self.state.lock().await.partition
    }

    /// Snapshot of the local collection
    pub async fn employees(&self) -> Vec<Employee> {
        self.state.lock().await.employees.clone()
    }

    pub async fn employee(&self, id: u32) -> Option<Employee> {
        self.state.lock().await.employees.iter().find(|e| e.id == id).cloned()
    }

    /// Number of commits not yet resolved
    pub async fn in_flight(&self) -> usize {
        self.state.lock().await.in_flight
    }

    pub async fn stats(&self, month: Month, mode: SizeDemandMode) -> DashboardStats {
        let state = self.state.lock().await;
        DashboardStats::compute(&state.employees, month, mode)
    }

    /// Bound a store call by the configured timeout
    async fn call<T>(&self, op: impl Future<Output = DomainResult<T>>) -> DomainResult<T> {
        tokio::time::timeout(self.timeout, op)
            .await
            .map_err(|_| DomainError::Store(format!("Store call timed out after {:?}", self.timeout)))?
    }

    /// Switch to another partition and load it
    pub async fn select_partition(&self, partition: Restaurant) -> DomainResult<()> {
        {
            let mut state = self.state.lock().await;
            if state.partition != partition {
                state.partition = partition;
                state.employees.clear();
                state.pending_names.clear();
                state.in_flight_edits.clear();
                state.stale = false;
                state.epoch += 1;
            }
        }
        log::info!("Switched to partition {}", partition);
        self.reload().await
    }

    /// Load the partition from the store, replacing local state
    ///
    /// On a read failure the last snapshot is kept and the error returned.
    pub async fn reload(&self) -> DomainResult<()> {
        self.load_partition(false).await.map(|_| ())
    }

    /// Reload unless an edit is in flight or started meanwhile
    ///
    /// Returns whether the loaded data was applied.
    pub async fn refresh(&self) -> DomainResult<bool> {
        self.load_partition(true).await
    }

    async fn load_partition(&self, guarded: bool) -> DomainResult<bool> {
        let (partition, epoch) = {
            let state = self.state.lock().await;
            if guarded && state.in_flight > 0 {
                return Ok(false);
            }
            (state.partition, state.epoch)
        };

        let result = self.call(self.store.load(partition)).await;

        let mut state = self.state.lock().await;
        if state.partition != partition {
            return Ok(false);
        }
        match result {
            Ok(employees) => {
                if guarded && (state.epoch != epoch || state.in_flight > 0) {
                    log::debug!("Discarding stale reload of {}", partition);
                    return Ok(false);
                }
                state.apply_loaded(employees);
                Ok(true)
            }
            Err(e) => {
                log::warn!(
                    "Failed to load {}, keeping {} cached employees: {}",
                    partition,
                    state.employees.len(),
                    e
                );
                Err(e)
            }
        }
    }

    /// Full reload after a failed write; its own failure is only logged
    async fn recover(&self) {
        if let Err(e) = self.reload().await {
            log::error!("Recovery reload failed: {}", e);
        }
    }

    /// Apply `edit` to one employee locally and mark a commit in flight
    async fn begin_edit<F>(&self, id: u32, edit: F) -> DomainResult<(Restaurant, Employee)>
    where
        F: FnOnce(&mut Employee) -> DomainResult<()>,
    {
        let mut state = self.state.lock().await;
        let employee = state.find_mut(id)?;
        edit(employee)?;
        let employee = employee.clone();

        let committed = committed_view(&state, &employee);
        state.start_commit(&employee);
        Ok((state.partition, committed))
    }

    /// Commit one employee; on failure reload and return the error
    async fn commit(&self, partition: Restaurant, employee: Employee) -> DomainResult<()> {
        let result = self.call(self.store.update(partition, &employee)).await;
        let resync = self.state.lock().await.finish_commit(Some(employee.id), result.is_ok());

        if let Err(e) = &result {
            log::warn!("Failed to save employee {} in {}: {}", employee.id, partition, e);
            self.recover().await;
        } else if resync {
            self.resync().await;
        }
        result
    }

    /// Reload after commits that overlapped a reload have all resolved
    async fn resync(&self) {
        log::debug!("Reloading after overlapping commits settled");
        if let Err(e) = self.reload().await {
            log::warn!("Reload after overlapping commits failed: {}", e);
        }
    }

    /// Update the name locally only; `commit_name` persists it
    pub async fn rename_local(&self, id: u32, name: &str) -> DomainResult<()> {
        let mut state = self.state.lock().await;
        let employee = state.find_mut(id)?;
        let stored = employee.name.clone();
        employee.name = name.to_string();

        state
            .pending_names
            .entry(id)
            .or_insert(PendingName {
                stored,
                current: String::new(),
            })
            .current = name.to_string();
        state.epoch += 1;
        Ok(())
    }

    /// Persist a pending rename (on blur/commit)
    pub async fn commit_name(&self, id: u32) -> DomainResult<()> {
        let (partition, employee) = {
            let mut state = self.state.lock().await;
            let Some(pending) = state.pending_names.get(&id).cloned() else {
                return Ok(());
            };
            let mut employee = state.find_mut(id)?.clone();
            employee.name = pending.current;
            state.epoch += 1;
            state.in_flight += 1;
            (state.partition, employee)
        };

        let result = self.call(self.store.update(partition, &employee)).await;

        let resync = {
            let mut state = self.state.lock().await;
            let resync = state.finish_commit(None, result.is_ok());
            match &result {
                Ok(()) => {
                    // Keep the entry if the name changed again meanwhile
                    let settled = state
                        .pending_names
                        .get(&id)
                        .map(|p| p.current == employee.name)
                        .unwrap_or(false);
                    if settled {
                        state.pending_names.remove(&id);
                    } else if let Some(pending) = state.pending_names.get_mut(&id) {
                        pending.stored = employee.name.clone();
                    }
                }
                Err(_) => {
                    state.pending_names.remove(&id);
                }
            }
            resync
        };

        if let Err(e) = &result {
            log::warn!("Failed to rename employee {}: {}", id, e);
            self.recover().await;
        } else if resync {
            self.resync().await;
        }
        result
    }

    /// Record a condition for one item and month
    pub async fn set_item_condition(
        &self,
        id: u32,
        kind: ItemKind,
        month: Month,
        condition: Condition,
        issue_date: Option<&str>,
    ) -> DomainResult<()> {
        let (partition, employee) = self
            .begin_edit(id, |emp| {
                let item = emp.uniform.get_mut(kind);
                *item = set_condition(item, month, condition, issue_date);
                Ok(())
            })
            .await?;
        self.commit(partition, employee).await
    }

    /// Change an item's size; the size must belong to the item's kind
    pub async fn set_item_size(&self, id: u32, kind: ItemKind, size: Size) -> DomainResult<()> {
        if !kind.accepts(size) {
            return Err(DomainError::InvalidInput(format!(
                "Size {} is not valid for {}",
                size.as_str(),
                kind.as_str()
            )));
        }

        let (partition, employee) = self
            .begin_edit(id, |emp| {
                emp.uniform.get_mut(kind).size = size;
                Ok(())
            })
            .await?;
        self.commit(partition, employee).await
    }

    /// Create an employee in the store and append it on success
    pub async fn add_employee(&self, default_name: &str) -> DomainResult<Employee> {
        let partition = self.partition().await;

        let employee = match self.call(self.store.create(partition, default_name)).await {
            Ok(employee) => employee,
            Err(e) => {
                log::warn!("Failed to add employee to {}: {}", partition, e);
                return Err(e);
            }
        };

        let mut state = self.state.lock().await;
        if state.partition == partition && !state.employees.iter().any(|e| e.id == employee.id) {
            state.employees.push(employee.clone());
            state.epoch += 1;
        }
        log::info!("Added employee {} to {}", employee.id, partition);
        Ok(employee)
    }

    /// Delete an employee in the store; remove it locally only on success
    pub async fn remove_employee(&self, id: u32) -> DomainResult<()> {
        let partition = {
            let state = self.state.lock().await;
            if !state.employees.iter().any(|e| e.id == id) {
                return Err(DomainError::NotFound(format!("Employee {} not found", id)));
            }
            state.partition
        };

        if let Err(e) = self.call(self.store.delete(partition, id)).await {
            log::warn!("Failed to delete employee {} from {}: {}", id, partition, e);
            self.recover().await;
            return Err(e);
        }

        let mut state = self.state.lock().await;
        if state.partition == partition {
            state.employees.retain(|e| e.id != id);
            state.pending_names.remove(&id);
            state.epoch += 1;
        }
        log::info!("Removed employee {} from {}", id, partition);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resolver::{issue_date, resolve};
    use crate::repository::testing::{FailingStore, FlakyStore};
    use crate::repository::MemoryStore;
    use async_trait::async_trait;
    use std::sync::atomic::Ordering;
    use tokio::sync::Notify;

    const TIMEOUT: Duration = Duration::from_secs(5);

    async fn setup() -> (Arc<FlakyStore>, EmployeeManager) {
        let store = Arc::new(FlakyStore::new(MemoryStore::seeded()));
        let manager = EmployeeManager::new(store.clone(), Restaurant::Port, TIMEOUT);
        manager.reload().await.unwrap();
        (store, manager)
    }

    async fn stored(store: &FlakyStore, id: u32) -> Employee {
        store
            .inner
            .load(Restaurant::Port)
            .await
            .unwrap()
            .into_iter()
            .find(|e| e.id == id)
            .unwrap()
    }

    async fn wait_for_in_flight(manager: &EmployeeManager, n: usize) {
        for _ in 0..200 {
            if manager.in_flight().await == n {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("in-flight count never reached {}", n);
    }

    #[tokio::test]
    async fn test_reload_loads_partition() {
        let (_, manager) = setup().await;
        assert_eq!(manager.employees().await.len(), 9);

        manager.select_partition(Restaurant::Bar).await.unwrap();
        assert_eq!(manager.partition().await, Restaurant::Bar);
        assert!(manager.employees().await.is_empty());
    }

    #[tokio::test]
    async fn test_set_condition_persists() {
        let (store, manager) = setup().await;
        manager
            .set_item_condition(7, ItemKind::Jacket, Month::March, Condition::NeedsReplacement, Some("2024-03-01"))
            .await
            .unwrap();

        let local = manager.employee(7).await.unwrap();
        assert_eq!(resolve(local.item(ItemKind::Jacket), Month::March), Some(Condition::NeedsReplacement));

        let remote = stored(&store, 7).await;
        assert_eq!(issue_date(remote.item(ItemKind::Jacket), Month::March), Some("2024-03-01"));
        assert_eq!(manager.in_flight().await, 0);
    }

    #[tokio::test]
    async fn test_failed_commit_reverts_to_store() {
        let (store, manager) = setup().await;
        store.set_fail_writes(true);

        let result = manager
            .set_item_condition(8, ItemKind::Tshirt, Month::April, Condition::Bad, None)
            .await;
        assert!(matches!(result, Err(DomainError::Store(_))));

        let local = manager.employee(8).await.unwrap();
        assert_eq!(resolve(local.item(ItemKind::Tshirt), Month::April), None);
        assert_eq!(manager.in_flight().await, 0);
    }

    #[tokio::test]
    async fn test_invalid_size_rejected() {
        let (store, manager) = setup().await;
        let result = manager.set_item_size(9, ItemKind::Pants, Size::Xl).await;
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
        assert_eq!(stored(&store, 9).await.item(ItemKind::Pants).size, Size::Two);

        manager.set_item_size(9, ItemKind::Pants, Size::Three).await.unwrap();
        assert_eq!(stored(&store, 9).await.item(ItemKind::Pants).size, Size::Three);
    }

    #[tokio::test]
    async fn test_edit_missing_employee() {
        let (_, manager) = setup().await;
        let result = manager.set_item_size(999, ItemKind::Tshirt, Size::S).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert_eq!(manager.in_flight().await, 0);
    }

    #[tokio::test]
    async fn test_rename_is_local_until_commit() {
        let (store, manager) = setup().await;
        manager.rename_local(11, "Ж").await.unwrap();
        manager.rename_local(11, "Живулина А.").await.unwrap();

        assert_eq!(manager.employee(11).await.unwrap().name, "Живулина А.");
        assert_eq!(stored(&store, 11).await.name, "Живулина");

        manager.commit_name(11).await.unwrap();
        assert_eq!(stored(&store, 11).await.name, "Живулина А.");
    }

    #[tokio::test]
    async fn test_condition_commit_does_not_leak_pending_name() {
        let (store, manager) = setup().await;
        manager.rename_local(13, "Лос").await.unwrap();
        manager
            .set_item_condition(13, ItemKind::Badge, Month::May, Condition::Good, None)
            .await
            .unwrap();

        assert_eq!(stored(&store, 13).await.name, "Лосев");
        assert_eq!(manager.employee(13).await.unwrap().name, "Лос");
    }

    #[tokio::test]
    async fn test_failed_rename_is_discarded() {
        let (store, manager) = setup().await;
        manager.rename_local(14, "Typo").await.unwrap();
        store.set_fail_writes(true);

        assert!(manager.commit_name(14).await.is_err());
        assert_eq!(manager.employee(14).await.unwrap().name, "Коньшин");
    }

    #[tokio::test]
    async fn test_pending_rename_survives_reload() {
        let (_, manager) = setup().await;
        manager.rename_local(15, "Мегрел").await.unwrap();
        manager.reload().await.unwrap();
        assert_eq!(manager.employee(15).await.unwrap().name, "Мегрел");
    }

    #[tokio::test]
    async fn test_add_employee_increasing_ids() {
        let (_, manager) = setup().await;
        let first = manager.add_employee("Новый сотрудник").await.unwrap();
        let second = manager.add_employee("Новый сотрудник").await.unwrap();
        assert_eq!(first.id, 16);
        assert!(second.id > first.id);
        assert_eq!(manager.employees().await.len(), 11);
    }

    #[tokio::test]
    async fn test_add_employee_failure_leaves_collection() {
        let (store, manager) = setup().await;
        store.set_fail_writes(true);
        assert!(manager.add_employee("Новый сотрудник").await.is_err());
        assert_eq!(manager.employees().await.len(), 9);
    }

    #[tokio::test]
    async fn test_remove_employee() {
        let (store, manager) = setup().await;
        manager.remove_employee(6).await.unwrap();
        assert!(manager.employee(6).await.is_none());
        assert_eq!(store.inner.load(Restaurant::Port).await.unwrap().len(), 8);

        store.set_fail_writes(true);
        let loads = store.loads.load(Ordering::SeqCst);
        assert!(matches!(manager.remove_employee(6).await, Err(DomainError::NotFound(_))));
        assert_eq!(manager.employees().await.len(), 8);
        assert_eq!(store.loads.load(Ordering::SeqCst), loads);
    }

    /// Rejects commits for one employee and holds commits for another
    /// until released
    struct SplitStore {
        inner: MemoryStore,
        rejected: u32,
        held: u32,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl RecordStore for SplitStore {
        async fn load(&self, partition: Restaurant) -> DomainResult<Vec<Employee>> {
            self.inner.load(partition).await
        }

        async fn save(&self, partition: Restaurant, employees: &[Employee]) -> DomainResult<()> {
            self.inner.save(partition, employees).await
        }

        async fn create(&self, partition: Restaurant, name: &str) -> DomainResult<Employee> {
            self.inner.create(partition, name).await
        }

        async fn delete(&self, partition: Restaurant, id: u32) -> DomainResult<()> {
            self.inner.delete(partition, id).await
        }

        async fn update(&self, partition: Restaurant, employee: &Employee) -> DomainResult<()> {
            if employee.id == self.rejected {
                return Err(DomainError::Store("rejected".into()));
            }
            if employee.id == self.held {
                self.release.notified().await;
            }
            self.inner.update(partition, employee).await
        }
    }

    #[tokio::test]
    async fn test_failed_commit_keeps_other_in_flight_edit() {
        let release = Arc::new(Notify::new());
        let store = Arc::new(SplitStore {
            inner: MemoryStore::seeded(),
            rejected: 1,
            held: 6,
            release: release.clone(),
        });
        let manager = EmployeeManager::new(store.clone(), Restaurant::Port, TIMEOUT);
        manager.reload().await.unwrap();

        let editor = manager.clone();
        let held = tokio::spawn(async move {
            editor
                .set_item_condition(6, ItemKind::Jacket, Month::June, Condition::Bad, None)
                .await
        });
        wait_for_in_flight(&manager, 1).await;

        let rejected = manager
            .set_item_condition(1, ItemKind::Tshirt, Month::June, Condition::Good, None)
            .await;
        assert!(matches!(rejected, Err(DomainError::Store(_))));
        assert_eq!(manager.in_flight().await, 1);

        let reverted = manager.employee(1).await.unwrap();
        assert_eq!(resolve(reverted.item(ItemKind::Tshirt), Month::June), None);
        let pending = manager.employee(6).await.unwrap();
        assert_eq!(resolve(pending.item(ItemKind::Jacket), Month::June), Some(Condition::Bad));

        release.notify_one();
        held.await.unwrap().unwrap();

        let local = manager.employee(6).await.unwrap();
        assert_eq!(resolve(local.item(ItemKind::Jacket), Month::June), Some(Condition::Bad));
        let stored = store.inner.load(Restaurant::Port).await.unwrap();
        let stored = stored.iter().find(|e| e.id == 6).unwrap();
        assert_eq!(resolve(stored.item(ItemKind::Jacket), Month::June), Some(Condition::Bad));
        assert_eq!(manager.in_flight().await, 0);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_snapshot() {
        let (store, manager) = setup().await;
        store.fail_reads.store(true, Ordering::SeqCst);
        assert!(manager.reload().await.is_err());
        assert_eq!(manager.employees().await.len(), 9);
    }

    #[tokio::test]
    async fn test_unreachable_store_starts_empty() {
        let manager = EmployeeManager::new(Arc::new(FailingStore), Restaurant::Bar, TIMEOUT);
        assert!(manager.reload().await.is_err());
        assert!(manager.employees().await.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_does_not_revert_in_flight_edit() {
        let gate = Arc::new(Notify::new());
        let store = Arc::new(FlakyStore::gated(MemoryStore::seeded(), gate.clone()));
        let manager = EmployeeManager::new(store.clone(), Restaurant::Port, TIMEOUT);
        manager.reload().await.unwrap();

        let editor = manager.clone();
        let edit = tokio::spawn(async move {
            editor
                .set_item_condition(1, ItemKind::Pants, Month::June, Condition::Good, None)
                .await
        });
        wait_for_in_flight(&manager, 1).await;

        assert!(!manager.refresh().await.unwrap());
        let local = manager.employee(1).await.unwrap();
        assert_eq!(resolve(local.item(ItemKind::Pants), Month::June), Some(Condition::Good));

        gate.notify_one();
        edit.await.unwrap().unwrap();
        assert!(manager.refresh().await.unwrap());
        let local = manager.employee(1).await.unwrap();
        assert_eq!(resolve(local.item(ItemKind::Pants), Month::June), Some(Condition::Good));
    }

    #[tokio::test]
    async fn test_store_timeout_is_store_error() {
        let gate = Arc::new(Notify::new());
        let store = Arc::new(FlakyStore::gated(MemoryStore::seeded(), gate));
        let manager = EmployeeManager::new(store, Restaurant::Port, Duration::from_millis(50));
        manager.reload().await.unwrap();

        let result = manager
            .set_item_condition(1, ItemKind::Tshirt, Month::July, Condition::Bad, None)
            .await;
        assert!(matches!(result, Err(DomainError::Store(_))));
        let local = manager.employee(1).await.unwrap();
        assert_eq!(resolve(local.item(ItemKind::Tshirt), Month::July), None);
    }
}

//! Synced Store
//!
//! Composite of a local store and a remote one. The local store is the
//! authoritative cache: every write lands there first and is then queued for
//! the remote. A single background worker drains the queue in order, so the
//! remote sees writes in the order they were made. Remote failures are
//! logged and never retried.
//!
//! The remote may hand out a different id than the local store did for the
//! same employee. The worker remembers each such pair and rewrites later
//! updates and deletes to the remote id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Mutex};

use crate::domain::{next_id, DomainError, DomainResult, Employee, Restaurant};
use super::traits::RecordStore;

/// Where `load` reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadPolicy {
    /// Local store only
    #[default]
    LocalFirst,
    /// Remote when reachable and non-empty (cached locally), else local
    RemoteFirst,
}

/// Local id to remote id, per partition
type RemoteIds = Arc<Mutex<HashMap<(Restaurant, u32), u32>>>;

enum SyncJob {
    Save(Restaurant, Vec<Employee>),
    Create {
        partition: Restaurant,
        local_id: u32,
        name: String,
    },
    Update(Restaurant, Employee),
    Delete(Restaurant, u32),
    Flush(oneshot::Sender<()>),
}

pub struct SyncedStore {
    local: Arc<dyn RecordStore>,
    remote: Arc<dyn RecordStore>,
    policy: ReadPolicy,
    remote_ids: RemoteIds,
    jobs: mpsc::UnboundedSender<SyncJob>,
}

impl SyncedStore {
    /// Must be called inside a tokio runtime; the sync worker starts here
    pub fn new(local: Arc<dyn RecordStore>, remote: Arc<dyn RecordStore>, policy: ReadPolicy) -> Self {
        let remote_ids = RemoteIds::default();
        let (jobs, queue) = mpsc::unbounded_channel();
        tokio::spawn(run_sync_worker(remote.clone(), remote_ids.clone(), queue));

        Self {
            local,
            remote,
            policy,
            remote_ids,
            jobs,
        }
    }

    pub fn policy(&self) -> ReadPolicy {
        self.policy
    }

    /// Push the whole local partition to the remote and wait for the result
    pub async fn push(&self, partition: Restaurant) -> DomainResult<()> {
        self.flush().await?;
        let employees = self.local.load(partition).await?;
        let count = employees.len();
        save_remote(self.remote.as_ref(), &self.remote_ids, partition, employees).await?;
        log::info!("Pushed {} employees of {} to remote", count, partition);
        Ok(())
    }

    fn enqueue(&self, job: SyncJob) {
        if self.jobs.send(job).is_err() {
            log::warn!("Remote sync worker stopped, write kept locally only");
        }
    }
}

async fn remote_id(ids: &RemoteIds, partition: Restaurant, id: u32) -> u32 {
    ids.lock().await.get(&(partition, id)).copied().unwrap_or(id)
}

async fn to_remote_ids(ids: &RemoteIds, partition: Restaurant, mut employees: Vec<Employee>) -> Vec<Employee> {
    let ids = ids.lock().await;
    for emp in employees.iter_mut() {
        if let Some(remote) = ids.get(&(partition, emp.id)) {
            emp.id = *remote;
        }
    }
    employees
}

/// Replace the remote partition, creating rows the remote has not seen
/// first so their remote ids are known
async fn save_remote(
    remote: &dyn RecordStore,
    ids: &RemoteIds,
    partition: Restaurant,
    employees: Vec<Employee>,
) -> DomainResult<()> {
    let present: HashSet<u32> = remote.load(partition).await?.iter().map(|e| e.id).collect();
    for emp in &employees {
        if present.contains(&remote_id(ids, partition, emp.id).await) {
            continue;
        }
        let created = remote.create(partition, &emp.name).await?;
        let mut map = ids.lock().await;
        if created.id == emp.id {
            map.remove(&(partition, emp.id));
        } else {
            map.insert((partition, emp.id), created.id);
        }
    }

    let outgoing = to_remote_ids(ids, partition, employees).await;
    remote.save(partition, &outgoing).await
}

/// Deliver queued writes to the remote one at a time
async fn run_sync_worker(
    remote: Arc<dyn RecordStore>,
    ids: RemoteIds,
    mut queue: mpsc::UnboundedReceiver<SyncJob>,
) {
    while let Some(job) = queue.recv().await {
        let (what, result) = match job {
            SyncJob::Flush(done) => {
                let _ = done.send(());
                continue;
            }
            SyncJob::Save(partition, employees) => (
                format!("save {}", partition),
                save_remote(remote.as_ref(), &ids, partition, employees).await,
            ),
            SyncJob::Create {
                partition,
                local_id,
                name,
            } => {
                let result = match remote.create(partition, &name).await {
                    Ok(created) => {
                        if created.id != local_id {
                            ids.lock().await.insert((partition, local_id), created.id);
                        }
                        Ok(())
                    }
                    Err(e) => Err(e),
                };
                (format!("create {} in {}", local_id, partition), result)
            }
            SyncJob::Update(partition, mut employee) => {
                let what = format!("update {} in {}", employee.id, partition);
                employee.id = remote_id(&ids, partition, employee.id).await;
                (what, remote.update(partition, &employee).await)
            }
            SyncJob::Delete(partition, id) => {
                let target = ids.lock().await.remove(&(partition, id)).unwrap_or(id);
                (format!("delete {} in {}", id, partition), remote.delete(partition, target).await)
            }
        };

        match result {
            Ok(()) => log::debug!("Remote sync ok: {}", what),
            Err(e) => log::warn!("Remote sync skipped ({}): {}", what, e),
        }
    }
}

#[async_trait]
impl RecordStore for SyncedStore {
    async fn load(&self, partition: Restaurant) -> DomainResult<Vec<Employee>> {
        if self.policy == ReadPolicy::RemoteFirst {
            match self.remote.load(partition).await {
                Ok(employees) if !employees.is_empty() => {
                    if let Err(e) = self.local.save(partition, &employees).await {
                        log::warn!("Failed to cache remote data for {}: {}", partition, e);
                    }
                    // Cached rows now carry remote ids
                    self.remote_ids.lock().await.retain(|(p, _), _| *p != partition);
                    return Ok(employees);
                }
                Ok(_) => log::debug!("Remote has no data for {}, using local", partition),
                Err(e) => log::info!("Remote unavailable for {}, using local data: {}", partition, e),
            }
        }
        self.local.load(partition).await
    }

    async fn save(&self, partition: Restaurant, employees: &[Employee]) -> DomainResult<()> {
        self.local.save(partition, employees).await?;
        self.enqueue(SyncJob::Save(partition, employees.to_vec()));
        Ok(())
    }

    async fn create(&self, partition: Restaurant, name: &str) -> DomainResult<Employee> {
        if self.policy == ReadPolicy::LocalFirst {
            let employee = self.local.create(partition, name).await?;
            self.enqueue(SyncJob::Create {
                partition,
                local_id: employee.id,
                name: name.to_string(),
            });
            return Ok(employee);
        }

        // Earlier queued writes must land before the remote assigns an id
        self.flush().await?;
        let mut employees = self.local.load(partition).await?;
        let local_id = next_id(&employees)?;
        let id = match self.remote.create(partition, name).await {
            Ok(created) if created.id >= local_id => created.id,
            Ok(created) => {
                log::warn!("Remote id {} collides with local data, using {}", created.id, local_id);
                self.remote_ids.lock().await.insert((partition, local_id), created.id);
                local_id
            }
            Err(e) => {
                log::info!("Remote unavailable, using local id {}: {}", local_id, e);
                local_id
            }
        };

        let employee = Employee::new(id, name);
        employees.push(employee.clone());
        self.local.save(partition, &employees).await?;
        Ok(employee)
    }

    async fn delete(&self, partition: Restaurant, id: u32) -> DomainResult<()> {
        self.local.delete(partition, id).await?;
        self.enqueue(SyncJob::Delete(partition, id));
        Ok(())
    }

    async fn update(&self, partition: Restaurant, employee: &Employee) -> DomainResult<()> {
        self.local.update(partition, employee).await?;
        self.enqueue(SyncJob::Update(partition, employee.clone()));
        Ok(())
    }

    async fn last_sync(&self) -> DomainResult<Option<i64>> {
        self.local.last_sync().await
    }

    async fn flush(&self) -> DomainResult<()> {
        let (done, finished) = oneshot::channel();
        self.jobs
            .send(SyncJob::Flush(done))
            .map_err(|_| DomainError::Internal("Remote sync worker stopped".to_string()))?;
        finished
            .await
            .map_err(|_| DomainError::Internal("Remote sync worker stopped".to_string()))
    }
}

//! Memory Store
//!
//! Process-local partitions. Contents are lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::domain::{next_id, seed, DomainError, DomainResult, Employee, Restaurant};
use super::traits::RecordStore;

pub struct MemoryStore {
    partitions: Mutex<HashMap<Restaurant, Vec<Employee>>>,
    last_sync: Mutex<Option<i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            partitions: Mutex::new(HashMap::new()),
            last_sync: Mutex::new(None),
        }
    }

    /// Store pre-filled with the seed collections
    pub fn seeded() -> Self {
        let partitions = Restaurant::ALL
            .into_iter()
            .map(|r| (r, seed::initial_employees(r)))
            .collect();
        Self {
            partitions: Mutex::new(partitions),
            last_sync: Mutex::new(None),
        }
    }

    async fn touch(&self) {
        *self.last_sync.lock().await = Some(chrono::Local::now().timestamp_millis());
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load(&self, partition: Restaurant) -> DomainResult<Vec<Employee>> {
        let partitions = self.partitions.lock().await;
        Ok(partitions.get(&partition).cloned().unwrap_or_default())
    }

    async fn save(&self, partition: Restaurant, employees: &[Employee]) -> DomainResult<()> {
        self.partitions.lock().await.insert(partition, employees.to_vec());
        self.touch().await;
        Ok(())
    }

    async fn create(&self, partition: Restaurant, name: &str) -> DomainResult<Employee> {
        let employee = {
            let mut partitions = self.partitions.lock().await;
            let employees = partitions.entry(partition).or_default();
            let employee = Employee::new(next_id(employees)?, name);
            employees.push(employee.clone());
            employee
        };
        self.touch().await;
        Ok(employee)
    }

    async fn delete(&self, partition: Restaurant, id: u32) -> DomainResult<()> {
        {
            let mut partitions = self.partitions.lock().await;
            let employees = partitions.entry(partition).or_default();
            let before = employees.len();
            employees.retain(|e| e.id != id);
            if employees.len() == before {
                return Err(DomainError::NotFound(format!("Employee {} not found", id)));
            }
        }
        self.touch().await;
        Ok(())
    }

    async fn last_sync(&self) -> DomainResult<Option<i64>> {
        Ok(*self.last_sync.lock().await)
    }
}

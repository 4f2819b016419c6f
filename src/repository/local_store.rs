//! Local Store
//!
//! Durable partitions in the SQLite key-value table. Each restaurant has its
//! own slot holding the JSON-serialized `Employee[]`.

use async_trait::async_trait;
use rusqlite::Connection;

use crate::domain::{next_id, seed, DomainError, DomainResult, Employee, Restaurant};
use super::db::{get_value, set_value, SharedConnection};
use super::traits::RecordStore;

const STORAGE_KEY: &str = "uniform_tracking_employees";
const LAST_SYNC_KEY: &str = "uniform_tracking_last_sync";
const INIT_KEY: &str = "uniform_tracking_initialized";

/// Storage key for a partition's collection
pub fn partition_key(partition: Restaurant) -> String {
    format!("{}_{}", STORAGE_KEY, partition.key())
}

pub struct LocalStore {
    conn: SharedConnection,
    seed: bool,
}

impl LocalStore {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn, seed: false }
    }

    /// Store that writes the seed collections on first use
    pub fn seeded(conn: SharedConnection) -> Self {
        Self { conn, seed: true }
    }

    /// Raw stored JSON for a partition, if any
    pub async fn raw(&self, partition: Restaurant) -> DomainResult<Option<String>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(not_initialized())?;
        get_value(conn, &partition_key(partition)).map_err(store_err)
    }

    fn fallback(&self, partition: Restaurant) -> Vec<Employee> {
        if self.seed {
            seed::initial_employees(partition)
        } else {
            Vec::new()
        }
    }

    /// Write seed collections once, leaving existing slots alone
    fn ensure_seeded(&self, conn: &Connection) -> DomainResult<()> {
        if !self.seed || get_value(conn, INIT_KEY).map_err(store_err)?.is_some() {
            return Ok(());
        }

        for restaurant in Restaurant::ALL {
            let key = partition_key(restaurant);
            if get_value(conn, &key).map_err(store_err)?.is_none() {
                write_slot(conn, restaurant, &seed::initial_employees(restaurant))?;
            }
        }
        set_value(conn, INIT_KEY, "true").map_err(store_err)?;
        log::info!("Seeded local store");
        Ok(())
    }

    fn read_slot(&self, conn: &Connection, partition: Restaurant) -> DomainResult<Vec<Employee>> {
        self.ensure_seeded(conn)?;

        match get_value(conn, &partition_key(partition)).map_err(store_err)? {
            Some(json) => match serde_json::from_str(&json) {
                Ok(employees) => Ok(employees),
                Err(e) => {
                    log::warn!("Stored data for {} is unreadable, using defaults: {}", partition, e);
                    Ok(self.fallback(partition))
                }
            },
            None => Ok(self.fallback(partition)),
        }
    }
}

fn write_slot(conn: &Connection, partition: Restaurant, employees: &[Employee]) -> DomainResult<()> {
    let json = serde_json::to_string(employees).map_err(|e| DomainError::Internal(e.to_string()))?;
    set_value(conn, &partition_key(partition), &json).map_err(store_err)?;
    let now = chrono::Local::now().timestamp_millis();
    set_value(conn, LAST_SYNC_KEY, &now.to_string()).map_err(store_err)
}

fn store_err(e: rusqlite::Error) -> DomainError {
    DomainError::Store(e.to_string())
}

fn not_initialized() -> DomainError {
    DomainError::Store("Database not initialized".to_string())
}

#[async_trait]
impl RecordStore for LocalStore {
    async fn load(&self, partition: Restaurant) -> DomainResult<Vec<Employee>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(not_initialized())?;
        self.read_slot(conn, partition)
    }

    async fn save(&self, partition: Restaurant, employees: &[Employee]) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(not_initialized())?;
        self.ensure_seeded(conn)?;
        write_slot(conn, partition, employees)
    }

    async fn create(&self, partition: Restaurant, name: &str) -> DomainResult<Employee> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(not_initialized())?;

        let mut employees = self.read_slot(conn, partition)?;
        let employee = Employee::new(next_id(&employees)?, name);
        employees.push(employee.clone());
        write_slot(conn, partition, &employees)?;
        Ok(employee)
    }

    async fn delete(&self, partition: Restaurant, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(not_initialized())?;

        let employees = self.read_slot(conn, partition)?;
        let remaining: Vec<Employee> = employees.iter().filter(|e| e.id != id).cloned().collect();
        if remaining.len() == employees.len() {
            return Err(DomainError::NotFound(format!("Employee {} not found", id)));
        }
        write_slot(conn, partition, &remaining)
    }

    async fn update(&self, partition: Restaurant, employee: &Employee) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(not_initialized())?;

        let mut employees = self.read_slot(conn, partition)?;
        let slot = employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or_else(|| DomainError::NotFound(format!("Employee {} not found", employee.id)))?;
        *slot = employee.clone();
        write_slot(conn, partition, &employees)
    }

    async fn last_sync(&self) -> DomainResult<Option<i64>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(not_initialized())?;
        let value = get_value(conn, LAST_SYNC_KEY).map_err(store_err)?;
        Ok(value.and_then(|v| v.parse().ok()))
    }
}

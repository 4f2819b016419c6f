//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for partition persistence.
//! Implementations can use memory, SQLite, a remote function, etc.

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult, Employee, Restaurant};

/// Whole-partition persistence of employee collections
///
/// Writes are last-write-wins: a `save` replaces the stored collection with
/// no attempt to merge concurrent changes. Callers only see this trait, so
/// a backend can add version checks without touching them.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Load a partition; empty (or seed data) when nothing is stored
    async fn load(&self, partition: Restaurant) -> DomainResult<Vec<Employee>>;

    /// Replace the stored collection
    async fn save(&self, partition: Restaurant, employees: &[Employee]) -> DomainResult<()>;

    /// Create an employee with default sizes and an id above every existing one
    async fn create(&self, partition: Restaurant, name: &str) -> DomainResult<Employee>;

    /// Delete an employee; `NotFound` leaves the partition unchanged
    async fn delete(&self, partition: Restaurant, id: u32) -> DomainResult<()>;

    /// Replace one employee's name and uniform
    async fn update(&self, partition: Restaurant, employee: &Employee) -> DomainResult<()> {
        let mut employees = self.load(partition).await?;
        let slot = employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or_else(|| DomainError::NotFound(format!("Employee {} not found", employee.id)))?;
        *slot = employee.clone();
        self.save(partition, &employees).await
    }

    /// Millisecond timestamp of the last successful save or sync
    async fn last_sync(&self) -> DomainResult<Option<i64>> {
        Ok(None)
    }

    /// Wait until writes queued for background delivery have been sent
    async fn flush(&self) -> DomainResult<()> {
        Ok(())
    }
}

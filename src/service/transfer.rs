//! Partition JSON export/import
//!
//! Manual data portability between devices: a partition is dumped as a JSON
//! `Employee[]` and can be loaded back wholesale.

use crate::domain::{validate_collection, DomainError, DomainResult, Employee, Restaurant};
use crate::repository::RecordStore;

/// Pretty JSON of the stored partition
pub async fn export_json(store: &dyn RecordStore, partition: Restaurant) -> DomainResult<String> {
    let employees = store.load(partition).await?;
    serde_json::to_string_pretty(&employees).map_err(|e| DomainError::Internal(e.to_string()))
}

/// `<restaurant>-data-<millis>.json`
pub fn export_file_name(partition: Restaurant, timestamp_millis: i64) -> String {
    format!("{}-data-{}.json", partition.key(), timestamp_millis)
}

/// Parse `data` and replace the stored partition with it
///
/// Nothing is written unless the whole document parses and passes
/// `validate_collection`.
pub async fn import_json(store: &dyn RecordStore, partition: Restaurant, data: &str) -> DomainResult<usize> {
    let employees: Vec<Employee> =
        serde_json::from_str(data).map_err(|e| DomainError::Parse(format!("Invalid import file: {}", e)))?;
    validate_collection(&employees)?;

    store.save(partition, &employees).await?;
    log::info!("Imported {} employees into {}", employees.len(), partition);
    Ok(employees.len())
}

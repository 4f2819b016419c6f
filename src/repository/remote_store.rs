//! Remote Store
//!
//! Partitions held by a single HTTP function endpoint:
//! - `GET ?action=get_employees&restaurant=<key>` returns `{ "employees": [...] }`
//! - `POST { "action": "create_employee" | "update_employee" | "delete_employee", ... }`
//!
//! Any non-2xx status is a store failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

use crate::domain::{DomainError, DomainResult, Employee, Restaurant, Uniform};
use super::traits::RecordStore;

/// POST body; the action name travels in the `action` field
#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum RemoteAction<'a> {
    CreateEmployee {
        restaurant: &'a str,
        name: &'a str,
    },
    UpdateEmployee {
        #[serde(rename = "employeeId")]
        employee_id: u32,
        name: &'a str,
        uniform: &'a Uniform,
    },
    DeleteEmployee {
        #[serde(rename = "employeeId")]
        employee_id: u32,
        restaurant: &'a str,
    },
}

#[derive(Debug, Deserialize)]
struct EmployeesResponse {
    #[serde(default)]
    employees: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: u32,
    name: Option<String>,
}

pub struct RemoteStore {
    client: reqwest::Client,
    url: String,
}

impl RemoteStore {
    /// Client for `url`; every request is bounded by `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> DomainResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, action: &RemoteAction<'_>) -> DomainResult<reqwest::Response> {
        let response = self
            .client
            .post(&self.url)
            .json(action)
            .send()
            .await
            .map_err(request_err)?;
        check_status(response).await
    }
}

fn request_err(e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::Store(format!("Request timed out: {}", e))
    } else {
        DomainError::Store(format!("Request failed: {}", e))
    }
}

async fn check_status(response: reqwest::Response) -> DomainResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(DomainError::Store(format!("Remote returned {}: {}", status, body)))
}

#[async_trait]
impl RecordStore for RemoteStore {
    async fn load(&self, partition: Restaurant) -> DomainResult<Vec<Employee>> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("action", "get_employees"), ("restaurant", partition.key())])
            .send()
            .await
            .map_err(request_err)?;
        let response = check_status(response).await?;

        let body: EmployeesResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Bad employees response: {}", e)))?;
        log::debug!("Remote returned {} employees for {}", body.employees.len(), partition);
        Ok(body.employees)
    }

    /// Reconciles against the remote's current rows, since the endpoint has
    /// no whole-partition write: rows missing from `employees` are deleted,
    /// known ones updated, and unknown ones created. The remote assigns the
    /// ids of created rows.
    async fn save(&self, partition: Restaurant, employees: &[Employee]) -> DomainResult<()> {
        let existing: BTreeSet<u32> = self.load(partition).await?.iter().map(|e| e.id).collect();
        let wanted: BTreeSet<u32> = employees.iter().map(|e| e.id).collect();

        for id in existing.difference(&wanted) {
            self.delete(partition, *id).await?;
        }
        for employee in employees {
            if existing.contains(&employee.id) {
                self.update(partition, employee).await?;
            } else {
                let created = self.create(partition, &employee.name).await?;
                let mut employee = employee.clone();
                employee.id = created.id;
                self.update(partition, &employee).await?;
            }
        }
        Ok(())
    }

    async fn create(&self, partition: Restaurant, name: &str) -> DomainResult<Employee> {
        let response = self
            .post(&RemoteAction::CreateEmployee {
                restaurant: partition.key(),
                name,
            })
            .await?;

        let created: CreatedResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Bad create response: {}", e)))?;
        Ok(Employee::new(created.id, created.name.unwrap_or_else(|| name.to_string())))
    }

    async fn delete(&self, partition: Restaurant, id: u32) -> DomainResult<()> {
        self.post(&RemoteAction::DeleteEmployee {
            employee_id: id,
            restaurant: partition.key(),
        })
        .await?;
        Ok(())
    }

    async fn update(&self, _partition: Restaurant, employee: &Employee) -> DomainResult<()> {
        self.post(&RemoteAction::UpdateEmployee {
            employee_id: employee.id,
            name: &employee.name,
            uniform: &employee.uniform,
        })
        .await?;
        Ok(())
    }
}

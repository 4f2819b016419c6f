//! Service Layer
//!
//! Operations a UI calls: the lifecycle manager, polling, dashboard
//! statistics, report export and JSON transfer.

mod manager;
mod poller;
pub mod stats;
pub mod export;
pub mod transfer;

pub use manager::EmployeeManager;
pub use poller::{start_polling, PollHandle};
pub use stats::{filter_employees, DashboardStats, SizeDemandMode};

//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization
//! and chrono for the current month).

mod entity;
mod employee;
mod restaurant;
pub mod resolver;
pub mod seed;
mod uniform;

pub use entity::{Entity, DomainError, DomainResult};
pub use employee::{next_id, validate_collection, Employee, MonthlyRecord, Uniform, UniformItem};
pub use restaurant::Restaurant;
pub use uniform::{Condition, ItemKind, Month, Size};

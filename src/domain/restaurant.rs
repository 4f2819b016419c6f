//! Restaurant partitions
//!
//! Each restaurant owns an independent employee collection and storage
//! namespace. The set of restaurants is closed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::entity::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Restaurant {
    Port,
    Dickens,
    Bar,
    Hookah,
    Runners,
}

impl Restaurant {
    pub const ALL: [Restaurant; 5] = [
        Restaurant::Port,
        Restaurant::Dickens,
        Restaurant::Bar,
        Restaurant::Hookah,
        Restaurant::Runners,
    ];

    /// Partition key used in storage keys and remote requests
    pub fn key(&self) -> &'static str {
        match self {
            Restaurant::Port => "port",
            Restaurant::Dickens => "dickens",
            Restaurant::Bar => "bar",
            Restaurant::Hookah => "hookah",
            Restaurant::Runners => "runners",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Restaurant::Port => "Порт",
            Restaurant::Dickens => "Диккенс",
            Restaurant::Bar => "Бар",
            Restaurant::Hookah => "Кальянная",
            Restaurant::Runners => "Раннеры",
        }
    }
}

impl std::fmt::Display for Restaurant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Restaurant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Restaurant::ALL
            .into_iter()
            .find(|r| r.key() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("Unknown restaurant '{}'", s)))
    }
}

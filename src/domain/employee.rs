//! Employee Entity
//!
//! An employee owns exactly one `UniformItem` per `ItemKind`, each with its
//! own month-by-month condition history.

use serde::{Deserialize, Serialize};

use std::collections::HashSet;

use super::entity::{DomainError, DomainResult, Entity};
use super::uniform::{Condition, ItemKind, Month, Size};

/// Condition assessed for one item in one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub month: Month,
    pub condition: Condition,
    /// Only meaningful for replacement records
    #[serde(rename = "issueDate", default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
}

/// One uniform piece with its size and history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub size: Size,
    /// At most one record per month
    #[serde(rename = "monthlyRecords", default)]
    pub monthly_records: Vec<MonthlyRecord>,
}

impl UniformItem {
    /// Item with the kind's default size and no history
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            size: kind.default_size(),
            monthly_records: Vec::new(),
        }
    }

    pub fn record(&self, month: Month) -> Option<&MonthlyRecord> {
        self.monthly_records.iter().find(|r| r.month == month)
    }
}

/// Fixed mapping from the four kinds to their items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uniform {
    pub tshirt: UniformItem,
    pub pants: UniformItem,
    pub jacket: UniformItem,
    pub badge: UniformItem,
}

impl Default for Uniform {
    fn default() -> Self {
        Self {
            tshirt: UniformItem::new(ItemKind::Tshirt),
            pants: UniformItem::new(ItemKind::Pants),
            jacket: UniformItem::new(ItemKind::Jacket),
            badge: UniformItem::new(ItemKind::Badge),
        }
    }
}

impl Uniform {
    pub fn get(&self, kind: ItemKind) -> &UniformItem {
        match kind {
            ItemKind::Tshirt => &self.tshirt,
            ItemKind::Pants => &self.pants,
            ItemKind::Jacket => &self.jacket,
            ItemKind::Badge => &self.badge,
        }
    }

    pub fn get_mut(&mut self, kind: ItemKind) -> &mut UniformItem {
        match kind {
            ItemKind::Tshirt => &mut self.tshirt,
            ItemKind::Pants => &mut self.pants,
            ItemKind::Jacket => &mut self.jacket,
            ItemKind::Badge => &mut self.badge,
        }
    }

    /// Items in `ItemKind::ALL` order
    pub fn items(&self) -> [&UniformItem; 4] {
        [&self.tshirt, &self.pants, &self.jacket, &self.badge]
    }
}

/// An employee within one restaurant partition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique within the partition
    pub id: u32,
    pub name: String,
    pub uniform: Uniform,
}

impl Employee {
    /// New employee with default sizes and empty history
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            uniform: Uniform::default(),
        }
    }

    pub fn item(&self, kind: ItemKind) -> &UniformItem {
        self.uniform.get(kind)
    }
}

impl Entity for Employee {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Next id for a partition: one past the largest existing id
pub fn next_id(employees: &[Employee]) -> DomainResult<u32> {
    let max = employees.iter().map(Entity::id).max().unwrap_or(0);
    max.checked_add(1)
        .ok_or_else(|| DomainError::InvalidInput(format!("No id left above {}", max)))
}

/// Check a whole partition against the collection invariants
///
/// Ids are positive and unique, every uniform slot holds an item of its own
/// kind in a size from that kind's domain, and each item has at most one
/// record per month.
pub fn validate_collection(employees: &[Employee]) -> DomainResult<()> {
    let mut ids = HashSet::new();
    for emp in employees {
        if emp.id == 0 {
            return Err(DomainError::InvalidInput(format!("Employee '{}' has id 0", emp.name)));
        }
        if !ids.insert(emp.id) {
            return Err(DomainError::InvalidInput(format!("Duplicate employee id {}", emp.id)));
        }

        for kind in ItemKind::ALL {
            let item = emp.item(kind);
            if item.kind != kind {
                return Err(DomainError::InvalidInput(format!(
                    "Employee {}: {} slot holds a {} item",
                    emp.id,
                    kind.as_str(),
                    item.kind.as_str()
                )));
            }
            if !kind.accepts(item.size) {
                return Err(DomainError::InvalidInput(format!(
                    "Employee {}: size {} is not valid for {}",
                    emp.id,
                    item.size.as_str(),
                    kind.as_str()
                )));
            }
            let mut months = HashSet::new();
            if let Some(dup) = item.monthly_records.iter().find(|r| !months.insert(r.month)) {
                return Err(DomainError::InvalidInput(format!(
                    "Employee {}: {} has two records for {}",
                    emp.id,
                    kind.as_str(),
                    dup.month.label()
                )));
            }
        }
    }
    Ok(())
}

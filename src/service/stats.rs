//! Dashboard Statistics
//!
//! Everything here is a pure function of the employee collection and the
//! selected month, computed through the resolver.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::resolver::resolve;
use crate::domain::{Condition, Employee, ItemKind, Month, Size};

/// Which employees contribute to the size histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeDemandMode {
    /// Every employee's current size
    AllSizes,
    /// Only items flagged for replacement this month
    ToOrder,
}

/// Count and share of one condition across all items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionShare {
    pub count: usize,
    /// Percent of `total_employees * 4`
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionDistribution {
    pub by_condition: BTreeMap<Condition, ConditionShare>,
    /// Items with no record for the month
    pub not_assessed: ConditionShare,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub month: Month,
    pub mode: SizeDemandMode,
    pub total_employees: usize,
    /// Employees with at least one item needing replacement
    pub needs_replacement: usize,
    pub by_type_needs_replacement: BTreeMap<ItemKind, usize>,
    pub size_demand: BTreeMap<ItemKind, BTreeMap<Size, usize>>,
    pub condition_distribution: ConditionDistribution,
}

impl DashboardStats {
    pub fn compute(employees: &[Employee], month: Month, mode: SizeDemandMode) -> Self {
        let needs = |emp: &Employee, kind: ItemKind| {
            resolve(emp.item(kind), month) == Some(Condition::NeedsReplacement)
        };

        let needs_replacement = employees
            .iter()
            .filter(|&emp| ItemKind::ALL.iter().any(|&kind| needs(emp, kind)))
            .count();

        let by_type_needs_replacement = ItemKind::ALL
            .into_iter()
            .map(|kind| (kind, employees.iter().filter(|&emp| needs(emp, kind)).count()))
            .collect();

        let size_demand = ItemKind::ALL
            .into_iter()
            .map(|kind| {
                let mut histogram = BTreeMap::new();
                for emp in employees {
                    if mode == SizeDemandMode::ToOrder && !needs(emp, kind) {
                        continue;
                    }
                    *histogram.entry(emp.item(kind).size).or_insert(0) += 1;
                }
                (kind, histogram)
            })
            .collect();

        Self {
            month,
            mode,
            total_employees: employees.len(),
            needs_replacement,
            by_type_needs_replacement,
            size_demand,
            condition_distribution: condition_distribution(employees, month),
        }
    }

    pub fn needs_replacement_of(&self, kind: ItemKind) -> usize {
        self.by_type_needs_replacement.get(&kind).copied().unwrap_or(0)
    }

    pub fn demand(&self, kind: ItemKind, size: Size) -> usize {
        self.size_demand
            .get(&kind)
            .and_then(|h| h.get(&size))
            .copied()
            .unwrap_or(0)
    }
}

fn condition_distribution(employees: &[Employee], month: Month) -> ConditionDistribution {
    let total_items = employees.len() * ItemKind::ALL.len();
    let share = |count: usize| ConditionShare {
        count,
        percent: if total_items == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total_items as f64
        },
    };

    let mut counts: BTreeMap<Condition, usize> = Condition::ALL.into_iter().map(|c| (c, 0)).collect();
    let mut not_assessed = 0;
    for emp in employees {
        for item in emp.uniform.items() {
            match resolve(item, month) {
                Some(condition) => *counts.entry(condition).or_insert(0) += 1,
                None => not_assessed += 1,
            }
        }
    }

    ConditionDistribution {
        by_condition: counts.into_iter().map(|(c, n)| (c, share(n))).collect(),
        not_assessed: share(not_assessed),
    }
}

/// Employees matching a name search and, optionally, having any item in
/// `condition` for `month`
pub fn filter_employees<'a>(
    employees: &'a [Employee],
    search: &str,
    condition: Option<Condition>,
    month: Month,
) -> Vec<&'a Employee> {
    let needle = search.trim().to_lowercase();
    employees
        .iter()
        .filter(|emp| needle.is_empty() || emp.name.to_lowercase().contains(&needle))
        .filter(|emp| match condition {
            None => true,
            Some(wanted) => emp
                .uniform
                .items()
                .iter()
                .any(|item| resolve(item, month) == Some(wanted)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resolver::set_condition;

    fn employee(id: u32, tshirt: Size) -> Employee {
        let mut emp = Employee::new(id, format!("Сотрудник {}", id));
        emp.uniform.tshirt.size = tshirt;
        emp
    }

    fn flag(emp: &mut Employee, kind: ItemKind, month: Month, condition: Condition) {
        let item = emp.uniform.get_mut(kind);
        *item = set_condition(item, month, condition, None);
    }

    #[test]
    fn test_empty_collection() {
        let stats = DashboardStats::compute(&[], Month::March, SizeDemandMode::AllSizes);
        assert_eq!(stats.total_employees, 0);
        assert_eq!(stats.needs_replacement, 0);
        let dist = &stats.condition_distribution;
        assert!(dist.by_condition.values().all(|s| s.count == 0 && s.percent == 0.0));
        assert_eq!(dist.not_assessed.percent, 0.0);
        assert!(!dist.not_assessed.percent.is_nan());
    }

    #[test]
    fn test_sizes_to_order() {
        let mut staff = vec![employee(1, Size::S), employee(2, Size::M), employee(3, Size::M)];
        for emp in staff.iter_mut() {
            flag(emp, ItemKind::Tshirt, Month::March, Condition::NeedsReplacement);
        }
        staff.push(employee(4, Size::Xl));

        let stats = DashboardStats::compute(&staff, Month::March, SizeDemandMode::ToOrder);
        let tshirts = &stats.size_demand[&ItemKind::Tshirt];
        assert_eq!(tshirts.len(), 2);
        assert_eq!(stats.demand(ItemKind::Tshirt, Size::S), 1);
        assert_eq!(stats.demand(ItemKind::Tshirt, Size::M), 2);
        assert!(stats.size_demand[&ItemKind::Pants].is_empty());
    }

    #[test]
    fn test_all_sizes_in_use() {
        let staff = vec![employee(1, Size::S), employee(2, Size::M), employee(3, Size::M)];
        let stats = DashboardStats::compute(&staff, Month::March, SizeDemandMode::AllSizes);
        assert_eq!(stats.demand(ItemKind::Tshirt, Size::M), 2);
        assert_eq!(stats.demand(ItemKind::Pants, Size::Two), 3);
        assert_eq!(stats.demand(ItemKind::Badge, Size::Needed), 3);
    }

    #[test]
    fn test_replacement_counts_are_per_month() {
        let mut a = employee(1, Size::M);
        flag(&mut a, ItemKind::Tshirt, Month::May, Condition::NeedsReplacement);
        flag(&mut a, ItemKind::Jacket, Month::May, Condition::NeedsReplacement);
        let mut b = employee(2, Size::M);
        flag(&mut b, ItemKind::Jacket, Month::June, Condition::NeedsReplacement);

        let staff = vec![a, b];
        let may = DashboardStats::compute(&staff, Month::May, SizeDemandMode::ToOrder);
        assert_eq!(may.needs_replacement, 1);
        assert_eq!(may.needs_replacement_of(ItemKind::Tshirt), 1);
        assert_eq!(may.needs_replacement_of(ItemKind::Jacket), 1);
        assert_eq!(may.needs_replacement_of(ItemKind::Badge), 0);

        let june = DashboardStats::compute(&staff, Month::June, SizeDemandMode::ToOrder);
        assert_eq!(june.needs_replacement, 1);
        assert_eq!(june.needs_replacement_of(ItemKind::Tshirt), 0);
    }

    #[test]
    fn test_condition_distribution() {
        let mut a = employee(1, Size::M);
        flag(&mut a, ItemKind::Tshirt, Month::April, Condition::Good);
        flag(&mut a, ItemKind::Pants, Month::April, Condition::Bad);
        let b = employee(2, Size::M);

        let stats = DashboardStats::compute(&[a, b], Month::April, SizeDemandMode::AllSizes);
        let dist = &stats.condition_distribution;
        assert_eq!(dist.by_condition[&Condition::Good].count, 1);
        assert_eq!(dist.by_condition[&Condition::Good].percent, 12.5);
        assert_eq!(dist.by_condition[&Condition::NeedsReplacement].count, 0);
        assert_eq!(dist.not_assessed.count, 6);
        assert_eq!(dist.not_assessed.percent, 75.0);
    }

    #[test]
    fn test_filter_by_name_and_condition() {
        let mut a = Employee::new(1, "Бирюков");
        flag(&mut a, ItemKind::Badge, Month::July, Condition::Bad);
        let b = Employee::new(2, "Наумов");
        let staff = vec![a, b];

        assert_eq!(filter_employees(&staff, "", None, Month::July).len(), 2);
        assert_eq!(filter_employees(&staff, "бир", None, Month::July)[0].id, 1);
        assert_eq!(filter_employees(&staff, "", Some(Condition::Bad), Month::July).len(), 1);
        assert!(filter_employees(&staff, "", Some(Condition::Bad), Month::August).is_empty());
    }
}

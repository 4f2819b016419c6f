//! Monthly Condition Resolver
//!
//! Pure lookups and last-write-wins updates over an item's monthly history.

use super::employee::{MonthlyRecord, UniformItem};
use super::uniform::{Condition, Month};

/// Condition recorded for `month`, or `None` if the item was not assessed
pub fn resolve(item: &UniformItem, month: Month) -> Option<Condition> {
    item.record(month).map(|r| r.condition)
}

/// Issue date recorded for `month`, if any
pub fn issue_date(item: &UniformItem, month: Month) -> Option<&str> {
    item.record(month).and_then(|r| r.issue_date.as_deref())
}

/// Return a copy of `item` with `month` set to `condition`
///
/// An existing record for the month is replaced in place. The issue date is
/// only overwritten when a non-empty value is given; otherwise the previous
/// date is kept.
pub fn set_condition(
    item: &UniformItem,
    month: Month,
    condition: Condition,
    issue_date: Option<&str>,
) -> UniformItem {
    let issue_date = issue_date
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    let mut updated = item.clone();
    match updated.monthly_records.iter_mut().find(|r| r.month == month) {
        Some(record) => {
            record.condition = condition;
            if issue_date.is_some() {
                record.issue_date = issue_date;
            }
        }
        None => updated.monthly_records.push(MonthlyRecord {
            month,
            condition,
            issue_date,
        }),
    }

    // Histories written by older clients may hold duplicates; keep the first
    let mut seen = Vec::with_capacity(updated.monthly_records.len());
    updated.monthly_records.retain(|r| {
        if seen.contains(&r.month) {
            false
        } else {
            seen.push(r.month);
            true
        }
    });

    updated
}

//! Initial partition contents
//!
//! Written into a store the first time it is opened.

use super::employee::{Employee, MonthlyRecord};
use super::restaurant::Restaurant;
use super::uniform::{Condition, ItemKind, Month, Size};

/// Seed collection for a partition (empty for all but `port`)
pub fn initial_employees(restaurant: Restaurant) -> Vec<Employee> {
    match restaurant {
        Restaurant::Port => port_staff(),
        _ => Vec::new(),
    }
}

fn port_staff() -> Vec<Employee> {
    use Condition::{Good, NeedsReplacement};

    let mut birukov = Employee::new(1, "Бирюков");
    birukov.uniform.badge.size = Size::NotNeeded;
    assess(
        &mut birukov,
        Month::December,
        [NeedsReplacement, NeedsReplacement, Good, Good],
    );

    let mut naumov = Employee::new(6, "Наумов");
    assess(&mut naumov, Month::December, [Good, Good, Good, Good]);

    let mut staff = vec![birukov, naumov];
    staff.extend(
        [
            (7, "Удалых"),
            (8, "Башкиров"),
            (9, "Узун"),
            (11, "Живулина"),
            (13, "Лосев"),
            (14, "Коньшин"),
            (15, "Мегреладзе"),
        ]
        .into_iter()
        .map(|(id, name)| Employee::new(id, name)),
    );
    staff
}

/// Record one month's conditions in `ItemKind::ALL` order
fn assess(employee: &mut Employee, month: Month, conditions: [Condition; 4]) {
    for (kind, condition) in ItemKind::ALL.into_iter().zip(conditions) {
        employee.uniform.get_mut(kind).monthly_records.push(MonthlyRecord {
            month,
            condition,
            issue_date: None,
        });
    }
}

//! Uniform vocabulary
//!
//! Item kinds, sizes, conditions and the fixed month labels.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::entity::DomainError;

/// The four tracked uniform pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Tshirt,
    Pants,
    Jacket,
    Badge,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [ItemKind::Tshirt, ItemKind::Pants, ItemKind::Jacket, ItemKind::Badge];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Tshirt => "tshirt",
            ItemKind::Pants => "pants",
            ItemKind::Jacket => "jacket",
            ItemKind::Badge => "badge",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Tshirt => "Футболка",
            ItemKind::Pants => "Штаны",
            ItemKind::Jacket => "Китель",
            ItemKind::Badge => "Бейджик",
        }
    }

    /// Sizes valid for this kind
    pub fn sizes(&self) -> &'static [Size] {
        match self {
            ItemKind::Tshirt => &[Size::Xs, Size::S, Size::M, Size::L, Size::Xl],
            ItemKind::Pants | ItemKind::Jacket => &[Size::One, Size::Two, Size::Three],
            ItemKind::Badge => &[Size::Needed, Size::NotNeeded],
        }
    }

    /// Size assigned to a freshly created employee
    pub fn default_size(&self) -> Size {
        match self {
            ItemKind::Tshirt => Size::M,
            ItemKind::Pants | ItemKind::Jacket => Size::Two,
            ItemKind::Badge => Size::Needed,
        }
    }

    pub fn accepts(&self, size: Size) -> bool {
        self.sizes().contains(&size)
    }
}

impl FromStr for ItemKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("Unknown item kind '{}'", s)))
    }
}

/// Sizes across all kinds; which ones apply depends on the `ItemKind`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "XS")]
    Xs,
    #[serde(rename = "S")]
    S,
    #[serde(rename = "M")]
    M,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "needed")]
    Needed,
    #[serde(rename = "not_needed")]
    NotNeeded,
}

impl Size {
    const ALL: [Size; 10] = [
        Size::Xs,
        Size::S,
        Size::M,
        Size::L,
        Size::Xl,
        Size::One,
        Size::Two,
        Size::Three,
        Size::Needed,
        Size::NotNeeded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::One => "1",
            Size::Two => "2",
            Size::Three => "3",
            Size::Needed => "needed",
            Size::NotNeeded => "not_needed",
        }
    }

    /// Human label; badge "sizes" read as yes/no
    pub fn label(&self) -> &'static str {
        match self {
            Size::Needed => "Нужен",
            Size::NotNeeded => "Не нужен",
            other => other.as_str(),
        }
    }
}

impl FromStr for Size {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("Unknown size '{}'", s)))
    }
}

/// Assessed state of an item for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Good,
    Bad,
    NeedsReplacement,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::Good, Condition::Bad, Condition::NeedsReplacement];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Good => "good",
            Condition::Bad => "bad",
            Condition::NeedsReplacement => "needs_replacement",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Good => "Хорошее",
            Condition::Bad => "Плохое",
            Condition::NeedsReplacement => "Нужно новое",
        }
    }

    /// Only replacement records carry a meaningful issue date
    pub fn needs_replacement(&self) -> bool {
        matches!(self, Condition::NeedsReplacement)
    }
}

impl FromStr for Condition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("Unknown condition '{}'", s)))
    }
}

/// Calendar month, stored by its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    #[serde(rename = "Январь")]
    January,
    #[serde(rename = "Февраль")]
    February,
    #[serde(rename = "Март")]
    March,
    #[serde(rename = "Апрель")]
    April,
    #[serde(rename = "Май")]
    May,
    #[serde(rename = "Июнь")]
    June,
    #[serde(rename = "Июль")]
    July,
    #[serde(rename = "Август")]
    August,
    #[serde(rename = "Сентябрь")]
    September,
    #[serde(rename = "Октябрь")]
    October,
    #[serde(rename = "Ноябрь")]
    November,
    #[serde(rename = "Декабрь")]
    December,
}

impl Month {
    /// Calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Month::January => "Январь",
            Month::February => "Февраль",
            Month::March => "Март",
            Month::April => "Апрель",
            Month::May => "Май",
            Month::June => "Июнь",
            Month::July => "Июль",
            Month::August => "Август",
            Month::September => "Сентябрь",
            Month::October => "Октябрь",
            Month::November => "Ноябрь",
            Month::December => "Декабрь",
        }
    }

    /// Month for a 1-based calendar number
    pub fn from_number(n: u32) -> Option<Month> {
        if (1..=12).contains(&n) {
            Some(Month::ALL[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Current month in local time
    pub fn current() -> Month {
        use chrono::Datelike;
        Month::from_number(chrono::Local::now().month()).unwrap_or(Month::January)
    }
}

impl FromStr for Month {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("Unknown month '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_domain_per_kind() {
        assert!(ItemKind::Tshirt.accepts(Size::Xl));
        assert!(!ItemKind::Tshirt.accepts(Size::Two));
        assert!(ItemKind::Jacket.accepts(Size::Three));
        assert!(!ItemKind::Badge.accepts(Size::M));
        for kind in ItemKind::ALL {
            assert!(kind.accepts(kind.default_size()));
        }
    }

    #[test]
    fn test_serialized_forms() {
        assert_eq!(serde_json::to_string(&Size::Two).unwrap(), "\"2\"");
        assert_eq!(serde_json::to_string(&Size::NotNeeded).unwrap(), "\"not_needed\"");
        assert_eq!(serde_json::to_string(&Condition::NeedsReplacement).unwrap(), "\"needs_replacement\"");
        assert_eq!(serde_json::to_string(&Month::March).unwrap(), "\"Март\"");
        assert_eq!(serde_json::to_string(&ItemKind::Tshirt).unwrap(), "\"tshirt\"");
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("Декабрь".parse::<Month>().unwrap(), Month::December);
        assert_eq!("XS".parse::<Size>().unwrap(), Size::Xs);
        assert_eq!("bad".parse::<Condition>().unwrap(), Condition::Bad);
        assert!("Smarch".parse::<Month>().is_err());
    }

    #[test]
    fn test_month_numbers() {
        assert_eq!(Month::from_number(1), Some(Month::January));
        assert_eq!(Month::from_number(12), Some(Month::December));
        assert_eq!(Month::from_number(13), None);
    }
}

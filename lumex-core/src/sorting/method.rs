use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ViewEngineError;

/// Fields available for ordering and grouping a gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Date,
    Rating,
    PersonCount,
    Random,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        use SortField::*;
        &[Name, Date, Rating, PersonCount, Random]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Date => "date",
            SortField::Rating => "rating",
            SortField::PersonCount => "person_count",
            SortField::Random => "random",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ViewEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::all()
            .iter()
            .find(|field| field.as_str() == s)
            .copied()
            .ok_or_else(|| ViewEngineError::UnknownSortField(s.to_string()))
    }
}

/// Sort order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// One ordering decision: which field, which direction.
///
/// Separate instances drive the item order and the group order; the
/// gallery default for both is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriteria {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            order: SortOrder::Ascending,
        }
    }
}

impl SortCriteria {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortOrder::Ascending)
    }

    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortOrder::Descending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_field() {
        for field in SortField::all() {
            assert_eq!(field.as_str().parse::<SortField>().ok(), Some(*field));
        }
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        assert!(matches!(
            "shutter_speed".parse::<SortField>(),
            Err(ViewEngineError::UnknownSortField(name)) if name == "shutter_speed"
        ));
    }

    #[test]
    fn default_view_order_is_chronological() {
        let criteria = SortCriteria::default();
        assert_eq!(criteria.field, SortField::Date);
        assert_eq!(criteria.order, SortOrder::Ascending);
    }
}

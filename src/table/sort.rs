//! Column values and the comparator used by the table view.

use std::{borrow::Cow, cmp::Ordering};

use chrono::{DateTime, Utc};

use super::Order;

/// A row type that can be ordered by any of its columns.
///
/// `Column` is a closed enum of the row's sortable properties, so a sort key
/// that does not exist on the row cannot be expressed.
pub trait Sortable {
    type Column: Copy + Eq + std::fmt::Debug + 'static;

    fn sort_value(&self, column: Self::Column) -> SortValue<'_>;
}

/// The value a row exposes for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    /// Absent value. Always orders lowest.
    Missing,
    Number(f64),
    Text(Cow<'a, str>),
}

impl SortValue<'_> {
    /// Missing < Number < Text. NaN counts as missing.
    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Number(n) if n.is_nan() => 0,
            SortValue::Number(_) => 1,
            SortValue::Text(_) => 2,
        }
    }

    /// Ascending comparison.
    pub fn compare(&self, other: &SortValue<'_>) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) if !a.is_nan() && !b.is_nan() => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<f64> for SortValue<'_> {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            SortValue::Missing
        } else {
            SortValue::Number(value)
        }
    }
}

impl From<Option<f64>> for SortValue<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(SortValue::Missing, SortValue::from)
    }
}

impl<'a> From<&'a str> for SortValue<'a> {
    fn from(value: &'a str) -> Self {
        SortValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<Option<&'a str>> for SortValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(SortValue::Missing, SortValue::from)
    }
}

impl From<String> for SortValue<'_> {
    fn from(value: String) -> Self {
        SortValue::Text(Cow::Owned(value))
    }
}

impl From<DateTime<Utc>> for SortValue<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        // Millisecond precision stays exact in f64 for any realistic date
        SortValue::Number(value.timestamp_millis() as f64)
    }
}

/// Stably sorts borrowed rows by `column` in `order`.
///
/// Accepts a slice as well as an already filtered list of references.
pub fn sort_rows<'a, R, I>(rows: I, column: R::Column, order: Order) -> Vec<&'a R>
where
    R: Sortable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut sorted: Vec<&R> = rows.into_iter().collect();
    sorted.sort_by(|a, b| order.apply(a.sort_value(column).compare(&b.sort_value(column))));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: u32,
        value: Option<f64>,
        label: Option<&'static str>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Column {
        Value,
        Label,
    }

    impl Sortable for Row {
        type Column = Column;

        fn sort_value(&self, column: Column) -> SortValue<'_> {
            match column {
                Column::Value => self.value.into(),
                Column::Label => self.label.into(),
            }
        }
    }

    fn row(id: u32, value: Option<f64>, label: Option<&'static str>) -> Row {
        Row { id, value, label }
    }

    fn ids(rows: &[&Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_missing_sorts_lowest() {
        let rows = vec![
            row(1, Some(3.0), None),
            row(2, None, None),
            row(3, Some(f64::NAN), None),
            row(4, Some(-1.0), None),
        ];

        let asc = sort_rows(&rows, Column::Value, Order::Asc);
        assert_eq!(ids(&asc), vec![2, 3, 4, 1]);

        let desc = sort_rows(&rows, Column::Value, Order::Desc);
        assert_eq!(ids(&desc), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_numeric_not_lexical() {
        let rows = vec![row(1, Some(100.0), None), row(2, Some(9.0), None)];
        let asc = sort_rows(&rows, Column::Value, Order::Asc);
        assert_eq!(ids(&asc), vec![2, 1]);
    }

    #[test]
    fn test_text_is_lexical_and_stable() {
        let rows = vec![
            row(1, None, Some("USDC")),
            row(2, None, Some("AQUA")),
            row(3, None, Some("USDC")),
            row(4, None, None),
        ];

        let asc = sort_rows(&rows, Column::Label, Order::Asc);
        assert_eq!(ids(&asc), vec![4, 2, 1, 3]);

        let desc = sort_rows(&rows, Column::Label, Order::Desc);
        assert_eq!(ids(&desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_number_orders_below_text() {
        let a = SortValue::Number(1e9);
        let b = SortValue::from("a");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(SortValue::Missing.compare(&a), Ordering::Less);
        assert_eq!(SortValue::Missing.compare(&SortValue::Missing), Ordering::Equal);
    }
}

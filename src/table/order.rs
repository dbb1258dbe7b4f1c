use std::{cmp::Ordering, fmt, str::FromStr};

use thiserror::Error;

/// Sort direction of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Smallest first (A-Z, 0-9). Missing values lead.
    #[default]
    Asc,
    /// Largest first (Z-A, 9-0). Missing values trail.
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort order '{0}', expected 'asc' or 'desc'")]
pub struct ParseOrderError(pub String);

impl Order {
    pub fn flipped(self) -> Self {
        match self {
            Order::Asc => Order::Desc,
            Order::Desc => Order::Asc,
        }
    }

    /// Applies the direction to an ascending comparison result.
    ///
    /// `Equal` stays `Equal` in both directions, so a stable sort keeps ties
    /// in input order whichever way the column is sorted.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Order::Asc => ordering,
            Order::Desc => ordering.reverse(),
        }
    }

    /// Arrow shown next to the active column header.
    pub fn arrow(self) -> &'static str {
        match self {
            Order::Asc => "↑",
            Order::Desc => "↓",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Asc => f.write_str("asc"),
            Order::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Order::Asc),
            "desc" | "descending" => Ok(Order::Desc),
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_keeps_ties_equal() {
        assert_eq!(Order::Desc.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(Order::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Order::Asc.apply(Ordering::Less), Ordering::Less);
    }

    #[test]
    fn test_parse_order() {
        assert_eq!("DESC".parse::<Order>(), Ok(Order::Desc));
        assert_eq!("ascending".parse::<Order>(), Ok(Order::Asc));
        assert!("sideways".parse::<Order>().is_err());
    }
}

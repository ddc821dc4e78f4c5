use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CompareError;

/// The relation a comparison tests for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CmpMode {
    Less,
    LessOrEqual,
    Equal,
    Greater,
    GreaterOrEqual,
}

impl CmpMode {
    pub const ALL: [CmpMode; 5] = [
        CmpMode::Less,
        CmpMode::LessOrEqual,
        CmpMode::Equal,
        CmpMode::Greater,
        CmpMode::GreaterOrEqual,
    ];

    /// Legacy integer code of the mode: `-1`, `-10`, `0`, `1`, `10`.
    pub const fn code(self) -> i32 {
        match self {
            CmpMode::Less => -1,
            CmpMode::LessOrEqual => -10,
            CmpMode::Equal => 0,
            CmpMode::Greater => 1,
            CmpMode::GreaterOrEqual => 10,
        }
    }

    /// Inverse of [`CmpMode::code`]. Any other integer is not a mode.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            CmpMode::Less => "<",
            CmpMode::LessOrEqual => "<=",
            CmpMode::Equal => "==",
            CmpMode::Greater => ">",
            CmpMode::GreaterOrEqual => ">=",
        }
    }

    /// The mode that holds for `(b, a)` exactly when `self` holds for `(a, b)`.
    pub const fn reverse(self) -> Self {
        match self {
            CmpMode::Less => CmpMode::Greater,
            CmpMode::LessOrEqual => CmpMode::GreaterOrEqual,
            CmpMode::Equal => CmpMode::Equal,
            CmpMode::Greater => CmpMode::Less,
            CmpMode::GreaterOrEqual => CmpMode::LessOrEqual,
        }
    }

    /// Whether an already computed ordering satisfies this mode.
    pub fn holds(self, ord: Ordering) -> bool {
        match self {
            CmpMode::Less => ord.is_lt(),
            CmpMode::LessOrEqual => ord.is_le(),
            CmpMode::Equal => ord.is_eq(),
            CmpMode::Greater => ord.is_gt(),
            CmpMode::GreaterOrEqual => ord.is_ge(),
        }
    }
}

impl fmt::Display for CmpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for CmpMode {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = match s.trim().to_ascii_lowercase().as_str() {
            "<" | "lt" | "less" => CmpMode::Less,
            "<=" | "le" | "less_or_equal" | "lessorequal" => CmpMode::LessOrEqual,
            "==" | "=" | "eq" | "equal" => CmpMode::Equal,
            ">" | "gt" | "greater" => CmpMode::Greater,
            ">=" | "ge" | "greater_or_equal" | "greaterorequal" => CmpMode::GreaterOrEqual,
            _ => return Err(CompareError::UnknownMode(s.to_string())),
        };
        Ok(mode)
    }
}

impl TryFrom<i32> for CmpMode {
    type Error = CompareError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| CompareError::UnknownMode(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn codes_round_trip() {
        for mode in CmpMode::ALL {
            assert_eq!(CmpMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(CmpMode::from_code(2), None);
        assert_eq!(CmpMode::try_from(-10_i32).unwrap(), CmpMode::LessOrEqual);
        assert!(CmpMode::try_from(7_i32).is_err());
    }

    #[test]
    fn parses_symbols_and_names() {
        assert_eq!("<".parse::<CmpMode>().unwrap(), CmpMode::Less);
        assert_eq!(" GE ".parse::<CmpMode>().unwrap(), CmpMode::GreaterOrEqual);
        assert_eq!("less_or_equal".parse::<CmpMode>().unwrap(), CmpMode::LessOrEqual);
        assert_eq!(
            "!=".parse::<CmpMode>(),
            Err(CompareError::UnknownMode("!=".into()))
        );
    }

    #[test]
    fn display_uses_operator_symbol() {
        assert_eq!(CmpMode::GreaterOrEqual.to_string(), ">=");
    }

    #[test]
    fn reverse_swaps_direction() {
        assert_eq!(CmpMode::Less.reverse(), CmpMode::Greater);
        assert_eq!(CmpMode::Equal.reverse(), CmpMode::Equal);
        for mode in CmpMode::ALL {
            assert_eq!(mode.reverse().reverse(), mode);
        }
    }

    #[test]
    fn holds_matches_ordering() {
        assert!(CmpMode::LessOrEqual.holds(Ordering::Equal));
        assert!(!CmpMode::Greater.holds(Ordering::Equal));
        assert!(CmpMode::GreaterOrEqual.holds(Ordering::Greater));
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&CmpMode::GreaterOrEqual).unwrap();
        assert_eq!(json, "\"greater_or_equal\"");
        let back: CmpMode = serde_json::from_str("\"less\"").unwrap();
        assert_eq!(back, CmpMode::Less);
    }
}

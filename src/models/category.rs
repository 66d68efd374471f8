//! Business line categories
//!
//! The kiosk runs two business lines and every transaction belongs to one of
//! them. The set is closed; reports iterate `Category::ALL` in order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed business line label
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Category {
    /// Ice cream and toys
    #[default]
    #[serde(rename = "Es Krim & Mainan")]
    EsKrimMainan,
    /// LPG gas cylinders
    #[serde(rename = "Gas")]
    Gas,
}

impl Category {
    /// Every category, in report order
    pub const ALL: [Category; 2] = [Category::EsKrimMainan, Category::Gas];

    /// The display label, which is also the stored form
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EsKrimMainan => "Es Krim & Mainan",
            Self::Gas => "Gas",
        }
    }

    /// Short ASCII name accepted on the command line
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::EsKrimMainan => "es-krim",
            Self::Gas => "gas",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Accepts the label, the slug, or the label in any letter case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.label().eq_ignore_ascii_case(needle) || c.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CategoryParseError(needle.to_string()))
    }
}

/// Error returned for a label outside the closed category set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<_> = Category::ALL
            .iter()
            .map(|c| format!("'{}' ({})", c.label(), c.slug()))
            .collect();
        write!(f, "Unknown category '{}'. Expected one of {}", self.0, known.join(", "))
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_and_slug() {
        assert_eq!("Gas".parse::<Category>().unwrap(), Category::Gas);
        assert_eq!("gas".parse::<Category>().unwrap(), Category::Gas);
        assert_eq!(
            "Es Krim & Mainan".parse::<Category>().unwrap(),
            Category::EsKrimMainan
        );
        assert_eq!(
            "es-krim".parse::<Category>().unwrap(),
            Category::EsKrimMainan
        );
        assert!("Pulsa".parse::<Category>().is_err());
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::EsKrimMainan).unwrap();
        assert_eq!(json, "\"Es Krim & Mainan\"");
        let back: Category = serde_json::from_str("\"Gas\"").unwrap();
        assert_eq!(back, Category::Gas);
    }

    #[test]
    fn test_all_order() {
        assert_eq!(Category::ALL, [Category::EsKrimMainan, Category::Gas]);
    }
}

use std::{fmt::Display, str::FromStr};

use quickcheck::Arbitrary;

use crate::Error;

/// The direction in which [sort](crate::IntRange::sort) places the bounds of a range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Order {
    /// `first <= last`
    #[default]
    Ascending,
    /// `first >= last`
    Descending,
}

impl FromStr for Order {
    type Err = Error;

    /// Parses an order by name.
    /// Only the exact names `ascending` and `descending` are accepted.
    ///
    /// # Example
    /// ```
    /// use range_ext::{Error, Order};
    ///
    /// assert_eq!("ascending".parse(), Ok(Order::Ascending));
    /// assert_eq!("descending".parse(), Ok(Order::Descending));
    /// assert!(matches!("DESC".parse::<Order>(), Err(Error::InvalidOption { .. })));
    /// assert!(matches!("sideways".parse::<Order>(), Err(Error::InvalidOption { .. })));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(Order::Ascending),
            "descending" => Ok(Order::Descending),
            _ => Err(Error::InvalidOption {
                value: s.to_string(),
            }),
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Order::Ascending => write!(f, "ascending"),
            Order::Descending => write!(f, "descending"),
        }
    }
}

impl Arbitrary for Order {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if bool::arbitrary(g) {
            Order::Ascending
        } else {
            Order::Descending
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[quickcheck]
    fn display_parse_inverse(o: Order) -> bool {
        o.to_string().parse::<Order>() == Ok(o)
    }

    #[test]
    fn test_default_is_ascending() {
        assert_eq!(Order::default(), Order::Ascending);
    }

    #[test]
    fn test_parse_exact_names() {
        assert_eq!("ascending".parse(), Ok(Order::Ascending));
        assert_eq!("descending".parse(), Ok(Order::Descending));
    }

    #[test]
    fn test_parse_rejects_aliases_and_case() {
        for name in ["asc", "desc", "DESC", "Ascending", "Descending", "DESCENDING", " ascending"] {
            assert_eq!(
                name.parse::<Order>(),
                Err(Error::InvalidOption {
                    value: name.to_string()
                }),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "".parse::<Order>(),
            Err(Error::InvalidOption {
                value: String::new()
            })
        );
        assert_eq!(
            ":descending".parse::<Order>(),
            Err(Error::InvalidOption {
                value: ":descending".to_string()
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Order::Descending).unwrap(),
            "\"descending\""
        );
        let o: Order = serde_json::from_str("\"ascending\"").unwrap();
        assert_eq!(o, Order::Ascending);
    }
}

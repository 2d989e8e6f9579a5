//! # Coupons
//!
//! The closed set of coupon codes the checkout accepts.
//!
//! Codes are matched case-insensitively. Anything outside this table is not
//! an error for the engine: `apply_coupon` simply leaves the order untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

/// A known coupon code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Coupon {
    /// `DESCONTO10`: 10% off.
    #[serde(rename = "DESCONTO10")]
    Desconto10,
    /// `PROMO20`: 20% off.
    #[serde(rename = "PROMO20")]
    Promo20,
    /// `BLACKFRIDAY`: 30% off.
    #[serde(rename = "BLACKFRIDAY")]
    BlackFriday,
}

impl Coupon {
    pub const ALL: [Coupon; 3] = [Coupon::Desconto10, Coupon::Promo20, Coupon::BlackFriday];

    /// Canonical (uppercase) code.
    pub const fn code(&self) -> &'static str {
        match self {
            Coupon::Desconto10 => "DESCONTO10",
            Coupon::Promo20 => "PROMO20",
            Coupon::BlackFriday => "BLACKFRIDAY",
        }
    }

    /// Discount in basis points.
    pub const fn discount_bps(&self) -> u32 {
        match self {
            Coupon::Desconto10 => 1000,
            Coupon::Promo20 => 2000,
            Coupon::BlackFriday => 3000,
        }
    }

    /// Looks up a raw, user-typed code. Only letter case is normalized;
    /// surrounding whitespace makes the code unknown.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::coupon::Coupon;
    ///
    /// assert_eq!(Coupon::parse("promo20"), Some(Coupon::Promo20));
    /// assert_eq!(Coupon::parse("BlackFriday"), Some(Coupon::BlackFriday));
    /// assert_eq!(Coupon::parse(" PROMO20 "), None);
    /// assert_eq!(Coupon::parse("XYZ123"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Coupon> {
        let normalized = raw.to_uppercase();
        Coupon::ALL
            .into_iter()
            .find(|coupon| coupon.code() == normalized)
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Coupon {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coupon::parse(s).ok_or_else(|| CoreError::UnknownCoupon(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        assert_eq!(Coupon::Desconto10.discount_bps(), 1000);
        assert_eq!(Coupon::Promo20.discount_bps(), 2000);
        assert_eq!(Coupon::BlackFriday.discount_bps(), 3000);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        for coupon in Coupon::ALL {
            assert_eq!(Coupon::parse(coupon.code()), Some(coupon));
            assert_eq!(Coupon::parse(&coupon.code().to_lowercase()), Some(coupon));
        }
        assert_eq!(Coupon::parse("Desconto10"), Some(Coupon::Desconto10));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Coupon::parse(""), None);
        assert_eq!(Coupon::parse("DESCONTO"), None);
        assert_eq!(Coupon::parse("PROMO 20"), None);
        assert_eq!(Coupon::parse(" PROMO20 "), None);
        assert_eq!(Coupon::parse("desconto10\n"), None);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "XYZ123".parse::<Coupon>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownCoupon(code) if code == "XYZ123"));
        assert_eq!("blackfriday".parse::<Coupon>().unwrap(), Coupon::BlackFriday);
    }

    #[test]
    fn test_serde_uses_canonical_code() {
        assert_eq!(
            serde_json::to_string(&Coupon::BlackFriday).unwrap(),
            "\"BLACKFRIDAY\""
        );
    }
}

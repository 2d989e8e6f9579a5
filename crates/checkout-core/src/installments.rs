//! # Installments
//!
//! Credit-card installment options shown under the order total
//! ("12x de R$ 70,97"). Display only: each share is rounded to the nearest
//! centavo and no interest is charged.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Largest installment count offered.
pub const MAX_INSTALLMENTS: u32 = 12;

/// One installment option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Installment {
    pub count: u32,
    /// Value of each share.
    pub amount: Money,
}

impl Installment {
    /// Paid in full ("à vista").
    #[inline]
    pub fn is_single(&self) -> bool {
        self.count == 1
    }
}

/// Lists the options from 1x to `MAX_INSTALLMENTS`x.
///
/// ## Example
/// ```rust
/// use checkout_core::installments::installment_options;
/// use checkout_core::Money;
///
/// let options = installment_options(Money::from_cents(85160));
/// assert_eq!(options.len(), 12);
/// assert_eq!(options[0].amount.cents(), 85160);
/// assert_eq!(options[11].amount.cents(), 7097);
/// ```
pub fn installment_options(total: Money) -> Vec<Installment> {
    (1..=MAX_INSTALLMENTS)
        .filter_map(|count| total.split(count).map(|amount| Installment { count, amount }))
        .collect()
}

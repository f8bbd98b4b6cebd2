use std::fmt::{Debug, Display, Formatter};

use crate::quantity::currency::Cost;

/// Proportion displayed as a percentage, whole by default.
pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*}%", f.precision().unwrap_or(0), self.0 * 100.0)
    }
}

/// Cost prefixed with the currency symbol.
pub struct FormattedCost<'a> {
    pub cost: Cost,
    pub symbol: &'a str,
}

impl Display for FormattedCost<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:.*}", self.symbol, f.precision().unwrap_or(2), self.cost.0)
    }
}

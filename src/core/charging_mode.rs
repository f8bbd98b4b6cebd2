use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargingMode {
    /// Regular AC charging, the reference for the battery cycle life.
    Slow,

    /// Anything faster: shortens the battery life by the fast-charge penalty.
    Fast,
}

impl Display for ChargingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slow => write!(f, "slow"),
            Self::Fast => write!(f, "fast"),
        }
    }
}

impl ChargingMode {
    /// Scale of the degradation cost relative to slow charging.
    ///
    /// `fast_penalty` is the cycle life multiplier under fast charging, so fewer cycles
    /// make each charged kilowatt-hour proportionally more expensive.
    #[must_use]
    pub fn degradation_multiplier(self, fast_penalty: f64) -> f64 {
        match self {
            Self::Slow => 1.0,
            Self::Fast => 1.0 / fast_penalty,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Slow => Color::Green,
            Self::Fast => Color::DarkYellow,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn slow_is_reference() {
        assert_abs_diff_eq!(ChargingMode::Slow.degradation_multiplier(0.75), 1.0);
    }

    #[test]
    fn fast_amplifies() {
        assert_abs_diff_eq!(ChargingMode::Fast.degradation_multiplier(0.75), 1.0 / 0.75);
        assert_abs_diff_eq!(ChargingMode::Fast.degradation_multiplier(0.5), 2.0);
    }

    #[test]
    fn fast_without_penalty_equals_slow() {
        assert_abs_diff_eq!(
            ChargingMode::Fast.degradation_multiplier(1.0),
            ChargingMode::Slow.degradation_multiplier(1.0),
        );
    }

    #[test]
    fn display() {
        assert_eq!(ChargingMode::Slow.to_string(), "slow");
        assert_eq!(ChargingMode::Fast.to_string(), "fast");
    }

    #[test]
    fn serialize_lowercase() {
        assert_eq!(serde_json::to_string(&ChargingMode::Fast).unwrap(), r#""fast""#);
    }
}

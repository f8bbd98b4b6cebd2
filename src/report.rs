use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    core::{calculator::Estimate, scenario::Scenario},
    fmt::{FormattedCost, FormattedPercentage},
    quantity::currency::Cost,
};

pub const DISCLAIMER: &str = "Note: Degradation cost is a simplified proxy for interview \
                              discussion (not a lab-grade model).";

/// Plain-text charging report.
#[must_use]
pub struct TextReport<'a> {
    pub scenario: &'a Scenario,
    pub estimate: &'a Estimate,
    pub currency_symbol: &'a str,
}

impl TextReport<'_> {
    const fn cost(&self, cost: Cost) -> FormattedCost<'_> {
        FormattedCost { cost, symbol: self.currency_symbol }
    }
}

impl Display for TextReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { scenario, estimate, .. } = self;
        writeln!(f, "=== EV Charging Cost & Health Impact ===")?;
        writeln!(f, "Battery               : {:.2}", scenario.battery_capacity)?;
        writeln!(
            f,
            "From SoC -> To SoC    : {} -> {}",
            FormattedPercentage(scenario.start_state_of_charge),
            FormattedPercentage(scenario.end_state_of_charge),
        )?;
        writeln!(
            f,
            "Charger Power         : {:.1} | Mode: {}",
            scenario.charger_power, scenario.mode,
        )?;
        writeln!(f, "Efficiency (wall->pack): {:.2}", scenario.charge_efficiency)?;
        writeln!(f)?;
        writeln!(f, "Energy to battery     : {:.2}", estimate.energy_to_pack)?;
        writeln!(f, "Energy from grid      : {:.2}", estimate.energy_from_grid)?;
        writeln!(f, "Time to charge        : {:.2}", estimate.charge_time)?;
        writeln!(f, "Electricity cost      : {}", self.cost(estimate.electricity_cost))?;
        writeln!(f, "Degradation cost est. : {}", self.cost(estimate.degradation_cost))?;
        writeln!(f, "Total estimated cost  : {}", self.cost(estimate.total_cost))?;
        writeln!(f)?;
        write!(f, "{DISCLAIMER}")
    }
}

/// Machine-readable counterpart of [`TextReport`].
#[must_use]
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub scenario: &'a Scenario,
    pub estimate: &'a Estimate,
}

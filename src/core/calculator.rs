//! Charging cost formulas.

use serde::Serialize;

use crate::{
    core::{charging_mode::ChargingMode, scenario::Scenario},
    prelude::*,
    quantity::{
        Zero,
        currency::Cost,
        energy::KilowattHours,
        power::Kilowatts,
        price::KilowattHourPrice,
        time::Hours,
    },
};

/// Energy to add to the pack to get from the start to the end state of charge.
///
/// Discharging scenarios (end below start) need no energy rather than a negative amount.
pub fn energy_needed(
    capacity: KilowattHours,
    start_state_of_charge: f64,
    end_state_of_charge: f64,
) -> KilowattHours {
    capacity * (end_state_of_charge - start_state_of_charge).max(0.0)
}

/// Energy drawn from the grid to deliver `energy_to_pack` into the cells.
pub fn energy_from_grid(energy_to_pack: KilowattHours, efficiency: f64) -> KilowattHours {
    energy_to_pack / efficiency
}

/// Time to deliver `energy_to_pack`, the charger power floored at [`Kilowatts::MIN_CHARGING_POWER`].
pub fn charge_time_hours(energy_to_pack: KilowattHours, power: Kilowatts, efficiency: f64) -> Hours {
    energy_from_grid(energy_to_pack, efficiency) / power.max(Kilowatts::MIN_CHARGING_POWER)
}

pub fn electricity_cost(grid_energy: KilowattHours, tariff: KilowattHourPrice) -> Cost {
    grid_energy * tariff
}

/// Amortized battery wear for charging `energy_to_pack` in the given mode.
pub fn degradation_cost(
    energy_to_pack: KilowattHours,
    mode: ChargingMode,
    unit_cost: KilowattHourPrice,
    fast_penalty: f64,
) -> Cost {
    energy_to_pack * unit_cost * mode.degradation_multiplier(fast_penalty)
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Estimate {
    /// Energy delivered into the cells.
    pub energy_to_pack: KilowattHours,

    /// Energy billed by the grid, including the charging losses.
    pub energy_from_grid: KilowattHours,

    pub charge_time: Hours,
    pub electricity_cost: Cost,
    pub degradation_cost: Cost,

    /// Electricity and degradation together.
    pub total_cost: Cost,
}

impl Estimate {
    #[instrument(
        skip_all,
        fields(mode = %scenario.mode, capacity = %scenario.battery_capacity)
    )]
    pub fn from_scenario(scenario: &Scenario) -> Result<Self> {
        ensure!(scenario.charge_efficiency != 0.0, "charge efficiency must not be zero");
        ensure!(
            scenario.mode == ChargingMode::Slow || scenario.fast_penalty != 0.0,
            "fast-charge penalty must not be zero when charging fast",
        );

        let energy_to_pack = energy_needed(
            scenario.battery_capacity,
            scenario.start_state_of_charge,
            scenario.end_state_of_charge,
        );
        let energy_from_grid = energy_from_grid(energy_to_pack, scenario.charge_efficiency);
        let charge_time =
            charge_time_hours(energy_to_pack, scenario.charger_power, scenario.charge_efficiency);
        let electricity_cost = electricity_cost(energy_from_grid, scenario.tariff);
        let degradation_cost = degradation_cost(
            energy_to_pack,
            scenario.mode,
            scenario.degradation_unit_cost,
            scenario.fast_penalty,
        );
        debug!(
            %energy_to_pack,
            %energy_from_grid,
            %charge_time,
            effective_cycle_life = scenario.effective_cycle_life(),
            "estimated"
        );
        Ok(Self {
            energy_to_pack,
            energy_from_grid,
            charge_time,
            electricity_cost,
            degradation_cost,
            total_cost: electricity_cost + degradation_cost,
        })
    }
}

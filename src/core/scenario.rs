use bon::Builder;
use serde::Serialize;

use crate::{
    core::charging_mode::ChargingMode,
    quantity::{energy::KilowattHours, power::Kilowatts, price::KilowattHourPrice},
};

/// Single charging session to estimate.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Builder, Serialize)]
pub struct Scenario {
    /// Total pack capacity.
    pub battery_capacity: KilowattHours,

    /// State of charge before plugging in, `0.0..=1.0`.
    pub start_state_of_charge: f64,

    /// Target state of charge, `0.0..=1.0`.
    pub end_state_of_charge: f64,

    pub charger_power: Kilowatts,

    /// Grid tariff.
    pub tariff: KilowattHourPrice,

    /// Wall-to-pack efficiency, `(0.0, 1.0]`.
    pub charge_efficiency: f64,

    pub mode: ChargingMode,

    /// Equivalent full cycles the pack survives under slow charging.
    pub base_cycle_life: u32,

    /// Cycle life multiplier under fast charging, `(0.0, 1.0]`.
    pub fast_penalty: f64,

    /// Amortized battery health cost per kilowatt-hour of throughput.
    pub degradation_unit_cost: KilowattHourPrice,
}

impl Default for Scenario {
    /// Motorcycle-class pack on an AC wallbox.
    fn default() -> Self {
        Self {
            battery_capacity: KilowattHours(4.0),
            start_state_of_charge: 0.20,
            end_state_of_charge: 0.90,
            charger_power: Kilowatts(3.0),
            tariff: KilowattHourPrice(9.0),
            charge_efficiency: 0.92,
            mode: ChargingMode::Fast,
            base_cycle_life: 1200,
            fast_penalty: 0.75,
            degradation_unit_cost: KilowattHourPrice(1.5),
        }
    }
}

impl Scenario {
    /// Equivalent full cycles expected under the scenario's charging mode.
    ///
    /// Informational: the degradation cost is derived from the unit cost, not from this.
    #[must_use]
    pub fn effective_cycle_life(&self) -> f64 {
        f64::from(self.base_cycle_life) / self.mode.degradation_multiplier(self.fast_penalty)
    }
}

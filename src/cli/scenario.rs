//! Charging scenario arguments.
//!
//! Defaults describe a motorcycle-class pack on an AC wallbox.

use clap::Parser;

use crate::{
    core::{charging_mode::ChargingMode, scenario::Scenario},
    quantity::{energy::KilowattHours, power::Kilowatts, price::KilowattHourPrice},
};

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct ScenarioArgs {
    /// Total battery capacity in kilowatt-hours.
    #[clap(
        long = "battery-capacity-kwh",
        default_value = "4.0",
        env = "EV_CHARGING_BATTERY_CAPACITY_KWH"
    )]
    pub battery_capacity: KilowattHours,

    /// State of charge before charging, `0.0..=1.0`.
    #[clap(long, default_value = "0.20", env = "EV_CHARGING_START_STATE_OF_CHARGE")]
    pub start_state_of_charge: f64,

    /// Target state of charge, `0.0..=1.0`.
    #[clap(long, default_value = "0.90", env = "EV_CHARGING_END_STATE_OF_CHARGE")]
    pub end_state_of_charge: f64,

    /// Charger power in kilowatts.
    #[clap(long = "charger-power-kw", default_value = "3.0", env = "EV_CHARGING_CHARGER_POWER_KW")]
    pub charger_power: Kilowatts,

    /// Electricity price per kilowatt-hour.
    #[clap(long = "tariff-per-kwh", default_value = "9.0", env = "EV_CHARGING_TARIFF_PER_KWH")]
    pub tariff: KilowattHourPrice,

    /// Wall-to-pack charging efficiency.
    #[clap(long, default_value = "0.92", env = "EV_CHARGING_CHARGE_EFFICIENCY")]
    pub charge_efficiency: f64,

    #[clap(long, value_enum, default_value = "fast", env = "EV_CHARGING_CHARGING_MODE")]
    pub mode: ChargingMode,

    /// Equivalent full cycles under slow charging.
    #[clap(long, default_value = "1200", env = "EV_CHARGING_BASE_CYCLE_LIFE")]
    pub base_cycle_life: u32,

    /// Cycle life multiplier for fast charging, for example `0.75` for 25% fewer cycles.
    #[clap(
        long = "fast-charge-penalty",
        default_value = "0.75",
        env = "EV_CHARGING_FAST_CHARGE_PENALTY"
    )]
    pub fast_penalty: f64,

    /// Amortized battery health cost per kilowatt-hour charged.
    #[clap(
        long = "degradation-cost-per-kwh",
        default_value = "1.5",
        env = "EV_CHARGING_DEGRADATION_COST_PER_KWH"
    )]
    pub degradation_unit_cost: KilowattHourPrice,
}

impl From<ScenarioArgs> for Scenario {
    fn from(args: ScenarioArgs) -> Self {
        Self::builder()
            .battery_capacity(args.battery_capacity)
            .start_state_of_charge(args.start_state_of_charge)
            .end_state_of_charge(args.end_state_of_charge)
            .charger_power(args.charger_power)
            .tariff(args.tariff)
            .charge_efficiency(args.charge_efficiency)
            .mode(args.mode)
            .base_cycle_life(args.base_cycle_life)
            .fast_penalty(args.fast_penalty)
            .degradation_unit_cost(args.degradation_unit_cost)
            .build()
    }
}

use crate::quantity::{currency::Cost, power::Kilowatts, price::KilowattHourPrice, time::Hours};

quantity!(
    /// Energy, either delivered to the pack or drawn from the grid.
    KilowattHours, via: f64, suffix: "kWh", precision: 2
);

implement_div!(KilowattHours, Kilowatts, Hours);
implement_mul!(KilowattHours, KilowattHourPrice, Cost);

quantity!(
    /// Currency per kilowatt-hour: grid tariff or amortized battery wear.
    KilowattHourPrice, via: f64, suffix: "/kWh", precision: 2
);

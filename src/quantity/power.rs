quantity!(Kilowatts, via: f64, suffix: "kW", precision: 1);

impl Kilowatts {
    /// Lowest power assumed when estimating the charging time.
    ///
    /// Keeps the estimate finite for a misconfigured or near-zero charger power.
    pub const MIN_CHARGING_POWER: Self = Self(0.2);
}

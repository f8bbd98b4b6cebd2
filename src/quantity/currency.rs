quantity!(
    /// Amount of money in the tariff currency.
    ///
    /// Carries no symbol: the report decides how to present it.
    Cost, via: f64, suffix: "", precision: 2
);

use clap::Parser;

#[derive(Parser)]
pub struct OutputArgs {
    /// Symbol printed in front of the amounts.
    #[clap(long, default_value = "₹", env = "EV_CHARGING_CURRENCY_SYMBOL")]
    pub currency_symbol: String,

    #[clap(long, value_enum, default_value = "text", env = "EV_CHARGING_OUTPUT_FORMAT")]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain-text report.
    Text,

    /// Scenario and estimate tables.
    Table,

    /// Pretty-printed JSON with the scenario and the estimate.
    Json,
}

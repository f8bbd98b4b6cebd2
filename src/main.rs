#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod fmt;
mod prelude;
mod quantity;
mod report;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, OutputFormat},
    core::{calculator::Estimate, scenario::Scenario},
    prelude::*,
    report::{DISCLAIMER, JsonReport, TextReport},
    tables::{build_estimate_table, build_scenario_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let scenario = Scenario::from(args.scenario);
    let estimate = Estimate::from_scenario(&scenario)?;
    info!(total_cost = %estimate.total_cost, "estimated");

    let currency_symbol = args.output.currency_symbol.as_str();
    match args.output.format {
        OutputFormat::Text => {
            println!("{}", TextReport { scenario: &scenario, estimate: &estimate, currency_symbol });
        }
        OutputFormat::Table => {
            println!("{}", build_scenario_table(&scenario));
            println!("{}", build_estimate_table(&estimate, currency_symbol));
            println!("{DISCLAIMER}");
        }
        OutputFormat::Json => {
            let report = JsonReport { scenario: &scenario, estimate: &estimate };
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("failed to serialize the report")?
            );
        }
    }

    Ok(())
}

mod output;
mod scenario;

use clap::Parser;

pub use self::{
    output::{OutputArgs, OutputFormat},
    scenario::ScenarioArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub scenario: ScenarioArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

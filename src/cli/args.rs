//! Clap argument types.

use clap::Parser;

use calckit::calculator::Operation;
use calckit::config::Config;
use calckit::harness::FailurePolicy;
use calckit::output::OutputFormat;

/// Four-function calculator with a built-in test harness.
#[derive(Parser, Debug)]
#[command(name = "calckit", version = calckit::constants::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run the calculator test suite.
    Test(TestArgs),

    /// Print the calculator demo.
    Demo,

    /// Evaluate a single operation.
    Calc(CalcArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `test` subcommand.
#[derive(Parser, Debug, Default)]
pub struct TestArgs {
    /// Keep evaluating assertions after the first failure in a case.
    #[arg(long, default_value_t = false)]
    pub collect_all: bool,

    /// Output format (overrides config and CALCKIT_FORMAT).
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Disable coloured output.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

impl TestArgs {
    /// Layer the CLI flags on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if self.collect_all {
            config.harness.failure_policy = FailurePolicy::CollectAll;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.no_color {
            config.output.color = false;
        }
    }
}

/// Arguments for the `calc` subcommand.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Operation to apply.
    pub operation: Operation,

    /// Left operand.
    #[arg(allow_negative_numbers = true)]
    pub lhs: f64,

    /// Right operand.
    #[arg(allow_negative_numbers = true)]
    pub rhs: f64,

    /// Fail on division by zero instead of printing the 0.0 sentinel.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

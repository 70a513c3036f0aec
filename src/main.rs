//! calckit: four-function calculator CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use calckit::calculator::StderrSink;
use calckit::config::Config;
use calckit::constants;
use calckit::demo::{self, Expression};
use calckit::env::Env;
use calckit::harness::{Runner, calculator_suite};
use calckit::logging;
use calckit::output;

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{CalcArgs, Cli, Command, TestArgs};

fn main() {
    let env = Env::real();
    logging::init(&env);

    match run(&env) {
        Ok(code) => {
            let _ = std::io::stdout().flush();
            process::exit(code);
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    }
}

/// Dispatch the subcommand and return the process exit code.
fn run(env: &Env) -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Command::Test(args) => run_test(&args, env),
        Command::Demo => run_demo().map(|()| 0),
        Command::Calc(args) => run_calc(&args).map(|()| 0),
        Command::Version => run_version().map(|()| 0),
    }
}

/// Run the calculator suite; exit code reflects the summary.
fn run_test(args: &TestArgs, env: &Env) -> Result<i32> {
    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let mut config = Config::load(Some(&cwd), env).context("failed to load configuration")?;
    args.apply(&mut config);
    output::apply_color(config.output.color);

    let report = Runner::new(config.harness.failure_policy).run(&calculator_suite());
    print!("{}", config.output.format.render(&report));
    Ok(report.summary.exit_code())
}

/// Print the demo listing.
fn run_demo() -> Result<()> {
    let listing = demo::render(&StderrSink).context("demo scenario failed")?;
    print!("{listing}");
    Ok(())
}

/// Evaluate one expression from the command line.
fn run_calc(args: &CalcArgs) -> Result<()> {
    let expr = Expression::new(args.operation, args.lhs, args.rhs);
    let result = if args.strict {
        expr.evaluate_strict()
    } else {
        expr.evaluate(&StderrSink)
    };
    let value = result.with_context(|| format!("cannot evaluate {expr}"))?;

    println!("{expr} = {value}");
    Ok(())
}

/// Print version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

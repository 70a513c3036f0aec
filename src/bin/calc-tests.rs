//! Standalone calculator test runner.
//!
//! Takes no arguments. Prints the report on stdout and exits 0 when every
//! case passed, 1 otherwise. Honours `.calckit.toml` and the `CALCKIT_*`
//! environment variables; with neither present it runs the suite with
//! stop-on-first-failure and a coloured terminal report.

use std::io::Write;
use std::process;

use anyhow::{Context, Result};

use calckit::config::Config;
use calckit::env::Env;
use calckit::harness::{Runner, calculator_suite};
use calckit::{logging, output};

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

fn run(env: &Env) -> Result<i32> {
    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let config = Config::load(Some(&cwd), env).context("failed to load configuration")?;
    output::apply_color(config.output.color);

    let report = Runner::new(config.harness.failure_policy).run(&calculator_suite());
    print!("{}", config.output.format.render(&report));
    Ok(report.summary.exit_code())
}

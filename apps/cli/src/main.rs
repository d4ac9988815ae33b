mod report;
mod session;
mod style;

use std::io;

use anyhow::Result;
use clap::Parser;

use session::Session;

/// rateio: interactive proportional-cost calculator for brokerage notes.
///
/// Collects the asset lines of a brokerage note and the settled note
/// total, distributes the acquisition costs across the lines in
/// proportion to their declared values and prints a per-asset cost
/// report. Amounts are read and printed in the Brazilian format
/// (1.234,56).
#[derive(Debug, Parser)]
#[command(name = "rateio", version)]
struct Opts {
    /// Disable ANSI styling in prompts and the report table.
    #[clap(long)]
    plain: bool,

    /// Logging verbosity (-v for debug, -vv for trace).
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let llv = match opts.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };

    let mut lcfg = simplelog::ConfigBuilder::new();
    lcfg.set_time_level(simplelog::LevelFilter::Off)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);

    simplelog::TermLogger::init(
        llv,
        lcfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), !opts.plain);
    session.run()?;
    Ok(())
}

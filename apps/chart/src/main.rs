mod data;
mod svg;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

/// rateio-chart: renders the proportional cost chart from note data.
///
/// Reads a JSON file with the note's asset lines ({ticker, valor}) and
/// the total acquisition cost (custo_total), distributes the cost across
/// the lines in proportion to their declared values and writes a
/// horizontal bar chart as SVG.
#[derive(Debug, Parser)]
#[command(name = "rateio-chart", version)]
struct Opts {
    /// Path to the note data JSON file.
    #[clap(long, default_value = "data/demo_data.json")]
    data: PathBuf,

    /// Output SVG path.
    #[clap(long, default_value = "assets/graph.svg")]
    output: PathBuf,

    /// Output width in pixels.
    #[clap(long, default_value_t = 1400)]
    width: u32,

    /// Output height in pixels.
    #[clap(long, default_value_t = 520)]
    height: u32,

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

    let note = data::load_note_data(&opts.data)?;
    let chart = data::build_chart_data(&note)?;
    svg::write_chart(&chart, &opts.output, opts.width, opts.height)?;
    info!("chart written to {}", opts.output.display());
    Ok(())
}

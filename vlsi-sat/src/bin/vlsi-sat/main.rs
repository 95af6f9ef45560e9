mod os_signal_termination;
mod result;

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::VlsiResult;
use vlsi_sat::encoders::EncodingOptions;
use vlsi_sat::encoders::OriginMode;
use vlsi_sat::encoders::SymmetryBreaking;
use vlsi_sat::engine::BundledEngine;
use vlsi_sat::io::parse_instance;
use vlsi_sat::io::write_solution;
use vlsi_sat::optimisation::optimise;
use vlsi_sat::optimisation::OptimiserOptions;
use vlsi_sat::optimisation::SearchStrategy;
use vlsi_sat::solver::statistics::configure_statistic_logging;
use vlsi_sat::solver::SatOptions;
use vlsi_sat::solver::SequenceGeneratorType;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The instance to pack. The first line holds the plate width, the second the number of
    /// rectangles, followed by one 'width height' line per rectangle.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// Where to write the packing. When omitted, the packing is written to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The number of seconds the whole search may take; every probed height draws from this
    /// budget. When omitted, the search runs until the optimum is proven.
    #[arg(short = 't', long = "time-limit")]
    time_limit: Option<u64>,

    /// How the candidate heights are visited.
    #[arg(long, value_enum, default_value_t)]
    strategy: SearchStrategy,

    /// Allow rectangles to be turned by 90 degrees.
    #[arg(long)]
    rotation: bool,

    /// How many leading ladder literals take part in breaking the mirror symmetry: 'none',
    /// 'full', 'sqrt' (the square root of the ladder length) or a fixed number. 'corner' instead
    /// keeps the rectangle with the smallest side in the lower-left half of its range.
    #[arg(long = "symmetry-breaking", default_value_t)]
    symmetry_breaking: SymmetryBreaking,

    /// Whether the last ladder literal of every coordinate is asserted, or only one of the
    /// ladder literals.
    #[arg(long = "origin-mode", value_enum, default_value_t)]
    origin_mode: OriginMode,

    /// The sequence from which the number of conflicts between restarts is taken.
    #[arg(long = "restart-sequence", value_enum, default_value_t)]
    restart_sequence: SequenceGeneratorType,

    /// The first value of the restart sequence.
    ///
    /// Possible values: u64, larger than 0
    #[arg(long = "restart-base", default_value_t = 100, verbatim_doc_comment)]
    restart_base: u64,

    /// Shuffle the initial variable order of the engine with this seed.
    #[arg(long = "random-seed")]
    random_seed: Option<u64>,

    /// Enables log message output from the solver.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Log the statistics of the search to stderr once it is done.
    #[arg(short = 's', long = "log-statistics")]
    log_statistics: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging("%%vlsi-stat:", None, None, Some(Box::new(std::io::stderr())));
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "c {}: {}", record.level(), record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> VlsiResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics);

    if vlsi_sat::solver::asserts::VLSI_ASSERT_LEVEL_DEFINITION
        >= vlsi_sat::solver::asserts::VLSI_ASSERT_MODERATE
    {
        warn!("Potential performance degradation: the assert level exceeds the simple level");
    }

    let instance = parse_instance(File::open(&args.instance_path)?)?;
    info!(
        "Read {} rectangles for a plate of width {} from {}",
        instance.num_rectangles(),
        instance.plate_width(),
        args.instance_path.display()
    );

    let options = OptimiserOptions {
        strategy: args.strategy,
        encoding: EncodingOptions {
            origin_mode: args.origin_mode,
            symmetry_breaking: args.symmetry_breaking,
            allow_rotation: args.rotation,
        },
        time_limit: args.time_limit.map(Duration::from_secs),
    };
    let sat_options = SatOptions {
        restart_sequence_generator_type: args.restart_sequence,
        restart_base: args.restart_base.max(1) as i64,
        random_seed: args.random_seed,
        ..SatOptions::default()
    };

    let interrupt = OsSignal::install()?;
    let report = optimise(&instance, &options, || {
        BundledEngine::with_interrupt(sat_options, interrupt.clone())
    })?;

    match report.result.solution() {
        Some(solution) => match &args.output {
            Some(path) => write_solution(solution, BufWriter::new(File::create(path)?))?,
            None => write_solution(solution, std::io::stdout().lock())?,
        },
        None => println!("UNKNOWN"),
    }

    report.log_statistics();

    Ok(())
}

mod os_signal_termination;
mod result;

use std::fs::File;
use std::io::stdin;
use std::io::stdout;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use log::LevelFilter;
use log::error;
use log::info;
use log::warn;
use os_signal_termination::OsSignal;
use result::StnuSolverResult;
use stnu_core::convert_case::Case;
use stnu_core::statistics::configure_statistic_logging;
use stnu_core::stnu_asserts;
use stnu_core::termination::Combinator;
use stnu_core::termination::TimeBudget;
use stnu_core::Stnu;
use stnu_format::constraint_dump::read_constraint_dump;
use stnu_format::constraint_dump::write_dot;
use stnu_format::constraint_dump::write_summary;
use stnu_format::reader::read_network;
use stnu_format::reader::NamedNetwork;
use stnu_format::writer::write_network;

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
    #[command(subcommand)]
    command: Command,

    /// Enables logging of the reasoning of the engine.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", global = true, verbatim_doc_comment)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decide whether a network is dynamically controllable.
    ///
    /// The network is given in the text format: the number of controllable edges, one line
    /// `<from> <to> <lower bound> <upper bound>` per controllable edge, the number of contingent
    /// edges and one such line per contingent edge.
    #[command(verbatim_doc_comment)]
    Check {
        /// The file containing the network. The network is read from standard input if no file is
        /// given.
        instance_path: Option<PathBuf>,

        /// Print the network before deciding it.
        ///
        /// Possible values: bool
        #[arg(short = 'p', long = "print", verbatim_doc_comment)]
        print: bool,

        /// The number of milliseconds the engine is allowed to take. When the time is up, the
        /// verdict is 'unknown'.
        ///
        /// Possible values: u64
        #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
        time_limit: Option<u64>,

        /// Log the statistics of the engine after deciding the network.
        ///
        /// Possible values: bool
        #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
        log_statistics: bool,
    },

    /// Convert a constraint dump to a different representation.
    Convert {
        /// The XML file containing the constraint dump.
        input_path: PathBuf,

        /// What to convert the dump to.
        #[arg(long, value_enum, default_value_t)]
        output_type: OutputType,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputType {
    /// The number of nodes and of (un)controllable edges.
    #[default]
    Summary,
    /// A Graphviz digraph.
    Dot,
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging("%%%stnu-stat:", Some("%%%stnu-stat-end"), Some(Case::Snake));
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
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

fn run() -> StnuSolverResult<()> {
    let args = Args::parse();

    let log_statistics = matches!(
        args.command,
        Command::Check {
            log_statistics: true,
            ..
        }
    );
    configure_logging(args.verbose, log_statistics);

    if stnu_asserts::STNU_ASSERT_LEVEL_DEFINITION >= stnu_asserts::STNU_ASSERT_MODERATE {
        warn!("Potential performance degradation: the assertion level is set to {}, meaning many debug asserts are active which may result in performance degradation.", stnu_asserts::STNU_ASSERT_LEVEL_DEFINITION);
    }

    match args.command {
        Command::Check {
            instance_path,
            print,
            time_limit,
            ..
        } => check(instance_path.as_deref(), print, time_limit),
        Command::Convert {
            input_path,
            output_type,
        } => convert(&input_path, output_type),
    }
}

fn check(
    instance_path: Option<&Path>,
    print: bool,
    time_limit: Option<u64>,
) -> StnuSolverResult<()> {
    let NamedNetwork { network, names } = match instance_path {
        Some(path) => {
            info!("Reading the network from {}", path.display());
            read_network(File::open(path)?)?
        }
        None => {
            info!("Reading the network from standard input");
            read_network(stdin().lock())?
        }
    };

    if print {
        let mut writer = BufWriter::new(stdout().lock());
        write_network(&mut writer, &network, &names)?;
        writer.flush()?;
    }

    let time_budget = time_limit
        .map(|milliseconds| TimeBudget::starting_now(Duration::from_millis(milliseconds)));
    let mut termination = Combinator::new(time_budget, OsSignal::install()?);

    let mut stnu = Stnu::from_network(network);
    let status = stnu.is_dynamically_controllable_within(&mut termination)?;

    println!("dynamically controllable: {status}");
    stnu.log_statistics();

    Ok(())
}

fn convert(input_path: &Path, output_type: OutputType) -> StnuSolverResult<()> {
    let constraints = read_constraint_dump(File::open(input_path)?)?;

    let mut writer = BufWriter::new(stdout().lock());
    match output_type {
        OutputType::Summary => write_summary(&mut writer, &constraints)?,
        OutputType::Dot => write_dot(&mut writer, &constraints)?,
    }
    writer.flush()?;

    Ok(())
}

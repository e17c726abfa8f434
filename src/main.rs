use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use u_tsp::approximate::solve_approx;
use u_tsp::distance::load_matrix;
use u_tsp::exact::solve_exact;
use u_tsp::report::{timed, Report, SolverRun};

/// Above this size the exact search takes noticeably long.
const EXACT_WARN_NODES: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Solve the traveling salesman problem for a cost matrix file
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Opt {
    /// Whitespace-separated n×n cost matrix, one row per line
    file: PathBuf,

    /// Run and display the exact branch-and-bound results too
    #[arg(short, long)]
    brute_force: bool,

    /// Also print the node order of each tour (text format)
    #[arg(long)]
    tour: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("u_tsp=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit with 1 like input errors; --help and --version with 0.
    let opt = match Opt::try_parse() {
        Ok(opt) => opt,
        Err(e) => {
            if let Err(io) = e.print() {
                error!("failed to print usage: {io}");
            }
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let costs = match load_matrix(&opt.file) {
        Ok(costs) => costs,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    info!(nodes = costs.size(), file = %opt.file.display(), "loaded cost matrix");

    let exact = opt.brute_force.then(|| {
        if costs.size() > EXACT_WARN_NODES {
            warn!(
                "Exact search over {} nodes explores up to {}! orderings",
                costs.size(),
                costs.size() - 1
            );
        }
        SolverRun::from(timed(|| solve_exact(&costs)))
    });
    let approximate = SolverRun::from(timed(|| solve_approx(&costs)));

    let report = Report { exact, approximate };
    if let Some(ratio) = report.approximation_ratio() {
        info!(ratio, "approximation ratio");
    }

    match opt.format {
        Format::Text => {
            print!("{report}");
            if opt.tour {
                let mut tours = String::new();
                if report.write_tours(&mut tours).is_ok() {
                    print!("{tours}");
                }
            }
        }
        Format::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

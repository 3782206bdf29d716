//! Command-line front end: runs scenarios through the solvers, prints
//! reports and optionally exports metrics as CSV.

use clap::{ArgAction, Parser, ValueEnum};
use interval_cover::exact::{ExactConfig, ExactRunner};
use interval_cover::greedy::{GreedyConfig, GreedyRunner};
use interval_cover::metrics::{
    compare_all, render_report, render_uncoverable, write_csv, MetricsRecord,
};
use interval_cover::model::Problem;
use interval_cover::ordering::IntervalOrder;
use interval_cover::scenario::Scenario;
use interval_cover::CoverError;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SolverArg {
    Exact,
    Greedy,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScenarioArg {
    Small,
    Medium,
    Large,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    LongestFirst,
    EarliestEnd,
    Input,
}

impl From<OrderArg> for IntervalOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::LongestFirst => IntervalOrder::LongestFirst,
            OrderArg::EarliestEnd => IntervalOrder::EarliestEnd,
            OrderArg::Input => IntervalOrder::Input,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "interval-cover", version, about = "Minimum interval cover solvers")]
struct Cli {
    /// Which solver(s) to run.
    #[arg(long, value_enum, default_value_t = SolverArg::Both)]
    solver: SolverArg,

    /// Which scenario(s) to run.
    #[arg(long, value_enum, default_value_t = ScenarioArg::All)]
    scenario: ScenarioArg,

    /// Use seeded random instances instead of the fixed ones.
    #[arg(long)]
    random: bool,

    /// Override the random instance seed (implies --random).
    #[arg(long)]
    seed: Option<u64>,

    /// Interval order applied before solving.
    #[arg(long, value_enum, default_value_t = OrderArg::LongestFirst)]
    order: OrderArg,

    /// Stop the exact search after this many nodes.
    #[arg(long)]
    node_limit: Option<u64>,

    /// Directory to write `exact.csv` / `greedy.csv` into.
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Run scenarios concurrently (requires the `parallel` feature).
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn scenarios(cli: &Cli) -> Result<Vec<(String, Problem)>, CoverError> {
    let selected: Vec<Scenario> = match cli.scenario {
        ScenarioArg::Small => vec![Scenario::Small],
        ScenarioArg::Medium => vec![Scenario::Medium],
        ScenarioArg::Large => vec![Scenario::Large],
        ScenarioArg::All => Scenario::ALL.to_vec(),
    };

    selected
        .into_iter()
        .map(|s| {
            let problem = if cli.random || cli.seed.is_some() {
                let mut params = s.random();
                if let Some(seed) = cli.seed {
                    params = params.with_seed(seed);
                }
                params.generate()?
            } else {
                s.problem()
            };
            Ok((s.name().to_string(), problem))
        })
        .collect()
}

fn export(dir: &Path, file: &str, records: &[MetricsRecord]) -> Result<(), CoverError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file);
    write_csv(BufWriter::new(File::create(&path)?), records)?;
    println!("Metrics written to {}", path.display());
    Ok(())
}

fn header(name: &str, label: &str, problem: &Problem) {
    println!(
        "=== {} / {label} ({} points, {} intervals) ===",
        name.to_uppercase(),
        problem.point_count(),
        problem.interval_count()
    );
    if let Some(missing) = render_uncoverable(problem) {
        print!("{missing}");
    }
}

fn run(cli: &Cli) -> Result<(), CoverError> {
    let exact_config = ExactConfig {
        interval_order: cli.order.into(),
        node_limit: cli.node_limit,
    };
    exact_config.validate()?;
    let greedy_config = GreedyConfig::default().with_interval_order(cli.order.into());

    let instances = scenarios(cli)?;
    let mut exact_records = Vec::new();
    let mut greedy_records = Vec::new();

    match cli.solver {
        SolverArg::Both => {
            let comparisons = compare_all(&instances, &exact_config, &greedy_config, cli.parallel)?;
            for (cmp, (_, problem)) in comparisons.iter().zip(&instances) {
                header(&cmp.scenario, "exact", problem);
                println!(
                    "{}",
                    render_report(problem.points(), cmp.exact.solution.as_ref(), &cmp.exact.metrics)
                );
                header(&cmp.scenario, "greedy", problem);
                println!(
                    "{}",
                    render_report(problem.points(), Some(&cmp.greedy.solution), &cmp.greedy.metrics)
                );
                match cmp.size_gap() {
                    Some(gap) => println!("Greedy uses {gap} more interval(s) than exact.\n"),
                    None => {
                        println!("No size comparison: at least one solver found no full cover.\n")
                    }
                }
                exact_records.push(cmp.exact_record());
                greedy_records.push(cmp.greedy_record());
            }
        }
        SolverArg::Exact => {
            for (name, problem) in &instances {
                let result = ExactRunner::run(problem, &exact_config)?;
                header(name, "exact", problem);
                println!(
                    "{}",
                    render_report(problem.points(), result.solution.as_ref(), &result.metrics)
                );
                exact_records.push(MetricsRecord::new(name.as_str(), &result.metrics));
            }
        }
        SolverArg::Greedy => {
            for (name, problem) in &instances {
                let result = GreedyRunner::run(problem, &greedy_config);
                header(name, "greedy", problem);
                println!(
                    "{}",
                    render_report(problem.points(), Some(&result.solution), &result.metrics)
                );
                greedy_records.push(MetricsRecord::new(name.as_str(), &result.metrics));
            }
        }
    }

    if let Some(dir) = &cli.csv_dir {
        if !exact_records.is_empty() {
            export(dir, "exact.csv", &exact_records)?;
        }
        if !greedy_records.is_empty() {
            export(dir, "greedy.csv", &greedy_records)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

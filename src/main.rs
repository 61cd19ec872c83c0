use anyhow::{anyhow, Context, Result};
use clap::Parser as ClapParser;
use log::{debug, info};
use orchestra_scheduler::io::{self, format_ordering, Cli, ProgressBar};
use orchestra_scheduler::problem;
use orchestra_scheduler::sa::SaRunner;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = args.sa_config();
    config.validate().map_err(|e| anyhow!(e))?;

    let problem = problem::load(&args.filename)
        .with_context(|| format!("could not read problem file {}", args.filename.display()))?;
    info!(
        "[MAIN] loaded {}: {} solists, {} pieces",
        args.filename.display(),
        problem.nbr_solists(),
        problem.nbr_pieces()
    );
    debug!("[MAIN] problem instance:\n{problem}");

    println!(
        "Solving {} with simulated annealing ...",
        args.filename.display()
    );

    let result = if args.quiet {
        SaRunner::run(&problem, &config)
    } else {
        SaRunner::run_with_observer(&problem, &config, &mut ProgressBar::stdout())
    };
    info!(
        "[MAIN] {} iterations in {:?}, {} accepted ({} improving)",
        result.iterations, result.elapsed, result.accepted_moves, result.improving_moves
    );

    println!("{}", result.best_cost);
    println!("{}", format_ordering(&result.best));

    Ok(())
}

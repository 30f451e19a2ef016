//! Binary for enumerating permutations and subset sums: `enumerate`
mod cli;

use std::io::Write;

use clap::Parser;
use cli::{CliApp, CliError, Command};
use exhaustive_enum::{
    EnumerationLimits, SubsetSearch,
    parser::{parse_labels, parse_values},
    permutation,
};

fn permute(
    out: &mut impl Write,
    sequence: &str,
    strategy: cli::PermuteWith,
    numbered: bool,
    json: bool,
) -> Result<(), CliError> {
    let items = parse_labels(sequence)?;
    log::info!("Permuting {} items", items.len());
    let orderings =
        permutation::enumerate_with(&items, strategy.into(), &EnumerationLimits::default())?;

    if json {
        writeln!(out, "{}", serde_json::to_string(&orderings.collect::<Vec<_>>())?)?;
        return Ok(out.flush()?);
    }
    for (i, ordering) in orderings.enumerate() {
        if numbered {
            write!(out, "#{:04}: ", i + 1)?;
        }
        writeln!(out, "{}", ordering.join(", "))?;
    }
    Ok(out.flush()?)
}

fn subsets(
    out: &mut impl Write,
    sequence: &str,
    target: i64,
    strategy: cli::SearchWith,
    pruning: bool,
    json: bool,
) -> Result<(), CliError> {
    let values = parse_values(sequence)?;
    log::info!("Searching {} values for subsets summing to {target}", values.len());
    let found = SubsetSearch::default()
        .with_strategy(strategy.into())
        .with_pruning(pruning)
        .find(&values, target)?;

    if json {
        writeln!(out, "{}", serde_json::to_string(&found)?)?;
        return Ok(out.flush()?);
    }
    for subset in found {
        let values = subset
            .values()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        writeln!(out, "{}", values.join(", "))?;
    }
    Ok(out.flush()?)
}

fn run(out: &mut impl Write, command: Command) -> Result<(), CliError> {
    match command {
        Command::Permute {
            sequence,
            strategy,
            numbered,
            json,
        } => permute(out, &sequence, strategy, numbered, json),
        Command::Subsets {
            sequence,
            target,
            strategy,
            no_pruning,
            json,
        } => subsets(out, &sequence, target, strategy, !no_pruning, json),
    }
}

fn main() {
    let cli = CliApp::parse();

    cli.logging.initialize_logging();
    log::debug!("Command: {:?}", cli.command);

    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    match run(&mut out, cli.command) {
        Ok(()) => (),
        Err(err) if err.is_broken_pipe() => log::debug!("Output closed early"),
        Err(err) => {
            drop(out);
            log::error!("error: {err}");
            std::process::exit(1);
        }
    }
}

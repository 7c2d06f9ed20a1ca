//! Find a size-minimal sorting network and print it as Rust code.
//!
//! Usage: sortnet <N> [--strategy permutation|output-set] [--threads K]
//!                    [--max-comparators M] [--var NAME] [--json] [-v...]
//!
//! Progress is logged to stderr; the result goes to stdout.

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use sortnet_search::{render, search, PruneStrategy, SearchConfig, MAX_CHANNELS};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "sortnet", version, about = "Search for a size-minimal sorting network")]
struct Cli {
    /// Number of channels (inputs) to sort
    #[arg(value_parser = parse_channels)]
    channels: usize,

    /// Equivalence used to prune each generation
    #[arg(short, long, value_enum, default_value_t = Strategy::Permutation)]
    strategy: Strategy,

    /// Worker threads (default: all cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Stop after networks of this many comparators
    #[arg(long)]
    max_comparators: Option<usize>,

    /// Variable name used in the rendered code
    #[arg(long, default_value = "v")]
    var: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    OutputSet,
    Permutation,
}

impl From<Strategy> for PruneStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::OutputSet => PruneStrategy::OutputSet,
            Strategy::Permutation => PruneStrategy::Permutation,
        }
    }
}

fn parse_channels(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{s}: {e}"))?;
    if n <= 1 {
        return Err(format!("channel count must be greater than 1 (got {n})"));
    }
    if n > MAX_CHANNELS {
        return Err(format!("channel count must be at most {MAX_CHANNELS} (got {n})"));
    }
    Ok(n)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = SearchConfig::default().with_strategy(cli.strategy.into());
    if let Some(threads) = cli.threads {
        config = config.with_max_threads(threads);
    }
    if let Some(limit) = cli.max_comparators {
        config = config.with_max_comparators(limit);
    }

    let outcome = match search(cli.channels, &config) {
        Ok(outcome) => outcome,
        Err(e) => {
            if e.is_internal() {
                error!(channels = cli.channels, "search invariant violated: {e}");
            }
            return Err(e).with_context(|| format!("search for {} channels failed", cli.channels));
        }
    };
    let net = &outcome.network;

    if cli.json {
        let doc = serde_json::json!({
            "channels": outcome.channels,
            "size": net.size(),
            "depth": net.depth(),
            "network": net,
            "generations": outcome.generations,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!(
            "{} channels: {} comparators, depth {}",
            outcome.channels,
            net.size(),
            net.depth()
        );
        println!();
        let name = format!("sort{}", outcome.channels);
        print!("{}", render::to_function(net, &name, &cli.var, outcome.channels));
    }
    Ok(())
}

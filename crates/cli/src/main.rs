use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use edmonds::api::{
    check_matching, gnp, maximum_matching_with, read_dimacs, write_dimacs, write_edges, Edge,
    EdgeList, GnpParams, Graph, MatchingCfg, NodeId, PerfectMatchingSearch, ReplayToken,
    SearchOutcome,
};
use edmonds::MatchingError;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod report;

use report::{RunRecord, RunReport, RunStats};

#[derive(Parser)]
#[command(name = "edmonds-cli")]
#[command(about = "Maximum-cardinality matching on DIMACS graphs")]
struct Cmd {
    /// Log filter (tracing `EnvFilter` syntax); `RUST_LOG` takes precedence when set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a DIMACS graph and print `p edge <n> <matching size>` per run
    Solve(SolveArgs),
    /// Write a generated graph in DIMACS format
    Generate(GenerateArgs),
    /// Verify a matching file against a graph file
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct SolveArgs {
    #[arg(long)]
    input: PathBuf,
    /// Require a perfect matching; fail if none exists
    #[arg(long)]
    perfect: bool,
    /// Relabel the graph with this seed before solving (repeatable)
    #[arg(long = "seed")]
    seeds: Vec<u64>,
    /// Write the matching of the first run in DIMACS format
    #[arg(long)]
    out: Option<PathBuf>,
    /// JSON run report (default: `<out stem>.report.json` next to `--out`)
    #[arg(long)]
    report: Option<PathBuf>,
    /// Also print the matching edges as `e` lines
    #[arg(long)]
    print_edges: bool,
    #[arg(long)]
    no_leaf_reduction: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Family {
    Path,
    Cycle,
    Complete,
    Star,
    Petersen,
    Queen,
    Gnp,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long, value_enum)]
    family: Family,
    /// Vertex count (board side for `queen`, leaf count for `star`)
    #[arg(long, default_value_t = 8)]
    size: usize,
    /// Edge probability for `gnp`
    #[arg(long, default_value_t = 0.1)]
    probability: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct CheckArgs {
    #[arg(long)]
    graph: PathBuf,
    #[arg(long)]
    matching: PathBuf,
    /// Expected matching size (e.g. a known optimum)
    #[arg(long)]
    expect: Option<usize>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cmd.log_level))
        .with_context(|| format!("invalid log filter {:?}", cmd.log_level))?;
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    match cmd.action {
        Action::Solve(args) => solve(&args).map(|_| ()),
        Action::Generate(args) => generate(&args),
        Action::Check(args) => check(&args).map(|_| ()),
    }
}

fn read_graph(path: &Path) -> Result<Graph> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_dimacs(BufReader::new(file)).with_context(|| format!("parsing {}", path.display()))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn solve_once(g: &Graph, perfect: bool, cfg: MatchingCfg) -> Result<(EdgeList, RunStats)> {
    if perfect {
        let mut search = PerfectMatchingSearch::new(g);
        let all = vec![true; g.num_nodes()];
        match search.run(&all) {
            SearchOutcome::Perfect => Ok((search.matching_edges(), search.stats().into())),
            SearchOutcome::Frustrated(witness) => {
                Err(MatchingError::NoPerfectMatching { witness }.into())
            }
        }
    } else {
        let sol = maximum_matching_with(g, cfg);
        Ok((sol.edges, sol.stats.into()))
    }
}

/// Translate edges of a relabelled graph back to input ids, normalized and sorted.
fn to_input_ids(edges: &[Edge], old_of_new: &[NodeId]) -> EdgeList {
    let mut mapped: EdgeList = edges
        .iter()
        .map(|&(a, b)| {
            let (x, y) = (old_of_new[a], old_of_new[b]);
            (x.min(y), x.max(y))
        })
        .collect();
    mapped.sort_unstable();
    mapped
}

/// Returns the matching size shared by all runs.
fn solve(args: &SolveArgs) -> Result<usize> {
    let graph = read_graph(&args.input)?;
    let n = graph.num_nodes();
    let mode = if args.perfect { "perfect" } else { "maximum" };
    tracing::info!(
        input = %args.input.display(),
        nodes = n,
        edges = graph.num_edges(),
        mode,
        "solve"
    );
    let cfg = MatchingCfg {
        leaf_reduction: !args.no_leaf_reduction,
    };
    let seeds: Vec<Option<u64>> = if args.seeds.is_empty() {
        vec![None]
    } else {
        args.seeds.iter().copied().map(Some).collect()
    };

    let mut runs = Vec::with_capacity(seeds.len());
    let mut first_edges: Option<EdgeList> = None;
    for seed in seeds {
        let shuffled = seed.map(|s| graph.shuffled(s));
        let target = shuffled.as_ref().map_or(&graph, |(g, _)| g);
        let start = Instant::now();
        let (edges, stats) = solve_once(target, args.perfect, cfg)
            .with_context(|| format!("solving {} (seed {seed:?})", args.input.display()))?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
        let edges = match &shuffled {
            Some((_, old_of_new)) => to_input_ids(&edges, old_of_new),
            None => edges,
        };
        check_matching(&graph, &edges).context("solver returned an invalid matching")?;
        tracing::info!(
            seed = ?seed,
            matching = edges.len(),
            elapsed_ms,
            trees = stats.trees,
            blossoms = stats.blossoms,
            "run"
        );

        if args.print_edges {
            write_edges(n, &edges, std::io::stdout().lock())?;
        } else {
            println!("p edge {} {}", n, edges.len());
        }
        if let Some(first) = &first_edges {
            if first.len() != edges.len() {
                bail!(
                    "seed {seed:?} found {} matching edges, the first run found {}",
                    edges.len(),
                    first.len()
                );
            }
        }
        runs.push(RunRecord {
            seed,
            matching_size: edges.len(),
            elapsed_ms,
            stats,
        });
        first_edges.get_or_insert(edges);
    }
    let first = first_edges.unwrap_or_default();

    if let Some(out) = &args.out {
        write_edges(n, &first, create(out)?)
            .with_context(|| format!("writing {}", out.display()))?;
        tracing::info!(out = %out.display(), "matching written");
    }
    let report_path = args
        .report
        .clone()
        .or_else(|| args.out.as_deref().map(report::sidecar_path));
    if let Some(path) = report_path {
        let run_report = RunReport {
            code_rev: report::current_git_rev(),
            input: args.input.display().to_string(),
            mode,
            nodes: n,
            edges: graph.num_edges(),
            runs,
        };
        report::write_report(&path, &run_report)?;
        tracing::info!(report = %path.display(), "report written");
    }
    Ok(first.len())
}

fn generate(args: &GenerateArgs) -> Result<()> {
    use edmonds::api::{complete, cycle, path, petersen, queen, star};
    tracing::info!(family = ?args.family, size = args.size, seed = args.seed, "generate");
    let g = match args.family {
        Family::Path => path(args.size),
        Family::Cycle => cycle(args.size),
        Family::Complete => complete(args.size),
        Family::Star => star(args.size),
        Family::Petersen => petersen(),
        Family::Queen => queen(args.size),
        Family::Gnp => gnp(
            GnpParams {
                nodes: args.size,
                edge_probability: args.probability,
            },
            ReplayToken {
                seed: args.seed,
                index: 0,
            },
        )?,
    };
    write_dimacs(&g, create(&args.out)?)
        .with_context(|| format!("writing {}", args.out.display()))?;
    tracing::info!(
        out = %args.out.display(),
        nodes = g.num_nodes(),
        edges = g.num_edges(),
        "graph written"
    );
    Ok(())
}

/// Returns the verified matching size.
fn check(args: &CheckArgs) -> Result<usize> {
    let graph = read_graph(&args.graph)?;
    let matching = read_graph(&args.matching)?;
    if matching.num_nodes() != graph.num_nodes() {
        bail!(
            "matching file announces {} vertices, the graph has {}",
            matching.num_nodes(),
            graph.num_nodes()
        );
    }
    let mut edges: EdgeList = matching.edges().collect();
    edges.sort_unstable();
    let (matching_path, graph_path) = (args.matching.display(), args.graph.display());
    check_matching(&graph, &edges)
        .with_context(|| format!("{matching_path} is not a matching of {graph_path}"))?;
    if let Some(expected) = args.expect {
        if edges.len() != expected {
            bail!("matching has {} edges, expected {}", edges.len(), expected);
        }
    }
    println!("ok: {} edges", edges.len());
    tracing::info!(size = edges.len(), expect = ?args.expect, "check");
    Ok(edges.len())
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use undirected_sssp::io::{report_lines, signed_distances, GraphFile, LoadError, UNREACHABLE};
use undirected_sssp::{shortest_paths, DuplicateEdgePolicy, Representation};

/// Print shortest distances from one vertex of an undirected graph
#[derive(Debug, Parser)]
#[command(name = "sssp", version, about)]
struct Args {
    /// JSON graph file: {"vertices": [...], "edges": [[u, v, w], ...], "source": s}
    graph: PathBuf,

    /// Source vertex (overrides the file's "source")
    #[arg(short, long)]
    source: Option<i64>,

    /// Use the dense matrix representation
    #[arg(long)]
    dense: bool,

    /// Keep the lightest of repeated edges instead of the last one
    #[arg(long)]
    min_weight_duplicates: bool,

    /// Print unreachable vertices with distance -1
    #[arg(long)]
    unreachable_as_negative: bool,

    /// Print a JSON object instead of text lines
    #[arg(long)]
    json: bool,
}

fn run(args: Args) -> Result<(), LoadError> {
    let mut graph_file = GraphFile::from_path(&args.graph)?;
    if args.min_weight_duplicates {
        graph_file.duplicate_policy = DuplicateEdgePolicy::MinWeight;
    }

    let source = graph_file.query_source(args.source);

    let representation = if args.dense {
        Representation::Dense
    } else {
        Representation::Sparse
    };
    let graph = graph_file.to_graph(representation)?;
    let distances = shortest_paths(&source, &*graph)?;

    if args.json {
        let view = if args.unreachable_as_negative {
            signed_distances(&distances, graph.vertices())
        } else {
            distances.iter().map(|(v, d)| (*v, d)).collect()
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        let unreachable = UNREACHABLE.to_string();
        let marker = args.unreachable_as_negative.then_some(unreachable.as_str());
        for line in report_lines(&distances, graph.vertices(), marker) {
            println!("{}", line);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

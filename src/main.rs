use std::path::{Path, PathBuf};
use std::process;

use structopt::StructOpt;

use three_edge_connected::{algorithm, Error, Graph};

/// Finds the 3-edge-connected components of a graph given in the
/// `v_i>n1>n2>...` adjacency format.
#[derive(StructOpt)]
#[structopt(name = "three-edge-connected")]
struct Opt {
    /// Path to the graph file: decimal vertex count on the first line,
    /// then one `v_i>n1>n2>...` adjacency line per vertex.
    #[structopt(parse(from_os_str))]
    path: PathBuf,
}

fn run(path: &Path) -> Result<(), Error> {
    let text = std::fs::read_to_string(path).map_err(|err| Error::MalformedInput {
        line: 0,
        detail: format!("could not read {}: {}", path.display(), err),
    })?;

    let graph = Graph::parse(&text)?;
    log::debug!("read graph from {}", path.display());

    let components = algorithm::find_components(&graph);
    for component in &components {
        let row: Vec<String> = component.iter().map(|v| v.to_string()).collect();
        println!("{}", row.join(" "));
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    if let Err(err) = run(&opt.path) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

use city_routes::display::{AdjacencyView, CheapestTripView, MatrixView, ShortestPathsView};
use city_routes::{CityGraph, NetworkError};

use std::process::ExitCode;
use clap::{ArgAction, Parser};
use log::{error, info, Level};


const CITIES: [&str; 4] = ["Riverside", "Paris", "Hemet", "Moreno Valley"];

const ROUTES: [(&str, &str, u32); 6] = [
    ("Riverside", "Paris", 24),
    ("Riverside", "Hemet", 33),
    ("Riverside", "Moreno Valley", 16),
    ("Paris", "Hemet", 30),
    ("Paris", "Moreno Valley", 18),
    ("Hemet", "Moreno Valley", 26),
];


/// Print the route network, shortest paths from one city and the cheapest trip
#[derive(Parser, Debug)]
#[command(name = "city-routes", version, about)]
struct Cli {
    /// City to compute shortest paths from
    #[arg(short, long, default_value = "Riverside")]
    source: String,

    /// Log verbosity: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}


fn reference_network() -> Result<CityGraph<u32>, NetworkError> {
    let mut graph = CityGraph::new(CITIES)?;
    for (a, b, weight) in ROUTES {
        graph.add_edge(a, b, weight)?;
    }
    Ok(graph)
}

/// Build the full report; nothing is produced if any query fails
fn report(cli: &Cli) -> Result<String, NetworkError> {
    let graph = reference_network()?;
    info!("{} cities, {} routes", graph.len(), graph.edge_count());

    let paths = graph.shortest_paths(&cli.source)?;

    Ok(format!(
        "{}{}\n{}\n{}",
        MatrixView(&graph),
        AdjacencyView(&graph),
        ShortestPathsView(&paths),
        CheapestTripView(graph.cheapest_edge()),
    ))
}

fn run(cli: &Cli) -> Result<(), NetworkError> {
    print!("{}", report(cli)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("failed to initialise logger: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_network() {
        let graph = reference_network().unwrap();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edge_count(), 6);

        let paths = graph.shortest_paths("Riverside").unwrap();
        assert_eq!(paths.distance_to("Moreno Valley").unwrap(), Some(16));
        assert_eq!(paths.path_to("Hemet").unwrap(), vec!["Riverside", "Hemet"]);

        let trip = CheapestTripView(graph.cheapest_edge()).to_string();
        assert_eq!(trip, "Low-cost Trip: Riverside -> Moreno Valley with cost: 16\n");
    }

    #[test]
    fn test_unknown_source_fails() {
        let cli = Cli::parse_from(["city-routes", "--source", "Nowhere"]);
        assert_eq!(run(&cli), Err(NetworkError::UnknownLocation("Nowhere".to_string())));
    }

    #[test]
    fn test_report_sections_in_order() {
        let cli = Cli::parse_from(["city-routes", "--source", "Hemet"]);
        let text = report(&cli).unwrap();

        let matrix = text.find("Adjacency Matrix:").unwrap();
        let list = text.find("Adjacency List:").unwrap();
        let paths = text.find("Shortest Paths from Hemet:").unwrap();
        let trip = text.find("Low-cost Trip:").unwrap();
        assert!(matrix == 0 && matrix < list && list < paths && paths < trip);
        assert!(text.contains("\nHemet: 0 (Path: Hemet)\n"));
    }

    #[test]
    fn test_unknown_source_produces_no_report() {
        let cli = Cli::parse_from(["city-routes", "--source", "Nowhere"]);
        assert_eq!(report(&cli), Err(NetworkError::UnknownLocation("Nowhere".to_string())));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["city-routes", "-vv"]);
        assert_eq!(cli.source, "Riverside");
        assert_eq!(cli.verbose, 2);
    }
}

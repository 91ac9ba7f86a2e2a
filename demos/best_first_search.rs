//! Runs a best-first search over a small hardcoded Graph and prints what happened.
//!
//! ```text
//! cargo run --example best_first_search [START] [GOAL]
//! MY_LOG_LEVEL=trace cargo run --example best_first_search --features log
//! ```

use best_first_search::prelude::*;
use env_logger::Env;
use log::{error, info};

use std::collections::HashMap;

fn main() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info")
        .write_style_or("MY_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let graph: Graph<&str> = [
        ("A", vec![("B", 6), ("C", 3)]),
        ("B", vec![("D", 2), ("E", 5)]),
        ("C", vec![("F", 4)]),
        ("D", vec![]),
        ("E", vec![("G", 2)]),
        ("F", vec![("G", 5)]),
        ("G", vec![]),
    ]
    .into_iter()
    .collect();

    // estimated cost to reach G
    let heuristic: HashMap<&str, Cost> = [
        ("A", 10),
        ("B", 8),
        ("C", 5),
        ("D", 7),
        ("E", 3),
        ("F", 6),
        ("G", 0),
    ]
    .into_iter()
    .collect();

    let mut args = std::env::args().skip(1);
    let start = args.next().unwrap_or_else(|| "A".to_owned());
    let goal = args.next().unwrap_or_else(|| "G".to_owned());

    match best_first_search(&graph, &heuristic, &start.as_str(), &goal.as_str()) {
        Ok(result) => {
            info!("Best First Search Path: {}", result);
            match result.path() {
                Some(path) => info!("Goal reached via {}", path),
                None => info!("Goal {} cannot be reached from {}", goal, start),
            }
        }
        Err(err) => {
            error!("invalid graph supplied: {}", err);
            std::process::exit(1);
        }
    }
}

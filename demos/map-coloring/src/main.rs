//! Map Coloring Example
//!
//! Colors the US states and the Australian states and territories so that
//! no two bordering regions share a color. For each map the greedy estimate
//! fixes the palette size, then every pruning strategy is benchmarked over
//! shuffled node orders and the averages are compared.
//!
//! Reads `colorforge.toml` from the working directory when present.

use std::error::Error;

use colorforge::maps::{au_states, us_states};
use colorforge::render::{to_dot, to_table};
use colorforge::{
    estimate_chromatic_number, export_reports, BenchmarkConfig, BenchmarkResult,
    BenchmarkSettings, Graph, MarkdownReport, Palette, SearchBuilder, SolverConfig,
    StrategyMatrix, TerminationBuilder,
};

const DEFAULT_PALETTE: [&str; 5] = ["yellow", "green", "red", "blue", "magenta"];

fn main() -> Result<(), Box<dyn Error>> {
    colorforge::console::init();

    let config = SolverConfig::load("colorforge.toml").unwrap_or_default();
    let candidates = Palette::new(
        config
            .palette
            .clone()
            .unwrap_or_else(|| DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()),
    )?;

    let mut results = run_map(&config, "US", &us_states()?, &candidates)?;
    results.extend(run_map(&config, "AU", &au_states()?, &candidates)?);

    let settings = config.benchmark.clone().unwrap_or_default();
    let report_config = BenchmarkConfig::from_settings("maps", &settings, config.random_seed);
    let refs: Vec<_> = results.iter().collect();
    for path in export_reports(&report_config, &refs)? {
        println!("Wrote {path}");
    }
    Ok(())
}

/// Estimates, benchmarks and renders one map.
fn run_map(
    config: &SolverConfig,
    name: &str,
    graph: &Graph<&'static str>,
    candidates: &Palette<String>,
) -> Result<Vec<BenchmarkResult>, Box<dyn Error>> {
    let estimate = estimate_chromatic_number(graph);
    let palette = candidates.truncated(estimate);
    println!(
        "\n{name}: {} regions, {} borders, estimated chromatic number {estimate}",
        graph.node_count(),
        graph.edge_count(),
    );
    println!("Palette: {:?}", palette.colors());

    let settings = config.benchmark.clone().unwrap_or_default();
    let results = benchmark(config, name, graph, &palette, &settings)?;
    for result in &results {
        println!(
            "  {:<40} {:>12.1} backtracks {:>10.3} ms  ({}/{} solved)",
            result.strategy_name,
            result.avg_backtracks(),
            result.avg_solve_time().as_secs_f64() * 1000.0,
            result.solved_count(),
            result.run_count(),
        );
    }
    let refs: Vec<_> = results.iter().collect();
    println!("\n{}", MarkdownReport::comparison(&refs));

    // One configured solve in input order for the rendered coloring.
    let result = SearchBuilder::build(config).solve(graph, &palette);
    match result.coloring() {
        Some(coloring) => {
            print!("{}", to_table(coloring));
            let path = format!("{}.dot", name.to_lowercase());
            std::fs::write(&path, to_dot(graph, coloring))?;
            println!("Wrote {path}");
        }
        None => println!("No coloring found ({})", result.outcome.label()),
    }
    Ok(results)
}

fn benchmark(
    config: &SolverConfig,
    name: &str,
    graph: &Graph<&'static str>,
    palette: &Palette<String>,
    settings: &BenchmarkSettings,
) -> Result<Vec<BenchmarkResult>, Box<dyn Error>> {
    let bench_config = BenchmarkConfig::from_settings(name, settings, config.random_seed);
    let matrix = StrategyMatrix::standard().with_heuristic_scope(config.search.heuristic_scope);
    let results = matrix.run_with(&bench_config, name, graph, palette, |search| {
        search.with_termination(TerminationBuilder::build(config.termination.as_ref()))
    })?;
    Ok(results)
}

//! Report generation for benchmark results.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::BenchmarkConfig;
use crate::error::BenchmarkError;
use crate::result::BenchmarkResult;

/// CSV exporter for benchmark results.
///
/// One row per run: strategy, problem, run index, node-order seed, solve
/// time, backtracks, selections and whether the run solved.
///
/// # Example
///
/// ```
/// use colorforge_benchmark::{BenchmarkResult, BenchmarkRun, CsvExporter};
/// use colorforge_solver::SearchFlags;
/// use std::time::Duration;
///
/// let mut result = BenchmarkResult::new("Test", "vanilla", "AU", SearchFlags::VANILLA);
/// result.add_run(BenchmarkRun {
///     run_index: 0,
///     node_order_seed: Some(17),
///     solve_time: Duration::from_millis(100),
///     backtracks: 12,
///     selections: 30,
///     solved: true,
/// });
///
/// let csv = CsvExporter::to_string(&[&result]);
/// assert!(csv.starts_with("strategy,problem,run_index"));
/// assert!(csv.contains("vanilla,AU,0,17,100.000,12,30,true"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    const HEADER: &'static str =
        "strategy,problem,run_index,node_order_seed,solve_time_ms,backtracks,selections,solved";

    /// Exports benchmark results to a CSV string.
    pub fn to_string(results: &[&BenchmarkResult]) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::render(&mut output, results);
        output
    }

    fn render(output: &mut String, results: &[&BenchmarkResult]) -> fmt::Result {
        writeln!(output, "{}", Self::HEADER)?;
        for result in results {
            for run in &result.runs {
                let seed = run
                    .node_order_seed
                    .map(|seed| seed.to_string())
                    .unwrap_or_default();
                writeln!(
                    output,
                    "{},{},{},{},{:.3},{},{},{}",
                    csv_field(&result.strategy_name),
                    csv_field(&result.problem_name),
                    run.run_index,
                    seed,
                    run.solve_time.as_secs_f64() * 1000.0,
                    run.backtracks,
                    run.selections,
                    run.solved,
                )?;
            }
        }
        Ok(())
    }

    /// Exports benchmark results to a CSV file.
    pub fn to_file(
        results: &[&BenchmarkResult],
        path: impl AsRef<Path>,
    ) -> Result<(), BenchmarkError> {
        fs::write(path, Self::to_string(results))?;
        Ok(())
    }

    /// Writes benchmark results as CSV to a writer.
    pub fn write<W: Write>(
        results: &[&BenchmarkResult],
        mut writer: W,
    ) -> Result<(), BenchmarkError> {
        writer.write_all(Self::to_string(results).as_bytes())?;
        Ok(())
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Markdown report generator.
///
/// # Example
///
/// ```
/// use colorforge_benchmark::{BenchmarkResult, MarkdownReport};
/// use colorforge_solver::SearchFlags;
///
/// let result = BenchmarkResult::new("Test", "vanilla", "AU", SearchFlags::VANILLA);
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Benchmark: Test"));
/// assert!(md.contains("*No runs completed.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report for one strategy.
    pub fn to_string(result: &BenchmarkResult) -> String {
        let mut output = String::new();
        let _ = Self::render(&mut output, result);
        output
    }

    fn render(output: &mut String, result: &BenchmarkResult) -> fmt::Result {
        writeln!(output, "# Benchmark: {}", result.name)?;
        writeln!(output)?;
        writeln!(output, "- **Strategy**: {} (`{}`)", result.strategy_name, result.flags)?;
        writeln!(output, "- **Problem**: {}", result.problem_name)?;
        writeln!(output, "- **Runs**: {}", result.run_count())?;
        writeln!(output)?;

        writeln!(output, "## Summary")?;
        writeln!(output)?;
        if result.runs.is_empty() {
            writeln!(output, "*No runs completed.*")?;
            return Ok(());
        }

        writeln!(output, "| Metric | Value |")?;
        writeln!(output, "|--------|-------|")?;
        writeln!(output, "| Solved | {}/{} |", result.solved_count(), result.run_count())?;
        writeln!(output, "| Avg Backtracks | {:.1} |", result.avg_backtracks())?;
        if let (Some(min), Some(max)) = (result.min_backtracks(), result.max_backtracks()) {
            writeln!(output, "| Min Backtracks | {min} |")?;
            writeln!(output, "| Max Backtracks | {max} |")?;
        }
        writeln!(output, "| Avg Time | {:.3} ms |", millis(result.avg_solve_time()))?;
        writeln!(output, "| Min Time | {:.3} ms |", millis(result.min_solve_time()))?;
        writeln!(output, "| Max Time | {:.3} ms |", millis(result.max_solve_time()))?;
        writeln!(output)?;

        writeln!(output, "## Run Details")?;
        writeln!(output)?;
        writeln!(output, "| Run | Seed | Time (ms) | Backtracks | Solved |")?;
        writeln!(output, "|-----|------|-----------|------------|--------|")?;
        for run in &result.runs {
            let seed = run
                .node_order_seed
                .map(|seed| seed.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                output,
                "| {} | {} | {:.3} | {} | {} |",
                run.run_index,
                seed,
                millis(run.solve_time),
                run.backtracks,
                if run.solved { "yes" } else { "no" },
            )?;
        }
        Ok(())
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(result: &BenchmarkResult, path: impl AsRef<Path>) -> Result<(), BenchmarkError> {
        fs::write(path, Self::to_string(result))?;
        Ok(())
    }

    /// Writes a Markdown report to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, mut writer: W) -> Result<(), BenchmarkError> {
        writer.write_all(Self::to_string(result).as_bytes())?;
        Ok(())
    }

    /// Generates a comparison table for several strategies.
    ///
    /// # Example
    ///
    /// ```
    /// use colorforge_benchmark::{BenchmarkResult, MarkdownReport};
    /// use colorforge_solver::SearchFlags;
    ///
    /// let vanilla = BenchmarkResult::new("US", "vanilla", "US", SearchFlags::VANILLA);
    /// let fc = BenchmarkResult::new("US", "fc", "US", SearchFlags::new(true, false, false));
    ///
    /// let comparison = MarkdownReport::comparison(&[&vanilla, &fc]);
    /// assert!(comparison.contains("## Comparison"));
    /// assert!(comparison.contains("| fc | US |"));
    /// ```
    pub fn comparison(results: &[&BenchmarkResult]) -> String {
        let mut output = String::new();
        let _ = Self::render_comparison(&mut output, results);
        output
    }

    fn render_comparison(output: &mut String, results: &[&BenchmarkResult]) -> fmt::Result {
        writeln!(output, "## Comparison")?;
        writeln!(output)?;
        writeln!(
            output,
            "| Strategy | Problem | Solved | Avg Backtracks | Avg Time (ms) |"
        )?;
        writeln!(
            output,
            "|----------|---------|--------|----------------|---------------|"
        )?;
        for result in results {
            writeln!(
                output,
                "| {} | {} | {}/{} | {:.1} | {:.3} |",
                result.strategy_name,
                result.problem_name,
                result.solved_count(),
                result.run_count(),
                result.avg_backtracks(),
                millis(result.avg_solve_time()),
            )?;
        }
        Ok(())
    }
}

fn millis(duration: std::time::Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Writes the reports requested by `config`.
///
/// The CSV export gets one row per run of every result; the Markdown export
/// gets the comparison table. Returns the paths written, CSV first.
pub fn export_reports(
    config: &BenchmarkConfig,
    results: &[&BenchmarkResult],
) -> Result<Vec<String>, BenchmarkError> {
    let mut written = Vec::new();
    if let Some(path) = config.csv_output_path() {
        CsvExporter::to_file(results, path)?;
        written.push(path.to_string());
    }
    if let Some(path) = config.markdown_output_path() {
        fs::write(path, MarkdownReport::comparison(results))?;
        written.push(path.to_string());
    }
    Ok(written)
}

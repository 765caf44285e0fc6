//! Colorful console output for search events.
//!
//! Provides a custom `tracing` layer that formats solver and benchmark
//! events with colors. Enabled by the `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "colorforge_solver=info,colorforge_benchmark=info,colorforge=info";

/// Initializes console output.
///
/// Safe to call multiple times; only the first call has effect. `RUST_LOG`
/// overrides the default filter.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed by the host program.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ColorConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
  ____      _            _____
 / ___|___ | | ___  _ __|  ___|__  _ __ __ _  ___
| |   / _ \| |/ _ \| '__| |_ / _ \| '__/ _` |/ _ \
| |__| (_) | | (_) | |  |  _| (_) | | | (_| |  __/
 \____\___/|_|\___/|_|  |_|  \___/|_|  \__, |\___|
                                       |___/
"#;

    let version_line = format!(
        "              v{} - Backtracking Graph Coloring\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats ColorForge events with colors.
pub struct ColorConsoleLayer;

impl<S: Subscriber> Layer<S> for ColorConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("colorforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{output}");
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    flags: Option<String>,
    outcome: Option<String>,
    strategy: Option<String>,
    problem: Option<String>,
    node_count: Option<u64>,
    edge_count: Option<u64>,
    palette_size: Option<u64>,
    max_degree: Option<u64>,
    bound: Option<u64>,
    backtracks: Option<u64>,
    nodes: Option<u64>,
    duration_ms: Option<u64>,
    runs: Option<u64>,
    solved: Option<u64>,
    avg_backtracks: Option<f64>,
    avg_time_ms: Option<f64>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "flags" => self.flags = Some(value),
            "outcome" => self.outcome = Some(value),
            "strategy" => self.strategy = Some(value),
            "problem" => self.problem = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let text = format!("{value:?}");
        self.set_text(field.name(), text.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "node_count" => self.node_count = Some(value),
            "edge_count" => self.edge_count = Some(value),
            "palette_size" => self.palette_size = Some(value),
            "max_degree" => self.max_degree = Some(value),
            "bound" => self.bound = Some(value),
            "backtracks" => self.backtracks = Some(value),
            "nodes" => self.nodes = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "runs" => self.runs = Some(value),
            "solved" => self.solved = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "avg_backtracks" => self.avg_backtracks = Some(value),
            "avg_time_ms" => self.avg_time_ms = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("estimate") => format_estimate(v),
        Some("solve_start") => format_solve_start(v),
        Some("solve_end") => format_solve_end(v),
        Some("benchmark_start") => format_benchmark_start(v),
        Some("benchmark_end") => format_benchmark_end(v),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_estimate(v: &EventVisitor) -> String {
    format!(
        "{} {} {} chromatic number estimate ({}) for {} nodes, max degree ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Estimator]".bright_cyan(),
        count(v.bound).bright_magenta().bold(),
        count(v.node_count).bright_yellow(),
        count(v.max_degree).bright_yellow(),
    )
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} node count ({}), edge count ({}), palette size ({}), strategy ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Search]".bright_cyan(),
        count(v.node_count).bright_yellow(),
        count(v.edge_count).bright_yellow(),
        count(v.palette_size).bright_yellow(),
        v.flags.as_deref().unwrap_or("vanilla").white().bold(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let outcome = v.outcome.as_deref().unwrap_or("unknown");
    let outcome = match outcome {
        "solved" => outcome.bright_green().bold().to_string(),
        "terminated" => outcome.yellow().bold().to_string(),
        _ => outcome.bright_red().bold().to_string(),
    };
    format!(
        "{} {} {} {}: time spent ({}), backtracks ({}), nodes ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Search]".bright_cyan(),
        outcome,
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.backtracks).bright_magenta().bold(),
        count(v.nodes).white(),
    )
}

fn format_benchmark_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} on {} ({} runs)",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Benchmark]".bright_cyan(),
        v.strategy.as_deref().unwrap_or("?").white().bold(),
        v.problem.as_deref().unwrap_or("?").white(),
        count(v.runs).yellow(),
    )
}

fn format_benchmark_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} averages: backtracks ({:.1}), time ({:.3} ms), solved ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Benchmark]".bright_cyan(),
        v.strategy.as_deref().unwrap_or("?").white().bold(),
        v.avg_backtracks.unwrap_or(0.0).bright_magenta().bold(),
        v.avg_time_ms.unwrap_or(0.0).yellow(),
        count(v.solved).white(),
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{secs:5}.{millis:03}")
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(15), "15ms");
        assert_eq!(format_duration_ms(2500), "2.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("assign".to_string()),
            ..Default::default()
        };
        assert!(format_event(&visitor).is_empty());
    }

    #[test]
    fn test_solve_end_mentions_backtracks() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            outcome: Some("solved".to_string()),
            backtracks: Some(12_345),
            ..Default::default()
        };
        assert!(format_event(&visitor).contains("12,345"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}

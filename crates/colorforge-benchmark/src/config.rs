//! Benchmark configuration.

use colorforge_config::BenchmarkSettings;

/// Configuration for a benchmark run.
///
/// Controls warmup iterations, measurement runs, node-order shuffling and
/// optional output paths.
///
/// # Example
///
/// ```
/// use colorforge_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("My Benchmark")
///     .with_warmup_count(3)
///     .with_run_count(10);
///
/// assert_eq!(config.name(), "My Benchmark");
/// assert_eq!(config.warmup_count(), 3);
/// assert_eq!(config.run_count(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    warmup_count: usize,
    run_count: usize,
    seed: u64,
    shuffle_nodes: bool,
    csv_output_path: Option<String>,
    markdown_output_path: Option<String>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - warmup_count: 0
    /// - run_count: 5
    /// - seed: 0
    /// - shuffle_nodes: true
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warmup_count: 0,
            run_count: 5,
            seed: 0,
            shuffle_nodes: true,
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    /// Creates a configuration from the `[benchmark]` section of a config
    /// file.
    ///
    /// # Example
    ///
    /// ```
    /// use colorforge_benchmark::BenchmarkConfig;
    /// use colorforge_config::BenchmarkSettings;
    ///
    /// let settings = BenchmarkSettings {
    ///     run_count: 8,
    ///     shuffle_nodes: false,
    ///     ..Default::default()
    /// };
    /// let config = BenchmarkConfig::from_settings("AU", &settings, Some(7));
    /// assert_eq!(config.run_count(), 8);
    /// assert_eq!(config.seed(), 7);
    /// assert!(!config.shuffle_nodes());
    /// ```
    pub fn from_settings(
        name: impl Into<String>,
        settings: &BenchmarkSettings,
        seed: Option<u64>,
    ) -> Self {
        Self {
            name: name.into(),
            warmup_count: settings.warmup_count,
            run_count: settings.run_count,
            seed: seed.unwrap_or(0),
            shuffle_nodes: settings.shuffle_nodes,
            csv_output_path: settings.csv_output.clone(),
            markdown_output_path: settings.markdown_output.clone(),
        }
    }

    /// Sets the number of warmup iterations (not measured).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the number of measurement runs.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count;
        self
    }

    /// Sets the seed the node orders are derived from.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables node-order shuffling.
    pub fn with_shuffle_nodes(mut self, shuffle: bool) -> Self {
        self.shuffle_nodes = shuffle;
        self
    }

    /// Sets the output path for CSV export.
    ///
    /// # Example
    ///
    /// ```
    /// use colorforge_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test")
    ///     .with_csv_output("results.csv");
    /// assert_eq!(config.csv_output_path(), Some("results.csv"));
    /// ```
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    pub fn run_count(&self) -> usize {
        self.run_count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle_nodes(&self) -> bool {
        self.shuffle_nodes
    }

    /// Returns the CSV output path, if set.
    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    /// Returns the Markdown output path, if set.
    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Benchmark")
    }
}
